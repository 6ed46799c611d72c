use crate::dashboard::catalog::WidgetCatalog;
use crate::dashboard::store::{
    FileBackend, NullBackend, PreferenceStore, StorageBackend, WIDGET_PREFS_KEY,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn default_storage_key() -> String {
    WIDGET_PREFS_KEY.into()
}

fn default_persist() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Directory holding per-user preference files.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub debug_logging: bool,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// When false, layout changes last only for the running session.
    #[serde(default = "default_persist")]
    pub persist: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            debug_logging: false,
            storage_key: default_storage_key(),
            persist: default_persist(),
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// The storage key becomes a file name under the data directory, so it
    /// must be a single plain path component.
    pub fn validate(&self) -> anyhow::Result<()> {
        let key = self.storage_key.as_str();
        if key.trim().is_empty() {
            anyhow::bail!("storage_key must not be empty");
        }
        if key.contains(['/', '\\']) || key.contains("..") {
            anyhow::bail!("storage_key {key:?} must not contain path separators or '..'");
        }
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn resolved_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs_next::data_dir()
            .map(|d| d.join("care_dashboard"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn preference_store(&self, catalog: Arc<WidgetCatalog>) -> PreferenceStore {
        let backend: Box<dyn StorageBackend> = if self.persist {
            let dir = self.resolved_data_dir();
            tracing::debug!(dir = %dir.display(), "widget preferences stored on disk");
            Box::new(FileBackend::new(dir))
        } else {
            Box::new(NullBackend)
        };
        PreferenceStore::with_key(backend, catalog, &self.storage_key)
    }
}
