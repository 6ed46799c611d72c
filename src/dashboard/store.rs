use crate::dashboard::catalog::WidgetCatalog;
use crate::dashboard::prefs::{reconcile, WidgetPreferences};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Storage key the dashboard layout is written under.
pub const WIDGET_PREFS_KEY: &str = "dashboard-widget-prefs";

/// Key-value persistence used by [`PreferenceStore`].
pub trait StorageBackend: Send {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// In-process map. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("memory backend poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("memory backend poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend for non-interactive rendering: nothing is read, writes vanish.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl StorageBackend for NullBackend {
    fn read(&self, _key: &str) -> anyhow::Result<Option<String>> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Loads and saves [`WidgetPreferences`] through a [`StorageBackend`].
///
/// Neither direction reports errors to the caller: a failed load yields the
/// catalog defaults and a failed save is logged and dropped.
pub struct PreferenceStore {
    backend: Box<dyn StorageBackend>,
    key: String,
    catalog: Arc<WidgetCatalog>,
}

impl PreferenceStore {
    pub fn new(backend: Box<dyn StorageBackend>, catalog: Arc<WidgetCatalog>) -> Self {
        Self::with_key(backend, catalog, WIDGET_PREFS_KEY)
    }

    pub fn with_key(
        backend: Box<dyn StorageBackend>,
        catalog: Arc<WidgetCatalog>,
        key: &str,
    ) -> Self {
        Self {
            backend,
            key: key.to_string(),
            catalog,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored layout as-is, falling back to defaults.
    pub fn load(&self) -> WidgetPreferences {
        let content = match self.backend.read(&self.key) {
            Ok(Some(content)) => content,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored widget preferences");
                return self.catalog.default_preferences();
            }
            Err(e) => {
                tracing::warn!(key = %self.key, "failed to read widget preferences: {e}");
                return self.catalog.default_preferences();
            }
        };
        if content.trim().is_empty() {
            return self.catalog.default_preferences();
        }
        match serde_json::from_str(&content) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(key = %self.key, "stored widget preferences unreadable: {e}");
                self.catalog.default_preferences()
            }
        }
    }

    pub fn load_reconciled(&self) -> WidgetPreferences {
        reconcile(&self.load(), &self.catalog)
    }

    pub fn save(&self, prefs: &WidgetPreferences) {
        let json = match serde_json::to_string(prefs) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("failed to serialize widget preferences: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.write(&self.key, &json) {
            tracing::warn!(key = %self.key, "failed to save widget preferences: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(backend: MemoryBackend) -> PreferenceStore {
        PreferenceStore::new(Box::new(backend), Arc::new(WidgetCatalog::home_care()))
    }

    #[test]
    fn missing_value_loads_defaults() {
        let store = store_with(MemoryBackend::new());
        assert_eq!(store.load(), WidgetCatalog::home_care().default_preferences());
    }

    #[test]
    fn garbage_loads_defaults() {
        let backend = MemoryBackend::new();
        backend.insert(WIDGET_PREFS_KEY, "{not json");
        let store = store_with(backend.clone());
        assert_eq!(store.load(), WidgetCatalog::home_care().default_preferences());

        backend.insert(WIDGET_PREFS_KEY, "   ");
        assert_eq!(store.load(), WidgetCatalog::home_care().default_preferences());
    }

    #[test]
    fn save_then_load_round_trips() {
        let backend = MemoryBackend::new();
        let store = store_with(backend.clone());
        let mut prefs = WidgetCatalog::home_care().default_preferences();
        prefs.order.rotate_left(2);
        prefs.hidden.insert("charts".into());
        store.save(&prefs);

        assert!(backend.get(WIDGET_PREFS_KEY).is_some());
        assert_eq!(store.load(), prefs);
        assert_eq!(store.load_reconciled(), prefs);
    }

    #[test]
    fn null_backend_forgets_writes() {
        let store = PreferenceStore::new(
            Box::new(NullBackend),
            Arc::new(WidgetCatalog::home_care()),
        );
        let mut prefs = store.load();
        prefs.hidden.insert("tasks".into());
        store.save(&prefs);
        assert!(store.load().hidden.is_empty());
    }

    #[test]
    fn file_backend_reports_missing_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("nested"));
        assert!(backend.read("absent").unwrap().is_none());
        backend.write("present", "{}").unwrap();
        assert_eq!(backend.read("present").unwrap().as_deref(), Some("{}"));
        assert!(!backend.path_for("present").with_extension("json.tmp").exists());
    }
}
