use crate::dashboard::catalog::WidgetCatalog;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Persisted dashboard layout: render order plus the set of hidden widgets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WidgetPreferences {
    #[serde(default)]
    pub order: Vec<String>,
    #[serde(default)]
    pub hidden: BTreeSet<String>,
}

impl WidgetPreferences {
    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden.contains(id)
    }

    /// Ids that should be drawn, in render order.
    pub fn visible_ids(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .map(String::as_str)
            .filter(|id| !self.hidden.contains(*id))
    }
}

/// Ids touched while repairing a preference set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub dropped: Vec<String>,
    pub added: Vec<String>,
}

impl ReconcileReport {
    pub fn is_empty(&self) -> bool {
        self.dropped.is_empty() && self.added.is_empty()
    }
}

/// Repair `prefs` so that `order` is a permutation of the catalog ids and
/// `hidden` only names ids in `order`.
///
/// Surviving ids keep the user's relative order; catalog ids the user has never
/// seen are appended in declaration order.
pub fn reconcile(prefs: &WidgetPreferences, catalog: &WidgetCatalog) -> WidgetPreferences {
    let (reconciled, report) = reconcile_with_report(prefs, catalog);
    if !report.is_empty() {
        tracing::debug!(
            dropped = ?report.dropped,
            added = ?report.added,
            "widget preferences reconciled against catalog"
        );
    }
    reconciled
}

pub fn reconcile_with_report(
    prefs: &WidgetPreferences,
    catalog: &WidgetCatalog,
) -> (WidgetPreferences, ReconcileReport) {
    let mut report = ReconcileReport::default();
    let mut seen: HashSet<&str> = HashSet::with_capacity(catalog.len());
    let mut order = Vec::with_capacity(catalog.len());

    for id in &prefs.order {
        if !catalog.contains(id) {
            report.dropped.push(id.clone());
            continue;
        }
        if seen.insert(id.as_str()) {
            order.push(id.clone());
        }
    }
    for id in catalog.ids() {
        if !seen.contains(id) {
            order.push(id.to_string());
            report.added.push(id.to_string());
        }
    }

    let hidden = prefs
        .hidden
        .iter()
        .filter(|id| catalog.contains(id))
        .cloned()
        .collect();

    (WidgetPreferences { order, hidden }, report)
}
