use crate::dashboard::prefs::WidgetPreferences;
use std::collections::BTreeSet;

/// Static description of a dashboard widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

impl WidgetDescriptor {
    pub const fn new(id: &'static str, label: &'static str, description: &'static str) -> Self {
        Self {
            id,
            label,
            description,
        }
    }
}

pub const STATS: WidgetDescriptor = WidgetDescriptor::new(
    "stats",
    "Agency Stats",
    "Active clients, caregivers, and today's visit counts",
);
pub const TASKS: WidgetDescriptor =
    WidgetDescriptor::new("tasks", "My Tasks", "Open follow-ups assigned to you");
pub const SCHEDULE: WidgetDescriptor = WidgetDescriptor::new(
    "schedule",
    "Today's Schedule",
    "Visits scheduled for today by start time",
);
pub const CHARTS: WidgetDescriptor = WidgetDescriptor::new(
    "charts",
    "Visit Hours",
    "Delivered care hours over the last seven days",
);
pub const ACTIVITY: WidgetDescriptor = WidgetDescriptor::new(
    "activity",
    "Recent Activity",
    "Latest changes across clients and caregivers",
);

/// Ordered, immutable catalog of every widget the dashboard knows about.
///
/// Declaration order doubles as the default layout order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetCatalog {
    widgets: Vec<WidgetDescriptor>,
}

impl WidgetCatalog {
    pub fn new(widgets: Vec<WidgetDescriptor>) -> Self {
        let mut seen = BTreeSet::new();
        let mut unique = Vec::with_capacity(widgets.len());
        for widget in widgets {
            if seen.insert(widget.id) {
                unique.push(widget);
            } else {
                tracing::warn!(widget = widget.id, "duplicate widget id ignored");
            }
        }
        Self { widgets: unique }
    }

    pub fn home_care() -> Self {
        Self::new(vec![STATS, TASKS, SCHEDULE, CHARTS, ACTIVITY])
    }

    pub fn iter(&self) -> impl Iterator<Item = &WidgetDescriptor> {
        self.widgets.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.widgets.iter().map(|w| w.id)
    }

    pub fn get(&self, id: &str) -> Option<&WidgetDescriptor> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn default_preferences(&self) -> WidgetPreferences {
        WidgetPreferences {
            order: self.ids().map(str::to_string).collect(),
            hidden: BTreeSet::new(),
        }
    }
}
