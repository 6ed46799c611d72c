use crate::dashboard::dashboard::DashboardContext;
use eframe::egui;
use std::collections::HashMap;
use std::sync::Arc;

mod activity;
mod charts;
mod schedule;
mod stats;
mod tasks;

pub use activity::ActivityWidget;
pub use charts::VisitHoursChartWidget;
pub use schedule::ScheduleWidget;
pub use stats::StatsWidget;
pub use tasks::TasksWidget;

/// Navigation requested by a widget click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    OpenRoute(String),
}

/// Widget trait implemented by all dashboard widgets.
pub trait Widget: Send {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &DashboardContext<'_>) -> Option<WidgetAction>;
}

/// Builds a widget instance for one dashboard mount.
#[derive(Clone)]
pub struct WidgetFactory {
    ctor: Arc<dyn Fn() -> Box<dyn Widget> + Send + Sync>,
}

impl WidgetFactory {
    pub fn new<T: Widget + Default + 'static>() -> Self {
        Self {
            ctor: Arc::new(|| Box::new(T::default()) as Box<dyn Widget>),
        }
    }

    pub fn from_fn(build: impl Fn() -> Box<dyn Widget> + Send + Sync + 'static) -> Self {
        Self {
            ctor: Arc::new(build),
        }
    }

    pub fn create(&self) -> Box<dyn Widget> {
        (self.ctor)()
    }
}

/// Render cases known to this build, keyed by widget id.
#[derive(Clone, Default)]
pub struct WidgetRegistry {
    map: HashMap<String, WidgetFactory>,
}

impl WidgetRegistry {
    pub fn home_care() -> Self {
        let mut reg = Self::default();
        reg.register("stats", WidgetFactory::new::<StatsWidget>());
        reg.register("tasks", WidgetFactory::new::<TasksWidget>());
        reg.register("schedule", WidgetFactory::new::<ScheduleWidget>());
        reg.register("charts", WidgetFactory::new::<VisitHoursChartWidget>());
        reg.register("activity", WidgetFactory::new::<ActivityWidget>());
        reg
    }

    pub fn register(&mut self, id: &str, factory: WidgetFactory) {
        self.map.insert(id.to_string(), factory);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    pub fn create(&self, id: &str) -> Option<Box<dyn Widget>> {
        self.map.get(id).map(WidgetFactory::create)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::catalog::WidgetCatalog;

    #[test]
    fn home_care_registry_covers_catalog() {
        let registry = WidgetRegistry::home_care();
        for id in WidgetCatalog::home_care().ids() {
            assert!(registry.contains(id), "missing render case for {id}");
            assert!(registry.create(id).is_some());
        }
        assert!(registry.create("unknown").is_none());
    }
}
