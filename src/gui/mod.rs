pub mod customize_panel;

use crate::dashboard::{Dashboard, DashboardContext, DashboardData, WidgetAction};
use chrono::NaiveDate;
use eframe::egui;

/// Desktop host for the dashboard.
pub struct DashboardApp {
    dashboard: Dashboard,
    data: DashboardData,
    today: NaiveDate,
    last_route: Option<String>,
}

impl DashboardApp {
    pub fn new(dashboard: Dashboard, data: DashboardData, today: NaiveDate) -> Self {
        Self {
            dashboard,
            data,
            today,
            last_route: None,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn last_route(&self) -> Option<&str> {
        self.last_route.as_deref()
    }

    fn handle_action(&mut self, action: WidgetAction) {
        match action {
            WidgetAction::OpenRoute(route) => {
                tracing::info!(%route, "widget navigation");
                self.last_route = Some(route);
            }
        }
    }

    pub fn frame(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| match &self.last_route {
            Some(route) => {
                ui.weak(format!("Last opened: {route}"));
            }
            None => {
                ui.weak(self.today.format("%A, %B %d").to_string());
            }
        });
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let dctx = DashboardContext {
                    data: &self.data,
                    today: self.today,
                };
                self.dashboard.ui(ui, &dctx)
            })
            .inner;
        if let Some(action) = action {
            self.handle_action(action);
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{MemoryBackend, PreferenceStore, WidgetCatalog, WidgetRegistry};
    use std::sync::Arc;

    fn app() -> DashboardApp {
        let catalog = Arc::new(WidgetCatalog::home_care());
        let store = PreferenceStore::new(Box::new(MemoryBackend::new()), Arc::clone(&catalog));
        let dashboard = Dashboard::new(catalog, WidgetRegistry::home_care(), store);
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        DashboardApp::new(dashboard, DashboardData::sample(today), today)
    }

    #[test]
    fn widget_navigation_is_remembered() {
        let mut app = app();
        assert!(app.last_route().is_none());
        app.handle_action(WidgetAction::OpenRoute("/clients/204".into()));
        assert_eq!(app.last_route(), Some("/clients/204"));
    }

    #[test]
    fn idle_frame_leaves_layout_untouched() {
        let mut app = app();
        let ctx = egui::Context::default();
        let _ = ctx.run(Default::default(), |ctx| app.frame(ctx));
        assert!(app.last_route().is_none());
        assert!(!app.dashboard().is_customizing());
        assert_eq!(app.dashboard().render_plan().len(), 5);
    }
}
