use super::{Widget, WidgetAction};
use crate::dashboard::dashboard::DashboardContext;
use eframe::egui;

#[derive(Default)]
pub struct StatsWidget;

impl Widget for StatsWidget {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &DashboardContext<'_>) -> Option<WidgetAction> {
        let stats = ctx.data.stats;
        let mut clicked = None;
        egui::Grid::new("agency-stats")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                let rows = [
                    ("Active clients", stats.active_clients, "/clients"),
                    ("Active caregivers", stats.active_caregivers, "/caregivers"),
                    ("Visits today", stats.visits_today, "/schedule"),
                    ("Open shifts", stats.open_shifts, "/schedule?filter=open"),
                ];
                for (label, value, route) in rows {
                    if ui.link(label).clicked() {
                        clicked = Some(WidgetAction::OpenRoute(route.into()));
                    }
                    ui.strong(value.to_string());
                    ui.end_row();
                }
            });
        clicked
    }
}
