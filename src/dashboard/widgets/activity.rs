use super::{Widget, WidgetAction};
use crate::dashboard::dashboard::DashboardContext;
use eframe::egui;

pub struct ActivityWidget {
    limit: usize,
}

impl Default for ActivityWidget {
    fn default() -> Self {
        Self { limit: 8 }
    }
}

impl Widget for ActivityWidget {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &DashboardContext<'_>) -> Option<WidgetAction> {
        let mut entries: Vec<_> = ctx.data.activity.iter().collect();
        if entries.is_empty() {
            ui.label("Nothing new");
            return None;
        }
        entries.sort_by(|a, b| b.at.cmp(&a.at));
        let mut clicked = None;
        for entry in entries.into_iter().take(self.limit) {
            ui.horizontal(|ui| {
                ui.weak(entry.at.format("%b %d %H:%M").to_string());
                match &entry.route {
                    Some(route) => {
                        if ui.link(&entry.summary).clicked() {
                            clicked = Some(WidgetAction::OpenRoute(route.clone()));
                        }
                    }
                    None => {
                        ui.label(&entry.summary);
                    }
                }
            });
        }
        clicked
    }
}
