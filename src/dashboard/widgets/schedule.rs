use super::{Widget, WidgetAction};
use crate::dashboard::dashboard::DashboardContext;
use eframe::egui;

#[derive(Default)]
pub struct ScheduleWidget;

impl Widget for ScheduleWidget {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &DashboardContext<'_>) -> Option<WidgetAction> {
        let mut visits: Vec<_> = ctx.data.visits.iter().collect();
        if visits.is_empty() {
            ui.label("No visits scheduled today");
            return None;
        }
        visits.sort_by_key(|v| (v.start, v.id));
        let mut clicked = None;
        for visit in visits {
            ui.horizontal(|ui| {
                ui.monospace(format!(
                    "{}-{}",
                    visit.start.format("%H:%M"),
                    visit.end.format("%H:%M")
                ));
                if ui.link(&visit.client).clicked() {
                    clicked = Some(WidgetAction::OpenRoute(format!("/visits/{}", visit.id)));
                }
                match &visit.caregiver {
                    Some(name) => {
                        ui.weak(name);
                    }
                    None => {
                        ui.colored_label(ui.visuals().warn_fg_color, "Unassigned");
                    }
                }
            });
        }
        clicked
    }
}
