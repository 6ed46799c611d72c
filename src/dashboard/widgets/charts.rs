use super::{Widget, WidgetAction};
use crate::dashboard::dashboard::DashboardContext;
use eframe::egui;

const CHART_HEIGHT: f32 = 120.0;

#[derive(Default)]
pub struct VisitHoursChartWidget;

impl Widget for VisitHoursChartWidget {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &DashboardContext<'_>) -> Option<WidgetAction> {
        let days = &ctx.data.weekly_hours;
        if days.is_empty() {
            ui.label("No hours recorded this week");
            return None;
        }
        let max = days.iter().map(|d| d.hours).fold(1.0_f32, f32::max);
        let width = ui.available_width().max(80.0);
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, CHART_HEIGHT), egui::Sense::click());
        let painter = ui.painter_at(rect);
        let slot = rect.width() / days.len() as f32;
        let bar_color = ui.visuals().selection.bg_fill;
        let text_color = ui.visuals().text_color();
        let label_height = 14.0;
        for (i, day) in days.iter().enumerate() {
            let usable = rect.height() - label_height;
            let h = (day.hours.max(0.0) / max) * usable;
            let left = rect.left() + slot * i as f32 + slot * 0.15;
            let bar = egui::Rect::from_min_max(
                egui::pos2(left, rect.top() + usable - h),
                egui::pos2(left + slot * 0.7, rect.top() + usable),
            );
            painter.rect_filled(bar, 2.0, bar_color);
            painter.text(
                egui::pos2(left + slot * 0.35, rect.bottom()),
                egui::Align2::CENTER_BOTTOM,
                day.day.format("%a").to_string(),
                egui::FontId::proportional(11.0),
                text_color,
            );
        }
        let total: f32 = days.iter().map(|d| d.hours).sum();
        ui.weak(format!("{total:.1} hours over {} days", days.len()));
        if response.clicked() {
            return Some(WidgetAction::OpenRoute("/reports/hours".into()));
        }
        None
    }
}
