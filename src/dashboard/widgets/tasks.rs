use super::{Widget, WidgetAction};
use crate::dashboard::dashboard::DashboardContext;
use crate::dashboard::data::TaskItem;
use eframe::egui;

fn default_limit() -> usize {
    6
}

pub struct TasksWidget {
    limit: usize,
}

impl Default for TasksWidget {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

/// Open tasks, overdue and dated ones first.
pub(crate) fn open_tasks(tasks: &[TaskItem]) -> Vec<&TaskItem> {
    let mut open: Vec<&TaskItem> = tasks.iter().filter(|t| !t.done).collect();
    open.sort_by(|a, b| match (a.due, b.due) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.id.cmp(&b.id)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    });
    open
}

impl Widget for TasksWidget {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &DashboardContext<'_>) -> Option<WidgetAction> {
        let open = open_tasks(&ctx.data.tasks);
        if open.is_empty() {
            ui.label("No open tasks");
            return None;
        }
        let mut clicked = None;
        for task in open.iter().take(self.limit) {
            ui.horizontal(|ui| {
                if ui.link(&task.title).clicked() {
                    clicked = Some(WidgetAction::OpenRoute(format!("/tasks/{}", task.id)));
                }
                if let Some(due) = task.due {
                    let text = due.format("%b %d").to_string();
                    if due < ctx.today {
                        ui.colored_label(ui.visuals().error_fg_color, text);
                    } else {
                        ui.weak(text);
                    }
                }
            });
        }
        if open.len() > self.limit {
            ui.weak(format!("+{} more", open.len() - self.limit));
        }
        clicked
    }
}
