use crate::dashboard::editor::{CustomizePanel, DragEvent};
use eframe::egui;

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelResponse {
    Open,
    Save,
    Cancel,
}

struct RowHit {
    id: String,
    rect: egui::Rect,
}

struct PanelFrame {
    response: PanelResponse,
    #[cfg_attr(not(test), allow(dead_code))]
    rows: Vec<RowHit>,
}

/// Draw the customize panel as a modal over a dimmed backdrop and feed
/// pointer and button input into `panel`.
pub fn show(ctx: &egui::Context, panel: &mut CustomizePanel) -> PanelResponse {
    draw(ctx, panel).response
}

fn draw(ctx: &egui::Context, panel: &mut CustomizePanel) -> PanelFrame {
    let mut response = PanelResponse::Open;

    let screen = ctx.screen_rect();
    let backdrop = egui::Area::new(egui::Id::new("customize-backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let (rect, resp) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
            ui.painter()
                .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(120));
            resp
        })
        .inner;
    if backdrop.clicked() {
        return PanelFrame {
            response: PanelResponse::Cancel,
            rows: Vec::new(),
        };
    }

    let mut events = Vec::new();
    let mut toggles = Vec::new();
    let mut rows = Vec::new();
    let mut reset = false;

    egui::Area::new(egui::Id::new("customize-panel"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::window(ui.style()).show(ui, |ui| {
                ui.set_width(360.0);
                ui.heading("Customize Dashboard");
                ui.weak("Drag to reorder. Untick to hide.");
                ui.separator();

                let order = panel.draft().order.clone();
                for id in &order {
                    let (label, description) = panel
                        .catalog()
                        .get(id)
                        .map(|d| (d.label, d.description))
                        .unwrap_or((id.as_str(), ""));
                    let drag = panel.drag_state();
                    let is_source = drag.source() == Some(id.as_str());
                    let is_target = drag.target() == Some(id.as_str());
                    let fill = if is_target {
                        ui.visuals().selection.bg_fill
                    } else {
                        ui.visuals().faint_bg_color
                    };
                    let row = egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            let handle =
                                ui.add(egui::Label::new("☰").sense(egui::Sense::drag()));
                            let mut visible = !panel.draft().is_hidden(id);
                            if ui.checkbox(&mut visible, "").changed() {
                                toggles.push(id.clone());
                            }
                            ui.vertical(|ui| {
                                if is_source {
                                    ui.weak(label);
                                } else {
                                    ui.strong(label);
                                }
                                ui.weak(description);
                            });
                            handle
                        })
                        .inner
                    });
                    if row.inner.drag_started() {
                        events.push(DragEvent::Start(id.clone()));
                    }
                    rows.push(RowHit {
                        id: id.clone(),
                        rect: row.response.rect,
                    });
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Reset to defaults").clicked() {
                        reset = true;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Save Layout").clicked() {
                            response = PanelResponse::Save;
                        }
                        if ui.button("Cancel").clicked() {
                            response = PanelResponse::Cancel;
                        }
                    });
                });
            });
        });

    if !panel.drag_state().is_idle() {
        events.extend(pointer_event(ctx, &rows));
    }
    for event in events {
        panel.handle_drag(event);
    }
    for id in toggles {
        panel.toggle(&id);
    }
    if reset {
        panel.reset_to_defaults();
    }
    PanelFrame { response, rows }
}

fn pointer_event(ctx: &egui::Context, rows: &[RowHit]) -> Option<DragEvent> {
    let (escape, released, pos) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.pointer.any_released(),
            i.pointer.latest_pos(),
        )
    });
    if escape {
        return Some(DragEvent::End);
    }
    let hovered = pos.and_then(|p| rows.iter().find(|row| row.rect.contains(p)));
    match (released, hovered) {
        (true, Some(row)) => Some(DragEvent::Drop(row.id.clone())),
        (true, None) => Some(DragEvent::End),
        (false, Some(row)) => Some(DragEvent::Over(row.id.clone())),
        (false, None) => None,
    }
}
