use crate::dashboard::catalog::WidgetCatalog;
use crate::dashboard::data::DashboardData;
use crate::dashboard::editor::CustomizePanel;
use crate::dashboard::prefs::WidgetPreferences;
use crate::dashboard::store::PreferenceStore;
use crate::dashboard::widgets::{Widget, WidgetAction, WidgetRegistry};
use crate::gui::customize_panel::{self, PanelResponse};
use chrono::NaiveDate;
use eframe::egui;
use std::collections::HashMap;
use std::sync::Arc;

/// Context shared with widgets at render time.
pub struct DashboardContext<'a> {
    pub data: &'a DashboardData,
    pub today: NaiveDate,
}

/// Ids to draw, in order: hidden ids and ids without a render case are skipped.
pub fn render_plan<'a>(prefs: &'a WidgetPreferences, registry: &WidgetRegistry) -> Vec<&'a str> {
    prefs
        .visible_ids()
        .filter(|id| {
            let known = registry.contains(id);
            if !known {
                tracing::trace!(widget = %id, "no render case for widget");
            }
            known
        })
        .collect()
}

pub struct Dashboard {
    catalog: Arc<WidgetCatalog>,
    registry: WidgetRegistry,
    store: PreferenceStore,
    active: WidgetPreferences,
    widgets: HashMap<String, Box<dyn Widget>>,
    customize: Option<CustomizePanel>,
}

impl Dashboard {
    pub fn new(catalog: Arc<WidgetCatalog>, registry: WidgetRegistry, store: PreferenceStore) -> Self {
        let active = store.load_reconciled();
        tracing::debug!(order = ?active.order, hidden = ?active.hidden, "dashboard layout loaded");
        Self {
            catalog,
            registry,
            store,
            active,
            widgets: HashMap::new(),
            customize: None,
        }
    }

    pub fn catalog(&self) -> &WidgetCatalog {
        &self.catalog
    }

    pub fn active(&self) -> &WidgetPreferences {
        &self.active
    }

    pub fn render_plan(&self) -> Vec<&str> {
        render_plan(&self.active, &self.registry)
    }

    pub fn is_customizing(&self) -> bool {
        self.customize.is_some()
    }

    /// Start a customize session on a copy of the active layout. A session
    /// already in progress is kept.
    pub fn open_customize(&mut self) -> &mut CustomizePanel {
        let active = &self.active;
        let catalog = &self.catalog;
        self.customize
            .get_or_insert_with(|| CustomizePanel::open(active, Arc::clone(catalog)))
    }

    /// Commit the open draft: it becomes the active layout and is persisted.
    pub fn save_layout(&mut self) {
        let Some(panel) = self.customize.take() else {
            return;
        };
        self.active = panel.commit();
        self.store.save(&self.active);
        tracing::info!(order = ?self.active.order, hidden = ?self.active.hidden, "dashboard layout saved");
    }

    pub fn cancel_customize(&mut self) {
        if let Some(panel) = self.customize.take() {
            panel.cancel();
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, ctx: &DashboardContext<'_>) -> Option<WidgetAction> {
        ui.horizontal(|ui| {
            ui.heading("Dashboard");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Customize").clicked() {
                    self.open_customize();
                }
            });
        });
        ui.separator();

        let mut clicked = None;
        let plan: Vec<String> = self.render_plan().into_iter().map(str::to_string).collect();
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for id in &plan {
                    let action = self.render_widget(ui, id, ctx);
                    if clicked.is_none() {
                        clicked = action;
                    }
                    ui.add_space(8.0);
                }
            });

        if let Some(panel) = self.customize.as_mut() {
            match customize_panel::show(ui.ctx(), panel) {
                PanelResponse::Open => {}
                PanelResponse::Save => self.save_layout(),
                PanelResponse::Cancel => self.cancel_customize(),
            }
        }

        clicked
    }

    fn render_widget(
        &mut self,
        ui: &mut egui::Ui,
        id: &str,
        ctx: &DashboardContext<'_>,
    ) -> Option<WidgetAction> {
        if !self.widgets.contains_key(id) {
            let widget = self.registry.create(id)?;
            self.widgets.insert(id.to_string(), widget);
        }
        let widget = self.widgets.get_mut(id)?;
        let heading = self
            .catalog
            .get(id)
            .map(|d| d.label)
            .unwrap_or(id);
        egui::Frame::group(ui.style())
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.strong(heading);
                widget.render(ui, ctx)
            })
            .inner
    }
}
