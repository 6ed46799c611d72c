use care_dashboard::dashboard::{Dashboard, DashboardData, WidgetCatalog, WidgetRegistry};
use care_dashboard::gui::DashboardApp;
use care_dashboard::logging;
use care_dashboard::settings::Settings;
use eframe::egui;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load("settings.json")?;
    logging::init(&settings);

    let catalog = Arc::new(WidgetCatalog::home_care());
    let store = settings.preference_store(Arc::clone(&catalog));
    let dashboard = Dashboard::new(catalog, WidgetRegistry::home_care(), store);
    let today = chrono::Local::now().date_naive();
    let app = DashboardApp::new(dashboard, DashboardData::sample(today), today);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 820.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Care Dashboard",
        native_options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
