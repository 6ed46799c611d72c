pub mod catalog;
pub mod dashboard;
pub mod data;
pub mod editor;
pub mod prefs;
pub mod store;
pub mod widgets;

pub use catalog::{WidgetCatalog, WidgetDescriptor};
pub use dashboard::{render_plan, Dashboard, DashboardContext};
pub use data::DashboardData;
pub use editor::{CustomizePanel, DragEvent, DragState};
pub use prefs::{reconcile, WidgetPreferences};
pub use store::{FileBackend, MemoryBackend, NullBackend, PreferenceStore, StorageBackend};
pub use widgets::{Widget, WidgetAction, WidgetFactory, WidgetRegistry};
