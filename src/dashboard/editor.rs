use crate::dashboard::catalog::WidgetCatalog;
use crate::dashboard::prefs::WidgetPreferences;
use std::sync::Arc;

/// Pointer-driven reorder state of the customize panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: String,
    },
    DraggingOver {
        source: String,
        target: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Start(String),
    Over(String),
    Drop(String),
    /// Drag finished without a valid drop: escape, released outside, etc.
    End,
}

/// Move requested by a completed drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reorder {
    pub source: String,
    pub target: String,
}

impl DragState {
    pub fn source(&self) -> Option<&str> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { source } | DragState::DraggingOver { source, .. } => {
                Some(source.as_str())
            }
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            DragState::DraggingOver { target, .. } => Some(target.as_str()),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn transition(self, event: DragEvent) -> (DragState, Option<Reorder>) {
        match (self, event) {
            (_, DragEvent::Start(source)) => (DragState::Dragging { source }, None),
            (_, DragEvent::End) => (DragState::Idle, None),
            (DragState::Idle, DragEvent::Over(_) | DragEvent::Drop(_)) => (DragState::Idle, None),
            (
                DragState::Dragging { source } | DragState::DraggingOver { source, .. },
                DragEvent::Over(target),
            ) => {
                if target == source {
                    (DragState::Dragging { source }, None)
                } else {
                    (DragState::DraggingOver { source, target }, None)
                }
            }
            (
                DragState::Dragging { source } | DragState::DraggingOver { source, .. },
                DragEvent::Drop(target),
            ) => {
                if target == source {
                    (DragState::Idle, None)
                } else {
                    (DragState::Idle, Some(Reorder { source, target }))
                }
            }
        }
    }
}

/// Put `source` into the slot `target` occupies, shifting the rest.
///
/// Returns false and leaves `order` untouched when either id is missing or
/// both are the same.
pub fn move_onto(order: &mut Vec<String>, source: &str, target: &str) -> bool {
    if source == target {
        return false;
    }
    let Some(from) = order.iter().position(|id| id == source) else {
        return false;
    };
    let Some(to) = order.iter().position(|id| id == target) else {
        return false;
    };
    let moved = order.remove(from);
    let to = to.min(order.len());
    order.insert(to, moved);
    true
}

/// An open customize session editing a private copy of the layout.
#[derive(Debug, Clone)]
pub struct CustomizePanel {
    catalog: Arc<WidgetCatalog>,
    original: WidgetPreferences,
    draft: WidgetPreferences,
    drag: DragState,
}

impl CustomizePanel {
    pub fn open(active: &WidgetPreferences, catalog: Arc<WidgetCatalog>) -> Self {
        Self {
            catalog,
            original: active.clone(),
            draft: active.clone(),
            drag: DragState::Idle,
        }
    }

    pub fn catalog(&self) -> &WidgetCatalog {
        &self.catalog
    }

    pub fn draft(&self) -> &WidgetPreferences {
        &self.draft
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    pub fn handle_drag(&mut self, event: DragEvent) {
        let state = std::mem::take(&mut self.drag);
        let (next, reorder) = state.transition(event);
        self.drag = next;
        if let Some(Reorder { source, target }) = reorder {
            if move_onto(&mut self.draft.order, &source, &target) {
                tracing::trace!(%source, %target, "widget moved in draft");
            }
        }
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.draft.order.iter().any(|o| o == id) {
            return;
        }
        if !self.draft.hidden.remove(id) {
            self.draft.hidden.insert(id.to_string());
        }
    }

    /// Replace the draft with the catalog defaults. Nothing is committed.
    pub fn reset_to_defaults(&mut self) {
        self.draft = self.catalog.default_preferences();
        self.drag = DragState::Idle;
    }

    pub fn commit(self) -> WidgetPreferences {
        self.draft
    }

    pub fn cancel(self) {
        tracing::debug!(dirty = self.is_dirty(), "customize panel cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn panel() -> CustomizePanel {
        let catalog = Arc::new(WidgetCatalog::home_care());
        let active = catalog.default_preferences();
        CustomizePanel::open(&active, catalog)
    }

    #[test]
    fn dropping_onto_later_item_takes_its_slot() {
        let mut order = ids(&["A", "B", "C", "D"]);
        assert!(move_onto(&mut order, "A", "C"));
        assert_eq!(order, ids(&["B", "C", "A", "D"]));
    }

    #[test]
    fn dropping_onto_earlier_item_takes_its_slot() {
        let mut order = ids(&["A", "B", "C", "D"]);
        assert!(move_onto(&mut order, "D", "B"));
        assert_eq!(order, ids(&["A", "D", "B", "C"]));
    }

    #[test]
    fn move_with_unknown_ids_is_noop() {
        let mut order = ids(&["A", "B"]);
        assert!(!move_onto(&mut order, "Z", "A"));
        assert!(!move_onto(&mut order, "A", "Z"));
        assert!(!move_onto(&mut order, "A", "A"));
        assert_eq!(order, ids(&["A", "B"]));
    }

    #[test]
    fn transitions_follow_pointer_events() {
        let s = DragState::Idle.transition(DragEvent::Start("A".into())).0;
        assert_eq!(s, DragState::Dragging { source: "A".into() });

        let s = s.transition(DragEvent::Over("A".into())).0;
        assert_eq!(s, DragState::Dragging { source: "A".into() });

        let s = s.transition(DragEvent::Over("C".into())).0;
        assert_eq!(s.source(), Some("A"));
        assert_eq!(s.target(), Some("C"));

        let (s, reorder) = s.transition(DragEvent::Drop("C".into()));
        assert!(s.is_idle());
        assert_eq!(
            reorder,
            Some(Reorder {
                source: "A".into(),
                target: "C".into()
            })
        );
    }

    #[test]
    fn invalid_drops_return_to_idle() {
        let (s, reorder) = DragState::Idle.transition(DragEvent::Drop("A".into()));
        assert!(s.is_idle());
        assert!(reorder.is_none());

        let dragging = DragState::Dragging { source: "A".into() };
        let (s, reorder) = dragging.transition(DragEvent::Drop("A".into()));
        assert!(s.is_idle());
        assert!(reorder.is_none());

        let over = DragState::DraggingOver {
            source: "A".into(),
            target: "B".into(),
        };
        assert_eq!(over.transition(DragEvent::End), (DragState::Idle, None));
        assert_eq!(
            DragState::Idle.transition(DragEvent::Over("B".into())),
            (DragState::Idle, None)
        );
    }

    #[test]
    fn panel_reorders_draft_only() {
        let mut panel = panel();
        panel.handle_drag(DragEvent::Start("stats".into()));
        panel.handle_drag(DragEvent::Over("schedule".into()));
        panel.handle_drag(DragEvent::Drop("schedule".into()));
        assert_eq!(
            panel.draft().order,
            ids(&["tasks", "schedule", "stats", "charts", "activity"])
        );
        assert!(panel.drag_state().is_idle());
        assert!(panel.is_dirty());
    }

    #[test]
    fn self_drop_leaves_order_unchanged() {
        let mut panel = panel();
        let before = panel.draft().clone();
        panel.handle_drag(DragEvent::Start("tasks".into()));
        panel.handle_drag(DragEvent::Drop("tasks".into()));
        assert_eq!(panel.draft(), &before);
        assert!(panel.drag_state().is_idle());
    }

    #[test]
    fn toggle_flips_hidden_without_touching_order() {
        let mut panel = panel();
        let order = panel.draft().order.clone();
        panel.toggle("charts");
        assert!(panel.draft().is_hidden("charts"));
        panel.toggle("charts");
        assert!(!panel.draft().is_hidden("charts"));
        panel.toggle("not-a-widget");
        assert!(panel.draft().hidden.is_empty());
        assert_eq!(panel.draft().order, order);
        assert!(!panel.is_dirty());
    }

    #[test]
    fn reset_restores_defaults_in_draft() {
        let mut panel = panel();
        panel.toggle("stats");
        panel.handle_drag(DragEvent::Start("activity".into()));
        panel.handle_drag(DragEvent::Drop("stats".into()));
        panel.reset_to_defaults();
        assert_eq!(
            panel.draft(),
            &WidgetCatalog::home_care().default_preferences()
        );
    }
}
