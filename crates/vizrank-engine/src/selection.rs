#![forbid(unsafe_code)]

//! Single-pick selection engine.
//!
//! The radio-style variant of the preference signal: the participant picks
//! exactly one chart (or none). Its state is a strict subset of the ranking
//! engine's — one optional selected item over the same fixed base sequence
//! and label map, with the same notify-on-committed-change discipline.
//!
//! Clicking the selected item again clears the selection; a frontend maps
//! Enter/Space on a focused item to the same [`toggle`](SelectionEngine::toggle).

use vizrank_core::item::{ItemId, LabelMap};

/// Receiver for selection changes.
///
/// Invoked once per accepted toggle with the new selection (`None` when the
/// participant deselected). Any `FnMut(Option<&ItemId>)` closure qualifies.
pub trait SelectionSink {
    /// The selection changed.
    fn selection_changed(&mut self, selected: Option<&ItemId>);
}

impl<F: FnMut(Option<&ItemId>)> SelectionSink for F {
    fn selection_changed(&mut self, selected: Option<&ItemId>) {
        self(selected);
    }
}

/// Stateful controller for a single-pick preference.
pub struct SelectionEngine {
    base: Vec<ItemId>,
    selected: Option<ItemId>,
    labels: LabelMap,
    sink: Option<Box<dyn SelectionSink>>,
}

impl std::fmt::Debug for SelectionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionEngine")
            .field("base", &self.base)
            .field("selected", &self.selected)
            .field("sink", &self.sink.as_ref().map(|_| ".."))
            .finish()
    }
}

impl SelectionEngine {
    /// Create an engine over `base` with nothing selected.
    #[must_use]
    pub fn new(base: Vec<ItemId>) -> Self {
        let labels = LabelMap::from_base(&base);
        Self {
            base,
            selected: None,
            labels,
            sink: None,
        }
    }

    /// Attach the sink notified on every selection change.
    #[must_use]
    pub fn on_change(mut self, sink: impl SelectionSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// The fixed display order of this task instance.
    #[must_use]
    pub fn base_sequence(&self) -> &[ItemId] {
        &self.base
    }

    /// The fixed positional label map.
    #[must_use]
    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    /// The currently selected item, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    /// True if `id` is the current selection.
    #[must_use]
    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Activate `id`: select it, or clear the selection if it was already
    /// selected. Unknown ids are ignored and logged. Returns `true` when the
    /// state changed (and the sink fired).
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        if !self.base.contains(id) {
            tracing::warn!(id = %id, "toggle for unknown item ignored");
            return false;
        }
        if self.is_selected(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.clone());
        }
        self.emit();
        true
    }

    /// Clear the selection; emits only when something was selected.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.selected = None;
        self.emit();
        true
    }

    fn emit(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.selection_changed(self.selected.as_ref());
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ids(names: &[&str]) -> Vec<ItemId> {
        names.iter().map(|n| ItemId::from(*n)).collect()
    }

    #[test]
    fn toggle_selects_then_clears() {
        let mut engine = SelectionEngine::new(ids(&["a", "b"]));
        assert!(engine.toggle(&"a".into()));
        assert!(engine.is_selected(&"a".into()));
        assert!(engine.toggle(&"a".into()));
        assert!(engine.selected().is_none());
    }

    #[test]
    fn toggle_other_item_replaces_selection() {
        let mut engine = SelectionEngine::new(ids(&["a", "b"]));
        engine.toggle(&"a".into());
        engine.toggle(&"b".into());
        assert!(engine.is_selected(&"b".into()));
        assert!(!engine.is_selected(&"a".into()));
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut engine = SelectionEngine::new(ids(&["a"]));
        assert!(!engine.toggle(&"zz".into()));
        assert!(engine.selected().is_none());
    }

    #[test]
    fn sink_sees_every_accepted_toggle() {
        let log: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink_log = Rc::clone(&log);
        let mut engine =
            SelectionEngine::new(ids(&["a", "b"])).on_change(move |sel: Option<&ItemId>| {
                sink_log
                    .borrow_mut()
                    .push(sel.map(|id| id.as_str().to_string()));
            });
        engine.toggle(&"a".into());
        engine.toggle(&"b".into());
        engine.toggle(&"b".into());
        engine.toggle(&"zz".into());
        assert_eq!(
            log.borrow().as_slice(),
            vec![Some("a".to_string()), Some("b".to_string()), None]
        );
    }

    #[test]
    fn clear_emits_only_when_selected() {
        let mut engine = SelectionEngine::new(ids(&["a"]));
        assert!(!engine.clear());
        engine.toggle(&"a".into());
        assert!(engine.clear());
        assert!(engine.selected().is_none());
    }

    #[test]
    fn labels_match_base_positions() {
        let engine = SelectionEngine::new(ids(&["x", "y"]));
        assert_eq!(engine.labels().label(&"y".into()), Some("Chart B"));
    }
}
