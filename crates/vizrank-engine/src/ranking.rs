#![forbid(unsafe_code)]

//! Reorderable-list ranking engine.
//!
//! [`RankingEngine`] owns the *committed order* of a fixed item set, tracks
//! at most one in-progress drag as a [`DragSession`], derives a preview
//! order while the drag is live, and commits on drop. Every committed
//! mutation (drop or reset) notifies a caller-supplied [`ChangeSink`]
//! exactly once; preview churn never does.
//!
//! # Design
//!
//! The engine is a plain controller: no rendering, no I/O, no framework
//! types. A thin adapter translates frontend gestures into
//! [`InputEvent`]s and feeds them to [`RankingEngine::handle`], or calls the
//! named operations directly. All operations execute synchronously on the
//! caller's thread and are O(n) in the item count.
//!
//! ## Invariants
//!
//! 1. The committed order is always a permutation of the base sequence —
//!    upheld unconditionally, including against malformed external values.
//! 2. A preview order, when present, is a permutation of the committed
//!    order.
//! 3. At most one drag session is active at a time; a session ends via
//!    exactly one of drop or cancel.
//! 4. Hover candidates are computed against the committed order, so the
//!    result of a drop depends only on the dragged item, the target, and
//!    the committed order — never on how many hover events fired first.
//!
//! ## Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Drag op with no active drag | Stray frontend event | Ignored |
//! | Unknown dragged/target id | Race with external reconcile | Ignored |
//! | Initial value not a permutation | Caller bug | Base order used (logged) |
//! | External value not a permutation | Caller bug | Kept state (logged) |

use vizrank_core::event::InputEvent;
use vizrank_core::item::{ItemId, LabelMap};

// ---------------------------------------------------------------------------
// ChangeSink
// ---------------------------------------------------------------------------

/// Receiver for committed order changes.
///
/// Invoked exactly once per drop or reset, with the new committed order.
/// Any `FnMut(&[ItemId])` closure qualifies.
pub trait ChangeSink {
    /// A new order was committed.
    fn order_committed(&mut self, order: &[ItemId]);
}

impl<F: FnMut(&[ItemId])> ChangeSink for F {
    fn order_committed(&mut self, order: &[ItemId]) {
        self(order);
    }
}

// ---------------------------------------------------------------------------
// DragSession
// ---------------------------------------------------------------------------

/// State of the one in-progress drag, if any.
///
/// Created by [`RankingEngine::begin_drag`], destroyed by drop or cancel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    /// The item being dragged.
    dragged: ItemId,
    /// The item currently hovered over, once a hover has produced a preview.
    hover: Option<ItemId>,
    /// The order shown while the drag is live, once it diverges from the
    /// committed order.
    preview: Option<Vec<ItemId>>,
}

impl DragSession {
    fn new(dragged: ItemId) -> Self {
        Self {
            dragged,
            hover: None,
            preview: None,
        }
    }

    /// The dragged item.
    #[must_use]
    pub fn dragged(&self) -> &ItemId {
        &self.dragged
    }

    /// The current hover target, if any.
    #[must_use]
    pub fn hover(&self) -> Option<&ItemId> {
        self.hover.as_ref()
    }

    /// The live preview order, if one has been computed.
    #[must_use]
    pub fn preview(&self) -> Option<&[ItemId]> {
        self.preview.as_deref()
    }
}

// ---------------------------------------------------------------------------
// relocate
// ---------------------------------------------------------------------------

/// Move `dragged` to `target`'s current slot: remove it from its position
/// and reinsert it at the index `target` occupied before the removal.
///
/// A single-slot relocation, not a swap. Returns `None` when the move is a
/// logical no-op: `dragged == target`, or either id is absent from `order`.
#[must_use]
pub fn relocate(order: &[ItemId], dragged: &ItemId, target: &ItemId) -> Option<Vec<ItemId>> {
    if dragged == target {
        return None;
    }
    let from = order.iter().position(|id| id == dragged)?;
    let to = order.iter().position(|id| id == target)?;
    let mut next = order.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    Some(next)
}

fn is_permutation(candidate: &[ItemId], base: &[ItemId]) -> bool {
    if candidate.len() != base.len() {
        return false;
    }
    let mut a: Vec<&ItemId> = candidate.iter().collect();
    let mut b: Vec<&ItemId> = base.iter().collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

// ---------------------------------------------------------------------------
// RankingEngine
// ---------------------------------------------------------------------------

/// Stateful controller for a drag-reorderable ranking.
pub struct RankingEngine {
    base: Vec<ItemId>,
    committed: Vec<ItemId>,
    drag: Option<DragSession>,
    labels: LabelMap,
    sink: Option<Box<dyn ChangeSink>>,
}

impl std::fmt::Debug for RankingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingEngine")
            .field("base", &self.base)
            .field("committed", &self.committed)
            .field("drag", &self.drag)
            .field("sink", &self.sink.as_ref().map(|_| ".."))
            .finish()
    }
}

impl RankingEngine {
    /// Create an engine over `base`, with the committed order starting as
    /// the base sequence itself.
    ///
    /// Duplicate ids are dropped (first occurrence wins) and logged;
    /// downstream invariants assume uniqueness.
    #[must_use]
    pub fn new(base: Vec<ItemId>) -> Self {
        let mut unique: Vec<ItemId> = Vec::with_capacity(base.len());
        for id in base {
            if unique.contains(&id) {
                tracing::warn!(id = %id, "duplicate item in base sequence, dropping");
            } else {
                unique.push(id);
            }
        }
        let labels = LabelMap::from_base(&unique);
        Self {
            committed: unique.clone(),
            base: unique,
            drag: None,
            labels,
            sink: None,
        }
    }

    /// Start from `initial` instead of the base sequence.
    ///
    /// `initial` must be a permutation of the base; otherwise the base order
    /// is kept and the mismatch is logged.
    #[must_use]
    pub fn with_initial_order(mut self, initial: &[ItemId]) -> Self {
        if is_permutation(initial, &self.base) {
            self.committed = initial.to_vec();
        } else {
            tracing::warn!(
                ?initial,
                base = ?self.base,
                "initial order is not a permutation of the base sequence, using base"
            );
        }
        self
    }

    /// Attach the change sink notified on every commit.
    #[must_use]
    pub fn on_change(mut self, sink: impl ChangeSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Replace the change sink after construction.
    pub fn set_sink(&mut self, sink: impl ChangeSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    // -- accessors ----------------------------------------------------------

    /// The immutable base sequence (reset target, label assignment).
    #[must_use]
    pub fn base_sequence(&self) -> &[ItemId] {
        &self.base
    }

    /// The last committed order.
    #[must_use]
    pub fn committed_order(&self) -> &[ItemId] {
        &self.committed
    }

    /// The order to display right now: the live preview during a drag once
    /// one exists, otherwise the committed order. The only order a renderer
    /// should ever show.
    #[must_use]
    pub fn current_order(&self) -> &[ItemId] {
        self.drag
            .as_ref()
            .and_then(|d| d.preview.as_deref())
            .unwrap_or(&self.committed)
    }

    /// The fixed positional label map ("Chart A", "Chart B", …).
    #[must_use]
    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    /// The active drag session, if any.
    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// True while a drag is in progress.
    #[must_use]
    pub fn drag_active(&self) -> bool {
        self.drag.is_some()
    }

    /// True if `id` is the item currently being dragged.
    #[must_use]
    pub fn is_dragged(&self, id: &ItemId) -> bool {
        self.drag.as_ref().is_some_and(|d| &d.dragged == id)
    }

    /// True if `id` is the current hover target.
    #[must_use]
    pub fn is_hover_target(&self, id: &ItemId) -> bool {
        self.drag
            .as_ref()
            .is_some_and(|d| d.hover.as_ref() == Some(id))
    }

    // -- operations ---------------------------------------------------------

    /// Adopt an externally supplied order (controlled-component usage).
    ///
    /// Only applies when no drag is active and `external` actually differs
    /// from the committed order; an active gesture is never fought. A value
    /// that is not a permutation of the base is rejected and logged.
    pub fn reconcile(&mut self, external: &[ItemId]) {
        if self.drag.is_some() {
            tracing::trace!("reconcile ignored, drag in progress");
            return;
        }
        if external == self.committed.as_slice() {
            return;
        }
        if !is_permutation(external, &self.base) {
            tracing::warn!(
                ?external,
                base = ?self.base,
                "external order is not a permutation of the base sequence, keeping state"
            );
            return;
        }
        self.committed = external.to_vec();
        debug_assert!(is_permutation(&self.committed, &self.base));
    }

    /// Start dragging `id`.
    ///
    /// Idempotent while `id` is already the dragged item. Starting a drag
    /// for a different item replaces the session. Ids outside the committed
    /// order are ignored.
    pub fn begin_drag(&mut self, id: &ItemId) {
        if !self.committed.contains(id) {
            tracing::warn!(id = %id, "drag start for unknown item ignored");
            return;
        }
        if self.is_dragged(id) {
            return;
        }
        self.drag = Some(DragSession::new(id.clone()));
    }

    /// The dragged item is hovering over `target`; recompute the preview.
    ///
    /// The candidate order is the dragged item relocated to `target`'s slot
    /// in the *committed* order, so repeated hovers over the same target are
    /// stable and the eventual drop matches what the preview shows. No-op
    /// without an active drag, for self-hover, and for unknown ids.
    pub fn drag_over(&mut self, target: &ItemId) {
        let Some(drag) = self.drag.as_ref() else {
            return;
        };
        let Some(candidate) = relocate(&self.committed, &drag.dragged, target) else {
            return;
        };
        if candidate.as_slice() == self.current_order() {
            return;
        }
        debug_assert!(is_permutation(&candidate, &self.committed));
        if let Some(drag) = self.drag.as_mut() {
            drag.hover = Some(target.clone());
            drag.preview = Some(candidate);
        }
    }

    /// Release the dragged item over `target`, committing the relocation.
    ///
    /// Clears the session and notifies the sink with the new committed
    /// order. A drop that moves nothing (self-drop, or a target that
    /// vanished under a race) still commits and notifies — the gesture
    /// completed, even if the order did not change. Returns `true` when a
    /// commit was emitted, `false` when no drag was active.
    pub fn drop_on(&mut self, target: &ItemId) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        if let Some(next) = relocate(&self.committed, &drag.dragged, target) {
            self.committed = next;
        }
        debug_assert!(is_permutation(&self.committed, &self.base));
        self.emit();
        true
    }

    /// End the drag without committing anything.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Restore the base sequence, clearing any drag, and notify the sink.
    pub fn reset(&mut self) {
        self.committed = self.base.clone();
        self.drag = None;
        self.emit();
    }

    /// Drive the engine with an abstract gesture.
    ///
    /// Returns `true` when the event produced a commit (and the sink fired).
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::DragStart(id) => {
                self.begin_drag(&id);
                false
            }
            InputEvent::DragOverTarget(id) => {
                self.drag_over(&id);
                false
            }
            InputEvent::Drop(id) => self.drop_on(&id),
            InputEvent::DragCancel => {
                self.cancel_drag();
                false
            }
            InputEvent::Reset => {
                self.reset();
                true
            }
        }
    }

    fn emit(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.order_committed(&self.committed);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
