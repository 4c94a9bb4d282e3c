#![forbid(unsafe_code)]

//! Canonical input events.
//!
//! The ranking engine is driven by a small set of abstract gestures rather
//! than any concrete frontend's event model. A browser adapter translates
//! native drag-and-drop events into these; a terminal or pointer-based
//! frontend translates press/move/release the same way. All variants derive
//! `Clone`, `PartialEq`, and `Eq` for use in tests and pattern matching.

use crate::item::ItemId;

/// An abstract gesture aimed at a reorderable list.
///
/// A well-formed drag is exactly one [`DragStart`](InputEvent::DragStart),
/// zero or more [`DragOverTarget`](InputEvent::DragOverTarget), and exactly
/// one of [`Drop`](InputEvent::Drop) or
/// [`DragCancel`](InputEvent::DragCancel). Events that do not fit the
/// current state are ignored, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The participant started dragging the given item.
    DragStart(ItemId),

    /// The dragged item is hovering over the given target item.
    ///
    /// May fire at high frequency; handling is O(n) and idempotent.
    DragOverTarget(ItemId),

    /// The dragged item was released over the given target item.
    Drop(ItemId),

    /// The drag ended without a valid drop (released outside a target,
    /// or cancelled with Escape).
    DragCancel,

    /// Restore the baseline order.
    Reset,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
