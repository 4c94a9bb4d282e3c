#![forbid(unsafe_code)]

//! Row-view rendering contract.
//!
//! Everything a presentation layer needs to draw the reorderable list —
//! display order, fixed labels, slot captions, and per-item drag/hover
//! flags — as plain data, so the renderer holds no ranking logic.

use crate::ranking::RankingEngine;
use vizrank_core::item::ItemId;

/// Caption for a row's slot in the ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotLabel {
    /// The top slot.
    Best,
    /// Any slot between top and bottom.
    Middle,
    /// The bottom slot.
    Worst,
}

impl SlotLabel {
    /// The caption for position `index` in a list of `len` items.
    ///
    /// A single-item list shows `Best`.
    #[must_use]
    pub fn for_position(index: usize, len: usize) -> Self {
        if index == 0 {
            Self::Best
        } else if index + 1 == len {
            Self::Worst
        } else {
            Self::Middle
        }
    }

    /// Display text for the caption.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Best => "Best",
            Self::Middle => "•",
            Self::Worst => "Worst",
        }
    }
}

/// One renderable row of the ranking list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    /// The item in this slot.
    pub id: ItemId,
    /// Fixed display label ("Chart A", …), independent of the current slot.
    pub label: String,
    /// Caption for the slot itself.
    pub slot: SlotLabel,
    /// True while this item is being dragged.
    pub drag_active: bool,
    /// True while this item is the drag's hover target.
    pub hover_target: bool,
}

impl RankingEngine {
    /// The rows to render, in current display order.
    #[must_use]
    pub fn rows(&self) -> Vec<RowView> {
        let order = self.current_order().to_vec();
        let len = order.len();
        order
            .into_iter()
            .enumerate()
            .map(|(index, id)| RowView {
                label: self.labels().label_or_id(&id).to_string(),
                slot: SlotLabel::for_position(index, len),
                drag_active: self.is_dragged(&id),
                hover_target: self.is_hover_target(&id),
                id,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<ItemId> {
        names.iter().map(|n| ItemId::from(*n)).collect()
    }

    #[test]
    fn slot_captions() {
        assert_eq!(SlotLabel::for_position(0, 4), SlotLabel::Best);
        assert_eq!(SlotLabel::for_position(1, 4), SlotLabel::Middle);
        assert_eq!(SlotLabel::for_position(3, 4), SlotLabel::Worst);
        assert_eq!(SlotLabel::for_position(0, 1), SlotLabel::Best);
        assert_eq!(SlotLabel::Middle.as_str(), "•");
    }

    #[test]
    fn rows_follow_display_order_with_fixed_labels() {
        let mut engine = RankingEngine::new(ids(&["a", "b", "c"]));
        engine.begin_drag(&"a".into());
        engine.drag_over(&"c".into());

        let rows = engine.rows();
        let order: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, ["b", "c", "a"]);

        // Labels stick to items, not slots.
        assert_eq!(rows[0].label, "Chart B");
        assert_eq!(rows[2].label, "Chart A");

        assert_eq!(rows[0].slot, SlotLabel::Best);
        assert_eq!(rows[2].slot, SlotLabel::Worst);

        assert!(rows[2].drag_active, "dragged item flagged");
        assert!(rows[1].hover_target, "hover target flagged");
        assert!(!rows[0].drag_active && !rows[0].hover_target);
    }

    #[test]
    fn rows_idle_have_no_flags() {
        let engine = RankingEngine::new(ids(&["a", "b"]));
        assert!(
            engine
                .rows()
                .iter()
                .all(|r| !r.drag_active && !r.hover_target)
        );
    }
}
