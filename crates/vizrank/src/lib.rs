#![forbid(unsafe_code)]

//! vizrank public facade crate.
//!
//! Re-exports the stable surface of the preference-study stack and offers a
//! lightweight prelude for day-to-day usage:
//!
//! ```
//! use vizrank::prelude::*;
//!
//! let params = TaskParameters::default();
//! let mut task = RankingTask::with_seed(&params, SessionSeed::new("demo"));
//! let top = task.engine().committed_order()[0].clone();
//! let bottom = task.engine().committed_order()[3].clone();
//! task.handle(InputEvent::DragStart(top));
//! task.handle(InputEvent::Drop(bottom));
//! assert!(task.current_answer().status);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use vizrank_core::event::InputEvent;
pub use vizrank_core::item::{ItemId, LabelMap};
pub use vizrank_core::sequencer::{SeededRng, SessionSeed, shuffle};

// --- Engine re-exports -----------------------------------------------------

pub use vizrank_engine::ranking::{ChangeSink, DragSession, RankingEngine, relocate};
pub use vizrank_engine::selection::{SelectionEngine, SelectionSink};
pub use vizrank_engine::view::{RowView, SlotLabel};

// --- Task re-exports -------------------------------------------------------

pub use vizrank_task::answer::{Answer, AnswerValue};
pub use vizrank_task::params::{BASE_GUARDRAILS, TaskParameters};
pub use vizrank_task::task::{
    AnswerSink, RANKING_QUESTION_KEY, RankingTask, SELECTION_QUESTION_KEY, SelectionTask,
};

/// Convenience prelude: the types nearly every consumer touches.
pub mod prelude {
    pub use crate::{
        Answer, AnswerValue, InputEvent, ItemId, LabelMap, RankingEngine, RankingTask, RowView,
        SelectionEngine, SelectionTask, SessionSeed, SlotLabel, TaskParameters,
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn facade_covers_the_happy_path() {
        let params = TaskParameters::default();
        let mut task = RankingTask::with_seed(&params, SessionSeed::new("facade"));
        let rows = task.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].slot, SlotLabel::Best);

        let dragged = rows[1].id.clone();
        let target = rows[3].id.clone();
        task.handle(InputEvent::DragStart(dragged.clone()));
        task.handle(InputEvent::DragOverTarget(target.clone()));
        task.handle(InputEvent::Drop(target));
        assert_eq!(task.rows()[3].id, dragged);
    }
}
