#![forbid(unsafe_code)]

//! Survey-task layer for chart-preference studies.
//!
//! Binds the interaction engines to a hosting survey runner:
//!
//! - [`params`]: per-task JSON parameters with the study's defaults.
//! - [`answer`]: the `{status, answers}` submission payload.
//! - [`task`]: [`RankingTask`](task::RankingTask) and
//!   [`SelectionTask`](task::SelectionTask), which own the once-per-instance
//!   session seed and translate engine commits into answer payloads.

pub mod answer;
pub mod params;
pub mod task;

pub use answer::{Answer, AnswerValue};
pub use params::{BASE_GUARDRAILS, TaskParameters};
pub use task::{
    AnswerSink, RANKING_QUESTION_KEY, RankingTask, SELECTION_QUESTION_KEY, SelectionTask,
};
