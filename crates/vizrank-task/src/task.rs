#![forbid(unsafe_code)]

//! Task controllers: seed → sequencer → engine → answer sink.
//!
//! A task instance owns its [`SessionSeed`], shuffles the guardrail set
//! exactly once with it, and wraps the matching engine. Every committed
//! preference is translated into an [`Answer`] and pushed to the hosting
//! survey runner through an [`AnswerSink`]. The seed never changes for the
//! lifetime of the instance, so re-rendering a task can never re-shuffle.

use vizrank_core::event::InputEvent;
use vizrank_core::item::ItemId;
use vizrank_core::sequencer::SessionSeed;
use vizrank_engine::ranking::RankingEngine;
use vizrank_engine::selection::SelectionEngine;
use vizrank_engine::view::RowView;

use crate::answer::Answer;
use crate::params::TaskParameters;

/// Question key for ranking tasks.
pub const RANKING_QUESTION_KEY: &str = "chart-ranking";

/// Question key for selection tasks.
pub const SELECTION_QUESTION_KEY: &str = "condition";

/// Receiver for answer-payload updates.
///
/// Any `FnMut(&Answer)` closure qualifies.
pub trait AnswerSink {
    /// The task's answer payload changed.
    fn answer_changed(&mut self, answer: &Answer);
}

impl<F: FnMut(&Answer)> AnswerSink for F {
    fn answer_changed(&mut self, answer: &Answer) {
        self(answer);
    }
}

// ---------------------------------------------------------------------------
// RankingTask
// ---------------------------------------------------------------------------

/// A full best-to-worst ranking task over the guardrail chart variants.
pub struct RankingTask {
    seed: SessionSeed,
    engine: RankingEngine,
    answer: Answer,
    sink: Option<Box<dyn AnswerSink>>,
}

impl std::fmt::Debug for RankingTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingTask")
            .field("seed", &self.seed)
            .field("engine", &self.engine)
            .field("answer", &self.answer)
            .finish()
    }
}

impl RankingTask {
    /// Create a task with a fresh wall-clock seed.
    #[must_use]
    pub fn new(params: &TaskParameters) -> Self {
        Self::with_seed(params, SessionSeed::from_clock())
    }

    /// Create a task with an explicit seed (session replay, tests).
    #[must_use]
    pub fn with_seed(params: &TaskParameters, seed: SessionSeed) -> Self {
        let initial = seed.sequence(&params.guardrails);
        tracing::debug!(seed = seed.as_str(), order = ?initial, "ranking task initialized");
        let engine = RankingEngine::new(initial);
        // The initial order is itself a valid response; the runner holds a
        // complete ranking from the first render on.
        let answer = Answer::ranked(RANKING_QUESTION_KEY, engine.committed_order());
        Self {
            seed,
            engine,
            answer,
            sink: None,
        }
    }

    /// Attach the answer sink and immediately push the current payload.
    #[must_use]
    pub fn on_answer(mut self, sink: impl AnswerSink + 'static) -> Self {
        let mut sink = Box::new(sink);
        sink.answer_changed(&self.answer);
        self.sink = Some(sink);
        self
    }

    /// The session seed (record it to replay this task's layout).
    #[must_use]
    pub fn seed(&self) -> &SessionSeed {
        &self.seed
    }

    /// The wrapped ranking engine.
    #[must_use]
    pub fn engine(&self) -> &RankingEngine {
        &self.engine
    }

    /// The latest answer payload.
    #[must_use]
    pub fn current_answer(&self) -> &Answer {
        &self.answer
    }

    /// The rows to render, in current display order.
    #[must_use]
    pub fn rows(&self) -> Vec<RowView> {
        self.engine.rows()
    }

    /// Drive the task with a gesture; commits update the answer payload and
    /// notify the sink.
    pub fn handle(&mut self, event: InputEvent) {
        if self.engine.handle(event) {
            self.answer = Answer::ranked(RANKING_QUESTION_KEY, self.engine.committed_order());
            if let Some(sink) = self.sink.as_mut() {
                sink.answer_changed(&self.answer);
            }
        }
    }

    /// Adopt an externally forced order (e.g. a session reset by the
    /// runner). Does not emit — the external owner already has the value.
    pub fn reconcile(&mut self, external: &[ItemId]) {
        self.engine.reconcile(external);
        if !self.engine.drag_active() {
            self.answer = Answer::ranked(RANKING_QUESTION_KEY, self.engine.committed_order());
        }
    }
}

// ---------------------------------------------------------------------------
// SelectionTask
// ---------------------------------------------------------------------------

/// A single-pick selection task over the guardrail chart variants.
pub struct SelectionTask {
    seed: SessionSeed,
    engine: SelectionEngine,
    answer: Answer,
    sink: Option<Box<dyn AnswerSink>>,
}

impl std::fmt::Debug for SelectionTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionTask")
            .field("seed", &self.seed)
            .field("answer", &self.answer)
            .finish()
    }
}

impl SelectionTask {
    /// Create a task with a fresh wall-clock seed.
    #[must_use]
    pub fn new(params: &TaskParameters) -> Self {
        Self::with_seed(params, SessionSeed::from_clock())
    }

    /// Create a task with an explicit seed.
    #[must_use]
    pub fn with_seed(params: &TaskParameters, seed: SessionSeed) -> Self {
        let order = seed.sequence(&params.guardrails);
        tracing::debug!(seed = seed.as_str(), order = ?order, "selection task initialized");
        Self {
            seed,
            engine: SelectionEngine::new(order),
            answer: Answer::incomplete(),
            sink: None,
        }
    }

    /// Attach the answer sink and immediately push the current payload.
    #[must_use]
    pub fn on_answer(mut self, sink: impl AnswerSink + 'static) -> Self {
        let mut sink = Box::new(sink);
        sink.answer_changed(&self.answer);
        self.sink = Some(sink);
        self
    }

    /// The session seed.
    #[must_use]
    pub fn seed(&self) -> &SessionSeed {
        &self.seed
    }

    /// The wrapped selection engine.
    #[must_use]
    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    /// The latest answer payload.
    #[must_use]
    pub fn current_answer(&self) -> &Answer {
        &self.answer
    }

    /// Toggle `id` (click, or Enter/Space on a focused chart). Updates the
    /// answer payload and notifies the sink when the selection changed.
    pub fn toggle(&mut self, id: &ItemId) {
        if !self.engine.toggle(id) {
            return;
        }
        self.answer = match self.engine.selected() {
            Some(selected) => Answer::selected(SELECTION_QUESTION_KEY, selected),
            None => Answer::incomplete(),
        };
        if let Some(sink) = self.sink.as_mut() {
            sink.answer_changed(&self.answer);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
