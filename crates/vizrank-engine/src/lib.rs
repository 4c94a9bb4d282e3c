#![forbid(unsafe_code)]

//! Interaction engines for chart-preference studies.
//!
//! Two state machines, both plain controllers with no frontend coupling:
//!
//! - [`RankingEngine`](ranking::RankingEngine): a drag-reorderable list with
//!   live preview, commit-on-drop, reset-to-baseline, and controlled-value
//!   reconciliation.
//! - [`SelectionEngine`](selection::SelectionEngine): the single-pick
//!   radio-style variant.
//!
//! [`view`] exposes the render-ready row model so a presentation layer can
//! draw the list without holding any ranking logic.

pub mod ranking;
pub mod selection;
pub mod view;

pub use ranking::{ChangeSink, DragSession, RankingEngine, relocate};
pub use selection::{SelectionEngine, SelectionSink};
pub use view::{RowView, SlotLabel};
