#![forbid(unsafe_code)]

//! Foundation types for the vizrank preference-study stack.
//!
//! This crate holds the pieces every other layer builds on:
//!
//! - [`item`]: opaque item identifiers and the fixed positional label map.
//! - [`event`]: the canonical input events a frontend translates gestures
//!   into.
//! - [`sequencer`]: the deterministic seeded shuffle that fixes a session's
//!   initial chart order, plus the once-per-task session seed.
//!
//! Nothing here renders or performs I/O; these are plain data types and pure
//! functions so the interaction engines above them stay testable without a
//! frontend.

pub mod event;
pub mod item;
pub mod sequencer;

pub use event::InputEvent;
pub use item::{ItemId, LabelMap};
pub use sequencer::{SeededRng, SessionSeed, shuffle};
