#![forbid(unsafe_code)]

//! Seeded sequencer: deterministic initial ordering for a session.
//!
//! Each task instance shuffles its base chart set exactly once, using a
//! pseudo-random generator seeded from a string. The same seed and the same
//! items always produce the bit-identical permutation, so a session can be
//! replayed (debugging, re-showing a participant the same layout) by
//! recording nothing but the seed.
//!
//! The shuffle is Fisher–Yates from the last index down to 1 with
//! `j = floor(rand() * (i + 1))`, with `rand()` uniform in `[0, 1)`.
//!
//! # Seed lifecycle
//!
//! A [`SessionSeed`] is generated once at task start (wall clock, millisecond
//! resolution) or injected explicitly, and is reused for the lifetime of the
//! task instance. Repeated shuffles with the stored seed cannot disagree
//! with the first one.

use std::time::{SystemTime, UNIX_EPOCH};

/// Deterministic xorshift64-based generator seeded from a string.
///
/// The seed string is folded through FNV-1a to a 64-bit state; a zero state
/// (possible for adversarial inputs) is nudged to a fixed non-zero constant
/// since xorshift has an absorbing zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

impl SeededRng {
    /// Seed the generator from an arbitrary string.
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        let mut hash = FNV_OFFSET;
        for byte in seed.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        Self {
            state: if hash == 0 { FNV_OFFSET } else { hash },
        }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        // Output scrambling so low-entropy seeds still spread across the range.
        self.state.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Next value uniform in `[0, 1)`.
    ///
    /// Uses the top 53 bits so every representable output is an exact
    /// multiple of 2⁻⁵³, and 1.0 is never produced.
    pub fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
        (self.next_u64() >> 11) as f64 * SCALE
    }
}

/// Produce the deterministic permutation of `base` for `seed`.
///
/// Same seed + same items ⇒ identical output, across calls and across
/// separate generator instances. The input is never mutated.
#[must_use]
pub fn shuffle<T: Clone>(base: &[T], seed: &str) -> Vec<T> {
    let mut rng = SeededRng::from_seed(seed);
    let mut order = base.to_vec();
    for i in (1..order.len()).rev() {
        // floor(rand() * (i + 1)); rand() < 1.0 keeps j in 0..=i.
        let j = (rng.next_f64() * (i + 1) as f64) as usize;
        order.swap(i, j);
    }
    order
}

/// A per-task-instance seed: generated once, reused forever.
///
/// Replaces hidden wall-clock state with an explicit value the task layer
/// owns. Construct with [`SessionSeed::from_clock`] at task start, or with
/// [`SessionSeed::new`] to replay a recorded session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSeed(String);

impl SessionSeed {
    /// An explicit seed, e.g. one recorded from a previous session.
    #[must_use]
    pub fn new(seed: impl Into<String>) -> Self {
        Self(seed.into())
    }

    /// A fresh seed from the wall clock (milliseconds since the Unix epoch,
    /// as a decimal string).
    #[must_use]
    pub fn from_clock() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let seed = millis.to_string();
        tracing::debug!(seed = %seed, "generated session seed");
        Self(seed)
    }

    /// The seed string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shuffle `base` with this seed.
    #[must_use]
    pub fn sequence<T: Clone>(&self, base: &[T]) -> Vec<T> {
        shuffle(base, &self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
