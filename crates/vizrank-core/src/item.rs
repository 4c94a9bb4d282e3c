#![forbid(unsafe_code)]

//! Item identifiers and positional labels.
//!
//! An [`ItemId`] names one ranked entity — in the study, one chart variant
//! keyed by its guardrail strategy name (e.g. `"percentileClosest"`). The
//! token is opaque to the engines: they compare it, move it around, and hand
//! it back, but never interpret it.
//!
//! A [`LabelMap`] assigns each item its display label (`"Chart A"`,
//! `"Chart B"`, …) from its position in the *base* sequence. The assignment
//! is computed once at construction and never changes, so a chart keeps its
//! letter no matter where the participant drags it.
//!
//! # Invariants
//!
//! 1. Ids within one ranking are unique; duplicates are undefined behavior
//!    and rejected defensively by the engines.
//! 2. Label assignment depends only on the original base-sequence position,
//!    never on the current display order.

use core::fmt;

/// Opaque identifier for one ranked entity.
///
/// Cheap to clone, hashable, ordered, and convertible from string literals
/// so test fixtures read naturally:
///
/// ```
/// # use vizrank_core::ItemId;
/// let id = ItemId::from("cluster");
/// assert_eq!(id.as_str(), "cluster");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(String);

impl ItemId {
    /// Create an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Fixed positional display labels for a base sequence.
///
/// Position 0 becomes `"Chart A"`, position 1 `"Chart B"`, and so on;
/// past `Z` the letters continue spreadsheet-style (`AA`, `AB`, …). The map
/// is immutable for the lifetime of a task instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelMap {
    entries: Vec<(ItemId, String)>,
}

impl LabelMap {
    /// Build the label map from the base sequence order.
    #[must_use]
    pub fn from_base(base: &[ItemId]) -> Self {
        let entries = base
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), format!("Chart {}", letters(i))))
            .collect();
        Self { entries }
    }

    /// The label for `id`, if the id was in the base sequence.
    #[must_use]
    pub fn label(&self, id: &ItemId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, label)| label.as_str())
    }

    /// The label for `id`, falling back to the raw id for unknown items.
    #[must_use]
    pub fn label_or_id<'a>(&'a self, id: &'a ItemId) -> &'a str {
        self.label(id).unwrap_or(id.as_str())
    }

    /// Number of labeled items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no items are labeled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(id, label)` pairs in base-sequence order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &str)> {
        self.entries.iter().map(|(id, label)| (id, label.as_str()))
    }
}

/// Spreadsheet-style column letters: 0 → "A", 25 → "Z", 26 → "AA".
fn letters(index: usize) -> String {
    let mut n = index;
    let mut out = Vec::new();
    loop {
        out.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
