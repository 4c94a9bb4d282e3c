#![forbid(unsafe_code)]

//! Answer-submission payloads.
//!
//! Every committed preference translates into `{status, answers}`: `status`
//! is true once a valid response exists, and `answers` maps question keys to
//! either a full ranked order or a single selected item. The payload is
//! serialized with serde_json for the hosting survey runner.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vizrank_core::item::ItemId;

/// One answer value: a full order or a single item.
///
/// Serialized untagged — an order is a JSON array, a single item a JSON
/// string — matching the shapes the survey runner stores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A single selected item.
    Item(ItemId),
    /// A full best-to-worst order.
    Order(Vec<ItemId>),
}

/// The task's answer-submission payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// True once a valid response has been committed.
    pub status: bool,
    /// Question key → response.
    pub answers: BTreeMap<String, AnswerValue>,
}

impl Answer {
    /// No response yet: `{status: false, answers: {}}`.
    #[must_use]
    pub fn incomplete() -> Self {
        Self {
            status: false,
            answers: BTreeMap::new(),
        }
    }

    /// A committed ranking under `key`.
    #[must_use]
    pub fn ranked(key: &str, order: &[ItemId]) -> Self {
        let mut answers = BTreeMap::new();
        answers.insert(key.to_string(), AnswerValue::Order(order.to_vec()));
        Self {
            status: true,
            answers,
        }
    }

    /// A committed single selection under `key`.
    #[must_use]
    pub fn selected(key: &str, id: &ItemId) -> Self {
        let mut answers = BTreeMap::new();
        answers.insert(key.to_string(), AnswerValue::Item(id.clone()));
        Self {
            status: true,
            answers,
        }
    }
}

impl Default for Answer {
    fn default() -> Self {
        Self::incomplete()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
