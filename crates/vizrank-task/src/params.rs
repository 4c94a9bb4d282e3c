#![forbid(unsafe_code)]

//! Survey-task parameters.
//!
//! The hosting survey runner hands each task a JSON parameter object; every
//! field is optional and falls back to the study's defaults. The dataset and
//! chart plumbing these parameters describe (CSV columns, date windows,
//! sample counts) is consumed by external collaborators — the task layer
//! only carries them through and uses `guardrails` itself.

use serde::Deserialize;
use vizrank_core::item::ItemId;

/// The study's canonical guardrail strategies, in label order.
pub const BASE_GUARDRAILS: [&str; 4] = ["percentileClosest", "super_data", "metadata", "cluster"];

/// Parameters for one ranking or selection task instance.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TaskParameters {
    /// Dataset name; selects the default date window.
    pub dataset: String,
    /// Column holding the x value.
    pub x_var: String,
    /// Column holding the y value.
    pub y_var: String,
    /// Column holding the category (series) name.
    pub cat_var: String,
    /// Column holding the grouping attribute.
    pub group_var: String,
    /// Explicit window start (`YYYY-MM-DD`); `None` uses the dataset default.
    pub start_date: Option<String>,
    /// Explicit window end; `None` uses the dataset default.
    pub end_date: Option<String>,
    /// The focal series the charts are built around.
    pub selection: Vec<String>,
    /// Random-sample count for sampling-based guardrails.
    #[serde(rename = "numRandomSamples")]
    pub num_random_samples: u32,
    /// Quantile count for percentile-based guardrails.
    #[serde(rename = "numQuantiles")]
    pub num_quantiles: u32,
    /// The chart variants to rank, one per guardrail strategy.
    pub guardrails: Vec<ItemId>,
}

impl Default for TaskParameters {
    fn default() -> Self {
        Self {
            dataset: "clean_data".to_string(),
            x_var: "date".to_string(),
            y_var: "value".to_string(),
            cat_var: "name".to_string(),
            group_var: "region".to_string(),
            start_date: None,
            end_date: None,
            selection: vec!["Norway".to_string()],
            num_random_samples: 5,
            num_quantiles: 5,
            guardrails: BASE_GUARDRAILS.iter().map(|g| ItemId::from(*g)).collect(),
        }
    }
}

impl TaskParameters {
    /// The effective date window: explicit values win, otherwise the
    /// dataset's default range.
    #[must_use]
    pub fn date_range(&self) -> (&str, &str) {
        let (default_start, default_end) = if self.dataset == "clean_data" {
            ("2020-03-01", "2021-08-28")
        } else {
            ("2024-01-01", "2024-12-31")
        };
        (
            self.start_date.as_deref().unwrap_or(default_start),
            self.end_date.as_deref().unwrap_or(default_end),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
