//! The analysis result value produced for every piece of feedback.

use serde::{Deserialize, Serialize};

/// Summary used when the classifier could not produce one.
pub const FALLBACK_SUMMARY: &str = "Summary unavailable: automatic analysis failed";

/// Next action used when the classifier could not produce one.
pub const FALLBACK_NEXT_ACTION: &str = "Review this feedback manually";

/// Overall tone of a piece of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Praise or satisfaction.
    Positive,
    /// Neither clearly positive nor negative.
    Neutral,
    /// Complaint, bug report, or frustration.
    Negative,
}

/// Urgency ranking, P0 most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    /// Drop everything.
    P0,
    /// Urgent, next in line.
    P1,
    /// Normal triage queue.
    P2,
    /// Nice to have.
    P3,
}

/// Structured classification of one piece of feedback.
///
/// Every field is always populated; callers never see a partial result.
/// Constructed fresh per analysis call and handed to the caller by value,
/// which owns storing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Short human-readable restatement of the feedback.
    pub summary: String,
    /// Overall tone.
    pub sentiment: Sentiment,
    /// Keyword labels; may be empty.
    pub tags: Vec<String>,
    /// Urgency ranking.
    pub priority: Priority,
    /// Recommended follow-up.
    pub next_action: String,
}

impl AnalysisResult {
    /// The fixed result returned when every classification attempt failed.
    ///
    /// Neutral sentiment and P2 keep the feedback in the normal triage
    /// queue: neither dismissed nor over-escalated.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            summary: FALLBACK_SUMMARY.to_string(),
            sentiment: Sentiment::Neutral,
            tags: Vec::new(),
            priority: Priority::P2,
            next_action: FALLBACK_NEXT_ACTION.to_string(),
        }
    }
}
