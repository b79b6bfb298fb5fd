//! Per-attempt failure type for the analysis pipeline.

use std::time::Duration;

use thiserror::Error;

use crate::client::ClassifierError;

/// Why a single classification attempt failed.
///
/// Transport and payload failures are treated identically by the retry
/// loop; the distinction only matters for logging. This error never crosses
/// the [`analyze`](crate::AnalysisOrchestrator::analyze) boundary — the
/// orchestrator converts the terminal failure into the fallback result.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The remote call could not be completed.
    #[error("classifier call failed: {0}")]
    Classifier(#[from] ClassifierError),

    /// The remote call exceeded its per-attempt deadline.
    #[error("classifier call timed out after {0:?}")]
    Timeout(Duration),

    /// The completion text was not a parsable analysis document.
    #[error("payload could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload parsed but violated the result invariants.
    #[error("payload failed validation: {0}")]
    InvalidPayload(String),
}
