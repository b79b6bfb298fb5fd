//! Orchestration of the classification pipeline: prompt, retry, fallback.

use std::sync::Arc;

use feedback_retry::{retry_with_backoff, RetryPolicy};

use crate::client::Classifier;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::model::AnalysisResult;
use crate::prompt::{self, ANALYSIS_PROMPT};

/// Runs feedback text through the remote classifier and always produces a
/// complete [`AnalysisResult`].
///
/// The classifier's unreliability stays entirely behind this type: each
/// remote call gets its own deadline, failed attempts are retried with
/// exponential backoff, and once the retry budget is spent the caller
/// receives [`AnalysisResult::fallback`] instead of an error.
///
/// Calls are independent; the orchestrator holds no per-call state, so one
/// instance can serve concurrent `analyze` calls.
pub struct AnalysisOrchestrator {
    classifier: Arc<dyn Classifier>,
    config: AnalysisConfig,
}

impl AnalysisOrchestrator {
    /// Creates an orchestrator around an injected classifier.
    #[must_use]
    pub fn new(classifier: Arc<dyn Classifier>, config: AnalysisConfig) -> Self {
        Self { classifier, config }
    }

    /// Analyzes one piece of feedback.
    ///
    /// Never fails: any input string resolves to a fully populated result,
    /// falling back to the fixed degraded value when every attempt is
    /// exhausted. Each call issues fresh requests; nothing is cached.
    pub async fn analyze(&self, text: &str) -> AnalysisResult {
        let policy = RetryPolicy::new(self.config.max_retries, self.config.initial_delay);
        let user_prompt = prompt::user_prompt(text);

        let user_prompt = &user_prompt;

        let outcome = retry_with_backoff(&policy, || async move {
            let result = self.attempt(user_prompt).await;
            if let Err(ref error) = result {
                tracing::debug!(
                    event = "analysis_attempt_failed",
                    error = %error,
                    "analysis_attempt_failed"
                );
            }
            result
        })
        .await;

        match outcome {
            Ok(result) => result,
            Err(terminal) => {
                tracing::warn!(
                    event = "analysis_fallback",
                    attempts = terminal.attempts,
                    error = %terminal.source,
                    "analysis_fallback: returning default result after {} attempts",
                    terminal.attempts,
                );
                AnalysisResult::fallback()
            }
        }
    }

    /// One classification attempt: deadline-bounded remote call, then
    /// parse and validate. Every failure mode comes back as a plain
    /// `Err` for the retry loop.
    async fn attempt(&self, user_prompt: &str) -> Result<AnalysisResult, AnalysisError> {
        let call = self.classifier.classify(ANALYSIS_PROMPT, user_prompt);
        let completion = tokio::time::timeout(self.config.attempt_timeout, call)
            .await
            .map_err(|_| AnalysisError::Timeout(self.config.attempt_timeout))??;

        parse_payload(&completion)
    }
}

/// Parses completion text into a validated [`AnalysisResult`].
///
/// Enum membership for `sentiment`/`priority` and the string-sequence shape
/// of `tags` are enforced by the typed deserialization; on top of that the
/// summary must be non-empty.
fn parse_payload(completion: &str) -> Result<AnalysisResult, AnalysisError> {
    let result: AnalysisResult = serde_json::from_str(completion)?;

    if result.summary.trim().is_empty() {
        return Err(AnalysisError::InvalidPayload("empty summary".to_string()));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use crate::model::{Priority, Sentiment};

    use super::*;

    #[test]
    fn parses_well_formed_payload() {
        let result = parse_payload(
            r#"{"summary": "App freezes on submit", "sentiment": "negative",
                "tags": ["bug", "ui"], "priority": "P1",
                "nextAction": "Investigate handler"}"#,
        )
        .unwrap();

        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.priority, Priority::P1);
    }

    #[test]
    fn non_json_completion_is_a_parse_error() {
        assert!(matches!(
            parse_payload("Sure! Here is the analysis you asked for."),
            Err(AnalysisError::Parse(_))
        ));
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let err = parse_payload(
            r#"{"summary": "s", "sentiment": "neutral", "tags": [], "priority": "P2"}"#,
        );
        assert!(matches!(err, Err(AnalysisError::Parse(_))));
    }

    #[test]
    fn blank_summary_is_rejected() {
        let err = parse_payload(
            r#"{"summary": "  ", "sentiment": "neutral", "tags": [],
                "priority": "P2", "nextAction": "n"}"#,
        );
        assert!(matches!(err, Err(AnalysisError::InvalidPayload(_))));
    }
}
