//! Remote classifier seam and its OpenAI-compatible implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::OpenAiConfig;

/// Sampling temperature for classification; low to keep output close to the
/// requested JSON shape.
const TEMPERATURE: f64 = 0.3;

/// Completion budget; the analysis document is small.
const MAX_TOKENS: u32 = 500;

/// Errors from the remote classifier call.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The HTTP request itself failed (connect, TLS, body read).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("classifier returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The endpoint answered 2xx but carried no completion text.
    #[error("classifier returned no completion")]
    EmptyCompletion,
}

/// A remote service that turns a prompt pair into completion text.
///
/// Implementations are injected into
/// [`AnalysisOrchestrator`](crate::AnalysisOrchestrator) at construction
/// time, so tests substitute a scripted double without any process-wide
/// state.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Sends one classification request and returns the raw completion
    /// text.
    async fn classify(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ClassifierError>;
}

/// [`Classifier`] backed by an OpenAI-compatible `/chat/completions`
/// endpoint.
pub struct OpenAiClassifier {
    http: reqwest::Client,
    config: OpenAiConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl OpenAiClassifier {
    /// Creates a classifier with a fresh connection pool.
    #[must_use]
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Creates a classifier reusing an existing HTTP client.
    #[must_use]
    pub const fn with_client(http: reqwest::Client, config: OpenAiConfig) -> Self {
        Self { http, config }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Classifier for OpenAiClassifier {
    async fn classify(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ClassifierError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json().await?;
        extract_completion(completion)
    }
}

/// Pulls the first choice's message content out of a chat response.
fn extract_completion(response: ChatResponse) -> Result<String, ClassifierError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(ClassifierError::EmptyCompletion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_choice_content() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"content": "{\"ok\": true}"}}]}"#,
        )
        .unwrap();

        assert_eq!(extract_completion(response).unwrap(), "{\"ok\": true}");
    }

    #[test]
    fn empty_choices_is_an_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            extract_completion(response),
            Err(ClassifierError::EmptyCompletion)
        ));
    }

    #[test]
    fn null_content_is_an_error() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(matches!(
            extract_completion(response),
            Err(ClassifierError::EmptyCompletion)
        ));
    }

    #[test]
    fn endpoint_handles_trailing_slash() {
        let classifier =
            OpenAiClassifier::new(OpenAiConfig::new("k").with_base_url("http://x/v1/"));
        assert_eq!(classifier.endpoint(), "http://x/v1/chat/completions");
    }

    #[test]
    fn request_body_matches_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage {
                role: "system",
                content: "instructions",
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["temperature"], 0.3);
        assert_eq!(value["max_tokens"], 500);
    }
}
