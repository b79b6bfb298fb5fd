//! Feedback analysis pipeline.
//!
//! Turns raw customer feedback text into a structured [`AnalysisResult`]
//! by calling a remote language-model classifier under a bounded-retry
//! policy, validating the returned payload, and falling back to a safe
//! default result when every attempt fails:
//!
//! - [`AnalysisOrchestrator`] - The total `analyze` entry point
//! - [`Classifier`] - Injectable seam for the remote classifier
//! - [`OpenAiClassifier`] - OpenAI-compatible chat-completions client
//! - [`AnalysisResult`] - The five-field analysis value
//! - [`AnalysisConfig`] / [`OpenAiConfig`] - Explicit configuration values

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod prompt;

pub use client::{Classifier, ClassifierError, OpenAiClassifier};
pub use config::{AnalysisConfig, OpenAiConfig};
pub use error::AnalysisError;
pub use model::{AnalysisResult, Priority, Sentiment};
pub use orchestrator::AnalysisOrchestrator;
