//! Analyzes a sample piece of feedback against a real OpenAI-compatible
//! endpoint. Requires `OPENAI_API_KEY` to be set.

use std::sync::Arc;

use feedback_analysis::{AnalysisConfig, AnalysisOrchestrator, OpenAiClassifier, OpenAiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // 1. Build the classifier client from explicit configuration
    let api_key = std::env::var("OPENAI_API_KEY")?;
    let classifier = OpenAiClassifier::new(OpenAiConfig::new(api_key));

    // 2. Wire the orchestrator with the default retry policy
    let orchestrator = AnalysisOrchestrator::new(Arc::new(classifier), AnalysisConfig::default());

    // 3. Analyze a sample feedback string; this never fails, worst case it
    //    prints the fallback result
    let feedback = "The app freezes when I click submit, and I lose my draft every time.";
    println!("Analyzing: {feedback}");

    let result = orchestrator.analyze(feedback).await;
    println!("\nAnalysis:\n{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
