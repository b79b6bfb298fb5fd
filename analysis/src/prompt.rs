//! Prompt construction for the remote classifier.
//!
//! The instruction template is fixed; the feedback text is passed through
//! literally with no validation or normalization (input checking belongs to
//! the intake layer).

/// System instruction sent with every classification request.
pub const ANALYSIS_PROMPT: &str = "\
You are an AI assistant that analyzes customer feedback.
Given a piece of feedback, extract:
1. A short summary restating the feedback
2. Sentiment (positive, neutral, negative)
3. Priority (P0, P1, P2, P3), where P0 is most urgent
4. Relevant tags (array of keywords)
5. A recommended next action

Respond with ONLY a valid JSON object in this exact format:
{
  \"summary\": \"short restatement of the feedback\",
  \"sentiment\": \"positive|neutral|negative\",
  \"priority\": \"P0|P1|P2|P3\",
  \"tags\": [\"tag1\", \"tag2\", \"tag3\"],
  \"nextAction\": \"recommended follow-up\"
}

Do not include any explanations or additional text outside the JSON.";

/// Wraps the raw feedback text into the user half of the request.
#[must_use]
pub fn user_prompt(text: &str) -> String {
    format!("Analyze this feedback: \"{text}\"")
}
