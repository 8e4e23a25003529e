//! The AI client adapter: builds prompts, issues one provider call per
//! operation, validates the result, and shapes feedback text.
//!
//! There are no retries here. Every failure mode — missing credential,
//! transport error, provider rejection, unparseable output — collapses into
//! [`GenerationError`] and the caller decides what to do (the session layer
//! always answers with the fallback provider).

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::clients::GenerativeClient;
use crate::error::{GenerationError, ProviderError};
use crate::interceptors::Interceptor;
use crate::parse::parse_question_set;
use crate::prompt;
use crate::quiz::{FeedbackMessage, QuestionSet, ScoreResult, MAX_FEEDBACK_WORDS};
use crate::topic::Topic;

#[derive(Debug, Clone)]
pub struct QuizGenerator<C> {
    client: C,
    interceptor: Option<Arc<dyn Interceptor>>,
}

impl<C: GenerativeClient> QuizGenerator<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            interceptor: None,
        }
    }

    /// Record every prompt/response exchange through the given interceptor.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptor = Some(interceptor);
        self
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Request a full five-question set for the topic: one outbound call,
    /// strict validation, no partial acceptance.
    #[instrument(skip(self), fields(topic = topic.slug()))]
    pub async fn generate_questions(&self, topic: Topic) -> Result<QuestionSet, GenerationError> {
        let prompt = prompt::question_prompt(topic);
        let raw = self.ask(prompt).await?;
        let set = parse_question_set(&raw)?;
        info!(topic = topic.slug(), "generated question set");
        Ok(set)
    }

    /// Request a short encouragement line for a scored quiz. The response is
    /// stripped of wrapping quotes and capped at fifty words.
    #[instrument(skip(self, score), fields(topic = topic.slug(), correct = score.correct))]
    pub async fn generate_feedback(
        &self,
        score: &ScoreResult,
        topic: Topic,
    ) -> Result<FeedbackMessage, GenerationError> {
        let prompt = prompt::feedback_prompt(score, topic);
        let raw = self.ask(prompt).await?;
        let feedback =
            shape_feedback(&raw).ok_or(GenerationError::Provider(ProviderError::EmptyResponse))?;
        info!(feedback_len = feedback.as_str().len(), "generated feedback");
        Ok(feedback)
    }

    async fn ask(&self, prompt: String) -> Result<String, GenerationError> {
        match &self.interceptor {
            Some(interceptor) => {
                let raw = self.client.ask_raw(prompt.clone()).await?;
                if let Err(e) = interceptor.save(&prompt, &raw).await {
                    warn!(error = %e, "failed to record AI exchange");
                }
                Ok(raw)
            }
            None => self.client.ask_raw(prompt).await,
        }
    }
}

/// Strip wrapping quotes and cap the message at [`MAX_FEEDBACK_WORDS`] words.
/// Returns `None` for an effectively empty response.
fn shape_feedback(raw: &str) -> Option<FeedbackMessage> {
    let text = raw
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();
    if text.is_empty() {
        return None;
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let capped = if words.len() > MAX_FEEDBACK_WORDS {
        words[..MAX_FEEDBACK_WORDS].join(" ")
    } else {
        words.join(" ")
    };
    Some(FeedbackMessage::new(capped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_feedback_strips_wrapping_quotes() {
        let feedback = shape_feedback("\"Great effort, keep going!\"").unwrap();
        assert_eq!(feedback.as_str(), "Great effort, keep going!");
    }

    #[test]
    fn shape_feedback_caps_at_fifty_words() {
        let long = (0..80).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let feedback = shape_feedback(&long).unwrap();
        assert_eq!(feedback.as_str().split_whitespace().count(), 50);
        assert!(feedback.as_str().starts_with("w0 w1"));
    }

    #[test]
    fn shape_feedback_rejects_blank_text() {
        assert!(shape_feedback("  \"\"  ").is_none());
    }
}
