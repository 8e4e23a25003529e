//! Prompt templates for question and feedback generation.
//!
//! The question template embeds the JSON schema of [`RawQuestion`] so the
//! model has a machine-readable contract to target in addition to the plain
//! rules; the validator stays strict regardless of how well it complies.

use schemars::schema_for;

use crate::parse::RawQuestion;
use crate::quiz::{ScoreResult, MAX_FEEDBACK_WORDS, QUESTION_COUNT};
use crate::topic::Topic;

/// Build the question-generation prompt for a topic.
pub fn question_prompt(topic: Topic) -> String {
    let schema = schema_for!(RawQuestion);
    let schema_json = serde_json::to_string_pretty(&schema)
        .unwrap_or_else(|_| "Schema serialization failed".to_string());
    let name = topic.display_name();

    format!(
        "You are a quiz generator. Create {QUESTION_COUNT} multiple-choice questions about {name}.\n\
         \n\
         IMPORTANT RULES:\n\
         1. Check all spelling and grammar carefully\n\
         2. End questions with \"?\" not \".\"\n\
         3. Return ONLY a valid JSON array - no extra text before or after\n\
         4. Each question needs exactly 4 distinct options\n\
         5. correct_index must be 0, 1, 2, or 3\n\
         \n\
         ## Response Format\n\
         Return a JSON array of {QUESTION_COUNT} objects, each matching this schema:\n\
         ```json\n\
         {schema_json}\n\
         ```\n\
         \n\
         Generate {QUESTION_COUNT} interesting and educational questions about {name}:"
    )
}

/// Build the feedback-generation prompt for a scored quiz.
pub fn feedback_prompt(score: &ScoreResult, topic: Topic) -> String {
    format!(
        "Score: {}/{} on {} quiz.\n\
         Write short encouraging sentences (max {MAX_FEEDBACK_WORDS} words). No emojis.",
        score.correct,
        score.total,
        topic.display_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QUESTION_COUNT;

    #[test]
    fn question_prompt_names_topic_and_schema() {
        let prompt = question_prompt(Topic::Space);
        assert!(prompt.contains("Space Exploration"));
        assert!(prompt.contains("correct_index"));
        assert!(prompt.contains("```json"));
    }

    #[test]
    fn feedback_prompt_carries_score() {
        let score = ScoreResult {
            correct: 3,
            total: QUESTION_COUNT,
            flags: [true, true, true, false, false],
        };
        let prompt = feedback_prompt(&score, Topic::History);
        assert!(prompt.contains("3/5"));
        assert!(prompt.contains("World History"));
    }
}
