//! Core quiz data model: questions, sets, scores, and feedback text.
//!
//! All types here are immutable after construction. Validation happens in the
//! constructors; a value that exists is well-formed, so the session layer and
//! the fallback provider can rely on the invariants without re-checking.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Every quiz has exactly this many questions.
pub const QUESTION_COUNT: usize = 5;
/// Every question has exactly this many options.
pub const OPTION_COUNT: usize = 4;
/// Upper bound on feedback length, in words.
pub const MAX_FEEDBACK_WORDS: usize = 50;

/// A single multiple-choice question: prompt text, four distinct options, and
/// the index of the correct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    options: [String; OPTION_COUNT],
    correct: usize,
}

impl Question {
    /// Validating constructor. Rejects empty prompt text, non-distinct
    /// options, and an out-of-range correct index.
    pub fn new(
        prompt: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct: usize,
    ) -> Result<Self, ParseError> {
        let prompt = prompt.into().trim().to_string();
        if prompt.is_empty() {
            return Err(ParseError::EmptyQuestion);
        }

        let options = options.map(|option| option.trim().to_string());
        for i in 0..OPTION_COUNT {
            for j in (i + 1)..OPTION_COUNT {
                if options[i] == options[j] {
                    return Err(ParseError::DuplicateOption);
                }
            }
        }

        if correct >= OPTION_COUNT {
            return Err(ParseError::IndexOutOfRange(correct as i64));
        }

        Ok(Self {
            prompt,
            options,
            correct,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Whether the given selection answers this question correctly.
    /// `None` (unanswered) is never correct.
    pub fn is_correct(&self, selected: Option<usize>) -> bool {
        selected == Some(self.correct)
    }
}

/// The ordered set of exactly five questions for one quiz attempt.
///
/// A set is entirely AI-produced or entirely fallback; partial mixing would
/// leave scoring ill-defined when the two sources disagree on count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Result<Self, ParseError> {
        if questions.len() != QUESTION_COUNT {
            return Err(ParseError::WrongCount(questions.len()));
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Score a full answer sheet against this set. Total and deterministic:
    /// unanswered slots count as incorrect.
    pub fn score(&self, answers: &[Option<usize>; QUESTION_COUNT]) -> ScoreResult {
        let mut flags = [false; QUESTION_COUNT];
        for (i, question) in self.questions.iter().enumerate() {
            flags[i] = question.is_correct(answers[i]);
        }
        ScoreResult {
            correct: flags.iter().filter(|&&hit| hit).count(),
            total: QUESTION_COUNT,
            flags,
        }
    }
}

/// Result of scoring one quiz: computed once at submission, read-only after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub correct: usize,
    pub total: usize,
    pub flags: [bool; QUESTION_COUNT],
}

impl ScoreResult {
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct * 100 / self.total) as u32
    }

    pub fn tier(&self) -> ScoreTier {
        match self.percentage() {
            80..=100 => ScoreTier::Excellent,
            60..=79 => ScoreTier::Good,
            40..=59 => ScoreTier::Fair,
            _ => ScoreTier::Poor,
        }
    }
}

/// Performance bands used to pick a canned feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// A short encouragement line shown on the results screen, whether it came
/// from the model or from the fallback provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackMessage(String);

impl FeedbackMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FeedbackMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(tags: [&str; 4]) -> [String; 4] {
        tags.map(str::to_string)
    }

    fn set_with_correct(correct: usize) -> QuestionSet {
        let questions = (0..QUESTION_COUNT)
            .map(|i| {
                Question::new(
                    format!("Question {i}?"),
                    options(["a", "b", "c", "d"]),
                    correct,
                )
                .unwrap()
            })
            .collect();
        QuestionSet::new(questions).unwrap()
    }

    #[test]
    fn question_rejects_empty_prompt() {
        let err = Question::new("  ", options(["a", "b", "c", "d"]), 0).unwrap_err();
        assert_eq!(err, ParseError::EmptyQuestion);
    }

    #[test]
    fn question_rejects_duplicate_options() {
        let err = Question::new("Q?", options(["a", "b", "a", "d"]), 0).unwrap_err();
        assert_eq!(err, ParseError::DuplicateOption);
    }

    #[test]
    fn question_rejects_out_of_range_index() {
        let err = Question::new("Q?", options(["a", "b", "c", "d"]), 4).unwrap_err();
        assert_eq!(err, ParseError::IndexOutOfRange(4));
    }

    #[test]
    fn set_requires_exactly_five() {
        let questions = vec![
            Question::new("Q?", options(["a", "b", "c", "d"]), 0).unwrap();
            4
        ];
        assert_eq!(
            QuestionSet::new(questions).unwrap_err(),
            ParseError::WrongCount(4)
        );
    }

    #[test]
    fn scoring_counts_unanswered_as_incorrect() {
        let set = set_with_correct(1);
        let score = set.score(&[Some(1), Some(1), Some(0), None, None]);
        assert_eq!(score.correct, 2);
        assert_eq!(score.total, 5);
        assert_eq!(score.flags, [true, true, false, false, false]);
    }

    #[test]
    fn tiers_follow_percentage_bands() {
        let set = set_with_correct(0);
        let all = [Some(0); QUESTION_COUNT];
        assert_eq!(set.score(&all).tier(), ScoreTier::Excellent);

        let tiers = [
            (5, ScoreTier::Excellent),
            (4, ScoreTier::Excellent),
            (3, ScoreTier::Good),
            (2, ScoreTier::Fair),
            (1, ScoreTier::Poor),
            (0, ScoreTier::Poor),
        ];
        for (correct, tier) in tiers {
            let mut answers = [Some(1); QUESTION_COUNT];
            for slot in answers.iter_mut().take(correct) {
                *slot = Some(0);
            }
            assert_eq!(set.score(&answers).tier(), tier, "correct = {correct}");
        }
    }
}
