//! Validator for model-produced question payloads.
//!
//! The provider's output is untrusted, weakly-typed text: field presence,
//! counts, and index ranges are all checked here before anything reaches the
//! session layer. There is no partial acceptance: one bad record (or a wrong
//! record count) rejects the whole set and the caller falls back.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ParseError;
use crate::extract::first_match;
use crate::quiz::{Question, QuestionSet, OPTION_COUNT, QUESTION_COUNT};

/// Wire shape of one model-produced question record.
///
/// Field names follow the prompt contract; the camelCase spellings the model
/// tends to emit anyway are accepted as aliases. The correct answer may be
/// referenced by index or by repeating the option text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RawQuestion {
    /// The question text, ending in a question mark.
    pub question: String,
    /// Exactly four answer options.
    pub options: Vec<String>,
    /// Zero-based index of the correct option (0, 1, 2, or 3).
    #[serde(default, alias = "correctIndex")]
    pub correct_index: Option<i64>,
    /// Correct option referenced by its text instead of its index.
    #[serde(default, alias = "correctAnswer", alias = "answer")]
    #[schemars(skip)]
    pub correct_answer: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuestionsEnvelope {
    questions: Vec<RawQuestion>,
}

/// Parse raw model text into a validated five-question set.
///
/// Accepts a bare JSON array of records, a `{"questions": [...]}` envelope,
/// or either shape embedded anywhere in surrounding prose or code fences.
/// Deterministic: the same input always yields the same result.
pub fn parse_question_set(raw: &str) -> Result<QuestionSet, ParseError> {
    let records = extract_records(raw).ok_or(ParseError::NoStructure)?;
    debug!(records = records.len(), "extracted question records");

    if records.len() != QUESTION_COUNT {
        return Err(ParseError::WrongCount(records.len()));
    }

    let questions = records
        .into_iter()
        .map(validate_record)
        .collect::<Result<Vec<_>, _>>()?;
    QuestionSet::new(questions)
}

fn extract_records(raw: &str) -> Option<Vec<RawQuestion>> {
    // Envelope first: its inner array would also match the bare-array shape,
    // and the envelope keeps whatever ordering the model chose.
    if let Some(envelope) = first_match::<QuestionsEnvelope>(raw) {
        return Some(envelope.questions);
    }
    first_match::<Vec<RawQuestion>>(raw)
}

fn validate_record(raw: RawQuestion) -> Result<Question, ParseError> {
    if raw.options.len() != OPTION_COUNT {
        return Err(ParseError::OptionCount(raw.options.len()));
    }
    let options: [String; OPTION_COUNT] = raw
        .options
        .try_into()
        .map_err(|bad: Vec<String>| ParseError::OptionCount(bad.len()))?;

    let correct = resolve_answer(raw.correct_index, raw.correct_answer.as_deref(), &options)?;
    Question::new(raw.question, options, correct)
}

fn resolve_answer(
    index: Option<i64>,
    answer: Option<&str>,
    options: &[String; OPTION_COUNT],
) -> Result<usize, ParseError> {
    if let Some(index) = index {
        if !(0..OPTION_COUNT as i64).contains(&index) {
            return Err(ParseError::IndexOutOfRange(index));
        }
        return Ok(index as usize);
    }

    match answer {
        Some(text) => {
            let text = text.trim();
            options
                .iter()
                .position(|option| option.trim() == text)
                .ok_or_else(|| ParseError::UnresolvedAnswer(text.to_string()))
        }
        None => Err(ParseError::MissingAnswer),
    }
}
