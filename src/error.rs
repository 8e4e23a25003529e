use thiserror::Error;

use crate::session::{Phase, SessionId};

/// Failure of any AI-backed generation step.
///
/// The orchestrator maps every variant to the static fallback provider, so
/// none of these ever reach the end user. Callers that need to distinguish
/// a permanent credential problem from a transient one can match on the
/// variant, but the quiz flow treats them uniformly.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("credential error: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProviderError {
    #[error("authentication rejected")]
    Authentication,
    #[error("rate limit exceeded")]
    RateLimit,
    #[error("API error: {0}")]
    Api(String),
    #[error("empty response body")]
    EmptyResponse,
}

/// Rejection of a model-produced question payload. A single bad record fails
/// the whole set: scoring is only well-defined over exactly five questions.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("no usable JSON structure in response")]
    NoStructure,
    #[error("expected 5 question records, got {0}")]
    WrongCount(usize),
    #[error("question text is empty")]
    EmptyQuestion,
    #[error("expected 4 options, got {0}")]
    OptionCount(usize),
    #[error("options are not pairwise distinct")]
    DuplicateOption,
    #[error("correct index {0} outside 0..=3")]
    IndexOutOfRange(i64),
    #[error("correct answer {0:?} does not match any option")]
    UnresolvedAnswer(String),
    #[error("record has no correct-answer reference")]
    MissingAnswer,
}

/// API-misuse errors from the session orchestrator. Unlike `GenerationError`
/// these do surface to the caller, which treats them the way a web shell
/// treats a missing session: redirect and start over. They never originate
/// from the AI path.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("unknown session {0}")]
    Unknown(SessionId),
    #[error("operation not allowed in phase {actual:?} (expected {expected:?})")]
    Phase { expected: Phase, actual: Phase },
    #[error("question index {0} out of range")]
    QuestionIndex(usize),
    #[error("option index {0} out of range")]
    OptionIndex(usize),
}
