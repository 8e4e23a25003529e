//! Quiz session state machine and the keyed orchestrator service.
//!
//! Each session belongs to exactly one browser session and moves strictly
//! forward: `Loading → InProgress → Submitted → Scored`. `Scored` is
//! terminal; a new quiz means a new session. Sessions live in an in-memory
//! keyed store so the orchestrator itself stays stateless per request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::clients::GenerativeClient;
use crate::error::SessionError;
use crate::fallback;
use crate::generator::QuizGenerator;
use crate::quiz::{FeedbackMessage, QuestionSet, ScoreResult, OPTION_COUNT, QUESTION_COUNT};
use crate::topic::Topic;

/// Opaque per-browser-session key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Topic chosen, questions not yet resolved.
    Loading,
    /// Questions installed; answers and navigation allowed.
    InProgress,
    /// Finalized, score computed, feedback pending.
    Submitted,
    /// Terminal: outcome available.
    Scored,
}

/// Navigation direction through the question sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Final result of a quiz: the score plus the feedback line for the results
/// screen. The caller cannot tell whether the feedback came from the model
/// or the fallback provider.
#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub score: ScoreResult,
    pub feedback: FeedbackMessage,
}

#[derive(Debug, Clone)]
struct QuizSession {
    id: SessionId,
    topic: Topic,
    questions: Option<QuestionSet>,
    answers: [Option<usize>; QUESTION_COUNT],
    position: usize,
    phase: Phase,
    started_at: DateTime<Utc>,
    outcome: Option<QuizOutcome>,
}

impl QuizSession {
    fn new(topic: Topic) -> Self {
        Self {
            id: SessionId::new(),
            topic,
            questions: None,
            answers: [None; QUESTION_COUNT],
            position: 0,
            phase: Phase::Loading,
            started_at: Utc::now(),
            outcome: None,
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::Phase {
                expected,
                actual: self.phase,
            })
        }
    }
}

/// Read-only projection of a session for the presentation layer.
#[derive(Debug, Clone)]
pub struct SessionView {
    pub id: SessionId,
    pub topic: Topic,
    pub phase: Phase,
    pub position: usize,
    pub questions: Option<QuestionSet>,
    pub answers: [Option<usize>; QUESTION_COUNT],
    pub started_at: DateTime<Utc>,
    pub outcome: Option<QuizOutcome>,
}

/// The quiz orchestrator: owns the session store and an injected generator.
///
/// Generation failures never escape this layer; the fallback provider
/// answers instead, and the caller cannot observe which source served it.
pub struct QuizService<C> {
    generator: QuizGenerator<C>,
    sessions: Arc<Mutex<HashMap<SessionId, QuizSession>>>,
}

impl<C: Clone> Clone for QuizService<C> {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

impl<C: GenerativeClient> QuizService<C> {
    pub fn new(generator: QuizGenerator<C>) -> Self {
        Self {
            generator,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a session for the chosen topic. Questions are not loaded yet;
    /// call [`QuizService::load_questions`] next.
    pub fn start(&self, topic: Topic) -> SessionId {
        let session = QuizSession::new(topic);
        let id = session.id;
        self.sessions.lock().unwrap().insert(id, session);
        info!(session = %id, topic = topic.slug(), "quiz session created");
        id
    }

    /// Resolve the question set and move the session to `InProgress`.
    ///
    /// Every generation failure is absorbed here: the static bank is
    /// installed instead and the quiz proceeds normally. The store lock is
    /// never held across the provider call.
    #[instrument(skip(self), fields(session = %id))]
    pub async fn load_questions(&self, id: SessionId) -> Result<(), SessionError> {
        let topic = {
            let sessions = self.sessions.lock().unwrap();
            let session = sessions.get(&id).ok_or(SessionError::Unknown(id))?;
            session.expect_phase(Phase::Loading)?;
            session.topic
        };

        let questions = match self.generator.generate_questions(topic).await {
            Ok(set) => set,
            Err(e) => {
                warn!(error = %e, topic = topic.slug(), "question generation failed, serving fallback bank");
                fallback::questions(topic)
            }
        };

        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(&id).ok_or(SessionError::Unknown(id))?;
        session.questions = Some(questions);
        session.position = 0;
        session.phase = Phase::InProgress;
        Ok(())
    }

    /// Record (or overwrite) the answer for one question slot.
    pub fn select_answer(
        &self,
        id: SessionId,
        question_index: usize,
        option_index: usize,
    ) -> Result<(), SessionError> {
        if question_index >= QUESTION_COUNT {
            return Err(SessionError::QuestionIndex(question_index));
        }
        if option_index >= OPTION_COUNT {
            return Err(SessionError::OptionIndex(option_index));
        }

        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(&id).ok_or(SessionError::Unknown(id))?;
        session.expect_phase(Phase::InProgress)?;
        session.answers[question_index] = Some(option_index);
        Ok(())
    }

    /// Move the cursor one question forward or back, clamped to the
    /// question range. Going back never erases recorded answers.
    pub fn navigate(&self, id: SessionId, direction: Direction) -> Result<usize, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(&id).ok_or(SessionError::Unknown(id))?;
        session.expect_phase(Phase::InProgress)?;
        session.position = match direction {
            Direction::Next => (session.position + 1).min(QUESTION_COUNT - 1),
            Direction::Prev => session.position.saturating_sub(1),
        };
        Ok(session.position)
    }

    /// Finalize the quiz: score whatever is answered (unanswered slots count
    /// as incorrect), request feedback, and move to the terminal `Scored`
    /// phase. A second call is a phase error.
    #[instrument(skip(self), fields(session = %id))]
    pub async fn finish(&self, id: SessionId) -> Result<QuizOutcome, SessionError> {
        let (topic, score) = {
            let mut sessions = self.sessions.lock().unwrap();
            let session = sessions.get_mut(&id).ok_or(SessionError::Unknown(id))?;
            session.expect_phase(Phase::InProgress)?;
            let Some(questions) = &session.questions else {
                return Err(SessionError::Phase {
                    expected: Phase::InProgress,
                    actual: session.phase,
                });
            };
            let score = questions.score(&session.answers);
            session.phase = Phase::Submitted;
            (session.topic, score)
        };

        let feedback = match self.generator.generate_feedback(&score, topic).await {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "feedback generation failed, serving canned feedback");
                fallback::feedback(&score, topic)
            }
        };

        let outcome = QuizOutcome { score, feedback };
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(&id).ok_or(SessionError::Unknown(id))?;
        session.outcome = Some(outcome.clone());
        session.phase = Phase::Scored;
        info!(session = %id, correct = score.correct, total = score.total, "quiz scored");
        Ok(outcome)
    }

    /// Read-only snapshot for rendering.
    pub fn snapshot(&self, id: SessionId) -> Result<SessionView, SessionError> {
        let sessions = self.sessions.lock().unwrap();
        let session = sessions.get(&id).ok_or(SessionError::Unknown(id))?;
        Ok(SessionView {
            id: session.id,
            topic: session.topic,
            phase: session.phase,
            position: session.position,
            questions: session.questions.clone(),
            answers: session.answers,
            started_at: session.started_at,
            outcome: session.outcome.clone(),
        })
    }

    /// Drop a session. Starting a new quiz always creates a fresh one.
    pub fn remove(&self, id: SessionId) -> bool {
        self.sessions.lock().unwrap().remove(&id).is_some()
    }
}
