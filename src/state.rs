use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::categories;
use crate::corpus::Corpus;
use crate::error::{GameError, GameResult};
use crate::obfuscate::answer_to_question;
use crate::sampling;
use crate::session::{parse_guess, GuessOutcome, Session};
use crate::types::{QuestionData, QuestionRecord, SessionId};

/// Shared application state
pub struct AppState {
    pub corpus: Arc<Corpus>,
    pub sessions: RwLock<HashMap<SessionId, Session>>,
    /// Questions served per game
    pub questions_per_game: usize,
}

impl AppState {
    pub fn new(corpus: Arc<Corpus>, questions_per_game: usize) -> Self {
        Self {
            corpus,
            sessions: RwLock::new(HashMap::new()),
            questions_per_game,
        }
    }

    /// Start a game for the given session id, replacing any previous game
    /// under the same id. Returns the first question.
    ///
    /// Nothing is stored until the whole pool has been assembled, so a
    /// validation or corpus failure leaves any existing game untouched.
    pub async fn start_game(
        &self,
        session_id: &str,
        requested: &[String],
    ) -> GameResult<QuestionData> {
        if !categories::validate_keys(requested) {
            return Err(GameError::InvalidCategories);
        }

        let answers = sampling::build_answer_pool(
            &self.corpus,
            requested,
            self.questions_per_game,
        )
        .await?;
        if answers.is_empty() {
            // nothing to serve; most likely an unseeded corpus
            return Err(GameError::CorpusUnavailable(
                "no questions available for the requested categories".to_string(),
            ));
        }

        let questions: Vec<QuestionRecord> = answers.iter().map(answer_to_question).collect();
        let (session, first) = Session::start(answers, questions);

        tracing::info!(
            "Started game for session {}: {} questions from {:?}",
            session_id,
            session.questions.len(),
            requested
        );

        self.sessions
            .write()
            .await
            .insert(session_id.to_string(), session);
        Ok(first)
    }

    /// Check one guess against the caller's session and advance it.
    ///
    /// Guess shape is validated before the session is looked up, so a
    /// malformed guess reports `InvalidGuess` even when no session exists.
    /// The map's write lock serializes transitions per session.
    pub async fn submit_guess(
        &self,
        session_id: Option<&str>,
        guess: &Value,
    ) -> GameResult<GuessOutcome> {
        let guess = parse_guess(guess).ok_or(GameError::InvalidGuess)?;
        let session_id = session_id.ok_or(GameError::SessionInvalid)?;

        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(session_id)
            .ok_or(GameError::SessionInvalid)?;
        let outcome = session.apply_guess(guess)?;

        tracing::debug!(
            "Session {} guessed {} ({}): score {}, index {}",
            session_id,
            guess,
            if outcome.is_correct { "correct" } else { "wrong" },
            outcome.score,
            session.current_index
        );

        Ok(outcome)
    }
}
