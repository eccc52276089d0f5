//! Per-player game progress and the guess/advance state machine.

use serde_json::Value;

use crate::error::{GameError, GameResult};
use crate::types::{AnswerRecord, QuestionData, QuestionRecord};

/// Highest accepted guess index (four choices per question)
const MAX_GUESS_INDEX: usize = 3;

/// One player's play-through. `answers` is the ground truth, index-aligned
/// with the client-safe `questions`; `current_index` points into both and only
/// ever increases. Once `game_over` is set no further guesses are accepted.
#[derive(Debug, Clone)]
pub struct Session {
    pub answers: Vec<AnswerRecord>,
    pub questions: Vec<QuestionRecord>,
    pub current_index: usize,
    pub score: u32,
    pub game_over: bool,
    pub started_at: String,
}

/// What one consumed guess produced: the running score, whether the guess was
/// right, and either the next question or the end of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessOutcome {
    pub score: u32,
    pub is_correct: bool,
    pub game_over: bool,
    pub next: Option<QuestionData>,
}

/// Parse a raw guess value (JSON string or number) into a question-choice
/// index. Anything that is not an integer between 0 and 3 is rejected.
pub fn parse_guess(raw: &Value) -> Option<usize> {
    let index = match raw {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    if (0..=MAX_GUESS_INDEX as i64).contains(&index) {
        Some(index as usize)
    } else {
        None
    }
}

impl Session {
    /// Start a fresh play-through over an index-aligned answer/question pool.
    /// Emits the first question; the caller guarantees the pool is non-empty.
    pub fn start(
        answers: Vec<AnswerRecord>,
        questions: Vec<QuestionRecord>,
    ) -> (Self, QuestionData) {
        debug_assert!(!questions.is_empty());
        debug_assert_eq!(answers.len(), questions.len());

        let first = QuestionData {
            number: 0,
            question: questions[0].clone(),
        };
        let session = Self {
            answers,
            questions,
            current_index: 0,
            score: 0,
            game_over: false,
            started_at: chrono::Utc::now().to_rfc3339(),
        };
        (session, first)
    }

    /// True while the session can still accept a guess: aligned non-empty
    /// pools and the game not yet over.
    pub fn in_progress(&self) -> bool {
        !self.answers.is_empty() && self.answers.len() == self.questions.len() && !self.game_over
    }

    /// Consume one guess against the current question.
    ///
    /// A correct guess bumps the score; the pointer advances exactly once
    /// either way. The pool is exhausted when the advanced pointer walks past
    /// the last index, so the last question is served and answered like any
    /// other before the session completes. Fails without mutation when the
    /// session is not in progress.
    pub fn apply_guess(&mut self, guess: usize) -> GameResult<GuessOutcome> {
        debug_assert!(guess <= MAX_GUESS_INDEX);
        if !self.in_progress() {
            return Err(GameError::SessionInvalid);
        }

        let is_correct = guess == self.answers[self.current_index].correct_index;
        if is_correct {
            self.score += 1;
        }
        self.current_index += 1;

        let game_over = self.current_index > self.questions.len() - 1;
        if game_over {
            self.game_over = true;
        }

        let next = if game_over {
            None
        } else {
            Some(QuestionData {
                number: self.current_index,
                question: self.questions[self.current_index].clone(),
            })
        };

        Ok(GuessOutcome {
            score: self.score,
            is_correct,
            game_over,
            next,
        })
    }
}
