use crate::types::QuestionId;

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while assembling or playing a game
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    /// The request did not carry a usable list of category keys
    #[error("request categories are missing or invalid")]
    InvalidCategories,

    /// A single category key could not be resolved against the table
    #[error("unknown category key: {0}")]
    InvalidCategory(String),

    /// Guess did not parse to an integer between 0 and 3
    #[error("guess must be an integer between 0 and 3")]
    InvalidGuess,

    /// No session, or the session is unusable (empty, misaligned, or already
    /// completed)
    #[error("no usable session")]
    SessionInvalid,

    /// Removal target does not exist
    #[error("no question with id {0}")]
    NotFound(QuestionId),

    /// The question store could not be read
    #[error("corpus unavailable: {0}")]
    CorpusUnavailable(String),
}

impl GameError {
    /// Stable machine-readable reason string carried in error responses
    pub fn reason(&self) -> &'static str {
        match self {
            GameError::InvalidCategories => "invalid-categories",
            GameError::InvalidCategory(_) => "invalid-category",
            GameError::InvalidGuess => "invalid-index",
            GameError::SessionInvalid => "no-session",
            GameError::NotFound(_) => "notfound",
            GameError::CorpusUnavailable(_) => "corpus-unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings_are_stable() {
        assert_eq!(GameError::InvalidCategories.reason(), "invalid-categories");
        assert_eq!(
            GameError::InvalidCategory("99".into()).reason(),
            "invalid-category"
        );
        assert_eq!(GameError::InvalidGuess.reason(), "invalid-index");
        assert_eq!(GameError::SessionInvalid.reason(), "no-session");
        assert_eq!(GameError::NotFound("abc".into()).reason(), "notfound");
        assert_eq!(
            GameError::CorpusUnavailable("io".into()).reason(),
            "corpus-unavailable"
        );
    }
}
