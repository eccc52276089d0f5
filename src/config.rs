//! Server configuration loaded from environment variables.

use std::path::PathBuf;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on
    pub port: u16,
    /// Path to the corpus seed snapshot (JSON array of persisted records)
    pub corpus_path: PathBuf,
    /// Questions served per game
    pub questions_per_game: usize,
}

impl ServerConfig {
    /// Load config from environment variables, falling back to defaults:
    /// PORT=8765, CORPUS_PATH=db/questions.json, QUESTIONS_PER_GAME=10.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(8765);

        let corpus_path = std::env::var("CORPUS_PATH")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("db/questions.json"));

        let questions_per_game = std::env::var("QUESTIONS_PER_GAME")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(10);

        Self {
            port,
            corpus_path,
            questions_per_game,
        }
    }
}
