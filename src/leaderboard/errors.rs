use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LeaderboardError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Leaderboard store returned status {0}")]
    Status(u16),

    #[error("Failed to decode leaderboard response: {0}")]
    Decode(String),
}
