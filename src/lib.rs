// Library crate for the shooting range game server
// This file exposes the public API for integration tests

pub mod api;
pub mod clock;
pub mod config;
pub mod display;
pub mod game;
pub mod leaderboard;
pub mod scoring;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use game::{
    CommandReply, GameError, GameHandle, GamePhase, GameRunner, GameSession, GameSnapshot,
    Ignored, Participant, RunnerConfig, Shot,
};
pub use leaderboard::{
    HttpLeaderboardGateway, InMemoryLeaderboardGateway, LeaderboardEntry, LeaderboardError,
    LeaderboardGateway, LeaderboardService, ResultSubmission,
};
pub use scoring::{resolve_shot, ShotResolution};
pub use shared::{AppError, AppState};
