// Leaderboard boundary
//
// The game core hands finished rounds to a `LeaderboardGateway` and displays whatever the
// store last returned. Ordering and persistence belong to the store.

pub mod board;
pub mod gateway;
pub mod http;
pub mod models;
pub mod service;

mod errors;

pub use board::{LeaderboardBoard, LeaderboardView, RankedEntry};
pub use errors::LeaderboardError;
pub use gateway::{InMemoryLeaderboardGateway, LeaderboardGateway};
pub use http::HttpLeaderboardGateway;
pub use models::{LeaderboardEntry, ResultSubmission};
pub use service::{LeaderboardService, Reload};

/// How many ranked rows to request when nothing else is configured
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;
