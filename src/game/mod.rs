// Public API
pub use handle::{GameError, GameHandle};
pub use models::{GamePhase, Participant, SessionSummary, SessionTally, Shot};
pub use runner::{GameRunner, RunnerConfig, SHOT_MARKER_TTL, TICK_PERIOD};
pub use session::{GameSession, Ignored, TickOutcome};
pub use snapshot::{CommandReply, GameSnapshot};

// Internal modules
mod handle;
mod models;
mod runner;
mod session;
mod snapshot;
