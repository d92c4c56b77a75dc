use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{LeaderboardEntry, LeaderboardError, LeaderboardGateway, ResultSubmission};
use crate::game::SessionSummary;

/// A reload response tagged with the order in which it was requested
#[derive(Debug, Clone)]
pub struct Reload {
    pub seq: u64,
    pub result: Result<Vec<LeaderboardEntry>, LeaderboardError>,
}

/// Drives the gateway on behalf of the game.
///
/// Failures are logged and returned, never retried. The caller decides what to display.
pub struct LeaderboardService {
    gateway: Arc<dyn LeaderboardGateway>,
    limit: usize,
    reload_seq: AtomicU64,
}

impl LeaderboardService {
    pub fn new(gateway: Arc<dyn LeaderboardGateway>, limit: usize) -> Self {
        Self {
            gateway,
            limit,
            reload_seq: AtomicU64::new(0),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Saves the finished round, then reloads whether or not the save went through
    #[instrument(skip(self, summary), fields(round = summary.round))]
    pub async fn finalize(&self, summary: &SessionSummary) -> Reload {
        let submission = ResultSubmission::from(summary);

        match self.gateway.save(&submission).await {
            Ok(()) => info!(
                score = submission.score,
                accuracy = submission.accuracy,
                "Result saved"
            ),
            Err(e) => warn!(error = %e, "Failed to save result"),
        }

        self.reload().await
    }

    /// Fetches the ranked list. The sequence number is taken when the request goes out.
    #[instrument(skip(self))]
    pub async fn reload(&self) -> Reload {
        let seq = self.reload_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let result = match self.gateway.load(self.limit).await {
            Ok(entries) => {
                info!(seq = seq, count = entries.len(), "Leaderboard reloaded");
                Ok(entries)
            }
            Err(e) => {
                warn!(seq = seq, error = %e, "Failed to load leaderboard");
                Err(e)
            }
        };

        Reload { seq, result }
    }
}
