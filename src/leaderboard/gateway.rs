use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::{LeaderboardEntry, LeaderboardError, ResultSubmission};

/// Save/load contract with the remote leaderboard store
#[async_trait]
pub trait LeaderboardGateway: Send + Sync {
    /// Persists one finished round. Only success or failure matters to the caller.
    async fn save(&self, submission: &ResultSubmission) -> Result<(), LeaderboardError>;

    /// Fetches at most `limit` entries, best score first
    async fn load(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, LeaderboardError>;
}

/// In-memory store for development and testing.
///
/// Orders the same way the hosted store does: score, then accuracy, both descending.
#[derive(Debug, Default)]
pub struct InMemoryLeaderboardGateway {
    entries: Arc<RwLock<Vec<LeaderboardEntry>>>,
}

impl InMemoryLeaderboardGateway {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl LeaderboardGateway for InMemoryLeaderboardGateway {
    #[instrument(skip(self, submission))]
    async fn save(&self, submission: &ResultSubmission) -> Result<(), LeaderboardError> {
        let mut entries = self.entries.write().await;
        let id = entries.len() as i64 + 1;
        let created_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string();
        entries.push(submission.clone().into_entry(Some(id), Some(created_at)));
        debug!(id = id, score = submission.score, "Result stored in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn load(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let entries = self.entries.read().await;
        let mut ranked = entries.clone();
        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.accuracy.cmp(&a.accuracy))
        });
        ranked.truncate(limit);
        Ok(ranked)
    }
}
