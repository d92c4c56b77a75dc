use serde::Serialize;
use tracing::{debug, warn};

use super::{LeaderboardEntry, LeaderboardError};

/// An entry with its 1-based display position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

/// What the leaderboard panel renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeaderboardView {
    pub entries: Vec<RankedEntry>,
    pub is_empty: bool,
    pub last_refresh_failed: bool,
}

/// Last-known leaderboard list.
///
/// Each reload is tagged with a sequence number when it is requested. A response is applied
/// only if it is newer than the last one applied, so a slow reply can never overwrite a
/// fresher list. A failed reload also counts as the newest answer: it keeps the list but
/// sets `last_refresh_failed`, and older responses arriving after it are dropped.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardBoard {
    entries: Vec<LeaderboardEntry>,
    applied_seq: u64,
    last_refresh_failed: bool,
}

impl LeaderboardBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the response changed what is displayed
    pub fn apply(
        &mut self,
        seq: u64,
        response: Result<Vec<LeaderboardEntry>, LeaderboardError>,
    ) -> bool {
        if seq <= self.applied_seq {
            debug!(
                seq = seq,
                applied_seq = self.applied_seq,
                "Dropping stale leaderboard response"
            );
            return false;
        }

        self.applied_seq = seq;
        match response {
            Ok(entries) => {
                self.entries = entries;
                self.last_refresh_failed = false;
                true
            }
            Err(e) => {
                warn!(seq = seq, error = %e, "Leaderboard refresh failed, keeping last list");
                self.last_refresh_failed = true;
                false
            }
        }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn view(&self) -> LeaderboardView {
        LeaderboardView {
            entries: self
                .entries
                .iter()
                .enumerate()
                .map(|(i, entry)| RankedEntry {
                    rank: i + 1,
                    entry: entry.clone(),
                })
                .collect(),
            is_empty: self.entries.is_empty(),
            last_refresh_failed: self.last_refresh_failed,
        }
    }
}
