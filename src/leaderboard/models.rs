use serde::{Deserialize, Serialize};

use crate::game::SessionSummary;

/// One persisted result as returned by the store.
///
/// The store speaks snake_case with `study_group`/`game_duration`; the camelCase spelling is
/// accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    #[serde(rename = "study_group", alias = "group")]
    pub group: String,
    pub score: u32,
    pub accuracy: u32,
    #[serde(alias = "totalShots")]
    pub total_shots: u32,
    pub hits: u32,
    pub misses: u32,
    #[serde(rename = "game_duration", alias = "gameDuration")]
    pub game_duration_seconds: u32,
    /// Opaque timestamp string, exactly as the store formatted it
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of the save request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSubmission {
    pub first_name: String,
    pub last_name: String,
    pub group: String,
    pub score: u32,
    pub total_shots: u32,
    pub hits: u32,
    pub misses: u32,
    pub accuracy: u32,
    pub game_duration: u32,
}

impl From<&SessionSummary> for ResultSubmission {
    fn from(summary: &SessionSummary) -> Self {
        Self {
            first_name: summary.participant.first_name.clone(),
            last_name: summary.participant.last_name.clone(),
            group: summary.participant.group.clone(),
            score: summary.tally.score(),
            total_shots: summary.tally.total_shots(),
            hits: summary.hits(),
            misses: summary.tally.misses(),
            accuracy: summary.accuracy(),
            game_duration: summary.duration.seconds(),
        }
    }
}

impl ResultSubmission {
    /// The row a store would create for this submission
    pub fn into_entry(self, id: Option<i64>, created_at: Option<String>) -> LeaderboardEntry {
        LeaderboardEntry {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            group: self.group,
            score: self.score,
            accuracy: self.accuracy,
            total_shots: self.total_shots,
            hits: self.hits,
            misses: self.misses,
            game_duration_seconds: self.game_duration,
            created_at,
        }
    }
}
