use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::clock::RoundDuration;
use crate::scoring::ShotResolution;

/// Where the session currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Registration,
    Setup,
    Active,
    Result,
}

/// Identity of the person at the range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub first_name: String,
    pub last_name: String,
    pub group: String,
}

impl Participant {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            group: group.into(),
        }
    }

    /// All three fields non-empty
    pub fn is_complete(&self) -> bool {
        [&self.first_name, &self.last_name, &self.group]
            .iter()
            .all(|field| !field.is_empty())
    }
}

/// A single fired shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub position_x: f64,
    pub position_y: f64,
    pub points: u32,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub is_miss: bool,
}

impl Shot {
    pub fn new(position_x: f64, position_y: f64, resolution: ShotResolution, timestamp: i64) -> Self {
        Self {
            position_x,
            position_y,
            points: resolution.points,
            timestamp,
            is_miss: resolution.is_miss,
        }
    }
}

/// Authoritative running counters for one round.
///
/// Hits and accuracy are derived on read so they can never drift from the raw counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionTally {
    score: u32,
    total_shots: u32,
    misses: u32,
}

impl SessionTally {
    pub fn record(&mut self, shot: &Shot) {
        self.total_shots += 1;
        if shot.is_miss {
            self.misses += 1;
        } else {
            self.score += shot.points;
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_shots(&self) -> u32 {
        self.total_shots
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn hits(&self) -> u32 {
        self.total_shots - self.misses
    }

    /// Rounded hit percentage, 0 when nothing was fired
    pub fn accuracy(&self) -> u32 {
        if self.total_shots == 0 {
            return 0;
        }
        ((self.hits() as f64 / self.total_shots as f64) * 100.0).round() as u32
    }
}

/// Frozen outcome of a finished round, handed to the leaderboard
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub round: u64,
    pub participant: Participant,
    pub tally: SessionTally,
    pub duration: RoundDuration,
}

impl SessionSummary {
    pub fn hits(&self) -> u32 {
        self.tally.hits()
    }

    pub fn accuracy(&self) -> u32 {
        self.tally.accuracy()
    }
}
