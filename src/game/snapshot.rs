use serde::Serialize;
use strum::IntoEnumIterator;

use super::models::{GamePhase, Participant, Shot};
use super::session::{GameSession, Ignored};
use crate::clock::{ClockState, RoundDuration};
use crate::display::{EphemeralList, ShotMarker};
use crate::leaderboard::{LeaderboardBoard, LeaderboardView};

/// Everything a renderer needs to draw the current frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub round: u64,
    pub draft: Participant,
    pub participant: Option<Participant>,
    pub duration_seconds: u32,
    pub allowed_durations: Vec<u32>,
    pub clock_state: ClockState,
    pub remaining_seconds: u32,
    pub progress_percent: u32,
    pub score: u32,
    pub total_shots: u32,
    pub hits: u32,
    pub misses: u32,
    pub accuracy: u32,
    pub markers: Vec<ShotMarker>,
    /// The finished round is still being saved
    pub saving: bool,
    pub leaderboard: LeaderboardView,
}

impl GameSnapshot {
    pub fn capture(
        session: &GameSession,
        markers: &EphemeralList<Shot>,
        board: &LeaderboardBoard,
        saving: bool,
    ) -> Self {
        let tally = session.tally();
        let clock = session.clock();

        // Before a round starts, show the time the player is about to get
        let (remaining_seconds, progress_percent) = match session.phase() {
            GamePhase::Active | GamePhase::Result => (clock.remaining(), clock.progress_percent()),
            GamePhase::Registration | GamePhase::Setup => (session.duration().seconds(), 100),
        };

        Self {
            phase: session.phase(),
            round: session.round(),
            draft: session.draft().clone(),
            participant: session.participant().cloned(),
            duration_seconds: session.duration().seconds(),
            allowed_durations: RoundDuration::iter().map(RoundDuration::seconds).collect(),
            clock_state: clock.state(),
            remaining_seconds,
            progress_percent,
            score: tally.score(),
            total_shots: tally.total_shots(),
            hits: tally.hits(),
            misses: tally.misses(),
            accuracy: tally.accuracy(),
            markers: markers
                .iter()
                .map(|(id, shot)| ShotMarker::new(id, shot))
                .collect(),
            saving,
            leaderboard: board.view(),
        }
    }
}

/// Answer to a single UI command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandReply {
    pub applied: bool,
    pub ignored: Option<Ignored>,
    pub shot: Option<Shot>,
    pub state: GameSnapshot,
}

impl CommandReply {
    pub fn new(result: Result<Option<Shot>, Ignored>, state: GameSnapshot) -> Self {
        match result {
            Ok(shot) => Self {
                applied: true,
                ignored: None,
                shot,
                state,
            },
            Err(reason) => Self {
                applied: false,
                ignored: Some(reason),
                shot: None,
                state,
            },
        }
    }
}
