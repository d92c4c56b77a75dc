//! Test assertion helpers - fluent API for verifying test expectations
#![allow(dead_code)] // Test utilities may not all be used in every test

use shooting_range::{GamePhase, GameSnapshot};

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct SnapshotAssertion {
    snapshot: GameSnapshot,
}

impl SnapshotAssertion {
    pub fn of(snapshot: GameSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn in_phase(self, phase: GamePhase) -> Self {
        assert_eq!(self.snapshot.phase, phase, "unexpected phase");
        self
    }

    pub fn with_tally(self, score: u32, total_shots: u32, hits: u32, misses: u32) -> Self {
        assert_eq!(self.snapshot.score, score, "score");
        assert_eq!(self.snapshot.total_shots, total_shots, "total shots");
        assert_eq!(self.snapshot.hits, hits, "hits");
        assert_eq!(self.snapshot.misses, misses, "misses");
        self
    }

    pub fn with_accuracy(self, accuracy: u32) -> Self {
        assert_eq!(self.snapshot.accuracy, accuracy, "accuracy");
        self
    }

    pub fn with_remaining(self, seconds: u32) -> Self {
        assert_eq!(self.snapshot.remaining_seconds, seconds, "remaining seconds");
        self
    }

    pub fn with_markers(self, count: usize) -> Self {
        assert_eq!(self.snapshot.markers.len(), count, "visible markers");
        self
    }

    pub fn saving(self, expected: bool) -> Self {
        assert_eq!(self.snapshot.saving, expected, "saving indicator");
        self
    }

    pub fn with_leaderboard_scores(self, scores: &[u32]) -> Self {
        let actual: Vec<u32> = self
            .snapshot
            .leaderboard
            .entries
            .iter()
            .map(|ranked| ranked.entry.score)
            .collect();
        assert_eq!(actual, scores, "leaderboard scores");
        self
    }

    pub fn with_refresh_failed(self, expected: bool) -> Self {
        assert_eq!(
            self.snapshot.leaderboard.last_refresh_failed, expected,
            "last refresh failed"
        );
        self
    }
}
