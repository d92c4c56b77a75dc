#![allow(dead_code)] // Test utilities may not all be used in every test

use tokio::time::{sleep, Duration};

use shooting_range::{CommandReply, GameSnapshot, Participant};

use super::setup::TestSetup;

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    pub async fn register(&self, first: &str, last: &str, group: &str) -> CommandReply {
        self.game
            .register(Participant::new(first, last, group))
            .await
            .unwrap()
    }

    pub async fn select_duration(&self, seconds: u32) -> CommandReply {
        self.game.select_duration(seconds).await.unwrap()
    }

    pub async fn start(&self) -> CommandReply {
        self.game.start_game().await.unwrap()
    }

    pub async fn fire(&self, x: f64, y: f64) -> CommandReply {
        self.game.fire_at(x, y).await.unwrap()
    }

    pub async fn play_again(&self) -> CommandReply {
        self.game.play_again().await.unwrap()
    }

    pub async fn reset(&self) -> CommandReply {
        self.game.reset_to_registration().await.unwrap()
    }

    /// Lets paused time run forward
    pub async fn wait_millis(&self, millis: u64) {
        sleep(Duration::from_millis(millis)).await;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    /// Registers a participant, picks a round length and starts the round
    pub async fn start_round(&self, seconds: u32) -> CommandReply {
        self.register("Ivan", "Petrov", "1-A").await;
        self.select_duration(seconds).await;
        self.start().await
    }

    /// Waits until the round has run out
    pub async fn finish_round(&self) {
        let mut updates = self.game.subscribe();
        updates
            .wait_for(|snapshot| snapshot.phase == shooting_range::GamePhase::Result)
            .await
            .unwrap();
    }
}
