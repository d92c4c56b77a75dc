use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};

use super::models::Participant;
use super::runner::GameCommand;
use super::snapshot::{CommandReply, GameSnapshot};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Game runner is no longer running")]
    RunnerStopped,
}

/// Cloneable front door to the game runner
#[derive(Clone)]
pub struct GameHandle {
    commands: mpsc::Sender<GameCommand>,
    snapshots: watch::Receiver<GameSnapshot>,
}

impl GameHandle {
    pub(crate) fn new(
        commands: mpsc::Sender<GameCommand>,
        snapshots: watch::Receiver<GameSnapshot>,
    ) -> Self {
        Self {
            commands,
            snapshots,
        }
    }

    pub async fn register(&self, fields: Participant) -> Result<CommandReply, GameError> {
        self.request(|reply| GameCommand::Register { fields, reply })
            .await
    }

    pub async fn select_duration(&self, seconds: u32) -> Result<CommandReply, GameError> {
        self.request(|reply| GameCommand::SelectDuration { seconds, reply })
            .await
    }

    pub async fn start_game(&self) -> Result<CommandReply, GameError> {
        self.request(|reply| GameCommand::StartGame { reply }).await
    }

    pub async fn fire_at(&self, x: f64, y: f64) -> Result<CommandReply, GameError> {
        self.request(|reply| GameCommand::FireAt { x, y, reply })
            .await
    }

    pub async fn play_again(&self) -> Result<CommandReply, GameError> {
        self.request(|reply| GameCommand::PlayAgain { reply }).await
    }

    pub async fn reset_to_registration(&self) -> Result<CommandReply, GameError> {
        self.request(|reply| GameCommand::ResetToRegistration { reply })
            .await
    }

    /// Asks for a fresh leaderboard. The list updates once the load comes back.
    pub async fn refresh_leaderboard(&self) -> Result<(), GameError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(GameCommand::RefreshLeaderboard { reply })
            .await
            .map_err(|_| GameError::RunnerStopped)?;
        rx.await.map_err(|_| GameError::RunnerStopped)
    }

    /// Latest published state
    pub fn snapshot(&self) -> GameSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that wakes on every published state change
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshots.clone()
    }

    async fn request<F>(&self, build: F) -> Result<CommandReply, GameError>
    where
        F: FnOnce(oneshot::Sender<CommandReply>) -> GameCommand,
    {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(build(reply))
            .await
            .map_err(|_| GameError::RunnerStopped)?;
        rx.await.map_err(|_| GameError::RunnerStopped)
    }
}
