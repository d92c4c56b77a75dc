use std::future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, instrument};

use super::handle::GameHandle;
use super::models::{Participant, SessionSummary, Shot};
use super::session::{GameSession, Ignored, TickOutcome};
use super::snapshot::{CommandReply, GameSnapshot};
use crate::clock::Ticker;
use crate::display::EphemeralList;
use crate::leaderboard::{LeaderboardBoard, LeaderboardService, Reload};

/// How long a shot marker stays on screen
pub const SHOT_MARKER_TTL: Duration = Duration::from_millis(1000);

/// Countdown resolution
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Configuration for the game runner
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub tick_period: Duration,
    pub marker_ttl: Duration,
    /// Pending UI commands before senders start waiting
    pub command_buffer: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tick_period: TICK_PERIOD,
            marker_ttl: SHOT_MARKER_TTL,
            command_buffer: 64,
        }
    }
}

/// UI events routed into the runner
#[derive(Debug)]
pub(crate) enum GameCommand {
    Register {
        fields: Participant,
        reply: oneshot::Sender<CommandReply>,
    },
    SelectDuration {
        seconds: u32,
        reply: oneshot::Sender<CommandReply>,
    },
    StartGame {
        reply: oneshot::Sender<CommandReply>,
    },
    FireAt {
        x: f64,
        y: f64,
        reply: oneshot::Sender<CommandReply>,
    },
    PlayAgain {
        reply: oneshot::Sender<CommandReply>,
    },
    ResetToRegistration {
        reply: oneshot::Sender<CommandReply>,
    },
    RefreshLeaderboard {
        reply: oneshot::Sender<()>,
    },
}

/// A reload that finished in a background task
#[derive(Debug)]
struct LeaderboardUpdate {
    /// Set when this reload followed saving the given round
    finished_round: Option<u64>,
    reload: Reload,
}

/// Single owner of the game session.
///
/// UI commands, clock pulses, marker expiry and leaderboard responses all arrive on one
/// task and are applied one at a time, so nothing else ever writes to the session or the
/// display list. Network calls run in spawned tasks and report back through a channel.
pub struct GameRunner {
    session: GameSession,
    markers: EphemeralList<Shot>,
    ticker: Ticker,
    /// Round the ticker and markers currently belong to
    current_round: u64,
    board: LeaderboardBoard,
    leaderboard: Arc<LeaderboardService>,
    saving_round: Option<u64>,
    commands: mpsc::Receiver<GameCommand>,
    updates_tx: mpsc::UnboundedSender<LeaderboardUpdate>,
    updates_rx: mpsc::UnboundedReceiver<LeaderboardUpdate>,
    snapshots: watch::Sender<GameSnapshot>,
}

impl GameRunner {
    /// Starts the runner on its own task. It stops once every handle has been dropped.
    pub fn spawn(
        leaderboard: Arc<LeaderboardService>,
        config: RunnerConfig,
    ) -> (GameHandle, JoinHandle<()>) {
        let (commands_tx, commands_rx) = mpsc::channel(config.command_buffer);
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();

        let session = GameSession::new();
        let markers = EphemeralList::new(config.marker_ttl);
        let board = LeaderboardBoard::new();
        let initial = GameSnapshot::capture(&session, &markers, &board, false);
        let (snapshots_tx, snapshots_rx) = watch::channel(initial);

        let runner = Self {
            current_round: session.round(),
            session,
            markers,
            ticker: Ticker::new(config.tick_period),
            board,
            leaderboard,
            saving_round: None,
            commands: commands_rx,
            updates_tx,
            updates_rx,
            snapshots: snapshots_tx,
        };

        let task = tokio::spawn(runner.run());
        (GameHandle::new(commands_tx, snapshots_rx), task)
    }

    async fn run(mut self) {
        info!("Game runner started");
        self.request_reload();

        loop {
            let marker_deadline = self.markers.next_expiry();

            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                _ = self.ticker.tick() => self.handle_tick(),
                _ = sleep_until_deadline(marker_deadline) => {
                    let expired = self.markers.expire(Instant::now());
                    debug!(expired = expired, "Shot markers expired");
                }
                Some(update) = self.updates_rx.recv() => self.apply_update(update),
            }

            self.publish();
        }

        info!("Game runner stopped, no handles left");
    }

    fn handle_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::Register { fields, reply } => {
                let result = self.session.register_participant(fields);
                self.respond(reply, result.map(|_| None));
            }
            GameCommand::SelectDuration { seconds, reply } => {
                let result = self.session.select_duration(seconds);
                self.respond(reply, result.map(|_| None));
            }
            GameCommand::StartGame { reply } => {
                let result = self.session.start_game();
                self.sync_round();
                self.respond(reply, result.map(|_| None));
            }
            GameCommand::FireAt { x, y, reply } => {
                let timestamp = chrono::Utc::now().timestamp_millis();
                let result = self.session.fire_at(x, y, timestamp);
                if let Ok(shot) = &result {
                    self.markers.push(*shot, Instant::now());
                }
                self.respond(reply, result.map(Some));
            }
            GameCommand::PlayAgain { reply } => {
                let result = self.session.play_again();
                self.sync_round();
                self.respond(reply, result.map(|_| None));
            }
            GameCommand::ResetToRegistration { reply } => {
                self.session.reset_to_registration();
                self.sync_round();
                self.respond(reply, Ok(None));
            }
            GameCommand::RefreshLeaderboard { reply } => {
                self.request_reload();
                let _ = reply.send(());
            }
        }
    }

    fn handle_tick(&mut self) {
        match self.session.tick() {
            TickOutcome::Counting { remaining } => {
                debug!(remaining = remaining, "Clock tick");
            }
            TickOutcome::Finished(summary) => self.finalize(summary),
            TickOutcome::Idle => {
                debug!("Clock tick with no active round");
            }
        }
        self.sync_round();
    }

    /// Keeps the ticker and marker list tied to the session's current round.
    ///
    /// The ticker is armed only while a round is active. A new round (or a reset) clears
    /// the markers, which drops their pending deadlines along with them.
    fn sync_round(&mut self) {
        let round = self.session.round();
        if round != self.current_round {
            self.markers.clear();
            self.ticker.cancel();
            self.current_round = round;
        }

        if self.session.is_active() {
            if !self.ticker.is_armed() {
                self.ticker.start();
            }
        } else if self.ticker.is_armed() {
            self.ticker.cancel();
        }
    }

    /// Hands a finished round to the leaderboard without waiting for it
    #[instrument(skip(self, summary), fields(round = summary.round))]
    fn finalize(&mut self, summary: SessionSummary) {
        self.saving_round = Some(summary.round);

        let service = Arc::clone(&self.leaderboard);
        let updates = self.updates_tx.clone();
        tokio::spawn(async move {
            let reload = service.finalize(&summary).await;
            let _ = updates.send(LeaderboardUpdate {
                finished_round: Some(summary.round),
                reload,
            });
        });
    }

    fn request_reload(&self) {
        let service = Arc::clone(&self.leaderboard);
        let updates = self.updates_tx.clone();
        tokio::spawn(async move {
            let reload = service.reload().await;
            let _ = updates.send(LeaderboardUpdate {
                finished_round: None,
                reload,
            });
        });
    }

    fn apply_update(&mut self, update: LeaderboardUpdate) {
        if update.finished_round.is_some() && update.finished_round == self.saving_round {
            self.saving_round = None;
        }
        self.board.apply(update.reload.seq, update.reload.result);
    }

    fn respond(
        &self,
        reply: oneshot::Sender<CommandReply>,
        result: Result<Option<Shot>, Ignored>,
    ) {
        // The caller may have given up waiting; the command still took effect
        let _ = reply.send(CommandReply::new(result, self.snapshot()));
    }

    fn snapshot(&self) -> GameSnapshot {
        let saving = self.saving_round == Some(self.session.round());
        GameSnapshot::capture(&self.session, &self.markers, &self.board, saving)
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.snapshot());
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => future::pending::<()>().await,
    }
}
