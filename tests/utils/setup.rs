#![allow(dead_code)] // Test utilities may not all be used in every test

use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use shooting_range::{GameHandle, GameRunner, LeaderboardService, RunnerConfig};

use super::mocks::MockLeaderboardGateway;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub game: GameHandle,
    pub gateway: MockLeaderboardGateway,
    pub _runner: JoinHandle<()>,
}

pub struct TestSetupBuilder {
    gateway: MockLeaderboardGateway,
    config: RunnerConfig,
    limit: usize,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            gateway: MockLeaderboardGateway::new(),
            config: RunnerConfig::default(),
            limit: 10,
        }
    }

    pub fn with_gateway(mut self, gateway: MockLeaderboardGateway) -> Self {
        self.gateway = gateway;
        self
    }

    pub fn with_marker_ttl(mut self, ttl: Duration) -> Self {
        self.config.marker_ttl = ttl;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub async fn build(self) -> TestSetup {
        let service = Arc::new(LeaderboardService::new(
            Arc::new(self.gateway.clone()),
            self.limit,
        ));
        let (game, runner) = GameRunner::spawn(service, self.config);

        // Let the startup reload go out before the test starts driving the game
        tokio::task::yield_now().await;

        TestSetup {
            game,
            gateway: self.gateway,
            _runner: runner,
        }
    }
}
