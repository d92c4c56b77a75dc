#![allow(dead_code)] // Test utilities may not all be used in every test

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tokio::time::{sleep, Duration};

use shooting_range::{
    InMemoryLeaderboardGateway, LeaderboardEntry, LeaderboardError, LeaderboardGateway,
    ResultSubmission,
};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// In-memory gateway that records every call and can be told to fail or stall
#[derive(Clone)]
pub struct MockLeaderboardGateway {
    store: Arc<InMemoryLeaderboardGateway>,
    submissions: Arc<RwLock<Vec<ResultSubmission>>>,
    fail_saves: bool,
    fail_loads: bool,
    save_delay: Duration,
    /// Delays for successive loads. Loads past the end of the queue answer at once.
    load_delays: Arc<Mutex<VecDeque<Duration>>>,
    load_calls: Arc<AtomicUsize>,
}

impl MockLeaderboardGateway {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryLeaderboardGateway::new()),
            submissions: Arc::new(RwLock::new(Vec::new())),
            fail_saves: false,
            fail_loads: false,
            save_delay: Duration::ZERO,
            load_delays: Arc::new(Mutex::new(VecDeque::new())),
            load_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn failing_loads(mut self) -> Self {
        self.fail_loads = true;
        self
    }

    pub fn with_save_delay(mut self, delay: Duration) -> Self {
        self.save_delay = delay;
        self
    }

    pub fn with_load_delays(self, delays: Vec<Duration>) -> Self {
        Self {
            load_delays: Arc::new(Mutex::new(delays.into())),
            ..self
        }
    }

    pub async fn submissions(&self) -> Vec<ResultSubmission> {
        self.submissions.read().await.clone()
    }

    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LeaderboardGateway for MockLeaderboardGateway {
    async fn save(&self, submission: &ResultSubmission) -> Result<(), LeaderboardError> {
        sleep(self.save_delay).await;
        self.submissions.write().await.push(submission.clone());
        if self.fail_saves {
            return Err(LeaderboardError::Status(500));
        }
        self.store.save(submission).await
    }

    async fn load(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.load_delays.lock().await.pop_front();

        // Contents are read when the request goes out, not when it answers
        let result = if self.fail_loads {
            Err(LeaderboardError::Transport("connection reset".to_string()))
        } else {
            self.store.load(limit).await
        };

        if let Some(delay) = delay {
            sleep(delay).await;
        }
        result
    }
}
