use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

use super::{LeaderboardEntry, LeaderboardError, LeaderboardGateway, ResultSubmission};

/// Default per-request budget for talking to the store
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Gateway backed by the hosted leaderboard function.
///
/// `GET <endpoint>?limit=N` loads, `POST <endpoint>` saves. The blocking HTTP client runs
/// on tokio's blocking pool so the game loop is never stalled by the network.
#[derive(Clone)]
pub struct HttpLeaderboardGateway {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpLeaderboardGateway {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn load_url(&self, limit: usize) -> String {
        format!("{}?limit={}", self.endpoint, limit)
    }
}

fn map_ureq_error(error: ureq::Error) -> LeaderboardError {
    match error {
        ureq::Error::StatusCode(status) => LeaderboardError::Status(status),
        other => LeaderboardError::Transport(other.to_string()),
    }
}

async fn run_blocking<T, F>(job: F) -> Result<T, LeaderboardError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, LeaderboardError> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| LeaderboardError::Transport(format!("request task failed: {e}")))?
}

#[async_trait]
impl LeaderboardGateway for HttpLeaderboardGateway {
    #[instrument(skip(self, submission), fields(endpoint = %self.endpoint))]
    async fn save(&self, submission: &ResultSubmission) -> Result<(), LeaderboardError> {
        let agent = self.agent.clone();
        let url = self.endpoint.clone();
        let body = submission.clone();

        run_blocking(move || {
            agent
                .post(&url)
                .send_json(&body)
                .map(|_| ())
                .map_err(map_ureq_error)
        })
        .await?;

        debug!(score = submission.score, "Result saved to leaderboard store");
        Ok(())
    }

    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn load(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let agent = self.agent.clone();
        let url = self.load_url(limit);

        let entries = run_blocking(move || {
            let response = agent.get(&url).call().map_err(map_ureq_error)?;
            let mut body = response.into_body();
            body.read_json::<Vec<LeaderboardEntry>>()
                .map_err(|e| LeaderboardError::Decode(e.to_string()))
        })
        .await?;

        debug!(count = entries.len(), "Leaderboard loaded from store");
        Ok(entries)
    }
}
