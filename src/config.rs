use std::env;
use std::time::Duration;

use crate::game::RunnerConfig;
use crate::leaderboard::{http::DEFAULT_REQUEST_TIMEOUT, DEFAULT_LEADERBOARD_LIMIT};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Process configuration, read once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Hosted leaderboard endpoint. The in-memory store is used when unset.
    pub leaderboard_url: Option<String>,
    pub leaderboard_limit: usize,
    pub leaderboard_timeout: Duration,
    pub runner: RunnerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            leaderboard_url: None,
            leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
            leaderboard_timeout: DEFAULT_REQUEST_TIMEOUT,
            runner: RunnerConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any key lookup. Bad values fall back to defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.bind_addr);

        let leaderboard_url = lookup("LEADERBOARD_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let leaderboard_limit = read_positive(&lookup, "LEADERBOARD_LIMIT")
            .map(|value| value as usize)
            .unwrap_or(defaults.leaderboard_limit);

        let leaderboard_timeout = read_positive(&lookup, "LEADERBOARD_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.leaderboard_timeout);

        Self {
            bind_addr,
            leaderboard_url,
            leaderboard_limit,
            leaderboard_timeout,
            runner: defaults.runner,
        }
    }
}

fn read_positive<F>(lookup: &F, name: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name)?;
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            tracing::warn!("{} ({}) is not a positive integer. Falling back to default.", name, raw);
            None
        }
    }
}
