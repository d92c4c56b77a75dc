use shooting_range::{
    api, AppConfig, AppState, GameRunner, HttpLeaderboardGateway, InMemoryLeaderboardGateway,
    LeaderboardGateway, LeaderboardService,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shooting_range=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting shooting range server");

    let config = AppConfig::from_env();

    let gateway: Arc<dyn LeaderboardGateway> = match &config.leaderboard_url {
        Some(url) => {
            info!(endpoint = %url, "Using hosted leaderboard");
            Arc::new(HttpLeaderboardGateway::new(url.clone(), config.leaderboard_timeout))
        }
        None => {
            warn!("LEADERBOARD_URL not set, results are kept in memory only");
            Arc::new(InMemoryLeaderboardGateway::new())
        }
    };

    let leaderboard = Arc::new(LeaderboardService::new(gateway, config.leaderboard_limit));
    let (game, _runner) = GameRunner::spawn(leaderboard, config.runner.clone());
    let app = api::router(AppState::new(game));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await
}
