pub mod handlers;
pub mod socket;
pub mod types;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::shared::AppState;

/// All HTTP and WebSocket routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/game", get(handlers::get_game))
        .route("/game/register", post(handlers::register))
        .route("/game/duration", post(handlers::select_duration))
        .route("/game/start", post(handlers::start_game))
        .route("/game/fire", post(handlers::fire))
        .route("/game/play-again", post(handlers::play_again))
        .route("/game/reset", post(handlers::reset))
        .route("/game/ws", get(socket::game_socket))
        .route("/leaderboard", get(handlers::get_leaderboard))
        .route("/leaderboard/refresh", post(handlers::refresh_leaderboard))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
