use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info, instrument};

use super::types::{DurationRequest, FireRequest, HealthResponse, RegisterRequest};
use crate::game::{CommandReply, GameSnapshot};
use crate::leaderboard::LeaderboardView;
use crate::shared::{AppError, AppJson, AppState};

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /game
/// Returns the latest published state
pub async fn get_game(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.game.snapshot())
}

/// POST /game/register
/// Stores the form fields. Moves on to setup once all three are filled in.
#[instrument(name = "register", skip(state, request))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<Json<CommandReply>, AppError> {
    let reply = state.game.register(request.into()).await?;
    info!(applied = reply.applied, phase = %reply.state.phase, "Registration submitted");
    Ok(Json(reply))
}

/// POST /game/duration
#[instrument(name = "select_duration", skip(state))]
pub async fn select_duration(
    State(state): State<AppState>,
    AppJson(request): AppJson<DurationRequest>,
) -> Result<Json<CommandReply>, AppError> {
    let reply = state.game.select_duration(request.seconds).await?;
    debug!(applied = reply.applied, "Duration selected");
    Ok(Json(reply))
}

/// POST /game/start
#[instrument(name = "start_game", skip(state))]
pub async fn start_game(State(state): State<AppState>) -> Result<Json<CommandReply>, AppError> {
    let reply = state.game.start_game().await?;
    info!(applied = reply.applied, round = reply.state.round, "Start requested");
    Ok(Json(reply))
}

/// POST /game/fire
/// Ignored shots still answer 200 with `applied: false`
#[instrument(name = "fire", skip(state))]
pub async fn fire(
    State(state): State<AppState>,
    AppJson(request): AppJson<FireRequest>,
) -> Result<Json<CommandReply>, AppError> {
    let reply = state.game.fire_at(request.x, request.y).await?;
    Ok(Json(reply))
}

/// POST /game/play-again
#[instrument(name = "play_again", skip(state))]
pub async fn play_again(State(state): State<AppState>) -> Result<Json<CommandReply>, AppError> {
    let reply = state.game.play_again().await?;
    info!(applied = reply.applied, round = reply.state.round, "Play again requested");
    Ok(Json(reply))
}

/// POST /game/reset
#[instrument(name = "reset", skip(state))]
pub async fn reset(State(state): State<AppState>) -> Result<Json<CommandReply>, AppError> {
    let reply = state.game.reset_to_registration().await?;
    info!("Session reset to registration");
    Ok(Json(reply))
}

/// GET /leaderboard
/// Last applied list, which may be older than a pending reload
pub async fn get_leaderboard(State(state): State<AppState>) -> Json<LeaderboardView> {
    Json(state.game.snapshot().leaderboard)
}

/// POST /leaderboard/refresh
/// Answers 202 straight away. The new list shows up in later snapshots.
#[instrument(name = "refresh_leaderboard", skip(state))]
pub async fn refresh_leaderboard(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.game.refresh_leaderboard().await?;
    Ok(StatusCode::ACCEPTED)
}
