use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use codenames_api::{GameData, GameResponse};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::AppState;

pub async fn overview(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let (games, total) = tokio::try_join!(state.api.get_all_games(), state.api.get_total_games())?;
    Ok(Json(json!({ "games": games, "total_games": total.total_games })))
}

// Writes go straight to the backend, which validates rosters and winner.
// Only a body that is not a `GameData` at all is rejected here.

pub async fn create_game(
    State(state): State<AppState>,
    body: Result<Json<GameData>, JsonRejection>,
) -> AppResult<Json<GameResponse>> {
    let Json(body) = body?;
    let created = state.api.create_game(&body).await?;
    tracing::info!(game_id = created.game_id, "Game created");
    Ok(Json(created))
}

pub async fn update_game(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<GameData>, JsonRejection>,
) -> AppResult<Json<GameResponse>> {
    let Path(id) = id?;
    let Json(body) = body?;
    let updated = state.api.update_game(id, &body).await?;
    tracing::info!(game_id = id, "Game updated");
    Ok(Json(updated))
}

pub async fn delete_game(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<GameResponse>> {
    let Path(id) = id?;
    let deleted = state.api.delete_game(id).await?;
    tracing::info!(game_id = id, "Game deleted");
    Ok(Json(deleted))
}
