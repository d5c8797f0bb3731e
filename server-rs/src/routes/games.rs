use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::AppState;

pub async fn list_games(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let games = state.api.get_all_games().await?;
    Ok(Json(json!({ "games": games })))
}
