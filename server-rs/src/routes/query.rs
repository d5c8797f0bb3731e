use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use codenames_api::DEFAULT_MIN_GAMES;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CombinationQuery {
    pub min_games: Option<u32>,
}

pub async fn team_combinations(
    State(state): State<AppState>,
    q: Result<Query<CombinationQuery>, QueryRejection>,
) -> AppResult<Json<Value>> {
    let Query(q) = q?;
    let min_games = q.min_games.unwrap_or(DEFAULT_MIN_GAMES);

    let (combinations, with_roles) = tokio::try_join!(
        state.api.get_team_combinations(Some(min_games)),
        state.api.get_team_combinations_with_roles(Some(min_games)),
    )?;

    Ok(Json(json!({
        "min_games": min_games,
        "team_combinations": combinations,
        "team_combinations_with_roles": with_roles,
    })))
}
