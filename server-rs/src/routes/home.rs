use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::services::scoreboard;
use crate::AppState;

pub async fn home(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let (total, players, roles, combinations) = tokio::try_join!(
        state.api.get_total_games(),
        state.api.get_player_stats(),
        state.api.get_player_stats_by_role(),
        state
            .api
            .get_team_combinations(Some(scoreboard::COMBINATION_MIN_GAMES)),
    )?;

    let board = scoreboard::build(total.total_games, &players, &roles, &combinations);

    Ok(Json(json!({
        "total_games": total.total_games,
        "leaderboard": players,
        "scoreboard": board,
    })))
}
