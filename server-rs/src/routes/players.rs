use axum::{extract::State, Json};
use codenames_api::{PlayerRoleStat, OPERATIVE_ROLE, SPYMASTER_ROLE};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::AppState;

fn with_role<'a>(stats: &'a [PlayerRoleStat], role: &str) -> Vec<&'a PlayerRoleStat> {
    stats.iter().filter(|s| s.role == role).collect()
}

pub async fn player_stats(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let (players, by_role) = tokio::try_join!(
        state.api.get_player_stats(),
        state.api.get_player_stats_by_role(),
    )?;

    Ok(Json(json!({
        "players": players,
        "operatives": with_role(&by_role, OPERATIVE_ROLE),
        "spymasters": with_role(&by_role, SPYMASTER_ROLE),
        "by_role": by_role,
    })))
}
