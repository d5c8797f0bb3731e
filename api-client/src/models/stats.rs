use serde::{Deserialize, Serialize};

pub const OPERATIVE_ROLE: &str = "Operative";
pub const SPYMASTER_ROLE: &str = "Spymaster";

// All aggregates are computed by the backend. Expected (not checked):
// wins + losses == total_games.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub name: String,
    pub total_games: i64,
    pub wins: i64,
    pub losses: i64,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRoleStat {
    pub name: String,
    pub role: String,
    pub total_games: i64,
    pub wins: i64,
    pub win_rate: f64,
}

/// Stats for a group of players, keyed by their joined names (`"Alice,Bob"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamCombinationStat {
    pub player_names: String,
    pub wins: i64,
    pub losses: i64,
    pub total_games: i64,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamCombinationWithRoles {
    pub spymasters: Vec<String>,
    pub operatives: Vec<String>,
    pub wins: i64,
    pub losses: i64,
    pub total_games: i64,
    pub win_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalGamesResponse {
    pub total_games: i64,
}
