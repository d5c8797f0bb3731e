use serde::{Deserialize, Serialize};

pub const BLUE_TEAM: &str = "Blue";
pub const RED_TEAM: &str = "Red";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamData {
    pub operatives: Vec<String>,
    pub spymasters: Vec<String>,
}

/// Team composition and result of one game.
///
/// Sent as the body of create and update calls, and returned as the
/// `raw_data` of a stored [`Game`]. Rosters and `winner` are not checked
/// here; the backend owns that validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    pub blue_team: TeamData,
    pub red_team: TeamData,
    pub winner: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub date: String,
    pub winner: String,
    pub raw_data: GameData,
}

/// Acknowledgement returned by create, update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResponse {
    pub game_id: i64,
    pub message: String,
}
