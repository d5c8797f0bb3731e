use codenames_api::{
    PlayerRoleStat, PlayerStat, TeamCombinationStat, OPERATIVE_ROLE, SPYMASTER_ROLE,
};
use serde::Serialize;

/// Entries shown per list.
pub const BOARD_SIZE: usize = 10;

/// `min_games` used when fetching combinations for the scoreboard.
pub const COMBINATION_MIN_GAMES: u32 = 1;

/// Text summary of the current standings, as shown on the home view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scoreboard {
    pub headline: String,
    pub leaderboard: Vec<String>,
    pub operatives: Vec<String>,
    pub spymasters: Vec<String>,
    pub combinations: Vec<String>,
}

fn leaderboard_line(rank: usize, stat: &PlayerStat) -> String {
    format!(
        "{}. {}: {}-{} ({:.1}%)",
        rank, stat.name, stat.wins, stat.losses, stat.win_rate
    )
}

fn role_line(stat: &PlayerRoleStat) -> String {
    format!(
        "{}: {}/{} ({:.1}%)",
        stat.name, stat.wins, stat.total_games, stat.win_rate
    )
}

fn combination_line(stat: &TeamCombinationStat) -> String {
    format!(
        "{}: {}-{} ({:.1}%)",
        stat.player_names.replace(',', " + "),
        stat.wins,
        stat.losses,
        stat.win_rate
    )
}

fn role_board(roles: &[PlayerRoleStat], role: &str) -> Vec<String> {
    roles
        .iter()
        .filter(|s| s.role == role)
        .take(BOARD_SIZE)
        .map(role_line)
        .collect()
}

/// Stats are listed in the order the backend returned them.
pub fn build(
    total_games: i64,
    players: &[PlayerStat],
    roles: &[PlayerRoleStat],
    combinations: &[TeamCombinationStat],
) -> Scoreboard {
    Scoreboard {
        headline: format!("Total games played: {}", total_games),
        leaderboard: players
            .iter()
            .take(BOARD_SIZE)
            .enumerate()
            .map(|(i, stat)| leaderboard_line(i + 1, stat))
            .collect(),
        operatives: role_board(roles, OPERATIVE_ROLE),
        spymasters: role_board(roles, SPYMASTER_ROLE),
        combinations: combinations
            .iter()
            .take(BOARD_SIZE)
            .map(combination_line)
            .collect(),
    }
}
