pub mod admin;
pub mod games;
pub mod health;
pub mod home;
pub mod players;
pub mod query;

/// The navigable views of the app, one per top-level path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Games,
    Players,
    Query,
    Admin,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Home,
        View::Games,
        View::Players,
        View::Query,
        View::Admin,
    ];

    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::Games => "/games",
            View::Players => "/players",
            View::Query => "/query",
            View::Admin => "/admin",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Games => "games",
            View::Players => "players",
            View::Query => "query",
            View::Admin => "admin",
        }
    }

    /// Exact match only; anything unlisted is not a view.
    pub fn from_path(path: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.path() == path)
    }
}
