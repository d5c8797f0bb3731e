use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::*;

/// `min_games` sent by the team-combination endpoints when the caller has no preference.
pub const DEFAULT_MIN_GAMES: u32 = 2;

/// Method, headers and body of a single request.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Request carrying `body` encoded as JSON, with the content type set.
    pub fn json<B: Serialize + ?Sized>(method: Method, body: &B) -> ApiResult<Self> {
        let encoded = serde_json::to_string(body).map_err(ApiError::Encode)?;
        let mut options = Self::new(method);
        options
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        options.body = Some(encoded);
        Ok(options)
    }
}

/// Thin client over the stats backend.
///
/// Holds no state besides the connection settings; clones share the
/// underlying `reqwest` connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("codenames-api/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: &ApiConfig, client: reqwest::Client) -> Self {
        Self {
            base_url: config.base_url.clone(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one request against `base_url + endpoint` and decode the JSON body.
    ///
    /// `endpoint` must start with `/`. A non-success status fails with
    /// [`ApiError::Status`] whatever the body holds. The decoded type is
    /// trusted to match what the backend sends; a mismatch surfaces as
    /// [`ApiError::Decode`].
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let RequestOptions {
            method,
            headers,
            body,
        } = options;
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.client.request(method.clone(), url.as_str()).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let resp = request.send().await?;
        let status = resp.status();
        tracing::debug!(%method, %url, status = status.as_u16(), "API response");

        let bytes = resp.bytes().await?;
        if !status.is_success() {
            tracing::warn!(%method, %url, status = status.as_u16(), "API request failed");
            return Err(ApiError::from_status(
                status,
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }

        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.fetch(endpoint, RequestOptions::default()).await
    }

    pub async fn get_all_games(&self) -> ApiResult<Vec<Game>> {
        self.get("/api/games").await
    }

    pub async fn get_player_stats(&self) -> ApiResult<Vec<PlayerStat>> {
        self.get("/api/stats/players").await
    }

    pub async fn get_player_stats_by_role(&self) -> ApiResult<Vec<PlayerRoleStat>> {
        self.get("/api/stats/players/by-role").await
    }

    /// `min_games` defaults to [`DEFAULT_MIN_GAMES`].
    pub async fn get_team_combinations(
        &self,
        min_games: Option<u32>,
    ) -> ApiResult<Vec<TeamCombinationStat>> {
        let min_games = min_games.unwrap_or(DEFAULT_MIN_GAMES);
        self.get(&format!("/api/stats/team-combinations?min_games={}", min_games))
            .await
    }

    pub async fn get_team_combinations_with_roles(
        &self,
        min_games: Option<u32>,
    ) -> ApiResult<Vec<TeamCombinationWithRoles>> {
        let min_games = min_games.unwrap_or(DEFAULT_MIN_GAMES);
        self.get(&format!(
            "/api/stats/team-combinations-with-roles?min_games={}",
            min_games
        ))
        .await
    }

    pub async fn get_total_games(&self) -> ApiResult<TotalGamesResponse> {
        self.get("/api/stats/total-games").await
    }

    pub async fn create_game(&self, game: &GameData) -> ApiResult<GameResponse> {
        self.fetch("/api/games", RequestOptions::json(Method::POST, game)?)
            .await
    }

    /// Replaces the teams and winner of game `game_id`.
    pub async fn update_game(&self, game_id: i64, game: &GameData) -> ApiResult<GameResponse> {
        self.fetch(
            &format!("/api/games/{}", game_id),
            RequestOptions::json(Method::PUT, game)?,
        )
        .await
    }

    pub async fn delete_game(&self, game_id: i64) -> ApiResult<GameResponse> {
        self.fetch(
            &format!("/api/games/{}", game_id),
            RequestOptions::new(Method::DELETE),
        )
        .await
    }

    pub async fn health(&self) -> ApiResult<HealthResponse> {
        self.get("/health").await
    }
}
