use axum::{
    http::{HeaderValue, Uri},
    routing::{get, post, put},
    Router,
};
use codenames_api::ApiClient;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod routes;
mod services;

use config::Config;
use error::AppError;
use routes::View;

#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub config: Arc<Config>,
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allows_any_origin() {
        return cors.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let admin_game_routes = Router::new()
        .route("/", post(routes::admin::create_game))
        .route(
            "/:id",
            put(routes::admin::update_game).delete(routes::admin::delete_game),
        );

    Router::new()
        .route(View::Home.path(), get(routes::home::home))
        .route(View::Games.path(), get(routes::games::list_games))
        .route(View::Players.path(), get(routes::players::player_stats))
        .route(View::Query.path(), get(routes::query::team_combinations))
        .route(View::Admin.path(), get(routes::admin::overview))
        .nest("/admin/games", admin_game_routes)
        .route("/health", get(routes::health::health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .json()
        .init();

    let api = ApiClient::new(&config.api())?;
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));

    tracing::info!(api_url = %api.base_url(), %addr, "Codenames stats frontend starting");

    let state = AppState {
        api,
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        extract::{Path, Query},
        http::{Method, Request, StatusCode},
        response::IntoResponse,
        Json,
    };
    use codenames_api::{ApiConfig, GameData};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use tower::ServiceExt;

    async fn combinations(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
        let min = q.get("min_games").cloned().unwrap_or_default();
        Json(json!([{
            "player_names": format!("min={min}"),
            "wins": 2, "losses": 1, "total_games": 3, "win_rate": 66.7
        }]))
    }

    async fn create(Json(game): Json<GameData>) -> axum::response::Response {
        if game.winner != "Blue" && game.winner != "Red" {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "Winner must be 'Blue' or 'Red'"})),
            )
                .into_response();
        }
        Json(json!({"game_id": 12, "message": "Game #12 created successfully"})).into_response()
    }

    async fn update(Path(id): Path<i64>, Json(_game): Json<GameData>) -> Json<Value> {
        Json(json!({"game_id": id, "message": format!("Game #{id} updated successfully")}))
    }

    async fn delete(Path(id): Path<i64>) -> axum::response::Response {
        if id == 404 {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({"detail": "Game 404 not found"})),
            )
                .into_response();
        }
        Json(json!({"game_id": id, "message": format!("Game #{id} deleted successfully")}))
            .into_response()
    }

    fn stats_backend() -> Router {
        Router::new()
            .route(
                "/api/games",
                get(|| async {
                    Json(json!([{
                        "id": 1,
                        "date": "2025-01-04T20:15:00",
                        "winner": "Blue",
                        "raw_data": {
                            "blue_team": {"operatives": ["Alice"], "spymasters": ["Bob"]},
                            "red_team": {"operatives": ["Carol"], "spymasters": ["Dan"]},
                            "winner": "Blue"
                        }
                    }]))
                })
                .post(create),
            )
            .route("/api/games/:id", put(update).delete(delete))
            .route(
                "/api/stats/total-games",
                get(|| async { Json(json!({"total_games": 1})) }),
            )
            .route(
                "/api/stats/players",
                get(|| async {
                    Json(json!([
                        {"name": "Alice", "total_games": 1, "wins": 1, "losses": 0, "win_rate": 100.0},
                        {"name": "Carol", "total_games": 1, "wins": 0, "losses": 1, "win_rate": 0.0}
                    ]))
                }),
            )
            .route(
                "/api/stats/players/by-role",
                get(|| async {
                    Json(json!([
                        {"name": "Alice", "role": "Operative", "total_games": 1, "wins": 1, "win_rate": 100.0},
                        {"name": "Bob", "role": "Spymaster", "total_games": 1, "wins": 1, "win_rate": 100.0}
                    ]))
                }),
            )
            .route("/api/stats/team-combinations", get(combinations))
            .route(
                "/api/stats/team-combinations-with-roles",
                get(|| async { Json(json!([])) }),
            )
            .route(
                "/health",
                get(|| async { Json(json!({"status": "healthy", "database": "connected"})) }),
            )
    }

    async fn app_with_backend(backend: Option<Router>) -> Router {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        match backend {
            Some(backend) => {
                tokio::spawn(async move {
                    axum::serve(listener, backend).await.unwrap();
                });
            }
            None => drop(listener),
        }

        let config = Config {
            api_url: format!("http://{addr}"),
            ..Config::default()
        };
        let state = AppState {
            api: ApiClient::new(&ApiConfig::new(&config.api_url)).unwrap(),
            config: Arc::new(config),
        };
        build_router(state)
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let resp = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn game_body(winner: &str) -> Value {
        json!({
            "blue_team": {"operatives": ["A", "B"], "spymasters": ["C"]},
            "red_team": {"operatives": ["D"], "spymasters": ["E"]},
            "winner": winner
        })
    }

    #[tokio::test]
    async fn every_view_path_resolves() {
        for view in View::ALL {
            let app = app_with_backend(Some(stats_backend())).await;
            let (status, _) = send(app, Method::GET, view.path(), None).await;
            assert_eq!(status, StatusCode::OK, "view {}", view.name());
        }
    }

    #[tokio::test]
    async fn unlisted_path_is_not_found() {
        let app = app_with_backend(Some(stats_backend())).await;
        let (status, body) = send(app, Method::GET, "/leaderboard", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found: /leaderboard");
    }

    #[tokio::test]
    async fn home_shows_scoreboard() {
        let app = app_with_backend(Some(stats_backend())).await;
        let (_, body) = send(app, Method::GET, "/", None).await;
        assert_eq!(body["total_games"], 1);
        assert_eq!(body["scoreboard"]["headline"], "Total games played: 1");
        assert_eq!(body["scoreboard"]["leaderboard"][0], "1. Alice: 1-0 (100.0%)");
        assert_eq!(body["scoreboard"]["spymasters"][0], "Bob: 1/1 (100.0%)");
        assert_eq!(body["scoreboard"]["combinations"][0], "min=1: 2-1 (66.7%)");
    }

    #[tokio::test]
    async fn games_view_lists_games() {
        let app = app_with_backend(Some(stats_backend())).await;
        let (_, body) = send(app, Method::GET, "/games", None).await;
        assert_eq!(body["games"][0]["raw_data"]["blue_team"]["spymasters"][0], "Bob");
    }

    #[tokio::test]
    async fn players_view_splits_roles() {
        let app = app_with_backend(Some(stats_backend())).await;
        let (_, body) = send(app, Method::GET, "/players", None).await;
        assert_eq!(body["players"].as_array().unwrap().len(), 2);
        assert_eq!(body["operatives"][0]["name"], "Alice");
        assert_eq!(body["spymasters"][0]["name"], "Bob");
    }

    #[tokio::test]
    async fn query_view_defaults_min_games() {
        let app = app_with_backend(Some(stats_backend())).await;
        let (_, body) = send(app, Method::GET, "/query", None).await;
        assert_eq!(body["min_games"], 2);
        assert_eq!(body["team_combinations"][0]["player_names"], "min=2");
    }

    #[tokio::test]
    async fn query_view_forwards_min_games() {
        let app = app_with_backend(Some(stats_backend())).await;
        let (_, body) = send(app, Method::GET, "/query?min_games=5", None).await;
        assert_eq!(body["min_games"], 5);
        assert_eq!(body["team_combinations"][0]["player_names"], "min=5");
    }

    #[tokio::test]
    async fn admin_creates_game() {
        let app = app_with_backend(Some(stats_backend())).await;
        let (status, body) = send(app, Method::POST, "/admin/games", Some(game_body("Blue"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["game_id"], 12);
    }

    #[tokio::test]
    async fn admin_passes_backend_validation_through() {
        let app = app_with_backend(Some(stats_backend())).await;
        let (status, body) = send(app, Method::POST, "/admin/games", Some(game_body("Green"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Winner must be 'Blue' or 'Red'");
    }

    #[tokio::test]
    async fn admin_rejects_malformed_body_as_json_error() {
        let app = app_with_backend(Some(stats_backend())).await;
        let (status, body) =
            send(app, Method::POST, "/admin/games", Some(json!({"winner": "Blue"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("blue_team"));
    }

    #[tokio::test]
    async fn admin_rejects_non_numeric_id_as_json_error() {
        let app = app_with_backend(Some(stats_backend())).await;
        let (status, body) = send(app, Method::DELETE, "/admin/games/seven", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn query_view_rejects_negative_min_games() {
        let app = app_with_backend(Some(stats_backend())).await;
        let (status, body) = send(app, Method::GET, "/query?min_games=-1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn admin_updates_and_deletes_by_id() {
        let app = app_with_backend(Some(stats_backend())).await;
        let (status, body) =
            send(app.clone(), Method::PUT, "/admin/games/7", Some(game_body("Red"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Game #7 updated successfully");

        let (status, body) = send(app.clone(), Method::DELETE, "/admin/games/7", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["game_id"], 7);

        let (status, body) = send(app, Method::DELETE, "/admin/games/404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Game 404 not found");
    }

    #[tokio::test]
    async fn unreachable_backend_is_bad_gateway() {
        let app = app_with_backend(None).await;
        let (status, body) = send(app, Method::GET, "/games", None).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "Backend unavailable");
    }

    #[tokio::test]
    async fn health_reports_backend_state() {
        let app = app_with_backend(Some(stats_backend())).await;
        let (_, body) = send(app, Method::GET, "/health", None).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["backend"]["database"], "connected");

        let app = app_with_backend(None).await;
        let (status, body) = send(app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["backend"], Value::Null);
    }
}
