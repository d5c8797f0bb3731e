use std::env;

use codenames_api::{ApiConfig, DEFAULT_BASE_URL};

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub cors_origins: Vec<String>,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env_or_parse("PORT", 3000),
            api_url: env::var("API_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cors_origins: split_origins(&env_or("CORS_ORIGINS", "*")),
        }
    }

    pub fn api(&self) -> ApiConfig {
        ApiConfig::new(&self.api_url)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            api_url: DEFAULT_BASE_URL.to_string(),
            cors_origins: vec!["*".to_string()],
        }
    }
}
