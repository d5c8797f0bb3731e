//! Typed client for the Codenames stats REST backend.
//!
//! Every call is a single request against the configured base URL. There is
//! no retry, caching or cancellation; failures propagate as [`ApiError`].

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{ApiClient, RequestOptions, DEFAULT_MIN_GAMES};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use models::*;
