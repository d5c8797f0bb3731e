use http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("API request failed: {status_text}")]
    Status {
        status: StatusCode,
        status_text: String,
        body: Option<String>,
    },

    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response parse failed: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Request encode failed: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        let body = if body.trim().is_empty() { None } else { Some(body) };
        ApiError::Status {
            status,
            status_text,
            body,
        }
    }

    /// HTTP status of the failed response, if the backend answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// The backend's `{"detail": "..."}` message, when the error body has one.
    pub fn detail(&self) -> Option<String> {
        let ApiError::Status {
            body: Some(body), ..
        } = self
        else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value["detail"].as_str().map(str::to_string)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
