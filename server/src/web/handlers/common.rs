// Common types and utilities for API handlers

use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

// Helper type for API responses. Bodies are the raw storage results (arrays,
// documents, acknowledgements); errors carry the original `{"error": ...}`
// shape.
pub type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn internal_error(e: anyhow::Error) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

pub fn invalid_id(value: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: format!("invalid id: {}", value),
        }),
    )
}

// Query parameters

#[derive(Deserialize)]
pub struct RecentQuery {
    // Deserialized as a raw string so an unparsable value falls back to the
    // default instead of failing extraction.
    pub limit: Option<String>,
}

pub const DEFAULT_RECENT_LIMIT: i64 = 5;

/// Effective listing limit: absent, unparsable, or non-positive values all
/// fall back to the default.
pub fn effective_limit(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.parse::<i64>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_RECENT_LIMIT)
}

// Request bodies

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_when_absent() {
        assert_eq!(effective_limit(None), 5);
    }

    #[test]
    fn limit_defaults_when_invalid() {
        assert_eq!(effective_limit(Some("abc")), 5);
        assert_eq!(effective_limit(Some("")), 5);
        assert_eq!(effective_limit(Some("0")), 5);
        assert_eq!(effective_limit(Some("-3")), 5);
    }

    #[test]
    fn limit_parses_positive_values() {
        assert_eq!(effective_limit(Some("1")), 1);
        assert_eq!(effective_limit(Some("25")), 25);
    }
}
