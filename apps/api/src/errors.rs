use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures raised by the formatting core and the word quota.
/// Carries no transport knowledge; `AppError` owns the HTTP mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JustifyError {
    #[error("Word \"{word}\" exceeds maximum line length of {limit} characters")]
    WordTooLong { word: String, limit: usize },

    #[error("Daily limit of {limit} words exceeded for caller {identifier}")]
    QuotaExceeded { identifier: String, limit: u64 },

    #[error("Invalid caller identifier: {0}")]
    InvalidCallerIdentifier(String),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Justify(#[from] JustifyError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Justify(err @ JustifyError::WordTooLong { .. }) => {
                (StatusCode::BAD_REQUEST, "WORD_TOO_LONG", err.to_string())
            }
            // Identifier is left out of the body: it is the caller's bearer token.
            AppError::Justify(JustifyError::QuotaExceeded { limit, .. }) => (
                StatusCode::PAYMENT_REQUIRED,
                "PAYMENT_REQUIRED",
                format!("Daily limit of {limit} words exceeded"),
            ),
            AppError::Justify(JustifyError::InvalidCallerIdentifier(reason)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", reason.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_too_long_maps_to_bad_request() {
        let err = AppError::from(JustifyError::WordTooLong {
            word: "x".repeat(81),
            limit: 80,
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_quota_exceeded_maps_to_payment_required() {
        let err = AppError::from(JustifyError::QuotaExceeded {
            identifier: "abc".to_string(),
            limit: 80_000,
        });
        assert_eq!(err.into_response().status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn test_invalid_identifier_maps_to_unauthorized() {
        let err = AppError::from(JustifyError::InvalidCallerIdentifier(
            "missing".to_string(),
        ));
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_word_too_long_message_names_word_and_limit() {
        let err = JustifyError::WordTooLong {
            word: "antidisestablishment".to_string(),
            limit: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("antidisestablishment"));
        assert!(msg.contains("10"));
    }
}
