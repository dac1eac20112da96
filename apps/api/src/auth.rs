//! Caller identification for quota accounting.
//!
//! Tokens are minted and stored elsewhere; this layer only derives an opaque
//! identifier from `Authorization: Bearer <token>` and rejects headers that
//! cannot carry one.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::errors::{AppError, JustifyError};

const BEARER_PREFIX: &str = "Bearer ";

/// Shortest accepted header value, prefix included.
const MIN_HEADER_LEN: usize = 20;

/// Opaque caller identifier: the bearer token with its scheme stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerId(pub String);

impl CallerId {
    pub fn from_header(value: Option<&str>) -> Result<Self, JustifyError> {
        let value = value.ok_or_else(|| {
            JustifyError::InvalidCallerIdentifier("Authorization header is required".to_string())
        })?;

        match value.strip_prefix(BEARER_PREFIX) {
            Some(token) if value.len() >= MIN_HEADER_LEN && !token.trim().is_empty() => {
                Ok(CallerId(token.to_string()))
            }
            _ => Err(JustifyError::InvalidCallerIdentifier(
                "Invalid token format".to_string(),
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = match parts.headers.get(AUTHORIZATION) {
            Some(raw) => Some(raw.to_str().map_err(|_| {
                JustifyError::InvalidCallerIdentifier(
                    "Authorization header is not valid text".to_string(),
                )
            })?),
            None => None,
        };
        Ok(CallerId::from_header(header)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_is_stripped() {
        let id = CallerId::from_header(Some("Bearer a1b2c3d4e5f6a7b8c9d0")).unwrap();
        assert_eq!(id.as_str(), "a1b2c3d4e5f6a7b8c9d0");
    }

    #[test]
    fn test_missing_header_rejected() {
        assert!(matches!(
            CallerId::from_header(None),
            Err(JustifyError::InvalidCallerIdentifier(_))
        ));
    }

    #[test]
    fn test_wrong_scheme_rejected() {
        assert!(CallerId::from_header(Some("Basic dXNlcjpwYXNzd29yZA==")).is_err());
    }

    #[test]
    fn test_short_header_rejected() {
        assert!(CallerId::from_header(Some("Bearer short")).is_err());
    }

    #[test]
    fn test_blank_token_rejected() {
        assert!(CallerId::from_header(Some("Bearer                 ")).is_err());
    }
}
