//! Axum route handlers for the Justify API.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::auth::CallerId;
use crate::errors::AppError;
use crate::justify::service::justify_for_caller;
use crate::rate_limit::QuotaGrant;
use crate::state::AppState;

pub const WORDS_REMAINING_HEADER: HeaderName = HeaderName::from_static("x-words-remaining");

#[derive(Debug, Serialize)]
pub struct UsageResponse {
    #[serde(flatten)]
    pub grant: QuotaGrant,
    pub remaining: u64,
}

/// POST /api/justify
///
/// Body is plain text. Returns the text justified to the configured width,
/// charging the caller's daily word budget.
pub async fn handle_justify(
    State(state): State<AppState>,
    caller: CallerId,
    body: String,
) -> Result<Response, AppError> {
    let justified =
        justify_for_caller(&state.quota, caller.as_str(), body, state.config.line_width).await?;

    let headers = [
        (
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        ),
        (
            WORDS_REMAINING_HEADER,
            HeaderValue::from(justified.grant.remaining()),
        ),
    ];
    Ok((headers, justified.text).into_response())
}

/// GET /api/usage
///
/// Reports today's consumption for the caller without charging anything.
pub async fn handle_usage(
    State(state): State<AppState>,
    caller: CallerId,
) -> Json<UsageResponse> {
    let grant = state.quota.usage(caller.as_str());
    Json(UsageResponse {
        grant,
        remaining: grant.remaining(),
    })
}
