//! Justify orchestration: quota decision first, then formatting.
//!
//! A rejected request is never formatted. An accepted request keeps its
//! word charge even if formatting then fails on an oversized word.
//! Formatting is CPU-bound and runs under `tokio::task::spawn_blocking`.

use tracing::info;

use crate::errors::AppError;
use crate::justify::paragraph::{count_words, format_text};
use crate::rate_limit::{DailyWordQuota, QuotaGrant};

/// A formatted text together with the caller's budget after the charge.
#[derive(Debug, Clone)]
pub struct Justified {
    pub text: String,
    pub grant: QuotaGrant,
}

/// Charges `caller` for the words in `text` and returns it justified to `width`.
pub async fn justify_for_caller(
    quota: &DailyWordQuota,
    caller: &str,
    text: String,
    width: usize,
) -> Result<Justified, AppError> {
    let words = count_words(&text);
    let grant = quota.consume(caller, words)?;

    let formatted = tokio::task::spawn_blocking(move || format_text(&text, width))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in justify: {e}")))??;

    info!(
        words,
        lines = formatted.lines().count(),
        remaining = grant.remaining(),
        "Text justified"
    );

    Ok(Justified {
        text: formatted,
        grant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::errors::JustifyError;
    use crate::rate_limit::clock::FixedClock;

    fn quota(limit: u64) -> DailyWordQuota {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        DailyWordQuota::new(limit, Arc::new(clock))
    }

    #[tokio::test]
    async fn test_accepted_request_is_formatted_and_charged() {
        let quota = quota(100);
        let out = justify_for_caller(&quota, "caller", "aa bb cc".to_string(), 5)
            .await
            .unwrap();
        assert_eq!(out.text, "aa bb\ncc");
        assert_eq!(out.grant.used, 3);
        assert_eq!(out.grant.remaining(), 97);
    }

    #[tokio::test]
    async fn test_rejected_request_is_not_formatted() {
        let quota = quota(5);
        quota.consume("caller", 5).unwrap();

        // Would fail formatting too; the quota decision comes first.
        let err = justify_for_caller(&quota, "caller", "x".repeat(50), 10)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Justify(JustifyError::QuotaExceeded { .. })
        ));
    }

    #[tokio::test]
    async fn test_word_too_long_still_charges_quota() {
        let quota = quota(100);
        let text = format!("short {}", "w".repeat(11));
        let err = justify_for_caller(&quota, "caller", text, 10)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Justify(JustifyError::WordTooLong { limit: 10, .. })
        ));
        assert_eq!(quota.usage("caller").used, 2);
    }

    #[tokio::test]
    async fn test_empty_text_costs_nothing() {
        let quota = quota(100);
        let out = justify_for_caller(&quota, "caller", "  \n\n ".to_string(), 80)
            .await
            .unwrap();
        assert_eq!(out.text, "\n\n");
        assert_eq!(out.grant.used, 0);
    }
}
