use std::sync::Arc;

use crate::config::Config;
use crate::rate_limit::{Clock, DailyWordQuota};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Per-caller word budget. One table per service instance.
    pub quota: Arc<DailyWordQuota>,
}

impl AppState {
    pub fn new(config: Config, clock: Arc<dyn Clock>) -> Self {
        let quota = Arc::new(DailyWordQuota::new(config.daily_word_limit, clock));
        Self { config, quota }
    }
}
