mod auth;
mod config;
mod errors;
mod justify;
mod rate_limit;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::rate_limit::{DailyWordQuota, SystemClock};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Justify API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        line_width = config.line_width,
        daily_word_limit = config.daily_word_limit,
        "Justify settings loaded"
    );

    let state = AppState::new(config.clone(), Arc::new(SystemClock));

    if config.quota_prune_interval_secs > 0 {
        spawn_quota_pruner(
            state.quota.clone(),
            Duration::from_secs(config.quota_prune_interval_secs),
        );
    }

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically drops quota records left over from previous days.
fn spawn_quota_pruner(quota: Arc<DailyWordQuota>, every: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.tick().await; // first tick completes immediately
        loop {
            ticker.tick().await;
            let removed = quota.prune_stale();
            debug!(removed, tracked = quota.tracked(), "Quota prune pass");
        }
    });
}
