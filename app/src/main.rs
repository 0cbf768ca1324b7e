//! Gym Planner
//!
//! Opens the on-device store and prints the current week: greeting, each
//! training day with its status and muscle groups, and today marked.

use anyhow::Result;
use chrono::{Datelike, Local};
use gym_planner_app::config::{AppConfig, LoggingConfig};
use gym_planner_app::dashboard;
use gym_planner_app::generator::looks_like_api_key;
use gym_planner_app::locale::detect_device_locale;
use gym_planner_app::state::GymStore;
use gym_planner_app::storage::{FileStore, WriteBehindStore};
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Gym Planner");

    match config.ai.api_key.as_ref() {
        Some(key) if looks_like_api_key(key.expose_secret()) => {
            info!(model = %config.ai.model, "Plan generation configured")
        }
        Some(_) => warn!("Gemini API key is set but does not look valid"),
        None => warn!("No Gemini API key configured; plan generation is unavailable"),
    }

    let locale = detect_device_locale(config.locale.override_tag.as_deref());
    let files = FileStore::new(&config.storage.dir)?;
    info!(dir = %files.dir().display(), key = %config.storage.key, "Opening store");
    let storage = Arc::new(WriteBehindStore::spawn(files));

    let store = GymStore::open(storage.clone(), config.storage.key.clone(), locale.as_deref());
    info!(language = %store.language(), phase = ?store.phase(), "Store ready");

    print!("{}", dashboard::render(store.snapshot(), Local::now().weekday()));

    storage.flush().await?;
    info!("Shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(logging: &LoggingConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter.as_str().into());

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if logging.json {
        // JSON lines for log aggregation
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
