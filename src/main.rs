//! Event Portal
//!
//! Application entry point: opens the configured store, initializes it and
//! reports the event catalogue.

use anyhow::Context;
use tracing::{info, warn};

use event_portal::{
    config::Settings,
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file writer alive
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", event_portal::info());

    let services = ServiceFactory::from_settings(&settings)
        .await
        .context("failed to open record store")?;

    services.data.initialize().await?;

    let health = services.health_check().await;
    if !health.is_healthy() {
        for issue in health.get_issues() {
            warn!(issue = %issue, "Storage health issue");
        }
    }

    let events = services.data.get_events().await?;
    info!(count = events.len(), backend = health.backend, "Event catalogue loaded");
    for event in &events {
        info!(
            event_id = %event.id,
            title = %event.title,
            date = %event.date,
            location = %event.location,
            category = %event.category,
            "Event available"
        );
    }

    let stats = services.data.get_stats().await?;
    info!(stats = %stats, "Storage statistics");

    Ok(())
}
