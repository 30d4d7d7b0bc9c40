use crate::app_config::AppConfig;
use crate::map::MapRenderer;
use crate::osrm::OsrmRouteSource;
use crate::tracker::Tracker;
use tokio::sync::watch;
use tokio::{signal, task};
use tracing::{info, warn};

mod app_config;
mod domain;
mod map;
mod osrm;
mod tracker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = osrm::new_client(&config)?;
    let source = OsrmRouteSource::new(client, config.routing());
    let renderer = MapRenderer::new(config.map().clone());
    let mut tracker = Tracker::new(Box::new(source), renderer, config.tracker());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    task::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            // Keep the sender alive, a dropped sender would stop the tracker
            warn!("⚠️ Unable to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("🛑 Received Ctrl-C, stopping...");
        shutdown_tx.send(true).unwrap_or_default();
    });
    info!("✅  Initialized shutdown listener");

    info!(
        routing = config.routing().url(),
        output = %config.map().output().display(),
        "🔥 {} is up and running",
        env!("CARGO_PKG_NAME")
    );

    tracker.run(shutdown_rx).await?;

    Ok(())
}
