use crate::api::AppState;
use crate::app_config::AppConfig;
use crate::refresher::{HttpSource, Refresher, SnapshotSource, StoreSource};
use crate::store::InMemoryStore;
use reqwest::Client;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

mod api;
mod app_config;
mod domain;
mod geocoding;
mod lat_lng_deserializer;
mod membership;
mod refresher;
mod store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load()?);
    info!("✅  Loaded configuration");

    let store = InMemoryStore::new();
    let source: Arc<dyn SnapshotSource> = match config.refresher().remote_url() {
        Some(url) => {
            info!("✅  Live view polls {}", url);
            Arc::new(HttpSource::new(Client::builder().timeout(config.refresher().location_interval()).build()?, url))
        }
        None => Arc::new(StoreSource::new(Arc::new(store.clone()), Arc::new(store.clone()))),
    };

    let refresher = Refresher::new(source, config.refresher().location_interval())
        .area_interval(config.refresher().area_interval())
        .spawn();
    info!("✅  Initialized live view refresher");

    let state = AppState {
        config: config.clone(),
        areas: Arc::new(store.clone()),
        locations: Arc::new(store),
        geocoding_client: geocoding::new_client(&config)?,
        live_view: refresher.subscribe(),
    };

    let address = config.server().bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("🔥 {} is up and running on {}", env!("CARGO_PKG_NAME"), address);

    api::serve(listener, state, shutdown_signal()).await?;

    refresher.stop().await;
    info!("👋 {} stopped", env!("CARGO_PKG_NAME"));

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("⚠️ Unable to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                warn!("⚠️ Unable to listen for the terminate signal: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
