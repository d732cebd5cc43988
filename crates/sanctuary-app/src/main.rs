use std::sync::Arc;

use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use sanctuary_app::app::api::routes;
use sanctuary_app::clock_handler::ClockHandler;
use sanctuary_app::config::ConfigHandler;
use sanctuary_app::store_handler::StoreHandler;
use sanctuary_core::clock::SystemClock;
use sanctuary_core::config::load_config;
use sanctuary_service::store::MemoryEventStore;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Sanctuary events server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store = MemoryEventStore::new();
    tracing::info!(
        timezone = %config.events.timezone,
        lookahead_months = config.events.lookahead,
        horizon_months = config.events.horizon,
        "Event store ready"
    );

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(StoreHandler { store })
        .hoop(ConfigHandler::new(config))
        .hoop(ClockHandler {
            clock: Arc::new(SystemClock),
        })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
