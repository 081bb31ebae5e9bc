//! PIM Gateway - entry point.

use pim_gateway::{
    allowlist::AllowList,
    api::{create_router, AppState},
    config::Config,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uidmap_client::UidmapClient;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PIM Gateway");
    info!(?config, "resolved configuration");

    // Build the caller allowlist; a malformed entry is fatal
    let allowlist = match AllowList::parse(&config.auth.allowed_remote_ips) {
        Ok(list) => {
            if list.is_empty() {
                info!("allowlist is empty, every caller address is authorized");
            }
            list
        }
        Err(e) => {
            error!("Failed to parse auth.allowed_remote_ips: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize the uidmap client
    let uidmap = match UidmapClient::new(&config.uidmap.addr, config.uidmap.timeout) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create uidmap client: {}", e);
            std::process::exit(1);
        }
    };

    // Create application state and router
    let state = AppState::new(allowlist, uidmap, &config.server.name);
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(
        config.server.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server; peer addresses feed the allowlist check
    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
