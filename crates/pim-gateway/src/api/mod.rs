//! HTTP API for the PIM gateway.

mod handlers;
mod middleware;
pub mod types;

pub use middleware::ip_auth_middleware;

use crate::allowlist::AllowList;
use axum::{
    http::{header, HeaderValue},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use uidmap_client::UidmapClient;

/// Shared application state.
///
/// Everything here is built once at startup and only read by request
/// handlers, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// Caller address allowlist
    pub allowlist: Arc<AllowList>,
    /// Downstream uidmap client
    pub uidmap: Arc<UidmapClient>,
    /// Server identity string for the banner and `Server` header
    pub server_name: Arc<String>,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        allowlist: AllowList,
        uidmap: UidmapClient,
        server_name: impl Into<String>,
    ) -> Self {
        Self {
            allowlist: Arc::new(allowlist),
            uidmap: Arc::new(uidmap),
            server_name: Arc::new(server_name.into()),
        }
    }
}

/// Create the API router.
///
/// Address authorization wraps every route including the fallback, so an
/// unauthorized caller sees 403 even for unknown paths. Method dispatch on
/// known paths yields 405; unknown paths fall through to 404.
pub fn create_router(state: AppState) -> Router {
    let server_header = HeaderValue::from_str(&state.server_name)
        .unwrap_or_else(|_| HeaderValue::from_static("pim-gateway"));

    Router::new()
        // Batch processing (trailing slash accepted)
        .route("/pim", post(handlers::process_pim_batch))
        .route("/pim/", post(handlers::process_pim_batch))
        // Liveness banner
        .route("/egg", get(handlers::egg))
        .route("/egg/", get(handlers::egg))
        .fallback(handlers::unsupported_path)
        .layer(axum_middleware::from_fn_with_state(
            state.allowlist.clone(),
            ip_auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::SERVER,
            server_header,
        ))
        .with_state(state)
}
