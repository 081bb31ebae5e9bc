//! Caller authorization middleware.

use crate::allowlist::AllowList;
use crate::error::GatewayError;
use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Network-address authorization middleware.
///
/// Runs before routing decisions for every path. The peer address comes
/// from the listener's `ConnectInfo`; a request without one is treated as
/// coming from an unknown address and is rejected unless the allowlist is
/// empty (fail-open).
pub async fn ip_auth_middleware(
    State(allowlist): State<Arc<AllowList>>,
    request: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(peer)| peer.ip());

    if !allowlist.authorizes(remote) {
        warn!(?remote, "caller address not in allowlist");
        return Err(GatewayError::AddressNotAllowed);
    }

    debug!(?remote, "caller address authorized");
    Ok(next.run(request).await)
}
