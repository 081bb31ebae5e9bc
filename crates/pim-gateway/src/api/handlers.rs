//! HTTP request handlers.

use super::types::PimBatch;
use super::AppState;
use crate::error::GatewayError;
use crate::mapper;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
};
use tracing::{info, warn};
use uidmap_client::{MappedBatch, CLIENT_ID_HEADER};

/// Process a vendor PIM batch.
///
/// Decodes the batch, verifies the caller identity against the asserted
/// partner id, replaces every phone with its telco ident, and hands the
/// translated batch to uidmap. Success is relayed as `204 No Content`.
pub async fn process_pim_batch(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, GatewayError> {
    // Decode the body into the expected batch shape
    let batch: PimBatch = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "failed to decode pim batch");
        GatewayError::InvalidPayload(e)
    })?;

    info!(
        telco_id = %batch.telco_id,
        pim_id = %batch.pim_id,
        partner_id = %batch.partner_id,
        entries = batch.data.len(),
        "received pim batch"
    );

    // The asserted partner id must match the caller identity header
    let client_id = headers
        .get(CLIENT_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if client_id != batch.partner_id {
        warn!(partner_id = %batch.partner_id, "caller identity does not match partner id");
        return Err(GatewayError::PartnerMismatch);
    }

    // Map phones to telco idents; pass everything else through unchanged
    let mapped = MappedBatch {
        data: mapper::map_entries(&batch.data),
        telco_id: batch.telco_id,
        partner_id: batch.partner_id,
        pim_id: batch.pim_id,
    };

    // One submission attempt, bounded by the configured timeout
    state.uidmap.submit_batch(&mapped, client_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Liveness banner.
pub async fn egg(State(state): State<AppState>) -> String {
    format!(
        "\n      {}\n----------------------------------\n\t    ,~~.\n\t   (  9 )-_,\n\t    `-.( `-.\n----------------------------------\n      up and hashing\n",
        state.server_name
    )
}

/// Fallback for paths the gateway does not serve.
pub async fn unsupported_path(uri: Uri) -> StatusCode {
    warn!(path = %uri.path(), "unsupported http path requested");
    StatusCode::NOT_FOUND
}
