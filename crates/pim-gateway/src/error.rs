//! Error types for the PIM gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;
use uidmap_client::UidmapError;

/// Request-level gateway errors.
///
/// Every variant maps to a caller-facing status code; responses carry no
/// body, so the detail only reaches the log.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("caller address is not in the allowlist")]
    AddressNotAllowed,

    #[error("invalid batch payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("caller identity does not match batch partner id")]
    PartnerMismatch,

    #[error("uidmap submission failed: {0}")]
    Uidmap(#[from] UidmapError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::AddressNotAllowed | GatewayError::PartnerMismatch => {
                StatusCode::FORBIDDEN
            }
            GatewayError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            GatewayError::Uidmap(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: GatewayError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_authorization_failures_are_forbidden() {
        assert_eq!(status_of(GatewayError::AddressNotAllowed), StatusCode::FORBIDDEN);
        assert_eq!(status_of(GatewayError::PartnerMismatch), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_decode_failure_is_bad_request() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(status_of(GatewayError::InvalidPayload(err)), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_uidmap_failures_are_server_errors() {
        let err = GatewayError::Uidmap(UidmapError::UnexpectedStatus(200));
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_responses_have_no_body() {
        let response = GatewayError::AddressNotAllowed.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }
}
