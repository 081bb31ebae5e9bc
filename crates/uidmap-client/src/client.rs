//! Uidmap submission client implementation.

use crate::error::UidmapError;
use crate::types::{MappedBatch, CLIENT_ID_HEADER};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Client for the downstream uidmap service.
///
/// Holds a single HTTP client constructed once at startup; the submission
/// timeout bounds every call made through it.
#[derive(Clone, Debug)]
pub struct UidmapClient {
    client: Client,
    base_url: String,
}

impl UidmapClient {
    /// Create a new uidmap client with a bounded per-call timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UidmapError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Submit a translated batch to uidmap.
    ///
    /// Issues exactly one `POST {base}/pim` carrying the batch as JSON and
    /// the caller identity header unchanged. Uidmap signals acceptance with
    /// `204 No Content`; every other status is a contract violation. There
    /// are no retries, so a failed call was attempted at most once.
    #[instrument(skip(self, batch), fields(pim_id = %batch.pim_id, entries = batch.data.len()))]
    pub async fn submit_batch(
        &self,
        batch: &MappedBatch,
        client_id: &str,
    ) -> Result<(), UidmapError> {
        let url = format!("{}/pim", self.base_url);

        let response = self
            .client
            .post(&url)
            .header(CLIENT_ID_HEADER, client_id)
            .json(batch)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "uidmap rejected batch");
            return Err(UidmapError::UnexpectedStatus(status.as_u16()));
        }

        debug!("batch accepted by uidmap");
        Ok(())
    }
}
