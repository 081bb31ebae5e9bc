//! Uidmap client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UidmapError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("uidmap returned unexpected status: {0}")]
    UnexpectedStatus(u16),
}

impl UidmapError {
    /// Whether the failure was the bounded submission timeout elapsing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, UidmapError::Http(e) if e.is_timeout())
    }
}
