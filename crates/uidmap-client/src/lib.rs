//! Downstream uidmap service client.
//!
//! Small HTTP client used by the PIM gateway to hand translated batches to
//! the identity-mapping service. The contract is narrow: one `POST /pim`
//! per batch, caller identity propagated in a header, `204 No Content` as
//! the only success signal.

mod client;
mod error;
mod types;

pub use client::UidmapClient;
pub use error::UidmapError;
pub use types::*;
