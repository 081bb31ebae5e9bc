//! Wire types for the uidmap submission contract.

use serde::{Deserialize, Serialize};

/// Header carrying the caller identity, propagated unchanged to uidmap.
pub const CLIENT_ID_HEADER: &str = "X-ClientID";

/// One translated batch entry, serialized as `[identifier, token]`.
///
/// `identifier` is the pseudonymous telco ident substituted for the phone
/// number; `token` is the vendor's opaque value, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedEntry(pub String, pub String);

impl MappedEntry {
    pub fn new(identifier: impl Into<String>, token: impl Into<String>) -> Self {
        Self(identifier.into(), token.into())
    }

    pub fn identifier(&self) -> &str {
        &self.0
    }

    pub fn token(&self) -> &str {
        &self.1
    }
}

/// Batch submitted to uidmap.
///
/// Field names mirror the inbound vendor batch so the two encodings cannot
/// drift apart; only `data` differs, carrying idents instead of phones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappedBatch {
    pub telco_id: String,
    pub partner_id: String,
    pub pim_id: String,
    pub data: Vec<MappedEntry>,
}
