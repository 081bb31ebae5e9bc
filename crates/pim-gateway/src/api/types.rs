//! Inbound API wire types.

use serde::{Deserialize, Serialize};

/// One vendor batch entry, serialized as `[phone, token]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PimEntry(pub String, pub String);

impl PimEntry {
    pub fn new(phone: impl Into<String>, token: impl Into<String>) -> Self {
        Self(phone.into(), token.into())
    }

    pub fn phone(&self) -> &str {
        &self.0
    }

    pub fn token(&self) -> &str {
        &self.1
    }
}

/// Batch submitted by a data vendor.
///
/// `telco_id`, `partner_id` and `pim_id` are opaque pass-through values;
/// the gateway never interprets them beyond checking `partner_id` against
/// the caller identity header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PimBatch {
    pub telco_id: String,
    pub partner_id: String,
    pub pim_id: String,
    pub data: Vec<PimEntry>,
}
