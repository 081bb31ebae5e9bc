//! Phone number to telco ident mapping.

use crate::api::types::PimEntry;
use uidmap_client::MappedEntry;
use xxhash_rust::xxh64::xxh64;

/// Pseudonymous ident for a phone number.
///
/// Decimal rendering of a seedless 64-bit xxHash over the raw phone bytes,
/// so equal phones map to equal idents across requests and restarts. The
/// phone string is hashed as-is; no format validation or normalization.
pub fn telco_ident(phone: &str) -> String {
    xxh64(phone.as_bytes(), 0).to_string()
}

/// Translate a batch of vendor entries into uidmap entries.
///
/// Total: never fails, preserves order and length, and passes every token
/// through untouched. An empty batch maps to an empty batch.
pub fn map_entries(entries: &[PimEntry]) -> Vec<MappedEntry> {
    entries
        .iter()
        .map(|entry| MappedEntry::new(telco_ident(entry.phone()), entry.token()))
        .collect()
}
