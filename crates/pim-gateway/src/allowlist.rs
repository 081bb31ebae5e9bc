//! Caller address allowlist.

use ipnet::IpNet;
use std::collections::HashSet;
use std::net::IpAddr;
use thiserror::Error;

/// Allowlist configuration errors. Fatal at startup, never per-request.
#[derive(Debug, Error)]
pub enum AllowListError {
    #[error("invalid address in allowlist: {0:?}")]
    InvalidAddress(String),

    #[error("invalid address range in allowlist: {0:?}")]
    InvalidRange(String),
}

/// Immutable set of caller addresses permitted to use the gateway.
///
/// Built once at startup and only read afterwards. An empty allowlist
/// authorizes every caller, so a deployment that wants the gate closed
/// must configure at least one entry.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    exact: HashSet<IpAddr>,
    ranges: Vec<IpNet>,
}

impl AllowList {
    /// Parse a comma-separated list of addresses and CIDR ranges.
    ///
    /// Entries are trimmed; an entry containing `/` is a range, anything
    /// else a literal address. A blank string yields the empty allowlist.
    pub fn parse(raw: &str) -> Result<Self, AllowListError> {
        let mut list = AllowList::default();

        if raw.trim().is_empty() {
            return Ok(list);
        }

        for entry in raw.split(',') {
            let entry = entry.trim();

            if entry.contains('/') {
                let range: IpNet = entry
                    .parse()
                    .map_err(|_| AllowListError::InvalidRange(entry.to_string()))?;
                list.ranges.push(range);
            } else {
                let addr: IpAddr = entry
                    .parse()
                    .map_err(|_| AllowListError::InvalidAddress(entry.to_string()))?;
                list.exact.insert(addr.to_canonical());
            }
        }

        Ok(list)
    }

    /// Whether a caller at `addr` may use the gateway.
    ///
    /// The empty allowlist authorizes unconditionally. A caller whose
    /// address is unknown is rejected. IPv4-mapped IPv6 addresses compare
    /// equal to their IPv4 form.
    pub fn authorizes(&self, addr: Option<IpAddr>) -> bool {
        if self.is_empty() {
            return true;
        }

        let Some(addr) = addr else {
            return false;
        };
        let addr = addr.to_canonical();

        if self.exact.contains(&addr) {
            return true;
        }

        self.ranges.iter().any(|range| range.contains(&addr))
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Option<IpAddr> {
        Some(s.parse().unwrap())
    }

    #[test]
    fn test_empty_allowlist_authorizes_everyone() {
        let list = AllowList::parse("").unwrap();
        assert!(list.is_empty());
        assert!(list.authorizes(addr("203.0.113.7")));
        assert!(list.authorizes(addr("::1")));
        assert!(list.authorizes(None));
    }

    #[test]
    fn test_exact_address_match() {
        let list = AllowList::parse("192.0.2.10").unwrap();
        assert!(list.authorizes(addr("192.0.2.10")));
        assert!(!list.authorizes(addr("192.0.2.11")));
    }

    #[test]
    fn test_range_match() {
        let list = AllowList::parse("10.1.0.0/16").unwrap();
        assert!(list.authorizes(addr("10.1.200.3")));
        assert!(!list.authorizes(addr("10.2.0.1")));
    }

    #[test]
    fn test_range_with_host_bits_set() {
        // The default configuration value has host bits set; it must still
        // cover the surrounding network.
        let list = AllowList::parse("127.0.0.1/24").unwrap();
        assert!(list.authorizes(addr("127.0.0.1")));
        assert!(list.authorizes(addr("127.0.0.200")));
        assert!(!list.authorizes(addr("127.0.1.1")));
    }

    #[test]
    fn test_mixed_entries_first_match_wins() {
        let list = AllowList::parse("192.0.2.10, 10.0.0.0/8, 10.8.0.0/16").unwrap();
        assert!(list.authorizes(addr("192.0.2.10")));
        assert!(list.authorizes(addr("10.8.1.1")));
        assert!(list.authorizes(addr("10.200.0.1")));
        assert!(!list.authorizes(addr("172.16.0.1")));
    }

    #[test]
    fn test_unknown_address_rejected_when_list_nonempty() {
        let list = AllowList::parse("10.0.0.0/8").unwrap();
        assert!(!list.authorizes(None));
    }

    #[test]
    fn test_ipv4_mapped_ipv6_matches_ipv4_entry() {
        let list = AllowList::parse("192.0.2.10, 10.0.0.0/8").unwrap();
        assert!(list.authorizes(addr("::ffff:192.0.2.10")));
        assert!(list.authorizes(addr("::ffff:10.1.2.3")));
    }

    #[test]
    fn test_ipv6_entries() {
        let list = AllowList::parse("2001:db8::1, 2001:db8:1::/48").unwrap();
        assert!(list.authorizes(addr("2001:db8::1")));
        assert!(list.authorizes(addr("2001:db8:1::42")));
        assert!(!list.authorizes(addr("2001:db8:2::42")));
    }

    #[test]
    fn test_malformed_address_is_an_error() {
        let result = AllowList::parse("not-an-address");
        assert!(matches!(result, Err(AllowListError::InvalidAddress(_))));
    }

    #[test]
    fn test_malformed_range_is_an_error() {
        let result = AllowList::parse("10.0.0.0/8, 10.0.0.0/99");
        assert!(matches!(result, Err(AllowListError::InvalidRange(_))));
    }

    #[test]
    fn test_empty_entry_between_commas_is_an_error() {
        let result = AllowList::parse("10.0.0.1,,10.0.0.2");
        assert!(matches!(result, Err(AllowListError::InvalidAddress(_))));
    }
}
