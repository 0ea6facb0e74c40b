//! Per-network version bytes
//!
//! The table is fixed at compile time and read-only afterwards, so lookups
//! from any thread need no synchronisation. A version byte is only ever
//! validated against one chosen network; there is no reverse index.

use crate::error::{KeycoreError, Result};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Version bytes that tag encoded payloads for one network
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NetworkParameters {
    /// Registry key
    pub name: &'static str,
    /// Version byte of pay-to-public-key-hash addresses
    pub pub_key_hash_addr_id: u8,
    /// Version byte of WIF-encoded private keys
    pub wif_version: u8,
    /// Version byte of pay-to-script-hash addresses
    pub script_hash_addr_id: u8,
}

pub static MAINNET: NetworkParameters = NetworkParameters {
    name: "mainnet",
    pub_key_hash_addr_id: 0x00,
    wif_version: 0x80,
    script_hash_addr_id: 0x05,
};

pub static TESTNET: NetworkParameters = NetworkParameters {
    name: "testnet",
    pub_key_hash_addr_id: 0x6f,
    wif_version: 0xef,
    script_hash_addr_id: 0xc4,
};

/// Local development network. It shares testnet's version bytes, so strings
/// encoded for one are accepted on the other.
pub static PRIVNET: NetworkParameters = NetworkParameters {
    name: "privnet",
    pub_key_hash_addr_id: 0x6f,
    wif_version: 0xef,
    script_hash_addr_id: 0xc4,
};

static NETWORKS: Lazy<HashMap<&'static str, &'static NetworkParameters>> = Lazy::new(|| {
    [&MAINNET, &TESTNET, &PRIVNET]
        .into_iter()
        .map(|params| (params.name, params))
        .collect()
});

/// Look up a network by its registered name
pub fn lookup(name: &str) -> Result<&'static NetworkParameters> {
    NETWORKS
        .get(name)
        .copied()
        .ok_or_else(|| KeycoreError::UnknownNetwork(name.to_string()))
}

/// Every registered network, in no particular order
pub fn all() -> impl Iterator<Item = &'static NetworkParameters> {
    NETWORKS.values().copied()
}

impl NetworkParameters {
    pub fn is_pub_key_hash_version(&self, version: u8) -> bool {
        self.pub_key_hash_addr_id == version
    }

    pub fn is_script_hash_version(&self, version: u8) -> bool {
        self.script_hash_addr_id == version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_registered_networks() {
        assert_eq!(lookup("mainnet").unwrap(), &MAINNET);
        assert_eq!(lookup("testnet").unwrap().wif_version, 0xef);
        assert_eq!(lookup("privnet").unwrap().name, "privnet");
        assert_eq!(all().count(), 3);
    }

    #[test]
    fn test_lookup_unknown_network() {
        assert_eq!(
            lookup("simnet"),
            Err(KeycoreError::UnknownNetwork("simnet".to_string()))
        );
        assert!(lookup("Mainnet").is_err());
    }

    #[test]
    fn test_privnet_shares_testnet_version_bytes() {
        assert_ne!(PRIVNET.name, TESTNET.name);
        assert_eq!(PRIVNET.pub_key_hash_addr_id, TESTNET.pub_key_hash_addr_id);
        assert_eq!(PRIVNET.wif_version, TESTNET.wif_version);
        assert_eq!(PRIVNET.script_hash_addr_id, TESTNET.script_hash_addr_id);
        assert_ne!(PRIVNET.wif_version, MAINNET.wif_version);
    }

    #[test]
    fn test_version_checks_are_per_network() {
        assert!(MAINNET.is_pub_key_hash_version(0x00));
        assert!(!MAINNET.is_pub_key_hash_version(0x6f));
        assert!(TESTNET.is_script_hash_version(0xc4));
        assert!(!TESTNET.is_script_hash_version(0x05));
    }
}
