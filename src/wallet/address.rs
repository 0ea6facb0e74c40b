//! Textual addresses
//!
//! An address is a 20-byte short hash tagged with a network version byte and
//! Base58Check-encoded. Hashing happens before this layer: callers pass the
//! hash, not the key or script.

use crate::config::NetworkParameters;
use crate::error::{KeycoreError, Result};
use crate::utils::{base58check, hash160, HASH160_LEN};

/// Hash and version byte recovered from an address string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPayload {
    pub hash: [u8; HASH160_LEN],
    pub version: u8,
}

pub fn to_base58check(hash: &[u8; HASH160_LEN], version: u8) -> String {
    base58check::encode(hash, version)
}

pub fn from_base58check(text: &str) -> Result<AddressPayload> {
    let decoded = base58check::decode(text)?;
    if decoded.payload.len() != HASH160_LEN {
        return Err(KeycoreError::InvalidPayloadLength {
            expected: HASH160_LEN,
            found: decoded.payload.len(),
        });
    }
    let mut hash = [0u8; HASH160_LEN];
    hash.copy_from_slice(&decoded.payload);
    Ok(AddressPayload {
        hash,
        version: decoded.version,
    })
}

pub fn address_from_public_key(public_key: &[u8], network: &NetworkParameters) -> String {
    to_base58check(&hash160(public_key), network.pub_key_hash_addr_id)
}

pub fn script_address(script: &[u8], network: &NetworkParameters) -> String {
    to_base58check(&hash160(script), network.script_hash_addr_id)
}

/// What an address pays to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    PubKeyHash,
    ScriptHash,
}

/// An address checked against one network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    pub kind: AddressKind,
    pub hash: [u8; HASH160_LEN],
}

impl Address {
    pub fn parse(text: &str, network: &NetworkParameters) -> Result<Address> {
        let payload = from_base58check(text)?;
        let kind = if network.is_pub_key_hash_version(payload.version) {
            AddressKind::PubKeyHash
        } else if network.is_script_hash_version(payload.version) {
            AddressKind::ScriptHash
        } else {
            log::debug!(
                "address version 0x{:02x} not registered on {}",
                payload.version,
                network.name
            );
            return Err(KeycoreError::InvalidAddressVersion {
                network: network.name.to_string(),
                found: payload.version,
            });
        };
        Ok(Address {
            kind,
            hash: payload.hash,
        })
    }

    pub fn encode(&self, network: &NetworkParameters) -> String {
        let version = match self.kind {
            AddressKind::PubKeyHash => network.pub_key_hash_addr_id,
            AddressKind::ScriptHash => network.script_hash_addr_id,
        };
        to_base58check(&self.hash, version)
    }
}

pub fn validate_address(address: &str, network: &NetworkParameters) -> bool {
    Address::parse(address, network).is_ok()
}
