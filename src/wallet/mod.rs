//! Key management and address derivation
//!
//! This module handles secp256k1 key pairs (including the Wallet Import
//! Format), signing over transaction digests, the entropy sources keys are
//! generated from, and the textual address codec.

pub mod address;
pub mod entropy;
pub mod keypair;

pub use address::{
    address_from_public_key, from_base58check, script_address, to_base58check, validate_address,
    Address, AddressKind, AddressPayload,
};
pub use entropy::{EntropySource, RngEntropy, SystemEntropy};
pub use keypair::{
    KeyPair, COMPRESSED_PUBLIC_KEY_LEN, DIGEST_LEN, PRIVATE_KEY_LEN, SIGNATURE_LEN,
    UNCOMPRESSED_PUBLIC_KEY_LEN,
};
