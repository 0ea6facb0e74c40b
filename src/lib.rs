//! # Keycore - Keys, WIF and Addresses for a UTXO Chain
//!
//! This is the key-and-address layer my chain client sits on. When I come
//! back to this code, here's what I need to remember:
//!
//! ## What I Built
//! - **Hash Pipeline**: SHA-256, BLAKE2b-256 and `hash160 = RIPEMD160(SHA256(x))`
//! - **Base58Check**: version byte + payload + 4-byte double-SHA-256 checksum
//! - **Network Registry**: fixed table of address/WIF/script-hash version bytes
//! - **Key Pairs**: secp256k1 keys from entropy, raw bytes, SEC1 public keys or WIF
//! - **Signatures**: deterministic RFC 6979 ECDSA, fixed 64-byte `r || s`
//! - **Addresses**: pay-to-pubkey-hash and pay-to-script-hash strings per network
//!
//! ## How I Organized My Code
//! - `utils/`: Digest functions, plain base58 and the Base58Check codec
//! - `config/`: The network table plus defaults loaded from env or TOML
//! - `wallet/`: Key pairs, entropy sources and the address codec
//! - `error/`: One error enum for everything above
//!
//! ## Key Design Decisions I Made
//! - A `KeyPair` never knows its network; `NetworkParameters` are passed in
//! - Private keys live in buffers that zeroize on drop
//! - Randomness comes through the `EntropySource` trait so tests can script it
//! - `verify` is a plain predicate: malformed input is `false`, never an error

pub mod config;
pub mod error;
pub mod utils;
pub mod wallet;

// Re-export commonly used types for convenience
pub use config::{
    lookup as lookup_network, Config, NetworkParameters, GLOBAL_CONFIG, MAINNET, PRIVNET, TESTNET,
};
pub use error::{KeycoreError, Result};
pub use utils::{
    base58_decode, base58_encode, blake2b256_digest, double_sha256, hash160, ripemd160_digest,
    sha256_digest,
};
pub use wallet::{
    address_from_public_key, from_base58check, script_address, to_base58check, validate_address,
    Address, AddressKind, AddressPayload, EntropySource, KeyPair, RngEntropy, SystemEntropy,
};
