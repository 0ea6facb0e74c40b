//! Hash pipeline and encoding helpers
//!
//! This module contains the digest functions every other component composes,
//! the plain base-58 codec and the checksummed Base58Check codec built on it.

pub mod base58check;
pub mod crypto;

pub use crypto::{
    base58_decode, base58_encode, blake2b256_digest, double_sha256, hash160, ripemd160_digest,
    sha256_digest, HASH160_LEN, SHA256_LEN,
};
