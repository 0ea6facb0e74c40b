use ring::digest::{Context, SHA256};
use ripemd::{Digest as RipemdDigest, Ripemd160};

use crate::error::Result;

pub const SHA256_LEN: usize = 32;
pub const HASH160_LEN: usize = 20;

pub fn sha256_digest(data: &[u8]) -> [u8; SHA256_LEN] {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    let mut out = [0u8; SHA256_LEN];
    out.copy_from_slice(digest.as_ref());
    out
}

/// SHA-256 applied twice, the base of every Base58Check checksum.
pub fn double_sha256(data: &[u8]) -> [u8; SHA256_LEN] {
    let first = sha256_digest(data);
    sha256_digest(&first)
}

/// BLAKE2b with a 256-bit output. Independent of the address pipeline.
pub fn blake2b256_digest(data: &[u8]) -> [u8; 32] {
    let hash = blake2b_simd::Params::new().hash_length(32).hash(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(hash.as_bytes());
    out
}

pub fn ripemd160_digest(data: &[u8]) -> [u8; HASH160_LEN] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    let mut out = [0u8; HASH160_LEN];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// `RIPEMD160(SHA256(data))`, the short hash carried in an address.
pub fn hash160(data: &[u8]) -> [u8; HASH160_LEN] {
    let sha = sha256_digest(data);
    ripemd160_digest(&sha)
}

pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

pub fn base58_decode(data: &str) -> Result<Vec<u8>> {
    let decoded = bs58::decode(data).into_vec()?;
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeycoreError;
    use data_encoding::HEXLOWER;

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            HEXLOWER.encode(&sha256_digest(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_double_sha256_is_sha_of_sha() {
        let data = b"keycore";
        assert_eq!(double_sha256(data), sha256_digest(&sha256_digest(data)));
    }

    #[test]
    fn test_blake2b256_empty() {
        assert_eq!(
            HEXLOWER.encode(&blake2b256_digest(b"")),
            "0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8"
        );
    }

    #[test]
    fn test_hash160_composition() {
        let data = b"public key bytes";
        assert_eq!(hash160(data), ripemd160_digest(&sha256_digest(data)));
        // Composition order matters
        assert_ne!(hash160(data)[..], sha256_digest(&ripemd160_digest(data))[..20]);
    }

    #[test]
    fn test_hash160_empty() {
        assert_eq!(
            HEXLOWER.encode(&hash160(b"")),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
    }

    #[test]
    fn test_base58_leading_zeros() {
        let data = [0u8, 0, 0, 1, 2, 3];
        let encoded = base58_encode(&data);
        assert!(encoded.starts_with("111"));
        assert_eq!(base58_decode(&encoded).unwrap(), data);
        assert_eq!(base58_encode(&[]), "");
        assert_eq!(base58_decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_base58_invalid_character() {
        match base58_decode("abcl") {
            Err(KeycoreError::InvalidCharacter { character, index }) => {
                assert_eq!(character, 'l');
                assert_eq!(index, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
