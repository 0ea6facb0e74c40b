//! Checksummed base-58 codec
//!
//! Layout on the wire is `base58(version || payload || checksum)` where the
//! checksum is the first four bytes of `SHA256(SHA256(version || payload))`.
//! The codec knows nothing about what the payload means.

use crate::error::{KeycoreError, Result};
use crate::utils::crypto::{base58_decode, base58_encode, double_sha256};
use zeroize::Zeroizing;

pub const CHECKSUM_LEN: usize = 4;

/// A decoded Base58Check string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub version: u8,
    pub payload: Vec<u8>,
}

fn checksum(body: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = double_sha256(body);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash[..CHECKSUM_LEN]);
    out
}

pub fn encode(payload: &[u8], version: u8) -> String {
    // may hold a private key (WIF)
    let mut data: Zeroizing<Vec<u8>> =
        Zeroizing::new(Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN));
    data.push(version);
    data.extend_from_slice(payload);
    let checksum = checksum(data.as_slice());
    data.extend_from_slice(&checksum);
    // version + payload + checksum
    base58_encode(data.as_slice())
}

pub fn decode(text: &str) -> Result<Decoded> {
    let data = Zeroizing::new(base58_decode(text)?);
    if data.len() < CHECKSUM_LEN + 1 {
        log::debug!("base58check input decodes to only {} bytes", data.len());
        return Err(KeycoreError::TooShort { length: data.len() });
    }

    let (body, supplied) = data.split_at(data.len() - CHECKSUM_LEN);
    if checksum(body) != supplied {
        return Err(KeycoreError::ChecksumMismatch);
    }

    Ok(Decoded {
        version: body[0],
        payload: body[1..].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, RngCore, SeedableRng};

    #[test]
    fn test_round_trip_random_payloads() {
        let mut rng = StdRng::seed_from_u64(58);
        for len in [0usize, 1, 20, 32, 33, 64] {
            let mut payload = vec![0u8; len];
            rng.fill_bytes(&mut payload);
            let version: u8 = rng.gen();
            let decoded = decode(&encode(&payload, version)).unwrap();
            assert_eq!(decoded.version, version);
            assert_eq!(decoded.payload, payload);
        }
    }

    #[test]
    fn test_zero_version_keeps_leading_one() {
        let encoded = encode(&[0u8; 20], 0x00);
        assert!(encoded.starts_with("1111"));
        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded.version, 0);
        assert_eq!(decoded.payload, vec![0u8; 20]);
    }

    #[test]
    fn test_flipped_character_fails_checksum() {
        let encoded = encode(&[7u8; 20], 0x6f);
        let mut chars: Vec<char> = encoded.chars().collect();
        let middle = chars.len() / 2;
        chars[middle] = if chars[middle] == 'z' { 'y' } else { 'z' };
        let tampered: String = chars.into_iter().collect();
        assert_eq!(decode(&tampered), Err(KeycoreError::ChecksumMismatch));
    }

    #[test]
    fn test_every_position_flip_fails_checksum() {
        const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
        let encoded = encode(&[0x3cu8; 20], 0x00);
        for (position, original) in encoded.chars().enumerate() {
            for replacement in ALPHABET.chars().filter(|c| *c != original) {
                let tampered: String = encoded
                    .chars()
                    .enumerate()
                    .map(|(i, c)| if i == position { replacement } else { c })
                    .collect();
                assert_eq!(
                    decode(&tampered),
                    Err(KeycoreError::ChecksumMismatch),
                    "position {position} replaced with {replacement}"
                );
            }
        }
    }

    #[test]
    fn test_non_ascii_is_invalid_character() {
        assert!(matches!(
            decode("é"),
            Err(KeycoreError::InvalidCharacter { index: 0, .. })
        ));
        assert!(matches!(
            decode("1BgGZ9tcN4rmé"),
            Err(KeycoreError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_wif_sized_payload_round_trip() {
        let mut payload = vec![0x11u8; 32];
        payload.push(0x01);
        let decoded = decode(&encode(&payload, 0x80)).unwrap();
        assert_eq!(decoded.version, 0x80);
        assert_eq!(decoded.payload, payload);
    }

    #[test]
    fn test_too_short() {
        assert_eq!(decode(""), Err(KeycoreError::TooShort { length: 0 }));
        let four_bytes = base58_encode(&[1, 2, 3, 4]);
        assert_eq!(
            decode(&four_bytes),
            Err(KeycoreError::TooShort { length: 4 })
        );
    }

    #[test]
    fn test_invalid_character() {
        assert!(matches!(
            decode("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAM0"),
            Err(KeycoreError::InvalidCharacter { character: '0', .. })
        ));
    }
}
