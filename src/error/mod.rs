//! Error handling for key and address operations
//!
//! Every failure in this crate surfaces as a distinguishable `KeycoreError`
//! value returned to the immediate caller. Nothing is retried internally.

use std::fmt;

/// Result type alias for key and address operations
pub type Result<T> = std::result::Result<T, KeycoreError>;

/// Error types for encoding, key management and configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeycoreError {
    /// Base58Check checksum did not match the decoded body
    ChecksumMismatch,
    /// Text contained a character outside the base-58 alphabet
    InvalidCharacter { character: char, index: usize },
    /// Decoded bytes leave no room for a version byte and checksum
    TooShort { length: usize },
    /// No network registered under this name
    UnknownNetwork(String),
    /// Private key is zero, out of curve range or badly sized
    InvalidPrivateKey(String),
    /// Public key is not a valid curve point in the requested form
    InvalidPublicKey(String),
    /// WIF version byte does not match the network
    InvalidWifVersion { expected: u8, found: u8 },
    /// WIF payload has the wrong length or compression marker
    InvalidWifPayload(String),
    /// Operation needs a private key but the keypair only holds a public key
    NoPrivateKey,
    /// Decoded payload has the wrong length
    InvalidPayloadLength { expected: usize, found: usize },
    /// Address version byte is neither kind the network registers
    InvalidAddressVersion { network: String, found: u8 },
    /// The secure random source failed
    Entropy(String),
    /// Unexpected failure inside the curve library
    Crypto(String),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for KeycoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeycoreError::ChecksumMismatch => write!(f, "Base58Check checksum mismatch"),
            KeycoreError::InvalidCharacter { character, index } => {
                write!(f, "Invalid base58 character {character:?} at index {index}")
            }
            KeycoreError::TooShort { length } => {
                write!(f, "Decoded data too short: {length} bytes")
            }
            KeycoreError::UnknownNetwork(name) => write!(f, "Unknown network: {name}"),
            KeycoreError::InvalidPrivateKey(msg) => write!(f, "Invalid private key: {msg}"),
            KeycoreError::InvalidPublicKey(msg) => write!(f, "Invalid public key: {msg}"),
            KeycoreError::InvalidWifVersion { expected, found } => {
                write!(
                    f,
                    "Invalid WIF version: expected 0x{expected:02x}, found 0x{found:02x}"
                )
            }
            KeycoreError::InvalidWifPayload(msg) => write!(f, "Invalid WIF payload: {msg}"),
            KeycoreError::NoPrivateKey => write!(f, "Key pair has no private key"),
            KeycoreError::InvalidPayloadLength { expected, found } => {
                write!(
                    f,
                    "Invalid payload length: expected {expected} bytes, found {found}"
                )
            }
            KeycoreError::InvalidAddressVersion { network, found } => {
                write!(f, "Address version 0x{found:02x} is not valid on {network}")
            }
            KeycoreError::Entropy(msg) => write!(f, "Entropy error: {msg}"),
            KeycoreError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
            KeycoreError::Config(msg) => write!(f, "Configuration error: {msg}"),
            KeycoreError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for KeycoreError {}

impl From<std::io::Error> for KeycoreError {
    fn from(err: std::io::Error) -> Self {
        KeycoreError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for KeycoreError {
    fn from(err: toml::de::Error) -> Self {
        KeycoreError::Config(err.to_string())
    }
}

impl From<bs58::decode::Error> for KeycoreError {
    fn from(err: bs58::decode::Error) -> Self {
        match err {
            bs58::decode::Error::InvalidCharacter { character, index } => {
                KeycoreError::InvalidCharacter { character, index }
            }
            bs58::decode::Error::NonAsciiCharacter { index } => KeycoreError::InvalidCharacter {
                character: char::REPLACEMENT_CHARACTER,
                index,
            },
            other => KeycoreError::Crypto(format!("base58 decoding failed: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = KeycoreError::InvalidWifVersion {
            expected: 0x80,
            found: 0xef,
        };
        assert_eq!(
            err.to_string(),
            "Invalid WIF version: expected 0x80, found 0xef"
        );
        assert_eq!(
            KeycoreError::NoPrivateKey.to_string(),
            "Key pair has no private key"
        );
    }

    #[test]
    fn test_base58_error_conversion() {
        let err: KeycoreError = bs58::decode("0OIl").into_vec().unwrap_err().into();
        assert_eq!(
            err,
            KeycoreError::InvalidCharacter {
                character: '0',
                index: 0
            }
        );
    }
}
