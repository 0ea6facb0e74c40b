use crate::config::NetworkParameters;
use crate::error::{KeycoreError, Result};
use crate::utils::{base58check, hash160, HASH160_LEN};
use crate::wallet::entropy::{EntropySource, SystemEntropy};
use data_encoding::HEXLOWER;
use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

pub const PRIVATE_KEY_LEN: usize = 32;
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;
pub const DIGEST_LEN: usize = 32;
pub const SIGNATURE_LEN: usize = 64;

const WIF_COMPRESSED_FLAG: u8 = 0x01;
const MAX_ENTROPY_ATTEMPTS: usize = 64;

/// Raw secret scalar, wiped when dropped
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct PrivateKey([u8; PRIVATE_KEY_LEN]);

/// A secp256k1 key pair.
///
/// Built through one of `from_entropy`, `from_private_key`, `from_public_key`
/// or `from_wif` and never mutated afterwards. A pair built from a public key
/// alone has no private key, and `sign`/`to_wif` fail with `NoPrivateKey`.
///
/// The pair is not tied to a network. Pass `NetworkParameters` to the
/// operations that need one.
#[derive(Clone)]
pub struct KeyPair {
    private_key: Option<PrivateKey>,
    public_key: Vec<u8>,
    verifying_key: VerifyingKey,
    compressed: bool,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &HEXLOWER.encode(&self.public_key))
            .field("compressed", &self.compressed)
            .field("has_private_key", &self.private_key.is_some())
            .finish()
    }
}

fn encode_public_key(verifying_key: &VerifyingKey, compressed: bool) -> Vec<u8> {
    verifying_key
        .to_encoded_point(compressed)
        .as_bytes()
        .to_vec()
}

impl KeyPair {
    /// Generate a fresh key from the platform CSPRNG
    pub fn from_entropy(compressed: bool) -> Result<KeyPair> {
        Self::from_entropy_with(&mut SystemEntropy::new(), compressed)
    }

    /// Generate a fresh key, drawing again whenever the 32 random bytes are
    /// zero or not below the curve order.
    pub fn from_entropy_with<E: EntropySource + ?Sized>(
        source: &mut E,
        compressed: bool,
    ) -> Result<KeyPair> {
        let mut candidate = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
        for _ in 0..MAX_ENTROPY_ATTEMPTS {
            source.fill_bytes(&mut candidate[..])?;
            match Self::from_private_key(&candidate[..], compressed) {
                Ok(key_pair) => return Ok(key_pair),
                Err(KeycoreError::InvalidPrivateKey(_)) => {
                    log::warn!("Random scalar out of curve range, drawing again");
                }
                Err(e) => return Err(e),
            }
        }
        Err(KeycoreError::Entropy(format!(
            "no valid scalar after {MAX_ENTROPY_ATTEMPTS} draws"
        )))
    }

    pub fn from_private_key(bytes: &[u8], compressed: bool) -> Result<KeyPair> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(KeycoreError::InvalidPrivateKey(format!(
                "expected {PRIVATE_KEY_LEN} bytes, found {}",
                bytes.len()
            )));
        }
        let signing_key = SigningKey::from_slice(bytes).map_err(|_| {
            KeycoreError::InvalidPrivateKey("scalar is zero or not below the curve order".into())
        })?;
        let verifying_key = VerifyingKey::from(&signing_key);

        let mut private_key = PrivateKey([0u8; PRIVATE_KEY_LEN]);
        private_key.0.copy_from_slice(bytes);
        log::debug!("Loaded private key (compressed: {compressed})");

        Ok(KeyPair {
            private_key: Some(private_key),
            public_key: encode_public_key(&verifying_key, compressed),
            verifying_key,
            compressed,
        })
    }

    /// Import a SEC1 public key. With `compressed == None` the form is taken
    /// from the encoding; otherwise the encoding must match it.
    pub fn from_public_key(bytes: &[u8], compressed: Option<bool>) -> Result<KeyPair> {
        let encoded_compressed = match (bytes.len(), bytes.first().copied()) {
            (COMPRESSED_PUBLIC_KEY_LEN, Some(0x02 | 0x03)) => true,
            (UNCOMPRESSED_PUBLIC_KEY_LEN, Some(0x04)) => false,
            (len, _) => {
                return Err(KeycoreError::InvalidPublicKey(format!(
                    "unrecognised {len}-byte encoding"
                )))
            }
        };
        if let Some(requested) = compressed {
            if requested != encoded_compressed {
                return Err(KeycoreError::InvalidPublicKey(format!(
                    "encoding is {}compressed but {}compressed was requested",
                    if encoded_compressed { "" } else { "un" },
                    if requested { "" } else { "un" },
                )));
            }
        }

        let verifying_key = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|_| KeycoreError::InvalidPublicKey("point is not on the curve".into()))?;
        log::debug!("Loaded public key {}", HEXLOWER.encode(bytes));

        Ok(KeyPair {
            private_key: None,
            public_key: encode_public_key(&verifying_key, encoded_compressed),
            verifying_key,
            compressed: encoded_compressed,
        })
    }

    /// Import a WIF string registered under `network`'s WIF version byte
    pub fn from_wif(text: &str, network: &NetworkParameters) -> Result<KeyPair> {
        let mut decoded = base58check::decode(text)?;
        let result = Self::from_wif_payload(decoded.version, &decoded.payload, network);
        decoded.payload.zeroize();
        result
    }

    fn from_wif_payload(
        version: u8,
        payload: &[u8],
        network: &NetworkParameters,
    ) -> Result<KeyPair> {
        if version != network.wif_version {
            return Err(KeycoreError::InvalidWifVersion {
                expected: network.wif_version,
                found: version,
            });
        }
        match payload.len() {
            PRIVATE_KEY_LEN => Self::from_private_key(payload, false),
            len if len == PRIVATE_KEY_LEN + 1 => {
                let flag = payload[PRIVATE_KEY_LEN];
                if flag != WIF_COMPRESSED_FLAG {
                    return Err(KeycoreError::InvalidWifPayload(format!(
                        "compression flag must be 0x01, found 0x{flag:02x}"
                    )));
                }
                Self::from_private_key(&payload[..PRIVATE_KEY_LEN], true)
            }
            len => Err(KeycoreError::InvalidWifPayload(format!(
                "expected 32 or 33 bytes, found {len}"
            ))),
        }
    }

    pub fn to_wif(&self, network: &NetworkParameters) -> Result<String> {
        self.to_wif_with_version(network.wif_version)
    }

    pub fn to_wif_with_version(&self, version: u8) -> Result<String> {
        let private_key = self.private_key.as_ref().ok_or(KeycoreError::NoPrivateKey)?;
        let mut payload = Zeroizing::new(Vec::with_capacity(PRIVATE_KEY_LEN + 1));
        payload.extend_from_slice(&private_key.0);
        if self.compressed {
            payload.push(WIF_COMPRESSED_FLAG);
        }
        Ok(base58check::encode(&payload, version))
    }

    /// Deterministic (RFC 6979) ECDSA over a 32-byte digest, returned as the
    /// fixed-width `r || s` encoding with a low `s`.
    pub fn sign(&self, digest: &[u8]) -> Result<[u8; SIGNATURE_LEN]> {
        let private_key = self.private_key.as_ref().ok_or(KeycoreError::NoPrivateKey)?;
        if digest.len() != DIGEST_LEN {
            return Err(KeycoreError::InvalidPayloadLength {
                expected: DIGEST_LEN,
                found: digest.len(),
            });
        }
        let signing_key = SigningKey::from_slice(&private_key.0)
            .map_err(|e| KeycoreError::Crypto(format!("Failed to load signing key: {e}")))?;
        let signature: Signature = signing_key
            .sign_prehash(digest)
            .map_err(|e| KeycoreError::Crypto(format!("Failed to sign digest: {e}")))?;

        let mut out = [0u8; SIGNATURE_LEN];
        out.copy_from_slice(&signature.to_bytes());
        Ok(out)
    }

    /// Check an `r || s` signature over a 32-byte digest. Either `s` form is
    /// accepted; anything malformed is simply `false`.
    pub fn verify(&self, digest: &[u8], signature: &[u8]) -> bool {
        if digest.len() != DIGEST_LEN || signature.len() != SIGNATURE_LEN {
            return false;
        }
        let signature = match Signature::from_slice(signature) {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        let signature = signature.normalize_s().unwrap_or(signature);
        self.verifying_key
            .verify_prehash(digest, &signature)
            .is_ok()
    }

    pub fn private_key(&self) -> Option<&[u8]> {
        self.private_key.as_ref().map(|key| &key.0[..])
    }

    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    pub fn public_key(&self) -> &[u8] {
        self.public_key.as_slice()
    }

    pub fn compressed(&self) -> bool {
        self.compressed
    }

    /// `hash160` of the serialized public key
    pub fn public_key_hash(&self) -> [u8; HASH160_LEN] {
        hash160(&self.public_key)
    }

    /// Pay-to-public-key-hash address of this key on `network`
    pub fn address(&self, network: &NetworkParameters) -> String {
        crate::wallet::address::address_from_public_key(&self.public_key, network)
    }
}
