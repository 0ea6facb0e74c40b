//! Sources of secret randomness for key generation

use crate::error::{KeycoreError, Result};
use rand::{CryptoRng, RngCore};
use ring::rand::{SecureRandom, SystemRandom};

/// Something that can fill a buffer with cryptographically secure bytes.
pub trait EntropySource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// The platform CSPRNG. Safe to construct and use from any thread.
#[derive(Debug, Clone)]
pub struct SystemEntropy {
    rng: SystemRandom,
}

impl SystemEntropy {
    pub fn new() -> Self {
        SystemEntropy {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SystemEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for SystemEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng
            .fill(dest)
            .map_err(|_| KeycoreError::Entropy("system random source unavailable".to_string()))
    }
}

/// Adapts any `rand` generator marked `CryptoRng`, e.g. a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct RngEntropy<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RngEntropy<R> {
    pub fn new(rng: R) -> Self {
        RngEntropy { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore + CryptoRng> EntropySource for RngEntropy<R> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng
            .try_fill_bytes(dest)
            .map_err(|e| KeycoreError::Entropy(e.to_string()))
    }
}
