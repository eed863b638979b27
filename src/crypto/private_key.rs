//! secp256k1 private keys.

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secp256k1::SecretKey;

use super::KeyError;

/// Maximum number of 32-byte draws before generation gives up on a source
/// that keeps producing out-of-range scalars.
pub const MAX_DRAWS: usize = 16;

/// A secp256k1 private key.
///
/// Always holds a scalar in `[1, n - 1]` where `n` is the curve order; every
/// constructor validates its input.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Length of a private key in bytes.
    pub const LEN: usize = 32;

    /// Generates a private key from the operating system's entropy source.
    pub fn generate() -> Result<Self, KeyError> {
        Self::generate_with(&mut OsRng)
    }

    /// Generates a private key from the given random source.
    ///
    /// Draws that are zero or not below the curve order are discarded and
    /// redrawn, up to [`MAX_DRAWS`] times.
    pub fn generate_with<R>(rng: &mut R) -> Result<Self, KeyError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut bytes = [0u8; 32];

        for attempt in 1..=MAX_DRAWS {
            rng.try_fill_bytes(&mut bytes)
                .map_err(KeyError::EntropyUnavailable)?;

            match SecretKey::from_slice(&bytes) {
                Ok(secret_key) => return Ok(Self(secret_key)),
                Err(_) => log::warn!(
                    "Drawn scalar outside the secp256k1 range, resampling (draw {}/{})",
                    attempt,
                    MAX_DRAWS
                ),
            }
        }

        Err(KeyError::InvalidPrivateKey(format!(
            "random source produced no valid scalar in {} draws",
            MAX_DRAWS
        )))
    }

    /// Accepts an externally supplied 32-byte key.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, KeyError> {
        Self::from_slice(&bytes)
    }

    /// Accepts an externally supplied key of arbitrary length.
    ///
    /// Fails unless the slice is exactly 32 bytes and encodes a scalar in
    /// `[1, n - 1]`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != Self::LEN {
            return Err(KeyError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                Self::LEN,
                bytes.len()
            )));
        }

        SecretKey::from_slice(bytes).map(Self).map_err(|_| {
            KeyError::InvalidPrivateKey("scalar is zero or not below the curve order".into())
        })
    }

    /// Parses a hex encoded key, with or without a 0x prefix.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        let bytes = hex::decode(digits)
            .map_err(|e| KeyError::InvalidPrivateKey(format!("not valid hex: {}", e)))?;

        Self::from_slice(&bytes)
    }

    /// Returns the raw key bytes (big-endian scalar).
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.secret_bytes()
    }

    /// Returns the key as a lowercase hex string (without 0x prefix).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    #[inline]
    pub(crate) fn secret_key(&self) -> &SecretKey {
        &self.0
    }
}

impl FromStr for PrivateKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}
