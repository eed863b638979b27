//! Cryptographic operations for Ethereum key and address generation.
//!
//! This module provides:
//! - Secure random private key generation with range checking
//! - secp256k1 public key derivation
//! - Ethereum address derivation using Keccak-256
//! - Keypair management

mod address;
mod hash;
mod keypair;
mod private_key;
mod public_key;

pub use address::Address;
pub use hash::keccak256;
pub use keypair::{derive_address, Keypair};
pub use private_key::{PrivateKey, MAX_DRAWS};
pub use public_key::PublicKey;

/// Errors that can occur while generating or accepting keys.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("Entropy unavailable: {0}")]
    EntropyUnavailable(#[source] rand::Error),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),
}
