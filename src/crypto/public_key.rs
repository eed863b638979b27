//! secp256k1 public keys in the form Ethereum hashes them.

use std::fmt;

use secp256k1::SECP256K1;

use super::{keccak256, Address, PrivateKey};

/// Format prefix of an uncompressed SEC1 point.
const UNCOMPRESSED_PREFIX: u8 = 0x04;

/// An uncompressed secp256k1 public key, stored as the 64-byte `X || Y`
/// coordinate concatenation (the 0x04 prefix is implied).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 64]);

impl PublicKey {
    /// Derives the public key `k * G` for a private key `k`.
    pub fn from_private_key(private_key: &PrivateKey) -> Self {
        let public_key =
            secp256k1::PublicKey::from_secret_key(SECP256K1, private_key.secret_key());
        let serialized = public_key.serialize_uncompressed();

        let mut coordinates = [0u8; 64];
        coordinates.copy_from_slice(&serialized[1..]);
        Self(coordinates)
    }

    /// Returns the `X || Y` coordinates.
    #[inline]
    pub const fn coordinates(&self) -> &[u8; 64] {
        &self.0
    }

    /// Returns the 65-byte uncompressed SEC1 encoding (0x04 || X || Y).
    pub fn to_uncompressed(&self) -> [u8; 65] {
        let mut bytes = [0u8; 65];
        bytes[0] = UNCOMPRESSED_PREFIX;
        bytes[1..].copy_from_slice(&self.0);
        bytes
    }

    /// Derives the Ethereum address: the last 20 bytes of Keccak-256(X || Y).
    #[inline]
    pub fn to_address(&self) -> Address {
        Address::from_digest(&keccak256(&self.0))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(04{})", hex::encode(self.0))
    }
}
