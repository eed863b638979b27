//! Ethereum keypair generation.

use rand::{CryptoRng, RngCore};

use super::{Address, KeyError, PrivateKey, PublicKey};

/// Derives the Ethereum address for a private key.
///
/// Process:
/// 1. Multiply the secp256k1 generator by the key (uncompressed, 65 bytes)
/// 2. Remove the first byte (0x04 prefix)
/// 3. Hash the remaining 64 bytes with Keccak-256
/// 4. Take the last 20 bytes of the hash
///
/// Pure and deterministic: the same key always yields the same address.
#[inline]
pub fn derive_address(private_key: &PrivateKey) -> Address {
    PublicKey::from_private_key(private_key).to_address()
}

/// Represents an Ethereum keypair (private key + derived public key and address).
#[derive(Debug, Clone)]
pub struct Keypair {
    private_key: PrivateKey,
    public_key: PublicKey,
    address: Address,
}

impl Keypair {
    /// Generates a new random keypair from OS entropy.
    pub fn generate() -> Result<Self, KeyError> {
        Ok(Self::from_private_key(PrivateKey::generate()?))
    }

    /// Generates a new keypair from the given random source.
    pub fn generate_with<R>(rng: &mut R) -> Result<Self, KeyError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        Ok(Self::from_private_key(PrivateKey::generate_with(rng)?))
    }

    /// Builds the keypair for an existing private key.
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = PublicKey::from_private_key(&private_key);
        let address = public_key.to_address();

        Self {
            private_key,
            public_key,
            address,
        }
    }

    /// Returns the private key as a hex string (without 0x prefix).
    pub fn private_key_hex(&self) -> String {
        self.private_key.to_hex()
    }

    /// Returns the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Returns the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Returns a reference to the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}
