//! Keccak-256 hashing.

use tiny_keccak::{Hasher, Keccak};

/// Computes the Keccak-256 digest of `data`.
///
/// This is the original Keccak padding used by Ethereum, not NIST SHA3-256.
#[inline]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);

    let mut hash = [0u8; 32];
    hasher.finalize(&mut hash);
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }
}
