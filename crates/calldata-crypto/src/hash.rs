//! Keccak-256 hashing

use calldata_primitives::{Hasher256, H256};
use sha3::{Digest, Keccak256};

/// Compute Keccak-256 hash of the input data
pub fn keccak256(data: &[u8]) -> H256 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    H256::from_bytes(result.into())
}

/// Keccak-256 as a [`Hasher256`] capability
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak;

impl Hasher256 for Keccak {
    fn hash256(&self, data: &[u8]) -> H256 {
        keccak256(data)
    }
}
