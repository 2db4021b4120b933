//! 256-bit hash type and the hashing capability

use std::fmt;

/// 256-bit hash (32 bytes)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct H256([u8; 32]);

impl H256 {
    /// Create from bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        H256(bytes)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for H256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H256(0x{})", hex::encode(self.0))
    }
}

/// A 256-bit hash function.
///
/// Selector derivation only needs this capability, so encoders take it as a
/// parameter instead of linking a concrete digest. Any
/// `Fn(&[u8]) -> H256` closure qualifies.
pub trait Hasher256 {
    /// Hash `data` to 32 bytes
    fn hash256(&self, data: &[u8]) -> H256;
}

impl<F> Hasher256 for F
where
    F: Fn(&[u8]) -> H256,
{
    fn hash256(&self, data: &[u8]) -> H256 {
        self(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== H256 ====================

    #[test]
    fn test_h256_bytes() {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        assert_eq!(H256::from_bytes(bytes).as_bytes(), &bytes);
    }

    #[test]
    fn test_h256_debug_is_hex() {
        let hash = H256::from_bytes([0xab; 32]);
        assert_eq!(format!("{:?}", hash), format!("H256(0x{})", "ab".repeat(32)));
    }

    // ==================== Hasher256 ====================

    #[test]
    fn test_closure_is_hasher() {
        let constant = |_: &[u8]| H256::from_bytes([0xab; 32]);
        assert_eq!(constant.hash256(b"anything").as_bytes()[0], 0xab);
    }

    #[test]
    fn test_fn_pointer_is_hasher() {
        fn first_byte(data: &[u8]) -> H256 {
            let mut out = [0u8; 32];
            if let Some(b) = data.first() {
                out[0] = *b;
            }
            H256::from_bytes(out)
        }
        assert_eq!(first_byte.hash256(b"z").as_bytes()[0], b'z');
    }
}
