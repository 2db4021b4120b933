//! # calldata-primitives
//!
//! Primitive types shared by the calldata crates.
//!
//! This crate provides the 20-byte [`Address`], the 32-byte [`H256`] word,
//! a re-export of [`U256`], and the [`Hasher256`] capability used to derive
//! function selectors.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod hash;

pub use address::{Address, AddressError};
pub use hash::{Hasher256, H256};

// Re-export primitive-types for U256
pub use primitive_types::U256;

/// Size of one ABI word in bytes
pub const WORD_SIZE: usize = 32;

/// Round `len` up to the next multiple of [`WORD_SIZE`]
pub const fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD_SIZE) * WORD_SIZE
}
