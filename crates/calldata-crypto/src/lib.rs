//! # calldata-crypto
//!
//! Cryptographic primitives for calldata.
//!
//! - Keccak-256 hashing
//! - [`Keccak`], the [`Hasher256`](calldata_primitives::Hasher256) used for
//!   Ethereum function selectors

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::{keccak256, Keccak};
