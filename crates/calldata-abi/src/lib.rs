//! # calldata-abi
//!
//! Ethereum contract ABI encoding of function calls.
//!
//! This crate provides functionality for:
//! - Parsing ABI type strings into [`ParamType`]
//! - Encoding [`Value`]s into the word-aligned head/tail layout
//! - Computing function selectors and full call payloads
//! - Coercing JSON arguments into values
//!
//! The selector hash is a capability passed in by the caller (any
//! [`Hasher256`]), so this crate links no digest implementation.
//!
//! # Example
//!
//! ```rust
//! use calldata_abi::{encode, encode_argument, Value};
//! use calldata_primitives::H256;
//!
//! let word = encode_argument(&Value::from(true), "bool").unwrap();
//! assert_eq!(word.len(), 64);
//!
//! // Any `Fn(&[u8]) -> H256` can stand in for Keccak-256.
//! let hasher = |_: &[u8]| H256::from_bytes([0xab; 32]);
//! let call = encode(&hasher, "baz(uint32,bool)", &[Value::from(69u32), Value::from(true)]).unwrap();
//! assert!(call.starts_with("0xabababab"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod coerce;
mod config;
pub mod encode;
mod error;
mod signature;
mod types;
mod value;

pub use config::EncoderConfig;
pub use encode::{encode_argument, encode_tuple, encode_value, Encoder, Word};
pub use error::{AbiError, Result};
pub use signature::{encode, encode_call, encode_function_call, function_selector, Signature};
pub use types::ParamType;
pub use value::Value;

pub use calldata_primitives::Hasher256;
