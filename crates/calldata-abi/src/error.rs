//! ABI encoding error types

use thiserror::Error;

/// Result alias for ABI operations
pub type Result<T> = std::result::Result<T, AbiError>;

/// ABI encoding error
///
/// Every failure aborts the whole encode call; no partial output is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AbiError {
    /// Type name matches no known ABI type
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Array or tuple syntax (or a width) could not be parsed
    #[error("malformed type `{ty}`: {reason}")]
    MalformedType {
        /// Offending type string
        ty: String,
        /// What was wrong with it
        reason: String,
    },

    /// Signature lacks a parenthesized argument list
    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    /// Value count differs from the declared member count
    #[error("arity mismatch: expected {expected} values, got {actual}")]
    ArityMismatch {
        /// Declared member count
        expected: usize,
        /// Supplied value count
        actual: usize,
    },

    /// Integer does not fit the representable width
    #[error("value out of range: {0}")]
    Range(String),

    /// Value shape does not match the type
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Canonical type name
        expected: String,
        /// Kind of value supplied
        found: &'static str,
    },

    /// Address string is not valid hex or is too long
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Decimal string for a fixed-point type could not be read
    #[error("invalid decimal `{value}`: {reason}")]
    InvalidDecimal {
        /// Offending decimal text
        value: String,
        /// What was wrong with it
        reason: String,
    },

    /// Nesting exceeds the configured limit
    #[error("nesting depth exceeds limit of {0}")]
    DepthLimit(usize),

    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(String),
}

impl AbiError {
    pub(crate) fn malformed(ty: &str, reason: impl Into<String>) -> Self {
        AbiError::MalformedType {
            ty: ty.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<calldata_primitives::AddressError> for AbiError {
    fn from(e: calldata_primitives::AddressError) -> Self {
        AbiError::InvalidAddress(e.to_string())
    }
}

impl From<toml::de::Error> for AbiError {
    fn from(e: toml::de::Error) -> Self {
        AbiError::Config(e.to_string())
    }
}

impl From<std::io::Error> for AbiError {
    fn from(e: std::io::Error) -> Self {
        AbiError::Config(e.to_string())
    }
}
