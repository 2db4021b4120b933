//! Runtime argument values

use calldata_primitives::{Address, U256};
use num_bigint::{BigInt, Sign};

/// A runtime value to be encoded against a [`ParamType`](crate::ParamType)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Boolean
    Bool(bool),
    /// Integer of arbitrary precision, for `uintN`/`intN`
    Int(BigInt),
    /// Decimal text such as `"10.24"`, for `fixedMxN`/`ufixedMxN`
    Decimal(String),
    /// Hex address text, with or without `0x`
    Address(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Text, converted to UTF-8 bytes when encoded
    Text(String),
    /// Ordered elements of an array or members of a tuple
    List(Vec<Value>),
}

impl Value {
    /// Create an address value from hex text
    pub fn address(s: impl Into<String>) -> Self {
        Value::Address(s.into())
    }

    /// Create a fixed-point value from decimal text
    pub fn decimal(s: impl Into<String>) -> Self {
        Value::Decimal(s.into())
    }

    /// Create a list from anything convertible to values
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Short name of this value's shape, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Decimal(_) => "decimal",
            Value::Address(_) => "address",
            Value::Bytes(_) => "bytes",
            Value::Text(_) => "text",
            Value::List(_) => "list",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(BigInt::from(v))
                }
            }
        )*
    };
}

impl_from_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Value::Int(v)
    }
}

impl From<U256> for Value {
    fn from(v: U256) -> Self {
        let mut bytes = [0u8; 32];
        v.to_big_endian(&mut bytes);
        Value::Int(BigInt::from_bytes_be(Sign::Plus, &bytes))
    }
}

impl From<Address> for Value {
    fn from(addr: Address) -> Self {
        Value::Address(addr.to_hex())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
