//! ABI type definitions and the type-string parser

use std::fmt;
use std::str::FromStr;

use crate::error::{AbiError, Result};

/// Largest integer width in bits
pub const MAX_INT_BITS: usize = 256;

/// Largest decimal scale of a fixed-point type
pub const MAX_FIXED_SCALE: usize = 80;

/// Solidity parameter types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Address
    Address,
    /// Boolean
    Bool,
    /// Dynamic bytes
    Bytes,
    /// Fixed-size bytes (size 1-32)
    FixedBytes(usize),
    /// UTF-8 string
    String,
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// Signed integer with bit size
    Int(usize),
    /// Signed fixed-point decimal: total bits, decimal scale
    Fixed(usize, usize),
    /// Unsigned fixed-point decimal: total bits, decimal scale
    Ufixed(usize, usize),
    /// Dynamic array
    Array(Box<ParamType>),
    /// Fixed-size array
    FixedArray(Box<ParamType>, usize),
    /// Tuple
    Tuple(Vec<ParamType>),
}

impl ParamType {
    /// Parse a canonical ABI type string such as `uint256`, `bytes32[]` or
    /// `(address,(bool,string)[2])`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AbiError::malformed(s, "empty type"));
        }

        // Array suffixes bind right-to-left: `T[2][]` is a dynamic array of `T[2]`.
        if s.ends_with(']') {
            let open = s
                .rfind('[')
                .ok_or_else(|| AbiError::malformed(s, "missing `[`"))?;
            let inner = &s[..open];
            if inner.trim().is_empty() {
                return Err(AbiError::malformed(s, "array without element type"));
            }
            let elem = Box::new(Self::parse(inner)?);
            let len = &s[open + 1..s.len() - 1];
            if len.is_empty() {
                return Ok(ParamType::Array(elem));
            }
            let size = parse_digits(len)
                .ok_or_else(|| AbiError::malformed(s, format!("invalid array length `{len}`")))?;
            return Ok(ParamType::FixedArray(elem, size));
        }

        if let Some(rest) = s.strip_prefix('(') {
            let inner = rest
                .strip_suffix(')')
                .ok_or_else(|| AbiError::malformed(s, "missing closing parenthesis"))?;
            return Self::parse_list(inner).map(ParamType::Tuple);
        }

        if s.contains(['[', ']', '(', ')']) {
            return Err(AbiError::malformed(s, "unbalanced brackets"));
        }

        Self::parse_elementary(s)
    }

    /// Parse a comma-separated member list, as found between tuple parentheses
    pub fn parse_list(s: &str) -> Result<Vec<Self>> {
        split_top_level(s)?
            .into_iter()
            .map(Self::parse)
            .collect()
    }

    fn parse_elementary(s: &str) -> Result<Self> {
        match s {
            "address" => return Ok(ParamType::Address),
            "bool" => return Ok(ParamType::Bool),
            "string" => return Ok(ParamType::String),
            "bytes" => return Ok(ParamType::Bytes),
            _ => {}
        }

        if let Some(rest) = s.strip_prefix("ufixed") {
            let (m, n) = parse_fixed_suffix(s, rest)?;
            return Ok(ParamType::Ufixed(m, n));
        }
        if let Some(rest) = s.strip_prefix("fixed") {
            let (m, n) = parse_fixed_suffix(s, rest)?;
            return Ok(ParamType::Fixed(m, n));
        }
        if let Some(rest) = s.strip_prefix("uint") {
            return parse_int_width(s, rest).map(ParamType::Uint);
        }
        if let Some(rest) = s.strip_prefix("int") {
            return parse_int_width(s, rest).map(ParamType::Int);
        }
        if let Some(rest) = s.strip_prefix("bytes") {
            let size = parse_digits(rest).ok_or_else(|| AbiError::UnsupportedType(s.to_string()))?;
            if !(1..=32).contains(&size) {
                return Err(AbiError::malformed(s, "bytesN size must be 1..=32"));
            }
            return Ok(ParamType::FixedBytes(size));
        }

        Err(AbiError::UnsupportedType(s.to_string()))
    }

    /// Check if this type is dynamic (variable length)
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::Bytes | ParamType::String | ParamType::Array(_) => true,
            ParamType::FixedArray(inner, _) => inner.is_dynamic(),
            ParamType::Tuple(types) => types.iter().any(|t| t.is_dynamic()),
            _ => false,
        }
    }

    /// Bytes this type occupies in the head of an enclosing tuple.
    ///
    /// Dynamic types take one offset word. Static arrays and tuples are laid
    /// out inline, so they take their full encoded width. A static array
    /// whose declared width does not fit in `usize` is a `MalformedType`.
    pub fn head_size(&self) -> Result<usize> {
        if self.is_dynamic() {
            return Ok(32);
        }
        let overflow = || AbiError::malformed(&self.to_string(), "encoded width overflows");
        match self {
            ParamType::FixedArray(inner, size) => {
                inner.head_size()?.checked_mul(*size).ok_or_else(overflow)
            }
            ParamType::Tuple(types) => types.iter().try_fold(0usize, |total, ty| {
                total.checked_add(ty.head_size()?).ok_or_else(overflow)
            }),
            _ => Ok(32),
        }
    }
}

impl FromStr for ParamType {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Address => f.write_str("address"),
            ParamType::Bool => f.write_str("bool"),
            ParamType::Bytes => f.write_str("bytes"),
            ParamType::FixedBytes(size) => write!(f, "bytes{size}"),
            ParamType::String => f.write_str("string"),
            ParamType::Uint(bits) => write!(f, "uint{bits}"),
            ParamType::Int(bits) => write!(f, "int{bits}"),
            ParamType::Fixed(m, n) => write!(f, "fixed{m}x{n}"),
            ParamType::Ufixed(m, n) => write!(f, "ufixed{m}x{n}"),
            ParamType::Array(inner) => write!(f, "{inner}[]"),
            ParamType::FixedArray(inner, size) => write!(f, "{inner}[{size}]"),
            ParamType::Tuple(types) => {
                f.write_str("(")?;
                for (i, t) in types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{t}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Split on commas that are not nested inside parentheses or brackets
pub(crate) fn split_top_level(s: &str) -> Result<Vec<&str>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => {
                depth -= 1;
                if depth < 0 {
                    return Err(AbiError::malformed(s, "unbalanced brackets"));
                }
            }
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(AbiError::malformed(s, "unbalanced brackets"));
    }
    parts.push(&s[start..]);

    if parts.iter().any(|p| p.trim().is_empty()) {
        return Err(AbiError::malformed(s, "empty tuple member"));
    }
    Ok(parts)
}

fn parse_digits(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn valid_int_width(bits: usize) -> bool {
    bits > 0 && bits <= MAX_INT_BITS && bits % 8 == 0
}

fn parse_int_width(ty: &str, rest: &str) -> Result<usize> {
    if rest.is_empty() {
        return Ok(MAX_INT_BITS);
    }
    let bits = parse_digits(rest).ok_or_else(|| AbiError::UnsupportedType(ty.to_string()))?;
    if !valid_int_width(bits) {
        return Err(AbiError::malformed(ty, "integer width must be a multiple of 8 in 8..=256"));
    }
    Ok(bits)
}

fn parse_fixed_suffix(ty: &str, rest: &str) -> Result<(usize, usize)> {
    if rest.is_empty() {
        return Ok((128, 18));
    }
    let (m, n) = rest
        .split_once('x')
        .and_then(|(m, n)| Some((parse_digits(m)?, parse_digits(n)?)))
        .ok_or_else(|| AbiError::UnsupportedType(ty.to_string()))?;
    if !valid_int_width(m) {
        return Err(AbiError::malformed(ty, "fixed width must be a multiple of 8 in 8..=256"));
    }
    if n > MAX_FIXED_SCALE {
        return Err(AbiError::malformed(ty, "fixed scale must be at most 80"));
    }
    Ok((m, n))
}
