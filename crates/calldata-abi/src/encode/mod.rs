//! ABI encoding
//!
//! [`Encoder`] dispatches each value on its parsed [`ParamType`] to the
//! scalar, bytes, array and tuple encoders. Compound encoders recurse back
//! through the dispatcher for their elements.

mod array;
pub mod bytes;
pub mod scalar;
mod tuple;

use tracing::trace;

use crate::config::EncoderConfig;
use crate::error::{AbiError, Result};
use crate::types::ParamType;
use crate::value::Value;

pub use scalar::Word;

/// ABI encoder with a fixed configuration.
///
/// Holds no state between calls, so one encoder can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Create an encoder with the given configuration
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// The encoder's configuration
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode a single value against its type
    pub fn encode_value(&self, value: &Value, ty: &ParamType) -> Result<Vec<u8>> {
        self.encode_at(value, ty, 0)
    }

    /// Encode a single value against a type string, returning lowercase hex
    /// without a `0x` prefix
    pub fn encode_argument(&self, value: &Value, ty: &str) -> Result<String> {
        let ty = ParamType::parse(ty)?;
        self.encode_value(value, &ty).map(hex::encode)
    }

    /// Encode values as a tuple of the given member types
    pub fn encode_tuple(&self, values: &[Value], members: &[ParamType]) -> Result<Vec<u8>> {
        tuple::encode_tuple(self, values, members, 0)
    }

    /// Encode values as a tuple of member type strings, returning hex
    pub fn encode_params(&self, values: &[Value], members: &[&str]) -> Result<String> {
        let members = members
            .iter()
            .map(|ty| ParamType::parse(ty))
            .collect::<Result<Vec<_>>>()?;
        self.encode_tuple(values, &members).map(hex::encode)
    }

    /// Width to range-check integers against
    fn int_width(&self, declared: usize) -> usize {
        if self.config.check_declared_width {
            declared
        } else {
            crate::types::MAX_INT_BITS
        }
    }

    pub(crate) fn encode_at(&self, value: &Value, ty: &ParamType, depth: usize) -> Result<Vec<u8>> {
        trace!("encoding {} as {}", value.kind(), ty);

        let mismatch = || AbiError::TypeMismatch {
            expected: ty.to_string(),
            found: value.kind(),
        };

        match ty {
            ParamType::FixedArray(elem, size) => {
                let Value::List(values) = value else { return Err(mismatch()) };
                let depth = self.descend(depth)?;
                array::encode_static_array(self, values, elem, *size, depth)
            }
            ParamType::Array(elem) => {
                let Value::List(values) = value else { return Err(mismatch()) };
                let depth = self.descend(depth)?;
                array::encode_dynamic_array(self, values, elem, depth)
            }
            ParamType::Tuple(members) => {
                let Value::List(values) = value else { return Err(mismatch()) };
                let depth = self.descend(depth)?;
                tuple::encode_tuple(self, values, members, depth)
            }
            ParamType::Address => match value {
                Value::Address(s) | Value::Text(s) => Ok(scalar::encode_address(s)?.to_vec()),
                _ => Err(mismatch()),
            },
            ParamType::Bool => match value {
                Value::Bool(b) => Ok(scalar::encode_bool(*b).to_vec()),
                _ => Err(mismatch()),
            },
            ParamType::Bytes => match value {
                Value::Bytes(data) => Ok(bytes::encode_bytes(data, true)),
                Value::Text(text) => Ok(bytes::encode_string(text)),
                _ => Err(mismatch()),
            },
            ParamType::FixedBytes(size) => {
                let data = match value {
                    Value::Bytes(data) => data.as_slice(),
                    Value::Text(text) => text.as_bytes(),
                    _ => return Err(mismatch()),
                };
                if data.len() > *size {
                    return Err(AbiError::Range(format!(
                        "{} bytes do not fit in bytes{}",
                        data.len(),
                        size
                    )));
                }
                Ok(bytes::encode_bytes(data, false))
            }
            ParamType::Fixed(bits, scale) | ParamType::Ufixed(bits, scale) => {
                let scale = self.config.strict_fixed_scale.then_some(*scale);
                let bits = self.int_width(*bits);
                let text = match value {
                    Value::Decimal(s) | Value::Text(s) => s.clone(),
                    Value::Int(i) => i.to_string(),
                    _ => return Err(mismatch()),
                };
                let word = if matches!(ty, ParamType::Fixed(..)) {
                    scalar::encode_fixed(&text, bits, scale)?
                } else {
                    scalar::encode_ufixed(&text, bits, scale)?
                };
                Ok(word.to_vec())
            }
            ParamType::Int(bits) => match value {
                Value::Int(i) => Ok(scalar::encode_int(i, self.int_width(*bits))?.to_vec()),
                _ => Err(mismatch()),
            },
            ParamType::String => match value {
                Value::Text(text) => Ok(bytes::encode_string(text)),
                Value::Bytes(data) => Ok(bytes::encode_bytes(data, true)),
                _ => Err(mismatch()),
            },
            ParamType::Uint(bits) => match value {
                Value::Int(i) => Ok(scalar::encode_uint(i, self.int_width(*bits))?.to_vec()),
                _ => Err(mismatch()),
            },
        }
    }

    fn descend(&self, depth: usize) -> Result<usize> {
        if depth >= self.config.max_depth {
            return Err(AbiError::DepthLimit(self.config.max_depth));
        }
        Ok(depth + 1)
    }
}

/// Encode a value with the default configuration
pub fn encode_value(value: &Value, ty: &ParamType) -> Result<Vec<u8>> {
    Encoder::default().encode_value(value, ty)
}

/// Encode a value against a type string with the default configuration,
/// returning lowercase hex without a `0x` prefix
pub fn encode_argument(value: &Value, ty: &str) -> Result<String> {
    Encoder::default().encode_argument(value, ty)
}

/// Encode values as a tuple with the default configuration
pub fn encode_tuple(values: &[Value], members: &[ParamType]) -> Result<Vec<u8>> {
    Encoder::default().encode_tuple(values, members)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_argument_address() {
        let encoded = encode_argument(
            &Value::address("0xf00000000000000000000000000000000000000f"),
            "address",
        )
        .unwrap();
        assert_eq!(
            encoded,
            "000000000000000000000000f00000000000000000000000000000000000000f"
        );
    }

    #[test]
    fn test_encode_argument_bool() {
        let encoded = encode_argument(&Value::from(true), "bool").unwrap();
        assert_eq!(encoded, format!("{}1", "0".repeat(63)));
    }

    #[test]
    fn test_encode_argument_bytes() {
        let encoded = encode_argument(&Value::Bytes(vec![0, 127, 255]), "bytes").unwrap();
        assert_eq!(
            encoded,
            format!("{:0>64}{:0<64}", "3", "007fff")
        );
    }

    #[test]
    fn test_encode_bytes32() {
        let data = [0x42u8; 32];
        let encoded = encode_value(&Value::Bytes(data.to_vec()), &ParamType::FixedBytes(32)).unwrap();
        assert_eq!(encoded, data.to_vec());
    }

    #[test]
    fn test_empty_fixed_bytes_fills_one_word() {
        let encoded = encode_argument(&Value::Bytes(vec![]), "bytes4").unwrap();
        assert_eq!(encoded, "0".repeat(64));

        let encoded = Encoder::default()
            .encode_params(&[Value::Bytes(vec![]), Value::from(true)], &["bytes4", "bool"])
            .unwrap();
        assert_eq!(encoded, format!("{:0>64}{:0>64}", "0", "1"));
    }

    #[test]
    fn test_fixed_bytes_too_long() {
        let result = encode_argument(&Value::Bytes(vec![1, 2, 3, 4, 5]), "bytes4");
        assert!(matches!(result, Err(AbiError::Range(_))));
    }

    #[test]
    fn test_encode_argument_unsupported() {
        assert_eq!(
            encode_argument(&Value::from(1u8), "function"),
            Err(AbiError::UnsupportedType("function".into()))
        );
    }

    #[test]
    fn test_type_mismatch() {
        let result = encode_argument(&Value::from(true), "uint256");
        assert_eq!(
            result,
            Err(AbiError::TypeMismatch {
                expected: "uint256".into(),
                found: "bool",
            })
        );
        assert!(matches!(
            encode_argument(&Value::from(1u8), "uint8[]"),
            Err(AbiError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_declared_width_is_opt_in() {
        let value = Value::from(300u32);
        assert!(encode_argument(&value, "uint8").is_ok());

        let strict = Encoder::new(EncoderConfig {
            check_declared_width: true,
            ..EncoderConfig::default()
        });
        assert!(matches!(strict.encode_argument(&value, "uint8"), Err(AbiError::Range(_))));
    }

    #[test]
    fn test_fixed_scale_is_opt_in() {
        let value = Value::decimal("1.5");
        assert!(encode_argument(&value, "ufixed128x18").is_ok());

        let strict = Encoder::new(EncoderConfig::strict());
        assert!(matches!(
            strict.encode_argument(&value, "ufixed128x18"),
            Err(AbiError::InvalidDecimal { .. })
        ));
        assert!(strict.encode_argument(&value, "ufixed128x1").is_ok());
    }

    #[test]
    fn test_depth_limit() {
        let encoder = Encoder::new(EncoderConfig {
            max_depth: 2,
            ..EncoderConfig::default()
        });
        let nested = Value::List(vec![Value::List(vec![Value::List(vec![Value::from(1u8)])])]);
        assert_eq!(
            encoder.encode_argument(&nested, "uint8[][][]"),
            Err(AbiError::DepthLimit(2))
        );
        let shallow = Value::List(vec![Value::List(vec![Value::from(1u8)])]);
        assert!(encoder.encode_argument(&shallow, "uint8[][]").is_ok());
    }

    #[test]
    fn test_encode_params() {
        let encoded = Encoder::default()
            .encode_params(&[Value::from(69u32), Value::from(true)], &["uint32", "bool"])
            .unwrap();
        assert_eq!(encoded, format!("{:0>64}{:0>64}", "45", "1"));
    }

    #[test]
    fn test_negative_int_argument() {
        let encoded = encode_argument(&Value::from(-1i8), "int8").unwrap();
        assert_eq!(encoded, "f".repeat(64));
    }
}
