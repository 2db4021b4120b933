//! Function signatures, selectors and full call payloads

use std::fmt;

use calldata_primitives::Hasher256;
use tracing::debug;

use crate::encode::Encoder;
use crate::error::{AbiError, Result};
use crate::types::{split_top_level, ParamType};
use crate::value::Value;

/// A parsed function signature such as `transfer(address,uint256)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Function name, the text before the argument list
    pub name: String,
    /// Argument types
    pub inputs: Vec<ParamType>,
}

impl Signature {
    /// Parse `name(T1,...,Tn)`.
    ///
    /// The argument list runs from the first `(` to the final `)`, which must
    /// end the signature.
    pub fn parse(signature: &str) -> Result<Self> {
        let signature = signature.trim();
        let malformed = |reason: &str| AbiError::MalformedSignature(format!("{signature}: {reason}"));

        let open = signature
            .find('(')
            .ok_or_else(|| malformed("missing `(`"))?;
        let args = signature[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| malformed("missing closing `)`"))?;

        let inputs = split_top_level(args)
            .map_err(|_| malformed("unbalanced argument list"))?
            .into_iter()
            .map(ParamType::parse)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: signature[..open].trim().to_string(),
            inputs,
        })
    }

    /// The signature with every argument type in canonical form
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    /// The 4-byte selector of the canonical signature
    pub fn selector(&self, hasher: &impl Hasher256) -> [u8; 4] {
        function_selector(hasher, &self.canonical())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, ParamType::Tuple(self.inputs.clone()))
    }
}

/// Compute function selector (first 4 bytes of the hash of `signature`).
///
/// The signature text is hashed exactly as given.
pub fn function_selector(hasher: &impl Hasher256, signature: &str) -> [u8; 4] {
    let hash = hasher.hash256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash.as_bytes()[..4]);
    selector
}

/// Encode function call (selector + params)
pub fn encode_function_call(
    selector: [u8; 4],
    values: &[Value],
    inputs: &[ParamType],
) -> Result<Vec<u8>> {
    Encoder::default().encode_function_call(selector, values, inputs)
}

/// Encode a call to `signature` as raw bytes, with the default configuration
pub fn encode_call(hasher: &impl Hasher256, signature: &str, values: &[Value]) -> Result<Vec<u8>> {
    Encoder::default().encode_call(hasher, signature, values)
}

/// Encode a call to `signature` as `0x`-prefixed hex, with the default
/// configuration
pub fn encode(hasher: &impl Hasher256, signature: &str, values: &[Value]) -> Result<String> {
    Encoder::default().encode(hasher, signature, values)
}

impl Encoder {
    /// Encode function call (selector + params)
    pub fn encode_function_call(
        &self,
        selector: [u8; 4],
        values: &[Value],
        inputs: &[ParamType],
    ) -> Result<Vec<u8>> {
        let mut result = selector.to_vec();
        result.extend(self.encode_tuple(values, inputs)?);
        Ok(result)
    }

    /// Encode a call to `signature` as raw bytes
    pub fn encode_call(
        &self,
        hasher: &impl Hasher256,
        signature: &str,
        values: &[Value],
    ) -> Result<Vec<u8>> {
        let parsed = Signature::parse(signature)?;
        let selector = function_selector(hasher, signature.trim());
        debug!(
            "encoding call {} with selector 0x{} and {} arguments",
            parsed.name,
            hex::encode(selector),
            values.len()
        );
        self.encode_function_call(selector, values, &parsed.inputs)
    }

    /// Encode a call to `signature` as `"0x" + selector + arguments`
    pub fn encode(&self, hasher: &impl Hasher256, signature: &str, values: &[Value]) -> Result<String> {
        self.encode_call(hasher, signature, values)
            .map(|data| format!("0x{}", hex::encode(data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calldata_primitives::H256;

    /// Stand-in hash: the input bytes, zero-padded
    fn echo(data: &[u8]) -> H256 {
        let mut out = [0u8; 32];
        let n = data.len().min(32);
        out[..n].copy_from_slice(&data[..n]);
        H256::from_bytes(out)
    }

    #[test]
    fn test_parse_signature() {
        let sig = Signature::parse("sam(bytes,bool,uint256[])").unwrap();
        assert_eq!(sig.name, "sam");
        assert_eq!(
            sig.inputs,
            vec![
                ParamType::Bytes,
                ParamType::Bool,
                ParamType::Array(Box::new(ParamType::Uint(256))),
            ]
        );
    }

    #[test]
    fn test_parse_signature_no_args() {
        let sig = Signature::parse("totalSupply()").unwrap();
        assert!(sig.inputs.is_empty());
    }

    #[test]
    fn test_parse_signature_tuple_arg() {
        let sig = Signature::parse("f((uint256,string)[],bool)").unwrap();
        assert_eq!(sig.inputs.len(), 2);
        assert_eq!(sig.canonical(), "f((uint256,string)[],bool)");
    }

    #[test]
    fn test_malformed_signatures() {
        for bad in ["transfer", "transfer(address", "f(uint8))", "f((uint8)", "f(uint8,)"] {
            assert!(
                matches!(Signature::parse(bad), Err(AbiError::MalformedSignature(_))),
                "{bad} should be malformed"
            );
        }
    }

    #[test]
    fn test_bad_arg_type_is_a_type_error() {
        assert!(matches!(
            Signature::parse("f(uint7)"),
            Err(AbiError::MalformedType { .. })
        ));
    }

    #[test]
    fn test_unknown_arg_type() {
        assert_eq!(
            Signature::parse("f(widget)"),
            Err(AbiError::UnsupportedType("widget".into()))
        );
    }

    #[test]
    fn test_canonical_expands_aliases() {
        let sig = Signature::parse("transfer(address, uint)").unwrap();
        assert_eq!(sig.canonical(), "transfer(address,uint256)");
    }

    #[test]
    fn test_function_selector_takes_prefix() {
        assert_eq!(function_selector(&echo, "abcdef()"), *b"abcd");
    }

    #[test]
    fn test_encode_prefixes_selector() {
        let encoded = encode(&echo, "wxyz(bool)", &[Value::from(true)]).unwrap();
        assert_eq!(
            encoded,
            format!("0x{}{:0>64}", hex::encode(b"wxyz"), "1")
        );
    }

    #[test]
    fn test_encode_arity_mismatch() {
        let result = encode(&echo, "f(uint8,bool)", &[Value::from(1u8)]);
        assert_eq!(result, Err(AbiError::ArityMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn test_encode_function_call_precomputed() {
        let data = encode_function_call(
            [0xa9, 0x05, 0x9c, 0xbb],
            &[Value::address("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d"), Value::from(1000u32)],
            &[ParamType::Address, ParamType::Uint(256)],
        )
        .unwrap();
        // 4 bytes selector + 32 bytes address + 32 bytes uint
        assert_eq!(data.len(), 68);
        assert_eq!(&data[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
    }
}
