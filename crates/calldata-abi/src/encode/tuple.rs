//! Tuple layout: head slots followed by tail payloads

use tracing::trace;

use crate::error::{AbiError, Result};
use crate::types::ParamType;
use crate::value::Value;

use super::scalar::usize_word;
use super::Encoder;

/// Encode `values` against `members` as a head section followed by a tail.
///
/// Static members are written inline in the head. Each dynamic member gets
/// one head word holding its byte offset from the start of this tuple, and
/// its encoding is appended to the tail in member order.
///
/// Members are encoded before the head is sized, so a value that does not
/// match its declared array length fails on arity first.
pub(crate) fn encode_tuple(
    encoder: &Encoder,
    values: &[Value],
    members: &[ParamType],
    depth: usize,
) -> Result<Vec<u8>> {
    if values.len() != members.len() {
        return Err(AbiError::ArityMismatch {
            expected: members.len(),
            actual: values.len(),
        });
    }

    let encoded = values
        .iter()
        .zip(members)
        .map(|(value, member)| encoder.encode_at(value, member, depth))
        .collect::<Result<Vec<_>>>()?;

    let head_size = members.iter().try_fold(0usize, |total, member| {
        total
            .checked_add(member.head_size()?)
            .ok_or_else(|| AbiError::malformed(&member.to_string(), "encoded width overflows"))
    })?;
    let mut head = Vec::with_capacity(head_size);
    let mut tail = Vec::new();
    let mut tail_len = 0usize;

    for (member, encoded) in members.iter().zip(encoded) {
        if member.is_dynamic() {
            let offset = head_size + tail_len;
            trace!("{} at tail offset {}", member, offset);
            head.extend_from_slice(&usize_word(offset));
            tail_len += encoded.len();
            tail.extend(encoded);
        } else {
            head.extend(encoded);
        }
    }

    debug_assert_eq!(head.len(), head_size);
    head.extend(tail);
    Ok(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(encoded: &[u8]) -> Vec<String> {
        encoded.chunks(32).map(hex::encode).collect()
    }

    fn word(hex: &str) -> String {
        format!("{:0>64}", hex)
    }

    #[test]
    fn test_empty_tuple() {
        let encoded = encode_tuple(&Encoder::default(), &[], &[], 0).unwrap();
        assert!(encoded.is_empty());
    }

    #[test]
    fn test_arity_mismatch() {
        let result = encode_tuple(
            &Encoder::default(),
            &[Value::from(true)],
            &[ParamType::Bool, ParamType::Bool],
            0,
        );
        assert_eq!(result, Err(AbiError::ArityMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn test_oversized_static_array_is_arity_error() {
        let members = vec![ParamType::parse("uint256[576460752303423488]").unwrap()];
        let result = encode_tuple(&Encoder::default(), &[Value::List(vec![])], &members, 0);
        assert_eq!(
            result,
            Err(AbiError::ArityMismatch {
                expected: 576460752303423488,
                actual: 0,
            })
        );
    }

    #[test]
    fn test_static_members_inline() {
        let encoded = encode_tuple(
            &Encoder::default(),
            &[Value::from(69u32), Value::from(true)],
            &[ParamType::Uint(32), ParamType::Bool],
            0,
        )
        .unwrap();
        assert_eq!(words(&encoded), vec![word("45"), word("1")]);
    }

    #[test]
    fn test_static_array_member_expands_head() {
        // (uint8[2], string): the string offset skips the two inline words
        let members = vec![
            ParamType::FixedArray(Box::new(ParamType::Uint(8)), 2),
            ParamType::String,
        ];
        let values = vec![Value::list([1u8, 2]), Value::from("x")];
        let encoded = encode_tuple(&Encoder::default(), &values, &members, 0).unwrap();
        let w = words(&encoded);
        assert_eq!(w[0], word("1"));
        assert_eq!(w[1], word("2"));
        assert_eq!(w[2], word("60"));
        assert_eq!(w[3], word("1"));
        assert_eq!(&w[4][..2], "78");
        assert_eq!(w.len(), 5);
    }

    #[test]
    fn test_second_dynamic_offset_counts_first_tail() {
        let members = vec![ParamType::Bytes, ParamType::Bytes];
        let values = vec![Value::Bytes(vec![0xaa; 33]), Value::Bytes(vec![0xbb])];
        let encoded = encode_tuple(&Encoder::default(), &values, &members, 0).unwrap();
        let w = words(&encoded);
        assert_eq!(w[0], word("40"));
        // 64 head + 32 length + 64 padded payload
        assert_eq!(w[1], word("a0"));
        assert_eq!(encoded.len() % 32, 0);
    }
}
