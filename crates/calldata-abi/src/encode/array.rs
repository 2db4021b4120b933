//! Array encodings
//!
//! Both array kinds are rewritten as a tuple of repeated element types.

use crate::error::{AbiError, Result};
use crate::types::ParamType;
use crate::value::Value;

use super::scalar::usize_word;
use super::{tuple, Encoder};

/// Encode `T[k]`: the values as a tuple `(T, T, ..., T)` of `k` members
pub(crate) fn encode_static_array(
    encoder: &Encoder,
    values: &[Value],
    elem: &ParamType,
    size: usize,
    depth: usize,
) -> Result<Vec<u8>> {
    if values.len() != size {
        return Err(AbiError::ArityMismatch {
            expected: size,
            actual: values.len(),
        });
    }
    let members = vec![elem.clone(); size];
    tuple::encode_tuple(encoder, values, &members, depth)
}

/// Encode `T[]`: a length word followed by the values as `T[len]`
pub(crate) fn encode_dynamic_array(
    encoder: &Encoder,
    values: &[Value],
    elem: &ParamType,
    depth: usize,
) -> Result<Vec<u8>> {
    let mut result = usize_word(values.len()).to_vec();
    result.extend(encode_static_array(encoder, values, elem, values.len(), depth)?);
    Ok(result)
}
