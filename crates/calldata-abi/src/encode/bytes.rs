//! Byte-sequence encodings (`bytes`, `bytesN`, `string`)

use calldata_primitives::{padded_len, WORD_SIZE};

use super::scalar::usize_word;

/// Right-pad `data` with zeros to a whole number of words.
///
/// With `dynamic_length`, the padded block is prefixed by a word holding the
/// unpadded byte count. Without it the block is a `bytesN` head slot and is
/// never shorter than one word, even for empty input.
pub fn encode_bytes(data: &[u8], dynamic_length: bool) -> Vec<u8> {
    let (prefix, body) = if dynamic_length {
        (WORD_SIZE, padded_len(data.len()))
    } else {
        (0, padded_len(data.len()).max(WORD_SIZE))
    };
    let mut result = Vec::with_capacity(prefix + body);

    if dynamic_length {
        result.extend_from_slice(&usize_word(data.len()));
    }
    result.extend_from_slice(data);
    result.resize(prefix + body, 0);
    result
}

/// Encode text as its UTF-8 bytes, length-prefixed
pub fn encode_string(text: &str) -> Vec<u8> {
    encode_bytes(text.as_bytes(), true)
}
