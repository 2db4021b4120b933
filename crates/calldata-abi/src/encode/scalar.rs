//! Single-word encodings: integers, booleans, addresses, fixed-point decimals

use calldata_primitives::{Address, U256};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed};

use crate::error::{AbiError, Result};
use crate::types::MAX_INT_BITS;

/// One 32-byte ABI word
pub type Word = [u8; 32];

/// Encode a `usize` (offsets and lengths) as a word
pub fn usize_word(value: usize) -> Word {
    u256_word(U256::from(value))
}

fn u256_word(value: U256) -> Word {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

fn magnitude(value: &BigInt) -> U256 {
    let (_, bytes) = value.to_bytes_be();
    U256::from_big_endian(&bytes)
}

/// Encode a non-negative integer that fits in `bits` bits.
///
/// `bits` is 256 unless declared widths are enforced.
pub fn encode_uint(value: &BigInt, bits: usize) -> Result<Word> {
    if value.sign() == Sign::Minus {
        return Err(AbiError::Range(format!("negative value {value} for uint{bits}")));
    }
    if value.bits() > bits.min(MAX_INT_BITS) as u64 {
        return Err(AbiError::Range(format!("{value} does not fit in uint{bits}")));
    }
    Ok(u256_word(magnitude(value)))
}

/// Encode a signed integer in two's complement over 256 bits.
///
/// The value must lie in `[-2^(bits-1), 2^(bits-1))`. A zero width holds no
/// value at all.
pub fn encode_int(value: &BigInt, bits: usize) -> Result<Word> {
    if bits == 0 {
        return Err(AbiError::Range(format!("{value} does not fit in int0")));
    }
    let bits = bits.min(MAX_INT_BITS);
    let bound = BigInt::one() << (bits - 1);
    let min = -&bound;
    if *value < min || *value >= bound {
        return Err(AbiError::Range(format!("{value} does not fit in int{bits}")));
    }

    let abs = magnitude(value);
    if value.is_negative() {
        let (wrapped, _) = (!abs).overflowing_add(U256::one());
        Ok(u256_word(wrapped))
    } else {
        Ok(u256_word(abs))
    }
}

/// Encode a boolean as the word 1 or 0
pub fn encode_bool(value: bool) -> Word {
    u256_word(U256::from(value as u8))
}

/// Encode hex address text into the low-order 20 bytes of a word.
///
/// An optional `0x` prefix is stripped. Shorter inputs are zero-filled on the left.
pub fn encode_address(value: &str) -> Result<Word> {
    Ok(Address::from_hex_padded(value)?.to_word())
}

/// Encode a signed fixed-point decimal.
///
/// The decimal point is dropped and the remaining digits are encoded as an
/// `int`. With `scale` set, the number of fractional digits must equal it.
pub fn encode_fixed(value: &str, bits: usize, scale: Option<usize>) -> Result<Word> {
    encode_int(&unscaled(value, scale)?, bits)
}

/// Encode an unsigned fixed-point decimal; see [`encode_fixed`]
pub fn encode_ufixed(value: &str, bits: usize, scale: Option<usize>) -> Result<Word> {
    encode_uint(&unscaled(value, scale)?, bits)
}

fn unscaled(value: &str, scale: Option<usize>) -> Result<BigInt> {
    let invalid = |reason: &str| AbiError::InvalidDecimal {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let (negative, body) = match value.trim().strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.trim()),
    };
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    let digits = format!("{int_part}{frac_part}");

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected decimal digits with at most one point"));
    }
    if let Some(n) = scale {
        if frac_part.len() != n {
            return Err(invalid(&format!(
                "has {} fractional digits, type scale is {n}",
                frac_part.len()
            )));
        }
    }

    let magnitude: BigInt = digits
        .parse()
        .map_err(|_| invalid("not a number"))?;
    Ok(if negative { -magnitude } else { magnitude })
}
