//! Coercion of JSON arguments into [`Value`]s
//!
//! Callers holding arguments as JSON (an RPC payload, a config file) can turn
//! them into values without knowing the encoder's value model. The target
//! [`ParamType`] decides how each JSON node is read.

use num_bigint::BigInt;
use num_traits::Num;
use serde_json::Value as Json;

use crate::error::{AbiError, Result};
use crate::types::ParamType;
use crate::value::Value;

impl Value {
    /// Convert a JSON node into a value of type `ty`
    pub fn from_json(json: &Json, ty: &ParamType) -> Result<Self> {
        let mismatch = || AbiError::TypeMismatch {
            expected: ty.to_string(),
            found: json_kind(json),
        };

        match ty {
            ParamType::Array(elem) | ParamType::FixedArray(elem, _) => {
                let items = json.as_array().ok_or_else(mismatch)?;
                items
                    .iter()
                    .map(|item| Self::from_json(item, elem))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::List)
            }
            ParamType::Tuple(members) => {
                let items = json.as_array().ok_or_else(mismatch)?;
                if items.len() != members.len() {
                    return Err(AbiError::ArityMismatch {
                        expected: members.len(),
                        actual: items.len(),
                    });
                }
                items
                    .iter()
                    .zip(members)
                    .map(|(item, member)| Self::from_json(item, member))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::List)
            }
            ParamType::Address => json
                .as_str()
                .map(Value::address)
                .ok_or_else(mismatch),
            ParamType::Bool => match json {
                Json::Bool(b) => Ok(Value::Bool(*b)),
                Json::String(s) if s == "true" => Ok(Value::Bool(true)),
                Json::String(s) if s == "false" => Ok(Value::Bool(false)),
                _ => Err(mismatch()),
            },
            ParamType::Bytes | ParamType::FixedBytes(_) => {
                let s = json.as_str().ok_or_else(mismatch)?;
                match s.strip_prefix("0x") {
                    Some(digits) => hex::decode(digits)
                        .map(Value::Bytes)
                        .map_err(|_| mismatch()),
                    None => Ok(Value::Text(s.to_string())),
                }
            }
            ParamType::String => json
                .as_str()
                .map(|s| Value::Text(s.to_string()))
                .ok_or_else(mismatch),
            ParamType::Fixed(..) | ParamType::Ufixed(..) => match json {
                Json::String(s) => Ok(Value::decimal(s.as_str())),
                Json::Number(n) => Ok(Value::decimal(n.to_string())),
                _ => Err(mismatch()),
            },
            ParamType::Int(_) | ParamType::Uint(_) => match json {
                Json::Number(n) => parse_integer(&n.to_string()).ok_or_else(mismatch),
                Json::String(s) => parse_integer(s).ok_or_else(mismatch),
                _ => Err(mismatch()),
            },
        }
    }

    /// Convert a JSON array of arguments against the given member types
    pub fn from_json_args(args: &[Json], types: &[ParamType]) -> Result<Vec<Self>> {
        if args.len() != types.len() {
            return Err(AbiError::ArityMismatch {
                expected: types.len(),
                actual: args.len(),
            });
        }
        args.iter()
            .zip(types)
            .map(|(arg, ty)| Self::from_json(arg, ty))
            .collect()
    }
}

/// Decimal or `0x` hex integer text, with an optional leading `-`
fn parse_integer(s: &str) -> Option<Value> {
    let s = s.trim();
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let magnitude = match body.strip_prefix("0x") {
        Some(digits) => BigInt::from_str_radix(digits, 16).ok()?,
        None if body.bytes().all(|b| b.is_ascii_digit()) => BigInt::from_str_radix(body, 10).ok()?,
        None => return None,
    };
    if magnitude.sign() == num_bigint::Sign::Minus {
        return None;
    }
    Some(Value::Int(if negative { -magnitude } else { magnitude }))
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "json bool",
        Json::Number(_) => "json number",
        Json::String(_) => "json string",
        Json::Array(_) => "json array",
        Json::Object(_) => "json object",
    }
}
