//! Lenient number and attribute handling for sheet fields.
//!
//! Sheet documents come from form inputs, so numeric fields may hold
//! numbers, numeric strings, empty strings or half-typed text like `"-"`.
//! Anything that is not a number reads as zero, and an attack attribute
//! that is not a known code reads as none.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::Attribute;

/// Coerce a JSON value to an integer. Floats truncate, anything
/// non-numeric is zero.
pub fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => numeric_text(s),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

fn numeric_text(text: &str) -> i64 {
    let text = text.trim();
    if let Ok(n) = text.parse::<i64>() {
        return n;
    }
    text.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(|f| f.trunc() as i64)
        .unwrap_or(0)
}

/// Parse text typed into a bonus field.
///
/// Every character other than digits and `-` is dropped, then a leading
/// integer is read (`"+5 (item)"` is 5, `"abc"` is 0).
pub fn parse_num(raw: &str) -> i64 {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    let (negative, digits) = match kept.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, kept.as_str()),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude = match digits[..end].parse::<i64>() {
        Ok(n) => n,
        Err(_) if end > 0 => i64::MAX,
        Err(_) => return 0,
    };
    if negative { -magnitude } else { magnitude }
}

/// Deserialize an integer field leniently.
pub fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_int(&value))
}

/// Deserialize an `i32` field leniently, clamping out-of-range values.
pub fn lenient_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let value = lenient_int(deserializer)?;
    Ok(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Resolve a stored attribute reference.
///
/// Returns the attribute, if any, plus the raw value when it names no
/// known attribute. `null` and `""` are no attribute.
pub fn resolve_attr(raw: Option<Value>) -> (Option<Attribute>, Option<Value>) {
    match raw {
        None | Some(Value::Null) => (None, None),
        Some(Value::String(code)) if code.trim().is_empty() => (None, None),
        Some(Value::String(code)) => match code.parse::<Attribute>() {
            Ok(attr) => (Some(attr), None),
            Err(_) => (None, Some(Value::String(code))),
        },
        Some(other) => (None, Some(other)),
    }
}
