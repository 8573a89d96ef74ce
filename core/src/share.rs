//! Flat key-value codec for sharing an input record as a query string.
//!
//! Encoding rules:
//! 1. Object- and array-valued fields (the estimate triples, confidence,
//!    category) are JSON-encoded into their value slot.
//! 2. Scalar fields are stringified bare, without JSON quoting.
//! 3. Keys and values are percent-encoded; '+' is accepted for space on
//!    decode since browser-style encoders emit it.
//!
//! Decoding takes string-typed keys verbatim, reconstructs every other
//! value through a coercion ladder (JSON first, then bare numbers, else
//! raw string), overlays the recognized fields on the default record so
//! partial strings work, and validates the result. A string carrying no
//! recognized key at all is rejected.
//!
//! Round-trip: `decode(&encode(&input)?)? == input` for every valid
//! record.

use crate::{
    error::{RoiError, RoiResult},
    input::ProcessInput,
};
use serde_json::{Map, Value};

/// Encode an input record as `key=value&key=value...`.
pub fn encode(input: &ProcessInput) -> RoiResult<String> {
    let value = serde_json::to_value(input)?;
    let mut pairs = Vec::new();

    if let Value::Object(fields) = value {
        for (key, field) in fields {
            let raw = match &field {
                Value::String(s) => s.clone(),
                Value::Object(_) | Value::Array(_) => serde_json::to_string(&field)?,
                _ => field.to_string(),
            };
            pairs.push(format!("{}={}", percent_encode(&key), percent_encode(&raw)));
        }
    }

    Ok(pairs.join("&"))
}

/// Decode a share string produced by [`encode`] (or by an equivalent
/// external encoder) back into a validated input record.
pub fn decode(query: &str) -> RoiResult<ProcessInput> {
    let mut fields = Map::new();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, raw_value) = pair
            .split_once('=')
            .ok_or_else(|| RoiError::Share(format!("missing '=' in pair '{pair}'")))?;
        let key = percent_decode(key)?;
        let raw_value = percent_decode(raw_value)?;
        let value = reconstruct_value(&key, &raw_value);
        fields.insert(key, value);
    }

    // Overlay recognized fields on the defaults. Unknown keys are
    // skipped so foreign strings with extra parameters still decode,
    // but a string landing none of our keys is malformed, not a
    // default record.
    let mut merged = serde_json::to_value(ProcessInput::default())?;
    let mut recognized = 0usize;
    if let Value::Object(base) = &mut merged {
        for (key, value) in fields {
            if base.contains_key(&key) || is_optional_field(&key) {
                base.insert(key, value);
                recognized += 1;
            }
        }
    }
    if recognized == 0 {
        return Err(RoiError::Share(format!("no recognized fields in '{query}'")));
    }

    let input: ProcessInput = serde_json::from_value(merged)?;
    input.validate()?;
    Ok(input)
}

// The two optional quality fields are absent from the serialized
// defaults, so a plain contains_key overlay would drop them.
fn is_optional_field(key: &str) -> bool {
    key == "errorRatePct" || key == "reworkHoursPerWeek"
}

// Wire keys whose target field is a string. Their text must survive
// verbatim: an industry named "42" or a description that happens to be
// valid JSON would otherwise decode as a number or an object and break
// the round trip.
const STRING_KEYS: [&str; 5] = [
    "industry",
    "department",
    "processDescription",
    "currency",
    "salaryPeriod",
];

/// Rebuild a typed value from its string form. String-typed keys stay
/// as-is; for the rest JSON syntax wins (objects, arrays, plain
/// numbers, booleans), then bare numbers, then the raw string.
fn reconstruct_value(key: &str, raw: &str) -> Value {
    if STRING_KEYS.contains(&key) {
        return Value::String(raw.to_string());
    }
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return value;
    }
    if let Ok(int) = raw.parse::<i64>() {
        return Value::Number(int.into());
    }
    if let Ok(float) = raw.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    Value::String(raw.to_string())
}

fn percent_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn percent_decode(raw: &str) -> RoiResult<String> {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = bytes
                    .get(i + 1..i + 3)
                    .and_then(|pair| std::str::from_utf8(pair).ok())
                    .ok_or_else(|| RoiError::Share(format!("truncated escape in '{raw}'")))?;
                let byte = u8::from_str_radix(hex, 16)
                    .map_err(|_| RoiError::Share(format!("bad escape '%{hex}'")))?;
                out.push(byte);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8(out)
        .map_err(|_| RoiError::Share(format!("invalid UTF-8 after decoding '{raw}'")))
}
