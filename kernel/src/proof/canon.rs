//! Canonical JSON bytes: the serialization used for every digest.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no whitespace: `{"a":1,"b":2}`.
//! 3. Numbers must be integers (`i64` or `u64`); floats are rejected so
//!    formatting cannot drift between platforms.
//! 4. Array order is preserved.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64` or
/// `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    check_integers(value)?;
    let mut buf = Vec::new();
    write_value(&mut buf, value);
    Ok(buf)
}

fn check_integers(value: &serde_json::Value) -> Result<(), CanonError> {
    use serde_json::Value;
    match value {
        Value::Number(n) if n.as_i64().is_none() && n.as_u64().is_none() => {
            Err(CanonError::NonIntegerNumber {
                raw: n.to_string(),
            })
        }
        Value::Array(items) => items.iter().try_for_each(check_integers),
        Value::Object(map) => map.values().try_for_each(check_integers),
        _ => Ok(()),
    }
}

/// Emit compact JSON with keys in byte order, independent of the map's own
/// iteration order.
fn write_value(buf: &mut Vec<u8>, value: &serde_json::Value) {
    use serde_json::Value;
    match value {
        Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item);
            }
            buf.push(b']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
            buf.push(b'{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_scalar(buf, &Value::String(key.clone()));
                buf.push(b':');
                write_value(buf, &map[key]);
            }
            buf.push(b'}');
        }
        scalar => write_scalar(buf, scalar),
    }
}

fn write_scalar(buf: &mut Vec<u8>, scalar: &serde_json::Value) {
    // serde_json writes scalars compactly with RFC 8259 escaping.
    buf.extend_from_slice(scalar.to_string().as_bytes());
}
