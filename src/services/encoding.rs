use crate::models::RawValue;
use encoding_rs::{Encoding, WINDOWS_1252};
use serde_json::{Map, Number, Value};

/// Bytes Windows-1252 leaves unassigned. Their presence rules that candidate out.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Return `bytes` as UTF-8, re-encoding from the detected source encoding when needed.
///
/// Candidates are tried in order: UTF-8, a UTF-16 byte-order mark, Windows-1252.
/// When none of them fits the bytes are read as ISO-8859-1.
pub fn force_utf8(bytes: &[u8]) -> String {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        if let Some(decoded) =
            encoding.decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        {
            tracing::debug!(encoding = encoding.name(), "re-encoded text to UTF-8");
            return decoded.into_owned();
        }
    }

    if !bytes.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
        if let Some(decoded) =
            WINDOWS_1252.decode_without_bom_handling_and_without_replacement(bytes)
        {
            tracing::debug!(encoding = WINDOWS_1252.name(), "re-encoded text to UTF-8");
            return decoded.into_owned();
        }
    }

    tracing::warn!(
        len = bytes.len(),
        "could not detect text encoding, assuming ISO-8859-1"
    );
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Repair every string and key in `value`, recursing through maps and lists.
///
/// Non-string scalars pass through unchanged. When two keys become equal after
/// repair the later entry wins. Non-finite floats have no JSON form and become null.
pub fn force_utf8_map(value: &RawValue) -> Value {
    match value {
        RawValue::Null => Value::Null,
        RawValue::Bool(b) => Value::Bool(*b),
        RawValue::Int(n) => Value::Number((*n).into()),
        RawValue::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
        RawValue::Bytes(bytes) => Value::String(force_utf8(bytes)),
        RawValue::List(items) => Value::Array(items.iter().map(force_utf8_map).collect()),
        RawValue::Map(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, item) in entries {
                map.insert(force_utf8(key), force_utf8_map(item));
            }
            Value::Object(map)
        }
    }
}
