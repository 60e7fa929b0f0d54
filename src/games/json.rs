//! Field readers for loosely-shaped stored records.
//!
//! Stored blobs were written by several versions of the tool, so every read
//! here answers "is this field present with a usable type" and never fails.

use serde_json::Value;

use crate::core::player::PlayerId;

/// Integer field; JSON floats are truncated.
pub(crate) fn int_field(raw: &Value, key: &str) -> Option<i64> {
    let value = raw.get(key)?;
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
}

/// Non-empty string field.
pub(crate) fn str_field<'a>(raw: &'a Value, key: &str) -> Option<&'a str> {
    raw.get(key)?.as_str().filter(|s| !s.is_empty())
}

/// Player id field; absent or empty reads as the empty id.
pub(crate) fn player_field(raw: &Value, key: &str) -> PlayerId {
    str_field(raw, key).map(PlayerId::new).unwrap_or_default()
}

/// Array field, `None` if absent or not an array.
pub(crate) fn array_field<'a>(raw: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    raw.get(key)?.as_array()
}

/// Array field that is present and non-empty.
pub(crate) fn non_empty_array<'a>(raw: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    array_field(raw, key).filter(|items| !items.is_empty())
}
