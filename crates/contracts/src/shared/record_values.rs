//! Loosely-typed view of a master-data row: field name -> primitive value.

use serde_json::{Map, Value};

pub type RecordValues = Map<String, Value>;

/// Keys owned by the storage layer. The client never sends them in a body.
pub const SERVER_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

/// Drop storage-owned keys from an outgoing body
pub fn strip_server_fields(mut values: RecordValues) -> RecordValues {
    for key in SERVER_FIELDS {
        values.remove(key);
    }
    values
}

/// String form of a value, as used by search and cell rendering.
///
/// `null` yields an empty string; strings are not quoted.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Read the `id` of a row as a string
pub fn record_id(values: &RecordValues) -> Option<String> {
    match values.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// `serialize_with` for optional amounts: whole values are written as
/// integers, so `1000000.0` reads back as `1000000`.
pub mod whole_number {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                s.serialize_some(&(*f as i64))
            }
            Some(f) => s.serialize_some(f),
            None => s.serialize_none(),
        }
    }
}
