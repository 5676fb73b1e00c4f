//! Typed extraction helpers shared by the per-entity allow-lists.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::DbId;

/// A JSON object payload.
pub type JsonMap = Map<String, Value>;

/// Require the request body to be a JSON object.
pub fn as_object(body: &Value) -> Result<&JsonMap, CoreError> {
    body.as_object()
        .ok_or_else(|| CoreError::invalid_field("body", "expected a JSON object"))
}

/// Reject `key` unless it appears in `allowed`.
pub fn ensure_known(key: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&key) {
        Ok(())
    } else {
        Err(CoreError::invalid_field(
            key,
            format!("unrecognized field, expected one of: {}", allowed.join(", ")),
        ))
    }
}

/// Read a JSON integer id.
pub fn integer(field: &str, value: &Value) -> Result<DbId, CoreError> {
    value
        .as_i64()
        .ok_or_else(|| CoreError::invalid_field(field, "expected an integer"))
}

/// Read a JSON string.
pub fn string(field: &str, value: &Value) -> Result<String, CoreError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| CoreError::invalid_field(field, "expected a string"))
}

/// Read a JSON string that must contain something other than whitespace.
pub fn non_empty_string(field: &str, value: &Value) -> Result<String, CoreError> {
    let s = string(field, value)?;
    if s.trim().is_empty() {
        return Err(CoreError::invalid_field(field, "must not be empty"));
    }
    Ok(s)
}

/// Coerce a textual query parameter into an integer.
pub fn integer_param<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::invalid_field(field, format!("'{raw}' is not an integer")))
}

/// Check a body `id` against the id addressed by the request path.
pub fn matching_id(field: &str, value: &Value, expected: DbId) -> Result<(), CoreError> {
    same_id(field, integer(field, value)?, expected)
}

/// Reject an already-parsed `id` that names a different record than `expected`.
pub fn same_id(field: &str, id: DbId, expected: DbId) -> Result<(), CoreError> {
    if id != expected {
        return Err(CoreError::invalid_field(
            field,
            format!("id {id} does not match the addressed record {expected}"),
        ));
    }
    Ok(())
}
