//! Author field allow-list.

use serde_json::Value;

use crate::error::CoreError;
use crate::fields;
use crate::types::DbId;

/// Keys accepted in author payloads.
pub const AUTHOR_FIELDS: &[&str] = &["id", "name", "surname"];

/// A single validated author field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorField {
    Name(String),
    Surname(String),
}

/// Parse a create payload. `name` is required, `id` is ignored.
pub fn parse_create(body: &Value) -> Result<Vec<AuthorField>, CoreError> {
    let parsed = parse_payload(body, None)?;
    if !parsed.iter().any(|f| matches!(f, AuthorField::Name(_))) {
        return Err(CoreError::invalid_field("name", "field is required"));
    }
    Ok(parsed)
}

/// Parse a partial-update payload for the author addressed by `id`.
pub fn parse_update(id: DbId, body: &Value) -> Result<Vec<AuthorField>, CoreError> {
    parse_payload(body, Some(id))
}

fn parse_payload(body: &Value, addressed: Option<DbId>) -> Result<Vec<AuthorField>, CoreError> {
    let mut parsed = Vec::new();
    for (key, value) in fields::as_object(body)? {
        fields::ensure_known(key, AUTHOR_FIELDS)?;
        match key.as_str() {
            "id" => match addressed {
                Some(expected) => fields::matching_id(key, value, expected)?,
                None => {
                    fields::integer(key, value)?;
                }
            },
            "name" => parsed.push(AuthorField::Name(fields::non_empty_string(key, value)?)),
            _ => parsed.push(AuthorField::Surname(fields::string(key, value)?)),
        }
    }
    Ok(parsed)
}
