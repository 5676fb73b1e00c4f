//! Quote field allow-list.
//!
//! Payloads are parsed key by key into [`QuoteField`] values. Any key outside
//! [`QUOTE_FIELDS`] is rejected, so a partially valid payload never reaches a
//! store.

use serde_json::Value;

use crate::error::CoreError;
use crate::fields;
use crate::rating::clamp_rating;
use crate::types::DbId;

/// Keys accepted in quote payloads and quote filters.
pub const QUOTE_FIELDS: &[&str] = &["id", "author_id", "text", "rating"];

/// A single validated quote field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteField {
    Id(DbId),
    AuthorId(DbId),
    Text(String),
    /// Already clamped for payloads; taken verbatim for filters.
    Rating(i32),
}

/// Parse a create payload.
///
/// `id` is recognized but dropped: ids are always assigned by the store.
/// `author_id` and `text` are required.
pub fn parse_create(body: &Value) -> Result<Vec<QuoteField>, CoreError> {
    let parsed = parse_payload(body)?;
    for required in ["author_id", "text"] {
        if !parsed.iter().any(|f| f.key() == required) {
            return Err(CoreError::invalid_field(required, "field is required"));
        }
    }
    Ok(parsed
        .into_iter()
        .filter(|f| !matches!(f, QuoteField::Id(_)))
        .collect())
}

/// Parse a partial-update payload for the quote addressed by `id`.
///
/// A body `id` must name the same record; it is never written.
pub fn parse_update(id: DbId, body: &Value) -> Result<Vec<QuoteField>, CoreError> {
    let parsed = parse_payload(body)?;
    let mut changes = Vec::with_capacity(parsed.len());
    for field in parsed {
        match field {
            QuoteField::Id(body_id) => fields::same_id("id", body_id, id)?,
            other => changes.push(other),
        }
    }
    Ok(changes)
}

/// Parse textual filter terms (a query string). Numeric fields are coerced.
///
/// Each key may appear at most once; `?rating=1&rating=5` is rejected rather
/// than letting one value win.
pub fn parse_filter<I, K, V>(params: I) -> Result<Vec<QuoteField>, CoreError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut terms: Vec<QuoteField> = Vec::new();
    for (key, raw) in params {
        let (key, raw) = (key.as_ref(), raw.as_ref());
        fields::ensure_known(key, QUOTE_FIELDS)?;
        if terms.iter().any(|t| t.key() == key) {
            return Err(CoreError::invalid_field(key, "filter term given more than once"));
        }
        terms.push(match key {
            "id" => QuoteField::Id(fields::integer_param(key, raw)?),
            "author_id" => QuoteField::AuthorId(fields::integer_param(key, raw)?),
            "text" => QuoteField::Text(raw.to_owned()),
            _ => QuoteField::Rating(fields::integer_param(key, raw)?),
        });
    }
    Ok(terms)
}

fn parse_payload(body: &Value) -> Result<Vec<QuoteField>, CoreError> {
    fields::as_object(body)?
        .iter()
        .map(|(key, value)| -> Result<QuoteField, CoreError> {
            fields::ensure_known(key, QUOTE_FIELDS)?;
            Ok(match key.as_str() {
                "id" => QuoteField::Id(fields::integer(key, value)?),
                "author_id" => QuoteField::AuthorId(fields::integer(key, value)?),
                "text" => QuoteField::Text(fields::string(key, value)?),
                _ => QuoteField::Rating(clamp_rating(value)),
            })
        })
        .collect()
}

impl QuoteField {
    /// The payload key this field was read from.
    pub fn key(&self) -> &'static str {
        match self {
            QuoteField::Id(_) => "id",
            QuoteField::AuthorId(_) => "author_id",
            QuoteField::Text(_) => "text",
            QuoteField::Rating(_) => "rating",
        }
    }
}
