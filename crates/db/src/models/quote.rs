//! Quote entity model and DTOs.

use quotebook_core::error::CoreError;
use quotebook_core::quote::{self, QuoteField};
use quotebook_core::rating::DEFAULT_RATING;
use quotebook_core::types::DbId;
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

/// A row from the `quotes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Quote {
    pub id: DbId,
    pub author_id: DbId,
    pub text: String,
    pub rating: i32,
}

/// DTO for creating a quote. Built from a validated JSON payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateQuote {
    pub author_id: DbId,
    pub text: String,
    /// Defaults to 1 when the payload has no usable rating.
    pub rating: i32,
}

impl CreateQuote {
    pub fn new(author_id: DbId, text: impl Into<String>) -> Self {
        Self {
            author_id,
            text: text.into(),
            rating: DEFAULT_RATING,
        }
    }

    /// `parse_create` guarantees `author_id` and `text` are present.
    pub fn from_json(body: &Value) -> Result<Self, CoreError> {
        let mut input = Self::new(0, String::new());
        for field in quote::parse_create(body)? {
            match field {
                QuoteField::AuthorId(v) => input.author_id = v,
                QuoteField::Text(v) => input.text = v,
                QuoteField::Rating(v) => input.rating = v,
                QuoteField::Id(_) => {}
            }
        }
        Ok(input)
    }
}

/// DTO for a partial quote update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateQuote {
    pub author_id: Option<DbId>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}

impl UpdateQuote {
    pub fn from_json(id: DbId, body: &Value) -> Result<Self, CoreError> {
        let mut update = Self::default();
        for field in quote::parse_update(id, body)? {
            match field {
                QuoteField::AuthorId(v) => update.author_id = Some(v),
                QuoteField::Text(v) => update.text = Some(v),
                QuoteField::Rating(v) => update.rating = Some(v),
                QuoteField::Id(_) => {}
            }
        }
        Ok(update)
    }

    /// Merge the present fields into `quote`.
    pub fn apply_to(&self, quote: &mut Quote) {
        if let Some(author_id) = self.author_id {
            quote.author_id = author_id;
        }
        if let Some(text) = &self.text {
            quote.text.clone_from(text);
        }
        if let Some(rating) = self.rating {
            quote.rating = rating;
        }
    }
}

/// Exact-match filter over quote fields. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFilter {
    pub id: Option<DbId>,
    pub author_id: Option<DbId>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}

impl QuoteFilter {
    pub fn by_author(author_id: DbId) -> Self {
        Self {
            author_id: Some(author_id),
            ..Self::default()
        }
    }

    /// Build a filter from query-string pairs.
    pub fn from_params<I, K, V>(params: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Self::default();
        for term in quote::parse_filter(params)? {
            match term {
                QuoteField::Id(v) => filter.id = Some(v),
                QuoteField::AuthorId(v) => filter.author_id = Some(v),
                QuoteField::Text(v) => filter.text = Some(v),
                QuoteField::Rating(v) => filter.rating = Some(v),
            }
        }
        Ok(filter)
    }

    pub fn matches(&self, quote: &Quote) -> bool {
        self.id.map_or(true, |id| quote.id == id)
            && self.author_id.map_or(true, |id| quote.author_id == id)
            && self.text.as_ref().map_or(true, |text| &quote.text == text)
            && self.rating.map_or(true, |rating| quote.rating == rating)
    }
}
