//! Author entity model and DTOs.

use quotebook_core::author::{self, AuthorField};
use quotebook_core::error::CoreError;
use quotebook_core::types::DbId;
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

/// A row from the `authors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
    pub surname: String,
}

/// DTO for creating an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAuthor {
    pub name: String,
    /// Empty when the payload omits it.
    pub surname: String,
}

impl CreateAuthor {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
        }
    }

    pub fn from_json(body: &Value) -> Result<Self, CoreError> {
        let mut input = Self::new(String::new(), String::new());
        for field in author::parse_create(body)? {
            match field {
                AuthorField::Name(v) => input.name = v,
                AuthorField::Surname(v) => input.surname = v,
            }
        }
        Ok(input)
    }
}

/// DTO for a partial author update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateAuthor {
    pub name: Option<String>,
    pub surname: Option<String>,
}

impl UpdateAuthor {
    pub fn from_json(id: DbId, body: &Value) -> Result<Self, CoreError> {
        let mut update = Self::default();
        for field in author::parse_update(id, body)? {
            match field {
                AuthorField::Name(v) => update.name = Some(v),
                AuthorField::Surname(v) => update.surname = Some(v),
            }
        }
        Ok(update)
    }

    /// Merge the present fields into `author`.
    pub fn apply_to(&self, author: &mut Author) {
        if let Some(name) = &self.name {
            author.name.clone_from(name);
        }
        if let Some(surname) = &self.surname {
            author.surname.clone_from(surname);
        }
    }
}
