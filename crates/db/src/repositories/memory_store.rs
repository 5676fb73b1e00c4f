//! In-memory implementation of the store traits.

use std::collections::BTreeMap;

use async_trait::async_trait;
use quotebook_core::error::CoreError;
use quotebook_core::types::DbId;
use rand::seq::IteratorRandom;
use tokio::sync::Mutex;

use super::{AuthorRepo, QuoteRepo, Store, StoreError};
use crate::models::author::{Author, CreateAuthor, UpdateAuthor};
use crate::models::quote::{CreateQuote, Quote, QuoteFilter, UpdateQuote};

#[derive(Debug, Default)]
struct Tables {
    authors: BTreeMap<DbId, Author>,
    quotes: BTreeMap<DbId, Quote>,
    /// Last id handed out per table. Ids are never reused after a delete.
    last_author_id: DbId,
    last_quote_id: DbId,
}

impl Tables {
    fn ensure_author(&self, id: DbId) -> Result<(), StoreError> {
        if self.authors.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::not_found("Author", id))
        }
    }

    fn ensure_unique_author(&self, candidate: &Author) -> Result<(), StoreError> {
        let taken = self.authors.values().any(|a| {
            a.id != candidate.id && a.name == candidate.name && a.surname == candidate.surname
        });
        if taken {
            return Err(StoreError::Core(CoreError::Conflict(format!(
                "Author '{} {}' already exists",
                candidate.name, candidate.surname
            ))));
        }
        Ok(())
    }
}

/// Store that keeps everything in process memory.
///
/// A single mutex guards both tables and the id counters, so every operation
/// observes and leaves a consistent state.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuoteRepo for MemoryStore {
    async fn create_quote(&self, input: &CreateQuote) -> Result<Quote, StoreError> {
        let mut tables = self.tables.lock().await;
        tables.ensure_author(input.author_id)?;

        tables.last_quote_id += 1;
        let quote = Quote {
            id: tables.last_quote_id,
            author_id: input.author_id,
            text: input.text.clone(),
            rating: input.rating,
        };
        tables.quotes.insert(quote.id, quote.clone());

        tracing::debug!(quote_id = quote.id, author_id = quote.author_id, "Quote created");
        Ok(quote)
    }

    async fn find_quote(&self, id: DbId) -> Result<Quote, StoreError> {
        let tables = self.tables.lock().await;
        tables
            .quotes
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Quote", id))
    }

    async fn list_quotes(&self, filter: &QuoteFilter) -> Result<Vec<Quote>, StoreError> {
        let tables = self.tables.lock().await;
        if let Some(author_id) = filter.author_id {
            tables.ensure_author(author_id)?;
        }
        Ok(tables
            .quotes
            .values()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect())
    }

    async fn update_quote(&self, id: DbId, input: &UpdateQuote) -> Result<Quote, StoreError> {
        let mut tables = self.tables.lock().await;
        if !tables.quotes.contains_key(&id) {
            return Err(StoreError::not_found("Quote", id));
        }
        if let Some(author_id) = input.author_id {
            tables.ensure_author(author_id)?;
        }

        let quote = tables
            .quotes
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("Quote", id))?;
        input.apply_to(quote);

        tracing::debug!(quote_id = id, "Quote updated");
        Ok(quote.clone())
    }

    async fn delete_quote(&self, id: DbId) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        tables
            .quotes
            .remove(&id)
            .ok_or_else(|| StoreError::not_found("Quote", id))?;
        tracing::debug!(quote_id = id, "Quote deleted");
        Ok(())
    }

    async fn random_quote(&self) -> Result<Quote, StoreError> {
        let tables = self.tables.lock().await;
        tables
            .quotes
            .values()
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(StoreError::Core(CoreError::Empty { entity: "Quote" }))
    }

    async fn count_quotes(&self) -> Result<i64, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.quotes.len() as i64)
    }
}

#[async_trait]
impl AuthorRepo for MemoryStore {
    async fn create_author(&self, input: &CreateAuthor) -> Result<Author, StoreError> {
        let mut tables = self.tables.lock().await;
        let mut author = Author {
            id: 0,
            name: input.name.clone(),
            surname: input.surname.clone(),
        };
        tables.ensure_unique_author(&author)?;

        tables.last_author_id += 1;
        author.id = tables.last_author_id;
        tables.authors.insert(author.id, author.clone());

        tracing::debug!(author_id = author.id, "Author created");
        Ok(author)
    }

    async fn find_author(&self, id: DbId) -> Result<Author, StoreError> {
        let tables = self.tables.lock().await;
        tables
            .authors
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Author", id))
    }

    async fn list_authors(&self) -> Result<Vec<Author>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.authors.values().cloned().collect())
    }

    async fn update_author(&self, id: DbId, input: &UpdateAuthor) -> Result<Author, StoreError> {
        let mut tables = self.tables.lock().await;
        let mut author = tables
            .authors
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Author", id))?;
        input.apply_to(&mut author);
        tables.ensure_unique_author(&author)?;
        tables.authors.insert(id, author.clone());

        tracing::debug!(author_id = id, "Author updated");
        Ok(author)
    }

    async fn delete_author(&self, id: DbId) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        tables
            .authors
            .remove(&id)
            .ok_or_else(|| StoreError::not_found("Author", id))?;
        tables.quotes.retain(|_, q| q.author_id != id);
        tracing::debug!(author_id = id, "Author deleted");
        Ok(())
    }

    async fn count_authors(&self) -> Result<i64, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.authors.len() as i64)
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
