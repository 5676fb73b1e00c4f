//! Store traits and their implementations.
//!
//! Handlers only ever see `Arc<dyn Store>`, so the backing implementation is
//! chosen once at startup:
//!
//! - [`SqliteStore`] runs parameterized SQL against a file-backed pool.
//! - [`MemoryStore`] keeps both tables behind a single async mutex.
//!
//! Both implementations report missing records as [`CoreError::NotFound`]
//! and never retry.

use async_trait::async_trait;
use quotebook_core::error::CoreError;
use quotebook_core::types::DbId;

use crate::models::author::{Author, CreateAuthor, UpdateAuthor};
use crate::models::quote::{CreateQuote, Quote, QuoteFilter, UpdateQuote};

mod author_repo;
mod memory_store;
mod quote_repo;
mod sqlite_store;

pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;

/// Errors surfaced by store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain-level error (missing record, conflict, ...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure from the SQLite driver.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::Core(CoreError::NotFound { entity, id })
    }
}

/// Quote persistence operations.
#[async_trait]
pub trait QuoteRepo: Send + Sync {
    /// Insert a quote, returning it with its assigned id.
    ///
    /// Fails with `NotFound` if `input.author_id` does not exist.
    async fn create_quote(&self, input: &CreateQuote) -> Result<Quote, StoreError>;

    /// Fetch a quote by id.
    async fn find_quote(&self, id: DbId) -> Result<Quote, StoreError>;

    /// List quotes ordered by id, keeping only exact matches of `filter`.
    ///
    /// A filter naming an author that does not exist is `NotFound`, not an
    /// empty list.
    async fn list_quotes(&self, filter: &QuoteFilter) -> Result<Vec<Quote>, StoreError>;

    /// Apply the present fields of `input` to an existing quote.
    async fn update_quote(&self, id: DbId, input: &UpdateQuote) -> Result<Quote, StoreError>;

    /// Permanently remove a quote.
    async fn delete_quote(&self, id: DbId) -> Result<(), StoreError>;

    /// Pick one quote uniformly at random. `Empty` when there are none.
    async fn random_quote(&self) -> Result<Quote, StoreError>;

    async fn count_quotes(&self) -> Result<i64, StoreError>;

    /// All quotes owned by one author.
    async fn list_quotes_by_author(&self, author_id: DbId) -> Result<Vec<Quote>, StoreError> {
        self.list_quotes(&QuoteFilter::by_author(author_id)).await
    }
}

/// Author persistence operations.
#[async_trait]
pub trait AuthorRepo: Send + Sync {
    /// Insert an author. A duplicate name/surname pair is a `Conflict`.
    async fn create_author(&self, input: &CreateAuthor) -> Result<Author, StoreError>;

    async fn find_author(&self, id: DbId) -> Result<Author, StoreError>;

    /// List authors ordered by id.
    async fn list_authors(&self) -> Result<Vec<Author>, StoreError>;

    async fn update_author(&self, id: DbId, input: &UpdateAuthor) -> Result<Author, StoreError>;

    /// Permanently remove an author together with all of its quotes.
    async fn delete_author(&self, id: DbId) -> Result<(), StoreError>;

    async fn count_authors(&self) -> Result<i64, StoreError>;
}

/// A complete backing store for the API.
#[async_trait]
pub trait Store: QuoteRepo + AuthorRepo {
    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    /// Verify the store can serve requests.
    async fn health_check(&self) -> Result<(), StoreError>;
}
