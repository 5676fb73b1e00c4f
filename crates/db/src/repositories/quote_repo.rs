//! SQLite implementation of [`QuoteRepo`].

use async_trait::async_trait;
use quotebook_core::error::CoreError;
use quotebook_core::types::DbId;
use sqlx::{QueryBuilder, Sqlite};

use super::sqlite_store::{row_exists, SqliteStore};
use super::{QuoteRepo, StoreError};
use crate::models::quote::{CreateQuote, Quote, QuoteFilter, UpdateQuote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author_id, text, rating";

#[async_trait]
impl QuoteRepo for SqliteStore {
    async fn create_quote(&self, input: &CreateQuote) -> Result<Quote, StoreError> {
        // The author check rides in the INSERT itself: no row back means no author.
        let query = format!(
            "INSERT INTO quotes (author_id, text, rating)
             SELECT ?, ?, ?
             WHERE EXISTS (SELECT 1 FROM authors WHERE id = ?)
             RETURNING {COLUMNS}"
        );
        let quote = sqlx::query_as::<_, Quote>(&query)
            .bind(input.author_id)
            .bind(&input.text)
            .bind(input.rating)
            .bind(input.author_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found("Author", input.author_id))?;

        tracing::debug!(quote_id = quote.id, author_id = quote.author_id, "Quote created");
        Ok(quote)
    }

    async fn find_quote(&self, id: DbId) -> Result<Quote, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM quotes WHERE id = ?");
        sqlx::query_as::<_, Quote>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found("Quote", id))
    }

    async fn list_quotes(&self, filter: &QuoteFilter) -> Result<Vec<Quote>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        if let Some(author_id) = filter.author_id {
            if !row_exists(&mut conn, "authors", author_id).await? {
                return Err(StoreError::not_found("Author", author_id));
            }
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!("SELECT {COLUMNS} FROM quotes"));
        let mut separator = " WHERE ";
        if let Some(id) = filter.id {
            qb.push(separator).push("id = ").push_bind(id);
            separator = " AND ";
        }
        if let Some(author_id) = filter.author_id {
            qb.push(separator).push("author_id = ").push_bind(author_id);
            separator = " AND ";
        }
        if let Some(text) = &filter.text {
            qb.push(separator).push("text = ").push_bind(text.clone());
            separator = " AND ";
        }
        if let Some(rating) = filter.rating {
            qb.push(separator).push("rating = ").push_bind(rating);
        }
        qb.push(" ORDER BY id");

        let quotes = qb.build_query_as::<Quote>().fetch_all(&mut *conn).await?;
        Ok(quotes)
    }

    async fn update_quote(&self, id: DbId, input: &UpdateQuote) -> Result<Quote, StoreError> {
        let query = format!(
            "UPDATE quotes SET
                author_id = COALESCE(?, author_id),
                text = COALESCE(?, text),
                rating = COALESCE(?, rating)
             WHERE id = ?
               AND (? IS NULL OR EXISTS (SELECT 1 FROM authors WHERE id = ?))
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Quote>(&query)
            .bind(input.author_id)
            .bind(&input.text)
            .bind(input.rating)
            .bind(id)
            .bind(input.author_id)
            .bind(input.author_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(quote) = updated else {
            // Nothing changed; work out which reference was missing.
            let mut conn = self.pool.acquire().await?;
            let quote_exists = row_exists(&mut conn, "quotes", id).await?;
            return Err(match input.author_id {
                Some(author_id) if quote_exists => StoreError::not_found("Author", author_id),
                _ => StoreError::not_found("Quote", id),
            });
        };

        tracing::debug!(quote_id = id, "Quote updated");
        Ok(quote)
    }

    async fn delete_quote(&self, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Quote", id));
        }
        tracing::debug!(quote_id = id, "Quote deleted");
        Ok(())
    }

    async fn random_quote(&self) -> Result<Quote, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM quotes ORDER BY RANDOM() LIMIT 1");
        sqlx::query_as::<_, Quote>(&query)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::Core(CoreError::Empty { entity: "Quote" }))
    }

    async fn count_quotes(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM quotes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
