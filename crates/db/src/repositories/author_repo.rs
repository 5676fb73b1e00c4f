//! SQLite implementation of [`AuthorRepo`].

use async_trait::async_trait;
use quotebook_core::types::DbId;

use super::sqlite_store::{conflict_on_unique, SqliteStore};
use super::{AuthorRepo, StoreError};
use crate::models::author::{Author, CreateAuthor, UpdateAuthor};

const COLUMNS: &str = "id, name, surname";

#[async_trait]
impl AuthorRepo for SqliteStore {
    async fn create_author(&self, input: &CreateAuthor) -> Result<Author, StoreError> {
        let query = format!(
            "INSERT INTO authors (name, surname)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        let author = sqlx::query_as::<_, Author>(&query)
            .bind(&input.name)
            .bind(&input.surname)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                conflict_on_unique(e, || {
                    format!("Author '{} {}' already exists", input.name, input.surname)
                })
            })?;

        tracing::debug!(author_id = author.id, "Author created");
        Ok(author)
    }

    async fn find_author(&self, id: DbId) -> Result<Author, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE id = ?");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found("Author", id))
    }

    async fn list_authors(&self) -> Result<Vec<Author>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM authors ORDER BY id");
        let authors = sqlx::query_as::<_, Author>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(authors)
    }

    async fn update_author(&self, id: DbId, input: &UpdateAuthor) -> Result<Author, StoreError> {
        let query = format!(
            "UPDATE authors SET
                name = COALESCE(?, name),
                surname = COALESCE(?, surname)
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let author = sqlx::query_as::<_, Author>(&query)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                conflict_on_unique(e, || "Another author already has this name and surname".into())
            })?
            .ok_or_else(|| StoreError::not_found("Author", id))?;

        tracing::debug!(author_id = id, "Author updated");
        Ok(author)
    }

    async fn delete_author(&self, id: DbId) -> Result<(), StoreError> {
        // Quotes go with it through ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Author", id));
        }
        tracing::debug!(author_id = id, "Author deleted");
        Ok(())
    }

    async fn count_authors(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM authors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
