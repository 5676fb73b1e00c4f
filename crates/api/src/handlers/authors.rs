//! Handlers for the `/authors` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use quotebook_core::types::DbId;
use quotebook_db::models::author::{Author, CreateAuthor, UpdateAuthor};
use quotebook_db::models::quote::Quote;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::{JsonBody, PathParams};
use crate::state::AppState;

/// Body of `GET /authors/count`.
#[derive(Debug, Serialize)]
pub struct AuthorCount {
    pub authors: i64,
}

/// POST /authors
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let input = CreateAuthor::from_json(&body)?;
    let author = state.store.create_author(&input).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// GET /authors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.store.list_authors().await?;
    Ok(Json(authors))
}

/// GET /authors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<Json<Author>> {
    let author = state.store.find_author(id).await?;
    Ok(Json(author))
}

/// PUT /authors/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Json<Author>> {
    let input = UpdateAuthor::from_json(id, &body)?;
    let author = state.store.update_author(id, &input).await?;
    Ok(Json(author))
}

/// DELETE /authors/{id}
///
/// Removes the author's quotes as well.
pub async fn delete(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<StatusCode> {
    state.store.delete_author(id).await?;
    tracing::info!(author_id = id, "Author and their quotes deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /authors/count
pub async fn count(State(state): State<AppState>) -> AppResult<Json<AuthorCount>> {
    let authors = state.store.count_authors().await?;
    Ok(Json(AuthorCount { authors }))
}

/// GET /authors/{id}/quotes
pub async fn quotes(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<Json<Vec<Quote>>> {
    let quotes = state.store.list_quotes_by_author(id).await?;
    Ok(Json(quotes))
}
