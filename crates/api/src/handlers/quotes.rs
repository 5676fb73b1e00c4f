//! Handlers for the `/quotes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use quotebook_core::types::DbId;
use quotebook_db::models::quote::{CreateQuote, Quote, QuoteFilter, UpdateQuote};
use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::{JsonBody, PathParams, QueryParams};
use crate::state::AppState;

/// Body of `GET /quotes/count`.
#[derive(Debug, Serialize)]
pub struct QuoteCount {
    pub quotes: i64,
}

/// POST /quotes
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<(StatusCode, Json<Quote>)> {
    let input = CreateQuote::from_json(&body)?;
    let quote = state.store.create_quote(&input).await?;
    Ok((StatusCode::CREATED, Json(quote)))
}

/// GET /quotes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Quote>>> {
    let quotes = state.store.list_quotes(&QuoteFilter::default()).await?;
    Ok(Json(quotes))
}

/// GET /quotes/filter?author_id=&rating=&text=&id=
///
/// Every term must match exactly. Unknown or repeated keys are rejected.
pub async fn filter(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<Vec<(String, String)>>,
) -> AppResult<Json<Vec<Quote>>> {
    let filter = QuoteFilter::from_params(params)?;
    let quotes = state.store.list_quotes(&filter).await?;
    Ok(Json(quotes))
}

/// GET /quotes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<Json<Quote>> {
    let quote = state.store.find_quote(id).await?;
    Ok(Json(quote))
}

/// PUT /quotes/{id}
///
/// Partial update: fields absent from the body are left unchanged.
pub async fn update(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Json<Quote>> {
    let input = UpdateQuote::from_json(id, &body)?;
    let quote = state.store.update_quote(id, &input).await?;
    Ok(Json(quote))
}

/// DELETE /quotes/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<StatusCode> {
    state.store.delete_quote(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /quotes/count
pub async fn count(State(state): State<AppState>) -> AppResult<Json<QuoteCount>> {
    let quotes = state.store.count_quotes().await?;
    Ok(Json(QuoteCount { quotes }))
}

/// GET /quotes/random
pub async fn random(State(state): State<AppState>) -> AppResult<Json<Quote>> {
    let quote = state.store.random_quote().await?;
    Ok(Json(quote))
}
