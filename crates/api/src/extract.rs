//! Extractors whose rejections render as [`AppError`] JSON bodies.
//!
//! Axum's stock `Json`, `Path` and `Query` reject with plain-text bodies and
//! a mix of 400/415/422 statuses. These wrappers funnel every malformed input
//! into a 400 `BAD_REQUEST` with the usual `{ "error", "code" }` envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParams<T>(pub T);

/// Query-string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
