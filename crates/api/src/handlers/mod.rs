//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers validate payloads through the DTO constructors in
//! `quotebook_db::models`, delegate to the [`Store`](quotebook_db::repositories::Store)
//! in [`AppState`](crate::state::AppState), and map errors via
//! [`AppError`](crate::error::AppError).

pub mod authors;
pub mod quotes;
