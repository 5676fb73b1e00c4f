//! Route definitions for the `/authors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::authors;
use crate::state::AppState;

/// Routes mounted at `/authors`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /count         -> count
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/quotes   -> quotes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(authors::list).post(authors::create))
        .route("/count", get(authors::count))
        .route(
            "/{id}",
            get(authors::get_by_id)
                .put(authors::update)
                .delete(authors::delete),
        )
        .route("/{id}/quotes", get(authors::quotes))
}
