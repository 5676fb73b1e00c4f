//! Route definitions for the `/quotes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::quotes;
use crate::state::AppState;

/// Routes mounted at `/quotes`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /count     -> count
/// GET    /random    -> random
/// GET    /filter    -> filter
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(quotes::list).post(quotes::create))
        .route("/count", get(quotes::count))
        .route("/random", get(quotes::random))
        .route("/filter", get(quotes::filter))
        .route(
            "/{id}",
            get(quotes::get_by_id)
                .put(quotes::update)
                .delete(quotes::delete),
        )
}
