pub mod authors;
pub mod health;
pub mod quotes;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /quotes                 list, create
/// /quotes/count           count
/// /quotes/random          random quote
/// /quotes/filter          filtered list (?id=&author_id=&text=&rating=)
/// /quotes/{id}            get, update, delete
///
/// /authors                list, create
/// /authors/count          count
/// /authors/{id}           get, update, delete (cascades to quotes)
/// /authors/{id}/quotes    quotes of one author
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/quotes", quotes::router())
        .nest("/authors", authors::router())
}
