//! Demo data loaded when `SEED_DEMO_DATA=true`.

use crate::models::author::CreateAuthor;
use crate::models::quote::CreateQuote;
use crate::repositories::{Store, StoreError};

/// `(name, surname, text)` triples inserted by [`seed_demo_data`].
pub const DEMO_QUOTES: &[(&str, &str, &str)] = &[
    (
        "Rick",
        "Cook",
        "Programming today is a race between software engineers striving to build bigger \
         and better idiot-proof programs, and the Universe trying to produce bigger and \
         better idiots. So far, the Universe is winning.",
    ),
    (
        "Waldi",
        "Ravens",
        "Programming in C is like a fast dance on a newly waxed dance floor by people \
         carrying razors.",
    ),
    (
        "Mosher's Law of Software Engineering",
        "",
        "Don't worry if it doesn't work right. If everything did, you'd be out of a job.",
    ),
    (
        "Yogi",
        "Berra",
        "In theory, there is no difference between theory and practice. In practice, there is.",
    ),
];

/// Insert the demo authors and quotes into an empty store.
///
/// Returns the number of quotes inserted; zero when the store already holds
/// authors or quotes.
pub async fn seed_demo_data(store: &dyn Store) -> Result<usize, StoreError> {
    if store.count_quotes().await? > 0 || store.count_authors().await? > 0 {
        tracing::info!("Store is not empty, skipping demo seed");
        return Ok(0);
    }

    for (name, surname, text) in DEMO_QUOTES {
        let author = store
            .create_author(&CreateAuthor::new(*name, *surname))
            .await?;
        store
            .create_quote(&CreateQuote::new(author.id, *text))
            .await?;
    }

    tracing::info!(count = DEMO_QUOTES.len(), "Seeded demo quotes");
    Ok(DEMO_QUOTES.len())
}
