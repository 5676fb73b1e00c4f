//! Behaviour checks shared by every store implementation.
//!
//! Each function takes a fresh, empty store and panics on the first
//! deviation, so `sqlite_store.rs` and `memory_store.rs` can run the exact
//! same expectations against both backends.

#![allow(dead_code)]

use std::sync::Arc;

use assert_matches::assert_matches;
use quotebook_core::error::CoreError;
use quotebook_db::models::author::{Author, CreateAuthor, UpdateAuthor};
use quotebook_db::models::quote::{CreateQuote, QuoteFilter, UpdateQuote};
use quotebook_db::repositories::{Store, StoreError};
use serde_json::json;
use tokio::task::JoinSet;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn author(store: &dyn Store, name: &str, surname: &str) -> Author {
    store
        .create_author(&CreateAuthor::new(name, surname))
        .await
        .unwrap()
}

fn quote_json(author_id: i64, text: &str, rating: serde_json::Value) -> CreateQuote {
    CreateQuote::from_json(&json!({"author_id": author_id, "text": text, "rating": rating}))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

pub async fn create_assigns_ids_and_clamps_rating(store: &dyn Store) {
    let rick = author(store, "Rick", "Cook").await;

    let high = store
        .create_quote(&quote_json(rick.id, "out of range", json!(7)))
        .await
        .unwrap();
    let mid = store
        .create_quote(&quote_json(rick.id, "in range", json!(3)))
        .await
        .unwrap();

    assert_eq!(high.rating, 1);
    assert_eq!(mid.rating, 3);
    assert!(mid.id > high.id);
    assert_eq!(store.find_quote(mid.id).await.unwrap(), mid);
}

pub async fn create_with_unknown_author_is_not_found(store: &dyn Store) {
    let err = store
        .create_quote(&CreateQuote::new(404, "orphan"))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        StoreError::Core(CoreError::NotFound { entity: "Author", id: 404 })
    );
    assert_eq!(store.count_quotes().await.unwrap(), 0);
}

pub async fn deleted_quote_is_gone_and_id_not_reused(store: &dyn Store) {
    let rick = author(store, "Rick", "Cook").await;
    let first = store
        .create_quote(&CreateQuote::new(rick.id, "first"))
        .await
        .unwrap();

    store.delete_quote(first.id).await.unwrap();

    assert_matches!(
        store.find_quote(first.id).await,
        Err(StoreError::Core(CoreError::NotFound { entity: "Quote", .. }))
    );
    assert_matches!(
        store.delete_quote(first.id).await,
        Err(StoreError::Core(CoreError::NotFound { .. }))
    );

    let second = store
        .create_quote(&CreateQuote::new(rick.id, "second"))
        .await
        .unwrap();
    assert!(second.id > first.id);
}

pub async fn update_merges_present_fields_only(store: &dyn Store) {
    let rick = author(store, "Rick", "Cook").await;
    let yogi = author(store, "Yogi", "Berra").await;
    let quote = store
        .create_quote(&quote_json(rick.id, "original", json!(4)))
        .await
        .unwrap();

    let update = UpdateQuote::from_json(quote.id, &json!({"text": "edited"})).unwrap();
    let edited = store.update_quote(quote.id, &update).await.unwrap();
    assert_eq!(edited.text, "edited");
    assert_eq!(edited.rating, 4);
    assert_eq!(edited.author_id, rick.id);

    let update = UpdateQuote::from_json(quote.id, &json!({"author_id": yogi.id, "rating": 9}))
        .unwrap();
    let moved = store.update_quote(quote.id, &update).await.unwrap();
    assert_eq!(moved.author_id, yogi.id);
    assert_eq!(moved.rating, 1);
    assert_eq!(moved.text, "edited");
}

pub async fn update_rejects_missing_quote_or_author(store: &dyn Store) {
    let rick = author(store, "Rick", "Cook").await;
    let quote = store
        .create_quote(&CreateQuote::new(rick.id, "stay"))
        .await
        .unwrap();

    let retarget = UpdateQuote {
        author_id: Some(999),
        ..UpdateQuote::default()
    };
    assert_matches!(
        store.update_quote(quote.id, &retarget).await,
        Err(StoreError::Core(CoreError::NotFound { entity: "Author", id: 999 }))
    );
    assert_eq!(store.find_quote(quote.id).await.unwrap(), quote);

    assert_matches!(
        store.update_quote(12345, &UpdateQuote::default()).await,
        Err(StoreError::Core(CoreError::NotFound { entity: "Quote", id: 12345 }))
    );
}

pub async fn filter_matches_exact_fields(store: &dyn Store) {
    let rick = author(store, "Rick", "Cook").await;
    let yogi = author(store, "Yogi", "Berra").await;
    store
        .create_quote(&quote_json(rick.id, "a", json!(5)))
        .await
        .unwrap();
    let b = store
        .create_quote(&quote_json(yogi.id, "b", json!(5)))
        .await
        .unwrap();
    store
        .create_quote(&quote_json(yogi.id, "c", json!(2)))
        .await
        .unwrap();

    let all = store.list_quotes(&QuoteFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    let filter = QuoteFilter::from_params([
        ("author_id", yogi.id.to_string()),
        ("rating", "5".to_string()),
    ])
    .unwrap();
    assert_eq!(store.list_quotes(&filter).await.unwrap(), vec![b.clone()]);

    let filter = QuoteFilter::from_params([("text", "b")]).unwrap();
    assert_eq!(store.list_quotes(&filter).await.unwrap(), vec![b]);

    let filter = QuoteFilter::from_params([("rating", "3")]).unwrap();
    assert!(store.list_quotes(&filter).await.unwrap().is_empty());
}

pub async fn filter_by_unknown_author_is_not_found(store: &dyn Store) {
    author(store, "Rick", "Cook").await;
    assert_matches!(
        store.list_quotes(&QuoteFilter::by_author(77)).await,
        Err(StoreError::Core(CoreError::NotFound { entity: "Author", id: 77 }))
    );
    assert_matches!(
        store.list_quotes_by_author(77).await,
        Err(StoreError::Core(CoreError::NotFound { .. }))
    );
}

pub async fn random_returns_a_member_or_empty(store: &dyn Store) {
    assert_matches!(
        store.random_quote().await,
        Err(StoreError::Core(CoreError::Empty { entity: "Quote" }))
    );

    let rick = author(store, "Rick", "Cook").await;
    let mut created = Vec::new();
    for text in ["one", "two", "three"] {
        created.push(
            store
                .create_quote(&CreateQuote::new(rick.id, text))
                .await
                .unwrap(),
        );
    }

    for _ in 0..20 {
        let picked = store.random_quote().await.unwrap();
        assert!(created.contains(&picked));
    }
}

pub async fn count_tracks_creates_and_deletes(store: &dyn Store) {
    let rick = author(store, "Rick", "Cook").await;
    let mut ids = Vec::new();
    for n in 0..4 {
        let q = store
            .create_quote(&CreateQuote::new(rick.id, format!("q{n}")))
            .await
            .unwrap();
        ids.push(q.id);
    }
    assert_eq!(store.count_quotes().await.unwrap(), 4);

    store.delete_quote(ids[1]).await.unwrap();
    store.delete_quote(ids[3]).await.unwrap();
    assert_eq!(store.count_quotes().await.unwrap(), 2);
    assert_eq!(
        store.list_quotes(&QuoteFilter::default()).await.unwrap().len(),
        2
    );
}

// ---------------------------------------------------------------------------
// Authors
// ---------------------------------------------------------------------------

pub async fn author_crud_round_trip(store: &dyn Store) {
    let created = author(store, "Waldi", "Ravens").await;
    assert_eq!(store.find_author(created.id).await.unwrap(), created);

    let update = UpdateAuthor::from_json(created.id, &json!({"surname": "Raven"})).unwrap();
    let updated = store.update_author(created.id, &update).await.unwrap();
    assert_eq!(updated.name, "Waldi");
    assert_eq!(updated.surname, "Raven");

    assert_eq!(store.count_authors().await.unwrap(), 1);
    assert_eq!(store.list_authors().await.unwrap(), vec![updated]);

    store.delete_author(created.id).await.unwrap();
    assert_matches!(
        store.find_author(created.id).await,
        Err(StoreError::Core(CoreError::NotFound { entity: "Author", .. }))
    );
}

pub async fn duplicate_author_is_conflict(store: &dyn Store) {
    author(store, "Yogi", "Berra").await;
    let other = author(store, "Yogi", "").await;

    assert_matches!(
        store
            .create_author(&CreateAuthor::new("Yogi", "Berra"))
            .await,
        Err(StoreError::Core(CoreError::Conflict(_)))
    );

    let clash = UpdateAuthor {
        surname: Some("Berra".into()),
        ..UpdateAuthor::default()
    };
    assert_matches!(
        store.update_author(other.id, &clash).await,
        Err(StoreError::Core(CoreError::Conflict(_)))
    );
}

pub async fn deleting_author_cascades_to_quotes(store: &dyn Store) {
    let rick = author(store, "Rick", "Cook").await;
    let yogi = author(store, "Yogi", "Berra").await;
    let gone = store
        .create_quote(&CreateQuote::new(rick.id, "gone"))
        .await
        .unwrap();
    let kept = store
        .create_quote(&CreateQuote::new(yogi.id, "kept"))
        .await
        .unwrap();

    store.delete_author(rick.id).await.unwrap();

    assert_matches!(
        store.find_quote(gone.id).await,
        Err(StoreError::Core(CoreError::NotFound { .. }))
    );
    assert_eq!(store.find_quote(kept.id).await.unwrap(), kept);
    assert_eq!(store.count_quotes().await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

const CONCURRENT_WRITES: usize = 200;

/// Interleaved creates and updates against one author and one quote must all
/// succeed; none may surface a lock error.
pub async fn concurrent_creates_and_updates_all_succeed(store: Arc<dyn Store>) {
    let author_id = author(store.as_ref(), "Rick", "Cook").await.id;
    let target_id = store
        .create_quote(&CreateQuote::new(author_id, "target"))
        .await
        .unwrap()
        .id;

    let mut tasks = JoinSet::new();
    for n in 0..CONCURRENT_WRITES {
        let store = Arc::clone(&store);
        tasks.spawn(async move {
            if n % 2 == 0 {
                store
                    .create_quote(&CreateQuote::new(author_id, format!("c{n}")))
                    .await
                    .map(|_| ())
            } else {
                let update = UpdateQuote {
                    author_id: Some(author_id),
                    text: Some(format!("u{n}")),
                    ..UpdateQuote::default()
                };
                store.update_quote(target_id, &update).await.map(|_| ())
            }
        });
    }

    let errors: Vec<String> = tasks
        .join_all()
        .await
        .into_iter()
        .filter_map(|r| r.err().map(|e| e.to_string()))
        .collect();
    assert!(
        errors.is_empty(),
        "{} of {CONCURRENT_WRITES} writes failed, first: {:?}",
        errors.len(),
        errors.first()
    );

    let creates = CONCURRENT_WRITES.div_ceil(2) as i64;
    assert_eq!(store.count_quotes().await.unwrap(), 1 + creates);
    assert!(store.find_quote(target_id).await.unwrap().text.starts_with('u'));
}

/// Concurrent creates and deletes leave exactly `seeded + created - deleted` quotes.
pub async fn concurrent_creates_and_deletes_keep_count(store: Arc<dyn Store>) {
    let author_id = author(store.as_ref(), "Rick", "Cook").await.id;
    let half = CONCURRENT_WRITES / 2;

    let mut seeded = Vec::with_capacity(half);
    for n in 0..half {
        let q = store
            .create_quote(&CreateQuote::new(author_id, format!("s{n}")))
            .await
            .unwrap();
        seeded.push(q.id);
    }

    let mut tasks = JoinSet::new();
    for (n, id) in seeded.into_iter().enumerate() {
        let creator = Arc::clone(&store);
        tasks.spawn(async move {
            creator
                .create_quote(&CreateQuote::new(author_id, format!("n{n}")))
                .await
                .map(|_| ())
        });
        let deleter = Arc::clone(&store);
        tasks.spawn(async move { deleter.delete_quote(id).await });
    }

    let errors: Vec<StoreError> = tasks
        .join_all()
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect();
    assert!(errors.is_empty(), "{} writes failed, first: {:?}", errors.len(), errors.first());

    // Every seeded quote was deleted and replaced by one new quote.
    assert_eq!(store.count_quotes().await.unwrap(), half as i64);
    let remaining = store.list_quotes(&QuoteFilter::default()).await.unwrap();
    assert!(remaining.iter().all(|q| q.text.starts_with('n')));
}
