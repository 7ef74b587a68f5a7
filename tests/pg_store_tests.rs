// tests/pg_store_tests.rs
//
// Requires a running PostgreSQL database:
//   DATABASE_URL=postgres://... cargo test --test pg_store_tests -- --ignored

use sqlx::postgres::PgPoolOptions;
use trivia_api::{
    models::question::NewQuestion,
    store::{PgStore, StoreError, TriviaStore},
};

async fn connect() -> PgStore {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres for testing. Make sure DATABASE_URL is set.");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    PgStore::new(pool)
}

fn unique(prefix: &str) -> String {
    format!("{} {}", prefix, uuid::Uuid::new_v4())
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn seeded_categories_are_ordered_by_type() {
    let store = connect().await;

    let categories = store.list_categories().await.unwrap();
    let labels: Vec<&str> = categories.iter().map(|c| c.kind.as_str()).collect();

    for label in ["Science", "Art", "Geography", "History", "Entertainment", "Sports"] {
        assert!(labels.contains(&label), "missing category {}", label);
    }
    let mut sorted = labels.clone();
    sorted.sort();
    assert_eq!(labels, sorted);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn insert_find_search_and_delete_round_trip() {
    let store = connect().await;
    let marker = uuid::Uuid::new_v4().simple().to_string();
    let text = format!("What is the 100% marker {}?", marker);

    let created = store
        .insert(NewQuestion {
            question: Some(text.clone()),
            answer: Some("an answer".to_string()),
            difficulty: Some(3),
            category: Some(1),
        })
        .await
        .unwrap();

    assert_eq!(store.find_by_id(created.id).await.unwrap(), Some(created.clone()));

    let hits = store.search_by_text(&marker.to_uppercase()).await.unwrap();
    assert_eq!(hits, vec![created.clone()]);

    // '%' and '_' are matched literally, not as wildcards.
    let literal = store.search_by_text(&format!("100% marker {}", marker)).await.unwrap();
    assert_eq!(literal.len(), 1);
    let wildcard = store.search_by_text(&format!("1_0 marker {}", marker)).await.unwrap();
    assert!(wildcard.is_empty());

    let all = store.list_questions().await.unwrap();
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    store.delete(created.id).await.unwrap();
    assert_eq!(store.find_by_id(created.id).await.unwrap(), None);
    assert!(matches!(
        store.delete(created.id).await,
        Err(StoreError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn insert_without_answer_violates_schema() {
    let store = connect().await;

    let result = store
        .insert(NewQuestion {
            question: Some(unique("Unanswerable")),
            answer: None,
            difficulty: Some(1),
            category: Some(1),
        })
        .await;

    assert!(matches!(result, Err(StoreError::Constraint(_))));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn quiz_candidates_skip_previous_questions() {
    let store = connect().await;
    let mut ids = Vec::new();
    for _ in 0..3 {
        let q = store
            .insert(NewQuestion {
                question: Some(unique("Quiz candidate")),
                answer: Some("a".to_string()),
                difficulty: Some(1),
                category: Some(424242),
            })
            .await
            .unwrap();
        ids.push(q.id);
    }

    let remaining = store.quiz_candidates(Some(424242), &ids[..2]).await.unwrap();
    assert!(remaining.iter().any(|q| q.id == ids[2]));
    assert!(remaining.iter().all(|q| !ids[..2].contains(&q.id)));

    let by_category = store.list_by_category(424242).await.unwrap();
    assert!(ids.iter().all(|id| by_category.iter().any(|q| q.id == *id)));

    for id in ids {
        store.delete(id).await.unwrap();
    }
}
