// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::Arc;

use trivia_api::{
    models::question::{NewQuestion, Question},
    routes,
    state::AppState,
    store::{MemoryStore, SharedStore, TriviaStore},
};

/// Spawns the app on a random port and returns its base URL
/// (e.g. "http://127.0.0.1:12345").
pub async fn spawn_app(store: SharedStore) -> String {
    let state = AppState::new(store);
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// A fresh in-memory store holding the six default categories.
pub fn seeded_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_default_categories())
}

pub async fn add_question(
    store: &MemoryStore,
    text: &str,
    category: Option<i64>,
) -> Question {
    store
        .insert(NewQuestion {
            question: Some(text.to_string()),
            answer: Some("an answer".to_string()),
            difficulty: Some(3),
            category,
        })
        .await
        .expect("Failed to seed question")
}

/// Seeds `count` questions spread over categories 1..=3.
pub async fn add_questions(store: &MemoryStore, count: usize) -> Vec<Question> {
    let mut created = Vec::with_capacity(count);
    for i in 0..count {
        let category = (i % 3) as i64 + 1;
        created.push(add_question(store, &format!("Question number {}", i), Some(category)).await);
    }
    created
}

pub fn assert_error_envelope(body: &serde_json::Value, code: u64, message: &str) {
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], code);
    assert_eq!(body["message"], message);
}
