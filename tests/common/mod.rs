#![allow(dead_code)]

use axum_test::TestServer;
use sentiment_blog::domain::moderation::SentimentVocabulary;
use sentiment_blog::routes::router;
use sentiment_blog::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    AppState::in_memory(Arc::new(SentimentVocabulary::default()))
}

pub fn make_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

pub async fn create_test_blog(server: &TestServer, name: &str, is_positive: bool) -> i64 {
    let response = server
        .post("/api/blogs")
        .json(&json!({ "name": name, "is_positive": is_positive }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

pub async fn create_test_entry(
    server: &TestServer,
    blog_id: i64,
    emoji: &str,
    content: &str,
) -> i64 {
    let response = server
        .post("/api/entries")
        .json(&json!({ "blog_id": blog_id, "emoji": emoji, "content": content }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

pub async fn insert_blog(pool: &PgPool, name: &str, is_positive: bool) -> i64 {
    sqlx::query_scalar("INSERT INTO blogs (name, is_positive) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(is_positive)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Inserts an entry whose `created_at` lies `minutes_ago` minutes in the past.
pub async fn insert_entry(
    pool: &PgPool,
    blog_id: i64,
    emoji: &str,
    content: &str,
    minutes_ago: i32,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO entries (content, emoji, blog_id, created_at)
        VALUES ($1, $2, $3, NOW() - make_interval(mins => $4))
        RETURNING id
        "#,
    )
    .bind(content)
    .bind(emoji)
    .bind(blog_id)
    .bind(minutes_ago)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_entries_of(pool: &PgPool, blog_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM entries WHERE blog_id = $1")
        .bind(blog_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
