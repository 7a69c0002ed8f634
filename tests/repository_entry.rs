mod common;

use sentiment_blog::AppError;
use sentiment_blog::domain::entities::{Emoji, EntryDraft};
use sentiment_blog::domain::repositories::EntryRepository;
use sentiment_blog::infrastructure::persistence::PgEntryRepository;
use sqlx::PgPool;
use std::sync::Arc;

// ─── SAVE ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_entry(pool: PgPool) {
    let blog_id = common::insert_blog(&pool, "Sunny side", true).await;
    let repo = PgEntryRepository::new(Arc::new(pool));

    let result = repo
        .save(EntryDraft::new(blog_id, Emoji::Haha, "I feel happy today"))
        .await;

    assert!(result.is_ok());
    let entry = result.unwrap();
    assert!(entry.id > 0);
    assert_eq!(entry.blog_id, blog_id);
    assert_eq!(entry.emoji, Emoji::Haha);
    assert_eq!(entry.content, "I feel happy today");
}

#[sqlx::test]
async fn test_emoji_round_trip(pool: PgPool) {
    let blog_id = common::insert_blog(&pool, "Any", true).await;
    let repo = PgEntryRepository::new(Arc::new(pool));

    for emoji in Emoji::ALL {
        let saved = repo
            .save(EntryDraft::new(blog_id, emoji, "hello"))
            .await
            .unwrap();

        let loaded = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(loaded.emoji, emoji);
    }
}

#[sqlx::test]
async fn test_emoji_column_rejects_unknown_names(pool: PgPool) {
    let blog_id = common::insert_blog(&pool, "Any", true).await;

    let result = sqlx::query("INSERT INTO entries (content, emoji, blog_id) VALUES ($1, $2, $3)")
        .bind("hello")
        .bind("like")
        .bind(blog_id)
        .execute(&pool)
        .await;

    assert!(result.is_err());
}

#[sqlx::test]
async fn test_create_entry_for_missing_blog_is_not_found(pool: PgPool) {
    let repo = PgEntryRepository::new(Arc::new(pool));

    let result = repo.save(EntryDraft::new(9999, Emoji::Like, "hello")).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_update_entry(pool: PgPool) {
    let blog_id = common::insert_blog(&pool, "Sunny side", true).await;
    let id = common::insert_entry(&pool, blog_id, "LIKE", "hello", 5).await;
    let repo = PgEntryRepository::new(Arc::new(pool));
    let before = repo.find_by_id(id).await.unwrap().unwrap();

    let updated = repo
        .save(EntryDraft::new(blog_id, Emoji::Wow, "hello again").with_id(id))
        .await
        .unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.emoji, Emoji::Wow);
    assert_eq!(updated.content, "hello again");
    assert_eq!(updated.created_at, before.created_at);
}

#[sqlx::test]
async fn test_update_missing_entry_is_not_found(pool: PgPool) {
    let blog_id = common::insert_blog(&pool, "Sunny side", true).await;
    let repo = PgEntryRepository::new(Arc::new(pool));

    let result = repo
        .save(EntryDraft::new(blog_id, Emoji::Like, "hello").with_id(9999))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_find_page_newest_first(pool: PgPool) {
    let blog_id = common::insert_blog(&pool, "Sunny side", true).await;
    let oldest = common::insert_entry(&pool, blog_id, "LIKE", "oldest", 30).await;
    let newest = common::insert_entry(&pool, blog_id, "LIKE", "newest", 1).await;
    let middle = common::insert_entry(&pool, blog_id, "LIKE", "middle", 10).await;
    let repo = PgEntryRepository::new(Arc::new(pool));

    let first_page = repo.find_page(0, 2).await.unwrap();
    let ids: Vec<i64> = first_page.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![newest, middle]);

    let second_page = repo.find_page(2, 2).await.unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].id, oldest);

    assert_eq!(repo.count().await.unwrap(), 3);
}

#[sqlx::test]
async fn test_find_page_breaks_ties_by_id(pool: PgPool) {
    let blog_id = common::insert_blog(&pool, "Sunny side", true).await;
    let ids: Vec<i64> = sqlx::query_scalar(
        r#"
        INSERT INTO entries (content, emoji, blog_id, created_at)
        SELECT 'same time', 'WOW', $1, TIMESTAMPTZ '2026-01-01 00:00:00+00'
        FROM generate_series(1, 3)
        RETURNING id
        "#,
    )
    .bind(blog_id)
    .fetch_all(&pool)
    .await
    .unwrap();
    let repo = PgEntryRepository::new(Arc::new(pool));

    let page = repo.find_page(0, 10).await.unwrap();

    let mut expected = ids.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(page.iter().map(|e| e.id).collect::<Vec<_>>(), expected);
}

#[sqlx::test]
async fn test_find_all_ordered_by_id(pool: PgPool) {
    let blog_id = common::insert_blog(&pool, "Sunny side", true).await;
    let first = common::insert_entry(&pool, blog_id, "LIKE", "a", 1).await;
    let second = common::insert_entry(&pool, blog_id, "LIKE", "b", 60).await;
    let repo = PgEntryRepository::new(Arc::new(pool));

    let entries = repo.find_all().await.unwrap();

    assert_eq!(
        entries.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![first, second]
    );
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_by_id(pool: PgPool) {
    let blog_id = common::insert_blog(&pool, "Sunny side", true).await;
    let id = common::insert_entry(&pool, blog_id, "LIKE", "hello", 0).await;
    let repo = PgEntryRepository::new(Arc::new(pool));

    assert!(repo.delete_by_id(id).await.unwrap());
    assert!(!repo.delete_by_id(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_delete_by_ids_ignores_missing(pool: PgPool) {
    let blog_id = common::insert_blog(&pool, "Rainy days", false).await;
    let first = common::insert_entry(&pool, blog_id, "SAD", "a", 0).await;
    let kept = common::insert_entry(&pool, blog_id, "SAD", "b", 0).await;
    let third = common::insert_entry(&pool, blog_id, "SAD", "c", 0).await;
    let repo = PgEntryRepository::new(Arc::new(pool.clone()));

    let removed = repo.delete_by_ids(&[first, third, 9999]).await.unwrap();

    assert_eq!(removed, 2);
    assert_eq!(common::count_entries_of(&pool, blog_id).await, 1);
    assert!(repo.find_by_id(kept).await.unwrap().is_some());
}

#[sqlx::test]
async fn test_delete_by_ids_empty_slice(pool: PgPool) {
    let repo = PgEntryRepository::new(Arc::new(pool));

    assert_eq!(repo.delete_by_ids(&[]).await.unwrap(), 0);
}
