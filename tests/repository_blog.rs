mod common;

use sentiment_blog::AppError;
use sentiment_blog::domain::entities::BlogDraft;
use sentiment_blog::domain::repositories::BlogRepository;
use sentiment_blog::infrastructure::persistence::PgBlogRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_blog(pool: PgPool) {
    let repo = PgBlogRepository::new(Arc::new(pool));

    let result = repo.save(BlogDraft::new("Sunny side", true)).await;

    assert!(result.is_ok());
    let blog = result.unwrap();
    assert!(blog.id > 0);
    assert_eq!(blog.name, "Sunny side");
    assert!(blog.is_positive);
}

#[sqlx::test]
async fn test_update_blog_keeps_created_at(pool: PgPool) {
    let repo = PgBlogRepository::new(Arc::new(pool));
    let blog = repo.save(BlogDraft::new("Sunny side", true)).await.unwrap();

    let updated = repo
        .save(BlogDraft::new("Rainy days", false).with_id(blog.id))
        .await
        .unwrap();

    assert_eq!(updated.id, blog.id);
    assert_eq!(updated.name, "Rainy days");
    assert!(!updated.is_positive);
    assert_eq!(updated.created_at, blog.created_at);
}

#[sqlx::test]
async fn test_update_missing_blog_is_not_found(pool: PgPool) {
    let repo = PgBlogRepository::new(Arc::new(pool));

    let result = repo.save(BlogDraft::new("Ghost", true).with_id(9999)).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_find_all_ordered_by_id(pool: PgPool) {
    let first = common::insert_blog(&pool, "first", true).await;
    let second = common::insert_blog(&pool, "second", false).await;
    let repo = PgBlogRepository::new(Arc::new(pool));

    let blogs = repo.find_all().await.unwrap();

    let ids: Vec<i64> = blogs.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert!(!blogs[1].is_positive);
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let id = common::insert_blog(&pool, "Sunny side", true).await;
    let repo = PgBlogRepository::new(Arc::new(pool));

    let found = repo.find_by_id(id).await.unwrap();
    assert_eq!(found.unwrap().name, "Sunny side");

    let missing = repo.find_by_id(id + 1000).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_delete_blog_cascades_to_entries(pool: PgPool) {
    let deleted = common::insert_blog(&pool, "Rainy days", false).await;
    let kept = common::insert_blog(&pool, "Grey skies", false).await;
    common::insert_entry(&pool, deleted, "SAD", "so lonely", 0).await;
    common::insert_entry(&pool, deleted, "ANGRY", "grr", 0).await;
    common::insert_entry(&pool, kept, "SAD", "rain", 0).await;

    let repo = PgBlogRepository::new(Arc::new(pool.clone()));

    assert!(repo.delete_by_id(deleted).await.unwrap());
    assert!(!repo.delete_by_id(deleted).await.unwrap());

    assert_eq!(common::count_entries_of(&pool, deleted).await, 0);
    assert_eq!(common::count_entries_of(&pool, kept).await, 1);
}

#[sqlx::test]
async fn test_count_blogs(pool: PgPool) {
    common::insert_blog(&pool, "one", true).await;
    common::insert_blog(&pool, "two", false).await;
    let repo = PgBlogRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 2);
}
