//! PostgreSQL implementation of blog repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Blog, BlogDraft};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;
use serde_json::json;

#[derive(Debug, sqlx::FromRow)]
struct BlogRow {
    id: i64,
    name: String,
    is_positive: bool,
    created_at: DateTime<Utc>,
}

impl From<BlogRow> for Blog {
    fn from(r: BlogRow) -> Self {
        Blog::new(r.id, r.name, r.is_positive, r.created_at)
    }
}

/// PostgreSQL repository for blogs.
///
/// Deleting a blog removes its entries through the `ON DELETE CASCADE` foreign key.
pub struct PgBlogRepository {
    pool: Arc<PgPool>,
}

impl PgBlogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    async fn save(&self, draft: BlogDraft) -> Result<Blog, AppError> {
        let Some(id) = draft.id else {
            let row = sqlx::query_as::<_, BlogRow>(
                r#"
                INSERT INTO blogs (name, is_positive)
                VALUES ($1, $2)
                RETURNING id, name, is_positive, created_at
                "#,
            )
            .bind(&draft.name)
            .bind(draft.is_positive)
            .fetch_one(self.pool.as_ref())
            .await?;

            return Ok(row.into());
        };

        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            UPDATE blogs SET name = $2, is_positive = $3
            WHERE id = $1
            RETURNING id, name, is_positive, created_at
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(draft.is_positive)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Blog::from)
            .ok_or_else(|| AppError::not_found("Blog not found", json!({"id": id})))
    }

    async fn find_all(&self) -> Result<Vec<Blog>, AppError> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, name, is_positive, created_at
            FROM blogs
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, name, is_positive, created_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Blog::from))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
