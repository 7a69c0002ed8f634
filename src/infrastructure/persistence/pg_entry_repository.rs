//! PostgreSQL implementation of entry repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Emoji, Entry, EntryDraft};
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;
use serde_json::json;

#[derive(Debug, sqlx::FromRow)]
struct EntryRow {
    id: i64,
    content: String,
    emoji: String,
    blog_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<EntryRow> for Entry {
    type Error = AppError;

    fn try_from(r: EntryRow) -> Result<Self, Self::Error> {
        let emoji: Emoji = r.emoji.parse().map_err(|e| {
            tracing::error!(entry_id = r.id, error = %e, "Corrupt emoji column");
            AppError::internal("Corrupt entry row", json!({"id": r.id}))
        })?;

        Ok(Entry::new(r.id, r.content, emoji, r.blog_id, r.created_at))
    }
}

fn into_entries(rows: Vec<EntryRow>) -> Result<Vec<Entry>, AppError> {
    rows.into_iter().map(Entry::try_from).collect()
}

/// PostgreSQL repository for blog entries.
///
/// The emoji is stored as its literal name in a `TEXT` column guarded by a `CHECK`.
pub struct PgEntryRepository {
    pool: Arc<PgPool>,
}

impl PgEntryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryRepository for PgEntryRepository {
    async fn save(&self, draft: EntryDraft) -> Result<Entry, AppError> {
        let Some(id) = draft.id else {
            let row = sqlx::query_as::<_, EntryRow>(
                r#"
                INSERT INTO entries (content, emoji, blog_id)
                VALUES ($1, $2, $3)
                RETURNING id, content, emoji, blog_id, created_at
                "#,
            )
            .bind(&draft.content)
            .bind(draft.emoji.as_str())
            .bind(draft.blog_id)
            .fetch_one(self.pool.as_ref())
            .await?;

            return row.try_into();
        };

        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            UPDATE entries SET content = $2, emoji = $3, blog_id = $4
            WHERE id = $1
            RETURNING id, content, emoji, blog_id, created_at
            "#,
        )
        .bind(id)
        .bind(&draft.content)
        .bind(draft.emoji.as_str())
        .bind(draft.blog_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.ok_or_else(|| AppError::not_found("Entry not found", json!({"id": id})))?
            .try_into()
    }

    async fn find_all(&self) -> Result<Vec<Entry>, AppError> {
        let rows = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT id, content, emoji, blog_id, created_at
            FROM entries
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        into_entries(rows)
    }

    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<Entry>, AppError> {
        let rows = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT id, content, emoji, blog_id, created_at
            FROM entries
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        into_entries(rows)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM entries")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Entry>, AppError> {
        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT id, content, emoji, blog_id, created_at
            FROM entries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Entry::try_from).transpose()
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM entries WHERE id = ANY($1)")
            .bind(ids)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
