//! In-process storage for development and tests.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Blog, BlogDraft, Entry, EntryDraft};
use crate::domain::repositories::{BlogRepository, EntryRepository};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    blogs: BTreeMap<i64, Blog>,
    entries: BTreeMap<i64, Entry>,
    last_blog_id: i64,
    last_entry_id: i64,
}

/// Blog and entry tables kept behind one lock.
///
/// Mirrors the PostgreSQL schema: ids are sequential, an entry must reference an
/// existing blog, and deleting a blog removes its entries. Each operation holds the
/// lock for its whole duration, so batch deletes are atomic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        tracing::debug!("Using in-memory storage");
        Self::default()
    }
}

#[async_trait]
impl BlogRepository for MemoryStore {
    async fn save(&self, draft: BlogDraft) -> Result<Blog, AppError> {
        let mut tables = self.tables.write().await;

        let blog = match draft.id {
            None => {
                tables.last_blog_id += 1;
                Blog::new(
                    tables.last_blog_id,
                    draft.name,
                    draft.is_positive,
                    Utc::now(),
                )
            }
            Some(id) => {
                let existing = tables
                    .blogs
                    .get(&id)
                    .ok_or_else(|| AppError::not_found("Blog not found", json!({"id": id})))?;
                Blog::new(id, draft.name, draft.is_positive, existing.created_at)
            }
        };

        tables.blogs.insert(blog.id, blog.clone());
        Ok(blog)
    }

    async fn find_all(&self) -> Result<Vec<Blog>, AppError> {
        Ok(self.tables.read().await.blogs.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError> {
        Ok(self.tables.read().await.blogs.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;

        if tables.blogs.remove(&id).is_none() {
            return Ok(false);
        }
        tables.entries.retain(|_, entry| entry.blog_id != id);

        Ok(true)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(i64::try_from(self.tables.read().await.blogs.len()).unwrap_or(i64::MAX))
    }
}

#[async_trait]
impl EntryRepository for MemoryStore {
    async fn save(&self, draft: EntryDraft) -> Result<Entry, AppError> {
        let mut tables = self.tables.write().await;

        if !tables.blogs.contains_key(&draft.blog_id) {
            return Err(AppError::not_found(
                "Referenced record does not exist",
                json!({"blog_id": draft.blog_id}),
            ));
        }

        let entry = match draft.id {
            None => {
                tables.last_entry_id += 1;
                Entry::new(
                    tables.last_entry_id,
                    draft.content,
                    draft.emoji,
                    draft.blog_id,
                    Utc::now(),
                )
            }
            Some(id) => {
                let existing = tables
                    .entries
                    .get(&id)
                    .ok_or_else(|| AppError::not_found("Entry not found", json!({"id": id})))?;
                Entry::new(
                    id,
                    draft.content,
                    draft.emoji,
                    draft.blog_id,
                    existing.created_at,
                )
            }
        };

        tables.entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn find_all(&self) -> Result<Vec<Entry>, AppError> {
        Ok(self.tables.read().await.entries.values().cloned().collect())
    }

    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<Entry>, AppError> {
        let tables = self.tables.read().await;

        let mut entries: Vec<&Entry> = tables.entries.values().collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(entries
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(i64::try_from(self.tables.read().await.entries.len()).unwrap_or(i64::MAX))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Entry>, AppError> {
        Ok(self.tables.read().await.entries.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.tables.write().await.entries.remove(&id).is_some())
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> Result<u64, AppError> {
        let mut tables = self.tables.write().await;

        let removed = ids
            .iter()
            .filter(|id| tables.entries.remove(*id).is_some())
            .count();

        Ok(removed as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Emoji;

    async fn store_with_blog(is_positive: bool) -> (MemoryStore, Blog) {
        let store = MemoryStore::new();
        let blog = BlogRepository::save(&store, BlogDraft::new("blog", is_positive))
            .await
            .unwrap();
        (store, blog)
    }

    #[tokio::test]
    async fn test_blog_ids_are_sequential() {
        let store = MemoryStore::new();

        let first = BlogRepository::save(&store, BlogDraft::new("one", true))
            .await
            .unwrap();
        let second = BlogRepository::save(&store, BlogDraft::new("two", false))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(BlogRepository::count(&store).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_blog_keeps_created_at() {
        let (store, blog) = store_with_blog(true).await;

        let draft = BlogDraft::new("renamed", false).with_id(blog.id);
        let updated = BlogRepository::save(&store, draft).await.unwrap();

        assert_eq!(updated.name, "renamed");
        assert!(!updated.is_positive);
        assert_eq!(updated.created_at, blog.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_blog_is_not_found() {
        let store = MemoryStore::new();

        let result = BlogRepository::save(&store, BlogDraft::new("ghost", true).with_id(9)).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_entry_requires_existing_blog() {
        let store = MemoryStore::new();

        let result =
            EntryRepository::save(&store, EntryDraft::new(1, Emoji::Like, "hello")).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_deleting_blog_cascades_to_entries() {
        let (store, blog) = store_with_blog(true).await;
        let other = BlogRepository::save(&store, BlogDraft::new("other", true))
            .await
            .unwrap();

        EntryRepository::save(&store, EntryDraft::new(blog.id, Emoji::Like, "a"))
            .await
            .unwrap();
        EntryRepository::save(&store, EntryDraft::new(other.id, Emoji::Like, "b"))
            .await
            .unwrap();

        assert!(BlogRepository::delete_by_id(&store, blog.id).await.unwrap());
        assert!(!BlogRepository::delete_by_id(&store, blog.id).await.unwrap());

        let remaining = EntryRepository::find_all(&store).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].blog_id, other.id);
    }

    #[tokio::test]
    async fn test_delete_by_ids_ignores_missing() {
        let (store, blog) = store_with_blog(true).await;
        for content in ["a", "b", "c"] {
            EntryRepository::save(&store, EntryDraft::new(blog.id, Emoji::Wow, content))
                .await
                .unwrap();
        }

        let removed = store.delete_by_ids(&[1, 3, 42]).await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(EntryRepository::count(&store).await.unwrap(), 1);
        assert!(EntryRepository::find_by_id(&store, 2).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_find_page_newest_first() {
        let (store, blog) = store_with_blog(false).await;
        for content in ["first", "second", "third"] {
            EntryRepository::save(&store, EntryDraft::new(blog.id, Emoji::Sad, content))
                .await
                .unwrap();
        }

        let page = store.find_page(0, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].content, "third");

        let rest = store.find_page(2, 2).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].content, "first");
    }
}
