//! Blog management service.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{Blog, BlogDraft, Entry};
use crate::domain::repositories::{BlogRepository, EntryRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for managing blogs and purging their entries by keyword.
///
/// Blog writes are passthroughs to the repository. The keyword purges scan every
/// entry and remove the ones containing an exact (case-sensitive) keyword token.
pub struct BlogService<B: BlogRepository + ?Sized, E: EntryRepository + ?Sized> {
    blog_repository: Arc<B>,
    entry_repository: Arc<E>,
}

impl<B: BlogRepository + ?Sized, E: EntryRepository + ?Sized> BlogService<B, E> {
    /// Creates a new blog service.
    pub fn new(blog_repository: Arc<B>, entry_repository: Arc<E>) -> Self {
        Self {
            blog_repository,
            entry_repository,
        }
    }

    /// Inserts or updates a blog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when updating a blog that does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn save(&self, draft: BlogDraft) -> Result<Blog, AppError> {
        tracing::debug!(?draft, "Request to save Blog");
        self.blog_repository.save(draft).await
    }

    pub async fn find_all(&self) -> Result<Vec<Blog>, AppError> {
        tracing::debug!("Request to get all Blogs");
        self.blog_repository.find_all().await
    }

    pub async fn find_one(&self, id: i64) -> Result<Option<Blog>, AppError> {
        tracing::debug!(id, "Request to get Blog");
        self.blog_repository.find_by_id(id).await
    }

    /// Deletes a blog and, through storage cascading, its entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the blog does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(id, "Request to delete Blog");
        if !self.blog_repository.delete_by_id(id).await? {
            return Err(AppError::not_found("Blog not found", json!({"id": id})));
        }
        Ok(())
    }

    /// Number of stored blogs.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.blog_repository.count().await
    }

    /// Deletes every entry, across all blogs, containing one of `keywords` as a token.
    ///
    /// Returns the ids of the deleted entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors; nothing is deleted then.
    pub async fn delete_entries_by_keyword(
        &self,
        keywords: &HashSet<String>,
    ) -> Result<Vec<i64>, AppError> {
        tracing::debug!(?keywords, "Request to delete Blog Entries by keyword");
        let entries = self.entry_repository.find_all().await?;
        self.purge(entries.iter(), keywords).await
    }

    /// Same as [`Self::delete_entries_by_keyword`], limited to the entries of one blog.
    pub async fn delete_entries_by_blog_and_keyword(
        &self,
        blog_id: i64,
        keywords: &HashSet<String>,
    ) -> Result<Vec<i64>, AppError> {
        tracing::debug!(blog_id, ?keywords, "Request to delete Blog Entries by blog and keyword");
        let entries = self.entry_repository.find_all().await?;
        self.purge(entries.iter().filter(|e| e.blog_id == blog_id), keywords)
            .await
    }

    async fn purge<'a>(
        &self,
        entries: impl Iterator<Item = &'a Entry>,
        keywords: &HashSet<String>,
    ) -> Result<Vec<i64>, AppError> {
        let matched: Vec<i64> = entries
            .filter(|entry| contains_keyword(entry, keywords))
            .map(|entry| entry.id)
            .collect();

        if matched.is_empty() {
            return Ok(matched);
        }

        let removed = self.entry_repository.delete_by_ids(&matched).await?;
        tracing::info!(
            matched = matched.len(),
            removed,
            "Deleted entries by keyword"
        );

        Ok(matched)
    }
}

fn contains_keyword(entry: &Entry, keywords: &HashSet<String>) -> bool {
    entry.tokens().any(|token| keywords.contains(token))
}
