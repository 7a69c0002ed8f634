//! Entry moderation and storage service.

use std::sync::Arc;

use crate::domain::entities::{Entry, EntryDraft};
use crate::domain::moderation::{Sentiment, SentimentVocabulary};
use crate::domain::repositories::{BlogRepository, EntryRepository};
use crate::error::AppError;
use serde_json::json;

/// One page of entries plus the total number of stored entries.
#[derive(Debug, Clone)]
pub struct EntryPage {
    pub items: Vec<Entry>,
    pub total: i64,
}

/// Service for saving entries under their blog's sentiment policy.
///
/// Every save, insert or update, loads the parent blog and checks the draft's
/// emoji and content against the blog's polarity before touching storage.
pub struct EntryService<E: EntryRepository + ?Sized, B: BlogRepository + ?Sized> {
    entry_repository: Arc<E>,
    blog_repository: Arc<B>,
    vocabulary: Arc<SentimentVocabulary>,
}

impl<E: EntryRepository + ?Sized, B: BlogRepository + ?Sized> EntryService<E, B> {
    /// Creates a new entry service.
    pub fn new(
        entry_repository: Arc<E>,
        blog_repository: Arc<B>,
        vocabulary: Arc<SentimentVocabulary>,
    ) -> Self {
        Self {
            entry_repository,
            blog_repository,
            vocabulary,
        }
    }

    /// Validates and persists an entry.
    ///
    /// # Validation
    ///
    /// - Emoji must belong to the emoji set of the blog's polarity
    /// - Content must have at least one token and no keyword of the opposite polarity
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the referenced blog does not exist.
    /// Returns [`AppError::Rejected`] with key `invalidEmoji` or `invalidContent`
    /// if moderation fails.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn save(&self, draft: EntryDraft) -> Result<Entry, AppError> {
        tracing::debug!(?draft, "Request to save Entry");

        let blog = self
            .blog_repository
            .find_by_id(draft.blog_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Blog not found", json!({"blog_id": draft.blog_id}))
            })?;

        let policy = self
            .vocabulary
            .policy(Sentiment::from_flag(blog.is_positive));

        if let Err(e) = policy.check(draft.emoji, &draft.content) {
            tracing::info!(
                blog_id = blog.id,
                sentiment = ?policy.sentiment(),
                emoji = %draft.emoji,
                reason = e.error_key(),
                "Entry rejected by moderation"
            );
            return Err(e.into());
        }

        self.entry_repository.save(draft).await
    }

    /// Loads one page of entries and the total count.
    pub async fn find_all(&self, offset: i64, limit: i64) -> Result<EntryPage, AppError> {
        tracing::debug!(offset, limit, "Request to get all Entries");

        let (items, total) = tokio::try_join!(
            self.entry_repository.find_page(offset, limit),
            self.entry_repository.count()
        )?;

        Ok(EntryPage { items, total })
    }

    pub async fn find_one(&self, id: i64) -> Result<Option<Entry>, AppError> {
        tracing::debug!(id, "Request to get Entry");
        self.entry_repository.find_by_id(id).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(id, "Request to delete Entry");
        if !self.entry_repository.delete_by_id(id).await? {
            return Err(AppError::not_found("Entry not found", json!({"id": id})));
        }
        Ok(())
    }
}
