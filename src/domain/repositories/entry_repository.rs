//! Repository trait for entry storage.

use crate::domain::entities::{Entry, EntryDraft};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing blog entries.
///
/// The repository stores whatever it is given: moderation happens in
/// [`crate::application::services::EntryService`] before `save` is called.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Inserts the draft when it has no id, overwrites the stored entry otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the draft names an entry id or blog id
    /// that does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, draft: EntryDraft) -> Result<Entry, AppError>;

    /// Loads every entry of every blog, ordered by id.
    async fn find_all(&self) -> Result<Vec<Entry>, AppError>;

    /// Loads one page of entries, newest first.
    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<Entry>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Entry>, AppError>;

    /// Returns `false` when no entry had this id.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Deletes all listed entries in one atomic operation.
    ///
    /// Ids that no longer exist are ignored. Returns the number of rows removed.
    async fn delete_by_ids(&self, ids: &[i64]) -> Result<u64, AppError>;
}
