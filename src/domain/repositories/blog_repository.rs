//! Repository trait for blog storage.

use crate::domain::entities::{Blog, BlogDraft};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing blogs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBlogRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Inserts the draft when it has no id, overwrites the stored blog otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the draft names an id that does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, draft: BlogDraft) -> Result<Blog, AppError>;

    /// Lists every blog ordered by id.
    async fn find_all(&self) -> Result<Vec<Blog>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError>;

    /// Deletes a blog together with its entries.
    ///
    /// Returns `false` when no blog had this id.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored blogs. Doubles as the storage health probe.
    async fn count(&self) -> Result<i64, AppError>;
}
