//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented in `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`BlogRepository`] - Blog CRUD operations
//! - [`EntryRepository`] - Entry CRUD, paging and batch deletion
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod blog_repository;
pub mod entry_repository;

pub use blog_repository::BlogRepository;
pub use entry_repository::EntryRepository;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
#[cfg(test)]
pub use entry_repository::MockEntryRepository;
