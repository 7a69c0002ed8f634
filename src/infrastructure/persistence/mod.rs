//! Repository implementations.
//!
//! Concrete implementations of the domain repository traits.
//!
//! # Repositories
//!
//! - [`PgBlogRepository`] - Blog storage in PostgreSQL
//! - [`PgEntryRepository`] - Entry storage in PostgreSQL
//! - [`MemoryStore`] - Both traits over in-process maps (`STORAGE=memory`, tests)

pub mod memory_store;
pub mod pg_blog_repository;
pub mod pg_entry_repository;

pub use memory_store::MemoryStore;
pub use pg_blog_repository::PgBlogRepository;
pub use pg_entry_repository::PgEntryRepository;
