//! Business logic services for the application layer.

pub mod blog_service;
pub mod entry_service;

pub use blog_service::BlogService;
pub use entry_service::{EntryPage, EntryService};
