//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations HTTP handlers
//! and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::blog_service::BlogService`] - Blog CRUD and keyword purges of entries
//! - [`services::entry_service::EntryService`] - Moderated entry saves and entry CRUD

pub mod services;
