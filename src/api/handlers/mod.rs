//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod blogs;
pub mod entries;
pub mod health;

pub use blogs::{
    create_blog_handler, delete_blog_entries_by_keyword_handler, delete_blog_handler,
    delete_entries_by_keyword_handler, get_blog_handler, list_blogs_handler, update_blog_handler,
};
pub use entries::{
    create_entry_handler, delete_entry_handler, get_entry_handler, list_entries_handler,
    update_entry_handler,
};
pub use health::health_handler;
