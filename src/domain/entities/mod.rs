//! Core domain entities representing the blog data model.
//!
//! Entities are plain data structures. Writes go through separate draft types:
//! - [`BlogDraft`], [`EntryDraft`] - insert when `id` is `None`, update otherwise
//!
//! # Entity Types
//!
//! - [`Blog`] - A blog with a positive or negative polarity
//! - [`Entry`] - A post on a blog, tagged with an [`Emoji`]

pub mod blog;
pub mod emoji;
pub mod entry;

pub use blog::{Blog, BlogDraft};
pub use emoji::{Emoji, UnknownEmoji};
pub use entry::{Entry, EntryDraft, tokenize};
