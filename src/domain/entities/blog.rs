//! Domain entity representing a blog.

use chrono::{DateTime, Utc};

/// A blog owning a list of entries.
///
/// `is_positive` is the blog's polarity: it selects which emoji and keyword
/// policy every entry posted to this blog must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
    pub id: i64,
    pub name: String,
    pub is_positive: bool,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Creates a new Blog instance.
    pub fn new(id: i64, name: String, is_positive: bool, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            is_positive,
            created_at,
        }
    }
}

/// Input for saving a blog.
///
/// `id: None` inserts a new blog, `id: Some(..)` overwrites the existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogDraft {
    pub id: Option<i64>,
    pub name: String,
    pub is_positive: bool,
}

impl BlogDraft {
    /// Draft for a blog that does not exist yet.
    pub fn new(name: impl Into<String>, is_positive: bool) -> Self {
        Self {
            id: None,
            name: name.into(),
            is_positive,
        }
    }

    /// Targets an existing blog.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
