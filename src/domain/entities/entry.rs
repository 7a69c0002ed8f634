//! Domain entity representing a blog entry.

use chrono::{DateTime, Utc};

use super::Emoji;

/// A single entry posted to a blog.
///
/// Entries are only ever persisted through the moderated save path, so a
/// stored entry always satisfies its blog's sentiment policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: i64,
    pub content: String,
    pub emoji: Emoji,
    pub blog_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(
        id: i64,
        content: String,
        emoji: Emoji,
        blog_id: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content,
            emoji,
            blog_id,
            created_at,
        }
    }

    /// Splits the content on single spaces, skipping empty pieces.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        tokenize(&self.content)
    }
}

/// Input for saving an entry.
///
/// `id: None` inserts, `id: Some(..)` overwrites the existing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub id: Option<i64>,
    pub content: String,
    pub emoji: Emoji,
    pub blog_id: i64,
}

impl EntryDraft {
    pub fn new(blog_id: i64, emoji: Emoji, content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            emoji,
            blog_id,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Tokenizer shared by moderation and keyword deletion.
pub fn tokenize(content: &str) -> impl Iterator<Item = &str> {
    content.split(' ').filter(|token| !token.is_empty())
}
