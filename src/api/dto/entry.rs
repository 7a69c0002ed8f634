//! DTOs for entry endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::pagination::PaginationMeta;
use crate::domain::entities::{Emoji, Entry, EntryDraft};

/// Request body for creating or updating an entry.
///
/// Content may be empty here: emptiness is a moderation failure, reported as
/// `invalidContent` rather than a shape error.
#[derive(Debug, Deserialize, Validate)]
pub struct EntryRequest {
    pub id: Option<i64>,

    #[validate(length(max = 10000))]
    pub content: String,

    pub emoji: Emoji,

    pub blog_id: i64,
}

impl EntryRequest {
    pub fn into_draft(self, id: Option<i64>) -> EntryDraft {
        EntryDraft {
            id,
            content: self.content,
            emoji: self.emoji,
            blog_id: self.blog_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EntryItem {
    pub id: i64,
    pub content: String,
    pub emoji: Emoji,
    pub blog_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Entry> for EntryItem {
    fn from(e: Entry) -> Self {
        Self {
            id: e.id,
            content: e.content,
            emoji: e.emoji,
            blog_id: e.blog_id,
            created_at: e.created_at,
        }
    }
}

/// Paginated list of entries.
#[derive(Debug, Serialize)]
pub struct EntryListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<EntryItem>,
}
