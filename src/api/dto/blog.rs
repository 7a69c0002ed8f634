//! DTOs for blog endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Blog, BlogDraft};

/// Request body for creating or updating a blog.
#[derive(Debug, Deserialize, Validate)]
pub struct BlogRequest {
    /// Must be absent on create; must match the path id on update when present.
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Polarity that decides which entries the blog accepts.
    pub is_positive: bool,
}

impl BlogRequest {
    pub fn into_draft(self, id: Option<i64>) -> BlogDraft {
        BlogDraft {
            id,
            name: self.name,
            is_positive: self.is_positive,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogItem {
    pub id: i64,
    pub name: String,
    pub is_positive: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Blog> for BlogItem {
    fn from(b: Blog) -> Self {
        Self {
            id: b.id,
            name: b.name,
            is_positive: b.is_positive,
            created_at: b.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogListResponse {
    pub items: Vec<BlogItem>,
}
