//! Query parameters and response for keyword purges.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as};

use crate::error::AppError;

/// `?keywords=lonely,sad` query string.
///
/// Keywords are matched exactly and case-sensitively against entry tokens, so
/// they are only trimmed, never lower-cased.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl KeywordQuery {
    /// Returns the distinct non-empty keywords.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when no keyword remains.
    pub fn into_set(self) -> Result<HashSet<String>, AppError> {
        let set: HashSet<String> = self
            .keywords
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        if set.is_empty() {
            return Err(AppError::bad_request(
                "At least one keyword is required",
                json!({"hint": "Use ?keywords=word1,word2"}),
            ));
        }

        Ok(set)
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteEntriesResponse {
    pub count: usize,
    pub deleted: Vec<i64>,
}

impl From<Vec<i64>> for DeleteEntriesResponse {
    fn from(deleted: Vec<i64>) -> Self {
        Self {
            count: deleted.len(),
            deleted,
        }
    }
}
