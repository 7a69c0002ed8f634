//! Reaction emoji attached to every entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Emoji an entry is tagged with.
///
/// Serialized and stored as the literal upper-case name (`"LIKE"`, `"SAD"`, ...).
/// Parsing is case-sensitive: `"like"` is not an emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Emoji {
    Like,
    Haha,
    Wow,
    Sad,
    Angry,
}

impl Emoji {
    pub const ALL: [Emoji; 5] = [
        Emoji::Like,
        Emoji::Haha,
        Emoji::Wow,
        Emoji::Sad,
        Emoji::Angry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emoji::Like => "LIKE",
            Emoji::Haha => "HAHA",
            Emoji::Wow => "WOW",
            Emoji::Sad => "SAD",
            Emoji::Angry => "ANGRY",
        }
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown emoji: {0}")]
pub struct UnknownEmoji(pub String);

impl FromStr for Emoji {
    type Err = UnknownEmoji;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emoji::ALL
            .into_iter()
            .find(|emoji| emoji.as_str() == s)
            .ok_or_else(|| UnknownEmoji(s.to_string()))
    }
}
