//! Sentiment moderation applied to entries before they are persisted.
//!
//! A blog is either positive or negative. Each polarity owns an emoji set and a
//! keyword set; an entry posted to a blog must use one of the blog's emoji and
//! must not mention a keyword of the opposite polarity.
//!
//! # Scan Rules
//!
//! Content is split on single spaces (see [`tokenize`]) and scanned left to right:
//!
//! 1. A token whose lower-case form is a primary keyword keeps the scan going,
//!    even when the same word is also listed as forbidden.
//! 2. Otherwise, the first token that is a forbidden keyword stops the scan and
//!    rejects the entry.
//! 3. Neutral words keep the scan going.
//! 4. Content without a single token is rejected.
//!
//! Emoji failures take precedence over content failures.

use std::collections::HashSet;

use crate::domain::entities::{Emoji, tokenize};

const DEFAULT_POSITIVE_EMOJI: [Emoji; 3] = [Emoji::Like, Emoji::Haha, Emoji::Wow];
const DEFAULT_NEGATIVE_EMOJI: [Emoji; 3] = [Emoji::Sad, Emoji::Angry, Emoji::Wow];
const DEFAULT_POSITIVE_KEYWORDS: [&str; 5] = ["like", "love", "happy", "haha", "laugh"];
const DEFAULT_NEGATIVE_KEYWORDS: [&str; 5] = ["angry", "sad", "fear", "cry", "lonely"];

/// Reason an entry was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ModerationError {
    #[error("Invalid Emoji")]
    InvalidEmoji,

    #[error("Invalid Content")]
    InvalidContent,
}

impl ModerationError {
    /// Entity tag reported alongside every moderation failure.
    pub const ENTITY_NAME: &'static str = "entry";

    pub fn error_key(&self) -> &'static str {
        match self {
            ModerationError::InvalidEmoji => "invalidEmoji",
            ModerationError::InvalidContent => "invalidContent",
        }
    }
}

/// Polarity of a blog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn from_flag(is_positive: bool) -> Self {
        if is_positive {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Sentiment::Positive => Sentiment::Negative,
            Sentiment::Negative => Sentiment::Positive,
        }
    }
}

/// Emoji and keyword sets of both polarities.
///
/// Keywords are stored lower-cased so lookups only normalize the token.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentVocabulary {
    positive_emoji: Vec<Emoji>,
    negative_emoji: Vec<Emoji>,
    positive_keywords: HashSet<String>,
    negative_keywords: HashSet<String>,
}

impl Default for SentimentVocabulary {
    fn default() -> Self {
        Self::new(
            DEFAULT_POSITIVE_EMOJI,
            DEFAULT_NEGATIVE_EMOJI,
            DEFAULT_POSITIVE_KEYWORDS,
            DEFAULT_NEGATIVE_KEYWORDS,
        )
    }
}

impl SentimentVocabulary {
    pub fn new<K: AsRef<str>>(
        positive_emoji: impl IntoIterator<Item = Emoji>,
        negative_emoji: impl IntoIterator<Item = Emoji>,
        positive_keywords: impl IntoIterator<Item = K>,
        negative_keywords: impl IntoIterator<Item = K>,
    ) -> Self {
        Self {
            positive_emoji: positive_emoji.into_iter().collect(),
            negative_emoji: negative_emoji.into_iter().collect(),
            positive_keywords: normalize_keywords(positive_keywords),
            negative_keywords: normalize_keywords(negative_keywords),
        }
    }

    pub fn emoji(&self, sentiment: Sentiment) -> &[Emoji] {
        match sentiment {
            Sentiment::Positive => &self.positive_emoji,
            Sentiment::Negative => &self.negative_emoji,
        }
    }

    pub fn keywords(&self, sentiment: Sentiment) -> &HashSet<String> {
        match sentiment {
            Sentiment::Positive => &self.positive_keywords,
            Sentiment::Negative => &self.negative_keywords,
        }
    }

    /// Builds the policy entries of a blog with the given polarity must satisfy.
    pub fn policy(&self, sentiment: Sentiment) -> ContentPolicy<'_> {
        ContentPolicy {
            sentiment,
            allowed_emoji: self.emoji(sentiment),
            primary_keywords: self.keywords(sentiment),
            forbidden_keywords: self.keywords(sentiment.opposite()),
        }
    }
}

fn normalize_keywords<K: AsRef<str>>(keywords: impl IntoIterator<Item = K>) -> HashSet<String> {
    keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Result of scanning an entry's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// No token at all.
    Empty,
    /// A forbidden keyword was found; later tokens were not looked at.
    Forbidden { token: String, position: usize },
    /// No forbidden keyword; `primary_hits` counts matching-sentiment tokens.
    Clean { tokens: usize, primary_hits: usize },
}

impl ScanOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, ScanOutcome::Clean { .. })
    }
}

/// Emoji whitelist plus primary and forbidden keywords for one polarity.
#[derive(Debug, Clone, Copy)]
pub struct ContentPolicy<'a> {
    sentiment: Sentiment,
    allowed_emoji: &'a [Emoji],
    primary_keywords: &'a HashSet<String>,
    forbidden_keywords: &'a HashSet<String>,
}

impl ContentPolicy<'_> {
    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    pub fn allows_emoji(&self, emoji: Emoji) -> bool {
        self.allowed_emoji.contains(&emoji)
    }

    pub fn scan(&self, content: &str) -> ScanOutcome {
        let mut tokens = 0;
        let mut primary_hits = 0;

        for (position, token) in tokenize(content).enumerate() {
            let normalized = token.to_lowercase();
            tokens += 1;
            // A word listed under both polarities counts as primary.
            if self.primary_keywords.contains(&normalized) {
                primary_hits += 1;
                continue;
            }
            if self.forbidden_keywords.contains(&normalized) {
                return ScanOutcome::Forbidden {
                    token: token.to_string(),
                    position,
                };
            }
        }

        if tokens == 0 {
            ScanOutcome::Empty
        } else {
            ScanOutcome::Clean {
                tokens,
                primary_hits,
            }
        }
    }

    /// Runs the emoji check and the content scan.
    ///
    /// # Errors
    ///
    /// Returns [`ModerationError::InvalidEmoji`] when the emoji is not allowed,
    /// otherwise [`ModerationError::InvalidContent`] when the scan fails.
    pub fn check(&self, emoji: Emoji, content: &str) -> Result<(), ModerationError> {
        let emoji_ok = self.allows_emoji(emoji);
        let outcome = self.scan(content);

        if !emoji_ok {
            return Err(ModerationError::InvalidEmoji);
        }

        match outcome {
            ScanOutcome::Clean { .. } => Ok(()),
            ScanOutcome::Forbidden { token, position } => {
                tracing::debug!(%token, position, "Forbidden keyword in entry content");
                Err(ModerationError::InvalidContent)
            }
            ScanOutcome::Empty => Err(ModerationError::InvalidContent),
        }
    }
}
