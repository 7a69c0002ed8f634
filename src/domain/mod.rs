//! Domain layer containing business entities and rules.
//!
//! # Architecture
//!
//! - [`entities`] - Blogs, entries and the emoji enum
//! - [`moderation`] - Sentiment vocabulary and the entry content policy
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on infrastructure or HTTP code. Services in
//! [`crate::application::services`] combine the repositories with the moderation rules.

pub mod entities;
pub mod moderation;
pub mod repositories;
