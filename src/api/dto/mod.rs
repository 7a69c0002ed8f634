//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization and validator for input validation.

pub mod blog;
pub mod entry;
pub mod health;
pub mod keywords;
pub mod pagination;
