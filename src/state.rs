//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{BlogService, EntryService};
use crate::domain::moderation::SentimentVocabulary;
use crate::domain::repositories::{BlogRepository, EntryRepository};
use crate::infrastructure::persistence::MemoryStore;

/// Blog service over whichever storage backend was configured.
pub type DynBlogService = BlogService<dyn BlogRepository, dyn EntryRepository>;
/// Entry service over whichever storage backend was configured.
pub type DynEntryService = EntryService<dyn EntryRepository, dyn BlogRepository>;

#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<DynBlogService>,
    pub entry_service: Arc<DynEntryService>,
}

impl AppState {
    /// Wires both services to the given repositories.
    pub fn new(
        blog_repository: Arc<dyn BlogRepository>,
        entry_repository: Arc<dyn EntryRepository>,
        vocabulary: Arc<SentimentVocabulary>,
    ) -> Self {
        let blog_service = Arc::new(BlogService::new(
            blog_repository.clone(),
            entry_repository.clone(),
        ));
        let entry_service = Arc::new(EntryService::new(
            entry_repository,
            blog_repository,
            vocabulary,
        ));

        Self {
            blog_service,
            entry_service,
        }
    }

    /// State backed by a fresh [`MemoryStore`].
    pub fn in_memory(vocabulary: Arc<SentimentVocabulary>) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store, vocabulary)
    }
}
