//! `HubCore` - the primary application facade.
//!
//! Adapters (HTTP, CLI) receive a `HubCore` instance and use it to access all
//! functionality.

use std::sync::Arc;

use crate::ports::{ChatPort, ContentProvider, ContentStore};

use super::{ChatService, ContentService, LanguageService, SyncService};

/// The core application facade.
///
/// Constructed at the adapter's composition root with concrete
/// implementations of the store, content provider and chat client.
///
/// # Example
///
/// ```ignore
/// let core = HubCore::new(store, provider, chat);
/// let listing = core.content().list_files("en", "blog").await?;
/// ```
pub struct HubCore {
    content: ContentService,
    languages: LanguageService,
    chat: ChatService,
    sync: SyncService,
}

impl HubCore {
    pub fn new(
        store: Arc<dyn ContentStore>,
        provider: Arc<dyn ContentProvider>,
        chat: Arc<dyn ChatPort>,
    ) -> Self {
        Self {
            content: ContentService::new(Arc::clone(&store), Arc::clone(&provider)),
            languages: LanguageService::new(Arc::clone(&store), provider),
            chat: ChatService::new(chat),
            sync: SyncService::new(store),
        }
    }

    /// Access the content service.
    pub const fn content(&self) -> &ContentService {
        &self.content
    }

    /// Access the language checklist service.
    pub const fn languages(&self) -> &LanguageService {
        &self.languages
    }

    /// Access the chat service.
    pub const fn chat(&self) -> &ChatService {
        &self.chat
    }

    /// Access the sync status service.
    pub const fn sync(&self) -> &SyncService {
        &self.sync
    }
}
