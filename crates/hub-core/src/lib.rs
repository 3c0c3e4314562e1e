//! Core domain types, port definitions and services for the content hub.
//!
//! This crate has no knowledge of Redis, HTTP or the inference backend;
//! adapters implement the traits in [`ports`] and the composition root wires
//! them into [`services::HubCore`].

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod keys;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    ChatMessage, ContentCollection, FileIdentity, FileListing, FolderStatus, LanguageChecklist,
    KEY_SEPARATOR, LanguagesConfig, MessageRole, NO_SYNC_YET, SyncResult, validate_key_segment,
};
pub use ports::{
    ChatError, ChatPort, ContentError, ContentProvider, ContentStore, CoreError, SourceDocument,
    SourceFile, StoreError, SyncError, SyncJob, SyncSnapshot, SyncSource,
};
pub use services::{ContentSync, HubCore, SyncTrigger, TriggerOutcome};
