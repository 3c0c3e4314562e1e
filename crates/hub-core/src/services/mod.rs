//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain logic. They don't know
//! about concrete implementations.

mod app_core;
mod chat_service;
mod content_service;
mod content_sync;
mod language_service;
mod startup;
mod sync_service;

pub use app_core::HubCore;
pub use chat_service::ChatService;
pub use content_service::ContentService;
pub use content_sync::ContentSync;
pub use language_service::LanguageService;
pub use startup::{SyncTrigger, TriggerOutcome};
pub use sync_service::SyncService;
