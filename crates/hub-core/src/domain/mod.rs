//! Domain types for the content hub.
//!
//! These types are independent of any infrastructure concerns.

pub mod chat;
pub mod content;
pub mod language;
pub mod sync;

pub use chat::{ChatMessage, MessageRole, build_conversation};
pub use content::{
    ContentCollection, FileIdentity, FileListing, KEY_SEPARATOR, validate_key_segment,
};
pub use language::{FolderStatus, LanguageChecklist, LanguageEntry, LanguagesConfig};
pub use sync::{NO_SYNC_YET, SyncResult};
