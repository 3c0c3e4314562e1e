//! Key layout in the key-value store.

use crate::domain::FileIdentity;

/// Key holding the most recent [`crate::domain::SyncResult`].
pub const SYNC_LAST_RESULT: &str = "sync:last-result";

/// Configuration blob key, e.g. `cms:config:languages`.
#[must_use]
pub fn config_key(name: &str) -> String {
    format!("cms:config:{name}")
}

/// Collection blob key, e.g. `cms:collection:projects`.
#[must_use]
pub fn collection_key(name: &str) -> String {
    format!("cms:collection:{name}")
}

/// Payload key for one file.
///
/// Unambiguous because [`FileIdentity`] rejects the separator in `lang` and
/// `folder`; `filename` is always the trailing segment.
#[must_use]
pub fn file_key(id: &FileIdentity) -> String {
    format!("cms:file:{}:{}:{}", id.lang(), id.folder(), id.filename())
}

/// Key of the ordered filename index for a folder.
#[must_use]
pub fn file_list_key(lang: &str, folder: &str) -> String {
    format!("cms:files:{lang}:{folder}")
}
