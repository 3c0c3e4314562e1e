//! Sync result record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Note recorded when the status endpoint finds no stored result.
pub const NO_SYNC_YET: &str = "No sync has been performed yet";

/// Outcome of one sync run, stored under [`crate::keys::SYNC_LAST_RESULT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResult {
    pub timestamp: DateTime<Utc>,
    pub configs: u64,
    pub collections: u64,
    pub images: u64,
    pub files: u64,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl SyncResult {
    /// Empty result stamped with the current time.
    #[must_use]
    pub fn started_now() -> Self {
        Self {
            timestamp: Utc::now(),
            configs: 0,
            collections: 0,
            images: 0,
            files: 0,
            errors: Vec::new(),
        }
    }

    /// Zero-valued result returned when nothing has been recorded.
    #[must_use]
    pub fn never_run() -> Self {
        Self {
            errors: vec![NO_SYNC_YET.to_string()],
            ..Self::started_now()
        }
    }

    /// Total number of entries written.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.configs + self.collections + self.images + self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_run_is_zero_valued() {
        let result = SyncResult::never_run();
        assert_eq!(result.total(), 0);
        assert_eq!(result.errors, vec![NO_SYNC_YET.to_string()]);
    }

    #[test]
    fn test_missing_errors_field_defaults() {
        let json = r#"{"timestamp":"2026-01-01T00:00:00Z","configs":1,"collections":2,"images":3,"files":4}"#;
        let result: SyncResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.total(), 10);
        assert!(result.errors.is_empty());
    }
}
