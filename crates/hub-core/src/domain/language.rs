//! Language configuration and the derived per-language checklist.

use serde::{Deserialize, Serialize};

/// One configured language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

/// Typed view over the languages configuration document.
///
/// The document itself is served verbatim; this view only reads the fields
/// the checklist needs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesConfig {
    #[serde(default)]
    pub default_language: Option<String>,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
    #[serde(default)]
    pub required_folders: Vec<String>,
}

impl LanguagesConfig {
    pub fn find(&self, code: &str) -> Option<&LanguageEntry> {
        self.languages.iter().find(|l| l.code == code)
    }

    /// Language whose folders other languages are compared against.
    pub fn reference_language(&self) -> Option<&str> {
        self.default_language
            .as_deref()
            .or_else(|| self.languages.first().map(|l| l.code.as_str()))
    }
}

/// Status of one required folder for a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderStatus {
    pub folder: String,
    pub file_count: usize,
    pub missing_files: Vec<String>,
    pub complete: bool,
}

impl FolderStatus {
    /// Compare a folder's files against the reference language's files.
    #[must_use]
    pub fn compare(folder: String, files: &[String], reference: &[String]) -> Self {
        let missing_files: Vec<String> = reference
            .iter()
            .filter(|f| !files.contains(f))
            .cloned()
            .collect();
        let complete = !files.is_empty() && missing_files.is_empty();
        Self {
            folder,
            file_count: files.len(),
            missing_files,
            complete,
        }
    }
}

/// Derived readiness report for one language. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageChecklist {
    pub language_code: String,
    pub configured: bool,
    pub enabled: bool,
    pub reference_language: Option<String>,
    pub folders: Vec<FolderStatus>,
    pub complete: bool,
}

impl LanguageChecklist {
    #[must_use]
    pub fn new(
        config: &LanguagesConfig,
        language_code: &str,
        folders: Vec<FolderStatus>,
    ) -> Self {
        let entry = config.find(language_code);
        let configured = entry.is_some();
        let enabled = entry.is_some_and(|e| e.enabled);
        let complete = configured && folders.iter().all(|f| f.complete);
        Self {
            language_code: language_code.to_string(),
            configured,
            enabled,
            reference_language: config.reference_language().map(str::to_string),
            folders,
            complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LanguagesConfig {
        serde_json::from_value(serde_json::json!({
            "defaultLanguage": "en",
            "languages": [
                {"code": "en", "name": "English"},
                {"code": "fr", "name": "Français", "enabled": false}
            ],
            "requiredFolders": ["blog"]
        }))
        .unwrap()
    }

    #[test]
    fn test_reference_falls_back_to_first_language() {
        let mut cfg = config();
        cfg.default_language = None;
        assert_eq!(cfg.reference_language(), Some("en"));
    }

    #[test]
    fn test_folder_missing_files() {
        let status = FolderStatus::compare(
            "blog".into(),
            &["a.json".to_string()],
            &["a.json".to_string(), "b.json".to_string()],
        );
        assert_eq!(status.missing_files, vec!["b.json".to_string()]);
        assert!(!status.complete);
    }

    #[test]
    fn test_empty_folder_is_incomplete() {
        let status = FolderStatus::compare("blog".into(), &[], &[]);
        assert!(!status.complete);
    }

    #[test]
    fn test_unconfigured_language_is_incomplete() {
        let checklist = LanguageChecklist::new(&config(), "de", Vec::new());
        assert!(!checklist.configured);
        assert!(!checklist.complete);
    }

    #[test]
    fn test_disabled_language() {
        let checklist = LanguageChecklist::new(&config(), "fr", Vec::new());
        assert!(checklist.configured);
        assert!(!checklist.enabled);
    }
}
