//! Language checklist computation.

use std::sync::Arc;

use crate::domain::{FolderStatus, LanguageChecklist, LanguagesConfig, validate_key_segment};
use crate::ports::{ContentError, ContentProvider, ContentStore, CoreError};

/// Computes per-language readiness from the languages config and the store.
pub struct LanguageService {
    store: Arc<dyn ContentStore>,
    provider: Arc<dyn ContentProvider>,
}

impl LanguageService {
    pub fn new(store: Arc<dyn ContentStore>, provider: Arc<dyn ContentProvider>) -> Self {
        Self { store, provider }
    }

    async fn config(&self) -> Result<LanguagesConfig, CoreError> {
        let raw = self.provider.languages_config().await?;
        serde_json::from_value(raw)
            .map_err(|e| CoreError::Content(ContentError::Parse(e.to_string())))
    }

    /// Build the checklist for `lang`.
    ///
    /// Each required folder is compared against the same folder of the
    /// reference language. The reference language is compared against nothing.
    pub async fn checklist(&self, lang: &str) -> Result<LanguageChecklist, CoreError> {
        if lang.trim().is_empty() {
            return Err(CoreError::Validation(
                "Missing required parameter: lang".to_string(),
            ));
        }
        validate_key_segment("lang", lang)?;

        let config = self.config().await?;
        let reference = config
            .reference_language()
            .filter(|r| *r != lang)
            .map(str::to_string);

        let mut folders = Vec::with_capacity(config.required_folders.len());
        for folder in &config.required_folders {
            let files = self
                .store
                .get_file_list(lang, folder)
                .await?
                .unwrap_or_default();
            let reference_files = match &reference {
                Some(r) => self.store.get_file_list(r, folder).await?.unwrap_or_default(),
                None => Vec::new(),
            };
            folders.push(FolderStatus::compare(folder.clone(), &files, &reference_files));
        }

        let checklist = LanguageChecklist::new(&config, lang, folders);
        tracing::debug!(
            target: "hub.content",
            lang,
            complete = checklist.complete,
            folders = checklist.folders.len(),
            "Computed language checklist"
        );
        Ok(checklist)
    }
}
