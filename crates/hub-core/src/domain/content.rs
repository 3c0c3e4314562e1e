//! Content domain types.
//!
//! A content file is addressed by `(lang, folder, filename)`; its payload is
//! opaque to this crate. Static collections are named JSON documents.

use serde::{Deserialize, Serialize};

use crate::ports::CoreError;

/// Separator between segments of a store key.
pub const KEY_SEPARATOR: char = ':';

/// Reject a `lang` or `folder` value containing the key separator.
///
/// Those parts are joined into store keys, so a separator inside one would
/// let two different identities address the same key.
pub fn validate_key_segment(field: &str, value: &str) -> Result<(), CoreError> {
    if value.contains(KEY_SEPARATOR) {
        return Err(CoreError::Validation(format!(
            "Field '{field}' must not contain '{KEY_SEPARATOR}'"
        )));
    }
    Ok(())
}

/// Identity of a content file in the store.
///
/// All three parts are guaranteed non-empty once constructed, and `lang`
/// and `folder` never contain [`KEY_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileIdentity {
    lang: String,
    folder: String,
    filename: String,
}

impl FileIdentity {
    /// Build an identity, rejecting empty or whitespace-only parts.
    pub fn new(
        lang: impl Into<String>,
        folder: impl Into<String>,
        filename: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let lang = lang.into();
        let folder = folder.into();
        let filename = filename.into();

        let missing: Vec<&str> = [("lang", &lang), ("folder", &folder), ("filename", &filename)]
            .into_iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| name)
            .collect();

        if !missing.is_empty() {
            return Err(CoreError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        validate_key_segment("lang", &lang)?;
        validate_key_segment("folder", &folder)?;

        Ok(Self {
            lang,
            folder,
            filename,
        })
    }

    /// Build an identity from optional request fields.
    pub fn from_parts(
        lang: Option<String>,
        folder: Option<String>,
        filename: Option<String>,
    ) -> Result<Self, CoreError> {
        Self::new(
            lang.unwrap_or_default(),
            folder.unwrap_or_default(),
            filename.unwrap_or_default(),
        )
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl std::fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.lang, self.folder, self.filename)
    }
}

/// Static content collections served by the public content API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentCollection {
    Achievements,
    CaseStudies,
    Experience,
    Projects,
    Skills,
}

impl ContentCollection {
    pub const ALL: [Self; 5] = [
        Self::Achievements,
        Self::CaseStudies,
        Self::Experience,
        Self::Projects,
        Self::Skills,
    ];

    /// Parse the route segment used by the HTTP API.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "achievements" => Some(Self::Achievements),
            "caseStudies" => Some(Self::CaseStudies),
            "experience" => Some(Self::Experience),
            "projects" => Some(Self::Projects),
            "skills" => Some(Self::Skills),
            _ => None,
        }
    }

    /// Route segment and resource stem for this collection.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Achievements => "achievements",
            Self::CaseStudies => "caseStudies",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
        }
    }
}

impl std::fmt::Display for ContentCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Files listed under `(lang, folder)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileListing {
    pub lang: String,
    pub folder: String,
    pub files: Vec<String>,
    pub count: usize,
}

impl FileListing {
    /// Build a listing; an absent store list becomes an empty one.
    #[must_use]
    pub fn new(lang: String, folder: String, files: Option<Vec<String>>) -> Self {
        let files = files.unwrap_or_default();
        let count = files.len();
        Self {
            lang,
            folder,
            files,
            count,
        }
    }
}
