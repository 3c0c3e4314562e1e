//! Filesystem `SyncSource`.
//!
//! Reads a snapshot from a directory laid out as:
//!
//! ```text
//! <root>/config/<name>.json
//! <root>/collections/<name>.json
//! <root>/files/<lang>/<folder>/<filename>
//! ```
//!
//! Missing subdirectories are treated as empty. Unreadable entries are
//! reported in the snapshot's `errors` instead of failing the whole read.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use hub_core::{SourceDocument, SourceFile, SyncError, SyncSnapshot, SyncSource};

pub struct FsSyncSource {
    root: PathBuf,
    label: String,
}

impl FsSyncSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let label = format!("fs:{}", root.display());
        Self { root, label }
    }
}

/// List entries of `dir`, sorted by name. A missing directory lists as empty.
async fn entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut read_dir = match tokio::fs::read_dir(dir).await {
        Ok(rd) => rd,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };
    let mut paths = Vec::new();
    while let Some(entry) = read_dir.next_entry().await? {
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Dir,
    File,
}

/// Named children of `dir` matching `want`, following symlinks.
///
/// Anything unreadable is recorded in `errors` and skipped.
async fn children(dir: &Path, want: Kind, errors: &mut Vec<String>) -> Vec<(String, PathBuf)> {
    let paths = match entries(dir).await {
        Ok(paths) => paths,
        Err(e) => {
            errors.push(format!("{}: {e}", dir.display()));
            return Vec::new();
        }
    };

    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(name) = file_name(&path) else { continue };
        let kind = match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_dir() => Kind::Dir,
            Ok(meta) if meta.is_file() => Kind::File,
            Ok(_) => continue,
            Err(e) => {
                errors.push(format!("{}: {e}", path.display()));
                continue;
            }
        };
        if kind == want {
            out.push((name, path));
        }
    }
    out
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|n| n.to_str()).map(str::to_string)
}

async fn read_documents(dir: &Path, errors: &mut Vec<String>) -> Vec<SourceDocument> {
    let mut docs = Vec::new();
    for (_, path) in children(dir, Kind::File, errors).await {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => docs.push(SourceDocument { name, content }),
            Err(e) => errors.push(format!("{}: {e}", path.display())),
        }
    }
    docs
}

async fn read_files(dir: &Path, errors: &mut Vec<String>) -> Vec<SourceFile> {
    let mut files = Vec::new();
    for (lang, lang_dir) in children(dir, Kind::Dir, errors).await {
        for (folder, folder_dir) in children(&lang_dir, Kind::Dir, errors).await {
            for (filename, path) in children(&folder_dir, Kind::File, errors).await {
                match tokio::fs::read(&path).await {
                    Ok(bytes) => files.push(SourceFile {
                        lang: lang.clone(),
                        folder: folder.clone(),
                        filename,
                        bytes,
                    }),
                    Err(e) => errors.push(format!("{}: {e}", path.display())),
                }
            }
        }
    }
    files
}

#[async_trait]
impl SyncSource for FsSyncSource {
    fn label(&self) -> &str {
        &self.label
    }

    async fn snapshot(&self) -> Result<SyncSnapshot, SyncError> {
        let is_dir = tokio::fs::metadata(&self.root)
            .await
            .is_ok_and(|meta| meta.is_dir());
        if !is_dir {
            return Err(SyncError::Source(format!(
                "sync source directory not found: {}",
                self.root.display()
            )));
        }

        let mut errors = Vec::new();
        let configs = read_documents(&self.root.join("config"), &mut errors).await;
        let collections = read_documents(&self.root.join("collections"), &mut errors).await;
        let files = read_files(&self.root.join("files"), &mut errors).await;
        if !errors.is_empty() {
            tracing::warn!(
                target: "hub.sync",
                source = %self.label,
                errors = errors.len(),
                "Some source entries could not be read"
            );
        }

        Ok(SyncSnapshot {
            configs,
            collections,
            files,
            errors,
        })
    }
}
