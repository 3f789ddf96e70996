//! File system walker with optional exclude patterns.
//!
//! Resolves an ingestion root (a single file or a directory tree)
//! into the ordered list of regular files to ingest. Errors below
//! the root (permission denied, etc.) are logged and skipped; a
//! missing root is fatal.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{Result, RagdexError};

/// A regular file found under an ingestion root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute or caller-relative path used for reading
    pub path: PathBuf,

    /// Name relative to the root with `/` separators
    pub name: String,
}

/// File system walker with pattern-based exclusion
#[derive(Debug, Clone, Default)]
pub struct FileWalker {
    /// Patterns to exclude (e.g., "**/.git/**", "*.bak")
    exclude_patterns: Vec<Pattern>,
}

impl FileWalker {
    /// Create a new file walker
    ///
    /// Returns an error if any exclude pattern is not a valid glob.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let exclude = exclude_patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    RagdexError::ConfigError(format!("Invalid exclude pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            exclude_patterns: exclude,
        })
    }

    /// Collect the files to ingest from `root`
    ///
    /// A file root yields itself (named by its file name). A directory
    /// root is walked recursively without following symlinks, in
    /// file-name order, keeping only regular files.
    ///
    /// Fails with [`RagdexError::PathNotFound`] for a missing root and
    /// [`RagdexError::UnreadableRoot`] for a root that cannot be listed
    /// or is neither a file nor a directory.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<SourceFile>> {
        let metadata = std::fs::metadata(root)
            .map_err(|_| RagdexError::PathNotFound(root.display().to_string()))?;

        if !metadata.is_dir() {
            if !metadata.is_file() {
                return Err(RagdexError::UnreadableRoot {
                    path: root.display().to_string(),
                    message: "not a regular file or directory".to_string(),
                });
            }
            let name = root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| root.display().to_string());
            return Ok(vec![SourceFile {
                path: root.to_path_buf(),
                name,
            }]);
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e, root))
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if self.is_excluded(path) {
                        tracing::debug!("Skipping excluded file: {:?}", path);
                        continue;
                    }

                    files.push(SourceFile {
                        path: path.to_path_buf(),
                        name: relative_name(root, path),
                    });
                }
                Err(e) if e.depth() == 0 => {
                    return Err(RagdexError::UnreadableRoot {
                        path: root.display().to_string(),
                        message: e
                            .io_error()
                            .map(|io| io.to_string())
                            .unwrap_or_else(|| e.to_string()),
                    });
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    // Errors below the root only lose that subtree
                }
            }
        }

        Ok(files)
    }

    /// Prune excluded directory trees early. Never filters the root.
    fn should_process_entry(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root {
            return true;
        }

        if entry.file_type().is_dir() && self.is_excluded(path) {
            tracing::debug!("Skipping excluded directory: {:?}", path);
            return false;
        }

        true
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let file_name = path.file_name().and_then(|f| f.to_str());
        self.exclude_patterns.iter().any(|p| {
            p.matches_path(path) || file_name.map(|f| p.matches(f)).unwrap_or(false)
        })
    }
}

/// Path of `path` below `root`, joined with `/` on every platform
fn relative_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
