//! Filesystem scan of a module root.
//!
//! Walks the root subtree and groups regular files by their immediate
//! containing directory. Directories with no files of their own are never
//! represented, not even as empty groups. Ordering is an explicit contract:
//! groups are sorted by directory path and files lexicographically within a
//! group, so repeated scans of an unchanged tree are byte-for-byte
//! reproducible downstream.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur during the scan.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("scan target does not exist: {0}")]
    TargetMissing(PathBuf),
    #[error("scan target is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("no scannable files under {0}")]
    NoScannableFiles(PathBuf),
    #[error("path under scan root is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// The regular files directly contained in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryGroup {
    pub dir: PathBuf,
    /// File names, sorted lexicographically.
    pub files: Vec<String>,
}

/// Ordered scan of a module root, one group per non-empty directory.
///
/// Built once per run and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub groups: Vec<DirectoryGroup>,
}

impl ScanResult {
    /// Total number of regular files across all groups.
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.groups.iter().map(|g| g.files.len()).sum()
    }
}

/// Walk `root` and group regular files by containing directory.
///
/// # Errors
/// Returns `TargetMissing` if the root does not exist, `NotADirectory` if it
/// is not a directory, and `NoScannableFiles` if the subtree contains no
/// regular file at all. Walk and encoding failures are propagated.
pub fn scan(root: &Path) -> Result<ScanResult, ScanError> {
    if !root.exists() {
        return Err(ScanError::TargetMissing(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    // BTreeMap keys give the sorted group order for free.
    let mut grouped: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| ScanError::NonUtf8Path(entry.path().to_path_buf()))?
            .to_string();
        let dir = entry
            .path()
            .parent()
            .unwrap_or(root)
            .to_path_buf();

        grouped.entry(dir).or_default().push(name);
    }

    if grouped.is_empty() {
        return Err(ScanError::NoScannableFiles(root.to_path_buf()));
    }

    let groups = grouped
        .into_iter()
        .map(|(dir, mut files)| {
            files.sort();
            DirectoryGroup { dir, files }
        })
        .collect();

    Ok(ScanResult { groups })
}
