//! Case numbering.
//!
//! Converts the ordered scan result into the four-digit case codes that tie
//! the three generated documents together: two zero-padded digits for the
//! directory group, two for the file within it.

use crate::scan::ScanResult;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during index assignment.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("directory group count {0} exceeds the two-digit index range (max 99)")]
    PathIndexOverflow(usize),
    #[error("file count {count} in {dir} exceeds the two-digit index range (max 99)")]
    FileIndexOverflow { dir: PathBuf, count: usize },
}

/// Case-code numbering scheme.
///
/// `Legacy` reproduces the upstream scheme in which a group's path-check
/// record shares `file_index = 1` with the group's first file-check record,
/// so both carry the same code (for group one: "0101"). `Unique` assigns
/// path-check records `file_index = 0` instead, so no code collides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Numbering {
    #[default]
    Legacy,
    Unique,
}

/// A four-digit case code, `%02d%02d` over path and file index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseCode(String);

impl CaseCode {
    fn new(path_index: usize, file_index: usize) -> Self {
        Self(format!("{path_index:02}{file_index:02}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a generated test case checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseKind {
    PathCheck,
    FileCheck,
}

/// One generated test case: a directory existence check or a file check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    pub path_index: usize,
    pub file_index: usize,
    pub code: CaseCode,
    pub dir: PathBuf,
    /// Present for `FileCheck` records only.
    pub file: Option<String>,
    pub kind: CaseKind,
}

/// Assign case records to a scan result.
///
/// Per group, one `PathCheck` record is emitted first, then one `FileCheck`
/// record per file with `file_index` counting from 1. Indices are validated
/// up front so an overflow aborts before anything is written.
///
/// # Errors
/// Returns an overflow error if there are more than 99 groups or more than
/// 99 files in one group.
pub fn assign(scan: &ScanResult, numbering: Numbering) -> Result<Vec<CaseRecord>, IndexError> {
    if scan.groups.len() > 99 {
        return Err(IndexError::PathIndexOverflow(scan.groups.len()));
    }
    if let Some(group) = scan.groups.iter().find(|g| g.files.len() > 99) {
        return Err(IndexError::FileIndexOverflow {
            dir: group.dir.clone(),
            count: group.files.len(),
        });
    }

    let mut records = Vec::with_capacity(scan.groups.len() + scan.total_files());

    for (gi, group) in scan.groups.iter().enumerate() {
        let path_index = gi + 1;

        let path_file_index = match numbering {
            Numbering::Legacy => 1,
            Numbering::Unique => 0,
        };
        records.push(CaseRecord {
            path_index,
            file_index: path_file_index,
            code: CaseCode::new(path_index, path_file_index),
            dir: group.dir.clone(),
            file: None,
            kind: CaseKind::PathCheck,
        });

        for (fi, file) in group.files.iter().enumerate() {
            let file_index = fi + 1;
            records.push(CaseRecord {
                path_index,
                file_index,
                code: CaseCode::new(path_index, file_index),
                dir: group.dir.clone(),
                file: Some(file.clone()),
                kind: CaseKind::FileCheck,
            });
        }
    }

    Ok(records)
}
