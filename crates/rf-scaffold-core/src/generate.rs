//! Generation orchestrator.
//!
//! Runs the pipeline strictly in sequence: scan, index assignment (fully
//! validated before anything is written), render, write. Each document is
//! written to a `.tmp` sibling and renamed into place, so a failing run
//! never leaves a half-written artifact behind. Reruns against the same
//! root fully overwrite previous output; concurrent runs over overlapping
//! module names are a caller responsibility (last writer wins).

use crate::emit;
use crate::index::{self, IndexError, Numbering};
use crate::module::{ModuleName, ModuleNameError};
use crate::rules::RuleTable;
use crate::scan::{self, ScanError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during a generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Module(#[from] ModuleNameError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Paths of the three written artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub suite: PathBuf,
    pub library: PathBuf,
    pub run_script: PathBuf,
}

/// One-shot generator for a single module root.
#[derive(Debug)]
pub struct Generator {
    root: PathBuf,
    output_root: PathBuf,
    numbering: Numbering,
    rules: RuleTable,
}

impl Generator {
    /// Build a generator writing below `output_root` (the CLI passes the
    /// invocation working directory).
    pub fn new(
        root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        numbering: Numbering,
        rules: RuleTable,
    ) -> Self {
        Self {
            root: root.into(),
            output_root: output_root.into(),
            numbering,
            rules,
        }
    }

    /// Scan, index, render, and write all three artifacts.
    ///
    /// # Errors
    /// Fails without writing anything if the root is missing, holds no
    /// files, or the index range overflows; write failures abort the run.
    pub fn run(&self) -> Result<Artifacts, GenerateError> {
        let module = ModuleName::from_root(&self.root)?;
        let scanned = scan::scan(&self.root)?;
        let records = index::assign(&scanned, self.numbering)?;

        // Render everything before touching the filesystem.
        let suite_doc = emit::suite::render(&module, &self.root, &records, &self.rules);
        let library_doc = emit::library::render(&module);
        let script_doc = emit::runner::render(&module);

        let suite_dir = self.output_root.join("testcase").join(module.as_str());
        let library_dir = self.output_root.join("libraries").join(module.as_str());
        fs::create_dir_all(&suite_dir)?;
        fs::create_dir_all(&library_dir)?;

        let suite = suite_dir.join("01_Compilation_Output_Check.robot");
        let library = library_dir.join(format!("Test{}.py", module.capitalized()));
        let run_script = self.output_root.join(format!("run_{module}.sh"));

        write_atomic(&suite, &suite_doc)?;
        write_atomic(&library, &library_doc)?;
        write_atomic(&run_script, &script_doc)?;
        make_executable(&run_script)?;

        Ok(Artifacts {
            suite,
            library,
            run_script,
        })
    }
}

/// Write `content` to a `.tmp` sibling, then rename over `path`.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!("{file_name}.tmp"));

    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
