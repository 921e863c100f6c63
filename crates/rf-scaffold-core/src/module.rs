//! Module name derivation.
//!
//! The module name is the final path segment of the scanned root. It is
//! spliced into every output name: the suite directory, the stub class
//! (`Test<Module>`), the suite variable (`${AD_<MODULE>_DIR}`) and the run
//! script, so it has to be safe as both a Python identifier suffix and a
//! file name.

use regex::Regex;
use std::path::Path;
use thiserror::Error;

/// Pattern a module name must match.
const NAME_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// Errors that can occur while deriving a module name.
#[derive(Error, Debug)]
pub enum ModuleNameError {
    #[error("cannot derive a module name from '{0}': path has no final segment")]
    NoFinalSegment(String),
    #[error("module root path is not valid UTF-8")]
    NotUtf8,
    #[error("invalid module name '{name}': must match {pattern}")]
    InvalidName { name: String, pattern: &'static str },
}

/// The logical name of a scanned subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName(String);

impl ModuleName {
    /// Derive the module name from the final segment of a root path.
    ///
    /// Trailing separators are ignored (`/opt/sensor/` names `sensor`).
    ///
    /// # Errors
    /// Returns an error if the path has no final segment (e.g. `/`), is not
    /// UTF-8, or the segment is not usable as an identifier.
    pub fn from_root(root: &Path) -> Result<Self, ModuleNameError> {
        let segment = root
            .file_name()
            .ok_or_else(|| ModuleNameError::NoFinalSegment(root.display().to_string()))?;
        let name = segment.to_str().ok_or(ModuleNameError::NotUtf8)?;

        let valid = Regex::new(NAME_PATTERN).is_ok_and(|re| re.is_match(name));
        if !valid {
            return Err(ModuleNameError::InvalidName {
                name: name.to_string(),
                pattern: NAME_PATTERN,
            });
        }

        Ok(Self(name.to_string()))
    }

    /// The name as scanned.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercased form, used in suite variable and case-title prefixes.
    #[must_use]
    pub fn upper(&self) -> String {
        self.0.to_ascii_uppercase()
    }

    /// Capitalized form, used in the stub class name.
    ///
    /// Matches Python `str.capitalize`: first character uppercased, every
    /// remaining character lowercased (`myModule` becomes `Mymodule`). The
    /// legacy engine resolves the stub class by this exact spelling.
    #[must_use]
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        chars.next().map_or_else(String::new, |first| {
            let mut out = String::with_capacity(self.0.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        })
    }
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
