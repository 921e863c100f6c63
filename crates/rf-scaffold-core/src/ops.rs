//! Native check operations.
//!
//! These are the four operations the generated stub library exposes to the
//! test-execution engine, implemented here in Rust. The typed functions
//! distinguish "not found" from "unreadable" from "no match"; the `*_check`
//! / `read_file` / `assert_match` facades collapse every failure to a
//! negative result, which is the boundary contract the engine relies on.
//! The emitted Python stub mirrors exactly these semantics.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from the structured file read.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("unrecognized extension on '{0}'")]
    UnknownExtension(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Self-describing formats the structured read understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

/// Extension registry. `.meta` files carry JSON content.
const FORMATS: &[(&str, Format)] = &[
    ("yaml", Format::Yaml),
    ("json", Format::Json),
    ("meta", Format::Json),
];

fn format_for(filename: &str) -> Option<Format> {
    let ext = Path::new(filename).extension()?.to_str()?;
    FORMATS
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, format)| *format)
}

/// True iff the path exists. Never errors.
#[must_use]
pub fn path_check(path: &Path) -> bool {
    path.exists()
}

/// True iff `dir`/`name` is a regular file. Never errors.
#[must_use]
pub fn file_check(dir: &Path, name: &str) -> bool {
    dir.join(name).is_file()
}

/// Read and parse `dir`/`name`, dispatching on its extension.
///
/// # Errors
/// Returns `NotFound` for a missing file, `UnknownExtension` for an
/// extension outside the registry, and propagates read/parse failures.
pub fn read_structured(dir: &Path, name: &str) -> Result<Value, ReadError> {
    let path = dir.join(name);
    if !path.exists() {
        return Err(ReadError::NotFound(path));
    }

    let format =
        format_for(name).ok_or_else(|| ReadError::UnknownExtension(name.to_string()))?;
    let content = std::fs::read_to_string(&path)?;

    let value = match format {
        Format::Yaml => serde_yaml::from_str(&content)?,
        Format::Json => serde_json::from_str(&content)?,
    };
    Ok(value)
}

/// Fail-soft facade over [`read_structured`]: any failure is `None`.
#[must_use]
pub fn read_file(dir: &Path, name: &str) -> Option<Value> {
    read_structured(dir, name).ok()
}

/// Evaluate a dotted path expression (`$.a.b.c`) against parsed content.
///
/// Segments name object keys; an all-digit segment also works as an array
/// index. Returns the first match, or `None` if the expression is malformed
/// or nothing matches.
#[must_use]
pub fn eval_path<'a>(value: &'a Value, expr: &str) -> Option<&'a Value> {
    let mut segments = expr.split('.');
    if segments.next() != Some("$") {
        return None;
    }

    let mut current = value;
    for segment in segments {
        if segment.is_empty() {
            return None;
        }
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Stringify an extracted value for comparison: bare strings stay unquoted,
/// scalars render via their display form, containers as compact JSON.
#[must_use]
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// True iff `expr` matches inside `value` and the stringified match equals
/// `expected` exactly. Any failure is `false`, never an error.
#[must_use]
pub fn assert_match(value: &Value, expr: &str, expected: &str) -> bool {
    eval_path(value, expr).is_some_and(|found| stringify(found) == expected)
}
