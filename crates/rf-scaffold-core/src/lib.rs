//! Core library for `rf-scaffold`.
//!
//! Given a build-output module root, generates three linked Robot Framework
//! artifacts: a test-suite document, a companion Python stub library, and a
//! shell invocation script. The three documents cross-reference each other
//! through a shared module name and a four-digit case-code sequence.
//!
//! Pipeline: [`scan`] walks the root and groups files by directory,
//! [`index`] turns the ordered groups into case records, [`rules`] supplies
//! the positional assertion table, and [`emit`] renders the documents that
//! [`generate`] writes out atomically. [`ops`] holds the native
//! implementation of the four operations the generated stub exposes to the
//! test-execution engine.

pub mod emit;
pub mod generate;
pub mod index;
pub mod module;
pub mod ops;
pub mod rules;
pub mod scan;

pub use generate::{Artifacts, GenerateError, Generator};
pub use index::{CaseCode, CaseKind, CaseRecord, IndexError, Numbering};
pub use module::{ModuleName, ModuleNameError};
pub use rules::{AssertionRule, RuleError, RuleTable};
pub use scan::{DirectoryGroup, ScanError, ScanResult};
