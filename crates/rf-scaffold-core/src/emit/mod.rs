//! Document writers.
//!
//! Each writer renders one artifact to a `String` from the shared module
//! name and case-record sequence; file placement and atomic replacement are
//! the generator's job. The rendered vocabulary (keyword names, argument
//! order, variable binding, tag set) is a contract with the external Robot
//! Framework engine and is preserved verbatim.

pub mod library;
pub mod runner;
pub mod suite;

/// Tags stamped on every generated suite.
pub(crate) const FORCE_TAGS: &str = "priority-P0    owner-autogen    branch-dev";

/// Per-case timeout, in the engine's time units.
pub(crate) const CASE_TIMEOUT: &str = "300";
