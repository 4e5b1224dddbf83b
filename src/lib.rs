//! Babu - a minimal declarative dep runner.
//!
//! A dep pairs a *met* check with a *meet* remediation and may require
//! other deps. Running a dep satisfies its prerequisites depth-first, then
//! checks it, remediating at most once, and reports progress as nested,
//! indented blocks.
//!
//! # Modules
//!
//! - [`babufile`] - Loading dep declarations from a `Babufile`
//! - [`cli`] - Command-line interface and argument parsing
//! - [`dep`] - Dep model, declaration protocol, registry and name sanitizing
//! - [`engine`] - Depth-first resolution and execution
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Shell execution of action bodies
//! - [`ui`] - Nested progress reporting
//!
//! # Example
//!
//! ```
//! use babu::dep::CanonicalId;
//!
//! // Names that differ only in punctuation share a registry key
//! assert_eq!(CanonicalId::from_name("set up"), CanonicalId::from_name("set-up"));
//! ```

pub mod babufile;
pub mod cli;
pub mod dep;
pub mod engine;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{BabuError, Result};
