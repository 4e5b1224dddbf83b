//! Error types for Babu operations.
//!
//! This module defines [`BabuError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure in a dep chain is fatal to the dep that observed it and
//!   propagates upward unchanged; there is no partial success.
//! - [`BabuError::PrerequisiteFailed`] wraps its cause, so the full path
//!   from the requested dep down to the innermost failure is available
//!   through [`std::error::Error::source`].
//! - [`BabuError::exit_code`] decides the process exit status.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Babu operations.
#[derive(Debug, Error)]
pub enum BabuError {
    /// No definition file in the expected directory.
    #[error("Babufile not found in {}", dir.display())]
    DefinitionNotFound { dir: PathBuf },

    /// The definition file exists but could not be parsed.
    #[error("Failed to parse {}: {message}", path.display())]
    DefinitionParse { path: PathBuf, message: String },

    /// The declaration protocol was used out of order.
    #[error("Invalid declaration: {message}")]
    Declaration { message: String },

    /// A dep was referenced that is not in the registry.
    #[error("unknown dep '{name}'")]
    UnknownDep { name: String },

    /// A dep was re-entered while it was still being resolved.
    #[error("Circular dependency detected: {cycle}")]
    CircularDependency { cycle: String },

    /// One of a dep's prerequisites did not converge.
    #[error("'{dep}' requires '{prerequisite}', which failed")]
    PrerequisiteFailed {
        dep: String,
        prerequisite: String,
        #[source]
        source: Box<BabuError>,
    },

    /// The met check still fails after the remediation budget is spent.
    #[error("'{dep}' is not met (exit code {exit_code:?})")]
    Unmet { dep: String, exit_code: Option<i32> },

    /// The shell for an action could not be started.
    #[error("Could not run action '{command}'")]
    ActionSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BabuError {
    /// Process exit status for this error.
    ///
    /// Unmet deps relay the exit code of their last met check; a
    /// prerequisite failure relays whatever its cause would.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DefinitionNotFound { .. }
            | Self::DefinitionParse { .. }
            | Self::Declaration { .. } => 2,
            Self::UnknownDep { .. } => 3,
            Self::CircularDependency { .. } => 4,
            Self::PrerequisiteFailed { source, .. } => source.exit_code(),
            Self::Unmet { exit_code, .. } => match exit_code {
                Some(code) if *code != 0 => *code,
                _ => 1,
            },
            Self::ActionSpawn { .. } | Self::Io(_) => 1,
        }
    }

    /// The innermost error in a chain of prerequisite failures.
    pub fn root_cause(&self) -> &BabuError {
        match self {
            Self::PrerequisiteFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type alias for Babu operations.
pub type Result<T> = std::result::Result<T, BabuError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn unmet(code: Option<i32>) -> BabuError {
        BabuError::Unmet {
            dep: "git".into(),
            exit_code: code,
        }
    }

    #[test]
    fn definition_not_found_displays_dir() {
        let err = BabuError::DefinitionNotFound {
            dir: PathBuf::from("/work/project"),
        };
        assert_eq!(err.to_string(), "Babufile not found in /work/project");
    }

    #[test]
    fn definition_parse_displays_path_and_message() {
        let err = BabuError::DefinitionParse {
            path: PathBuf::from("/work/Babufile"),
            message: "invalid type".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/work/Babufile"));
        assert!(msg.contains("invalid type"));
    }

    #[test]
    fn unknown_dep_displays_name() {
        let err = BabuError::UnknownDep {
            name: "no such thing".into(),
        };
        assert_eq!(err.to_string(), "unknown dep 'no such thing'");
    }

    #[test]
    fn unmet_relays_nonzero_exit_code() {
        assert_eq!(unmet(Some(7)).exit_code(), 7);
        assert_eq!(unmet(Some(0)).exit_code(), 1);
        assert_eq!(unmet(None).exit_code(), 1);
    }

    #[test]
    fn fixed_exit_codes() {
        assert_eq!(
            BabuError::DefinitionNotFound {
                dir: PathBuf::from(".")
            }
            .exit_code(),
            2
        );
        assert_eq!(BabuError::UnknownDep { name: "x".into() }.exit_code(), 3);
        assert_eq!(
            BabuError::CircularDependency {
                cycle: "a -> a".into()
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn prerequisite_failure_keeps_cause_chain() {
        let err = BabuError::PrerequisiteFailed {
            dep: "default".into(),
            prerequisite: "branch".into(),
            source: Box::new(BabuError::PrerequisiteFailed {
                dep: "branch".into(),
                prerequisite: "git".into(),
                source: Box::new(unmet(Some(5))),
            }),
        };

        assert_eq!(err.exit_code(), 5);
        assert!(matches!(err.root_cause(), BabuError::Unmet { dep, .. } if dep == "git"));
        let cause = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(cause.contains("'branch' requires 'git'"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BabuError = io_err.into();
        assert!(matches!(err, BabuError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
