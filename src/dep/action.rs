//! Action bodies for met checks and meet remediations.

/// An executable body attached to a dep.
///
/// A dep that never authors one of its bodies keeps [`Action::Missing`],
/// which the engine treats as a built-in stub instead of running anything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    /// Shell script run with the dep's arguments as positional parameters.
    Shell(String),

    /// No body was authored for this slot.
    #[default]
    Missing,
}

impl Action {
    /// Create a shell action.
    pub fn shell(script: impl Into<String>) -> Self {
        Self::Shell(script.into())
    }

    /// Check whether a body was authored.
    pub fn is_defined(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// The script text, if any.
    pub fn script(&self) -> Option<&str> {
        match self {
            Self::Shell(script) => Some(script),
            Self::Missing => None,
        }
    }
}

/// Completion status of one action invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionStatus {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,
}

impl ActionStatus {
    /// A zero exit status.
    pub fn success() -> Self {
        Self { exit_code: Some(0) }
    }

    /// A failing status with the given code.
    pub fn failure(exit_code: Option<i32>) -> Self {
        Self { exit_code }
    }

    /// Whether the action exited with status zero.
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}
