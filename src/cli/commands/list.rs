//! List command implementation.
//!
//! `babu --list` shows declared deps in declaration order.

use std::path::{Path, PathBuf};

use crate::babufile::Babufile;
use crate::error::Result;
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    file: Option<PathBuf>,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, file: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            file,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, reporter: &mut Reporter) -> Result<CommandResult> {
        let babufile = Babufile::locate(&self.project_root, self.file.as_deref())?;

        for dep in babufile.registry.iter() {
            let requires = dep.requirements().names();
            if requires.is_empty() {
                reporter.message(dep.name());
            } else {
                reporter.message(&format!("{} (requires: {})", dep.name(), requires.join(", ")));
            }
        }
        reporter.flush();

        Ok(CommandResult::success())
    }
}
