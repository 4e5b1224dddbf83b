//! Run command implementation.
//!
//! `babu [DEP]` loads the Babufile and satisfies one dep.

use std::error::Error as _;
use std::path::{Path, PathBuf};

use crate::babufile::Babufile;
use crate::engine::Engine;
use crate::error::{BabuError, Result};
use crate::shell::ShellRunner;
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    file: Option<PathBuf>,
    dep: String,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, file: Option<PathBuf>, dep: &str) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            file,
            dep: dep.to_string(),
        }
    }

    /// The dep this command runs.
    pub fn dep(&self) -> &str {
        &self.dep
    }
}

impl Command for RunCommand {
    fn execute(&self, reporter: &mut Reporter) -> Result<CommandResult> {
        let babufile = Babufile::locate(&self.project_root, self.file.as_deref())?;
        let runner = ShellRunner::new(babufile.dir()).with_env_defaults(&babufile.env);

        let mut engine = Engine::new(babufile.registry, runner, reporter);
        let result = engine.run(&self.dep);
        drop(engine);

        match result {
            Ok(outcome) => {
                tracing::debug!("'{}' finished: {:?}", self.dep, outcome);
                reporter.flush();
                Ok(CommandResult::success())
            }
            Err(e) => {
                report_failure(reporter, &e);
                reporter.flush();
                Ok(CommandResult::failure(e.exit_code()))
            }
        }
    }
}

/// Print the failure chain, unless the engine already reported it inline.
fn report_failure(reporter: &mut Reporter, err: &BabuError) {
    if matches!(
        err,
        BabuError::UnknownDep { .. } | BabuError::CircularDependency { .. }
    ) {
        return;
    }

    reporter.error(&err.to_string());
    let mut source = err.source();
    while let Some(cause) = source {
        reporter.error(&format!("caused by: {}", cause));
        source = cause.source();
    }
}
