//! Shell-backed action runner.

use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::dep::ActionStatus;
use crate::engine::ActionRunner;
use crate::error::{BabuError, Result};

/// Value of `$0` inside action bodies.
const ARG0: &str = "babu";

/// Runs action bodies with `sh -c`.
///
/// Standard error is joined onto standard output inside the shell, so the
/// lines handed to the caller keep the exact order the action wrote them.
/// Lines are delivered as soon as they are read.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: PathBuf,
    cwd: PathBuf,
    env: BTreeMap<String, String>,
}

impl ShellRunner {
    /// Run actions in `cwd` with the default shell.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            shell: default_shell(),
            cwd: cwd.into(),
            env: BTreeMap::new(),
        }
    }

    /// Use a specific shell executable.
    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Add default environment values.
    ///
    /// A default only applies when the variable is absent from the
    /// process environment; everything else is passed through unchanged.
    pub fn with_env_defaults(mut self, defaults: &BTreeMap<String, String>) -> Self {
        for (key, value) in defaults {
            if std::env::var_os(key).is_none() {
                self.env.insert(key.clone(), value.clone());
            }
        }
        self
    }

    /// Working directory for actions.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Environment values added on top of the inherited environment.
    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }
}

impl ActionRunner for ShellRunner {
    fn run(
        &mut self,
        script: &str,
        args: &[String],
        on_line: &mut dyn FnMut(&str),
    ) -> Result<ActionStatus> {
        let start = Instant::now();

        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c")
            .arg(format!("exec 2>&1\n{}", script))
            .arg(ARG0)
            .args(args)
            .current_dir(&self.cwd)
            .envs(&self.env)
            .stdout(Stdio::piped());

        let mut child = cmd.spawn().map_err(|source| BabuError::ActionSpawn {
            command: script.to_string(),
            source,
        })?;

        if let Some(stdout) = child.stdout.take() {
            if let Err(e) = stream_lines(stdout, on_line) {
                tracing::debug!("reading action output failed: {}", e);
                // The child may still be blocked writing to the closed pipe.
                let _ = child.kill();
                child.wait()?;
                return Err(e.into());
            }
        }

        let status = child.wait()?;
        tracing::debug!(
            "action exited with {:?} after {:?}: {}",
            status.code(),
            start.elapsed(),
            script
        );

        Ok(ActionStatus {
            exit_code: status.code(),
        })
    }
}

/// Hand each line of `source` to `on_line` as soon as it is read.
fn stream_lines(source: impl Read, on_line: &mut dyn FnMut(&str)) -> io::Result<()> {
    let mut reader = BufReader::new(source);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        on_line(line.trim_end_matches(['\n', '\r']));
    }
}

/// Shell used for action bodies: `BABU_SHELL`, or `/bin/sh`.
pub fn default_shell() -> PathBuf {
    std::env::var_os("BABU_SHELL")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/bin/sh"))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(runner: &mut ShellRunner, script: &str, args: &[&str]) -> (ActionStatus, Vec<String>) {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut lines = Vec::new();
        let status = runner
            .run(script, &args, &mut |line| lines.push(line.to_string()))
            .unwrap();
        (status, lines)
    }

    #[test]
    fn successful_script_streams_lines() {
        let temp = TempDir::new().unwrap();
        let mut runner = ShellRunner::new(temp.path()).with_shell("/bin/sh");

        let (status, lines) = run(&mut runner, "echo line1; echo line2", &[]);

        assert!(status.is_success());
        assert_eq!(lines, vec!["line1", "line2"]);
    }

    #[test]
    fn lines_arrive_while_action_is_running() {
        let temp = TempDir::new().unwrap();
        let gate = temp.path().join("go");
        let mut runner = ShellRunner::new(temp.path()).with_shell("/bin/sh");

        // The action only finishes once the callback has seen its first line.
        let mut lines = Vec::new();
        let status = runner
            .run(
                "echo ready; while [ ! -f go ]; do sleep 0.01; done; echo done",
                &[],
                &mut |line| {
                    if line == "ready" {
                        std::fs::write(&gate, "").unwrap();
                    }
                    lines.push(line.to_string());
                },
            )
            .unwrap();

        assert!(status.is_success());
        assert_eq!(lines, vec!["ready", "done"]);
    }

    #[test]
    fn read_errors_are_reported() {
        let mut calls = 0;
        let err = stream_lines(FailingReader, &mut |_| calls += 1).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(calls, 0);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn stderr_is_merged_in_order() {
        let temp = TempDir::new().unwrap();
        let mut runner = ShellRunner::new(temp.path()).with_shell("/bin/sh");

        let (_, lines) = run(&mut runner, "echo one; echo two >&2; echo three", &[]);

        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn exit_code_is_reported() {
        let temp = TempDir::new().unwrap();
        let mut runner = ShellRunner::new(temp.path()).with_shell("/bin/sh");

        let (status, _) = run(&mut runner, "exit 42", &[]);

        assert!(!status.is_success());
        assert_eq!(status.exit_code, Some(42));
    }

    #[test]
    fn args_become_positional_parameters() {
        let temp = TempDir::new().unwrap();
        let mut runner = ShellRunner::new(temp.path()).with_shell("/bin/sh");

        let (_, lines) = run(&mut runner, "echo \"$0:$1:$2\"", &["main", "two words"]);

        assert_eq!(lines, vec!["babu:main:two words"]);
    }

    #[test]
    fn runs_in_working_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker"), "").unwrap();
        let mut runner = ShellRunner::new(temp.path()).with_shell("/bin/sh");

        let (status, _) = run(&mut runner, "test -f marker", &[]);

        assert!(status.is_success());
    }

    #[test]
    fn env_defaults_fill_only_missing_variables() {
        let temp = TempDir::new().unwrap();
        let mut defaults = BTreeMap::new();
        defaults.insert("PATH".to_string(), "/nowhere".to_string());
        defaults.insert(
            "BABU_TEST_ONLY_DEFAULT".to_string(),
            "from-babufile".to_string(),
        );

        let mut runner = ShellRunner::new(temp.path())
            .with_shell("/bin/sh")
            .with_env_defaults(&defaults);

        assert!(!runner.env().contains_key("PATH"));
        let (_, lines) = run(&mut runner, "echo $BABU_TEST_ONLY_DEFAULT", &[]);
        assert_eq!(lines, vec!["from-babufile"]);
    }

    #[test]
    fn missing_shell_is_a_spawn_error() {
        let temp = TempDir::new().unwrap();
        let mut runner = ShellRunner::new(temp.path()).with_shell("/definitely/not/a/shell");

        let err = runner.run("true", &[], &mut |_| {}).unwrap_err();

        assert!(matches!(err, BabuError::ActionSpawn { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn unterminated_last_line_is_delivered() {
        let temp = TempDir::new().unwrap();
        let mut runner = ShellRunner::new(temp.path()).with_shell("/bin/sh");

        let (_, lines) = run(&mut runner, "printf 'no newline'", &[]);

        assert_eq!(lines, vec!["no newline"]);
    }
}
