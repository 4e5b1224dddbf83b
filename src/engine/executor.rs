//! Depth-first dep execution.

use crate::dep::{Action, ActionStatus, CanonicalId, Dep, DepRegistry};
use crate::error::{BabuError, Result};
use crate::ui::Reporter;

use super::runner::ActionRunner;

/// Meet attempts allowed per `run` of a dep.
///
/// After this many remediations the met check is consulted one last time
/// and its verdict is final.
pub const MEET_ATTEMPTS: u32 = 1;

/// How a successful run was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepOutcome {
    /// The met check passed without remediation.
    AlreadyMet,
    /// The met check passed after running meet.
    Met,
    /// The dep had already succeeded earlier in this process.
    Cached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Met,
    Meet,
}

/// Resolves and executes deps from a finalized registry.
///
/// Execution is strictly sequential: a dep's prerequisites run one after
/// another in declared order, each to completion, before its own met
/// check. A dep that succeeds is marked satisfied and every later request
/// for it short-circuits with a cached report.
pub struct Engine<'a, R> {
    registry: DepRegistry,
    runner: R,
    reporter: &'a mut Reporter,
    /// Deps currently being resolved, outermost first.
    stack: Vec<(CanonicalId, String)>,
}

impl<'a, R: ActionRunner> Engine<'a, R> {
    /// Create an engine over a finalized registry.
    pub fn new(registry: DepRegistry, runner: R, reporter: &'a mut Reporter) -> Self {
        Self {
            registry,
            runner,
            reporter,
            stack: Vec::new(),
        }
    }

    /// The registry, including satisfied flags set by earlier runs.
    pub fn registry(&self) -> &DepRegistry {
        &self.registry
    }

    /// Hand back the registry, including satisfied flags.
    pub fn into_registry(self) -> DepRegistry {
        self.registry
    }

    /// Satisfy the dep called `name` and everything it requires.
    pub fn run(&mut self, name: &str) -> Result<DepOutcome> {
        let id = CanonicalId::from_name(name);

        let dep = match self.registry.lookup(&id) {
            Some(dep) => dep.clone(),
            None => {
                self.reporter.error(&format!("unknown dep '{}'", name));
                return Err(BabuError::UnknownDep {
                    name: name.to_string(),
                });
            }
        };

        if dep.is_satisfied() {
            tracing::debug!("'{}' already satisfied", name);
            self.reporter.cached(name);
            return Ok(DepOutcome::Cached);
        }

        if let Some(start) = self.stack.iter().position(|(open, _)| *open == id) {
            let mut path: Vec<&str> = self.stack[start..]
                .iter()
                .map(|(_, label)| label.as_str())
                .collect();
            path.push(name);
            let cycle = path.join(" -> ");
            self.reporter
                .error(&format!("circular dependency: {}", cycle));
            return Err(BabuError::CircularDependency { cycle });
        }

        self.stack.push((id.clone(), name.to_string()));
        self.reporter.enter_section(name);

        let result = self.satisfy(&dep);

        self.stack.pop();
        match &result {
            Ok(outcome) => {
                tracing::debug!("'{}' satisfied ({:?})", name, outcome);
                if let Some(entry) = self.registry.lookup_mut(&id) {
                    entry.mark_satisfied();
                }
                self.reporter.exit_section(name, true);
            }
            Err(e) => {
                tracing::debug!("'{}' failed: {}", name, e);
                self.reporter.exit_section(name, false);
            }
        }

        result
    }

    /// Prerequisites first, then the convergence loop.
    fn satisfy(&mut self, dep: &Dep) -> Result<DepOutcome> {
        dep.requirements().resolve(|prerequisite| {
            self.run(prerequisite)
                .map(|_| ())
                .map_err(|source| BabuError::PrerequisiteFailed {
                    dep: dep.name().to_string(),
                    prerequisite: prerequisite.to_string(),
                    source: Box::new(source),
                })
        })?;

        let mut budget = MEET_ATTEMPTS;
        let mut remediated = false;

        loop {
            let status = self.invoke(dep, Phase::Met)?;
            if status.is_success() {
                return Ok(if remediated {
                    DepOutcome::Met
                } else {
                    DepOutcome::AlreadyMet
                });
            }

            if budget == 0 {
                return Err(BabuError::Unmet {
                    dep: dep.name().to_string(),
                    exit_code: status.exit_code,
                });
            }
            budget -= 1;

            self.reporter.enter_section("meet");
            match self.invoke(dep, Phase::Meet) {
                Ok(meet) => {
                    if !meet.is_success() {
                        tracing::debug!(
                            "meet for '{}' exited with {:?}",
                            dep.name(),
                            meet.exit_code
                        );
                    }
                    self.reporter.exit_section("", meet.is_success());
                }
                Err(e) => {
                    self.reporter.exit_section("", false);
                    return Err(e);
                }
            }
            remediated = true;
        }
    }

    /// Run one of the dep's bodies, or its stub when none was authored.
    fn invoke(&mut self, dep: &Dep, phase: Phase) -> Result<ActionStatus> {
        let action = match phase {
            Phase::Met => dep.met(),
            Phase::Meet => dep.meet(),
        };

        match action {
            Action::Shell(script) => {
                let reporter = &mut *self.reporter;
                self.runner
                    .run(script, dep.args(), &mut |line| reporter.action_output(line))
            }
            Action::Missing => match phase {
                Phase::Met if !dep.meet().is_defined() => {
                    self.reporter.warning(&format!(
                        "'{}' has no met check or meet; it only groups its prerequisites",
                        dep.name()
                    ));
                    Ok(ActionStatus::success())
                }
                Phase::Met => {
                    self.reporter.warning(&format!(
                        "'{}' has no met check; treating it as unmet",
                        dep.name()
                    ));
                    Ok(ActionStatus::failure(Some(1)))
                }
                Phase::Meet => {
                    self.reporter
                        .warning(&format!("'{}' has no meet; nothing to do", dep.name()));
                    Ok(ActionStatus::success())
                }
            },
        }
    }
}
