//! Finalized dep definitions.

use crate::error::Result;

use super::action::Action;
use super::name::CanonicalId;

/// Ordered prerequisites of a dep, compiled at finalization.
///
/// Names stay unresolved until run time, so a dep may require something
/// declared after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements(Vec<String>);

impl Requirements {
    /// Build from prerequisite names in declared order.
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Prerequisite names in declared order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Check if there are no prerequisites.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Satisfy every prerequisite in order through `run`.
    ///
    /// Stops at the first failure and returns it; later prerequisites are
    /// never attempted. With no prerequisites this succeeds immediately.
    pub fn resolve<F>(&self, mut run: F) -> Result<()>
    where
        F: FnMut(&str) -> Result<()>,
    {
        for name in &self.0 {
            run(name)?;
        }
        Ok(())
    }
}

/// A finalized dep.
#[derive(Debug, Clone)]
pub struct Dep {
    name: String,
    id: CanonicalId,
    met: Action,
    meet: Action,
    requirements: Requirements,
    args: Vec<String>,
    satisfied: bool,
}

impl Dep {
    /// Create a dep. The canonical id is derived from `name`.
    pub fn new(
        name: impl Into<String>,
        met: Action,
        meet: Action,
        requirements: Requirements,
        args: Vec<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id: CanonicalId::from_name(&name),
            name,
            met,
            meet,
            requirements,
            args,
            satisfied: false,
        }
    }

    /// The name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The registry key.
    pub fn id(&self) -> &CanonicalId {
        &self.id
    }

    /// The met check.
    pub fn met(&self) -> &Action {
        &self.met
    }

    /// The meet remediation.
    pub fn meet(&self) -> &Action {
        &self.meet
    }

    /// Prerequisites in declared order.
    pub fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    /// Arguments passed to both actions.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether this dep already succeeded in this process.
    pub fn is_satisfied(&self) -> bool {
        self.satisfied
    }

    /// Record a successful run. Only the engine's success path calls this.
    pub(crate) fn mark_satisfied(&mut self) {
        self.satisfied = true;
    }
}
