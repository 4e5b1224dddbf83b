//! Sequential dep declaration.
//!
//! Deps are declared one at a time. Naming a new dep with
//! [`Declarations::dep`] finalizes the one in progress, and
//! [`Declarations::finish`] finalizes the last one before anything runs.
//! Finalization compiles the accumulated prerequisites, snapshots the
//! authored met/meet bodies into the dep, and registers it.

use crate::error::{BabuError, Result};

use super::action::Action;
use super::definition::{Dep, Requirements};
use super::registry::DepRegistry;

/// In-progress declaration of a single dep.
#[derive(Debug)]
struct DepBuilder {
    name: String,
    requires: Vec<String>,
    met: Action,
    meet: Action,
    args: Vec<String>,
}

impl DepBuilder {
    fn new(name: String) -> Self {
        Self {
            name,
            requires: Vec::new(),
            met: Action::Missing,
            meet: Action::Missing,
            args: Vec::new(),
        }
    }

    fn build(self) -> Dep {
        Dep::new(
            self.name,
            self.met,
            self.meet,
            Requirements::new(self.requires),
            self.args,
        )
    }
}

/// Declaration session that populates a [`DepRegistry`].
#[derive(Debug, Default)]
pub struct Declarations {
    registry: DepRegistry,
    current: Option<DepBuilder>,
}

impl Declarations {
    /// Start an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a declaration for `name`, finalizing the previous one.
    pub fn dep(&mut self, name: impl Into<String>) -> &mut Self {
        self.finalize();
        self.current = Some(DepBuilder::new(name.into()));
        self
    }

    /// Append a prerequisite to the open declaration.
    pub fn requires(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.open("requires")?.requires.push(name.into());
        Ok(self)
    }

    /// Set the met check of the open declaration. A later call replaces it.
    pub fn met(&mut self, action: Action) -> Result<&mut Self> {
        self.open("met")?.met = action;
        Ok(self)
    }

    /// Set the meet remediation of the open declaration. A later call replaces it.
    pub fn meet(&mut self, action: Action) -> Result<&mut Self> {
        self.open("meet")?.meet = action;
        Ok(self)
    }

    /// Append arguments passed to the open declaration's actions.
    pub fn args<I, S>(&mut self, args: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.open("args")?
            .args
            .extend(args.into_iter().map(Into::into));
        Ok(self)
    }

    /// Name of the dep currently being declared.
    pub fn in_progress(&self) -> Option<&str> {
        self.current.as_ref().map(|b| b.name.as_str())
    }

    /// Finalize the open declaration and hand over the registry.
    pub fn finish(mut self) -> DepRegistry {
        self.finalize();
        self.registry
    }

    fn finalize(&mut self) {
        if let Some(builder) = self.current.take() {
            tracing::debug!("finalizing dep '{}'", builder.name);
            self.registry.register(builder.build());
        }
    }

    fn open(&mut self, what: &str) -> Result<&mut DepBuilder> {
        self.current
            .as_mut()
            .ok_or_else(|| BabuError::Declaration {
                message: format!("'{}' used before any dep was declared", what),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_dep_finalizes_previous() {
        let mut decl = Declarations::new();
        decl.dep("git").met(Action::shell("command -v git")).unwrap();
        decl.dep("branch");

        assert_eq!(decl.in_progress(), Some("branch"));
        let registry = decl.finish();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup_name("git").unwrap().met().script(),
            Some("command -v git")
        );
    }

    #[test]
    fn bodies_do_not_leak_into_next_dep() {
        let mut decl = Declarations::new();
        decl.dep("first")
            .met(Action::shell("check"))
            .unwrap()
            .meet(Action::shell("fix"))
            .unwrap();
        decl.dep("second");

        let registry = decl.finish();
        let second = registry.lookup_name("second").unwrap();
        assert!(!second.met().is_defined());
        assert!(!second.meet().is_defined());
    }

    #[test]
    fn requires_appends_in_order() {
        let mut decl = Declarations::new();
        decl.dep("default")
            .requires("b")
            .unwrap()
            .requires("a")
            .unwrap();

        let registry = decl.finish();
        assert_eq!(
            registry.lookup_name("default").unwrap().requirements().names(),
            ["b", "a"]
        );
    }

    #[test]
    fn later_met_replaces_earlier() {
        let mut decl = Declarations::new();
        decl.dep("x")
            .met(Action::shell("one"))
            .unwrap()
            .met(Action::shell("two"))
            .unwrap();

        let registry = decl.finish();
        assert_eq!(registry.lookup_name("x").unwrap().met().script(), Some("two"));
    }

    #[test]
    fn args_accumulate() {
        let mut decl = Declarations::new();
        decl.dep("branch").args(["main"]).unwrap().args(vec!["origin"]).unwrap();

        let registry = decl.finish();
        assert_eq!(registry.lookup_name("branch").unwrap().args(), ["main", "origin"]);
    }

    #[test]
    fn authoring_without_open_dep_is_an_error() {
        let mut decl = Declarations::new();
        let err = decl.requires("git").unwrap_err();
        assert!(matches!(err, BabuError::Declaration { .. }));
        assert!(err.to_string().contains("requires"));
    }

    #[test]
    fn colliding_declaration_replaces_previous() {
        let mut decl = Declarations::new();
        decl.dep("a b").met(Action::shell("first")).unwrap();
        decl.dep("a-b").met(Action::shell("second")).unwrap();

        let registry = decl.finish();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup_name("a.b").unwrap().met().script(), Some("second"));
    }

    #[test]
    fn finish_without_declarations_is_empty() {
        assert!(Declarations::new().finish().is_empty());
    }
}
