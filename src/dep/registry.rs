//! Registry of finalized deps.

use std::collections::HashMap;

use super::definition::Dep;
use super::name::CanonicalId;

/// All finalized deps, keyed by canonical id.
///
/// Registration overwrites silently on id collision, so when two names
/// canonicalize identically the later declaration wins. Iteration follows
/// first-registration order.
#[derive(Debug, Default)]
pub struct DepRegistry {
    deps: HashMap<CanonicalId, Dep>,
    order: Vec<CanonicalId>,
}

impl DepRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a dep, returning the one it replaced, if any.
    pub fn register(&mut self, dep: Dep) -> Option<Dep> {
        let id = dep.id().clone();
        let name = dep.name().to_string();
        let previous = self.deps.insert(id.clone(), dep);
        match &previous {
            Some(old) => {
                tracing::debug!(
                    "dep '{}' replaces '{}' under id {}",
                    name,
                    old.name(),
                    id
                );
            }
            None => self.order.push(id),
        }
        previous
    }

    /// Find a dep by canonical id.
    pub fn lookup(&self, id: &CanonicalId) -> Option<&Dep> {
        self.deps.get(id)
    }

    /// Find a dep by canonical id for mutation.
    pub fn lookup_mut(&mut self, id: &CanonicalId) -> Option<&mut Dep> {
        self.deps.get_mut(id)
    }

    /// Find a dep by its free-form name.
    pub fn lookup_name(&self, name: &str) -> Option<&Dep> {
        self.lookup(&CanonicalId::from_name(name))
    }

    /// Check if a dep with this canonical id exists.
    pub fn contains(&self, id: &CanonicalId) -> bool {
        self.deps.contains_key(id)
    }

    /// Get the number of registered deps.
    pub fn len(&self) -> usize {
        self.deps.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }

    /// Iterate deps in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Dep> {
        self.order.iter().filter_map(|id| self.deps.get(id))
    }
}
