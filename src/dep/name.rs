//! Dep name canonicalization.
//!
//! Dep names are free-form strings. Lookups go through a [`CanonicalId`]
//! built by replacing every character outside `[A-Za-z0-9]` with
//! [`SEPARATOR`] and prepending [`NAMESPACE`]. The mapping is total but not
//! injective: `"a b"`, `"a-b"`, `"a.b"` and `"a_b"` all share one id, and
//! the last of them declared wins in the registry.

use std::fmt;

/// Prefix shared by every canonical id.
pub const NAMESPACE: &str = "babu__";

/// Replacement for each character outside `[A-Za-z0-9]`.
pub const SEPARATOR: &str = "_";

/// Registry key for a dep.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalId(String);

impl CanonicalId {
    /// Canonicalize a dep name.
    pub fn from_name(name: &str) -> Self {
        let mut id = String::with_capacity(NAMESPACE.len() + name.len());
        id.push_str(NAMESPACE);
        for c in name.chars() {
            if c.is_ascii_alphanumeric() {
                id.push(c);
            } else {
                id.push_str(SEPARATOR);
            }
        }
        Self(id)
    }

    /// The id as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphanumerics_pass_through() {
        assert_eq!(CanonicalId::from_name("git2").as_str(), "babu__git2");
    }

    #[test]
    fn other_characters_become_separators() {
        assert_eq!(
            CanonicalId::from_name("install ruby-3.2").as_str(),
            "babu__install_ruby_3_2"
        );
    }

    #[test]
    fn empty_name_is_just_the_namespace() {
        assert_eq!(CanonicalId::from_name("").as_str(), NAMESPACE);
    }

    #[test]
    fn non_ascii_characters_are_replaced_per_char() {
        assert_eq!(CanonicalId::from_name("café").as_str(), "babu__caf_");
    }

    #[test]
    fn punctuation_variants_collide() {
        let id = CanonicalId::from_name("a b");
        assert_eq!(CanonicalId::from_name("a-b"), id);
        assert_eq!(CanonicalId::from_name("a.b"), id);
        assert_eq!(CanonicalId::from_name("a_b"), id);
        assert_ne!(CanonicalId::from_name("ab"), id);
    }

    #[test]
    fn display_matches_as_str() {
        let id = CanonicalId::from_name("x/y");
        assert_eq!(id.to_string(), id.as_str());
    }
}
