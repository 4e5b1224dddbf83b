//! Babufile YAML schema.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level Babufile document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BabufileSchema {
    /// Environment defaults for actions; the real environment wins.
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    /// Deps in declaration order.
    #[serde(default)]
    pub deps: Vec<DepEntry>,
}

/// One dep declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DepEntry {
    /// Free-form dep name.
    pub name: String,

    /// Prerequisite names, run in this order.
    #[serde(default)]
    pub requires: Vec<String>,

    /// Shell body whose zero exit means the dep is met.
    #[serde(default)]
    pub met: Option<String>,

    /// Shell body that tries to make the dep met.
    #[serde(default)]
    pub meet: Option<String>,

    /// Positional arguments for both bodies.
    #[serde(default)]
    pub args: Vec<String>,
}
