//! Dep model: declarations, the registry, and name canonicalization.
//!
//! - [`CanonicalId`] - Sanitized registry key derived from a dep name
//! - [`Action`] - A met check or meet remediation body
//! - [`Dep`] - A finalized dep with its [`Requirements`]
//! - [`DepRegistry`] - All finalized deps, keyed by canonical id
//! - [`Declarations`] - The builder that finalizes each dep when the next begins
//!
//! # Example
//!
//! ```
//! use babu::dep::{Action, CanonicalId, Declarations};
//!
//! let mut decl = Declarations::new();
//! decl.dep("git").met(Action::shell("command -v git")).unwrap();
//! decl.dep("default").requires("git").unwrap();
//! let registry = decl.finish();
//!
//! let default = registry.lookup(&CanonicalId::from_name("default")).unwrap();
//! assert_eq!(default.requirements().names(), ["git"]);
//! ```

pub mod action;
pub mod declare;
pub mod definition;
pub mod name;
pub mod registry;

pub use action::{Action, ActionStatus};
pub use declare::Declarations;
pub use definition::{Dep, Requirements};
pub use name::CanonicalId;
pub use registry::DepRegistry;
