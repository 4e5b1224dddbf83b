//! Dependency resolution and execution.
//!
//! - [`Engine`] - Depth-first resolver that satisfies prerequisites, runs
//!   the met check, and remediates with a bounded budget
//! - [`ActionRunner`] - The seam through which action bodies are executed
//! - [`DepOutcome`] - How a successful run was reached
//!
//! # Example
//!
//! ```no_run
//! use babu::dep::{Action, Declarations};
//! use babu::engine::Engine;
//! use babu::shell::ShellRunner;
//! use babu::ui::{OutputMode, Reporter};
//!
//! let mut decl = Declarations::new();
//! decl.dep("default").met(Action::shell("test -d .git")).unwrap();
//!
//! let runner = ShellRunner::new(std::env::current_dir().unwrap());
//! let (mut reporter, _transcript) = Reporter::capture(OutputMode::Normal);
//! let mut engine = Engine::new(decl.finish(), runner, &mut reporter);
//! let outcome = engine.run("default");
//! ```

pub mod executor;
pub mod runner;

pub use executor::{DepOutcome, Engine, MEET_ATTEMPTS};
pub use runner::ActionRunner;
