//! Shell execution of action bodies.

pub mod command;

pub use command::{default_shell, ShellRunner};
