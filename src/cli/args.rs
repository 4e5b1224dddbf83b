//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// Dep run when none is named.
pub const DEFAULT_DEP: &str = "default";

/// Babu - declarative deps with met checks and meet fixes.
#[derive(Debug, Parser)]
#[command(name = "babu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dep to run
    #[arg(default_value = DEFAULT_DEP)]
    pub dep: String,

    /// Path to the Babufile (overrides ./Babufile)
    #[arg(short, long, env = "BABU_FILE")]
    pub file: Option<PathBuf>,

    /// List declared deps instead of running one
    #[arg(short, long)]
    pub list: bool,

    /// Hide output printed by met and meet
    #[arg(short, long)]
    pub quiet: bool,

    /// Only show errors
    #[arg(long, conflicts_with = "quiet")]
    pub silent: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.silent {
            OutputMode::Silent
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}
