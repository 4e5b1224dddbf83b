//! Babu CLI entry point.

use std::process::ExitCode;

use babu::cli::{Cli, CommandDispatcher};
use babu::ui::{BabuTheme, Reporter};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries the run transcript.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("babu=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("babu=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Babu starting with args: {:?}", cli);

    let theme = if cli.no_color {
        BabuTheme::plain()
    } else {
        BabuTheme::detect()
    };
    let mut reporter = Reporter::new(cli.output_mode(), theme);

    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            reporter.error(&format!("Error: cannot read working directory: {}", e));
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(project_root);

    match dispatcher.dispatch(&cli, &mut reporter) {
        Ok(result) => ExitCode::from(exit_status(result.exit_code)),
        Err(e) => {
            reporter.error(&format!("Error: {}", e));
            ExitCode::from(exit_status(e.exit_code()))
        }
    }
}

/// Fit an exit code into a process status, keeping failures non-zero.
fn exit_status(code: i32) -> u8 {
    match u8::try_from(code) {
        Ok(status) => status,
        Err(_) => 1,
    }
}
