//! Terminal output.
//!
//! This module provides:
//! - [`Reporter`] for the nested, indented run transcript
//! - [`BabuTheme`] for colored or plain rendering
//! - [`OutputMode`] for verbosity
//!
//! # Example
//!
//! ```
//! use babu::ui::{OutputMode, Reporter};
//!
//! let (mut reporter, transcript) = Reporter::capture(OutputMode::Normal);
//! reporter.enter_section("default");
//! reporter.exit_section("default", true);
//! assert_eq!(transcript.stdout(), "default {\n} default ✓\n");
//! ```

pub mod output;
pub mod reporter;
pub mod theme;

pub use output::OutputMode;
pub use reporter::{Reporter, Transcript, INDENT_UNIT};
pub use theme::{should_use_colors, BabuTheme, FAILURE_GLYPH, SUCCESS_GLYPH};
