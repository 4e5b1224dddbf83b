//! Visual theme and styling.

use console::Style;

/// Glyph appended to a section that succeeded.
pub const SUCCESS_GLYPH: &str = "✓";

/// Glyph appended to a section that failed.
pub const FAILURE_GLYPH: &str = "✗";

/// Glyph prefixed to warnings.
pub const WARNING_GLYPH: &str = "⚠";

/// Babu's visual theme.
#[derive(Debug, Clone)]
pub struct BabuTheme {
    /// Style for success glyphs (green).
    pub success: Style,
    /// Style for failure glyphs and errors (red bold).
    pub error: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for dep labels (bold).
    pub label: Style,
    /// Style for braces and markers like "(cached)" (dim).
    pub dim: Style,
}

impl Default for BabuTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl BabuTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            warning: Style::new().color256(208),
            label: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            warning: Style::new(),
            label: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// The styled success or failure glyph.
    pub fn glyph(&self, success: bool) -> String {
        if success {
            self.success.apply_to(SUCCESS_GLYPH).to_string()
        } else {
            self.error.apply_to(FAILURE_GLYPH).to_string()
        }
    }

    /// Format a section opening: `label {`.
    pub fn format_enter(&self, label: &str) -> String {
        format!("{} {}", self.label.apply_to(label), self.dim.apply_to("{"))
    }

    /// Format a section closing: `} label ✓`, or `} ✓` without a label.
    pub fn format_exit(&self, label: &str, success: bool) -> String {
        if label.is_empty() {
            format!("{} {}", self.dim.apply_to("}"), self.glyph(success))
        } else {
            format!(
                "{} {} {}",
                self.dim.apply_to("}"),
                self.label.apply_to(label),
                self.glyph(success)
            )
        }
    }

    /// Format a short-circuited dep: `label (cached) ✓`.
    pub fn format_cached(&self, label: &str) -> String {
        format!(
            "{} {} {}",
            self.label.apply_to(label),
            self.dim.apply_to("(cached)"),
            self.glyph(true)
        )
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("{} {}", WARNING_GLYPH, msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("{} {}", FAILURE_GLYPH, msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
