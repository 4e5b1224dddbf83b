//! Output verbosity.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show sections and everything the actions print.
    #[default]
    Normal,
    /// Show sections only; action output is dropped.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows lines printed by met/meet actions.
    pub fn shows_action_output(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Check if this mode shows sections and warnings.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_str() {
        assert_eq!("quiet".parse::<OutputMode>(), Ok(OutputMode::Quiet));
        assert_eq!("SILENT".parse::<OutputMode>(), Ok(OutputMode::Silent));
        assert!("verbose".parse::<OutputMode>().is_err());
    }

    #[test]
    fn output_mode_shows_action_output() {
        assert!(OutputMode::Normal.shows_action_output());
        assert!(!OutputMode::Quiet.shows_action_output());
        assert!(!OutputMode::Silent.shows_action_output());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Normal.shows_status());
        assert!(OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Silent.shows_status());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
