//! CLI output configuration: color and emoji gating.
//!
//! Respects the global `--color=never|always|auto` flag plus the usual
//! environment contract: `NO_COLOR` (https://no-color.org/), `CLICOLOR=0`,
//! `CLICOLOR_FORCE=1`, and `TERM=dumb`.

use std::env;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `--color=always` forces colors on (overriding `NO_COLOR`),
    /// `--color=never` forces them off, and `auto` detects from the
    /// environment and terminal.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even empty) disables colors.
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled, the plain-text alternative
/// otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}
