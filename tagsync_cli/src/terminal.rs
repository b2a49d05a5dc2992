//! Terminal detection and capability utilities

use is_terminal::IsTerminal;
use std::env;
use std::io::stderr;

/// Check if stderr is connected to a terminal
pub fn stderr_is_terminal() -> bool {
    stderr().is_terminal()
}

/// Decide whether coloured output should be produced
///
/// `NO_COLOR` (any value) and `TERM=dumb` always win over the config file.
pub fn should_colorize(color_enabled: bool) -> bool {
    if !color_enabled || env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if env::var("TERM").unwrap_or_default() == "dumb" {
        return false;
    }

    stderr_is_terminal()
}

/// Apply the colour decision process-wide
pub fn configure_colors(color_enabled: bool) {
    if !should_colorize(color_enabled) {
        colored::control::set_override(false);
    }
}
