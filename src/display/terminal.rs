//! TTY detection and color support logic

use std::io::IsTerminal;

/// Determine if colors should be used based on environment and TTY status
pub fn should_use_colors() -> bool {
    colors_enabled(
        std::env::var("NO_COLOR").ok().as_deref(),
        std::env::var("CLICOLOR_FORCE").ok().as_deref(),
        std::env::var("CLICOLOR").ok().as_deref(),
        std::io::stdout().is_terminal(),
    )
}

/// Color decision from the raw environment values.
///
/// Precedence: `NO_COLOR` (https://no-color.org/), then `CLICOLOR_FORCE`
/// (enables colors even when piped), then `CLICOLOR=0`, then TTY status.
fn colors_enabled(
    no_color: Option<&str>,
    clicolor_force: Option<&str>,
    clicolor: Option<&str>,
    is_tty: bool,
) -> bool {
    if no_color.is_some() {
        return false;
    }

    if clicolor_force.is_some_and(|v| v != "0") {
        return true;
    }

    if clicolor == Some("0") {
        return false;
    }

    is_tty
}
