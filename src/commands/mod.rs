pub mod cache;
pub mod info;
pub mod search;

use std::io::IsTerminal;

const BOLD_CODE: &str = "\x1b[1m";
const RESET_CODE: &str = "\x1b[0m";

/// Wraps `text` in ANSI bold when color output is active.
pub(crate) fn bold(text: &str, use_color: bool) -> String {
    if use_color {
        format!("{BOLD_CODE}{text}{RESET_CODE}")
    } else {
        text.to_string()
    }
}

/// Whether styled output should be emitted.
pub(crate) fn use_color() -> bool {
    // Check for NO_COLOR environment variable (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    std::io::stdout().is_terminal()
}
