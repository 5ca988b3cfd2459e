/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Red for a non-zero count, green otherwise.
pub fn color_for_count(count: usize) -> &'static str {
    if count > 0 { RED } else { GREEN }
}

pub fn paint(text: impl std::fmt::Display, color: &str) -> String {
    format!("{color}{text}{RESET}")
}
