/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Present counts in green, absent counts in red, zero greyed out.
pub fn colorize_count(value: u64, present: bool) -> String {
    if value == 0 {
        format!("{GREY}{value}{RESET}")
    } else if present {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
