//! Terminal styling for informational lines. Never applied to mindmap output.

use std::io::IsTerminal;

const BOLD: &str = "\x1b[1m";
const UNDERLINE: &str = "\x1b[4m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

fn enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

fn paint(codes: &[&str], text: &str) -> String {
    if enabled() {
        format!("{}{}{}", codes.concat(), text, RESET)
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str) -> String {
    paint(&[BOLD], text)
}

pub fn underline(text: &str) -> String {
    paint(&[UNDERLINE], text)
}

pub fn success(text: &str) -> String {
    paint(&[GREEN, BOLD], text)
}
