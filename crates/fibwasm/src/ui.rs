//! Styled status lines for the terminal.

use console::{style, Color};

/// Whether styled output is allowed (`NO_COLOR` unset and a capable terminal).
#[must_use]
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

fn tag(label: &str, color: Color) -> String {
    let tag = format!("[{label}]");
    if colors_enabled() {
        style(tag).fg(color).bold().to_string()
    } else {
        tag
    }
}

/// Print a section header.
pub fn print_header(text: &str) {
    if colors_enabled() {
        println!("{}", style(text).bold().cyan());
    } else {
        println!("{text}");
    }
}

/// Print an aligned `name: value` line.
pub fn print_field(name: &str, value: &str) {
    println!("  {:<8} {value}", format!("{name}:"));
}

/// Print a success message.
pub fn print_success(text: &str) {
    println!("{} {text}", tag("OK", Color::Green));
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", tag("ERROR", Color::Red));
}
