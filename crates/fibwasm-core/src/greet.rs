//! Greeting helper exported next to the engine.

use crate::constants::DEFAULT_GREETING_NAME;

/// Build a greeting for `name`, falling back to a generic one when the
/// name is blank.
///
/// # Example
/// ```
/// assert_eq!(fibwasm_core::greet("Alice"), "Hello, Alice!");
/// assert_eq!(fibwasm_core::greet(""), "Hello, World!");
/// ```
#[must_use]
pub fn greet(name: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() {
        DEFAULT_GREETING_NAME
    } else {
        name
    };
    format!("Hello, {name}!")
}
