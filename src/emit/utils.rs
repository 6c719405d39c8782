//! Common utilities for declaration emission.
//!
//! This module provides the member-name quoting helpers shared across the
//! declaration emitters.

/// Check if a member name must be quoted as a string-literal key.
///
/// Returns true if the name:
/// - Contains a period or hyphen
/// - Is empty
/// - Starts with a digit or a non-word character (outside `[A-Za-z0-9_]`)
pub fn needs_quoting(name: &str) -> bool {
    if name.contains('.') || name.contains('-') {
        return true;
    }
    match name.chars().next() {
        Some(c) => c.is_ascii_digit() || !(c.is_ascii_alphanumeric() || c == '_'),
        None => true,
    }
}

/// Escape a string for use in TypeScript string literals.
/// Escapes backslashes and double quotes.
pub fn escape_ts_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Quote a member name if needed for use as a property or enum key.
/// Returns the name quoted with escaped special characters if needed,
/// or the original name if it's a valid bare identifier.
pub fn quote_if_needed(name: &str) -> String {
    if needs_quoting(name) {
        format!("\"{}\"", escape_ts_string(name))
    } else {
        name.to_string()
    }
}
