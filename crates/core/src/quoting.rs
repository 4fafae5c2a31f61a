//! Quoting of argument values and parameters.
//!
//! This is a deliberately small heuristic that only looks at quote characters
//! and spaces. It is not a general purpose shell escaper: other shell
//! metacharacters (`$`, `;`, backticks, ...) pass through untouched.

const SINGLE_QUOTE: char = '\'';
const DOUBLE_QUOTE: char = '"';
const SPACE: char = ' ';

/// Quotes a value for inclusion in a shell command line.
///
/// The rules are applied in order:
///
/// 1. A value containing a single quote has every `"` escaped as `\"` and is
///    wrapped in double quotes.
/// 2. A value containing only double quotes is wrapped in single quotes.
/// 3. A value containing a space is wrapped in double quotes.
/// 4. Anything else is returned as is.
///
/// # Examples
///
/// ```
/// use cmdline_core::quoting::quote;
///
/// assert_eq!(quote("plain value"), "\"plain value\"");
/// assert_eq!(quote("hello \"x\" world"), "'hello \"x\" world'");
/// assert_eq!(quote("noquotesnospace"), "noquotesnospace");
/// ```
pub fn quote<S: AsRef<str>>(value: S) -> String {
    let value = value.as_ref();
    let has_single_quote = value.contains(SINGLE_QUOTE);
    let has_double_quote = value.contains(DOUBLE_QUOTE);

    if has_single_quote {
        // With no double quote present the escaping leaves the value unchanged.
        let escaped = value.replace(DOUBLE_QUOTE, "\\\"");
        format!("\"{escaped}\"")
    } else if has_double_quote {
        format!("'{value}'")
    } else if value.contains(SPACE) {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

/// Escapes every space in a command name with a backslash.
///
/// Names are never wrapped in quotes.
pub fn escape_spaces<S: AsRef<str>>(value: S) -> String {
    value.as_ref().replace(SPACE, "\\ ")
}
