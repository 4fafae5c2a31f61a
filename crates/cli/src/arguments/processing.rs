use cmdline_core::command::{CommandDescriptor, Separators};
use cmdline_core::error::Error::ArgumentFormat;
use cmdline_core::error::Result;

/// Splits a `NAME` or `NAME=VALUE` argument at the first `=`.
///
/// Everything after the first `=` is the value, so values may themselves
/// contain `=`.
///
/// # Errors
///
/// Returns [`ArgumentFormat`] for an empty string.
///
/// # Examples
///
/// ```rust
/// use cmdline_cli::arguments::parse_argument;
///
/// let (name, value) = parse_argument("dest=a=b").unwrap();
/// assert_eq!(name, "dest");
/// assert_eq!(value.as_deref(), Some("a=b"));
/// ```
pub fn parse_argument(raw: &str) -> Result<(String, Option<String>)> {
    if raw.is_empty() {
        return Err(ArgumentFormat(raw.to_string()));
    }

    Ok(match raw.split_once('=') {
        Some((name, value)) => (name.to_string(), Some(value.to_string())),
        None => (raw.to_string(), None),
    })
}

/// Parses every raw argument and appends it to the descriptor in order.
///
/// # Errors
///
/// Returns an error on the first argument that cannot be parsed. Nothing is
/// appended in that case.
pub fn apply_arguments(descriptor: &mut CommandDescriptor, raw_arguments: &[String]) -> Result<()> {
    let parsed = raw_arguments
        .iter()
        .map(|raw| parse_argument(raw))
        .collect::<Result<Vec<_>>>()?;

    for (name, value) in parsed {
        descriptor.add_argument(name, value);
    }

    Ok(())
}

/// Individual separator replacements given on the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeparatorOverrides {
    pub short_prefix: Option<String>,
    pub short_value_separator: Option<String>,
    pub long_prefix: Option<String>,
    pub long_value_separator: Option<String>,
}

impl SeparatorOverrides {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.short_prefix.is_none()
            && self.short_value_separator.is_none()
            && self.long_prefix.is_none()
            && self.long_value_separator.is_none()
    }

    /// Returns `base` with every overridden field replaced.
    #[must_use]
    pub fn apply(&self, base: &Separators) -> Separators {
        let pick = |value: &Option<String>, fallback: &String| {
            value.clone().unwrap_or_else(|| fallback.clone())
        };

        Separators {
            short_prefix: pick(&self.short_prefix, &base.short_prefix),
            short_value_separator: pick(&self.short_value_separator, &base.short_value_separator),
            long_prefix: pick(&self.long_prefix, &base.long_prefix),
            long_value_separator: pick(&self.long_value_separator, &base.long_value_separator),
        }
    }
}
