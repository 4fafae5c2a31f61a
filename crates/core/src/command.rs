//! The command descriptor: a command name plus ordered arguments and
//! positional parameters that render to a single shell command line.

use std::fmt::{Display, Formatter};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::execution::Executor;
use crate::quoting::{escape_spaces, quote};

/// Prefixes and value separators used when rendering arguments.
///
/// Short arguments (names of exactly one character) use the `short_*`
/// pair, every other argument uses the `long_*` pair.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Separators {
    pub short_prefix: String,
    pub short_value_separator: String,
    pub long_prefix: String,
    pub long_value_separator: String,
}

impl Separators {
    pub fn new(
        short_prefix: impl Into<String>,
        short_value_separator: impl Into<String>,
        long_prefix: impl Into<String>,
        long_value_separator: impl Into<String>,
    ) -> Self {
        Self {
            short_prefix: short_prefix.into(),
            short_value_separator: short_value_separator.into(),
            long_prefix: long_prefix.into(),
            long_value_separator: long_value_separator.into(),
        }
    }

    /// Returns the `(prefix, value separator)` pair for an argument name.
    #[must_use]
    pub fn for_name(&self, name: &str) -> (&str, &str) {
        if is_short(name) {
            (self.short_prefix.as_str(), self.short_value_separator.as_str())
        } else {
            (self.long_prefix.as_str(), self.long_value_separator.as_str())
        }
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::new("-", " ", "--", "=")
    }
}

impl<A, B, C, D> From<(A, B, C, D)> for Separators
where
    A: Into<String>,
    B: Into<String>,
    C: Into<String>,
    D: Into<String>,
{
    fn from(value: (A, B, C, D)) -> Self {
        Self::new(value.0, value.1, value.2, value.3)
    }
}

/// Whether an argument name is short, i.e. exactly one character long.
#[must_use]
pub fn is_short(name: &str) -> bool {
    name.chars().count() == 1
}

/// A named flag with an optional value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub value: Option<String>,
}

impl Argument {
    fn render(&self, separators: &Separators, output: &mut String) {
        let (prefix, value_separator) = separators.for_name(&self.name);

        output.push(' ');
        output.push_str(prefix);
        output.push_str(&self.name);

        if let Some(value) = &self.value {
            output.push_str(value_separator);
            output.push_str(&quote(value));
        }
    }
}

/// Something that can be added to a [`CommandDescriptor`] with
/// [`CommandDescriptor::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// An argument without a value, e.g. `--preserve`.
    Flag(String),
    /// An argument with a value, e.g. `-m 2`.
    KeyValue(String, String),
    /// A single positional parameter.
    Positional(String),
    /// Several positional parameters, added in order.
    PositionalBatch(Vec<String>),
}

/// A shell command under construction.
///
/// Arguments and parameters keep their insertion order. Arguments always
/// render before parameters.
///
/// # Examples
///
/// ```
/// use cmdline_core::command::CommandDescriptor;
///
/// let mut command = CommandDescriptor::new("jpegoptim");
/// command
///     .add_value("m", 2)
///     .add_flag("preserve")
///     .add_parameter("image.jpg");
///
/// assert_eq!(command.render(), "jpegoptim -m 2 --preserve image.jpg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    name: String,
    separators: Separators,
    arguments: Vec<Argument>,
    parameters: Vec<String>,
}

impl CommandDescriptor {
    pub fn new(name: impl Display) -> Self {
        Self::with_separators(name, Separators::default())
    }

    pub fn with_separators(name: impl Display, separators: impl Into<Separators>) -> Self {
        Self {
            name: name.to_string(),
            separators: separators.into(),
            arguments: Vec::new(),
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    pub fn set_separators(&mut self, separators: impl Into<Separators>) -> &mut Self {
        self.separators = separators.into();
        self
    }

    /// Appends an argument. Arguments with the same name are all kept.
    pub fn add_argument<V: Display>(&mut self, name: impl Display, value: Option<V>) -> &mut Self {
        self.arguments.push(Argument {
            name: name.to_string(),
            value: value.map(|value| value.to_string()),
        });
        self
    }

    pub fn add_flag(&mut self, name: impl Display) -> &mut Self {
        self.add_argument(name, None::<String>)
    }

    pub fn add_value(&mut self, name: impl Display, value: impl Display) -> &mut Self {
        self.add_argument(name, Some(value))
    }

    /// Returns every argument added under `name`, in insertion order.
    #[must_use]
    pub fn get_arguments(&self, name: &str) -> Vec<&Argument> {
        self.arguments
            .iter()
            .filter(|argument| argument.name == name)
            .collect()
    }

    #[must_use]
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn add_parameter(&mut self, value: impl Display) -> &mut Self {
        self.parameters.push(value.to_string());
        self
    }

    pub fn add_parameters<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.parameters
            .extend(values.into_iter().map(|value| value.to_string()));
        self
    }

    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn add(&mut self, item: Item) -> &mut Self {
        match item {
            Item::Flag(name) => self.add_flag(name),
            Item::KeyValue(name, value) => self.add_value(name, value),
            Item::Positional(value) => self.add_parameter(value),
            Item::PositionalBatch(values) => self.add_parameters(values),
        }
    }

    /// Clears arguments and parameters. The name and separators are kept.
    pub fn reset(&mut self) -> &mut Self {
        self.arguments.clear();
        self.parameters.clear();
        self
    }

    /// Renders the command line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = escape_spaces(&self.name);

        for argument in &self.arguments {
            argument.render(&self.separators, &mut output);
        }

        for parameter in &self.parameters {
            output.push(' ');
            output.push_str(&quote(parameter));
        }

        output
    }

    /// Renders the command and runs it to completion, returning its output.
    ///
    /// # Errors
    ///
    /// Forwards whatever error the executor reports.
    pub fn execute<E: Executor + ?Sized>(&self, executor: &E) -> Result<String> {
        let command = self.render();
        debug!("Executing `{command}`");
        executor.run_blocking(&command)
    }

    /// Renders the command and submits it without waiting for it.
    ///
    /// `callback` receives the output and whether that output is empty once
    /// surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Forwards whatever error the executor reports when submitting.
    pub fn execute_async<E, F>(&self, executor: &E, callback: F) -> Result<()>
    where
        E: Executor + ?Sized,
        F: FnOnce(String, bool) + Send + 'static,
    {
        let command = self.render();
        debug!("Submitting `{command}`");
        executor.run_non_blocking(
            command,
            Box::new(move |output: String| {
                let is_empty = output.trim().is_empty();
                callback(output, is_empty);
            }),
        )
    }
}

impl Display for CommandDescriptor {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.render())
    }
}
