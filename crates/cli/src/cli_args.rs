//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use crate::arguments::SeparatorOverrides;
use clap::Parser;

/// Command-line arguments for the `cl` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cmdline_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cl", "jpegoptim", "-a", "m=2", "image.jpg"]);
/// assert_eq!(args.name, Some("jpegoptim".to_string()));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to a command definition YAML file to start from.
    ///
    /// When given, every positional word is treated as a parameter.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// An argument for the command, as `NAME` or `NAME=VALUE`.
    ///
    /// Names of one character use the short prefix and separator, all
    /// others the long ones. Repeat to add several; order is kept.
    ///
    /// # Examples
    /// ```bash
    /// cl jpegoptim -a m=2 -a preserve image.jpg
    /// ```
    #[arg(long = "arg", short = 'a', action = clap::ArgAction::Append)]
    pub arguments: Vec<String>,

    /// Prefix for one-character argument names (default `-`).
    #[arg(long, allow_hyphen_values = true)]
    pub short_prefix: Option<String>,

    /// Separator between a one-character argument and its value (default a space).
    #[arg(long, allow_hyphen_values = true)]
    pub short_separator: Option<String>,

    /// Prefix for all other argument names (default `--`).
    #[arg(long, allow_hyphen_values = true)]
    pub long_prefix: Option<String>,

    /// Separator between other arguments and their value (default `=`).
    #[arg(long, allow_hyphen_values = true)]
    pub long_separator: Option<String>,

    /// Save the assembled command as a YAML definition at this path.
    #[arg(long, short = 's')]
    pub save: Option<String>,

    /// Run the command and print its output.
    #[arg(long, short = 'x', action)]
    pub execute: bool,

    /// Run the command through the non-blocking executor and print its output.
    #[arg(long, short = 'b', action, conflicts_with = "execute")]
    pub background: bool,

    /// Shell used to run the command. Defaults to `$SHELL`, then `/bin/sh`.
    #[arg(long)]
    pub shell: Option<String>,

    /// Directory to run the command in.
    #[arg(long, short = 'w')]
    pub working_directory: Option<String>,

    /// The command to build. Not read when a definition file is given.
    #[arg(num_args(1))]
    pub name: Option<String>,

    /// Positional parameters, rendered after all arguments.
    #[arg(trailing_var_arg = true)]
    pub parameters: Vec<String>,
}

impl Args {
    #[must_use]
    pub fn separator_overrides(&self) -> SeparatorOverrides {
        SeparatorOverrides {
            short_prefix: self.short_prefix.clone(),
            short_value_separator: self.short_separator.clone(),
            long_prefix: self.long_prefix.clone(),
            long_value_separator: self.long_separator.clone(),
        }
    }

    /// Every positional word, in order, starting with `name`.
    #[must_use]
    pub fn positional_words(&self) -> Vec<String> {
        self.name
            .iter()
            .chain(self.parameters.iter())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["cl"]);

        assert!(args.config_path.is_none());
        assert!(args.arguments.is_empty());
        assert!(args.save.is_none());
        assert!(!args.execute);
        assert!(!args.background);
        assert!(args.shell.is_none());
        assert!(args.working_directory.is_none());
        assert!(args.name.is_none());
        assert!(args.parameters.is_empty());
        assert!(args.separator_overrides().is_empty());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "cl",
            "-c",
            "/custom/command.yml",
            "-s",
            "/custom/saved.yml",
            "-x",
            "-w",
            "/tmp",
            "-a",
            "m=2",
        ]);

        assert_eq!(args.config_path, Some("/custom/command.yml".to_string()));
        assert_eq!(args.save, Some("/custom/saved.yml".to_string()));
        assert!(args.execute);
        assert_eq!(args.working_directory, Some("/tmp".to_string()));
        assert_eq!(args.arguments, vec!["m=2"]);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "cl",
            "--config-path",
            "/custom/command.yml",
            "--save",
            "/custom/saved.yml",
            "--background",
            "--shell",
            "/bin/bash",
            "--working-directory",
            "/tmp",
            "--arg",
            "preserve",
        ]);

        assert_eq!(args.config_path, Some("/custom/command.yml".to_string()));
        assert_eq!(args.save, Some("/custom/saved.yml".to_string()));
        assert!(args.background);
        assert_eq!(args.shell, Some("/bin/bash".to_string()));
        assert_eq!(args.working_directory, Some("/tmp".to_string()));
        assert_eq!(args.arguments, vec!["preserve"]);
    }

    #[test]
    fn test_args_execute_conflicts_with_background() {
        let result = Args::try_parse_from(["cl", "-x", "-b", "ls"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_separator_overrides() {
        let args = Args::parse_from([
            "cl",
            "--short-prefix",
            "/",
            "--short-separator",
            ":",
            "--long-prefix=-",
            "--long-separator",
            " ",
            "robocopy",
        ]);

        let overrides = args.separator_overrides();
        assert_eq!(overrides.short_prefix, Some("/".to_string()));
        assert_eq!(overrides.short_value_separator, Some(":".to_string()));
        assert_eq!(overrides.long_prefix, Some("-".to_string()));
        assert_eq!(overrides.long_value_separator, Some(" ".to_string()));
        assert_eq!(args.name, Some("robocopy".to_string()));
    }

    #[test]
    fn test_args_repeated_arguments_keep_order() {
        let args = Args::parse_from(["cl", "curl", "-a", "H=Accept: */*", "-a", "H=X-A: b"]);

        assert_eq!(args.name, Some("curl".to_string()));
        assert_eq!(args.arguments, vec!["H=Accept: */*", "H=X-A: b"]);
    }

    #[test]
    fn test_args_name_and_parameters() {
        let args = Args::parse_from(["cl", "jpegoptim", "-a", "m=2", "a.jpg", "b.jpg"]);

        assert_eq!(args.name, Some("jpegoptim".to_string()));
        assert_eq!(args.arguments, vec!["m=2"]);
        assert_eq!(args.parameters, vec!["a.jpg", "b.jpg"]);
        assert_eq!(args.positional_words(), vec!["jpegoptim", "a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_args_parameters_after_double_dash() {
        let args = Args::parse_from(["cl", "ls", "--", "-la", "/tmp"]);

        assert_eq!(args.name, Some("ls".to_string()));
        assert_eq!(args.parameters, vec!["-la", "/tmp"]);
    }
}
