//! Turns parsed command-line arguments into a command descriptor and the
//! settings needed to run it.

use std::collections::HashMap;

use cmdline_core::command::CommandDescriptor;
use cmdline_core::command_definitions::CommandDefinition;
use cmdline_core::config::{expand_path, get_shell};
use cmdline_core::error::Error::MissingCommandName;
use cmdline_core::error::Result;
use cmdline_core::execution::ShellExecutor;
use cmdline_core::file_handling::get_command_definition;
use log::debug;

use crate::arguments::apply_arguments;
use crate::cli_args::Args;

/// A fully assembled command plus where and how it should run.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub descriptor: CommandDescriptor,
    pub working_directory: Option<String>,
    pub environment: Option<HashMap<String, String>>,
}

impl Invocation {
    /// Builds the invocation.
    ///
    /// With a definition file, the file supplies the name, separators,
    /// arguments, parameters, working directory and environment, and every
    /// positional word is appended as a parameter. Without one, the first
    /// positional word is the command name.
    ///
    /// Separator overrides and `--arg` values are applied on top in both cases.
    ///
    /// # Errors
    ///
    /// Returns an error if the definition file cannot be loaded, no command
    /// name is available, or an argument is malformed.
    pub fn from_args(args: &Args) -> Result<Self> {
        let (mut invocation, parameters) = match &args.config_path {
            Some(config_path) => {
                let config_path = expand_path(config_path);
                debug!("Definition path: `{}`", config_path);

                let definition = get_command_definition(&config_path)?;
                (Self::from_definition(&definition), args.positional_words())
            }
            None => {
                let name = args.name.as_ref().ok_or(MissingCommandName)?;
                let invocation = Self {
                    descriptor: CommandDescriptor::new(name),
                    working_directory: None,
                    environment: None,
                };
                (invocation, args.parameters.clone())
            }
        };

        let overrides = args.separator_overrides();
        if !overrides.is_empty() {
            let separators = overrides.apply(invocation.descriptor.separators());
            invocation.descriptor.set_separators(separators);
        }

        apply_arguments(&mut invocation.descriptor, &args.arguments)?;
        invocation.descriptor.add_parameters(parameters);

        if args.working_directory.is_some() {
            invocation.working_directory.clone_from(&args.working_directory);
        }

        Ok(invocation)
    }

    #[must_use]
    pub fn from_definition(definition: &CommandDefinition) -> Self {
        Self {
            descriptor: definition.to_descriptor(),
            working_directory: definition.working_directory.clone(),
            environment: definition.environment.clone(),
        }
    }

    /// The definition to persist with `--save`.
    #[must_use]
    pub fn to_definition(&self) -> CommandDefinition {
        CommandDefinition {
            working_directory: self.working_directory.clone(),
            environment: self.environment.clone(),
            ..CommandDefinition::from_descriptor(&self.descriptor)
        }
    }

    #[must_use]
    pub fn executor(&self, shell_arg: &Option<String>) -> ShellExecutor {
        ShellExecutor::new(get_shell(shell_arg))
            .with_working_directory(self.working_directory.clone())
            .with_environment(self.environment.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use cmdline_core::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(yaml_content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{yaml_content}").unwrap();
        temp_file
    }

    #[test]
    fn test_from_args_without_definition() {
        let args = Args::parse_from([
            "cl",
            "jpegoptim",
            "-a",
            "m=2",
            "-a",
            "preserve",
            "image.jpg",
        ]);

        let invocation = Invocation::from_args(&args).unwrap();
        assert_eq!(
            invocation.descriptor.render(),
            "jpegoptim -m 2 --preserve image.jpg"
        );
        assert!(invocation.working_directory.is_none());
    }

    #[test]
    fn test_from_args_missing_name() {
        let args = Args::parse_from(["cl", "-a", "m=2"]);

        let result = Invocation::from_args(&args);
        assert!(matches!(result, Err(Error::MissingCommandName)));
    }

    #[test]
    fn test_from_args_with_separator_overrides() {
        let args = Args::parse_from([
            "cl",
            "--short-prefix",
            "/",
            "--short-separator",
            ":",
            "--long-prefix=-",
            "--long-separator",
            " ",
            "jpegoptim",
            "-a",
            "m=2",
            "-a",
            "dest=value",
        ]);

        let invocation = Invocation::from_args(&args).unwrap();
        assert_eq!(invocation.descriptor.render(), "jpegoptim /m:2 -dest value");
    }

    #[test]
    fn test_from_args_with_definition_appends_all_words() {
        let temp_file = write_yaml(
            r#"
name: jpegoptim
arguments:
  - name: m
    value: 2
parameters: [first.jpg]
working_directory: /tmp
environment:
  LC_ALL: C
"#,
        );
        let path = temp_file.path().to_str().unwrap();

        let args = Args::parse_from(["cl", "-c", path, "-a", "preserve", "second.jpg", "third.jpg"]);

        let invocation = Invocation::from_args(&args).unwrap();
        assert_eq!(
            invocation.descriptor.render(),
            "jpegoptim -m 2 --preserve first.jpg second.jpg third.jpg"
        );
        assert_eq!(invocation.working_directory, Some("/tmp".to_string()));
        assert_eq!(
            invocation.environment.as_ref().unwrap().get("LC_ALL"),
            Some(&"C".to_string())
        );
    }

    #[test]
    fn test_from_args_working_directory_overrides_definition() {
        let temp_file = write_yaml("name: ls\nworking_directory: /tmp\n");
        let path = temp_file.path().to_str().unwrap();

        let args = Args::parse_from(["cl", "-c", path, "-w", "/var"]);

        let invocation = Invocation::from_args(&args).unwrap();
        assert_eq!(invocation.working_directory, Some("/var".to_string()));
    }

    #[test]
    fn test_to_definition_keeps_execution_settings() {
        let args = Args::parse_from(["cl", "-w", "/tmp", "ls", "-a", "l"]);

        let definition = Invocation::from_args(&args).unwrap().to_definition();
        assert_eq!(definition.name, "ls");
        assert_eq!(definition.working_directory, Some("/tmp".to_string()));
        assert_eq!(definition.arguments.unwrap().len(), 1);
    }

    #[test]
    fn test_executor_uses_explicit_shell() {
        let args = Args::parse_from(["cl", "-w", "/tmp", "ls"]);

        let executor = Invocation::from_args(&args)
            .unwrap()
            .executor(&Some("/bin/bash".to_string()));
        assert_eq!(executor.shell(), "/bin/bash");
        assert_eq!(executor.working_directory(), Some("/tmp"));
    }
}
