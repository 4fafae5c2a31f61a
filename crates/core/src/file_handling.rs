//! Reading and writing command definition files.

use std::fs::File;

use crate::command_definitions::CommandDefinition;
use crate::error::{Error, Result};

const FILE_DESCRIPTION: &str = "command definition";

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn validate_definition(path: &str, definition: &CommandDefinition) -> Result<()> {
    if definition.name.trim().is_empty() {
        return Err(Error::empty_command_name(path.to_string()));
    }

    Ok(())
}

/// Loads and validates a command definition from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The command name is empty
///
/// # Examples
///
/// ```no_run
/// use cmdline_core::file_handling::get_command_definition;
///
/// let definition = get_command_definition("~/.cmdline/jpegoptim.yml")?;
/// println!("{}", definition.to_descriptor());
/// # Ok::<(), cmdline_core::error::Error>(())
/// ```
pub fn get_command_definition(path: &str) -> Result<CommandDefinition> {
    let reader = get_reader(FILE_DESCRIPTION, path)?;

    let definition: CommandDefinition = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            FILE_DESCRIPTION.to_string(),
            path.to_string(),
            e,
        )
    })?;

    validate_definition(path, &definition)?;

    Ok(definition)
}

/// Writes a command definition to disk as YAML.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be created or written to
/// - Serialization to YAML fails
pub fn write_command_definition(path: &str, definition: &CommandDefinition) -> Result<()> {
    let writer = File::create(path)
        .map_err(|e| Error::io_error(FILE_DESCRIPTION.to_string(), path.to_string(), e))?;

    serde_yaml::to_writer(writer, definition).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            FILE_DESCRIPTION.to_string(),
            path.to_string(),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(yaml_content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml_content).unwrap();
        temp_file
    }

    #[test]
    fn test_get_command_definition_valid_yaml() {
        let temp_file = write_yaml(
            r#"
name: echo
parameters: ["Hello World!"]
"#,
        );

        let definition = get_command_definition(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(definition.name, "echo");
        assert_eq!(definition.to_string(), "echo \"Hello World!\"");
    }

    #[test]
    fn test_get_command_definition_empty_name() {
        let temp_file = write_yaml("name: \"  \"\n");

        let result = get_command_definition(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::EmptyCommandName { .. })));
    }

    #[test]
    fn test_get_command_definition_missing_name() {
        let temp_file = write_yaml("parameters: [a]\n");

        let result = get_command_definition(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_get_command_definition_invalid_yaml() {
        let temp_file = write_yaml("invalid: yaml: content: [");

        let result = get_command_definition(temp_file.path().to_str().unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn test_get_command_definition_file_not_found() {
        let result = get_command_definition("/this/path/does/not/exist.yml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_write_command_definition_to_missing_directory() {
        let definition: CommandDefinition = serde_yaml::from_str("name: ls").unwrap();

        let result = write_command_definition("/this/path/does/not/exist.yml", &definition);
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
