use log::error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Non-blocking execution requires a running tokio runtime.")]
    NoRuntime,

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("The command definition at `{}` has an empty command name.", .path)]
    EmptyCommandName { path: String },

    #[error("Invalid argument `{}`: expected NAME or NAME=VALUE", .0)]
    ArgumentFormat(String),

    #[error("No command name was given and no command definition file was provided.")]
    MissingCommandName,

    #[error("Misc error: {}", .0)]
    Misc(String),
}

impl Error {
    pub fn empty_command_name(path: String) -> Self {
        Self::EmptyCommandName { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        error!("YAML {action} failed for {file_description} file `{path}`");
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
