//! cmdline Core Library
//!
//! This crate assembles shell command lines from a command name, flag-style
//! arguments and positional parameters, and runs them through a pluggable
//! executor.
//!
//! # Key Features
//!
//! - **Command Descriptor**: Ordered arguments and parameters rendered to one string
//! - **Configurable Separators**: Short/long prefixes and value separators
//! - **Quoting**: A small quote-character and space heuristic for values
//! - **Execution**: Blocking or callback-based runs through an [`execution::Executor`]
//! - **Command Definitions**: Load and save commands as YAML
//!
//! # Examples
//!
//! ```
//! use cmdline_core::command::CommandDescriptor;
//!
//! let mut command = CommandDescriptor::new("jpegoptim");
//! command.add_value("dest", "my folder").add_parameter("image.jpg");
//!
//! assert_eq!(command.to_string(), "jpegoptim --dest=\"my folder\" image.jpg");
//! ```

pub mod command;
pub mod command_definitions;
pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod quoting;
