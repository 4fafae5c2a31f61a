//! cmdline CLI Library
//!
//! This crate provides the command-line interface for cmdline. It turns
//! command-line flags and an optional YAML definition into a command
//! descriptor, then prints, saves or runs the rendered command.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`arguments`]: `NAME=VALUE` argument parsing and separator overrides
//! - [`invocation`]: Assembly of the descriptor and its execution settings
//!
//! # Examples
//!
//! ```bash
//! # Print the rendered command (dry run)
//! cl jpegoptim -a m=2 -a preserve image.jpg
//!
//! # Windows-style separators
//! cl --short-prefix / --short-separator : robocopy -a MT=8 src dest
//!
//! # Start from a definition file, add a parameter and run it
//! cl -c ~/.cmdline/jpegoptim.yml -x extra.jpg
//!
//! # Run through the non-blocking executor
//! cl -b echo hello
//!
//! # Save the assembled command for later
//! cl -s ~/.cmdline/ls.yml ls -a l /tmp
//! ```

pub mod arguments;
pub mod cli_args;
pub mod invocation;
