//! Shell and path configuration.
//!
//! This module resolves which shell runs commands and expands `~` in
//! user-supplied paths.

use std::env;

/// Default shell to use for command execution
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Environment variable consulted when no shell is given explicitly
const SHELL_VARIABLE: &str = "SHELL";

/// Resolves the shell used to run commands.
///
/// An explicit value wins, then `$SHELL`, then [`DEFAULT_SHELL`].
///
/// # Examples
///
/// ```
/// use cmdline_core::config::get_shell;
///
/// assert_eq!(get_shell(&Some("/bin/zsh".to_string())), "/bin/zsh");
/// ```
pub fn get_shell(shell_arg: &Option<String>) -> String {
    match shell_arg {
        Some(shell) => shell.clone(),
        None => env::var(SHELL_VARIABLE).unwrap_or_else(|_| DEFAULT_SHELL.to_string()),
    }
}

/// Expands shell variables like `~` in a path.
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

/// Expands shell variables in a working directory path.
///
/// Returns None if no working directory is provided.
///
/// # Examples
///
/// ```
/// use cmdline_core::config::expand_working_directory;
///
/// let expanded = expand_working_directory(&Some("~/projects".to_string()));
/// assert!(expanded.is_some());
///
/// assert!(expand_working_directory(&None).is_none());
/// ```
pub fn expand_working_directory(working_directory: &Option<String>) -> Option<String> {
    working_directory
        .as_ref()
        .map(|working_directory| expand_path(working_directory))
}
