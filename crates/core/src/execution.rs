use std::collections::HashMap;
use std::process::{Command, Output, Stdio};

use log::{error, info, warn};

use crate::config::{expand_working_directory, DEFAULT_SHELL};
use crate::error::{Error, Result};

/// Callback invoked with the captured output of a non-blocking run.
pub type Completion = Box<dyn FnOnce(String) + Send + 'static>;

/// Runs rendered command lines.
///
/// Implementations own everything about the subprocess: spawning, exit codes,
/// and for the non-blocking path the runtime the work is scheduled on.
pub trait Executor {
    /// Runs `command` and blocks until it has finished.
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be run at all.
    fn run_blocking(&self, command: &str) -> Result<String>;

    /// Submits `command` and returns immediately. `on_complete` is called with
    /// the captured output once it is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be submitted.
    fn run_non_blocking(&self, command: String, on_complete: Completion) -> Result<()>;
}

/// Runs commands through `<shell> -c <command>` and captures stdout.
///
/// The exit status is logged but never turned into an error.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
    working_directory: Option<String>,
    environment: Option<HashMap<String, String>>,
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

impl ShellExecutor {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            working_directory: None,
            environment: None,
        }
    }

    /// Sets the directory commands run in. A leading `~` is expanded.
    #[must_use]
    pub fn with_working_directory(mut self, working_directory: Option<String>) -> Self {
        self.working_directory = expand_working_directory(&working_directory);
        self
    }

    #[must_use]
    pub fn with_environment(mut self, environment: Option<HashMap<String, String>>) -> Self {
        self.environment = environment;
        self
    }

    #[must_use]
    pub fn shell(&self) -> &str {
        &self.shell
    }

    #[must_use]
    pub fn working_directory(&self) -> Option<&str> {
        self.working_directory.as_deref()
    }

    fn build_command(&self, command: &str) -> Command {
        let mut process = Command::new(&self.shell);
        process
            .args(["-c", command])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        if let Some(working_directory) = &self.working_directory {
            info!("Executing in working directory: {working_directory}");
            process.current_dir(working_directory);
        }

        if let Some(environment) = &self.environment {
            info!("Executing with environment variables: {:?}", environment);
            process.envs(environment);
        }

        process
    }
}

fn collect_stdout(command: &str, output: &Output) -> String {
    if !output.status.success() {
        warn!("`{command}` exited with {}", output.status);
    }

    String::from_utf8_lossy(&output.stdout).into_owned()
}

impl Executor for ShellExecutor {
    fn run_blocking(&self, command: &str) -> Result<String> {
        let output = self.build_command(command).output()?;
        Ok(collect_stdout(command, &output))
    }

    fn run_non_blocking(&self, command: String, on_complete: Completion) -> Result<()> {
        let handle = tokio::runtime::Handle::try_current().map_err(|_| Error::NoRuntime)?;
        let mut process = tokio::process::Command::from(self.build_command(&command));

        handle.spawn(async move {
            let output = match process.output().await {
                Ok(output) => collect_stdout(&command, &output),
                Err(e) => {
                    error!("Failed to run `{command}`: {e}");
                    String::new()
                }
            };

            on_complete(output);
        });

        Ok(())
    }
}
