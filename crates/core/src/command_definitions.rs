use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::command::{CommandDescriptor, Separators};
use crate::execution::ShellExecutor;

/// A YAML scalar used as an argument value or parameter.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(serde_yaml::Number),
    String(String),
}

impl Display for Scalar {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Bool(value) => write!(formatter, "{value}"),
            Scalar::Number(value) => write!(formatter, "{value}"),
            Scalar::String(value) => formatter.write_str(value),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ArgumentDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Scalar>,
}

/// A command as stored in a YAML definition file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CommandDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separators: Option<Separators>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<ArgumentDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Scalar>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<HashMap<String, String>>,
}

impl CommandDefinition {
    /// Builds a descriptor with the arguments and parameters in file order.
    #[must_use]
    pub fn to_descriptor(&self) -> CommandDescriptor {
        let separators = self.separators.clone().unwrap_or_default();
        let mut descriptor = CommandDescriptor::with_separators(&self.name, separators);

        for argument in self.arguments.iter().flatten() {
            descriptor.add_argument(&argument.name, argument.value.as_ref());
        }

        if let Some(parameters) = &self.parameters {
            descriptor.add_parameters(parameters);
        }

        descriptor
    }

    /// Captures a descriptor. Values are stored as strings.
    #[must_use]
    pub fn from_descriptor(descriptor: &CommandDescriptor) -> Self {
        let arguments: Vec<ArgumentDefinition> = descriptor
            .arguments()
            .iter()
            .map(|argument| ArgumentDefinition {
                name: argument.name.clone(),
                value: argument.value.clone().map(Scalar::String),
            })
            .collect();

        let parameters: Vec<Scalar> = descriptor
            .parameters()
            .iter()
            .cloned()
            .map(Scalar::String)
            .collect();

        let separators = descriptor.separators();

        Self {
            name: descriptor.name().to_string(),
            separators: (*separators != Separators::default()).then(|| separators.clone()),
            arguments: (!arguments.is_empty()).then_some(arguments),
            parameters: (!parameters.is_empty()).then_some(parameters),
            working_directory: None,
            environment: None,
        }
    }

    /// Builds an executor that honours the working directory and environment.
    #[must_use]
    pub fn to_executor(&self, shell: impl Into<String>) -> ShellExecutor {
        ShellExecutor::new(shell)
            .with_working_directory(self.working_directory.clone())
            .with_environment(self.environment.clone())
    }
}

impl Display for CommandDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.to_descriptor().render())
    }
}
