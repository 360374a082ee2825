// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Name → command table with dispatch and generated help.

use crate::spec::{ArgumentError, Arguments, CommandSpec, SpecError};
use cmdl_syntax::{Invocation, Span, Value};
use std::collections::HashMap;
use thiserror::Error;

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(Value),
    Text(String),
    /// Nothing to print.
    Unit,
    /// The driver loop should stop.
    Exit,
}

/// Error raised by a command handler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct HandlerError(pub String);

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Command implementation.
pub type Handler = Box<dyn Fn(&Arguments) -> Result<Outcome, HandlerError>>;

/// Errors registering a command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("name or alias '{name}' is already registered to '{existing}'")]
    DuplicateName { name: String, existing: String },
    #[error("command has no name")]
    EmptyNames,
    #[error("invalid command '{command}': {source}")]
    InvalidSpec {
        command: String,
        #[source]
        source: SpecError,
    },
}

/// Errors dispatching an invocation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("{name} is not a command")]
    NoSuchCommand {
        name: String,
        /// Where the name appeared in the input, when it came from a line.
        span: Option<Span>,
    },
    #[error("{command}: {source}")]
    Arguments {
        command: String,
        #[source]
        source: ArgumentError,
    },
    #[error("{command}: {source}")]
    Handler {
        command: String,
        #[source]
        source: HandlerError,
    },
}

impl DispatchError {
    pub fn span(&self) -> Option<Span> {
        match self {
            DispatchError::NoSuchCommand { span, .. } => *span,
            _ => None,
        }
    }
}

/// Registry construction options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Fold ASCII case when looking names up and when checking duplicates.
    pub case_insensitive: bool,
    /// Register `help`, `names` and `exit`.
    pub builtins: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            builtins: true,
        }
    }
}

enum Action {
    Help,
    Names,
    Exit,
    Handler(Handler),
}

struct Entry {
    spec: CommandSpec,
    action: Action,
}

/// A table of commands, looked up by name or alias.
///
/// The registry is an ordinary value: build one, register commands on it,
/// and hand it to whatever loop reads input.
///
/// # Examples
///
/// ```
/// use cmdl_registry::{CommandSpec, Outcome, Registry};
/// use cmdl_syntax::{Parser, Value};
///
/// let mut registry = Registry::default();
/// registry.register(
///     CommandSpec::new("double").param("n"),
///     |args| {
///         let n = args.get("n").and_then(Value::as_i64).unwrap_or(0);
///         Ok(Outcome::Value(Value::Integer(n * 2)))
///     },
/// )?;
///
/// let outcome = registry.dispatch(&Parser::parse("double 21")?)?;
/// assert_eq!(outcome, Outcome::Value(Value::Integer(42)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Registry {
    entries: Vec<Entry>,
    /// Folded name → index into `entries`.
    index: HashMap<String, usize>,
    case_insensitive: bool,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl Registry {
    pub fn new(config: RegistryConfig) -> Self {
        let mut registry = Self {
            entries: Vec::new(),
            index: HashMap::new(),
            case_insensitive: config.case_insensitive,
        };
        if config.builtins {
            registry.push(
                CommandSpec::new("help")
                    .alias("info")
                    .describe("prints out available commands, and their arguments")
                    .optional("command"),
                Action::Help,
            );
            registry.push(
                CommandSpec::new("names")
                    .alias("aliases")
                    .describe("returns all names for a given command")
                    .param("command"),
                Action::Names,
            );
            registry.push(
                CommandSpec::new("exit")
                    .alias("quit")
                    .describe("exits the program"),
                Action::Exit,
            );
        }
        registry
    }

    /// Register a command under every name in its spec.
    ///
    /// Fails without registering anything if any name is already taken.
    pub fn register<F>(&mut self, spec: CommandSpec, handler: F) -> Result<(), RegistryError>
    where
        F: Fn(&Arguments) -> Result<Outcome, HandlerError> + 'static,
    {
        if spec.names.is_empty() {
            return Err(RegistryError::EmptyNames);
        }
        spec.validate()
            .map_err(|source| RegistryError::InvalidSpec {
                command: spec.name().to_string(),
                source,
            })?;

        let mut keys = Vec::with_capacity(spec.names.len());
        for name in &spec.names {
            let key = self.fold(name);
            if let Some(&existing) = self.index.get(&key) {
                return Err(RegistryError::DuplicateName {
                    name: name.clone(),
                    existing: self.entries[existing].spec.name().to_string(),
                });
            }
            if keys.contains(&key) {
                return Err(RegistryError::DuplicateName {
                    name: name.clone(),
                    existing: spec.name().to_string(),
                });
            }
            keys.push(key);
        }

        tracing::debug!(command = spec.name(), names = spec.names.len(), "registered command");
        self.push(spec, Action::Handler(Box::new(handler)));
        Ok(())
    }

    fn push(&mut self, spec: CommandSpec, action: Action) {
        let idx = self.entries.len();
        for name in &spec.names {
            let key = self.fold(name);
            self.index.insert(key, idx);
        }
        self.entries.push(Entry { spec, action });
    }

    fn fold(&self, name: &str) -> String {
        if self.case_insensitive {
            name.to_ascii_lowercase()
        } else {
            name.to_string()
        }
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.index
            .get(&self.fold(name))
            .and_then(|&idx| self.entries.get(idx))
    }

    /// Look a command up by name or alias.
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.entry(name).map(|e| &e.spec)
    }

    /// Registered specs in registration order, one per command.
    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        self.entries.iter().map(|e| &e.spec)
    }

    /// Help text for every command, or for one command including its names
    /// and long help.
    ///
    /// Returns `None` if `command` names no registered command.
    pub fn help(&self, command: Option<&str>) -> Option<String> {
        match command {
            Some(name) => {
                let spec = self.lookup(name)?;
                let mut text = format!("{}\n| names: {}", spec.usage(), spec.names.join(", "));
                if let Some(help) = &spec.help {
                    text.push('\n');
                    text.push_str(help);
                }
                Some(text)
            }
            None => {
                let blocks: Vec<String> = self.commands().map(CommandSpec::usage).collect();
                Some(format!(
                    "List of available commands:\n{}",
                    blocks.join("\n\n")
                ))
            }
        }
    }

    /// Run the command an invocation names.
    pub fn dispatch(&self, invocation: &Invocation) -> Result<Outcome, DispatchError> {
        let entry = self
            .entry(&invocation.command)
            .ok_or_else(|| DispatchError::NoSuchCommand {
                name: invocation.command.clone(),
                span: Some(invocation.command_span),
            })?;
        let command = entry.spec.name();

        let args = entry
            .spec
            .bind(invocation)
            .map_err(|source| DispatchError::Arguments {
                command: command.to_string(),
                source,
            })?;

        tracing::debug!(command, args = invocation.arg_count(), "dispatching");

        match &entry.action {
            Action::Help => {
                let target = command_arg(&args, command)?;
                self.help(target)
                    .map(Outcome::Text)
                    .ok_or_else(|| no_such_command(target))
            }
            Action::Names => {
                let target = command_arg(&args, command)?.unwrap_or_default();
                let spec = self.lookup(target).ok_or_else(|| no_such_command(Some(target)))?;
                Ok(Outcome::Text(format!(
                    "Registered aliases for {}\n{}",
                    target,
                    spec.names.join(", ")
                )))
            }
            Action::Exit => Ok(Outcome::Exit),
            Action::Handler(handler) => {
                handler(&args).map_err(|source| DispatchError::Handler {
                    command: command.to_string(),
                    source,
                })
            }
        }
    }
}

/// The builtins' `command` parameter, which must be a string if present.
fn command_arg<'a>(args: &'a Arguments, command: &str) -> Result<Option<&'a str>, DispatchError> {
    match args.get("command") {
        None => Ok(None),
        Some(Value::String(name)) => Ok(Some(name)),
        Some(other) => Err(DispatchError::Handler {
            command: command.to_string(),
            source: HandlerError::new(format!(
                "expected a command name, got {}",
                other.type_name()
            )),
        }),
    }
}

fn no_such_command(name: Option<&str>) -> DispatchError {
    DispatchError::NoSuchCommand {
        name: name.unwrap_or_default().to_string(),
        span: None,
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
