// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declared command schemas and argument binding.

use cmdl_syntax::{Dict, Invocation, Value};
use std::collections::HashSet;
use thiserror::Error;

/// Errors in a command schema, caught at registration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("optional parameter cannot precede required: {0}")]
    OptionalBeforeRequired(String),
    #[error("duplicate parameter name: {0}")]
    DuplicateParam(String),
}

/// Errors binding an invocation's arguments to a schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("missing required argument: <{0}>")]
    MissingArgument(String),
    #[error("takes {expected} positional argument(s) but {got} were given")]
    TooManyPositional { expected: usize, got: usize },
    #[error("unexpected keyword argument: {0}")]
    UnexpectedKeyword(String),
    #[error("got multiple values for argument: {0}")]
    MultipleValues(String),
}

/// A named parameter, fillable by position or by keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDef {
    pub name: String,
    pub required: bool,
}

/// The declared shape of a command: its names, parameters and whether it
/// takes extra positional or keyword arguments.
///
/// # Examples
///
/// ```
/// use cmdl_registry::CommandSpec;
/// use cmdl_syntax::Parser;
///
/// let spec = CommandSpec::new("copy")
///     .alias("cp")
///     .describe("copies things")
///     .param("src")
///     .optional("dst");
///
/// let args = spec.bind(&Parser::parse("copy a dst=b")?)?;
/// assert_eq!(args.get("dst").and_then(|v| v.as_str()), Some("b"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    /// Primary name first, then aliases.
    pub names: Vec<String>,
    pub description: String,
    /// Longer text shown by `help <command>` below the usage block.
    pub help: Option<String>,
    /// Parameters in positional order.
    pub params: Vec<ParamDef>,
    /// Name for surplus positional arguments, if accepted.
    pub variadic: Option<String>,
    /// Whether keyword arguments that match no parameter are accepted.
    pub accepts_keywords: bool,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
            description: "No information provided for this command".to_string(),
            ..Self::default()
        }
    }

    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }

    /// Add a required parameter.
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(ParamDef {
            name: name.into(),
            required: true,
        });
        self
    }

    /// Add an optional parameter.
    pub fn optional(mut self, name: impl Into<String>) -> Self {
        self.params.push(ParamDef {
            name: name.into(),
            required: false,
        });
        self
    }

    /// Accept any number of extra positional arguments.
    pub fn variadic(mut self, name: impl Into<String>) -> Self {
        self.variadic = Some(name.into());
        self
    }

    /// Accept keyword arguments that match no parameter.
    pub fn keywords(mut self) -> Self {
        self.accepts_keywords = true;
        self
    }

    /// The primary name. Empty only for a spec with no names, which the
    /// registry rejects.
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or("")
    }

    /// Check the schema itself: required parameters come first and
    /// parameter names are unique.
    pub fn validate(&self) -> Result<(), SpecError> {
        let mut seen = HashSet::new();
        let mut seen_optional = false;
        for param in &self.params {
            if !seen.insert(param.name.as_str()) {
                return Err(SpecError::DuplicateParam(param.name.clone()));
            }
            if param.required && seen_optional {
                return Err(SpecError::OptionalBeforeRequired(param.name.clone()));
            }
            seen_optional |= !param.required;
        }
        if let Some(variadic) = &self.variadic {
            if !seen.insert(variadic.as_str()) {
                return Err(SpecError::DuplicateParam(variadic.clone()));
            }
        }
        Ok(())
    }

    /// Bind an invocation's arguments to this schema.
    ///
    /// Positional values fill parameters in order, with any surplus going to
    /// the variadic slot. Keyword values fill parameters by name.
    pub fn bind(&self, invocation: &Invocation) -> Result<Arguments, ArgumentError> {
        let got = invocation.positional.len();
        if got > self.params.len() && self.variadic.is_none() {
            return Err(ArgumentError::TooManyPositional {
                expected: self.params.len(),
                got,
            });
        }

        let mut bound = Dict::new();
        let mut positional = invocation.positional.iter();
        for (param, value) in self.params.iter().zip(positional.by_ref()) {
            bound.insert(param.name.clone(), value.clone());
        }
        let rest: Vec<Value> = positional.cloned().collect();

        let mut extra = Dict::new();
        for (name, value) in &invocation.keyword {
            if self.params.iter().any(|p| &p.name == name) {
                if bound.contains_key(name) {
                    return Err(ArgumentError::MultipleValues(name.clone()));
                }
                bound.insert(name.clone(), value.clone());
            } else if self.accepts_keywords {
                extra.insert(name.clone(), value.clone());
            } else {
                return Err(ArgumentError::UnexpectedKeyword(name.clone()));
            }
        }

        let mut params = Dict::new();
        for param in &self.params {
            match bound.swap_remove(&param.name) {
                Some(value) => {
                    params.insert(param.name.clone(), value);
                }
                None if param.required => {
                    return Err(ArgumentError::MissingArgument(param.name.clone()));
                }
                None => {}
            }
        }

        Ok(Arguments {
            params,
            rest,
            extra,
        })
    }

    /// Two-line help block:
    ///
    /// ```text
    /// | copy: copies things
    /// | <src>  [dst]
    /// ```
    pub fn usage(&self) -> String {
        let mut slots: Vec<String> = self
            .params
            .iter()
            .map(|p| {
                if p.required {
                    format!("<{}>", p.name)
                } else {
                    format!("[{}]", p.name)
                }
            })
            .collect();
        if let Some(variadic) = &self.variadic {
            slots.push(format!("[{variadic}...]"));
        }
        if self.accepts_keywords {
            slots.push("[key=value...]".to_string());
        }

        let params = if slots.is_empty() {
            "this command does not take any parameters".to_string()
        } else {
            slots.join("  ")
        };
        format!("| {}: {}\n| {}", self.name(), self.description, params)
    }
}

/// Arguments bound to a [`CommandSpec`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    /// Supplied parameters, in declaration order.
    pub params: Dict,
    /// Surplus positional values for the variadic slot.
    pub rest: Vec<Value>,
    /// Keyword values matching no parameter.
    pub extra: Dict,
}

impl Arguments {
    /// A parameter's value, however it was supplied.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// A parameter's value as a string.
    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
