// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commands the driver registers on top of the builtins.

use cmdl_registry::{
    Arguments, CommandSpec, HandlerError, Outcome, Registry, RegistryConfig, RegistryError,
};
use cmdl_syntax::Value;

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

/// A registry with the builtins plus `echo` and `type`.
pub fn registry(case_insensitive: bool) -> Result<Registry, RegistryError> {
    let mut registry = Registry::new(RegistryConfig {
        case_insensitive,
        ..RegistryConfig::default()
    });
    registry.register(
        CommandSpec::new("echo")
            .describe("prints its arguments back as literals")
            .variadic("values")
            .keywords()
            .help("Values are printed in literal form, so the output parses back to the same values."),
        echo,
    )?;
    registry.register(
        CommandSpec::new("type")
            .describe("prints the type of a value")
            .param("value"),
        type_of,
    )?;
    Ok(registry)
}

fn echo(args: &Arguments) -> Result<Outcome, HandlerError> {
    let mut parts: Vec<String> = args.rest.iter().map(Value::to_string).collect();
    parts.extend(args.extra.iter().map(|(key, value)| format!("{key}={value}")));
    Ok(Outcome::Text(parts.join(" ")))
}

fn type_of(args: &Arguments) -> Result<Outcome, HandlerError> {
    let value = args
        .get("value")
        .ok_or_else(|| HandlerError::new("missing value"))?;
    Ok(Outcome::Text(value.type_name().to_string()))
}
