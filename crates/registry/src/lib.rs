// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Command registry for parsed cmdl invocations.
//!
//! Commands are declared with an explicit [`CommandSpec`] (names, ordered
//! parameters, optional variadic and keyword support) and registered with a
//! handler. [`Registry::dispatch`] looks the invocation's command up, binds
//! its arguments against the declared parameters, and runs the handler.
//!
//! Three builtins are registered by default:
//!
//! - `help [command]` (alias `info`) - generated usage text
//! - `names <command>` (alias `aliases`) - every name of a command
//! - `exit` (alias `quit`) - returns [`Outcome::Exit`]

mod registry;
mod spec;

pub use registry::{
    DispatchError, Handler, HandlerError, Outcome, Registry, RegistryConfig, RegistryError,
};
pub use spec::{ArgumentError, Arguments, CommandSpec, ParamDef, SpecError};
