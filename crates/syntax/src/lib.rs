// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Lexer and parser for the cmdl command language.
//!
//! A command line is a command name followed by whitespace-separated
//! arguments. Arguments are literals or nested composites, optionally bound
//! to a name with `=`:
//!
//! ```text
//! set title="Report" sizes=[1, 2, 3] opts={verbose: True, depth: None}
//! ```
//!
//! # Quick Start
//!
//! ```
//! use cmdl_syntax::{Parser, Value};
//!
//! let inv = Parser::parse("echo [1, 2, 3]")?;
//! assert_eq!(inv.command, "echo");
//! assert_eq!(inv.positional[0].depth(), 1);
//! # Ok::<(), cmdl_syntax::ParseError>(())
//! ```
//!
//! # Values
//!
//! - **Scalars**: `'text'`, `"text"`, `42`, `1.5`, `.5`, `5.`, `True`,
//!   `False`, `None`, and bare identifiers as unquoted strings
//! - **Composites**: lists `[a, b]`, tuples `(a, b)`, dictionaries
//!   `{key: value}`, nested to any depth up to [`ParserConfig::max_depth`]
//!
//! # Errors
//!
//! [`Lexer::tokenize`] fails with a [`LexError`]; [`Parser::parse`] fails
//! with a [`ParseError`], wrapping lexer errors unchanged. Both carry byte
//! spans for caret rendering via [`context_snippet`].

mod error;
mod lexer;
mod parse_error;
mod parser;
pub mod span;
mod token;
mod value;

pub use error::LexError;
pub use lexer::Lexer;
pub use parse_error::ParseError;
pub use parser::{Parser, ParserConfig, DEFAULT_MAX_DEPTH};
pub use span::{context_snippet, diagnostic_context, locate_span, Span};
pub use token::{Token, TokenKind};
pub use value::{Dict, Invocation, Value};
