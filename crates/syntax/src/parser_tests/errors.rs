// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural errors and their locations.

use super::*;
use crate::error::LexError;

#[yare::parameterized(
    empty       = { "" },
    one_space   = { " " },
    spaces      = { "   " },
    tabs        = { "\t \t" },
)]
fn no_valid_input(input: &str) {
    assert_eq!(parse_err(input), ParseError::NoValidInput);
}

#[yare::parameterized(
    integer = { "1", TokenKind::IntegerLiteral },
    float   = { "1.0", TokenKind::FloatLiteral },
    boolean = { "True", TokenKind::BooleanLiteral },
    none    = { "None", TokenKind::NullLiteral },
    list    = { "[]", TokenKind::OpenBracket },
    dict    = { "{}", TokenKind::OpenBrace },
    tuple   = { "()", TokenKind::OpenParen },
    string  = { "''", TokenKind::StringLiteral },
    equals  = { "=", TokenKind::Equals },
)]
fn command_must_be_an_identifier(input: &str, found: TokenKind) {
    match parse_err(input) {
        ParseError::UnexpectedToken {
            expected,
            found: got,
            span,
        } => {
            assert_eq!(expected, "command name");
            assert_eq!(got, found);
            assert_eq!(span.start, 0);
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn argument_glued_to_command() {
    let err = parse_err("cmd[1]");
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            expected: "whitespace before argument".to_string(),
            found: TokenKind::OpenBracket,
            span: Span::new(3, 4),
        }
    );
}

#[test]
fn arguments_glued_together() {
    let err = parse_err("add 1,2");
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            expected: "whitespace before argument".to_string(),
            found: TokenKind::Comma,
            span: Span::new(5, 6),
        }
    );
}

#[test]
fn list_items_need_commas() {
    let err = parse_err("cmd [1 2]");
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            expected: "',' or ']'".to_string(),
            found: TokenKind::IntegerLiteral,
            span: Span::new(7, 8),
        }
    );
}

#[yare::parameterized(
    open_list       = { "cmd [1, 2", "',' or ']'" },
    open_list_comma = { "cmd [1,", "value" },
    open_tuple      = { "cmd (1", "',' or ')'" },
    bare_open       = { "cmd [", "value" },
    open_dict       = { "cmd {", "dictionary key or '}'" },
    dict_no_colon   = { "cmd {a", "':'" },
    dict_no_value   = { "cmd {a:", "value" },
    dict_open_item  = { "cmd {a: 1", "',' or '}'" },
    nested_open     = { "cmd [{a: (1,", "value" },
)]
fn unexpected_end_of_input(input: &str, expected: &str) {
    assert_eq!(
        parse_err(input),
        ParseError::UnexpectedEndOfInput {
            expected: expected.to_string(),
            span: Span::empty(input.len()),
        }
    );
}

#[yare::parameterized(
    mismatched_close = { "cmd [1)", TokenKind::CloseParen },
    stray_close      = { "cmd ]", TokenKind::CloseBracket },
    stray_colon      = { "cmd :", TokenKind::Colon },
    leading_comma    = { "cmd [,1]", TokenKind::Comma },
    double_comma     = { "cmd [1,,2]", TokenKind::Comma },
    numeric_key      = { "cmd {1: 2}", TokenKind::IntegerLiteral },
    composite_key    = { "cmd {[1]: 2}", TokenKind::OpenBracket },
    dict_missing_sep = { "cmd {a: 1 b: 2}", TokenKind::Identifier },
    dict_equals      = { "cmd {a=1}", TokenKind::Equals },
)]
fn unexpected_token(input: &str, found: TokenKind) {
    match parse_err(input) {
        ParseError::UnexpectedToken { found: got, .. } => assert_eq!(got, found),
        other => panic!("expected UnexpectedToken for {input:?}, got {other:?}"),
    }
}

#[test]
fn integer_out_of_range() {
    let err = parse_err("cmd 9223372036854775808");
    assert_eq!(
        err,
        ParseError::IntegerOutOfRange {
            span: Span::new(4, 23)
        }
    );
}

#[test]
fn huge_float_rejected() {
    let digits = "9".repeat(400);
    let err = parse_err(&format!("cmd {digits}."));
    assert_eq!(
        err,
        ParseError::FloatOutOfRange {
            span: Span::new(4, 405)
        }
    );
    assert_eq!(err.span(), Some(Span::new(4, 405)));
}

#[test]
fn large_finite_float_accepted() {
    let digits = format!("17976931348623157{}", "0".repeat(292));
    let inv = parse(&format!("cmd {digits}.0"));
    assert_eq!(inv.positional[0].as_f64(), Some(f64::MAX));
}

// =============================================================================
// Lexer errors pass through
// =============================================================================

#[test]
fn unterminated_string_is_a_lex_error() {
    let err = parse_err("say \"unterminated");
    assert_eq!(
        err,
        ParseError::Lex(LexError::UnterminatedString {
            span: Span::new(4, 5)
        })
    );
    assert_eq!(err.span(), Some(Span::new(4, 5)));
}

#[test]
fn lex_error_message_is_unchanged() {
    let lex = Lexer::tokenize("cmd 1.2.3").unwrap_err();
    let parse = parse_err("cmd 1.2.3");
    assert_eq!(parse.to_string(), lex.to_string());
}

#[test]
fn lex_errors_win_over_grammar_errors() {
    // The lexer runs to completion before the parser looks at anything.
    let err = parse_err("1 'open");
    assert!(matches!(
        err,
        ParseError::Lex(LexError::UnterminatedString { .. })
    ));
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn no_valid_input_has_no_span() {
    assert_eq!(ParseError::NoValidInput.span(), None);
    assert_eq!(ParseError::NoValidInput.context("", 10), None);
}

#[test]
fn context_points_at_offending_argument() {
    let input = "cmd 1 a=2 3";
    let err = parse_err(input);
    assert_eq!(
        err.context(input, 40).as_deref(),
        Some("cmd 1 a=2 3\n          ^")
    );
}

#[test]
fn diagnostic_includes_message() {
    let input = "cmd [1 2]";
    let diag = parse_err(input).diagnostic(input).unwrap();
    assert!(diag.contains("unexpected token integer literal at position 7, expected ',' or ']'"));
    assert!(diag.contains("line 1, column 8"));
}

#[test]
fn messages() {
    assert_eq!(
        ParseError::PositionalAfterKeyword {
            span: Span::new(10, 11)
        }
        .to_string(),
        "positional argument follows keyword argument at position 10"
    );
    assert_eq!(
        ParseError::UnexpectedEndOfInput {
            expected: "value".to_string(),
            span: Span::empty(6)
        }
        .to_string(),
        "unexpected end of input, expected value"
    );
}
