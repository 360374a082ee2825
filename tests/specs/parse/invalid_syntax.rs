//! Invalid syntax specs
//!
//! Every rejected line reports one error with a location.

use crate::prelude::*;

#[test]
fn positional_after_keyword() {
    let err = Parser::parse("cmd 1 a=2 3").unwrap_err();
    assert_eq!(
        err,
        ParseError::PositionalAfterKeyword {
            span: Span::new(10, 11)
        }
    );
}

#[test]
fn unterminated_string() {
    let err = Parser::parse("say \"unterminated").unwrap_err();
    assert_eq!(
        err,
        ParseError::Lex(LexError::UnterminatedString {
            span: Span::new(4, 5)
        })
    );
}

#[yare::parameterized(
    empty      = { "" },
    spaces     = { "   " },
    whitespace = { "\t \n" },
)]
fn no_valid_input(line: &str) {
    assert_eq!(Parser::parse(line).unwrap_err(), ParseError::NoValidInput);
}

#[yare::parameterized(
    leading_number   = { "1 cmd" },
    unclosed_list    = { "cmd [1, 2" },
    missing_colon    = { "cmd {a 1}" },
    glued_arguments  = { "cmd 'a''b'" },
    dangling_equals  = { "cmd a=" },
    keyword_in_list  = { "cmd [a=1]" },
    two_decimal_dots = { "cmd 1.2.3" },
    stray_character  = { "cmd @" },
)]
fn rejected(line: &str) {
    let err = Parser::parse(line).unwrap_err();
    let span = err.span().expect("error should carry a span");
    assert!(span.end <= line.len(), "{err:?} span out of bounds");
    assert!(err.diagnostic(line).is_some());
}
