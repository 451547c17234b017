//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "?".to_string(),
        },
        Position(10, Rc::new("test.jsonnet".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(error.is_lex_error());
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.jsonnet".to_string()));
    let error = Error::new(
        ErrorImpl::UnterminatedString,
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`:`, `::` or `:::`".to_string(),
            found: "=".to_string(),
        },
        Position(0, Rc::new("test.jsonnet".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert!(!error.is_lex_error());

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert!(tip.contains("`:`, `::` or `:::`"));
            assert!(tip.contains("="));
        }
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_error_impl_display() {
    let error = ErrorImpl::InvalidEscape {
        sequence: "\\q".to_string(),
    };

    assert_eq!(format!("{}", error), "invalid escape sequence: \"\\\\q\"");
}

#[test]
fn test_trailing_input_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedTrailingInput {
            token: "2".to_string(),
        },
        Position(2, Rc::new("test.jsonnet".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("top-level expression")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}
