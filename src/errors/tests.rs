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
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.kal".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.kal".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_syntax_error() {
    let error = Error::new(
        ErrorImpl::SyntaxError {
            token: "y".to_string(),
            message: "expected ')' or ',' in prototype".to_string(),
        },
        Position(0, Rc::new("test.kal".to_string())),
    );

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(
        error.get_kind().to_string(),
        "expected ')' or ',' in prototype: \"y\""
    );
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
        },
        Position(0, Rc::new("test.kal".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_invalid_precedence_error() {
    let error = Error::new(
        ErrorImpl::InvalidPrecedence {
            entry: "+:x".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "InvalidPrecedence");
    assert_eq!(error.get_position().1.as_str(), "<null>");
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        Position(7, Rc::new("test.kal".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "test.kal:7: unknown token when expecting an expression: \")\""
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.kal".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        Position(0, Rc::new("test.kal".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
