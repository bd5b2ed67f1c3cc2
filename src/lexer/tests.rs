//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals
//! - Delimiters and operator characters
//! - Comments
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let source = "def extern".to_string();
    let tokens = tokenize(source, Some("test.kal".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Def);
    assert_eq!(tokens[1].kind, TokenKind::Extern);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz123 CamelCase define".to_string();
    let tokens = tokenize(source, Some("test.kal".to_string())).unwrap();

    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["foo", "bar", "baz123", "CamelCase", "define", "EOF"]);
    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100. .5".to_string();
    let tokens = tokenize(source, Some("test.kal".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].value, "100.");
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[4].value, ".5");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_second_decimal_point_starts_new_number() {
    let source = "1.2.3".to_string();
    let tokens = tokenize(source, Some("test.kal".to_string())).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "1.2");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, ".3");
    assert_eq!(tokens[1].span.start.0, 3);
}

#[test]
fn test_tokenize_delimiters() {
    let source = "( ) , ;".to_string();
    let tokens = tokenize(source, Some("test.kal".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::Comma);
    assert_eq!(tokens[3].kind, TokenKind::Semicolon);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * < / ! @".to_string();
    let tokens = tokenize(source, Some("test.kal".to_string())).unwrap();

    let operators: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Operator)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(operators, vec!["+", "-", "*", "<", "/", "!", "@"]);
}

#[test]
fn test_operators_are_single_characters() {
    let source = "a<=b".to_string();
    let tokens = tokenize(source, Some("test.kal".to_string())).unwrap();

    assert_eq!(tokens[1].value, "<");
    assert_eq!(tokens[2].value, "=");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_without_whitespace() {
    let source = "f(x,1.5)*2".to_string();
    let tokens = tokenize(source, Some("test.kal".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::CloseParen,
            TokenKind::Operator,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "# leading comment\nx # trailing\n# last".to_string();
    let tokens = tokenize(source, Some("test.kal".to_string())).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize(String::new(), Some("test.kal".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_token_spans() {
    let source = "def  foo".to_string();
    let tokens = tokenize(source, Some("test.kal".to_string())).unwrap();

    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 8);
    assert_eq!(tokens[1].span.start.1.as_str(), "test.kal");
    assert_eq!(tokens[2].span.start.0, 8);
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x".to_string(), None).unwrap();

    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_tokenize_unrecognised_character() {
    let source = "x + é".to_string();
    let error = tokenize(source, Some("test.kal".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 4);
}
