//! Parser state and the top-level driver loop.
//!
//! The [`Parser`] borrows a [`TokenStream`] and a [`PrecedenceTable`] for the
//! duration of one [`parse`] run. Expression and prototype parsing live in
//! the sibling `expr` and `stmt` modules as free functions over the parser.

use std::fmt::Display;

use crate::{
    ast::ast::TopLevel,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        stream::TokenStream,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{PrecedenceTable, NOT_AN_OPERATOR},
    stmt::{parse_definition, parse_extern, parse_top_level_expr},
};

/// Deepest expression nesting (grouping and call arguments) the parser will
/// descend into before failing the statement.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream for the whole run, so nothing else can move the
/// cursor while parsing is in progress.
pub struct Parser<'a> {
    /// The token source
    tokens: &'a mut dyn TokenStream,
    /// Operator binding powers, read but never modified
    precedence: &'a PrecedenceTable,
    /// Number of expressions currently being parsed
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a mut dyn TokenStream, precedence: &'a PrecedenceTable) -> Self {
        Parser {
            tokens,
            precedence,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.peek()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.peek().kind
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Token {
        self.tokens.advance()
    }

    /// Binding power of the current token.
    ///
    /// Only operator tokens can be binary operators; anything else, and any
    /// operator missing from the table, reports [`NOT_AN_OPERATOR`].
    pub fn current_precedence(&self) -> i32 {
        let token = self.current_token();
        match token.kind {
            TokenKind::Operator => self.precedence.binding_power(&token.value),
            _ => NOT_AN_OPERATOR,
        }
    }

    /// Builds a syntax error pointing at the current token.
    pub fn syntax_error(&self, message: &str) -> Error {
        Error::new(
            ErrorImpl::SyntaxError {
                token: self.current_token().value.clone(),
                message: String::from(message),
            },
            self.get_position(),
        )
    }

    /// Consumes a token of the expected kind, or fails with `message`
    /// without consuming anything.
    pub fn expect_error(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(self.syntax_error(message))
        } else {
            Ok(self.advance())
        }
    }

    /// Enters one more level of expression nesting, failing once
    /// [`MAX_NESTING_DEPTH`] is reached. Pair with [`Parser::exit_nesting`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.syntax_error("expression nested too deeply"));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Notification fired by the driver each time a top-level statement parses.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseEvent {
    Definition,
    Extern,
    TopLevelExpression,
}

impl From<&TopLevel> for ParseEvent {
    fn from(item: &TopLevel) -> Self {
        match item {
            TopLevel::Definition(_) => ParseEvent::Definition,
            TopLevel::Extern(_) => ParseEvent::Extern,
            TopLevel::Expression(_) => ParseEvent::TopLevelExpression,
        }
    }
}

impl Display for ParseEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseEvent::Definition => write!(f, "Parsed a function definition."),
            ParseEvent::Extern => write!(f, "Parsed an extern."),
            ParseEvent::TopLevelExpression => write!(f, "Parsed a top-level expression."),
        }
    }
}

/// Everything one run of the driver produced.
#[derive(Debug, Default)]
pub struct ParseOutput {
    /// Successfully parsed statements, in source order
    pub items: Vec<TopLevel>,
    /// Errors the driver recovered from, in source order
    pub errors: Vec<Error>,
}

impl ParseOutput {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn events(&self) -> Vec<ParseEvent> {
        self.items.iter().map(ParseEvent::from).collect()
    }
}

/// Parses a token stream to its end.
///
/// # Arguments
///
/// * `tokens` - The token source, consumed up to `EOF`
/// * `precedence` - Binary operator binding powers
///
/// # Returns
///
/// The parsed items together with every error recovered from.
pub fn parse(tokens: &mut dyn TokenStream, precedence: &PrecedenceTable) -> ParseOutput {
    parse_with_hook(tokens, precedence, |_| {})
}

/// Like [`parse`], calling `hook` once per successfully parsed statement at
/// the moment it completes. Failures never reach the hook.
///
/// Each iteration looks at the current token: `EOF` halts, `;` is skipped,
/// `def` and `extern` start their statements and anything else is parsed as
/// a top-level expression. A failed statement is logged and recorded, then
/// exactly one token is skipped before classification resumes.
pub fn parse_with_hook<F>(
    tokens: &mut dyn TokenStream,
    precedence: &PrecedenceTable,
    mut hook: F,
) -> ParseOutput
where
    F: FnMut(ParseEvent),
{
    let mut parser = Parser::new(tokens, precedence);
    let mut output = ParseOutput::default();

    loop {
        let kind = parser.current_token_kind();
        log::trace!("dispatching on {} {:?}", kind, parser.current_token().value);

        let result = match kind {
            TokenKind::EOF => break,
            TokenKind::Semicolon => {
                parser.advance();
                continue;
            }
            TokenKind::Def => parse_definition(&mut parser).map(TopLevel::Definition),
            TokenKind::Extern => parse_extern(&mut parser).map(TopLevel::Extern),
            _ => parse_top_level_expr(&mut parser).map(TopLevel::Expression),
        };

        match result {
            Ok(item) => {
                let event = ParseEvent::from(&item);
                log::info!("{}", event);
                hook(event);
                output.items.push(item);
            }
            Err(error) => {
                log::error!("{}", error);
                output.errors.push(error);
                // Skip token for error recovery
                let skipped = parser.advance();
                log::debug!("skipped {:?} after error", skipped.value);
            }
        }
    }

    output
}
