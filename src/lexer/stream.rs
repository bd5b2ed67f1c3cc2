//! The token source contract consumed by the parser.

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// A cursor over classified tokens.
///
/// `peek` is idempotent until the next `advance`. Once the end is reached
/// both methods keep yielding an `EOF` token instead of failing.
pub trait TokenStream {
    /// Returns the current token without consuming it.
    fn peek(&self) -> &Token;
    /// Consumes the current token and returns it.
    fn advance(&mut self) -> Token;
}

/// In-memory token stream over the output of [`super::lexer::tokenize`].
pub struct TokenBuffer {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenBuffer {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let ends_with_eof = tokens.last().is_some_and(|token| token.kind == TokenKind::EOF);

        if !ends_with_eof {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(Position::null);
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span { start: end.clone(), end }
            ));
        }

        TokenBuffer { tokens, pos: 0 }
    }

    /// Number of tokens consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl From<Vec<Token>> for TokenBuffer {
    fn from(tokens: Vec<Token>) -> Self {
        TokenBuffer::new(tokens)
    }
}

impl TokenStream for TokenBuffer {
    fn peek(&self) -> &Token {
        // The constructor guarantees a trailing EOF, and `advance` never moves
        // past it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }
}
