use crate::{ast::ast::{Function, Prototype}, errors::errors::Error, lexer::tokens::TokenKind, parser::expr::parse_expr};

use super::parser::Parser;

/// `name ( param, param, ... )`
///
/// Each parameter is consumed exactly once. Parameters must be separated by
/// commas, and a trailing comma is rejected.
pub fn parse_prototype(parser: &mut Parser) -> Result<Prototype, Error> {
    let name = parser
        .expect_error(TokenKind::Identifier, "expected function name in prototype")?
        .value;

    parser.expect_error(TokenKind::OpenParen, "expected '(' in prototype")?;

    let mut parameters = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let parameter = parser
                .expect_error(TokenKind::Identifier, "expected parameter name in prototype")?
                .value;
            parameters.push(parameter);

            match parser.current_token_kind() {
                TokenKind::CloseParen => break,
                TokenKind::Comma => {
                    parser.advance();
                }
                _ => return Err(parser.syntax_error("expected ')' or ',' in prototype")),
            }
        }
    }

    // Eat the ')'
    parser.advance();

    Ok(Prototype { name, parameters })
}

/// `def prototype body`
pub fn parse_definition(parser: &mut Parser) -> Result<Function, Error> {
    parser.advance();

    let prototype = parse_prototype(parser)?;
    let body = parse_expr(parser)?;

    Ok(Function { prototype, body })
}

/// `extern prototype`
pub fn parse_extern(parser: &mut Parser) -> Result<Prototype, Error> {
    parser.advance();
    parse_prototype(parser)
}

/// A bare expression, wrapped in an anonymous zero-parameter prototype so it
/// can be handled like any other function.
pub fn parse_top_level_expr(parser: &mut Parser) -> Result<Function, Error> {
    let body = parse_expr(parser)?;

    Ok(Function {
        prototype: Prototype::anonymous(),
        body,
    })
}
