use crate::{ast::expressions::Expr, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind};

use super::parser::Parser;

/// Parses a primary expression followed by any binary continuation.
///
/// Grouping and call arguments recurse through here, so this is where the
/// nesting depth is bounded.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let result = parse_primary_expr(parser).and_then(|left| parse_binary_expr(parser, 0, left));
    parser.exit_nesting();

    result
}

/// Dispatches on the current token to a number, identifier/call or grouping
/// parse. Any other token fails without being consumed.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => parse_number_expr(parser),
        TokenKind::Identifier => parse_identifier_expr(parser),
        TokenKind::OpenParen => parse_grouping_expr(parser),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() },
            parser.get_position(),
        )),
    }
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.get_position();
    let token = parser.advance();

    match token.value.parse::<f64>() {
        Ok(value) => Ok(Expr::Number { value }),
        Err(_) => Err(Error::new(ErrorImpl::NumberParseError { token: token.value }, position)),
    }
}

/// `( expr )`. The parentheses only steer precedence; the inner expression is
/// returned as is.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser)?;
    parser.expect_error(TokenKind::CloseParen, "expected ')'")?;

    Ok(expr)
}

/// A variable reference, or a call when the identifier is followed by `(`.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.advance().value;

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(Expr::Variable { name });
    }

    parser.advance();

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser)?);

            match parser.current_token_kind() {
                TokenKind::CloseParen => break,
                TokenKind::Comma => {
                    parser.advance();
                }
                _ => return Err(parser.syntax_error("expected ')' or ',' in argument list")),
            }
        }
    }

    // Eat the ')'
    parser.advance();

    Ok(Expr::Call { callee: name, arguments })
}

/// Precedence climbing.
///
/// Folds operators binding at least as tightly as `min_precedence` onto
/// `left`. When the operator after the right operand binds tighter than the
/// current one, the right side is resolved first at `precedence + 1`, which
/// makes equal-precedence chains associate to the left.
pub fn parse_binary_expr(parser: &mut Parser, min_precedence: i32, mut left: Expr) -> Result<Expr, Error> {
    loop {
        let precedence = parser.current_precedence();
        if precedence < min_precedence {
            return Ok(left);
        }

        let operator = parser.advance().value;
        let mut right = parse_primary_expr(parser)?;

        let next_precedence = parser.current_precedence();
        if precedence < next_precedence {
            right = parse_binary_expr(parser, precedence + 1, right)?;
        }

        log::trace!("folding {} at precedence {}", operator, precedence);
        left = Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        };
    }
}
