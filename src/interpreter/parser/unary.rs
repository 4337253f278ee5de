use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        config::Dialect,
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, unexpected},
        },
    },
};

/// Parses a factor: an optional leading minus followed by a primary.
///
/// Only one minus is allowed, so `- - 5` is rejected.
///
/// Grammar:
/// ```text
///     factor := ["-"] primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `dialect`: The active dialect, passed through to nested expressions.
///
/// # Returns
/// An [`Expr::Negate`] or a primary expression.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let expr = parse_primary(tokens, dialect)?;
        return Ok(Expr::Negate { expr: Box::new(expr),
                                 position });
    }
    parse_primary(tokens, dialect)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := integer
///              | identifier
///              | "(" expression ")"
/// ```
/// # Errors
/// Returns a `ParseError` if the next token starts none of these forms or a
/// parenthesised expression is not closed.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), position)) => Ok(Expr::Literal { value:    *value,
                                                                     position: *position, }),
        Some((Token::Identifier(name), position)) => Ok(Expr::Variable { name:     name.clone(),
                                                                         position: *position, }),
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens, dialect)?;
            expect_token(tokens, &Token::RParen, "closing parenthesis ')'")?;
            Ok(expr)
        },
        Some((tok, position)) => {
            Err(unexpected(tok, *position, "a number, a variable or '('"))
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}
