use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Comparison, Expr, RelationalOperator},
    error::ParseError,
    interpreter::{
        config::Dialect,
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::parse_factor,
            utils::{parse_identifier, unexpected},
        },
    },
};

/// Parses the outer operator level.
///
/// Handles the left-associative operators the dialect places at expression
/// level: `+` and `-` in the extended dialect, `+` and `*` in the base
/// dialect.
///
/// The rule is: `sum := term (op term)*` with `op` taken from
/// [`Dialect::expression_operators`].
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `dialect`: The active dialect.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_sum<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_term(tokens, dialect)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && dialect.expression_operators().contains(&op)
        {
            let position = *position;
            tokens.next();
            let right = parse_term(tokens, dialect)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses the inner operator level.
///
/// Handles `*` in the extended dialect and `-` in the base dialect, both
/// left-associative.
///
/// The rule is: `term := factor (op factor)*` with `op` taken from
/// [`Dialect::term_operators`].
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `dialect`: The active dialect.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_factor(tokens, dialect)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && dialect.term_operators().contains(&op)
        {
            let position = *position;
            tokens.next();
            let right = parse_factor(tokens, dialect)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses a comparison between two variables.
///
/// The rule is: `comparison := identifier ("==" | "!=" | "<" | ">")
/// identifier`
///
/// # Errors
/// - `ExpectedIdentifier` if either operand is not a variable name, which
///   includes integer literals.
/// - `UnexpectedToken` if the operator is not relational.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Comparison>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (left, position) = parse_identifier(tokens)?;

    let op = match tokens.next() {
        Some((token, op_position)) => match token_to_relational_operator(token) {
            Some(op) => op,
            None => return Err(unexpected(token, *op_position, "'==', '!=', '<' or '>'")),
        },
        None => return Err(ParseError::UnexpectedEndOfInput { position }),
    };

    let (right, _) = parse_identifier(tokens)?;

    Ok(Comparison { left,
                    op,
                    right,
                    position })
}

/// Maps an arithmetic token to its operator.
///
/// # Returns
/// - `Some(BinaryOperator)` for `+`, `-` and `*`.
/// - `None` otherwise.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        _ => None,
    }
}

/// Maps a relational token to its operator.
const fn token_to_relational_operator(token: &Token) -> Option<RelationalOperator> {
    match token {
        Token::EqualEqual => Some(RelationalOperator::Equal),
        Token::BangEqual => Some(RelationalOperator::NotEqual),
        Token::Less => Some(RelationalOperator::Less),
        Token::Greater => Some(RelationalOperator::Greater),
        _ => None,
    }
}
