use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        config::Dialect,
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::expect_token},
    },
};

/// Parses a block delimited by braces.
///
/// Before any statement is parsed, the tokens after `{` are scanned for the
/// matching `}` so an unclosed block is reported as such rather than as
/// whatever statement error the end of the line would cause.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
/// - `dialect`: The active dialect.
///
/// # Returns
/// The statements of the block, in order.
///
/// # Errors
/// - `UnexpectedToken` if the stream is not at `{`.
/// - `UnbalancedBraces` if no matching `}` exists.
/// - Propagates errors from the statements inside.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let position = expect_token(tokens, &Token::LBrace, "'{'")?;
    check_balanced(tokens.clone(), position)?;

    let mut statements = Vec::new();

    loop {
        if let Some((Token::RBrace, _)) = tokens.peek() {
            tokens.next();
            break;
        }
        statements.push(parse_statement(tokens, dialect)?);
    }

    Ok(statements)
}

/// Checks that an opened block is closed.
///
/// Counts nested `{` and `}` from just after an opening brace until the
/// brace that closes it.
///
/// # Parameters
/// - `lookahead`: Tokens following the opening brace. Only this copy is
///   advanced.
/// - `position`: Word position of the opening brace, for the error.
///
/// # Errors
/// Returns `UnbalancedBraces` if the end marker comes first.
///
/// # Example
/// ```
/// use plang::interpreter::{
///     config::Config,
///     lexer::tokenize,
///     parser::block::check_balanced,
/// };
///
/// let tokens = tokenize("{ print k ; { } } ;", &Config::default()).unwrap();
/// assert!(check_balanced(tokens[1..].iter(), 1).is_ok());
///
/// let tokens = tokenize("{ print k ; {", &Config::default()).unwrap();
/// assert!(check_balanced(tokens[1..].iter(), 1).is_err());
/// ```
pub fn check_balanced<'a, I>(lookahead: I, position: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut depth = 1usize;

    for (token, _) in lookahead {
        match token {
            Token::LBrace => depth += 1,
            Token::RBrace => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            },
            Token::End => break,
            _ => {},
        }
    }

    Err(ParseError::UnbalancedBraces { position })
}
