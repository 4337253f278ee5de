use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Builds the error for a token that does not fit the grammar here.
///
/// The end marker becomes `UnexpectedEndOfInput` and error tokens become
/// `InvalidToken`, so lexical failures are reported as such even though they
/// only surface while parsing.
///
/// # Parameters
/// - `token`: The token that was found.
/// - `position`: Its word position.
/// - `expected`: A short description of what the grammar wanted.
pub(in crate::interpreter::parser) fn unexpected(token: &Token,
                                                 position: usize,
                                                 expected: &str)
                                                 -> ParseError {
    match token {
        Token::End => ParseError::UnexpectedEndOfInput { position },
        Token::Error(lexeme) => ParseError::InvalidToken { lexeme: lexeme.clone(),
                                                           position },
        tok => ParseError::UnexpectedToken { token: format!("Expected {expected}, found {tok:?}"),
                                             position },
    }
}

/// Returns `true` once the cursor sits on the end marker.
pub(in crate::interpreter::parser) fn at_end<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    matches!(tokens.peek(), Some((Token::End, _)) | None)
}

/// Consumes the next token if it equals `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The required token.
/// - `description`: How the token is named in the error message.
///
/// # Returns
/// The word position of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if the next token differs or input has ended.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          description: &str)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, position)) if tok == expected => Ok(*position),
        Some((tok, position)) => Err(unexpected(tok, *position, description)),
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}

/// Parses a plain identifier and returns its name and position.
///
/// # Errors
/// Returns `ExpectedIdentifier` if the next token is anything but an
/// identifier. Integer literals land here too, which is what rejects
/// `while ( k > 5 )`.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), position)) => Ok((name.clone(), *position)),
        Some((tok @ (Token::End | Token::Error(_)), position)) => {
            Err(unexpected(tok, *position, "identifier"))
        },
        Some((tok, position)) => Err(ParseError::ExpectedIdentifier { found:    format!("{tok:?}"),
                                                                      position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}
