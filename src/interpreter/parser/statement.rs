use std::iter::Peekable;

use crate::{
    ast::{Declaration, Statement},
    error::ParseError,
    interpreter::{
        config::Dialect,
        lexer::Token,
        parser::{
            binary::parse_comparison,
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_identifier, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an empty statement (`;`).
/// - an assignment (`name = expr ;`).
/// - a print (`print expr ;`).
/// - a `while` loop.
/// - an `if`/`else` branch.
///
/// The leading token decides which form is parsed. `while` and `if` only
/// exist as keywords in the extended dialect; in the base dialect those words
/// are identifiers and take the assignment path.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, position)` pairs.
/// - `dialect`: The active dialect.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Semicolon, _)) => {
            tokens.next();
            Ok(Statement::Empty)
        },
        Some((Token::Identifier(_), _)) => parse_assignment(tokens, dialect),
        Some((Token::Print, _)) => parse_print(tokens, dialect),
        Some((Token::While, _)) => parse_while(tokens, dialect),
        Some((Token::If, _)) => parse_if(tokens, dialect),
        Some((tok, position)) => Err(unexpected(tok, *position, "a statement")),
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}

/// Parses a declaration of the form `integer <identifier> ;`.
///
/// # Errors
/// Returns a `ParseError` if the name is missing or not followed by `;`.
/// Declaring a name twice is not a parse error; it fails at run time.
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Declaration>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect_token(tokens, &Token::Integer, "'integer'")?;
    let (name, position) = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Semicolon, "';'")?;

    Ok(Declaration { name, position })
}

/// Parses `<identifier> = <expression> ;`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, position) = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Equals, "'='")?;
    let value = parse_expression(tokens, dialect)?;
    expect_token(tokens, &Token::Semicolon, "';'")?;

    Ok(Statement::Assignment { name,
                               value,
                               position })
}

/// Parses `print <expression> ;`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let position = expect_token(tokens, &Token::Print, "'print'")?;
    let value = parse_expression(tokens, dialect)?;
    expect_token(tokens, &Token::Semicolon, "';'")?;

    Ok(Statement::Print { value, position })
}

/// Parses a `while` loop.
///
/// Syntax:
/// ```text
///     while ( <comparison> ) do { <statement>* } ; { ; }
/// ```
/// The `;` after the closing brace is mandatory. Any further `;` tokens
/// directly after it are consumed here and dropped.
///
/// # Errors
/// - `UnexpectedToken` if `(`, `)`, `do` or the trailing `;` is missing.
/// - `UnbalancedBraces` if the body is never closed.
/// - Propagates errors from the comparison and body statements.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let position = expect_token(tokens, &Token::While, "'while'")?;
    expect_token(tokens, &Token::LParen, "'(' after while")?;
    let condition = parse_comparison(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after loop condition")?;
    expect_token(tokens, &Token::Do, "'do' after loop condition")?;
    let body = parse_block(tokens, dialect)?;
    expect_token(tokens, &Token::Semicolon, "';' after loop body")?;

    while let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }

    Ok(Statement::While { condition,
                          body,
                          position })
}

/// Parses an `if` statement. Both branches are required.
///
/// Syntax:
/// ```text
///     if ( <comparison> ) { <statement>* } else { <statement>* } ;
/// ```
///
/// # Errors
/// - `UnexpectedToken` if `(`, `)`, `else` or the trailing `;` is missing.
/// - `UnbalancedBraces` if either branch is never closed.
/// - Propagates errors from the comparison and branch statements.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let position = expect_token(tokens, &Token::If, "'if'")?;
    expect_token(tokens, &Token::LParen, "'(' after if")?;
    let condition = parse_comparison(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after if condition")?;
    let then_branch = parse_block(tokens, dialect)?;
    expect_token(tokens, &Token::Else, "'else'")?;
    let else_branch = parse_block(tokens, dialect)?;
    expect_token(tokens, &Token::Semicolon, "';' after else block")?;

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       position })
}
