use std::iter::Peekable;

use log::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        config::Dialect,
        lexer::Token,
        parser::{
            binary::parse_sum,
            statement::{parse_declaration, parse_statement},
            utils::at_end,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole line.
///
/// Grammar: `program := { declaration } { statement }`
///
/// Declarations may only appear before the first statement; an `integer`
/// after that point is a syntax error. Parsing stops at the end marker, and
/// every statement up to it must be well formed, including loop bodies and
/// branches that will never run.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `dialect`: The active dialect.
///
/// # Returns
/// The parsed program.
///
/// # Example
/// ```
/// use plang::interpreter::{
///     config::{Config, Dialect},
///     lexer::tokenize,
///     parser::core::parse_program,
/// };
///
/// let tokens = tokenize("integer k ; k = 5 ; print k ;", &Config::default()).unwrap();
/// let program = parse_program(&mut tokens.iter().peekable(), Dialect::Extended).unwrap();
///
/// assert_eq!(program.declarations.len(), 1);
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut program = Program::default();

    while let Some((Token::Integer, _)) = tokens.peek() {
        program.declarations.push(parse_declaration(tokens)?);
    }

    while !at_end(tokens) {
        program.statements.push(parse_statement(tokens, dialect)?);
    }

    debug!("parsed {} declaration(s) and {} statement(s)",
           program.declarations.len(),
           program.statements.len());

    Ok(program)
}

/// Parses a full arithmetic expression.
///
/// This is the entry point for expression parsing. It begins at the outer
/// operator level and descends through terms and factors.
///
/// Grammar: `expression := sum`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `dialect`: Decides which operators bind at which level.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_sum(tokens, dialect)
}
