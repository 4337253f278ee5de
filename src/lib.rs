//! # plang
//!
//! plang is a line-oriented interpreter for a tiny imperative language written
//! in Rust. Every input line is a complete program: it may declare integer
//! variables, assign arithmetic expressions, print values and, in the
//! extended dialect, run `while` loops and `if`/`else` branches guarded by
//! comparisons between variables.
//!
//! Each line is tokenized, parsed into a small syntax tree and then executed
//! against a fresh context. Nothing carries over from one line to the next.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::interpreter::{
    config::Config,
    evaluator::core::Context,
    lexer::{is_empty_program, tokenize},
    output::OutputBuffer,
    parser::core::parse_program,
};

/// Defines the structure of parsed lines.
///
/// This module declares the expression, comparison and statement types the
/// parser produces and the evaluator executes. Every node records the word
/// position it came from.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Every failure, lexical, grammatical or at run time, ends the line with the
/// same user-facing message; these types keep the detail for diagnostics.
pub mod error;
/// Orchestrates the execution of a single line.
///
/// This module ties together configuration, lexing, parsing, evaluation, the
/// symbol table and the output buffer.
pub mod interpreter;
/// The read-print loop that feeds lines to [`run_line`].
pub mod shell;

/// Runs one line and returns its output, ready to be committed.
///
/// The line is tokenized, parsed and executed in a new [`Context`]. A blank
/// line is an empty program and yields an empty buffer.
///
/// # Errors
/// Returns an error if tokenizing, parsing or execution fails. The output of
/// a failed line is dropped with its context.
///
/// # Examples
/// ```
/// use plang::{interpreter::config::{Config, Dialect}, run_line};
///
/// let config = Config::new(Dialect::Base);
/// let output = run_line("k = 5 ; print k ;", &config).unwrap();
/// assert_eq!(output.into_line(), ">> 5\n");
///
/// // 'x' is not declared, which the extended dialect rejects.
/// assert!(run_line("x = 1 ;", &Config::default()).is_err());
/// ```
pub fn run_line(source: &str, config: &Config) -> Result<OutputBuffer, Box<dyn std::error::Error>> {
    let tokens = tokenize(source, config)?;
    if is_empty_program(&tokens) {
        return Ok(OutputBuffer::new(config.limits.output_capacity));
    }

    let program = parse_program(&mut tokens.iter().peekable(), config.dialect)?;

    let mut context = Context::new(config);
    if let Err(e) = context.run(&program) {
        debug!("runtime failure, {} variable(s) left as they were: {e}",
               context.symbols.len());
        return Err(Box::new(e));
    }

    Ok(context.into_output())
}
