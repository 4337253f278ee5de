/// Dialect selection and container capacities.
///
/// Everything that varies between runs lives in one `Config` value that is
/// passed into each line explicitly; the interpreter keeps no global state.
pub mod config;
/// The evaluator module executes parsed programs.
///
/// The evaluator walks the statement list of a program, evaluates arithmetic,
/// repeats loop bodies and picks branches, mutating the per-line symbol table
/// and output buffer as it goes.
///
/// # Responsibilities
/// - Runs declarations, assignments, prints, loops and branches.
/// - Applies the dialect's variable rules (implicit creation or mandatory
///   declaration).
/// - Reports runtime errors such as unknown variables or overflow.
pub mod evaluator;
/// The lexer module tokenizes one input line.
///
/// The line is split on whitespace and every word is classified as a symbol,
/// keyword, integer literal, identifier or error token. The stream ends with
/// a single end marker.
///
/// # Responsibilities
/// - Enforces the ten character limit on names and literals.
/// - Folds look-alike dash glyphs into the minus operator.
/// - Hides extended-only vocabulary from the base dialect.
pub mod lexer;
/// Buffered output of one line.
///
/// Printed values are collected here and only written out once the whole line
/// has succeeded.
pub mod output;
/// The parser module builds a [`Program`](crate::ast::Program) from tokens.
///
/// The parser is a recursive-descent parser with one function per grammar
/// rule. It validates the entire line, including loop bodies and both
/// branches of every `if`, before anything is executed.
///
/// # Responsibilities
/// - Converts tokens into declarations, statements and expressions.
/// - Groups arithmetic operators according to the dialect.
/// - Detects unbalanced braces and malformed statements.
pub mod parser;
/// The per-line symbol table.
///
/// A small fixed-capacity map from variable names to 64-bit values.
pub mod symbols;
