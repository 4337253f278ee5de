/// Binary operator parsing.
///
/// Handles the two arithmetic precedence levels, whose operator sets depend
/// on the dialect, and relational comparisons.
pub mod binary;
/// Block parsing.
///
/// Parses brace-delimited statement lists and locates the matching closing
/// brace before any statement inside is parsed.
pub mod block;
/// Core parsing logic.
///
/// Contains the parse result type and the program and expression entry
/// points.
pub mod core;
/// Statement parsing.
///
/// Responsible for declarations, assignments, prints, `while` loops and
/// `if`/`else` branches.
pub mod statement;
/// Unary and primary expression parsing.
///
/// Handles the optional leading minus and the atomic forms: literals,
/// variables and parenthesised expressions.
pub mod unary;
/// Shared helpers for the parser.
pub mod utils;
