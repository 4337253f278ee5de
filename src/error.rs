/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a
/// line: invalid words, grammar mismatches, unclosed braces and token
/// capacity overflow.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a parsed line,
/// such as unknown variables, duplicate declarations, overflow of the fixed
/// capacity containers and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
