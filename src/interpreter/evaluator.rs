/// Binary operator evaluation logic.
///
/// Checked 64-bit addition, subtraction and multiplication.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the per-line execution context, statement execution, expression
/// evaluation and variable access.
pub mod core;

/// Evaluation of `while` loops, `if`/`else` branches and comparisons.
pub mod control_flow;
