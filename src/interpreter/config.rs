use crate::ast::BinaryOperator;

/// Default number of variables one line may hold.
pub const MAX_VARIABLES: usize = 256;
/// Default number of tokens in one line, end marker included.
pub const MAX_TOKENS: usize = 2048;
/// Default size in bytes of one line's output, trailing newline included.
pub const OUTPUT_CAPACITY: usize = 4096;
/// Default nesting depth of parentheses and braces in one line.
pub const MAX_DEPTH: usize = 128;

/// Selects which of the two language variants is interpreted.
///
/// Both dialects share one grammar; the dialect switches vocabulary,
/// declaration rules and the grouping of the arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Dialect {
    /// Assignments and prints only. Variables spring into existence on first
    /// use with the value `0`.
    Base,
    /// Adds `integer` declarations, `while` and `if`/`else` blocks and
    /// relational comparisons. Every variable must be declared.
    #[default]
    Extended,
}

impl Dialect {
    /// Returns `true` if reading or assigning an unknown name creates it.
    #[must_use]
    pub const fn implicit_variables(self) -> bool {
        matches!(self, Self::Base)
    }

    /// Returns `true` if declarations, blocks and comparisons are available.
    #[must_use]
    pub const fn has_control_flow(self) -> bool {
        matches!(self, Self::Extended)
    }

    /// Operators joining terms at the outer (expression) level.
    ///
    /// The base dialect groups `+` with `*` here and pushes `-` one level
    /// down, so `2 + 3 * 4` is `20` and `8 * 3 - 1` is `16` there. This
    /// grouping is part of the base language and is kept as is.
    ///
    /// # Example
    /// ```
    /// use plang::{ast::BinaryOperator, interpreter::config::Dialect};
    ///
    /// assert!(Dialect::Base.expression_operators().contains(&BinaryOperator::Mul));
    /// assert!(Dialect::Extended.expression_operators().contains(&BinaryOperator::Sub));
    /// ```
    #[must_use]
    pub const fn expression_operators(self) -> &'static [BinaryOperator] {
        match self {
            Self::Base => &[BinaryOperator::Add, BinaryOperator::Mul],
            Self::Extended => &[BinaryOperator::Add, BinaryOperator::Sub],
        }
    }

    /// Operators joining factors at the inner (term) level.
    #[must_use]
    pub const fn term_operators(self) -> &'static [BinaryOperator] {
        match self {
            Self::Base => &[BinaryOperator::Sub],
            Self::Extended => &[BinaryOperator::Mul],
        }
    }
}

/// Capacities of the per-line containers.
///
/// Exceeding any of them fails the line instead of truncating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Symbol table capacity.
    pub max_variables:       usize,
    /// Token capacity, end marker included.
    pub max_tokens:          usize,
    /// Output buffer capacity in bytes, trailing newline included.
    pub output_capacity:     usize,
    /// Deepest allowed nesting of `(` and `{`, counted together. Parsing and
    /// execution recurse once per level.
    pub max_depth:           usize,
    /// Cap on `while` iterations per line. `None` means unbounded.
    pub max_loop_iterations: Option<u64>,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_variables:       MAX_VARIABLES,
               max_tokens:          MAX_TOKENS,
               output_capacity:     OUTPUT_CAPACITY,
               max_depth:           MAX_DEPTH,
               max_loop_iterations: None, }
    }
}

/// Everything one line run needs to know besides its source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// The language variant.
    pub dialect: Dialect,
    /// Container capacities and the optional loop cap.
    pub limits:  Limits,
}

impl Config {
    /// Creates a configuration for the given dialect with default limits.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect,
               limits: Limits::default() }
    }
}
