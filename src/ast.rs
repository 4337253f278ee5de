/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
}

/// A relational operator, usable only inside a [`Comparison`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationalOperator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
}

impl RelationalOperator {
    /// Applies the operator to two values.
    ///
    /// # Example
    /// ```
    /// use plang::ast::RelationalOperator;
    ///
    /// assert!(RelationalOperator::Greater.holds(30, 25));
    /// assert!(!RelationalOperator::Equal.holds(1, 2));
    /// ```
    #[must_use]
    pub const fn holds(self, left: i64, right: i64) -> bool {
        match self {
            Self::Equal => left == right,
            Self::NotEqual => left != right,
            Self::Less => left < right,
            Self::Greater => left > right,
        }
    }
}

/// An arithmetic expression.
///
/// Every node keeps the word position of the token that introduced it so
/// failures can be traced back to the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The literal value.
        value:    i64,
        /// Word position in the line.
        position: usize,
    },
    /// A variable read.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Word position in the line.
        position: usize,
    },
    /// A single leading unary minus.
    Negate {
        /// The negated operand.
        expr:     Box<Self>,
        /// Word position of the `-`.
        position: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Word position of the operator.
        position: usize,
    },
}

/// `identifier op identifier`, the guard of `while` and `if`.
///
/// Both sides are variable names; literals are rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Left variable.
    pub left:     String,
    /// The relational operator.
    pub op:       RelationalOperator,
    /// Right variable.
    pub right:    String,
    /// Word position of the left operand.
    pub position: usize,
}

/// `integer name ;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The declared name.
    pub name:     String,
    /// Word position of the name.
    pub position: usize,
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A lone `;`.
    Empty,
    /// `name = expr ;`
    Assignment {
        /// Target variable.
        name:     String,
        /// Assigned expression.
        value:    Expr,
        /// Word position of the target.
        position: usize,
    },
    /// `print expr ;`
    Print {
        /// The printed expression.
        value:    Expr,
        /// Word position of `print`.
        position: usize,
    },
    /// `while ( comparison ) do { body } ;`
    While {
        /// Guard re-evaluated before each iteration.
        condition: Comparison,
        /// Loop body.
        body:      Vec<Self>,
        /// Word position of `while`.
        position:  usize,
    },
    /// `if ( comparison ) { then } else { else } ;`
    If {
        /// Branch selector.
        condition:   Comparison,
        /// Statements run when the condition holds.
        then_branch: Vec<Self>,
        /// Statements run otherwise.
        else_branch: Vec<Self>,
        /// Word position of `if`.
        position:    usize,
    },
}

/// One parsed input line: leading declarations, then statements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// `integer` declarations, in source order.
    pub declarations: Vec<Declaration>,
    /// Statements, in source order.
    pub statements:   Vec<Statement>,
}
