use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Applies a binary operator to two values.
    ///
    /// Arithmetic is checked: a result outside the `i64` range is an error
    /// rather than a wrapped value.
    ///
    /// # Parameters
    /// - `op`: Operator to apply.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Word position of the operator, for errors.
    ///
    /// # Returns
    /// The computed value wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use plang::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Sub, 30, 25, 1).unwrap(), 5);
    /// assert!(Context::eval_binary(BinaryOperator::Mul, i64::MAX, 2, 1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: i64,
                       right: i64,
                       position: usize)
                       -> EvalResult<i64> {
        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
        };
        result.ok_or(RuntimeError::Overflow { position })
    }
}
