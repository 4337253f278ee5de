use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Negates a value.
    ///
    /// # Errors
    /// Returns `Overflow` for `i64::MIN`, which has no positive counterpart.
    ///
    /// # Example
    /// ```
    /// use plang::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_negate(5, 1).unwrap(), -5);
    /// assert!(Context::eval_negate(i64::MIN, 1).is_err());
    /// ```
    pub fn eval_negate(value: i64, position: usize) -> EvalResult<i64> {
        value.checked_neg()
             .ok_or(RuntimeError::Overflow { position })
    }
}
