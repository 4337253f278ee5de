use log::trace;

use crate::{
    ast::{Comparison, Statement},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a comparison against the current variable values.
    ///
    /// Comparisons never change state; both operands must be declared
    /// variables.
    ///
    /// # Errors
    /// Returns `UnknownVariable` if either side is undeclared.
    pub fn eval_comparison(&mut self, comparison: &Comparison) -> EvalResult<bool> {
        let left = self.read_variable(&comparison.left, comparison.position)?;
        let right = self.read_variable(&comparison.right, comparison.position)?;
        Ok(comparison.op.holds(left, right))
    }

    /// Executes a `while` loop.
    ///
    /// The condition is re-evaluated before every iteration, so assignments
    /// in the body steer the loop. A loop whose condition is false at the
    /// start runs zero times.
    ///
    /// There is no iteration cap unless one is configured; an endless loop
    /// then blocks the caller. With a cap, the total number of iterations
    /// across all loops of the line is counted.
    ///
    /// # Parameters
    /// - `condition`: Loop guard.
    /// - `body`: Statements run on each iteration.
    /// - `position`: Word position of `while`, for errors.
    ///
    /// # Errors
    /// - `LoopLimitExceeded` once the configured cap is passed.
    /// - Propagates any error raised by the body.
    pub fn exec_while(&mut self,
                      condition: &Comparison,
                      body: &[Statement],
                      position: usize)
                      -> EvalResult<()> {
        while self.eval_comparison(condition)? {
            self.loop_counter += 1;
            if let Some(limit) = self.loop_limit
               && self.loop_counter > limit
            {
                return Err(RuntimeError::LoopLimitExceeded { limit, position });
            }

            trace!("while at word {position}: iteration {}", self.loop_counter);
            self.exec_block(body)?;
        }
        Ok(())
    }

    /// Executes an `if`/`else` statement.
    ///
    /// Exactly one branch runs. The other was only checked for syntax by the
    /// parser and has no effect.
    pub fn exec_if(&mut self,
                   condition: &Comparison,
                   then_branch: &[Statement],
                   else_branch: &[Statement])
                   -> EvalResult<()> {
        if self.eval_comparison(condition)? {
            self.exec_block(then_branch)
        } else {
            self.exec_block(else_branch)
        }
    }
}
