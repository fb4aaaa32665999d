use std::io::Write;

use crate::{
    ast::{LogicalOperator, Node},
    interpreter::evaluator::core::{Context, EvalResult, from_bool, truthy},
};

impl<W: Write> Context<'_, W> {
    /// Evaluates `&&` or `||` with short-circuiting.
    ///
    /// The right operand is only evaluated when the left one does not
    /// already decide the result, so its side effects (assignments, prints)
    /// are skipped otherwise.
    ///
    /// # Returns
    /// `1` or `0`.
    pub fn eval_logic(&mut self,
                      op: LogicalOperator,
                      left: &Node,
                      right: &Node)
                      -> EvalResult<f64> {
        let left = truthy(self.eval(left)?);

        match (op, left) {
            (LogicalOperator::And, false) => Ok(0.0),
            (LogicalOperator::Or, true) => Ok(1.0),
            _ => {
                log::trace!("'{op}' evaluating its right operand");
                Ok(from_bool(truthy(self.eval(right)?)))
            },
        }
    }
}
