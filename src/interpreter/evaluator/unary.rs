use std::io::Write;

use crate::{
    ast::UnaryOperator,
    interpreter::evaluator::core::{Context, from_bool, truthy},
};

impl<W: Write> Context<'_, W> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: arithmetic negation.
    /// - `Not`: logical inversion, `0` becomes `1` and anything else `0`.
    ///
    /// # Example
    /// ```
    /// use quill::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// type Ctx<'a> = Context<'a, Vec<u8>>;
    ///
    /// assert_eq!(Ctx::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// assert_eq!(Ctx::eval_unary(UnaryOperator::Not, 0.0), 1.0);
    /// assert_eq!(Ctx::eval_unary(UnaryOperator::Not, -3.5), 0.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -value,
            UnaryOperator::Not => from_bool(!truthy(value)),
        }
    }
}
