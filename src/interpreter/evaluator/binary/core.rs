use std::io::Write;

use crate::{
    ast::MathOperator,
    error::RuntimeError,
    interpreter::evaluator::core::Context,
};

impl<W: Write> Context<'_, W> {
    /// Applies an arithmetic operator to two evaluated operands.
    ///
    /// `%` is the floating-point remainder, taking the sign of the dividend,
    /// and `**` is real exponentiation.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// `DivisionByZero` or `ModulusByZero` when the right operand of `/` or
    /// `%` is exactly zero.
    ///
    /// # Example
    /// ```
    /// use quill::{ast::MathOperator, interpreter::evaluator::core::Context};
    ///
    /// type Ctx<'a> = Context<'a, Vec<u8>>;
    ///
    /// assert_eq!(Ctx::eval_math(MathOperator::Pow, 2.0, 10.0, 1).unwrap(), 1024.0);
    /// assert_eq!(Ctx::eval_math(MathOperator::Mod, -7.0, 3.0, 1).unwrap(), -1.0);
    /// assert!(Ctx::eval_math(MathOperator::Div, 1.0, 0.0, 1).is_err());
    /// ```
    pub fn eval_math(op: MathOperator,
                     left: f64,
                     right: f64,
                     line: usize)
                     -> Result<f64, RuntimeError> {
        use MathOperator::{Add, Div, Mod, Mul, Pow, Sub};

        match op {
            Add => Ok(left + right),
            Sub => Ok(left - right),
            Mul => Ok(left * right),
            Div if right == 0.0 => Err(RuntimeError::DivisionByZero { line }),
            Div => Ok(left / right),
            Mod if right == 0.0 => Err(RuntimeError::ModulusByZero { line }),
            Mod => Ok(left % right),
            Pow => Ok(left.powf(right)),
        }
    }
}
