use std::io::Write;

use crate::{
    ast::CompareOperator,
    interpreter::evaluator::core::{Context, from_bool},
};

impl<W: Write> Context<'_, W> {
    /// Compares two evaluated operands.
    ///
    /// Comparisons are exact; any comparison involving NaN is false except
    /// `!=`.
    ///
    /// # Returns
    /// `1` if the comparison holds, `0` otherwise.
    #[must_use]
    pub fn eval_comparison(op: CompareOperator, left: f64, right: f64) -> f64 {
        use CompareOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        #[allow(clippy::float_cmp)]
        let result = match op {
            Less => left < right,
            LessEqual => left <= right,
            Greater => left > right,
            GreaterEqual => left >= right,
            Equal => left == right,
            NotEqual => left != right,
        };
        from_bool(result)
    }
}
