use std::io::Write;

use crate::{
    ast::Node,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::format_number,
};

impl<W: Write> Context<'_, W> {
    /// Evaluates a print statement.
    ///
    /// String fragments are written verbatim and every other child is
    /// evaluated and formatted with [`format_number`]. The whole line,
    /// including its newline, is assembled first and handed to the sink in a
    /// single write.
    ///
    /// # Returns
    /// Always `0`.
    pub(in crate::interpreter::evaluator) fn eval_print(&mut self,
                                                        children: &[Node],
                                                        line: usize)
                                                        -> EvalResult<f64> {
        let mut text = String::new();
        for child in children {
            match child {
                Node::StringLiteral { text: fragment, .. } => text.push_str(fragment),
                _ => text.push_str(&format_number(self.eval(child)?)),
            }
        }
        text.push('\n');

        log::trace!("print on line {line}: {:?}", text.trim_end());
        self.out.write_all(text.as_bytes())?;
        Ok(0.0)
    }
}
