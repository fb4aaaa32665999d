use std::io::Write;

use crate::{
    ast::Node,
    error::{Error, RuntimeError},
    interpreter::symbol_table::SymbolTable,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// [`Error`] that ended the run, which may be a runtime error or a failure to
/// write output.
pub type EvalResult<T> = Result<T, Error>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the symbol table produced by the
/// parser, whose values are updated as assignments run, and the sink that
/// print statements write to.
///
/// ## Usage
///
/// A `Context` is created once per program, after parsing, and consumed by
/// evaluating the program's top-level scope.
pub struct Context<'w, W: Write> {
    /// Variables of the program being run.
    pub symbols: SymbolTable,
    pub(in crate::interpreter::evaluator) out: &'w mut W,
}

impl<'w, W: Write> Context<'w, W> {
    /// Creates a context over the symbol table the program was parsed with.
    pub const fn new(symbols: SymbolTable, out: &'w mut W) -> Self {
        Self { symbols, out }
    }

    /// Flushes the output sink.
    pub fn flush(&mut self) -> EvalResult<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Evaluates a node and returns its value.
    ///
    /// This is the main entry point for evaluation. Every node produces a
    /// number; statements produce a value too, which callers are free to
    /// ignore.
    ///
    /// # Parameters
    /// - `node`: Node to evaluate.
    ///
    /// # Returns
    /// The value of the node.
    ///
    /// # Errors
    /// Stops at the first runtime error or output failure.
    pub fn eval(&mut self, node: &Node) -> EvalResult<f64> {
        match node {
            Node::Scope { children, .. } => self.eval_scope(children),
            Node::Print { children, line } => self.eval_print(children, *line),
            Node::Assign { target, value, .. } => {
                let value = self.eval(value)?;
                self.symbols.set(*target, value);
                Ok(value)
            },
            Node::If { condition,
                       then_branch,
                       else_branch,
                       .. } => self.eval_if(condition, then_branch, else_branch.as_deref()),
            Node::While { condition, body, .. } => self.eval_while(condition, body),
            Node::Variable { id, .. } => Ok(self.symbols.get(*id)),
            Node::Number { value, .. } => Ok(*value),
            Node::StringLiteral { line, .. } => {
                Err(RuntimeError::StringAsNumber { line: *line }.into())
            },
            Node::Math { op,
                         left,
                         right,
                         line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_math(*op, left, right, *line)?)
            },
            Node::Compare { op, left, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_comparison(*op, left, right))
            },
            Node::Logical { op, left, right, .. } => self.eval_logic(*op, left, right),
            Node::Unary { op, operand, .. } => {
                let value = self.eval(operand)?;
                Ok(Self::eval_unary(*op, value))
            },
            Node::Paren { inner, .. } => self.eval(inner),
        }
    }

    /// Runs the statements of a scope in order.
    ///
    /// # Returns
    /// The value of the last statement, or `0` for an empty scope.
    fn eval_scope(&mut self, children: &[Node]) -> EvalResult<f64> {
        let mut last = 0.0;
        for child in children {
            last = self.eval(child)?;
        }
        Ok(last)
    }

    /// Evaluates an `if` statement.
    ///
    /// # Returns
    /// The value of the branch taken, or `0` if the condition is zero and
    /// there is no `else` branch.
    fn eval_if(&mut self,
               condition: &Node,
               then_branch: &Node,
               else_branch: Option<&Node>)
               -> EvalResult<f64> {
        if truthy(self.eval(condition)?) {
            self.eval(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch)
        } else {
            Ok(0.0)
        }
    }

    /// Evaluates a `while` loop.
    ///
    /// There is no iteration limit; a condition that never becomes zero
    /// loops forever.
    fn eval_while(&mut self, condition: &Node, body: &Node) -> EvalResult<f64> {
        let mut iterations: u64 = 0;
        while truthy(self.eval(condition)?) {
            self.eval(body)?;
            iterations += 1;
        }
        log::trace!("loop finished after {iterations} iterations");
        Ok(0.0)
    }
}

/// Any value other than `0` counts as true.
#[must_use]
pub const fn truthy(value: f64) -> bool {
    value != 0.0
}

/// Converts a boolean into the language's `1`/`0` representation.
#[must_use]
pub const fn from_bool(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}
