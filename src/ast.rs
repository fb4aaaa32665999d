use std::fmt;

use crate::interpreter::symbol_table::VarId;

/// Arithmetic operators, including exponentiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `**`
    Pow,
}

/// Relational and equality operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOperator {
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl CompareOperator {
    /// Maps comparison operator text to its operator.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Self::Less),
            "<=" => Some(Self::LessEqual),
            ">" => Some(Self::Greater),
            ">=" => Some(Self::GreaterEqual),
            "==" => Some(Self::Equal),
            "!=" => Some(Self::NotEqual),
            _ => None,
        }
    }

    /// `==` and `!=`, as opposed to the ordering comparisons.
    #[must_use]
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }
}

/// Short-circuiting logical operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    /// `&&`
    And,
    /// `||`
    Or,
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
    /// `!x`
    Not,
}

impl fmt::Display for MathOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Add => "+",
                        Self::Sub => "-",
                        Self::Mul => "*",
                        Self::Div => "/",
                        Self::Mod => "%",
                        Self::Pow => "**",
                    })
    }
}

impl fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Less => "<",
                        Self::LessEqual => "<=",
                        Self::Greater => ">",
                        Self::GreaterEqual => ">=",
                        Self::Equal => "==",
                        Self::NotEqual => "!=",
                    })
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::And => "&&",
                        Self::Or => "||",
                    })
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Negate => "-",
                        Self::Not => "!",
                    })
    }
}

/// A node of the syntax tree.
///
/// Statements and expressions share one type: every node evaluates to a
/// number, and statement nodes simply have their value ignored. Each parent
/// owns its children outright, and the shape of each variant fixes how many
/// children it has. Every node records the source line it started on.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A block (or the whole program): statements run in order.
    Scope {
        /// The statements of the block.
        children: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `print(...)`: string fragments are written verbatim, everything else
    /// is evaluated and written as a number.
    Print {
        /// Fragments and expressions, in output order.
        children: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Stores the value into a variable and yields it.
    Assign {
        /// The variable written to.
        target: VarId,
        /// The value expression.
        value:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// `if (condition) then_branch [else else_branch]`.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Run when the condition is non-zero.
        then_branch: Box<Self>,
        /// Run when the condition is zero, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while (condition) body`.
    While {
        /// The loop condition.
        condition: Box<Self>,
        /// The loop body; an empty scope for `while (condition);`.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Reference to a declared variable.
    Variable {
        /// The resolved variable.
        id:   VarId,
        /// Line number in the source code.
        line: usize,
    },
    /// Numeric literal.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Literal text; only appears as a child of [`Node::Print`].
    StringLiteral {
        /// The text, without quotes.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `left op right` for arithmetic operators.
    Math {
        /// The operator.
        op:    MathOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `left op right` for comparison operators.
    Compare {
        /// The operator.
        op:    CompareOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `left op right` for `&&` and `||`.
    Logical {
        /// The operator.
        op:    LogicalOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand, evaluated only when needed.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `op operand`.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// `(inner)`; evaluates to `inner`.
    Paren {
        /// The wrapped expression.
        inner: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Node {
    /// The source line this node starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Scope { line, .. }
            | Self::Print { line, .. }
            | Self::Assign { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Variable { line, .. }
            | Self::Number { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::Math { line, .. }
            | Self::Compare { line, .. }
            | Self::Logical { line, .. }
            | Self::Unary { line, .. }
            | Self::Paren { line, .. } => *line,
        }
    }

    /// Number of child nodes.
    ///
    /// An assignment counts its target variable as a child.
    #[must_use]
    pub fn child_count(&self) -> usize {
        match self {
            Self::Scope { children, .. } | Self::Print { children, .. } => children.len(),
            Self::If { else_branch, .. } => 2 + usize::from(else_branch.is_some()),
            Self::Assign { .. }
            | Self::While { .. }
            | Self::Math { .. }
            | Self::Compare { .. }
            | Self::Logical { .. } => 2,
            Self::Unary { .. } | Self::Paren { .. } => 1,
            Self::Variable { .. } | Self::Number { .. } | Self::StringLiteral { .. } => 0,
        }
    }

    /// The variable this expression names, looking through parentheses.
    #[must_use]
    pub fn as_variable(&self) -> Option<VarId> {
        match self {
            Self::Variable { id, .. } => Some(*id),
            Self::Paren { inner, .. } => inner.as_variable(),
            _ => None,
        }
    }
}
