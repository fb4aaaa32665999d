use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur while parsing.
pub enum ParseError {
    /// A token other than the one the grammar requires was found.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The kind of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The input ended in the middle of a construct.
    #[error("Error on line {line}: Expected {expected}, but reached the end of input.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// Line of the last token read.
        line:     usize,
    },
    /// A variable was declared twice in the same scope.
    #[error("Error on line {line}: Redeclaration of variable '{name}'.")]
    Redeclaration {
        /// The variable name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable was used without being declared in any enclosing scope.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UndeclaredVariable {
        /// The variable name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// `a == b == c` and friends.
    #[error("Error on line {line}: Chaining of equality operators is not allowed.")]
    ChainedEquality {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `a < b < c` and friends.
    #[error("Error on line {line}: Chaining of comparison operators is not allowed.")]
    ChainedComparison {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of `=` is not a variable.
    #[error("Error on line {line}: Left side of assignment must be a variable.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `{...}` marker in a print string is unterminated or does not hold a
    /// variable name.
    #[error("Error on line {line}: Malformed interpolation in print string: {details}.")]
    MalformedInterpolation {
        /// What is wrong with the marker.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Expressions or blocks nest deeper than the parser allows.
    #[error("Error on line {line}: Nesting is limited to {limit} levels.")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric literal could not be converted to a number.
    #[error("Error on line {line}: Invalid number literal '{text}'.")]
    InvalidNumber {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// The source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::Redeclaration { line, .. }
            | Self::UndeclaredVariable { line, .. }
            | Self::ChainedEquality { line }
            | Self::ChainedComparison { line }
            | Self::InvalidAssignmentTarget { line }
            | Self::MalformedInterpolation { line, .. }
            | Self::NestingTooDeep { line, .. }
            | Self::InvalidNumber { line, .. } => *line,
        }
    }
}
