use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted modulus by zero.
    #[error("Error on line {line}: Modulus by zero.")]
    ModulusByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was evaluated where a number was required.
    #[error("Error on line {line}: A string cannot be used as a number.")]
    StringAsNumber {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// The source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::DivisionByZero { line }
            | Self::ModulusByZero { line }
            | Self::StringAsNumber { line } => *line,
        }
    }
}
