use thiserror::Error;

/// Parsing errors.
///
/// Defines every error the parser can raise: unexpected or missing tokens,
/// undeclared or redeclared variables, chained comparisons, and malformed
/// print interpolation. All of them are detected before any statement runs.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a parsed program, such as
/// division or modulus by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that ends a program run.
///
/// The first error stops the run; nothing is executed after it.
#[derive(Debug, Error)]
pub enum Error {
    /// The program could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Program output could not be written.
    #[error("Failed to write program output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// The source line the error was reported on, if it has one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => Some(e.line()),
            Self::Runtime(e) => Some(e.line()),
            Self::Output(_) => None,
        }
    }
}
