/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparison and short-circuiting logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context holding variable
/// values and the output sink, and control flow.
pub mod core;

/// Evaluation of print statements.
///
/// Renders string fragments and numeric values into one line of output.
pub mod print;
