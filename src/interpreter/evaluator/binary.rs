/// Arithmetic operators.
pub mod core;

/// Relational and equality operators.
pub mod comparison;

/// Short-circuiting `&&` and `||`.
pub mod logic;
