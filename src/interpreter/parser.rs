/// The parser state and the entry points for programs, expressions and
/// control flow.
///
/// Holds the token cursor and the symbol table that declarations are
/// recorded in while parsing.
pub mod core;

/// Unary operator and primary expression parsing.
///
/// Handles prefix `-` and `!`, variables, numeric literals, and parenthesized
/// sub-expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence chain from assignment down to exponentiation,
/// including the non-associative comparison levels.
pub mod binary;

/// Block parsing.
///
/// Parses `{ ... }` blocks, opening and closing a symbol-table scope around
/// them.
pub mod block;

/// Utility functions for the parser.
///
/// Provides token lookahead, expectation checks and variable resolution
/// shared by the other parser modules.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading token to declarations, print statements,
/// conditionals, loops, blocks and expression statements.
pub mod statement;
