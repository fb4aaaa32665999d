//! # quill
//!
//! quill is an interpreter for a small, lexically scoped imperative language
//! written in Rust. Every value is a floating-point number; programs are made
//! of variable declarations, assignments, `if`/`else`, `while` loops, blocks
//! and `print` statements with `{name}` interpolation.
//!
//! Source text goes through three stages: a table-driven tokenizer, a
//! recursive-descent parser that resolves variables against a scoped symbol
//! table, and a tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Node,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Context, parser::core::Parser, symbol_table::SymbolTable},
};
pub use crate::interpreter::lexer::tokenize;

/// Defines the structure of parsed code.
///
/// This module declares the [`Node`] enum and the operator types that
/// represent the syntactic structure of a program as a tree. The tree is
/// built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one node kind per statement and expression form.
/// - Attaches the source line to every node for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// running a program. Every error carries the line it was detected on and
/// renders as `Error on line N: ...`.
///
/// # Responsibilities
/// - Defines error enums for the parser and the evaluator.
/// - Wraps both, together with output failures, in a single [`Error`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the symbol table and
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, symbol table and
///   evaluator.
/// - Manages the flow of data between phases.
pub mod interpreter;
/// General helpers used by more than one phase.
///
/// # Responsibilities
/// - Formats numbers for program output.
pub mod util;

/// Parses a program into its syntax tree.
///
/// Declarations are recorded in `symbols`, which the tree refers to by id;
/// the same table must be handed to the evaluator.
///
/// # Errors
/// Returns the first syntax or scoping error.
///
/// # Examples
/// ```
/// use quill::{interpreter::symbol_table::SymbolTable, parse};
///
/// let mut symbols = SymbolTable::new();
/// let tree = parse("var x = 1; { var x = 2; }", &mut symbols).unwrap();
/// assert_eq!(tree.child_count(), 2);
/// assert_eq!(symbols.len(), 2);
///
/// assert!(parse("y = 1;", &mut SymbolTable::new()).is_err());
/// ```
pub fn parse(source: &str, symbols: &mut SymbolTable) -> Result<Node, ParseError> {
    let tokens = tokenize(source);
    Parser::new(&tokens, symbols).parse_program()
}

/// Runs a program, writing its output to `out`.
///
/// The whole program is parsed before anything runs, so a syntax error
/// anywhere produces no output at all. A runtime error stops execution;
/// lines printed before it have already been written.
///
/// # Errors
/// Returns the parse error, the runtime error, or the output failure that
/// ended the run.
///
/// # Examples
/// ```
/// let mut out = Vec::new();
/// quill::run("var n = 3; while (n > 0) { print(n); n = n - 1; }", &mut out).unwrap();
/// assert_eq!(out, b"3\n2\n1\n");
/// ```
pub fn run(source: &str, out: &mut impl Write) -> Result<(), Error> {
    let mut symbols = SymbolTable::new();
    let tree = parse(source, &mut symbols)?;

    let mut context = Context::new(symbols, out);
    context.eval(&tree)?;
    context.flush()?;

    log::debug!("program finished, {} variables", context.symbols.len());
    Ok(())
}

/// Runs a program and returns everything it printed.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use quill::get_result;
///
/// let output = get_result("var x = 5; print(\"value={x}\");").unwrap();
/// assert_eq!(output, "value=5\n");
///
/// // Example with an intentional error (unknown variable).
/// let res = get_result("print(y);");
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    run(source, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
