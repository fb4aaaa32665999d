/// The evaluator module executes the syntax tree.
///
/// The evaluator walks the tree produced by the parser, computes the value of
/// every node, updates variables and writes print output.
///
/// # Responsibilities
/// - Evaluates every node kind; the only runtime value is an `f64`.
/// - Short-circuits `&&` and `||`.
/// - Reports runtime errors such as division or modulus by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a meaningful language element such as a
/// number, an identifier, an operator or a keyword. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens with a kind, the matched text and the
///   source line.
/// - Resolves overlapping patterns by longest match, then by rule priority.
/// - Never fails: unknown characters become single-character tokens.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a tree of [`Node`](crate::ast::Node)s. Variable names are resolved while
/// parsing, so scoping errors are reported before anything runs.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Enforces operator precedence, associativity and the non-associative
///   comparison levels.
/// - Reports syntax and scoping errors with their line.
pub mod parser;
/// The symbol table maps names to variables.
///
/// Scopes are opened and closed by the parser as it enters and leaves blocks.
/// Variables are stored independently of scopes so the evaluator can keep
/// reading and writing them by id.
pub mod symbol_table;
