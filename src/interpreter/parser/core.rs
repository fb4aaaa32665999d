use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        symbol_table::SymbolTable,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of blocks, parentheses and right-recursive operators the
/// parser accepts before failing with `NestingTooDeep`.
pub const MAX_NESTING: usize = 200;

/// Recursive-descent parser over a token slice.
///
/// Variable references are resolved against the symbol table as they are
/// parsed, and declarations are recorded in it, so the tree it produces
/// refers to variables only by [`VarId`](crate::interpreter::symbol_table::VarId).
pub struct Parser<'t, 's> {
    pub(in crate::interpreter::parser) tokens:  Peekable<Iter<'t, Token>>,
    pub(in crate::interpreter::parser) symbols: &'s mut SymbolTable,
    /// Line of the most recently consumed token.
    pub(in crate::interpreter::parser) line:    usize,
    /// Current recursion depth, bounded by [`MAX_NESTING`].
    pub(in crate::interpreter::parser) depth:   usize,
}

impl<'t, 's> Parser<'t, 's> {
    /// Creates a parser over `tokens` that records declarations in `symbols`.
    pub fn new(tokens: &'t [Token], symbols: &'s mut SymbolTable) -> Self {
        Self { tokens: tokens.iter().peekable(),
               symbols,
               line: 1,
               depth: 0 }
    }

    /// Parses every remaining token as a sequence of statements.
    ///
    /// Grammar: `program := statement*`
    ///
    /// # Returns
    /// The top-level [`Node::Scope`]; empty statements are dropped.
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered; there is no recovery.
    pub fn parse_program(mut self) -> ParseResult<Node> {
        let mut children = Vec::new();
        while self.tokens.peek().is_some() {
            if let Some(statement) = self.parse_statement()? {
                children.push(statement);
            }
        }
        log::debug!("parsed {} top-level statements, {} variables declared",
                    children.len(),
                    self.symbols.len());
        Ok(Node::Scope { children,
                         line: 1 })
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, assignment, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := assignment`
    pub fn parse_expression(&mut self) -> ParseResult<Node> {
        self.nested(Self::parse_assignment)
    }

    /// Parses an `if` statement with an optional `else` branch.
    ///
    /// Syntax:
    /// ```text
    ///     if ( <condition> ) <statement>
    ///     if ( <condition> ) <statement> else <statement>
    /// ```
    /// A trailing `else` always binds to the nearest `if`.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the parentheses around the condition are
    ///   missing.
    /// - Propagates any errors from the condition or the branches.
    pub fn parse_if(&mut self) -> ParseResult<Node> {
        let line = self.expect(TokenKind::If)?.line;
        let condition = self.parse_condition()?;
        let then_branch = self.parse_body()?;

        let else_branch = match self.next_if(TokenKind::Else) {
            Some(_) => Some(Box::new(self.parse_body()?)),
            None => None,
        };

        Ok(Node::If { condition: Box::new(condition),
                      then_branch: Box::new(then_branch),
                      else_branch,
                      line })
    }

    /// Parses a `while` loop.
    ///
    /// Syntax: `while ( <condition> ) <statement>`. A bare `;` body is legal
    /// and produces an empty scope, so the loop only re-evaluates its
    /// condition.
    pub fn parse_while(&mut self) -> ParseResult<Node> {
        let line = self.expect(TokenKind::While)?.line;
        let condition = self.parse_condition()?;
        let body = self.parse_body()?;

        Ok(Node::While { condition: Box::new(condition),
                         body: Box::new(body),
                         line })
    }

    /// Parses a parenthesized condition: `"(" expression ")"`.
    fn parse_condition(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::OpenParen)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::CloseParen)?;
        Ok(condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{MathOperator, UnaryOperator},
        interpreter::lexer::tokenize,
    };

    fn parse(source: &str) -> ParseResult<Vec<Node>> {
        let tokens = tokenize(source);
        let mut symbols = SymbolTable::new();
        match Parser::new(&tokens, &mut symbols).parse_program()? {
            Node::Scope { children, .. } => Ok(children),
            other => panic!("program parsed to {other:?}"),
        }
    }

    fn single(source: &str) -> Node {
        let mut children = parse(source).unwrap();
        assert_eq!(children.len(), 1, "{source}");
        children.remove(0)
    }

    #[test]
    fn exponent_is_right_associative() {
        let Node::Math { op: MathOperator::Pow, left, right, .. } = single("2 ** 3 ** 2;")
        else {
            panic!("expected a power");
        };
        assert!(matches!(*left, Node::Number { value, .. } if value == 2.0));
        assert!(matches!(*right, Node::Math { op: MathOperator::Pow, .. }));
    }

    #[test]
    fn unary_binds_tighter_than_exponent() {
        let Node::Math { op: MathOperator::Pow, left, .. } = single("-2 ** 2;")
        else {
            panic!("expected a power");
        };
        assert!(matches!(*left, Node::Unary { op: UnaryOperator::Negate, .. }));
    }

    #[test]
    fn subtraction_is_left_associative() {
        let Node::Math { op: MathOperator::Sub, left, right, .. } = single("10 - 4 - 3;")
        else {
            panic!("expected a subtraction");
        };
        assert!(matches!(*left, Node::Math { op: MathOperator::Sub, .. }));
        assert!(matches!(*right, Node::Number { value, .. } if value == 3.0));
    }

    #[test]
    fn empty_statements_are_dropped() {
        assert!(parse("; ;;").unwrap().is_empty());
        assert!(matches!(single("{ ; }"), Node::Scope { ref children, .. } if children.is_empty()));
    }

    #[test]
    fn while_with_empty_body() {
        let Node::While { body, .. } = single("while (0);")
        else {
            panic!("expected a loop");
        };
        assert!(matches!(*body, Node::Scope { ref children, .. } if children.is_empty()));
    }

    #[test]
    fn declaration_without_initializer_assigns_zero() {
        let Node::Assign { target, value, .. } = single("var x;")
        else {
            panic!("expected an assignment");
        };
        assert_eq!(target.index(), 0);
        assert!(matches!(*value, Node::Number { value, .. } if value == 0.0));
    }

    #[test]
    fn print_splits_interpolation() {
        let children = parse("var a = 1; print(\"a={ a }!{}x\");");
        assert!(matches!(children, Err(ParseError::MalformedInterpolation { .. })));

        let children = parse("var a = 1; print(\"a={ a }!}\");").unwrap();
        let Node::Print { children, .. } = &children[1]
        else {
            panic!("expected a print");
        };
        assert_eq!(children.len(), 3);
        assert!(matches!(&children[0], Node::StringLiteral { text, .. } if text == "a="));
        assert!(matches!(children[1], Node::Variable { .. }));
        assert!(matches!(&children[2], Node::StringLiteral { text, .. } if text == "!}"));
    }

    #[test]
    fn parenthesized_variable_is_assignable() {
        let children = parse("var x; (x) = 3;").unwrap();
        assert!(matches!(children[1], Node::Assign { .. }));
        assert!(matches!(parse("var x; x + 1 = 3;"),
                         Err(ParseError::InvalidAssignmentTarget { line: 1 })));
    }

    #[test]
    fn deep_nesting_is_an_error() {
        let shallow = format!("{}1{};", "(".repeat(50), ")".repeat(50));
        assert!(parse(&shallow).is_ok());

        let deep = format!("{}1{};", "(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
        assert!(matches!(parse(&deep),
                         Err(ParseError::NestingTooDeep { limit: MAX_NESTING, line: 1 })));

        let blocks = format!("{}{}", "{".repeat(MAX_NESTING + 1), "}".repeat(MAX_NESTING + 1));
        assert!(matches!(parse(&blocks), Err(ParseError::NestingTooDeep { .. })));

        let negations = format!("{}1;", "-".repeat(MAX_NESTING + 1));
        assert!(matches!(parse(&negations), Err(ParseError::NestingTooDeep { .. })));

        let powers = format!("1{};", " ** 1".repeat(MAX_NESTING + 1));
        assert!(matches!(parse(&powers), Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn block_scope_is_closed_after_an_error() {
        let tokens = tokenize("{ var a = 1; print(b); }");
        let mut symbols = SymbolTable::new();
        let result = Parser::new(&tokens, &mut symbols).parse_program();
        assert!(matches!(result, Err(ParseError::UndeclaredVariable { .. })));
        assert_eq!(symbols.depth(), 1);
    }
}
