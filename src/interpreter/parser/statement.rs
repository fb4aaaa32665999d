use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, classify},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a block `{ ... }`.
    /// - a variable declaration `var name [= expression];`.
    /// - a print statement `print(...);`.
    /// - an `if` or `while` statement.
    /// - an empty statement `;`.
    /// - an expression followed by `;`.
    ///
    /// The leading token decides which construct is parsed.
    ///
    /// # Returns
    /// The parsed node, or `None` for an empty statement.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` if no tokens remain, otherwise whatever the
    /// selected construct reports.
    pub fn parse_statement(&mut self) -> ParseResult<Option<Node>> {
        let Some(kind) = self.peek_kind()
        else {
            return Err(self.unexpected("statement"));
        };

        let statement = match kind {
            TokenKind::BeginScope => self.nested(Self::parse_block)?,
            TokenKind::Var => self.parse_declaration()?,
            TokenKind::Print => self.parse_print()?,
            TokenKind::If => self.nested(Self::parse_if)?,
            TokenKind::While => self.nested(Self::parse_while)?,
            TokenKind::Semicolon => {
                self.next_token();
                return Ok(None);
            },
            _ => self.parse_expression_statement()?,
        };

        Ok(Some(statement))
    }

    /// Parses the body of an `if`, `else` or `while`.
    ///
    /// An empty statement becomes an empty [`Node::Scope`] so the caller
    /// always has a node to hold on to.
    pub(in crate::interpreter::parser) fn parse_body(&mut self) -> ParseResult<Node> {
        let line = self.peek().map_or(self.line, |token| token.line);
        Ok(self.parse_statement()?
               .unwrap_or(Node::Scope { children: Vec::new(),
                                        line }))
    }

    /// Parses a variable declaration.
    ///
    /// Syntax: `var <identifier> [= <expression>] ;`
    ///
    /// The initializer is parsed before the name is declared, so it cannot
    /// refer to the variable being introduced. Without an initializer the
    /// variable is explicitly set to `0`, which resets it on every execution
    /// of the declaration (such as inside a loop body).
    ///
    /// # Returns
    /// A [`Node::Assign`] of the initial value to the new variable.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the name or the terminating `;` is missing.
    /// - `Redeclaration` if the name already exists in the current scope.
    fn parse_declaration(&mut self) -> ParseResult<Node> {
        let line = self.expect(TokenKind::Var)?.line;
        let name = self.expect(TokenKind::Identifier)?;

        let value = match self.next_if(TokenKind::Assign) {
            Some(_) => self.parse_expression()?,
            None => Node::Number { value: 0.0,
                                   line },
        };
        self.expect(TokenKind::Semicolon)?;

        let target = self.symbols.declare(&name.text, name.line)?;

        Ok(Node::Assign { target,
                          value: Box::new(value),
                          line })
    }

    /// Parses a print statement.
    ///
    /// Syntax:
    /// ```text
    ///     print ( <string literal> ) ;
    ///     print ( <expression> ) ;
    /// ```
    /// A string argument may embed `{name}` markers, which are replaced by
    /// the value of the named variable when printed.
    fn parse_print(&mut self) -> ParseResult<Node> {
        let line = self.expect(TokenKind::Print)?.line;
        self.expect(TokenKind::OpenParen)?;

        let children = match self.next_if(TokenKind::StringLiteral) {
            Some(literal) => self.parse_interpolation(literal)?,
            None => vec![self.parse_expression()?],
        };

        self.expect(TokenKind::CloseParen)?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Node::Print { children,
                         line })
    }

    /// Splits a string literal into text fragments and variable references.
    ///
    /// `"a{x}b"` becomes `[StringLiteral("a"), Variable(x), StringLiteral("b")]`.
    /// Whitespace around the name inside the braces is ignored, empty
    /// fragments are dropped, and a `}` outside any marker is plain text.
    ///
    /// # Errors
    /// - `MalformedInterpolation` if a `{` is never closed or encloses
    ///   something other than a single identifier.
    /// - `UndeclaredVariable` if the named variable is not in scope.
    fn parse_interpolation(&self, literal: &Token) -> ParseResult<Vec<Node>> {
        let line = literal.line;
        let mut rest = literal.text
                              .strip_prefix('"')
                              .and_then(|text| text.strip_suffix('"'))
                              .unwrap_or(literal.text.as_str());
        let mut children = Vec::new();

        while let Some(open) = rest.find('{') {
            push_fragment(&mut children, &rest[..open], line);

            let marker = &rest[open + 1..];
            let close =
                marker.find('}')
                      .ok_or_else(|| ParseError::MalformedInterpolation {
                          details: "missing closing '}'".to_string(),
                          line,
                      })?;

            let name = marker[..close].trim();
            if classify(name) != Some(TokenKind::Identifier) {
                return Err(ParseError::MalformedInterpolation {
                    details: format!("'{name}' is not a variable name"),
                    line,
                });
            }

            children.push(Node::Variable { id: self.resolve(name, line)?,
                                           line });
            rest = &marker[close + 1..];
        }

        push_fragment(&mut children, rest, line);
        Ok(children)
    }

    /// Parses an expression used as a statement, terminated by `;`.
    fn parse_expression_statement(&mut self) -> ParseResult<Node> {
        let expr = self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(expr)
    }
}

fn push_fragment(children: &mut Vec<Node>, text: &str, line: usize) {
    if !text.is_empty() {
        children.push(Node::StringLiteral { text: text.to_string(),
                                            line });
    }
}
