use crate::{
    ast::{Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses a unary expression.
    ///
    /// Prefix operators nest, so `--x` and `!!x` are accepted. A `-` may
    /// arrive as either a `MATHOP` or a `UNARY` token depending on how the
    /// lexer resolved it; both negate here.
    ///
    /// The rule is: `unary := ("-" | "!") unary | primary`
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Node> {
        if let Some((op, line)) = self.next_operator(token_to_unary_operator) {
            let operand = self.nested(Self::parse_unary)?;
            return Ok(Node::Unary { op,
                                    operand: Box::new(operand),
                                    line });
        }
        self.parse_primary()
    }

    /// Parses a primary expression: a variable, a number, or a parenthesized
    /// expression.
    ///
    /// # Errors
    /// - `UndeclaredVariable` if an identifier is not in scope.
    /// - `InvalidNumber` if a numeric literal cannot be represented.
    /// - `UnexpectedToken` for anything else, including string literals
    ///   outside of `print`.
    fn parse_primary(&mut self) -> ParseResult<Node> {
        let Some(token) = self.peek()
        else {
            return Err(self.unexpected("expression"));
        };

        match token.kind {
            TokenKind::Identifier => {
                self.next_token();
                let id = self.resolve(&token.text, token.line)?;
                Ok(Node::Variable { id,
                                    line: token.line })
            },
            TokenKind::Int | TokenKind::Float => {
                self.next_token();
                parse_number(token)
            },
            TokenKind::OpenParen => self.parse_grouping(),
            _ => Err(self.unexpected("expression")),
        }
    }

    /// Parses `"(" expression ")"`.
    ///
    /// The parentheses are kept as a [`Node::Paren`] so that the tree mirrors
    /// the source; evaluation looks straight through them.
    fn parse_grouping(&mut self) -> ParseResult<Node> {
        let line = self.expect(TokenKind::OpenParen)?.line;
        let inner = self.parse_expression()?;
        self.expect(TokenKind::CloseParen)?;
        Ok(Node::Paren { inner: Box::new(inner),
                         line })
    }
}

/// Maps a token to a prefix operator.
#[must_use]
pub fn token_to_unary_operator(token: &Token) -> Option<UnaryOperator> {
    match (token.kind, token.text.as_str()) {
        (TokenKind::MathOp | TokenKind::Unary, "-") => Some(UnaryOperator::Negate),
        (TokenKind::Unary, "!") => Some(UnaryOperator::Not),
        _ => None,
    }
}

/// Converts an `INT` or `FLOAT` token into a [`Node::Number`].
///
/// Integer literals are stored as floating-point values like everything
/// else; literals too long to represent exactly are rounded.
fn parse_number(token: &Token) -> ParseResult<Node> {
    let value = token.text
                     .parse::<f64>()
                     .map_err(|_| ParseError::InvalidNumber { text: token.text.clone(),
                                                              line: token.line, })?;
    Ok(Node::Number { value,
                      line: token.line })
}
