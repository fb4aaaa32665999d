use crate::{
    ast::{CompareOperator, LogicalOperator, MathOperator, Node},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses an assignment, the lowest-precedence construct.
    ///
    /// Assignment is right-associative, so `a = b = 3` stores `3` into `b`
    /// and then into `a`.
    ///
    /// The rule is: `assignment := logical_or ("=" assignment)?`
    ///
    /// # Errors
    /// `InvalidAssignmentTarget` if the left-hand side is not a variable
    /// (parentheses around the variable are allowed).
    pub(in crate::interpreter::parser) fn parse_assignment(&mut self) -> ParseResult<Node> {
        let left = self.parse_logical_or()?;

        let Some(assign) = self.next_if(TokenKind::Assign)
        else {
            return Ok(left);
        };

        let value = self.nested(Self::parse_assignment)?;
        let target =
            left.as_variable()
                .ok_or(ParseError::InvalidAssignmentTarget { line: assign.line })?;

        Ok(Node::Assign { target,
                          value: Box::new(value),
                          line: left.line() })
    }

    /// Parses `||` chains, left-associative.
    ///
    /// The rule is: `logical_or := logical_and ("||" logical_and)*`
    fn parse_logical_or(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_logical_and()?;
        while let Some((op, line)) =
            self.next_operator(|token| token_to_logical_operator(token).filter(|op| *op == LogicalOperator::Or))
        {
            let right = self.parse_logical_and()?;
            left = Node::Logical { op,
                                   left: Box::new(left),
                                   right: Box::new(right),
                                   line };
        }
        Ok(left)
    }

    /// Parses `&&` chains, left-associative.
    ///
    /// The rule is: `logical_and := equality ("&&" equality)*`
    fn parse_logical_and(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_equality()?;
        while let Some((op, line)) =
            self.next_operator(|token| token_to_logical_operator(token).filter(|op| *op == LogicalOperator::And))
        {
            let right = self.parse_equality()?;
            left = Node::Logical { op,
                                   left: Box::new(left),
                                   right: Box::new(right),
                                   line };
        }
        Ok(left)
    }

    /// Parses `==` and `!=`.
    ///
    /// Equality is non-associative: `a == b == c` is rejected instead of
    /// being read as `(a == b) == c`.
    ///
    /// The rule is: `equality := relational (("==" | "!=") relational)?`
    ///
    /// # Errors
    /// `ChainedEquality` if a second equality operator follows.
    fn parse_equality(&mut self) -> ParseResult<Node> {
        let left = self.parse_relational()?;
        let Some((op, line)) = self.next_operator(equality_operator)
        else {
            return Ok(left);
        };

        let right = self.parse_relational()?;
        if let Some(next) = self.peek()
           && equality_operator(next).is_some()
        {
            return Err(ParseError::ChainedEquality { line: next.line });
        }

        Ok(Node::Compare { op,
                           left: Box::new(left),
                           right: Box::new(right),
                           line })
    }

    /// Parses `<`, `<=`, `>` and `>=`.
    ///
    /// Like equality, ordering comparisons do not chain.
    ///
    /// The rule is: `relational := additive (("<" | "<=" | ">" | ">=")
    /// additive)?`
    ///
    /// # Errors
    /// `ChainedComparison` if a second ordering operator follows.
    fn parse_relational(&mut self) -> ParseResult<Node> {
        let left = self.parse_additive()?;
        let Some((op, line)) = self.next_operator(relational_operator)
        else {
            return Ok(left);
        };

        let right = self.parse_additive()?;
        if let Some(next) = self.peek()
           && relational_operator(next).is_some()
        {
            return Err(ParseError::ChainedComparison { line: next.line });
        }

        Ok(Node::Compare { op,
                           left: Box::new(left),
                           right: Box::new(right),
                           line })
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    fn parse_additive(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_multiplicative()?;
        while let Some((op, line)) = self.next_operator(|token| {
                                             token_to_math_operator(token).filter(|op| {
                                                 matches!(op, MathOperator::Add | MathOperator::Sub)
                                             })
                                         })
        {
            let right = self.parse_multiplicative()?;
            left = Node::Math { op,
                                left: Box::new(left),
                                right: Box::new(right),
                                line };
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators: `*`, `/` and `%`.
    ///
    /// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
    fn parse_multiplicative(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_exponent()?;
        while let Some((op, line)) = self.next_operator(|token| {
                                             token_to_math_operator(token).filter(|op| {
                                                 matches!(op,
                                                          MathOperator::Mul
                                                          | MathOperator::Div
                                                          | MathOperator::Mod)
                                             })
                                         })
        {
            let right = self.parse_exponent()?;
            left = Node::Math { op,
                                left: Box::new(left),
                                right: Box::new(right),
                                line };
        }
        Ok(left)
    }

    /// Parses exponentiation expressions.
    ///
    /// `**` is right-associative, so `2 ** 3 ** 2` is `2 ** 9`. Its operands
    /// are unary expressions, which makes `-2 ** 2` equal to `4`.
    ///
    /// The rule is: `exponent := unary ("**" exponent)?`
    fn parse_exponent(&mut self) -> ParseResult<Node> {
        let left = self.parse_unary()?;
        let Some((op, line)) = self.next_operator(|token| {
                                       token_to_math_operator(token).filter(|op| *op == MathOperator::Pow)
                                   })
        else {
            return Ok(left);
        };

        let right = self.nested(Self::parse_exponent)?;
        Ok(Node::Math { op,
                        left: Box::new(left),
                        right: Box::new(right),
                        line })
    }
}

/// Maps a token to an arithmetic operator.
///
/// `/` has no token pattern of its own and arrives as a single-character
/// token.
///
/// # Returns
/// `Some(MathOperator)` if the token is an arithmetic operator, else `None`.
#[must_use]
pub fn token_to_math_operator(token: &Token) -> Option<MathOperator> {
    match (token.kind, token.text.as_str()) {
        (TokenKind::MathOp, "+") => Some(MathOperator::Add),
        (TokenKind::MathOp, "-") => Some(MathOperator::Sub),
        (TokenKind::MathOp, "*") => Some(MathOperator::Mul),
        (TokenKind::MathOp, "%") => Some(MathOperator::Mod),
        (TokenKind::Char('/'), _) => Some(MathOperator::Div),
        (TokenKind::Exponent, _) => Some(MathOperator::Pow),
        _ => None,
    }
}

/// Maps a `COMPAREOP` token to its operator.
#[must_use]
pub fn token_to_compare_operator(token: &Token) -> Option<CompareOperator> {
    if token.kind == TokenKind::CompareOp {
        CompareOperator::from_symbol(&token.text)
    } else {
        None
    }
}

/// Maps a `LOGICALOP` token to its operator.
#[must_use]
pub fn token_to_logical_operator(token: &Token) -> Option<LogicalOperator> {
    match (token.kind, token.text.as_str()) {
        (TokenKind::LogicalOp, "&&") => Some(LogicalOperator::And),
        (TokenKind::LogicalOp, "||") => Some(LogicalOperator::Or),
        _ => None,
    }
}

fn equality_operator(token: &Token) -> Option<CompareOperator> {
    token_to_compare_operator(token).filter(|op| op.is_equality())
}

fn relational_operator(token: &Token) -> Option<CompareOperator> {
    token_to_compare_operator(token).filter(|op| !op.is_equality())
}
