use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING, ParseResult, Parser},
        symbol_table::VarId,
    },
};

impl<'t> Parser<'t, '_> {
    /// Returns the next token without consuming it.
    pub(in crate::interpreter::parser) fn peek(&mut self) -> Option<&'t Token> {
        self.tokens.peek().copied()
    }

    /// Returns the kind of the next token without consuming it.
    pub(in crate::interpreter::parser) fn peek_kind(&mut self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// Consumes and returns the next token.
    pub(in crate::interpreter::parser) fn next_token(&mut self) -> Option<&'t Token> {
        let token = self.tokens.next()?;
        self.line = token.line;
        Some(token)
    }

    /// Consumes the next token if it has the given kind.
    pub(in crate::interpreter::parser) fn next_if(&mut self, kind: TokenKind) -> Option<&'t Token> {
        if self.peek_kind() == Some(kind) {
            self.next_token()
        } else {
            None
        }
    }

    /// Consumes the next token if `select` maps it to an operator.
    ///
    /// # Returns
    /// The operator and the line of its token, or `None` without consuming
    /// anything.
    pub(in crate::interpreter::parser) fn next_operator<T>(&mut self,
                                                           select: impl Fn(&Token) -> Option<T>)
                                                           -> Option<(T, usize)> {
        let token = self.peek()?;
        let op = select(token)?;
        self.next_token();
        Some((op, token.line))
    }

    /// Consumes a token of the given kind or fails.
    ///
    /// # Errors
    /// `UnexpectedToken` naming the expected and the found kind, or
    /// `UnexpectedEndOfInput` if no tokens remain.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 kind: TokenKind)
                                                 -> ParseResult<&'t Token> {
        match self.next_if(kind) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(&kind.to_string())),
        }
    }

    /// Builds the error for finding something other than `expected` next.
    pub(in crate::interpreter::parser) fn unexpected(&mut self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                         found:    token.kind.to_string(),
                                                         line:     token.line, },
            None => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                       line:     self.line, },
        }
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// `NestingTooDeep` once [`MAX_NESTING`] levels are open, before `parse`
    /// is called.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= MAX_NESTING {
            let line = self.peek().map_or(self.line, |token| token.line);
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                    line });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Resolves a variable name visible from the current scope.
    ///
    /// # Errors
    /// `UndeclaredVariable` if no enclosing scope declares `name`.
    pub(in crate::interpreter::parser) fn resolve(&self,
                                                  name: &str,
                                                  line: usize)
                                                  -> ParseResult<VarId> {
        self.symbols
            .resolve(name)
            .ok_or_else(|| ParseError::UndeclaredVariable { name: name.to_string(),
                                                            line })
    }
}
