use crate::{
    ast::Node,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses a block delimited by `{` and `}`.
    ///
    /// A block introduces a new scope: variables declared inside it are
    /// invisible once the block ends, and may shadow outer variables of the
    /// same name. The scope is closed again even when parsing the body fails.
    ///
    /// # Returns
    /// A [`Node::Scope`] holding the block's statements.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the closing `}` is missing.
    /// - Propagates any errors from the contained statements.
    pub fn parse_block(&mut self) -> ParseResult<Node> {
        let line = self.expect(TokenKind::BeginScope)?.line;

        self.symbols.push_scope();
        let children = self.parse_block_statements();
        self.symbols.pop_scope();

        Ok(Node::Scope { children: children?,
                         line })
    }

    fn parse_block_statements(&mut self) -> ParseResult<Vec<Node>> {
        let mut children = Vec::new();
        loop {
            match self.peek_kind() {
                Some(TokenKind::EndScope) => {
                    self.next_token();
                    return Ok(children);
                },
                Some(_) => {
                    if let Some(statement) = self.parse_statement()? {
                        children.push(statement);
                    }
                },
                None => return Err(self.unexpected(&TokenKind::EndScope.to_string())),
            }
        }
    }
}
