use std::fmt;

use crate::interpreter::lexer::dfa::TOKEN_DFA;

/// The compiled token automaton and its rule table.
///
/// The transition table is generated from the token patterns once per
/// process; the scanning loop in this module drives it.
pub mod dfa;

/// The category of a lexical token.
///
/// Every modeled pattern has its own variant. Characters that no pattern
/// accepts are passed through one at a time as [`TokenKind::Char`], which is
/// how `/` and any stray punctuation reach the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Produced once the input is exhausted.
    EndOfInput,
    /// `[ \t\n\r]+`
    Whitespace,
    /// `// ...` up to the end of the line.
    Comment,
    /// Integer literal, such as `42`.
    Int,
    /// Floating literal, such as `3.14`, `2.` or `.5`.
    Float,
    /// Double-quoted string without escapes.
    StringLiteral,
    /// `+`, `-`, `*` or `%`.
    MathOp,
    /// `<`, `<=`, `>`, `>=`, `==` or `!=`.
    CompareOp,
    /// `&&` or `||`.
    LogicalOp,
    /// `**`
    Exponent,
    /// `-` or `!` (a lone `-` lexes as [`TokenKind::MathOp`]).
    Unary,
    /// Variable names, such as `x` or `total_2`.
    Identifier,
    /// `if`
    If,
    /// `var`
    Var,
    /// `else`
    Else,
    /// `while`
    While,
    /// `print`
    Print,
    /// `;`
    Semicolon,
    /// `=`
    Assign,
    /// `)`
    CloseParen,
    /// `(`
    OpenParen,
    /// `}`
    EndScope,
    /// `{`
    BeginScope,
    /// A single character that matched no pattern.
    Char(char),
}

impl TokenKind {
    /// Number of token kinds recognised by the automaton.
    pub const COUNT: usize = 22;

    /// Numeric token code.
    ///
    /// Modeled kinds use the fixed range `234..=255` (`0` for end of input);
    /// fallback characters use their own character code.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::Int.code(), 236);
    /// assert_eq!(TokenKind::Char('/').code(), 47);
    /// ```
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::EndOfInput => 0,
            Self::Whitespace => 234,
            Self::Comment => 235,
            Self::Int => 236,
            Self::Float => 237,
            Self::StringLiteral => 238,
            Self::MathOp => 239,
            Self::CompareOp => 240,
            Self::LogicalOp => 241,
            Self::Exponent => 242,
            Self::Unary => 243,
            Self::Identifier => 244,
            Self::If => 245,
            Self::Var => 246,
            Self::Else => 247,
            Self::While => 248,
            Self::Print => 249,
            Self::Semicolon => 250,
            Self::Assign => 251,
            Self::CloseParen => 252,
            Self::OpenParen => 253,
            Self::EndScope => 254,
            Self::BeginScope => 255,
            Self::Char(c) => c as u32,
        }
    }

    /// Whether tokens of this kind are dropped before parsing.
    #[must_use]
    pub const fn is_skipped(self) -> bool {
        matches!(self, Self::EndOfInput | Self::Whitespace | Self::Comment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EndOfInput => "_EOF_",
            Self::Whitespace => "WHITESPACE",
            Self::Comment => "COMMENT",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::StringLiteral => "STRINGLITERAL",
            Self::MathOp => "MATHOP",
            Self::CompareOp => "COMPAREOP",
            Self::LogicalOp => "LOGICALOP",
            Self::Exponent => "EXPONENT",
            Self::Unary => "UNARY",
            Self::Identifier => "IDENTIFIER",
            Self::If => "IF",
            Self::Var => "VAR",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::Print => "PRINT",
            Self::Semicolon => "SEMICOLON",
            Self::Assign => "ASSIGN",
            Self::CloseParen => "CLOSEPAREN",
            Self::OpenParen => "OPENPAREN",
            Self::EndScope => "ENDSCOPE",
            Self::BeginScope => "BEGINSCOPE",
            Self::Char(c) => return write!(f, "'{c}'"),
        };
        f.write_str(name)
    }
}

/// A lexical token: its kind, the exact text it matched, and the 1-based line
/// on which that text starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token category.
    pub kind: TokenKind,
    /// The matched source text.
    pub text: String,
    /// Line of the first character of `text`.
    pub line: usize,
}

/// Splits source text into tokens by longest match against the token
/// automaton.
///
/// The lexer never fails: a character no pattern accepts is emitted on its
/// own as [`TokenKind::Char`]. Iterating a `Lexer` yields every token,
/// including whitespace and comments, and stops at the end of input.
pub struct Lexer<'src> {
    source: &'src str,
    pos:    usize,
    line:   usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self { source,
               pos: 0,
               line: 1 }
    }

    /// Produces the next raw token.
    ///
    /// Once the input is exhausted every call returns an
    /// [`TokenKind::EndOfInput`] token with empty text.
    pub fn next_token(&mut self) -> Token {
        if self.pos >= self.source.len() {
            return Token { kind: TokenKind::EndOfInput,
                           text: String::new(),
                           line: self.line };
        }

        let start = self.pos;
        let (kind, end) = longest_match(self.source, start).unwrap_or_else(|| {
                                                               single_char(self.source, start)
                                                           });
        let text = &self.source[start..end];
        let line = self.line;

        self.line += text.bytes().filter(|&b| b == b'\n').count();
        self.pos = end;

        log::trace!("token {kind} {text:?} at line {line}");

        Token { kind,
                text: text.to_string(),
                line }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::EndOfInput).then_some(token)
    }
}

/// Tokenizes `source`, dropping whitespace and comments.
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("var x = 2 ** 3; // eight").into_iter()
///                                                                .map(|t| t.kind)
///                                                                .collect();
/// assert_eq!(kinds,
///            [TokenKind::Var,
///             TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Int,
///             TokenKind::Exponent,
///             TokenKind::Int,
///             TokenKind::Semicolon]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source).filter(|token| !token.kind.is_skipped())
                                               .collect();
    log::debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    tokens
}

/// Returns the kind of `text` if the whole string is exactly one token.
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{TokenKind, classify};
///
/// assert_eq!(classify("while"), Some(TokenKind::While));
/// assert_eq!(classify("while_"), Some(TokenKind::Identifier));
/// assert_eq!(classify("1 + 2"), None);
/// ```
#[must_use]
pub fn classify(text: &str) -> Option<TokenKind> {
    match longest_match(text, 0) {
        Some((kind, end)) if end == text.len() => Some(kind),
        _ => None,
    }
}

/// Runs the automaton from byte offset `start` and returns the longest
/// accepted lexeme as `(kind, end)`.
///
/// Whenever the current byte is the last of a line, the synthetic end-of-line
/// symbol is also tried, and the longer of the two matches is kept.
fn longest_match(source: &str, start: usize) -> Option<(TokenKind, usize)> {
    let dfa = &*TOKEN_DFA;
    let bytes = source.as_bytes();
    let mut state = dfa.start(source, start)?;
    let mut best = None;
    let mut pos = start;

    while pos < bytes.len() {
        state = dfa.next(state, bytes[pos]);
        pos += 1;

        // Stop states surface one byte late.
        if let Some(kind) = dfa.stop(state)
           && pos - 1 > start
        {
            best = Some((kind, pos - 1));
        }
        if dfa.is_dead(state) {
            break;
        }
        if (pos == bytes.len() || bytes[pos] == b'\n')
           && let Some(kind) = dfa.stop(dfa.next_end_of_line(state))
        {
            best = Some((kind, pos));
        }
    }

    best
}

/// Peels one character off the input when nothing else matches.
fn single_char(source: &str, start: usize) -> (TokenKind, usize) {
    source[start..].chars()
                   .next()
                   .map_or((TokenKind::EndOfInput, start), |c| {
                       (TokenKind::Char(c), start + c.len_utf8())
                   })
}
