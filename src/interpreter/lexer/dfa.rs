use once_cell::sync::Lazy;
use regex_automata::{
    Anchored, Input, MatchKind,
    dfa::{Automaton, StartKind, dense},
    nfa::thompson,
    util::{primitives::StateID, syntax},
};

use crate::interpreter::lexer::TokenKind;

/// Token patterns recognised by the automaton, highest priority first.
///
/// When several patterns accept the same lexeme the one listed first wins,
/// which is how `while` becomes a keyword rather than an identifier and `-`
/// becomes a math operator rather than a unary one.
pub const RULES: [(TokenKind, &str); TokenKind::COUNT] = [
    (TokenKind::Whitespace, r"[ \t\n\r]+"),
    (TokenKind::Comment, r"//[^\n]*"),
    (TokenKind::Float, r"[0-9]+\.[0-9]*|\.[0-9]+"),
    (TokenKind::Int, r"[0-9]+"),
    (TokenKind::StringLiteral, r#""[^"\\]*""#),
    (TokenKind::Exponent, r"\*\*"),
    (TokenKind::MathOp, r"[-+*%]"),
    (TokenKind::Unary, r"[-!]"),
    (TokenKind::CompareOp, r"<=|>=|<|>|==|!="),
    (TokenKind::LogicalOp, r"&&|\|\|"),
    (TokenKind::If, "if"),
    (TokenKind::Var, "var"),
    (TokenKind::Else, "else"),
    (TokenKind::While, "while"),
    (TokenKind::Print, "print"),
    (TokenKind::Identifier, "[a-zA-Z_][a-zA-Z0-9_]*"),
    (TokenKind::Semicolon, ";"),
    (TokenKind::Assign, "="),
    (TokenKind::CloseParen, r"\)"),
    (TokenKind::OpenParen, r"\("),
    (TokenKind::EndScope, r"\}"),
    (TokenKind::BeginScope, r"\{"),
];

/// The process-wide token automaton, compiled on first use.
pub static TOKEN_DFA: Lazy<TokenDfa> =
    Lazy::new(|| TokenDfa::build().expect("built-in token patterns must compile"));

/// A dense, anchored transition table over bytes for every token rule.
///
/// The table follows the usual dense-DFA convention of reporting a match one
/// byte late: a state reached after feeding byte `n` is a stop state when the
/// text *before* byte `n` is a complete lexeme. The end-of-input transition
/// plays the role of the synthetic end-of-line symbol and resolves the match
/// for the text consumed so far.
pub struct TokenDfa {
    dfa: dense::DFA<Vec<u32>>,
}

impl TokenDfa {
    /// Compiles [`RULES`] into a dense table.
    ///
    /// # Errors
    /// Returns the builder error if a pattern fails to compile.
    pub fn build() -> Result<Self, dense::BuildError> {
        let patterns: Vec<&str> = RULES.iter().map(|(_, pattern)| *pattern).collect();
        let dfa = dense::Builder::new().configure(dense::DFA::config().match_kind(MatchKind::All)
                                                                    .start_kind(StartKind::Anchored))
                                       .syntax(syntax::Config::new().unicode(false).utf8(false))
                                       .thompson(thompson::Config::new().utf8(false))
                                       .build_many(&patterns)?;
        log::debug!("token automaton compiled: {} patterns, {} bytes",
                    patterns.len(),
                    dfa.memory_usage());
        Ok(Self { dfa })
    }

    /// Returns the start state for a lexeme beginning at byte offset `at`.
    ///
    /// The surrounding source is passed so that the automaton sees the
    /// correct line-start context. Returns `None` if the automaton cannot
    /// start there, which the lexer treats as "no match".
    #[must_use]
    pub fn start(&self, source: &str, at: usize) -> Option<StateID> {
        let input = Input::new(source).range(at..).anchored(Anchored::Yes);
        self.dfa.start_state_forward(&input).ok()
    }

    /// Follows the transition for one input byte.
    #[must_use]
    pub fn next(&self, state: StateID, byte: u8) -> StateID {
        self.dfa.next_state(state, byte)
    }

    /// Follows the synthetic end-of-line transition.
    #[must_use]
    pub fn next_end_of_line(&self, state: StateID) -> StateID {
        self.dfa.next_eoi_state(state)
    }

    /// True once no further input can lead to a match.
    #[must_use]
    pub fn is_dead(&self, state: StateID) -> bool {
        self.dfa.is_dead_state(state) || self.dfa.is_quit_state(state)
    }

    /// The token kind accepted in `state`, if it is a stop state.
    ///
    /// Several rules may accept at once; the highest-priority rule wins.
    #[must_use]
    pub fn stop(&self, state: StateID) -> Option<TokenKind> {
        if !self.dfa.is_match_state(state) {
            return None;
        }
        (0..self.dfa.match_len(state)).map(|i| self.dfa.match_pattern(state, i).as_usize())
                                      .min()
                                      .map(|rule| RULES[rule].0)
    }
}
