use log::debug;
use serde::Serialize;
use std::fmt;

/// The different kinds of tokens a token source can hand to the parser.
///
/// The six word classes are the terminals of the grammar.  `EOF` marks the
/// end of input and `ERROR` is the lexer's signal for text it could not
/// classify; no grammar rule ever expects `ERROR`, so it is never matched.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    /// 'a', 'an', 'the'
    ARTICLE,

    /// 'my', 'her', 'their', …
    POSSESSIVE,

    ADJECTIVE,

    NOUN,

    ADVERB,

    VERB,

    /// End‑of‑input marker
    EOF,

    /// Unclassifiable input (lexer error)
    ERROR,
}

impl TokenType {
    /// Upper‑case name used in trace lines and `tokenize` output.
    pub const fn name(self) -> &'static str {
        match self {
            TokenType::ARTICLE => "ARTICLE",
            TokenType::POSSESSIVE => "POSSESSIVE",
            TokenType::ADJECTIVE => "ADJECTIVE",
            TokenType::NOUN => "NOUN",
            TokenType::ADVERB => "ADVERB",
            TokenType::VERB => "VERB",
            TokenType::EOF => "EOF",
            TokenType::ERROR => "ERROR",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified token: its kind plus the exact text that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// The category of this token.
    pub token_type: TokenType,

    /// The exact substring from the source that produced this token.
    pub lexeme: &'a str,
}

impl<'a> Token<'a> {
    /// Create a new Token with the given type and lexeme.
    pub fn new(token_type: TokenType, lexeme: &'a str) -> Self {
        debug!("Creating new token: type={:?}, lexeme={}", token_type, lexeme);

        Self { token_type, lexeme }
    }

    /// The end‑of‑input marker.
    pub fn eof() -> Self {
        Self {
            token_type: TokenType::EOF,
            lexeme: "",
        }
    }

    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::EOF
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_empty() {
            return write!(f, "{}", self.token_type);
        }

        write!(f, "{} {}", self.token_type, self.lexeme)
    }
}
