//! Module `scanner` implements a one‑pass word classifier that serves as the
//! parser's token source.
//!
//! It transforms a `&str` into a sequence of `Token<'a>`s, skipping whitespace
//! and emitting exactly one `EOF` token at the end.  Designed as a
//! `FusedIterator`, it can be handed straight to [`crate::parser::Parser::new`].
//!
//! # Recognition
//!
//! - Words are maximal runs of ASCII letters, optionally with embedded
//!   apostrophes (`dog's` is one word).  They are classified case‑insensitively
//!   through the compile‑time `LEXICON` map.
//! - Words missing from the lexicon, and any other non‑whitespace character,
//!   become a single `ERROR` token so the parser can report them without
//!   matching them.
//! - Lexemes are zero‑copy slices of the original buffer.
//!
//! # Example
//!
//! ```rust
//! use sentence_parser::scanner::Scanner;
//!
//! for token in Scanner::new("the quick fox jumps the lazy dog") {
//!     println!("{}", token);
//! }
//! ```

use crate::error::Result;
use crate::token::{Token, TokenType};
use log::{debug, info};
use phf::phf_map;
use std::io::Read;
use std::iter::FusedIterator;

// ─────────────────────────────────────────────────────────────────────────────
// Static lexicon (compile‑time perfect hash), keys are lower‑case
// ─────────────────────────────────────────────────────────────────────────────

static LEXICON: phf::Map<&'static str, TokenType> = phf_map! {
    // articles
    "a"   => TokenType::ARTICLE,
    "an"  => TokenType::ARTICLE,
    "the" => TokenType::ARTICLE,

    // possessives
    "my"    => TokenType::POSSESSIVE,
    "your"  => TokenType::POSSESSIVE,
    "his"   => TokenType::POSSESSIVE,
    "her"   => TokenType::POSSESSIVE,
    "its"   => TokenType::POSSESSIVE,
    "our"   => TokenType::POSSESSIVE,
    "their" => TokenType::POSSESSIVE,

    // adjectives
    "quick"  => TokenType::ADJECTIVE,
    "lazy"   => TokenType::ADJECTIVE,
    "old"    => TokenType::ADJECTIVE,
    "new"    => TokenType::ADJECTIVE,
    "big"    => TokenType::ADJECTIVE,
    "small"  => TokenType::ADJECTIVE,
    "red"    => TokenType::ADJECTIVE,
    "brown"  => TokenType::ADJECTIVE,
    "happy"  => TokenType::ADJECTIVE,
    "sad"    => TokenType::ADJECTIVE,
    "tall"   => TokenType::ADJECTIVE,
    "bright" => TokenType::ADJECTIVE,

    // nouns
    "fox"     => TokenType::NOUN,
    "dog"     => TokenType::NOUN,
    "cat"     => TokenType::NOUN,
    "car"     => TokenType::NOUN,
    "house"   => TokenType::NOUN,
    "tree"    => TokenType::NOUN,
    "ball"    => TokenType::NOUN,
    "book"    => TokenType::NOUN,
    "farmer"  => TokenType::NOUN,
    "student" => TokenType::NOUN,
    "friend"  => TokenType::NOUN,
    "road"    => TokenType::NOUN,

    // adverbs
    "quickly"  => TokenType::ADVERB,
    "slowly"   => TokenType::ADVERB,
    "silently" => TokenType::ADVERB,
    "loudly"   => TokenType::ADVERB,
    "happily"  => TokenType::ADVERB,
    "suddenly" => TokenType::ADVERB,
    "carefully" => TokenType::ADVERB,
    "never"    => TokenType::ADVERB,
    "always"   => TokenType::ADVERB,

    // verbs
    "jumps"   => TokenType::VERB,
    "stops"   => TokenType::VERB,
    "chases"  => TokenType::VERB,
    "sees"    => TokenType::VERB,
    "reads"   => TokenType::VERB,
    "drives"  => TokenType::VERB,
    "likes"   => TokenType::VERB,
    "finds"   => TokenType::VERB,
    "throws"  => TokenType::VERB,
    "follows" => TokenType::VERB,
};

/// Look a word up in the lexicon, ignoring ASCII case.
pub fn classify(word: &str) -> TokenType {
    let lower: String = word.to_ascii_lowercase();

    LEXICON
        .get(lower.as_str())
        .copied()
        .unwrap_or(TokenType::ERROR)
}

/// Drain `reader` into a string the scanner can borrow from.  Read failures
/// surface as `SentenceError::Io`, non‑UTF‑8 input as `SentenceError::Utf8`.
pub fn read_source<R: Read>(mut reader: R) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();

    let bytes: usize = reader.read_to_end(&mut buf)?;

    info!("Read {} bytes of source", bytes);

    Ok(String::from_utf8(buf)?)
}

/// A single pass **scanner** that converts source text into a sequence of
/// [`Token`]s.  The lifetime `'a` ties every emitted token's `lexeme` slice
/// back to the original source buffer.
pub struct Scanner<'a> {
    src: &'a str,  // entire input
    start: usize,  // index of the *first* byte of the current lexeme
    curr: usize,   // index *one past* the last byte examined
    done: bool,    // EOF already emitted
}

impl<'a> Scanner<'a> {
    /// Create a new scanner over `src`.
    #[inline]
    pub fn new(src: &'a str) -> Self {
        info!("Scanner created over {} bytes", src.len());

        Self {
            src,
            start: 0,
            curr: 0,
            done: false,
        }
    }

    // ───────────────────────────── primitive helpers ────────────────────────

    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.curr >= self.src.len()
    }

    /// Peek at the current byte without consuming it.  Returns `0` past EOF.
    #[inline(always)]
    fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.src.as_bytes()[self.curr]
        }
    }

    /// Peek one byte beyond [`peek`].  Safe at EOF.
    #[inline(always)]
    fn peek_next(&self) -> u8 {
        if self.curr + 1 >= self.src.len() {
            0
        } else {
            self.src.as_bytes()[self.curr + 1]
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), b' ' | b'\t' | b'\r' | b'\n') {
            self.curr += 1;
        }
    }

    // ───────────────────────────── core lexing ─────────────────────────────

    /// Scan one word starting at `self.curr`.  Apostrophes are only part of
    /// the word when a letter follows them.
    fn scan_word(&mut self) -> TokenType {
        while self.peek().is_ascii_alphabetic()
            || (self.peek() == b'\'' && self.peek_next().is_ascii_alphabetic())
        {
            self.curr += 1;
        }

        classify(&self.src[self.start..self.curr])
    }

    /// Consume one unexpected character, including any UTF‑8 continuation
    /// bytes so the lexeme stays on a char boundary.
    fn scan_unexpected(&mut self) -> TokenType {
        self.curr += 1;

        while !self.is_at_end() && (self.peek() & 0b1100_0000) == 0b1000_0000 {
            self.curr += 1;
        }

        TokenType::ERROR
    }
}

// ───────────────────────── Iterator implementation ─────────────────────────

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.skip_whitespace();

        // EOF guard – emit exactly one EOF then terminate.
        if self.is_at_end() {
            self.done = true;
            return Some(Token::eof());
        }

        self.start = self.curr;

        let tt: TokenType = if self.peek().is_ascii_alphabetic() {
            self.scan_word()
        } else {
            self.scan_unexpected()
        };

        let lex: &'a str = &self.src[self.start..self.curr];

        debug!("Scanned token ({:?}) at byte {}", tt, self.start);

        Some(Token::new(tt, lex))
    }
}

impl<'a> FusedIterator for Scanner<'a> {}
