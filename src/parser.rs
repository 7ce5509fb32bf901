/*!
Recursive‑descent parser for simple subject‑verb‑object sentences.

Grammar (EBNF)
--------------

```text
sentence         → noun_phrase verb_phrase noun_phrase EOF ;
noun_phrase      → adjective_phrase NOUN ;
adjective_phrase → ( ARTICLE | POSSESSIVE ) ADJECTIVE ;
verb_phrase      → ADVERB* VERB ;
```

The right‑recursive `verb_phrase → VERB | ADVERB verb_phrase` is normalised
into the loop above.  The grammar is LL(1): every procedure decides on the
single lookahead token, checks it against its FIRST set before building
anything, and returns either a complete node or the first syntax error it
meets.  There is no recovery; `?` carries the error unchanged up to
[`Parser::parse`].

### Time & Space

Each token is consumed once by `advance()`, so a parse is Θ(n) in the number
of tokens.  Only one token is buffered; the call stack is at most four
procedures deep.

### Logging Policy

| Location                      | Level   | Purpose                                 |
|-------------------------------|---------|-----------------------------------------|
| `Parser::new`, `parse`        | `info`  | Lifecycle milestones.                   |
| FIRST checks, `expect` misses | `debug` | Context before returning the error.     |
| Trace lines                   | `debug` | Mirrored by [`Trace`] when enabled.     |
*/

use crate::ast::{AdjectivePhrase, Determiner, NounPhrase, Sentence, VerbPhrase};
use crate::error::{Result, SentenceError};
use crate::token::{Token, TokenType};
use crate::trace::Trace;

use log::{debug, info};

/// The fixed set of diagnostics.  Each one names the nonterminal at fault.
pub mod messages {
    pub const SENTENCE_START: &str = "sentence did not start with an article or possessive.";

    pub const NOUN_PHRASE_START: &str =
        "noun phrase did not start with an article or possessive.";

    pub const NOUN_PHRASE_NOUN: &str = "noun phrase did not have a noun.";

    /// Unreachable through [`super::Parser::parse`]: the enclosing noun
    /// phrase checks the same FIRST set before descending.
    pub const ADJECTIVE_PHRASE_START: &str =
        "adjective phrase did not start with an article or possessive.";

    pub const ADJECTIVE_PHRASE_ADJECTIVE: &str = "adjective phrase did not have an adjective.";

    /// Also reported when adverbs are not followed by a verb.
    pub const VERB_PHRASE_START: &str = "verb phrase did not start with a verb or an adverb.";

    pub const EXTRA_INPUT: &str = "extra input after complete sentence.";
}

/// FIRST(sentence) = FIRST(noun_phrase) = FIRST(adjective_phrase)
const DETERMINERS: [TokenType; 2] = [TokenType::ARTICLE, TokenType::POSSESSIVE];

/// FIRST(verb_phrase)
const VERB_PHRASE_FIRST: [TokenType; 2] = [TokenType::VERB, TokenType::ADVERB];

/// Parse one sentence from `tokens` with a fresh parser and tracing off.
pub fn parse<'a, T>(tokens: T) -> Result<Sentence>
where
    T: IntoIterator<Item = Token<'a>>,
{
    Parser::new(tokens).parse()
}

/// Single‑token lookahead parser over any token source.
///
/// A source that runs dry is treated as having produced `EOF`, so a plain
/// `Vec<Token>` works as well as a [`crate::scanner::Scanner`].
pub struct Parser<'a, I>
where
    I: Iterator<Item = Token<'a>>,
{
    tokens: I,
    lookahead: Token<'a>,
    trace: Trace,
    outcome: Option<Outcome>,
}

/// Result of the one parse a [`Parser`] performs, replayed on later calls.
#[derive(Debug)]
enum Outcome {
    Parsed(Sentence),
    Failed(String),
}

impl Outcome {
    fn replay(&self) -> Result<Sentence> {
        match self {
            Outcome::Parsed(sentence) => Ok(sentence.clone()),
            Outcome::Failed(message) => Err(SentenceError::syntax(message.as_str())),
        }
    }
}

impl<'a, I> Parser<'a, I>
where
    I: Iterator<Item = Token<'a>>,
{
    /// Construct a new parser.  Nothing is read until [`Parser::parse`].
    pub fn new<T>(tokens: T) -> Self
    where
        T: IntoIterator<Item = Token<'a>, IntoIter = I>,
    {
        info!("Parser created");

        Self {
            tokens: tokens.into_iter(),
            lookahead: Token::eof(),
            trace: Trace::new(false),
            outcome: None,
        }
    }

    /// Turn the diagnostic trace on or off.
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = Trace::new(enabled);
        self
    }

    /// Trace lines recorded so far (empty unless tracing is on).
    pub fn trace(&self) -> &[String] {
        self.trace.lines()
    }

    // ───────────────────────── public API ─────────────────────────

    /// Prime the lookahead, parse one sentence and require that nothing
    /// follows it.
    ///
    /// The token source is read only once.  Later calls return the outcome
    /// of the first one and leave the cursor and trace untouched.
    pub fn parse(&mut self) -> Result<Sentence> {
        if let Some(outcome) = &self.outcome {
            debug!("Parse already ran, replaying {:?}", outcome);

            return outcome.replay();
        }

        let result: Result<Sentence> = self.parse_start();

        self.outcome = Some(match &result {
            Ok(sentence) => Outcome::Parsed(sentence.clone()),
            Err(e) => Outcome::Failed(e.to_string()),
        });

        result
    }

    fn parse_start(&mut self) -> Result<Sentence> {
        info!("Beginning parse phase");

        self.advance();

        let sentence: Sentence = self.sentence()?;

        if !self.lookahead.is_eof() {
            debug!("Trailing token after sentence: {:?}", self.lookahead);

            return Err(SentenceError::syntax(messages::EXTRA_INPUT));
        }

        info!("Parsed sentence with {} adverb(s)", sentence.verb_phrase.adverbs.len());

        Ok(sentence)
    }

    // ──────────────────────── grammar rules ───────────────────────

    fn sentence(&mut self) -> Result<Sentence> {
        let _scope = self.trace.enter("<sentence>");

        self.check_first(&DETERMINERS, messages::SENTENCE_START)?;

        let subject: NounPhrase = self.noun_phrase()?;
        let verb_phrase: VerbPhrase = self.verb_phrase()?;
        let object: NounPhrase = self.noun_phrase()?;

        Ok(Sentence {
            subject,
            verb_phrase,
            object,
        })
    }

    fn noun_phrase(&mut self) -> Result<NounPhrase> {
        let _scope = self.trace.enter("<noun phrase>");

        self.check_first(&DETERMINERS, messages::NOUN_PHRASE_START)?;

        let adjective_phrase: AdjectivePhrase = self.adjective_phrase()?;
        let noun: String = self.expect(TokenType::NOUN, messages::NOUN_PHRASE_NOUN)?;

        Ok(NounPhrase {
            adjective_phrase,
            noun,
        })
    }

    fn adjective_phrase(&mut self) -> Result<AdjectivePhrase> {
        let _scope = self.trace.enter("<adjective phrase>");

        self.check_first(&DETERMINERS, messages::ADJECTIVE_PHRASE_START)?;

        let determiner: Determiner = match self.lookahead.token_type {
            TokenType::ARTICLE => Determiner::Article,
            TokenType::POSSESSIVE => Determiner::Possessive,
            _ => return Err(SentenceError::syntax(messages::ADJECTIVE_PHRASE_START)),
        };

        let determiner_lexeme: String =
            self.expect(determiner.token_type(), messages::ADJECTIVE_PHRASE_START)?;
        let adjective: String =
            self.expect(TokenType::ADJECTIVE, messages::ADJECTIVE_PHRASE_ADJECTIVE)?;

        Ok(AdjectivePhrase {
            determiner,
            determiner_lexeme,
            adjective,
        })
    }

    fn verb_phrase(&mut self) -> Result<VerbPhrase> {
        let _scope = self.trace.enter("<verb phrase>");

        self.check_first(&VERB_PHRASE_FIRST, messages::VERB_PHRASE_START)?;

        let mut adverbs: Vec<String> = Vec::new();

        while self.check(TokenType::ADVERB) {
            adverbs.push(self.expect(TokenType::ADVERB, "expected adverb")?);
        }

        let verb: String = self.expect(TokenType::VERB, messages::VERB_PHRASE_START)?;

        Ok(VerbPhrase { adverbs, verb })
    }

    // ────────────────────── utility helpers ───────────────────────

    /// Pull the next token into the lookahead slot.
    fn advance(&mut self) {
        self.lookahead = self.tokens.next().unwrap_or_else(Token::eof);

        if self.lookahead.is_eof() {
            self.trace.line(format_args!("next: EOF"));
        } else {
            self.trace.line(format_args!(
                "next: {} ({})",
                self.lookahead.token_type, self.lookahead.lexeme
            ));
        }
    }

    #[inline(always)]
    fn check(&self, ttype: TokenType) -> bool {
        self.lookahead.token_type == ttype
    }

    /// Consume the lookahead if it is `expected` and return its lexeme;
    /// otherwise fail with `message` without consuming anything.
    fn expect(&mut self, expected: TokenType, message: &str) -> Result<String> {
        if self.check(expected) {
            let lexeme: String = self.lookahead.lexeme.to_owned();

            self.trace
                .line(format_args!("match {} ({})", expected, lexeme));

            self.advance();

            return Ok(lexeme);
        }

        self.trace.line(format_args!(
            "mismatch: got {}, expected {}",
            self.lookahead.token_type, expected
        ));

        debug!("Expected {:?}, found {:?}", expected, self.lookahead);

        Err(SentenceError::syntax(message))
    }

    /// Fail with `message` unless the lookahead is in `first`.
    fn check_first(&mut self, first: &[TokenType], message: &str) -> Result<()> {
        if first.contains(&self.lookahead.token_type) {
            return Ok(());
        }

        if self.trace.is_enabled() {
            let expected: Vec<&str> = first.iter().map(|t| t.name()).collect();

            self.trace.line(format_args!(
                "mismatch: got {}, expected {}",
                self.lookahead.token_type,
                expected.join(" or ")
            ));
        }

        debug!("FIRST check failed on {:?}", self.lookahead);

        Err(SentenceError::syntax(message))
    }
}
