//! Syntax tree produced by [`crate::parser::Parser`].
//!
//! One plain record per nonterminal.  Each node owns its children and its
//! lexemes, so a tree outlives the token buffer it was parsed from.

use serde::Serialize;

use crate::token::TokenType;

/// Which determiner opened an adjective phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Determiner {
    Article,
    Possessive,
}

impl Determiner {
    /// Token kind that carries this determiner.
    pub const fn token_type(self) -> TokenType {
        match self {
            Determiner::Article => TokenType::ARTICLE,
            Determiner::Possessive => TokenType::POSSESSIVE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Determiner::Article => "article",
            Determiner::Possessive => "possessive",
        }
    }
}

/// `(ARTICLE | POSSESSIVE) ADJECTIVE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjectivePhrase {
    pub determiner: Determiner,
    pub determiner_lexeme: String,
    pub adjective: String,
}

/// `<adjective phrase> NOUN`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NounPhrase {
    pub adjective_phrase: AdjectivePhrase,
    pub noun: String,
}

/// `ADVERB* VERB`.  Adverbs keep their source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbPhrase {
    pub adverbs: Vec<String>,
    pub verb: String,
}

/// `<noun phrase> <verb phrase> <noun phrase>`, the root of every tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub subject: NounPhrase,
    pub verb_phrase: VerbPhrase,
    pub object: NounPhrase,
}

impl NounPhrase {
    fn push_lexemes<'s>(&'s self, out: &mut Vec<&'s str>) {
        out.push(&self.adjective_phrase.determiner_lexeme);
        out.push(&self.adjective_phrase.adjective);
        out.push(&self.noun);
    }
}

impl Sentence {
    /// Every lexeme in traversal order, which is also source order.
    pub fn lexemes(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(7 + self.verb_phrase.adverbs.len());

        self.subject.push_lexemes(&mut out);
        out.extend(self.verb_phrase.adverbs.iter().map(String::as_str));
        out.push(&self.verb_phrase.verb);
        self.object.push_lexemes(&mut out);

        out
    }
}
