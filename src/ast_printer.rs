use crate::ast::{AdjectivePhrase, NounPhrase, Sentence, VerbPhrase};

/// Renders a [`Sentence`] in parenthesised prefix form, one list per node.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(sentence: &Sentence) -> String {
        format!(
            "(sentence {} {} {})",
            Self::noun_phrase(&sentence.subject),
            Self::verb_phrase(&sentence.verb_phrase),
            Self::noun_phrase(&sentence.object)
        )
    }

    fn noun_phrase(np: &NounPhrase) -> String {
        format!(
            "(noun-phrase {} {})",
            Self::adjective_phrase(&np.adjective_phrase),
            np.noun
        )
    }

    fn adjective_phrase(ap: &AdjectivePhrase) -> String {
        format!(
            "(adjective-phrase ({} {}) {})",
            ap.determiner.name(),
            ap.determiner_lexeme,
            ap.adjective
        )
    }

    fn verb_phrase(vp: &VerbPhrase) -> String {
        // zero adverbs → no (adverbs …) list at all
        if vp.adverbs.is_empty() {
            return format!("(verb-phrase {})", vp.verb);
        }

        format!("(verb-phrase (adverbs {}) {})", vp.adverbs.join(" "), vp.verb)
    }
}
