//! English pattern policy.

use clausal_nlp::Token;

use crate::lang::{morph, Lang};
use crate::pattern::Pattern;
use crate::tag_set::{self, TagSet};

/// English clause patterns over trankit-style UD parses.
///
/// English keeps the provided head-verb segmentation: clause boundaries
/// follow the dependency labels directly, without the finiteness refinement
/// Dutch needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishPattern;

impl Pattern for EnglishPattern {
    fn lang(&self) -> Lang {
        Lang::En
    }

    fn tag_set(&self) -> &'static TagSet {
        &tag_set::EN
    }

    fn is_subject(&self, token: &Token) -> bool {
        morph::is_subject(token, self.tag_set())
    }

    fn is_object(&self, token: &Token) -> bool {
        morph::is_object(token, self.tag_set())
    }

    fn is_verb(&self, token: &Token) -> bool {
        self.tag_set().is_verb_pos(&token.upos)
    }

    fn is_head_verb(&self, token: &Token) -> bool {
        morph::is_head_verb(token, self.tag_set())
    }

    fn is_person_pronoun(&self, token: &Token) -> bool {
        morph::is_person_pronoun(token)
    }

    fn is_past_tense(&self, token: &Token) -> bool {
        morph::is_past_tense(token)
    }

    fn is_present_tense(&self, token: &Token) -> bool {
        morph::is_present_tense(token)
    }

    fn is_perfect_aux(&self, token: &Token) -> bool {
        morph::is_perfect_aux(token, self.tag_set())
    }

    fn is_finite_verb(&self, token: &Token) -> bool {
        morph::is_finite_verb(token, self.tag_set())
    }

    fn is_infinitive_verb(&self, token: &Token) -> bool {
        morph::is_infinitive_verb(token, self.tag_set())
    }

    fn is_participle_verb(&self, token: &Token) -> bool {
        token.upos == "VERB" && token.feats.has("VerbForm", "Part")
    }
}
