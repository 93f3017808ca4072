//! Dutch pattern policy.

use clausal_nlp::{Clause, ClausalResult, Sentence, Token};

use crate::lang::{morph, Lang};
use crate::pattern::{clauses_from_groups, Pattern};
use crate::segmentation::group_by_finite_verb;
use crate::tag_set::{self, TagSet};

/// Dutch clause patterns over trankit-style UD parses with CGN xpos tags.
///
/// Dutch overrides clause segmentation: a verb heads a clause only if it is
/// finite (PV), following the Lassy annotation scheme
/// (<https://www.let.rug.nl/vannoord/Lassy/sa-man_lassy.pdf>), so head-verb
/// groups without a finite verb merge into their finite ancestor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DutchPattern;

impl Pattern for DutchPattern {
    fn lang(&self) -> Lang {
        Lang::Nl
    }

    fn tag_set(&self) -> &'static TagSet {
        &tag_set::NL
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

    /// Past participles in verbal use.
    ///
    /// The CGN tag distinguishes verbal participles (`vd`, `vrij`) from
    /// adjectival ones; when a token carries CGN flags they are required.
    /// Tokens without any xpos material (plain UD input) fall back to
    /// `VerbForm=Part` alone.
    fn is_participle_verb(&self, token: &Token) -> bool {
        if token.upos != "VERB" || !token.feats.has("VerbForm", "Part") {
            return false;
        }
        if token.has_xpos_flags() {
            token.has_xpos_flag("vd") && token.has_xpos_flag("vrij")
        } else {
            true
        }
    }

    fn get_verb_clauses_opts<'a>(
        &self,
        sentence: &'a Sentence,
        copy_conj_subject: bool,
    ) -> ClausalResult<Vec<Clause<'a>>> {
        let groups = group_by_finite_verb(self, sentence, copy_conj_subject)?;
        Ok(clauses_from_groups(sentence, groups))
    }
}
