//! Per-language pattern policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use clausal_nlp::ClausalError;

mod en;
mod nl;

pub use en::EnglishPattern;
pub use nl::DutchPattern;

/// Supported language codes.
///
/// The legacy corpus also carried a German tag set, but never a German
/// pattern implementation; `de` is therefore rejected rather than silently
/// mapped onto another language's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Nl,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Nl => "nl",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = ClausalError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "en" => Ok(Lang::En),
            "nl" => Ok(Lang::Nl),
            other => Err(ClausalError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Shared Universal Dependencies morphology tests.
///
/// The language policies forward to these for the predicates whose logic is
/// identical across UD treebanks; what differs per language lives in the
/// tag sets and the policy overrides.
pub(crate) mod morph {
    use clausal_nlp::Token;

    use crate::tag_set::TagSet;

    pub fn is_past_tense(token: &Token) -> bool {
        token.feats.has("Tense", "Past")
    }

    pub fn is_present_tense(token: &Token) -> bool {
        token.feats.has("Tense", "Pres")
    }

    pub fn is_finite_verb(token: &Token, tags: &TagSet) -> bool {
        tags.is_verb_pos(&token.upos) && token.feats.has("VerbForm", "Fin")
    }

    pub fn is_infinitive_verb(token: &Token, tags: &TagSet) -> bool {
        tags.is_verb_pos(&token.upos) && token.feats.has("VerbForm", "Inf")
    }

    pub fn is_person_pronoun(token: &Token) -> bool {
        token.upos == "PRON" && token.feats.has("PronType", "Prs")
    }

    pub fn is_perfect_aux(token: &Token, tags: &TagSet) -> bool {
        token.upos == "AUX" && tags.is_perfect_aux_lemma(&token.lemma)
    }

    pub fn is_subject(token: &Token, tags: &TagSet) -> bool {
        token
            .deprel
            .as_deref()
            .map(|rel| tags.is_subject_deprel(rel))
            .unwrap_or(false)
    }

    pub fn is_object(token: &Token, tags: &TagSet) -> bool {
        token
            .deprel
            .as_deref()
            .map(|rel| tags.is_object_deprel(rel))
            .unwrap_or(false)
    }

    pub fn is_head_verb(token: &Token, tags: &TagSet) -> bool {
        if !tags.is_verb_pos(&token.upos) {
            return false;
        }
        match token.deprel.as_deref() {
            Some(rel) => !tags.is_non_head_verb_deprel(rel),
            // A verb without a relation cannot anchor a clause.
            None => false,
        }
    }
}
