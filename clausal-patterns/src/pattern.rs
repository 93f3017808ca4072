//! The pattern policy interface and language registry.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use clausal_nlp::{Clause, ClausalError, ClausalResult, Sentence, Token, TokenId};

use crate::grouping;
use crate::lang::{DutchPattern, EnglishPattern, Lang};
use crate::tag_set::TagSet;

/// Language-parameterized predicate set consulted at every segmentation and
/// classification stage.
///
/// Every token predicate must be spelled out by each implementation — there
/// are deliberately no always-false defaults, so missing language support
/// shows up as a compile error instead of silently empty results. The
/// clause-level entry points have provided implementations (plain head-verb
/// grouping) that languages may override; Dutch replaces
/// [`get_verb_clauses`](Pattern::get_verb_clauses) with finiteness-based
/// segmentation.
///
/// Policies are stateless and shared as `&'static dyn Pattern` across
/// threads.
pub trait Pattern: Send + Sync + std::fmt::Debug {
    fn lang(&self) -> Lang;

    fn tag_set(&self) -> &'static TagSet;

    fn is_subject(&self, token: &Token) -> bool;

    fn is_object(&self, token: &Token) -> bool;

    /// True for verbal tokens (VERB or AUX in every supported tag set).
    fn is_verb(&self, token: &Token) -> bool;

    /// True for verbs that may anchor a clause group: verbal, with a
    /// dependency relation outside the language's exclusion set. A missing
    /// deprel never qualifies.
    fn is_head_verb(&self, token: &Token) -> bool;

    fn is_person_pronoun(&self, token: &Token) -> bool;

    fn is_past_tense(&self, token: &Token) -> bool;

    fn is_present_tense(&self, token: &Token) -> bool;

    /// True for auxiliaries that form perfect-aspect constructions
    /// (e.g. "hebben"/"zijn" in Dutch).
    fn is_perfect_aux(&self, token: &Token) -> bool;

    fn is_finite_verb(&self, token: &Token) -> bool;

    fn is_infinitive_verb(&self, token: &Token) -> bool;

    fn is_participle_verb(&self, token: &Token) -> bool;

    /// All clausal units in the sentence that contain a head verb, sorted
    /// by ascending anchor id.
    fn get_verb_clauses<'a>(&self, sentence: &'a Sentence) -> ClausalResult<Vec<Clause<'a>>> {
        self.get_verb_clauses_opts(sentence, false)
    }

    /// Like [`get_verb_clauses`](Pattern::get_verb_clauses), with explicit
    /// control over coordination subject copying. Copied subjects appear in
    /// both the source and the conjunct clause.
    fn get_verb_clauses_opts<'a>(
        &self,
        sentence: &'a Sentence,
        copy_conj_subject: bool,
    ) -> ClausalResult<Vec<Clause<'a>>> {
        let groups = grouping::group_by_head_verb(self, sentence, copy_conj_subject)?;
        Ok(clauses_from_groups(sentence, groups))
    }

    /// All pronoun tokens of the sentence.
    fn get_pronouns<'a>(&self, sentence: &'a Sentence) -> Vec<&'a Token> {
        sentence.tokens().iter().filter(|t| t.upos == "PRON").collect()
    }

    /// Personal pronouns only.
    fn get_person_pronouns<'a>(&self, sentence: &'a Sentence) -> Vec<&'a Token> {
        self.get_pronouns(sentence)
            .into_iter()
            .filter(|t| self.is_person_pronoun(t))
            .collect()
    }

    /// All verbs that belong to some verb clause, in clause order.
    ///
    /// Verbs outside any clause (e.g. a copula governed by a non-verbal
    /// root) are not returned.
    fn get_verbs<'a>(&self, sentence: &'a Sentence) -> ClausalResult<Vec<&'a Token>> {
        let mut verbs = Vec::new();
        for clause in self.get_verb_clauses(sentence)? {
            verbs.extend(clause.tokens().iter().copied().filter(|t| self.is_verb(t)));
        }
        Ok(verbs)
    }

    /// The verbs of each clause, skipping clauses without verbs.
    fn get_verb_clusters<'a>(&self, sentence: &'a Sentence) -> ClausalResult<Vec<Vec<&'a Token>>> {
        let mut clusters = Vec::new();
        for clause in self.get_verb_clauses(sentence)? {
            let verbs: Vec<&Token> = clause
                .tokens()
                .iter()
                .copied()
                .filter(|t| self.is_verb(t))
                .collect();
            if !verbs.is_empty() {
                clusters.push(verbs);
            }
        }
        Ok(clusters)
    }

    /// Subject, object and verb tokens per clause.
    fn get_clause_roles<'a>(&self, sentence: &'a Sentence) -> ClausalResult<Vec<ClauseRoles<'a>>> {
        let mut roles = Vec::new();
        for clause in self.get_verb_clauses(sentence)? {
            let tokens = clause.tokens();
            let cluster = ClauseRoles {
                anchor: clause.anchor(),
                subjects: tokens.iter().copied().filter(|t| self.is_subject(t)).collect(),
                objects: tokens.iter().copied().filter(|t| self.is_object(t)).collect(),
                verbs: tokens.iter().copied().filter(|t| self.is_verb(t)).collect(),
            };
            if !cluster.verbs.is_empty() {
                roles.push(cluster);
            }
        }
        Ok(roles)
    }
}

/// Subject/object/verb tokens of one clause.
#[derive(Debug, Clone, PartialEq)]
pub struct ClauseRoles<'a> {
    pub anchor: TokenId,
    pub subjects: Vec<&'a Token>,
    pub objects: Vec<&'a Token>,
    pub verbs: Vec<&'a Token>,
}

/// Freeze an anchor → member-ids partition into clauses.
pub(crate) fn clauses_from_groups<'a>(
    sentence: &'a Sentence,
    groups: BTreeMap<TokenId, Vec<TokenId>>,
) -> Vec<Clause<'a>> {
    groups
        .into_iter()
        .map(|(anchor, ids)| {
            let tokens = ids.iter().filter_map(|&id| sentence.token(id)).collect();
            Clause::new(anchor, tokens)
        })
        .collect()
}

static ENGLISH: EnglishPattern = EnglishPattern;
static DUTCH: DutchPattern = DutchPattern;

static REGISTRY: Lazy<BTreeMap<&'static str, &'static dyn Pattern>> = Lazy::new(|| {
    let mut registry: BTreeMap<&'static str, &'static dyn Pattern> = BTreeMap::new();
    registry.insert(Lang::En.code(), &ENGLISH as &dyn Pattern);
    registry.insert(Lang::Nl.code(), &DUTCH as &dyn Pattern);
    registry
});

/// Resolve the pattern policy for a language code.
///
/// Fails fast on unsupported codes; downstream layers must not silently
/// fall back to some default language.
pub fn pattern_for(code: &str) -> ClausalResult<&'static dyn Pattern> {
    REGISTRY
        .get(code)
        .copied()
        .ok_or_else(|| ClausalError::UnknownLanguage(code.to_string()))
}
