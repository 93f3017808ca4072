//! Clause-level tense and aspect predicates.
//!
//! All functions are pure over one [`Clause`]; every token-level decision is
//! delegated to the language's [`Pattern`] policy. Tokens without the
//! expected morphology simply fail the predicates (the policies treat
//! missing features as false), so a malformed token degrades the label
//! rather than aborting the clause.

use clausal_nlp::{Clause, Token};
use clausal_patterns::Pattern;

use crate::labels::{AspectLabel, TenseLabel};

/// The verb tokens of a clause, in token order.
pub fn clause_verbs<'a, P: Pattern + ?Sized>(
    pattern: &P,
    clause: &Clause<'a>,
) -> Vec<&'a Token> {
    clause
        .tokens()
        .iter()
        .copied()
        .filter(|t| pattern.is_verb(t))
        .collect()
}

/// Perfect aspect: a perfect auxiliary plus either a participle or a
/// stacked pair of infinitives.
///
/// The infinitive pair covers perfect constructions where the participle
/// surfaces as an infinitive, as in Dutch "heeft kunnen maken".
pub fn is_perfect_tense_clause<P: Pattern + ?Sized>(pattern: &P, clause: &Clause<'_>) -> bool {
    let verbs = clause_verbs(pattern, clause);
    if !verbs.iter().any(|t| pattern.is_perfect_aux(t)) {
        return false;
    }
    let participle = verbs.iter().any(|t| pattern.is_participle_verb(t));
    let infinitives = verbs.iter().filter(|t| pattern.is_infinitive_verb(t)).count();
    participle || infinitives >= 2
}

/// Simple aspect: a finite verb without a perfect construction.
pub fn is_simple_tense_clause<P: Pattern + ?Sized>(pattern: &P, clause: &Clause<'_>) -> bool {
    let verbs = clause_verbs(pattern, clause);
    !verbs.is_empty()
        && !is_perfect_tense_clause(pattern, clause)
        && verbs.iter().any(|t| pattern.is_finite_verb(t))
}

pub fn is_present_tense_clause<P: Pattern + ?Sized>(pattern: &P, clause: &Clause<'_>) -> bool {
    clause_verbs(pattern, clause)
        .iter()
        .any(|t| pattern.is_present_tense(t))
}

pub fn is_past_tense_clause<P: Pattern + ?Sized>(pattern: &P, clause: &Clause<'_>) -> bool {
    clause_verbs(pattern, clause)
        .iter()
        .any(|t| pattern.is_past_tense(t))
}

/// Present perfect: perfect aspect with the perfect auxiliary itself in the
/// present tense ("heeft gestudeerd"). A past auxiliary ("had gewacht") is
/// past perfect, never present perfect.
pub fn is_present_perfect_clause<P: Pattern + ?Sized>(pattern: &P, clause: &Clause<'_>) -> bool {
    is_perfect_tense_clause(pattern, clause)
        && clause_verbs(pattern, clause)
            .iter()
            .any(|t| pattern.is_perfect_aux(t) && pattern.is_present_tense(t))
}

pub fn is_past_perfect_clause<P: Pattern + ?Sized>(pattern: &P, clause: &Clause<'_>) -> bool {
    is_perfect_tense_clause(pattern, clause)
        && clause_verbs(pattern, clause)
            .iter()
            .any(|t| pattern.is_perfect_aux(t) && pattern.is_past_tense(t))
}

pub fn is_present_simple_clause<P: Pattern + ?Sized>(pattern: &P, clause: &Clause<'_>) -> bool {
    is_simple_tense_clause(pattern, clause) && is_present_tense_clause(pattern, clause)
}

pub fn is_past_simple_clause<P: Pattern + ?Sized>(pattern: &P, clause: &Clause<'_>) -> bool {
    is_simple_tense_clause(pattern, clause) && is_past_tense_clause(pattern, clause)
}

/// Aggregate labels for one clause. Both-flags win over the single flags;
/// a clause without verbs (or without tensed verbs) is `no_tense`/`no_aspect`.
pub fn classify_clause<P: Pattern + ?Sized>(
    pattern: &P,
    clause: &Clause<'_>,
) -> (TenseLabel, AspectLabel) {
    for verb in clause_verbs(pattern, clause) {
        if verb.feats.is_empty() {
            tracing::warn!(
                token_id = verb.id,
                text = %verb.text,
                "verb token has no morphological features; label may degrade"
            );
        }
    }

    let tense = match (
        is_present_tense_clause(pattern, clause),
        is_past_tense_clause(pattern, clause),
    ) {
        (true, true) => TenseLabel::BothTense,
        (true, false) => TenseLabel::Present,
        (false, true) => TenseLabel::Past,
        (false, false) => TenseLabel::NoTense,
    };

    let aspect = match (
        is_simple_tense_clause(pattern, clause),
        is_perfect_tense_clause(pattern, clause),
    ) {
        (true, true) => AspectLabel::BothAspect,
        (true, false) => AspectLabel::Simple,
        (false, true) => AspectLabel::Perfect,
        (false, false) => AspectLabel::NoAspect,
    };

    (tense, aspect)
}
