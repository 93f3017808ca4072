//! Finite-verb refinement: the second segmentation stage.
//!
//! Some languages mark clause structure by finite verb form rather than by
//! dependency label alone. Dutch follows the Lassy annotation scheme, where
//! a clause is headed by a finite verb (PV); head-verb groups built around a
//! non-finite verb (infinitival purpose clauses, bare participle groups) are
//! not clauses of their own and merge into the nearest finite ancestor.

use std::collections::{BTreeMap, BTreeSet};

use clausal_nlp::{ClausalError, ClausalResult, Sentence, Token, TokenId};

use crate::grouping::group_by_head_verb;
use crate::pattern::Pattern;

fn is_sentence_root(token: &Token) -> bool {
    token.is_root() || token.deprel_is("root")
}

/// Walk up the head chain from `start` to the nearest finite verb, or to
/// the sentence root when no finite verb is passed on the way.
///
/// The root always terminates the walk, so this returns an id unless the
/// graph itself is malformed (cycle or dangling head).
pub fn find_finite_verb_ancestor<P: Pattern + ?Sized>(
    pattern: &P,
    sentence: &Sentence,
    start: TokenId,
) -> ClausalResult<TokenId> {
    let limit = sentence.len();
    let mut current = start;
    for _ in 0..=limit {
        let token = sentence
            .token(current)
            .ok_or(ClausalError::DanglingHead {
                sentence_id: sentence.id(),
                head: current,
            })?;
        if pattern.is_finite_verb(token) || is_sentence_root(token) {
            return Ok(current);
        }
        match token.head {
            Some(next) => current = next,
            // Headless but not flagged as root: treat as the root anyway.
            None => return Ok(current),
        }
    }
    Err(ClausalError::CyclicHeads {
        sentence_id: sentence.id(),
        limit,
    })
}

/// Group all sentence tokens by verb groups that contain a finite verb.
///
/// Head-verb groups that contain a finite verb or the sentence root stay as
/// they are; every other group is dissolved into the group of its nearest
/// finite (or root) ancestor. When that ancestor anchored no group of its
/// own, a new group is created at its id. Groups without verbs never exist
/// at this stage, so none is promoted to a clause.
pub fn group_by_finite_verb<P: Pattern + ?Sized>(
    pattern: &P,
    sentence: &Sentence,
    copy_conj_subject: bool,
) -> ClausalResult<BTreeMap<TokenId, Vec<TokenId>>> {
    let head_verb_groups = group_by_head_verb(pattern, sentence, copy_conj_subject)?;
    let mut refined: BTreeMap<TokenId, BTreeSet<TokenId>> = BTreeMap::new();

    for (anchor, members) in head_verb_groups {
        let keeps_own_clause = members
            .iter()
            .filter_map(|&id| sentence.token(id))
            .any(|t| pattern.is_finite_verb(t) || is_sentence_root(t));
        let target = if keeps_own_clause {
            anchor
        } else {
            find_finite_verb_ancestor(pattern, sentence, anchor)?
        };
        refined.entry(target).or_default().extend(members);
    }

    Ok(refined
        .into_iter()
        .map(|(anchor, members)| (anchor, members.into_iter().collect()))
        .collect())
}
