//! Head-verb grouping: the first segmentation stage.
//!
//! Tokens are first grouped by their nearest dependency head, then each
//! group is re-anchored on the nearest head verb up the dependency chain.
//! Verb chains (modal/auxiliary stacking) flatten into one group because
//! the stacked verbs are not group keys of their own; conjoined verbs keep
//! their own groups and may later share a subject.

use std::collections::{BTreeMap, BTreeSet};

use clausal_nlp::{ClausalError, ClausalResult, Sentence, TokenId};

use crate::pattern::Pattern;

/// Walk up the head chain from `start` until a head verb is found.
///
/// Returns `None` when the chain ends at the root without passing a head
/// verb. The walk is bounded by the sentence length; a longer walk means
/// the head graph cycles, and a head id with no token is reported as
/// dangling. Both are structural errors naming the sentence.
pub fn find_head_verb<P: Pattern + ?Sized>(
    pattern: &P,
    sentence: &Sentence,
    start: TokenId,
) -> ClausalResult<Option<TokenId>> {
    let limit = sentence.len();
    let mut current = start;
    for _ in 0..=limit {
        let token = sentence
            .token(current)
            .ok_or(ClausalError::DanglingHead {
                sentence_id: sentence.id(),
                head: current,
            })?;
        if pattern.is_head_verb(token) {
            return Ok(Some(current));
        }
        match token.head {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Err(ClausalError::CyclicHeads {
        sentence_id: sentence.id(),
        limit,
    })
}

/// Group all sentence tokens by their head verb.
///
/// For every head-group key, the anchor is resolved via [`find_head_verb`];
/// groups whose key resolves to no verb are dropped, so their tokens end up
/// in no clause. A member token that is itself a grouping key and a head
/// verb anchors its own group instead of joining the resolved one. A merge
/// pass then collapses groups whose anchor sits inside another group, and
/// `copy_conj_subject` optionally copies coordination-shared subjects.
///
/// Member lists are sorted by id; the map iterates in anchor order.
pub fn group_by_head_verb<P: Pattern + ?Sized>(
    pattern: &P,
    sentence: &Sentence,
    copy_conj_subject: bool,
) -> ClausalResult<BTreeMap<TokenId, Vec<TokenId>>> {
    let head_groups = sentence.group_by_head();
    let mut groups: BTreeMap<TokenId, BTreeSet<TokenId>> = BTreeMap::new();

    for (&head, members) in &head_groups {
        // The root-keyed group has no governor to resolve; its tokens are
        // reached again through the groups keyed by their own ids.
        let Some(head_id) = head else { continue };
        let Some(anchor) = find_head_verb(pattern, sentence, head_id)? else {
            continue;
        };
        for &member in members {
            let Some(token) = sentence.token(member) else { continue };
            if head_groups.contains_key(&Some(member)) && pattern.is_head_verb(token) {
                groups.entry(member).or_default().insert(member);
            } else {
                groups.entry(anchor).or_default().insert(member);
            }
        }
    }

    let mut groups = merge_anchor_members(groups);
    if copy_conj_subject {
        copy_subject_across_conjunctions(pattern, sentence, &mut groups);
    }

    Ok(groups
        .into_iter()
        .map(|(anchor, members)| (anchor, members.into_iter().collect()))
        .collect())
}

/// Collapse groups whose anchor id is a member of a different group.
///
/// Chained or coordinated verbs can leave an anchor inside another verb's
/// group; each such anchor is unioned into the containing group. Union-find
/// with path compression makes the resolution independent of traversal
/// order and terminates even when groups reference each other mutually.
pub(crate) fn merge_anchor_members(
    groups: BTreeMap<TokenId, BTreeSet<TokenId>>,
) -> BTreeMap<TokenId, BTreeSet<TokenId>> {
    let mut target: BTreeMap<TokenId, TokenId> =
        groups.keys().map(|&anchor| (anchor, anchor)).collect();

    for (&anchor, members) in &groups {
        for &member in members {
            if member != anchor && groups.contains_key(&member) {
                let from = resolve(&mut target, member);
                let into = resolve(&mut target, anchor);
                if from != into {
                    target.insert(from, into);
                }
            }
        }
    }

    let mut merged: BTreeMap<TokenId, BTreeSet<TokenId>> = BTreeMap::new();
    for (anchor, members) in groups {
        let root = resolve(&mut target, anchor);
        merged.entry(root).or_default().extend(members);
    }
    merged
}

/// Union-find lookup with path compression.
fn resolve(target: &mut BTreeMap<TokenId, TokenId>, start: TokenId) -> TokenId {
    let mut root = start;
    while target[&root] != root {
        root = target[&root];
    }
    let mut current = start;
    while current != root {
        let next = target[&current];
        target.insert(current, root);
        current = next;
    }
    root
}

/// Copy the subject of a governing clause into subject-less conjunct groups.
///
/// Conjoined clauses share an elided subject: in "Ik sta op en pak mijn
/// fiets" the second clause has no subject token of its own. For any group
/// without a subject whose anchor is a `conj`, the subjects of the group
/// keyed by the anchor's head are copied in. Skipped when no such group
/// exists.
fn copy_subject_across_conjunctions<P: Pattern + ?Sized>(
    pattern: &P,
    sentence: &Sentence,
    groups: &mut BTreeMap<TokenId, BTreeSet<TokenId>>,
) {
    let anchors: Vec<TokenId> = groups.keys().copied().collect();
    for anchor in anchors {
        let members = &groups[&anchor];
        let mut has_subject = false;
        for &member in members {
            let Some(token) = sentence.token(member) else { continue };
            if token.deprel.is_none() {
                tracing::warn!(
                    sentence_id = sentence.id(),
                    token_id = token.id,
                    "token has no deprel; skipped in subject scan"
                );
                continue;
            }
            if pattern.is_subject(token) {
                has_subject = true;
                break;
            }
        }
        if has_subject {
            continue;
        }
        let Some(anchor_token) = sentence.token(anchor) else { continue };
        if !anchor_token.deprel_is("conj") {
            continue;
        }
        let Some(connected) = anchor_token.head else { continue };
        let Some(connected_members) = groups.get(&connected) else { continue };
        let subjects: Vec<TokenId> = connected_members
            .iter()
            .copied()
            .filter(|&id| {
                sentence
                    .token(id)
                    .map(|t| pattern.is_subject(t))
                    .unwrap_or(false)
            })
            .collect();
        if let Some(group) = groups.get_mut(&anchor) {
            group.extend(subjects);
        }
    }
}
