//! Language-specific pattern policies and clause segmentation.
//!
//! A [`Pattern`] is a stateless capability set of token predicates
//! (`is_subject`, `is_finite_verb`, …) plus the clause-segmentation entry
//! point [`Pattern::get_verb_clauses`]. One implementation exists per
//! supported language; [`pattern_for`] resolves a language code and fails
//! loudly on anything unknown.
//!
//! Segmentation runs in passes over one sentence:
//!
//! 1. group tokens by nearest dependency head ([`clausal_nlp::Sentence::group_by_head`]),
//! 2. re-group by nearest head verb, flattening verb chains ([`group_by_head_verb`]),
//! 3. merge groups whose anchors reference each other (union-find),
//! 4. optionally copy coordination-shared subjects,
//! 5. for languages that segment on finiteness, merge non-finite groups into
//!    their nearest finite ancestor ([`group_by_finite_verb`]).
//!
//! Each pass produces a fresh partition, so they are testable in isolation.

mod grouping;
mod lang;
mod pattern;
mod segmentation;
mod tag_set;

pub use grouping::{find_head_verb, group_by_head_verb};
pub use lang::{DutchPattern, EnglishPattern, Lang};
pub use pattern::{pattern_for, ClauseRoles, Pattern};
pub use segmentation::{find_finite_verb_ancestor, group_by_finite_verb};
pub use tag_set::TagSet;
