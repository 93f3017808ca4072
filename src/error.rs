//! Error taxonomy for clause computations.
//!
//! Structural problems in a dependency graph and unknown language codes are
//! hard errors; missing morphology on individual tokens is deliberately not
//! represented here — predicates treat it as "false" and log instead, since
//! corpora contain parser noise at non-trivial rates.

use thiserror::Error;

use crate::token::TokenId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClausalError {
    /// A head walk ran longer than the sentence has tokens; the head graph
    /// is cyclic or otherwise malformed. Bounded so malformed parser output
    /// cannot hang the pipeline.
    #[error("head walk in sentence {sentence_id} exceeded {limit} steps; dependency graph is likely cyclic")]
    CyclicHeads { sentence_id: usize, limit: usize },

    /// A head id referenced a token that does not exist in the sentence.
    #[error("sentence {sentence_id} references nonexistent head token {head}")]
    DanglingHead { sentence_id: usize, head: TokenId },

    /// No pattern policy exists for the requested language code.
    #[error("unknown language code {0:?}")]
    UnknownLanguage(String),
}

pub type ClausalResult<T> = Result<T, ClausalError>;
