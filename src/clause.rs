//! A clausal grouping of sentence tokens anchored on a head verb.

use std::fmt;

use serde::Serialize;

use crate::token::{Token, TokenId};

/// A derived, non-owning view of a subset of a sentence's tokens.
///
/// Identified by the id of its anchoring head-verb token. Created fresh per
/// segmentation call and never persisted. Tokens are held in ascending id
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clause<'a> {
    anchor: TokenId,
    tokens: Vec<&'a Token>,
}

impl<'a> Clause<'a> {
    pub fn new(anchor: TokenId, mut tokens: Vec<&'a Token>) -> Self {
        tokens.sort_by_key(|t| t.id);
        tokens.dedup_by_key(|t| t.id);
        Self { anchor, tokens }
    }

    /// Id of the head-verb token this clause is anchored on.
    pub fn anchor(&self) -> TokenId {
        self.anchor
    }

    pub fn tokens(&self) -> &[&'a Token] {
        &self.tokens
    }

    pub fn token_ids(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.tokens.iter().map(|t| t.id)
    }

    pub fn contains(&self, id: TokenId) -> bool {
        self.tokens.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Clause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:", self.anchor)?;
        for token in &self.tokens {
            write!(f, " {}:{}", token.id, token.text)?;
        }
        Ok(())
    }
}
