//! An ordered sequence of tokens with id-keyed lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::token::{Token, TokenId};

/// One parsed sentence, immutable once built.
///
/// Tokens are kept in ascending id order and head lookups go through an
/// explicit `id → position` index rather than raw list indexing, so sparse
/// or oddly ordered parser ids cannot cause out-of-bounds reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSentence")]
pub struct Sentence {
    id: usize,
    text: String,
    tokens: Vec<Token>,
    #[serde(skip)]
    index: BTreeMap<TokenId, usize>,
}

/// Wire shape of a sentence; the index is rebuilt on construction.
#[derive(Deserialize)]
struct RawSentence {
    id: usize,
    text: String,
    tokens: Vec<Token>,
}

impl From<RawSentence> for Sentence {
    fn from(raw: RawSentence) -> Self {
        Sentence::new(raw.id, raw.text, raw.tokens)
    }
}

impl Sentence {
    pub fn new(id: usize, text: impl Into<String>, mut tokens: Vec<Token>) -> Self {
        tokens.sort_by_key(|t| t.id);
        let index = tokens.iter().enumerate().map(|(pos, t)| (t.id, pos)).collect();
        Self {
            id,
            text: text.into(),
            tokens,
            index,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Look up a token by its sentence-internal id.
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.index.get(&id).map(|&pos| &self.tokens[pos])
    }

    /// Group token ids by their head token.
    ///
    /// Every token is filed under its head id (`None` for the root). Each
    /// group keyed by an existing token additionally contains that head
    /// token's own id. A head id that refers to no token in the sentence
    /// keeps its dependents but gains no head entry; the structural error
    /// for such a dangling reference is raised later, during head walks.
    ///
    /// An empty sentence yields an empty map.
    pub fn group_by_head(&self) -> BTreeMap<Option<TokenId>, Vec<TokenId>> {
        let mut groups: BTreeMap<Option<TokenId>, Vec<TokenId>> = BTreeMap::new();
        for token in &self.tokens {
            groups.entry(token.head).or_default().push(token.id);
        }
        for (&head, members) in groups.iter_mut() {
            if let Some(head_id) = head {
                if self.token(head_id).is_some() && !members.contains(&head_id) {
                    members.push(head_id);
                }
            }
            members.sort_unstable();
        }
        groups
    }
}
