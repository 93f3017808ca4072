//! A single parsed word with its morphology and dependency attachment.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 1-based position of a token within its sentence.
pub type TokenId = u32;

/// Morphological feature map, e.g. `Tense → Past`, `VerbForm → Inf`.
///
/// Parsed from CoNLL-U style strings. Keys without a value (bare flags)
/// map to `"Yes"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feats(BTreeMap<String, String>);

impl Feats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `|`-separated feature string such as `Tense=Past|VerbForm=Fin`.
    ///
    /// Empty segments are skipped, so `""` yields an empty map.
    pub fn parse(raw: &str) -> Self {
        let mut map = BTreeMap::new();
        for part in raw.split('|').filter(|p| !p.is_empty()) {
            match part.split_once('=') {
                Some((key, value)) => map.insert(key.to_string(), value.to_string()),
                None => map.insert(part.to_string(), "Yes".to_string()),
            };
        }
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// True if the feature is present with exactly this value.
    ///
    /// A missing feature is simply `false`; corpora contain tokens with
    /// incomplete morphology and that must not be an error.
    pub fn has(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One parsed word of a sentence.
///
/// `head` is the id of the syntactic governor; `None` marks the sentence
/// root. `deprel` may be absent in noisy parser output and every consumer
/// treats a missing relation as "matches nothing".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub text: String,
    pub lemma: String,
    /// Coarse universal part-of-speech tag, e.g. `VERB`, `AUX`, `PRON`.
    pub upos: String,
    /// Language-specific tag, `|`-separated positional flags (CGN style for
    /// Dutch, e.g. `WW|vd|vrij|zonder`). May be empty.
    #[serde(default)]
    pub xpos: String,
    #[serde(default)]
    pub feats: Feats,
    pub head: Option<TokenId>,
    #[serde(default)]
    pub deprel: Option<String>,
}

impl Token {
    /// True if this token is the sentence root (no governor).
    pub fn is_root(&self) -> bool {
        self.head.is_none()
    }

    /// True if the dependency relation is present and equals `rel`.
    pub fn deprel_is(&self, rel: &str) -> bool {
        self.deprel.as_deref() == Some(rel)
    }

    /// True if the positional xpos tag contains the given flag.
    pub fn has_xpos_flag(&self, flag: &str) -> bool {
        self.xpos.split('|').any(|f| f == flag)
    }

    /// True if the token carries positional xpos material at all.
    pub fn has_xpos_flags(&self) -> bool {
        self.xpos.contains('|')
    }
}
