//! Document hierarchy consumed by the reporting layer.
//!
//! A parsed book or review arrives as items (chapters, review sections)
//! holding elements (paragraphs, headers) holding sentences. The hierarchy
//! exists so clause-level output can carry stable `(item, element, sentence)`
//! coordinates; extraction and parsing live in the ingestion layer.

use serde::{Deserialize, Serialize};

use crate::sentence::Sentence;

/// A paragraph-like unit of parsed text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub sentences: Vec<Sentence>,
}

/// A chapter-like unit: an ordered list of elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A full parsed document (one book or review).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// External identifier, e.g. an ISBN.
    pub id: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Document {
    pub fn new(id: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            items,
        }
    }

    /// All sentences of the document in reading order.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.items
            .iter()
            .flat_map(|item| item.elements.iter())
            .flat_map(|element| element.sentences.iter())
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences().count()
    }
}
