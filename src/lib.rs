//! Core token-graph model for dependency-parsed text.
//!
//! This crate holds the data model shared by the clause-segmentation and
//! tense/aspect layers: tokens with head pointers and dependency relations,
//! sentences with id-keyed token lookup, the document hierarchy used by
//! reporting, and the derived [`Clause`] view.
//!
//! Parser output (trankit- or spaCy-style JSON) is normalized into these
//! types by an ingestion layer; everything here is serde-compatible so that
//! adapter stays a thin deserialization step.

mod clause;
mod document;
mod error;
mod sentence;
mod token;

pub use clause::Clause;
pub use document::{Document, Element, Item};
pub use error::{ClausalError, ClausalResult};
pub use sentence::Sentence;
pub use token::{Feats, Token, TokenId};
