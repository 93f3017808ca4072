//! The per-clause label vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tense of a clause, aggregated over its verb tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenseLabel {
    Present,
    Past,
    /// Verbs of both tenses in one clause, e.g. across a quotation break.
    BothTense,
    /// No verb carries a `Tense` feature (or the clause has no verbs).
    NoTense,
}

impl TenseLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            TenseLabel::Present => "present",
            TenseLabel::Past => "past",
            TenseLabel::BothTense => "both_tense",
            TenseLabel::NoTense => "no_tense",
        }
    }
}

impl fmt::Display for TenseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aspect of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectLabel {
    Simple,
    Perfect,
    BothAspect,
    NoAspect,
}

impl AspectLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            AspectLabel::Simple => "simple",
            AspectLabel::Perfect => "perfect",
            AspectLabel::BothAspect => "both_aspect",
            AspectLabel::NoAspect => "no_aspect",
        }
    }
}

impl fmt::Display for AspectLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
