//! Tabular output for the corpus-statistics layer.

use serde::Serialize;

use clausal_nlp::{ClausalResult, Document, Sentence};
use clausal_patterns::Pattern;

use crate::classify::classify_clause;
use crate::labels::{AspectLabel, TenseLabel};

/// One classified clause with its position in the document hierarchy.
///
/// Indices are zero-based positions within the parent (not token or
/// sentence ids), so rows from different documents line up in one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClauseRow {
    pub document_id: String,
    pub item_index: usize,
    pub element_index: usize,
    pub sentence_index: usize,
    pub clause_index: usize,
    pub tense: TenseLabel,
    pub aspect: AspectLabel,
}

impl ClauseRow {
    /// Column order for tabular (TSV) writers.
    pub const HEADERS: [&'static str; 7] = [
        "document_id",
        "item_index",
        "element_index",
        "sentence_index",
        "clause_index",
        "tense",
        "aspect",
    ];
}

/// Labels for every clause of one sentence, in clause order.
pub fn classify_sentence<P: Pattern + ?Sized>(
    pattern: &P,
    sentence: &Sentence,
) -> ClausalResult<Vec<(TenseLabel, AspectLabel)>> {
    Ok(pattern
        .get_verb_clauses(sentence)?
        .iter()
        .map(|clause| classify_clause(pattern, clause))
        .collect())
}

/// One row per clause across the whole document, in reading order.
///
/// Stops at the first structurally malformed sentence; a corpus run that
/// wants to keep going should classify per sentence and filter.
pub fn classify_document<P: Pattern + ?Sized>(
    pattern: &P,
    document: &Document,
) -> ClausalResult<Vec<ClauseRow>> {
    let mut rows = Vec::new();
    for (item_index, item) in document.items.iter().enumerate() {
        for (element_index, element) in item.elements.iter().enumerate() {
            for (sentence_index, sentence) in element.sentences.iter().enumerate() {
                for (clause_index, labels) in
                    classify_sentence(pattern, sentence)?.into_iter().enumerate()
                {
                    let (tense, aspect) = labels;
                    rows.push(ClauseRow {
                        document_id: document.id.clone(),
                        item_index,
                        element_index,
                        sentence_index,
                        clause_index,
                        tense,
                        aspect,
                    });
                }
            }
        }
    }
    Ok(rows)
}
