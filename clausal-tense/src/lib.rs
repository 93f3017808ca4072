//! Tense and aspect classification over segmented clauses.
//!
//! Consumes the clauses produced by `clausal-patterns` and labels each with
//! a tense ([`TenseLabel`]) and an aspect ([`AspectLabel`]), plus a tabular
//! row format ([`ClauseRow`]) for downstream corpus statistics.

mod classify;
mod labels;
mod report;

pub use classify::{
    classify_clause, clause_verbs, is_past_perfect_clause, is_past_simple_clause,
    is_past_tense_clause, is_perfect_tense_clause, is_present_perfect_clause,
    is_present_simple_clause, is_present_tense_clause, is_simple_tense_clause,
};
pub use labels::{AspectLabel, TenseLabel};
pub use report::{classify_document, classify_sentence, ClauseRow};

#[cfg(test)]
mod tests {
    mod classify;
    mod fixtures;
    mod report;
}
