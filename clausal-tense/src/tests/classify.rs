use clausal_nlp::{Clause, Sentence};
use clausal_patterns::{DutchPattern, Pattern};

use crate::classify::{
    classify_clause, clause_verbs, is_past_perfect_clause, is_past_simple_clause,
    is_perfect_tense_clause, is_present_perfect_clause, is_present_simple_clause,
};
use crate::labels::{AspectLabel, TenseLabel};
use crate::tests::fixtures::{self, tok};

fn only_clause(sentence: &Sentence) -> Clause<'_> {
    let mut clauses = DutchPattern.get_verb_clauses(sentence).unwrap();
    assert_eq!(clauses.len(), 1, "expected exactly one clause");
    clauses.pop().unwrap()
}

#[test]
fn participle_perfect_is_present_perfect() {
    let sentence = fixtures::zij_heeft_lang_gestudeerd();
    let clause = only_clause(&sentence);
    assert!(is_present_perfect_clause(&DutchPattern, &clause));
    assert!(!is_past_perfect_clause(&DutchPattern, &clause));
    assert_eq!(
        classify_clause(&DutchPattern, &clause),
        (TenseLabel::Present, AspectLabel::Perfect)
    );
}

#[test]
fn past_auxiliary_makes_past_perfect_not_present_perfect() {
    let sentence = fixtures::ze_had_gewacht();
    let clause = only_clause(&sentence);
    assert!(is_past_perfect_clause(&DutchPattern, &clause));
    assert!(!is_present_perfect_clause(&DutchPattern, &clause));
    assert_eq!(
        classify_clause(&DutchPattern, &clause),
        (TenseLabel::Past, AspectLabel::Perfect)
    );
}

#[test]
fn double_infinitive_counts_as_perfect() {
    // "heeft ... leren kennen": no participle, two infinitives.
    let sentence = fixtures::zij_heeft_leren_kennen();
    let clause = only_clause(&sentence);
    assert!(is_present_perfect_clause(&DutchPattern, &clause));
}

#[test]
fn passive_with_zijn_is_perfect() {
    let sentence = fixtures::veel_boeken_zijn_gelezen();
    let clause = only_clause(&sentence);
    assert!(is_present_perfect_clause(&DutchPattern, &clause));
}

#[test]
fn modal_infinitive_without_perfect_aux_is_present_simple() {
    // "moeten" is not a perfect auxiliary; one infinitive is not enough
    // either way.
    let sentence = fixtures::zij_moet_veel_werken();
    let clause = only_clause(&sentence);
    assert!(!is_perfect_tense_clause(&DutchPattern, &clause));
    assert!(is_present_simple_clause(&DutchPattern, &clause));
    assert_eq!(
        classify_clause(&DutchPattern, &clause),
        (TenseLabel::Present, AspectLabel::Simple)
    );
}

#[test]
fn possessive_hebben_is_not_an_auxiliary() {
    let sentence = fixtures::zij_heeft_veel_studenten();
    let clause = only_clause(&sentence);
    assert!(!is_perfect_tense_clause(&DutchPattern, &clause));
    assert_eq!(
        classify_clause(&DutchPattern, &clause),
        (TenseLabel::Present, AspectLabel::Simple)
    );
}

#[test]
fn finite_past_verb_is_past_simple() {
    let sentence = fixtures::ze_studeerde_hard();
    let clause = only_clause(&sentence);
    assert!(is_past_simple_clause(&DutchPattern, &clause));
    assert_eq!(
        classify_clause(&DutchPattern, &clause),
        (TenseLabel::Past, AspectLabel::Simple)
    );
}

#[test]
fn copular_sentence_has_no_clause_to_classify() {
    let sentence = fixtures::mariken_is_mijn_docent();
    let clauses = DutchPattern.get_verb_clauses(&sentence).unwrap();
    assert!(clauses.is_empty());
}

#[test]
fn verbless_clause_is_no_tense_no_aspect() {
    let a = tok(1, "Geen", "geen", "DET", "VNW|onbep|det", "", 2, "det");
    let b = tok(2, "idee", "idee", "NOUN", "N|soort|ev", "Number=Sing", 0, "root");
    let clause = Clause::new(2, vec![&a, &b]);
    assert!(clause_verbs(&DutchPattern, &clause).is_empty());
    assert_eq!(
        classify_clause(&DutchPattern, &clause),
        (TenseLabel::NoTense, AspectLabel::NoAspect)
    );
}

#[test]
fn mixed_tenses_in_one_clause_label_both() {
    let subj = tok(1, "Ik", "ik", "PRON", "VNW|pers|pron", "PronType=Prs", 2, "nsubj");
    let pres = tok(2, "werk", "werken", "VERB", "WW|pv|tgw|ev", "Tense=Pres|VerbForm=Fin", 0, "root");
    let past = tok(3, "werkte", "werken", "VERB", "WW|pv|verl|ev", "Tense=Past|VerbForm=Fin", 2, "conj");
    let clause = Clause::new(2, vec![&subj, &pres, &past]);
    let (tense, aspect) = classify_clause(&DutchPattern, &clause);
    assert_eq!(tense, TenseLabel::BothTense);
    assert_eq!(aspect, AspectLabel::Simple);
}

#[test]
fn every_clause_gets_exactly_one_label_pair() {
    for sentence in [
        fixtures::zij_heeft_lang_gestudeerd(),
        fixtures::ze_had_gewacht(),
        fixtures::zij_heeft_leren_kennen(),
        fixtures::veel_boeken_zijn_gelezen(),
        fixtures::zij_moet_veel_werken(),
        fixtures::zij_heeft_veel_studenten(),
        fixtures::ze_studeerde_hard(),
    ] {
        for clause in DutchPattern.get_verb_clauses(&sentence).unwrap() {
            // Total function: any well-formed clause maps to one pair.
            let (tense, aspect) = classify_clause(&DutchPattern, &clause);
            assert!(
                tense != TenseLabel::NoTense,
                "tensed fixture produced no_tense: {clause}"
            );
            assert!(
                aspect != AspectLabel::NoAspect,
                "verbal fixture produced no_aspect: {clause}"
            );
        }
    }
}
