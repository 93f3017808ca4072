use std::str::FromStr;

use clausal_nlp::ClausalError;

use crate::lang::{DutchPattern, EnglishPattern, Lang};
use crate::pattern::{pattern_for, Pattern};
use crate::tests::fixtures::{self, tok};

#[test]
fn registry_resolves_supported_codes() {
    assert_eq!(pattern_for("en").unwrap().lang(), Lang::En);
    assert_eq!(pattern_for("nl").unwrap().lang(), Lang::Nl);
}

#[test]
fn registry_rejects_unknown_codes() {
    assert_eq!(
        pattern_for("xx").unwrap_err(),
        ClausalError::UnknownLanguage("xx".into())
    );
    // German has a legacy tag set but no pattern policy.
    assert_eq!(
        pattern_for("de").unwrap_err(),
        ClausalError::UnknownLanguage("de".into())
    );
}

#[test]
fn lang_parses_and_prints_its_code() {
    assert_eq!(Lang::from_str("nl").unwrap(), Lang::Nl);
    assert_eq!(Lang::En.to_string(), "en");
    assert!(Lang::from_str("fr").is_err());
}

#[test]
fn dutch_participles_require_verbal_cgn_flags_when_present() {
    let nl = DutchPattern;
    let verbal = tok(
        4, "gelezen", "lezen", "VERB", "WW|vd|vrij|zonder", "VerbForm=Part", 0, "root",
    );
    assert!(nl.is_participle_verb(&verbal));

    // Prenominal participles are adjectival in CGN terms.
    let prenominal = tok(
        4, "gelezen", "lezen", "VERB", "WW|vd|prenom|zonder", "VerbForm=Part", 0, "root",
    );
    assert!(!nl.is_participle_verb(&prenominal));

    // Plain UD input without xpos falls back to the VerbForm feature.
    let plain = tok(4, "gelezen", "lezen", "VERB", "", "VerbForm=Part", 0, "root");
    assert!(nl.is_participle_verb(&plain));

    let aux = tok(2, "heeft", "hebben", "AUX", "WW|pv|tgw|ev", "VerbForm=Fin", 0, "root");
    assert!(!nl.is_participle_verb(&aux));
}

#[test]
fn english_participles_need_only_the_verb_form_feature() {
    let en = EnglishPattern;
    let studied = tok(3, "studied", "study", "VERB", "VBN", "VerbForm=Part", 0, "root");
    assert!(en.is_participle_verb(&studied));
}

#[test]
fn perfect_aux_is_lemma_and_upos_gated() {
    let nl = DutchPattern;
    let heb = tok(2, "heb", "hebben", "AUX", "WW|pv|tgw|ev", "Tense=Pres|VerbForm=Fin", 5, "aux");
    let is = tok(2, "is", "zijn", "AUX", "WW|pv|tgw|ev", "Tense=Pres|VerbForm=Fin", 5, "aux");
    let moet = tok(2, "moet", "moeten", "AUX", "WW|pv|tgw|ev", "Tense=Pres|VerbForm=Fin", 5, "aux");
    // Main-verb "hebben" (possession) is not an auxiliary.
    let heeft_verb =
        tok(2, "heeft", "hebben", "VERB", "WW|pv|tgw|ev", "Tense=Pres|VerbForm=Fin", 0, "root");
    assert!(nl.is_perfect_aux(&heb));
    assert!(nl.is_perfect_aux(&is));
    assert!(!nl.is_perfect_aux(&moet));
    assert!(!nl.is_perfect_aux(&heeft_verb));

    let en = EnglishPattern;
    let have = tok(2, "have", "have", "AUX", "VBP", "Tense=Pres|VerbForm=Fin", 3, "aux");
    let be = tok(2, "is", "be", "AUX", "VBZ", "Tense=Pres|VerbForm=Fin", 3, "aux");
    assert!(en.is_perfect_aux(&have));
    assert!(!en.is_perfect_aux(&be));
}

#[test]
fn copular_sentence_yields_no_clause_verbs() {
    let sentence = fixtures::dat_is_niet_leuk();
    assert!(DutchPattern.get_verbs(&sentence).unwrap().is_empty());
    assert!(DutchPattern.get_verb_clusters(&sentence).unwrap().is_empty());
}

#[test]
fn verb_cluster_collects_the_whole_verbal_chain() {
    let sentence = fixtures::ik_heb_het_kunnen_maken();
    let clusters = DutchPattern.get_verb_clusters(&sentence).unwrap();
    assert_eq!(clusters.len(), 1);
    let ids: Vec<_> = clusters[0].iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 4, 5]);
}

#[test]
fn person_pronouns_exclude_demonstratives() {
    let personal = fixtures::ik_werk_hard_omdat();
    let ids: Vec<_> = DutchPattern
        .get_person_pronouns(&personal)
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![1]);

    let demonstrative = fixtures::dat_is_niet_leuk();
    assert_eq!(DutchPattern.get_pronouns(&demonstrative).len(), 1);
    assert!(DutchPattern.get_person_pronouns(&demonstrative).is_empty());
}

#[test]
fn clause_roles_split_subjects_objects_and_verbs() {
    let sentence = fixtures::ik_sta_op_en_pak();
    let roles = DutchPattern.get_clause_roles(&sentence).unwrap();
    assert_eq!(roles.len(), 2);

    assert_eq!(roles[0].anchor, 2);
    assert_eq!(roles[0].subjects.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
    assert!(roles[0].objects.is_empty());
    assert_eq!(roles[0].verbs.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);

    assert_eq!(roles[1].anchor, 5);
    assert!(roles[1].subjects.is_empty());
    assert_eq!(roles[1].objects.iter().map(|t| t.id).collect::<Vec<_>>(), vec![7]);
    assert_eq!(roles[1].verbs.iter().map(|t| t.id).collect::<Vec<_>>(), vec![5]);
}
