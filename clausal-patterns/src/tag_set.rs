//! Dependency-relation and part-of-speech inventories per language.

/// The tag inventory a pattern policy works against.
///
/// Relations follow Universal Dependencies labels as emitted by trankit;
/// the `non_head_verb_deprels` set lists relations that disqualify a verb
/// from anchoring its own clause group (open clausal complements, passive
/// subjects and passive auxiliaries stay with their governing verb). A
/// missing deprel always disqualifies and is handled by the policies
/// directly rather than encoded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSet {
    pub verb_pos: &'static [&'static str],
    pub subjects: &'static [&'static str],
    pub objects: &'static [&'static str],
    pub non_head_verb_deprels: &'static [&'static str],
    /// Lemmas of the auxiliaries that form perfect-aspect constructions.
    pub perfect_aux_lemmas: &'static [&'static str],
}

impl TagSet {
    pub fn is_verb_pos(&self, upos: &str) -> bool {
        self.verb_pos.contains(&upos)
    }

    pub fn is_subject_deprel(&self, deprel: &str) -> bool {
        self.subjects.contains(&deprel)
    }

    pub fn is_object_deprel(&self, deprel: &str) -> bool {
        self.objects.contains(&deprel)
    }

    pub fn is_non_head_verb_deprel(&self, deprel: &str) -> bool {
        self.non_head_verb_deprels.contains(&deprel)
    }

    pub fn is_perfect_aux_lemma(&self, lemma: &str) -> bool {
        self.perfect_aux_lemmas.contains(&lemma)
    }
}

pub static EN: TagSet = TagSet {
    verb_pos: &["VERB", "AUX"],
    subjects: &["nsubj", "nsubj:pass", "csubj"],
    objects: &["obj", "iobj", "obl", "obl:agent"],
    non_head_verb_deprels: &["xcomp", "nsubj:pass"],
    perfect_aux_lemmas: &["have"],
};

pub static NL: TagSet = TagSet {
    verb_pos: &["VERB", "AUX"],
    subjects: &["nsubj", "nsubj:pass", "csubj"],
    objects: &["obj", "iobj", "dobj", "pobj", "obl", "obl:agent"],
    non_head_verb_deprels: &["xcomp", "nsubj:pass", "aux:pass"],
    perfect_aux_lemmas: &["hebben", "zijn"],
};
