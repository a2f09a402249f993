use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Coarse part-of-speech category (Universal POS tag set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    Adj = 0,
    Adp = 1,
    Adv = 2,
    Aux = 3,
    Cconj = 4,
    Det = 5,
    Intj = 6,
    Noun = 7,
    Num = 8,
    Part = 9,
    Pron = 10,
    Propn = 11,
    Punct = 12,
    Sconj = 13,
    Sym = 14,
    Verb = 15,
    X = 16,
    Space = 17,
}

impl PartOfSpeech {
    /// Maps a UPOS tag to its category. Unknown tags fall back to `X`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ADJ" => Self::Adj,
            "ADP" => Self::Adp,
            "ADV" => Self::Adv,
            "AUX" => Self::Aux,
            "CCONJ" | "CONJ" => Self::Cconj,
            "DET" => Self::Det,
            "INTJ" => Self::Intj,
            "NOUN" => Self::Noun,
            "NUM" => Self::Num,
            "PART" => Self::Part,
            "PRON" => Self::Pron,
            "PROPN" => Self::Propn,
            "PUNCT" => Self::Punct,
            "SCONJ" => Self::Sconj,
            "SYM" => Self::Sym,
            "VERB" => Self::Verb,
            "SPACE" => Self::Space,
            _ => Self::X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::X => "X",
            Self::Space => "SPACE",
        }
    }
}

impl core::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Classes of dependency-relation labels that the extractors branch on.
    ///
    /// A label can fall in several classes at once: `conj` is both a
    /// conjunct and a subject-inheriting relation, `relcl` is both a
    /// relative clause and a clause marker.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct RelFlags: u32 {
        // Sentence root
        const ROOT = 1;

        // Arguments (Bits 1-4)
        const SUBJECT = 1 << 1;      // nsubj, nsubjpass
        const OBJECT = 1 << 2;       // dobj, iobj
        const PREP_OBJECT = 1 << 3;  // pobj
        const ATTRIBUTE = 1 << 4;    // attr

        // Attachments (Bits 5-6)
        const PREPOSITION = 1 << 5;  // prep
        const CONJUNCT = 1 << 6;     // conj

        // Clauses (Bits 7-10)
        const CLAUSE = 1 << 7;            // any label containing "cl"
        const ADJ_CLAUSE = 1 << 8;        // acl
        const RELATIVE_CLAUSE = 1 << 9;   // relcl
        const INHERITS_SUBJECT = 1 << 10; // advcl, conj, xcomp

        const ENTITY = Self::SUBJECT.bits()
            | Self::OBJECT.bits()
            | Self::PREP_OBJECT.bits()
            | Self::ATTRIBUTE.bits();
    }
}

impl RelFlags {
    /// Classifies a dependency label.
    pub fn from_label(label: &str) -> Self {
        let mut flags = match label {
            "ROOT" | "root" => Self::ROOT,
            "nsubj" | "nsubjpass" => Self::SUBJECT,
            "dobj" | "iobj" => Self::OBJECT,
            "pobj" => Self::PREP_OBJECT,
            "attr" => Self::ATTRIBUTE,
            "prep" => Self::PREPOSITION,
            "conj" => Self::CONJUNCT | Self::INHERITS_SUBJECT,
            "acl" => Self::ADJ_CLAUSE,
            "relcl" => Self::RELATIVE_CLAUSE,
            "advcl" | "xcomp" => Self::INHERITS_SUBJECT,
            _ => Self::empty(),
        };

        if label.contains("cl") {
            flags |= Self::CLAUSE;
        }

        flags
    }
}
