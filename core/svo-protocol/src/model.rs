use rkyv::{Archive, Deserialize, Serialize};
use crate::grammar::{PartOfSpeech, RelFlags};
use crate::ids::{SentenceId, TokenId};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One token as annotated by the external dependency parser.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct TokenRecord {
    pub id: TokenId,
    pub text: String,
    pub pos: PartOfSpeech,
    /// Dependency label relative to `head` (e.g. `nsubj`, `pobj`, `ROOT`).
    pub dep: String,
    /// The root token points at itself.
    pub head: TokenId,
}

impl TokenRecord {
    pub fn rel(&self) -> RelFlags {
        RelFlags::from_label(&self.dep)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ParsedSentence {
    pub id: SentenceId,
    pub text: String,
    pub tokens: Vec<TokenRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Corpus {
    pub version: u32,
    pub sentences: Vec<ParsedSentence>,
}
