use svo_protocol::{PartOfSpeech, TokenId, TokenRecord};

use crate::{DepTree, TreeError};

/// Assembles a sentence row by row: `(text, pos, dep, head_index)`.
///
/// Token ids follow push order. The root is the row whose head is its own index.
#[derive(Debug, Clone, Default)]
pub struct SentenceBuilder {
    tokens: Vec<TokenRecord>,
}

impl SentenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, text: &str, pos: PartOfSpeech, dep: &str, head: usize) -> Self {
        let id = self.tokens.len() as u32;
        self.tokens.push(TokenRecord {
            id: TokenId(id),
            text: text.to_string(),
            pos,
            dep: dep.to_string(),
            head: TokenId(head as u32),
        });
        self
    }

    /// Space-joined token text, as a caption would read.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn into_records(self) -> Vec<TokenRecord> {
        self.tokens
    }

    pub fn build(self) -> Result<DepTree, TreeError> {
        DepTree::new(self.tokens)
    }
}
