//! Subject-verb-object extraction over a dependency parse.
//!
//! [`extract_object_phrases`] finds the entity spans of a sentence and
//! [`extract_verb_phrases`] links verbs to their resolved subjects and
//! objects. The two passes share nothing and can run in either order.

pub mod config;
pub mod error;
pub mod object;
pub mod phrase;
pub mod resolve;
pub mod verb;

#[cfg(test)]
mod fixtures;

use svo_tree::DepTree;

pub use config::{ExtractConfig, DEFAULT_MAX_DEPTH};
pub use error::ExtractError;
pub use object::object_phrase_for;
pub use phrase::{ObjectPhrase, VerbPhrase};
pub use resolve::{adposition_phrase, resolve_prep_object, resolve_subject, AdpositionPhrase, PrepTarget};

/// Entities and relations of one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Svo<'t> {
    pub objects: Vec<ObjectPhrase<'t>>,
    pub verbs: Vec<VerbPhrase<'t>>,
}

#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    pub fn object_phrases<'t>(&self, tree: &'t DepTree) -> Vec<ObjectPhrase<'t>> {
        object::object_phrases(tree, self.config.skip_determiner)
    }

    pub fn verb_phrases<'t>(&self, tree: &'t DepTree) -> Result<Vec<VerbPhrase<'t>>, ExtractError> {
        verb::verb_phrases(tree, self.config.max_depth)
    }

    pub fn extract<'t>(&self, tree: &'t DepTree) -> Result<Svo<'t>, ExtractError> {
        Ok(Svo {
            objects: self.object_phrases(tree),
            verbs: self.verb_phrases(tree)?,
        })
    }
}

pub fn extract_object_phrases(tree: &DepTree) -> Vec<ObjectPhrase<'_>> {
    Extractor::new().object_phrases(tree)
}

pub fn extract_verb_phrases(tree: &DepTree) -> Result<Vec<VerbPhrase<'_>>, ExtractError> {
    Extractor::new().verb_phrases(tree)
}

pub fn extract_svo(tree: &DepTree) -> Result<Svo<'_>, ExtractError> {
    Extractor::new().extract(tree)
}
