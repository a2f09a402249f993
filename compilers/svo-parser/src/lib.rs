//! Reader for dependency parses exported in CoNLL-U.

pub mod conllu;
pub mod error;

pub use conllu::parse_conllu;
pub use error::ConllError;
