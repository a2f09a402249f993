use thiserror::Error;

/// Structural problems that make a token sequence unusable as a dependency tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("sentence has no tokens")]
    Empty,
    #[error("token at position {position} carries id {found}")]
    Misnumbered { position: usize, found: u32 },
    #[error("token {token} points at head {head}, which is outside the sentence")]
    DanglingHead { token: usize, head: u32 },
    #[error("no token is its own head")]
    NoRoot,
    #[error("tokens {first} and {second} are both roots")]
    MultipleRoots { first: usize, second: usize },
    #[error("head chain from token {token} never reaches the root")]
    Cycle { token: usize },
}
