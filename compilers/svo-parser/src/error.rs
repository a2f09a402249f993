use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConllError {
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("line {line}: expected token {expected}, found {found}")]
    OutOfOrder { line: usize, expected: u32, found: u32 },
}
