use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Subject or preposition resolution recursed deeper than the configured limit.
    #[error("resolution from token {token} exceeded the depth limit of {limit}")]
    DepthExceeded { token: usize, limit: usize },
}
