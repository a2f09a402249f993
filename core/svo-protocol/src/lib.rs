#![no_std] // Shared with embedded and WASM consumers

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod grammar;

// Re-export core types for convenience
pub use ids::{SentenceId, TokenId};
pub use grammar::*;

pub mod model;
pub use model::*;
