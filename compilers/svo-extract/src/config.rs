/// Recursion cap for subject and prepositional-chain resolution.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Start object phrases after their leading determiners ("a ball" -> "ball").
    pub skip_determiner: bool,
    pub max_depth: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            skip_determiner: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ExtractConfig {
    pub fn with_skip_determiner(mut self, skip_determiner: bool) -> Self {
        self.skip_determiner = skip_determiner;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
