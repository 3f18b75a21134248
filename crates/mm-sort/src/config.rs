//! Configuration for a sorting session.

/// Configuration for a sorting session.
#[derive(Debug, Clone, Default)]
pub struct SortConfig {
    /// Shuffle the pool with this seed. `None` keeps table order.
    pub seed: Option<u64>,
}

impl SortConfig {
    /// Shuffle the initial pool deterministically from `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set or clear the shuffle seed.
    pub fn with_shuffle(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
