//! Loader configuration types.

/// Configuration for the train/test split.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Fraction of samples held out for the test set.
    pub test_fraction: f64,
    /// Randomize sample order before partitioning.
    pub shuffle: bool,
    /// Seed for the shuffle. `None` draws entropy from the OS, so two
    /// runs produce different splits.
    pub seed: Option<u64>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            test_fraction: 0.2,
            shuffle: true,
            seed: None,
        }
    }
}
