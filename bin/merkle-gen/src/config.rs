//! Configuration

use std::{env, path::PathBuf};

/// Default CSV input
const DEFAULT_INPUT: &str = "data/airdrop_data.csv";

/// Default artifact path
const DEFAULT_OUTPUT: &str = "data/merkle_data.json";

/// Generator configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct GeneratorConfig {
    /// CSV dataset; a sample file is written here when it does not exist
    pub(crate) input: PathBuf,
    /// Where the JSON artifact goes
    pub(crate) output: PathBuf,
    /// Number of sample allocations generated when the input is missing
    pub(crate) sample_count: usize,
    /// Seed for the sample amounts
    pub(crate) sample_seed: u64,
    /// Records whose proofs are re-verified before writing the artifact
    pub(crate) verify_samples: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sample_count: 10,
            sample_seed: 42,
            verify_samples: 3,
        }
    }
}

impl GeneratorConfig {
    /// Load from environment variables
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from any key lookup, falling back to defaults for missing or
    /// unparsable values
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            input: lookup("AIRDROP_INPUT").map(PathBuf::from).unwrap_or(defaults.input),
            output: lookup("AIRDROP_OUTPUT").map(PathBuf::from).unwrap_or(defaults.output),
            sample_count: lookup("AIRDROP_SAMPLE_COUNT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.sample_count),
            sample_seed: lookup("AIRDROP_SAMPLE_SEED")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.sample_seed),
            verify_samples: lookup("AIRDROP_VERIFY_SAMPLES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.verify_samples),
        }
    }
}
