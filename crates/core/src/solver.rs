//! Solver trait and configuration.

use crate::result::FitResult;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Thresholds for merging duplicate items before the search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StackingConfig {
    /// Whether duplicate items are merged at all.
    pub enabled: bool,

    /// Minimum `floor(mid / min)` for a group to stack as thin items.
    pub thin_ratio: usize,

    /// Minimum `floor(max / mid)` for a group to stack as slender items.
    pub slender_ratio: usize,

    /// Minimum multiplicity for slender stacking.
    pub slender_min_quantity: usize,

    /// Minimum multiplicity for bulk (cube) stacking.
    pub bulk_min_quantity: usize,

    /// Maximum number of re-stacking passes.
    pub max_depth: usize,
}

impl Default for StackingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            thin_ratio: 5,
            slender_ratio: 5,
            slender_min_quantity: 4,
            bulk_min_quantity: 8,
            max_depth: 64,
        }
    }
}

impl StackingConfig {
    /// Returns a configuration that leaves items untouched.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Sets the recursion bound.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Search configuration for container selection.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Seed for ordering sampling (None = seeded from entropy).
    pub seed: Option<u64>,

    /// Item counts up to this size try every ordering.
    pub full_permutation_limit: usize,

    /// Item counts up to this size sample random orderings.
    pub sampling_limit: usize,

    /// Number of random orderings drawn when sampling.
    pub sample_size: usize,

    /// Decimal places kept in reported fill ratios.
    pub ratio_precision: u32,

    /// Evaluate bins on the rayon thread pool.
    pub parallel: bool,

    /// Duplicate-merging thresholds.
    pub stacking: StackingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            full_permutation_limit: 4,
            sampling_limit: 9,
            sample_size: 24,
            ratio_precision: 2,
            parallel: false,
            stacking: StackingConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the number of sampled orderings.
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = size;
        self
    }

    /// Sets the reported fill ratio precision.
    pub fn with_ratio_precision(mut self, digits: u32) -> Self {
        self.ratio_precision = digits;
        self
    }

    /// Enables or disables parallel bin evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the stacking configuration.
    pub fn with_stacking(mut self, stacking: StackingConfig) -> Self {
        self.stacking = stacking;
        self
    }

    /// Rounds `ratio` to the configured number of decimals.
    pub fn round_ratio(&self, ratio: f64) -> f64 {
        let scale = 10f64.powi(self.ratio_precision as i32);
        (ratio * scale).round() / scale
    }

    /// Checks the configuration for inconsistent limits.
    pub fn validate(&self) -> Result<()> {
        if self.sampling_limit < self.full_permutation_limit {
            return Err(crate::Error::ConfigError(format!(
                "sampling limit {} is below the full permutation limit {}",
                self.sampling_limit, self.full_permutation_limit
            )));
        }
        if self.stacking.thin_ratio == 0 {
            return Err(crate::Error::ConfigError(
                "thin stacking ratio must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Trait for container-selection solvers.
pub trait Solver {
    /// The item type this solver packs.
    type Item;
    /// The container type this solver fills.
    type Bin;

    /// Packs `items` into each candidate bin and reports the bins that fit.
    fn solve(&self, items: &[Self::Item], bins: &[Self::Bin]) -> Result<FitResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = Config::default();
        assert_eq!(config.full_permutation_limit, 4);
        assert_eq!(config.sampling_limit, 9);
        assert_eq!(config.sample_size, 24);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_round_ratio() {
        let config = Config::default();
        assert_eq!(config.round_ratio(0.8333), 0.83);
        assert_eq!(config.round_ratio(0.756), 0.76);
        let coarse = Config::default().with_ratio_precision(1);
        assert_eq!(coarse.round_ratio(0.8333), 0.8);
    }

    #[test]
    fn test_invalid_limits() {
        let mut config = Config::default();
        config.sampling_limit = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_stacking_disabled() {
        let config = Config::new().with_stacking(StackingConfig::disabled());
        assert!(!config.stacking.enabled);
        assert_eq!(config.stacking.thin_ratio, 5);
    }
}
