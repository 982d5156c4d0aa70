//! Container selection: which bins can take the whole item set.

use crate::anchor;
use crate::bin::Bin;
use crate::item::Item;
use crate::ordering::{ordering_sample, sort_by_volume};
use crate::stacking::stack;
use boxfit_core::solver::{Config, Solver};
use boxfit_core::{BinFit, BinOutcome, BinReport, Error, FitResult, Result};

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::Instant;

/// Searches bin orientations and item orderings for a complete packing.
pub struct BoxFitter {
    config: Config,
}

/// Items after stacking and sorting, with the orderings to try.
struct SearchSpace {
    items: Vec<Item>,
    orderings: Vec<Vec<usize>>,
    total_volume: f64,
}

impl BoxFitter {
    /// Creates a fitter with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a fitter with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Stacks duplicates, sorts by volume and draws the ordering sample.
    fn prepare(&self, items: &[Item]) -> SearchSpace {
        let mut stacked = stack(items, &self.config.stacking);
        sort_by_volume(&mut stacked);

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let orderings = ordering_sample(stacked.len(), &self.config, &mut rng);
        let total_volume = stacked.iter().map(Item::volume).sum();

        SearchSpace {
            items: stacked,
            orderings,
            total_volume,
        }
    }

    /// Runs the orientation × ordering search for one bin.
    fn search_bin(&self, bin: &Bin, space: &SearchSpace) -> Result<BinReport> {
        let report = |outcome| BinReport {
            bin_name: bin.name().to_string(),
            outcome,
        };

        if bin.usable_volume() < space.total_volume {
            log::debug!(
                "skipping bin '{}': usable volume {:.3} < item volume {:.3}",
                bin.name(),
                bin.usable_volume(),
                space.total_volume
            );
            return Ok(report(BinOutcome::Skipped {
                usable_volume: bin.usable_volume(),
            }));
        }

        let mut attempts = 0;
        let mut best_placed = 0;

        for extent in bin.extent_permutations() {
            let mut working = bin.reoriented(extent);

            for ordering in &space.orderings {
                working.reset();
                attempts += 1;

                let outcome = anchor::pack(&mut working, &space.items, ordering)?;
                best_placed = best_placed.max(outcome.placed);

                if outcome.is_complete() {
                    let fill_ratio = self.config.round_ratio(space.total_volume / bin.volume());
                    log::info!(
                        "bin '{}' takes all {} items (fill ratio {}) after {} attempts",
                        bin.name(),
                        outcome.requested,
                        fill_ratio,
                        attempts
                    );
                    return Ok(report(BinOutcome::Packed(BinFit {
                        bin_name: bin.name().to_string(),
                        fill_ratio,
                        bin_extent: extent,
                        ordering: ordering.clone(),
                        attempts,
                        placements: working.into_placements(),
                    })));
                }
            }
        }

        log::debug!(
            "bin '{}' exhausted after {} attempts, best {} of {} items",
            bin.name(),
            attempts,
            best_placed,
            space.items.len()
        );
        Ok(report(BinOutcome::Exhausted {
            attempts,
            best_placed,
        }))
    }

    /// Packs `items` against every bin in `bins`, in order.
    pub fn fit(&self, items: &[Item], bins: &[Bin]) -> Result<FitResult> {
        let start = Instant::now();

        self.config.validate()?;
        if items.is_empty() {
            return Err(Error::InvalidItem("item list is empty".into()));
        }
        for item in items {
            item.validate()?;
        }
        for bin in bins {
            bin.validate()?;
        }

        let space = self.prepare(items);

        let reports: Vec<BinReport> = if self.config.parallel {
            bins.par_iter()
                .map(|bin| self.search_bin(bin, &space))
                .collect::<Result<_>>()?
        } else {
            bins.iter()
                .map(|bin| self.search_bin(bin, &space))
                .collect::<Result<_>>()?
        };

        let mut result = FitResult::new();
        for report in reports {
            result.record(report);
        }
        result.requested_items = items.len();
        result.stacked_items = space.items.len();
        result.total_volume = space.total_volume;
        result.orderings = space.orderings.len();
        result.computation_time_ms = start.elapsed().as_millis() as u64;

        Ok(result)
    }
}

impl Solver for BoxFitter {
    type Item = Item;
    type Bin = Bin;

    fn solve(&self, items: &[Item], bins: &[Bin]) -> Result<FitResult> {
        self.fit(items, bins)
    }
}

/// Returns the bins that can take every item, with their fill ratios.
///
/// Uses the default configuration; ordering samples are seeded from entropy.
pub fn get_fit_box(items: &[Item], bins: &[Bin]) -> Result<FitResult> {
    BoxFitter::default_config().fit(items, bins)
}

/// Same as [`get_fit_box`] with an explicit configuration.
pub fn get_fit_box_with(items: &[Item], bins: &[Bin], config: &Config) -> Result<FitResult> {
    BoxFitter::new(config.clone()).fit(items, bins)
}
