//! Fit result representation.

use crate::placement::{Placement, PlacementStats};
use nalgebra::Vector3;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the search over a single bin ended.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOutcome {
    /// Usable volume (volume × filling ratio) is below the item volume.
    Skipped {
        /// Volume × filling ratio of the bin.
        usable_volume: f64,
    },
    /// Every bin orientation and ordering was tried without a complete packing.
    Exhausted {
        /// Number of packing attempts made.
        attempts: usize,
        /// Most items placed by any attempt.
        best_placed: usize,
    },
    /// A complete packing was found.
    Packed(BinFit),
}

/// A complete packing of every candidate item into one bin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinFit {
    /// Name of the bin.
    pub bin_name: String,

    /// Item volume over bin volume, rounded.
    pub fill_ratio: f64,

    /// Bin extents in the orientation that succeeded.
    pub bin_extent: Vector3<f64>,

    /// Item ordering (indices into the candidate list) that succeeded.
    pub ordering: Vec<usize>,

    /// Attempts made before and including the successful one.
    pub attempts: usize,

    /// Accepted placements.
    pub placements: Vec<Placement>,
}

impl BinFit {
    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.placements)
    }
}

/// The search outcome for one evaluated bin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinReport {
    /// Name of the bin.
    pub bin_name: String,
    /// How the search ended.
    pub outcome: BinOutcome,
}

impl BinReport {
    /// Returns the fit if the bin was packed.
    pub fn fit(&self) -> Option<&BinFit> {
        match &self.outcome {
            BinOutcome::Packed(fit) => Some(fit),
            _ => None,
        }
    }
}

/// Result of fitting an item set against a bin catalog.
///
/// Behaves as an ordered mapping from bin name to fill ratio: only bins that
/// took every item appear, in evaluation order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitResult {
    /// Bins that reached a complete packing, in evaluation order.
    pub fits: Vec<BinFit>,

    /// One report per evaluated bin, in caller order.
    pub reports: Vec<BinReport>,

    /// Number of items supplied by the caller.
    pub requested_items: usize,

    /// Number of items after duplicate stacking.
    pub stacked_items: usize,

    /// Total volume of the items.
    pub total_volume: f64,

    /// Number of item orderings tried per bin orientation.
    pub orderings: usize,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl FitResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a report, adding the fit to the mapping if the bin was packed.
    ///
    /// A fit whose bin name is already present replaces the earlier entry in
    /// place.
    pub fn record(&mut self, report: BinReport) {
        if let Some(fit) = report.fit() {
            match self.fits.iter_mut().find(|f| f.bin_name == fit.bin_name) {
                Some(existing) => *existing = fit.clone(),
                None => self.fits.push(fit.clone()),
            }
        }
        self.reports.push(report);
    }

    /// Returns the fill ratio for `bin_name`, if it was packed.
    pub fn get(&self, bin_name: &str) -> Option<f64> {
        self.fit(bin_name).map(|f| f.fill_ratio)
    }

    /// Returns the full fit for `bin_name`, if it was packed.
    pub fn fit(&self, bin_name: &str) -> Option<&BinFit> {
        self.fits.iter().find(|f| f.bin_name == bin_name)
    }

    /// Returns true if `bin_name` was packed.
    pub fn contains(&self, bin_name: &str) -> bool {
        self.fit(bin_name).is_some()
    }

    /// Iterates `(bin name, fill ratio)` in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fits.iter().map(|f| (f.bin_name.as_str(), f.fill_ratio))
    }

    /// Number of packed bins.
    pub fn len(&self) -> usize {
        self.fits.len()
    }

    /// Returns true if no bin could take every item.
    pub fn is_empty(&self) -> bool {
        self.fits.is_empty()
    }

    /// Returns the packed bin with the highest fill ratio (first on ties).
    pub fn best(&self) -> Option<&BinFit> {
        self.fits.iter().fold(None, |best: Option<&BinFit>, f| match best {
            Some(b) if b.fill_ratio >= f.fill_ratio => Some(b),
            _ => Some(f),
        })
    }

    /// Returns the mapping keyed by bin name.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter().map(|(n, r)| (n.to_string(), r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(name: &str, ratio: f64) -> BinReport {
        BinReport {
            bin_name: name.to_string(),
            outcome: BinOutcome::Packed(BinFit {
                bin_name: name.to_string(),
                fill_ratio: ratio,
                bin_extent: Vector3::new(1.0, 1.0, 1.0),
                ordering: vec![0],
                attempts: 1,
                placements: Vec::new(),
            }),
        }
    }

    #[test]
    fn test_result_new() {
        let result = FitResult::new();
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert!(result.best().is_none());
    }

    #[test]
    fn test_record_keeps_evaluation_order() {
        let mut result = FitResult::new();
        result.record(fit("Bin2", 0.4));
        result.record(BinReport {
            bin_name: "Bin3".into(),
            outcome: BinOutcome::Skipped {
                usable_volume: 10.0,
            },
        });
        result.record(fit("Bin1", 0.8));

        let names: Vec<_> = result.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Bin2", "Bin1"]);
        assert_eq!(result.reports.len(), 3);
        assert!(!result.contains("Bin3"));
        assert_eq!(result.get("Bin1"), Some(0.8));
        assert_eq!(result.best().map(|f| f.bin_name.as_str()), Some("Bin1"));
    }

    #[test]
    fn test_duplicate_name_replaces_entry() {
        let mut result = FitResult::new();
        result.record(fit("A", 0.5));
        result.record(fit("B", 0.6));
        result.record(fit("A", 0.7));

        assert_eq!(result.len(), 2);
        assert_eq!(result.iter().next(), Some(("A", 0.7)));
        assert_eq!(result.to_map().get("B"), Some(&0.6));
    }
}
