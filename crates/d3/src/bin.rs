//! Containers (bins) and single-item placement.

use crate::item::Item;
use boxfit_core::{fits_within, Error, Placement, Pose, Result};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular container with volume and weight limits.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bin {
    /// Bin name, used as the key in fit results.
    name: String,

    /// Inner extents along x, y, z.
    dimensions: Vector3<f64>,

    /// Fraction of the volume the items may use, in (0, 1].
    filling_ratio: f64,

    /// Maximum total weight of accepted items.
    max_weight: f64,

    /// Accepted placements in acceptance order.
    placements: Vec<Placement>,
}

impl Bin {
    /// Creates an empty bin.
    pub fn new(
        name: impl Into<String>,
        width: f64,
        height: f64,
        depth: f64,
        filling_ratio: f64,
        max_weight: f64,
    ) -> Self {
        Self {
            name: name.into(),
            dimensions: Vector3::new(width, height, depth),
            filling_ratio,
            max_weight,
            placements: Vec::new(),
        }
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the extents (width, height, depth).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the filling ratio.
    pub fn filling_ratio(&self) -> f64 {
        self.filling_ratio
    }

    /// Returns the weight limit.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Returns the volume the items are allowed to need.
    pub fn usable_volume(&self) -> f64 {
        self.volume() * self.filling_ratio
    }

    /// Returns the accepted placements.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Consumes the bin, returning its placements.
    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }

    /// Returns the number of accepted items.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Clears all accepted placements.
    pub fn reset(&mut self) {
        self.placements.clear();
    }

    /// Returns the summed weight of accepted items.
    pub fn total_weight(&self) -> f64 {
        self.placements.iter().map(|p| p.weight).sum()
    }

    /// Returns the six permutations of this bin's extents.
    ///
    /// Order: (w,h,d), (w,d,h), (h,w,d), (h,d,w), (d,w,h), (d,h,w).
    pub fn extent_permutations(&self) -> [Vector3<f64>; 6] {
        let (w, h, d) = (self.dimensions.x, self.dimensions.y, self.dimensions.z);
        [
            Vector3::new(w, h, d),
            Vector3::new(w, d, h),
            Vector3::new(h, w, d),
            Vector3::new(h, d, w),
            Vector3::new(d, w, h),
            Vector3::new(d, h, w),
        ]
    }

    /// Returns an empty copy of this bin with the given extents.
    pub fn reoriented(&self, extent: Vector3<f64>) -> Bin {
        Bin {
            name: self.name.clone(),
            dimensions: extent,
            filling_ratio: self.filling_ratio,
            max_weight: self.max_weight,
            placements: Vec::new(),
        }
    }

    /// Tries to place `item` with its min corner at `origin`.
    ///
    /// The first pose that fits the bin extents is committed; if that pose
    /// collides with an accepted item or breaks the weight limit the attempt
    /// fails without trying the remaining poses. The bin is only modified on
    /// success.
    pub fn try_place(&mut self, item_index: usize, item: &Item, origin: Vector3<f64>) -> bool {
        let Some(pose) = Pose::ALL.into_iter().find(|pose| {
            fits_within(&origin, &item.oriented_dimensions(*pose), &self.dimensions)
        }) else {
            return false;
        };

        let candidate = Placement::new(
            item_index,
            item.name(),
            pose,
            origin,
            item.oriented_dimensions(pose),
            item.weight(),
        );

        if self.placements.iter().any(|p| p.collides(&candidate)) {
            return false;
        }

        if self.total_weight() + item.weight() > self.max_weight {
            return false;
        }

        self.placements.push(candidate);
        true
    }

    /// Checks extents and limits.
    pub fn validate(&self) -> Result<()> {
        if self
            .dimensions
            .iter()
            .any(|d| !d.is_finite() || *d <= 0.0)
        {
            return Err(Error::InvalidBin(format!(
                "All dimensions for '{}' must be positive",
                self.name
            )));
        }

        if !(self.filling_ratio > 0.0 && self.filling_ratio <= 1.0) {
            return Err(Error::InvalidBin(format!(
                "Filling ratio for '{}' must be in (0, 1], got {}",
                self.name, self.filling_ratio
            )));
        }

        if self.max_weight.is_nan() || self.max_weight < 0.0 {
            return Err(Error::InvalidBin(format!(
                "Maximum weight for '{}' cannot be negative",
                self.name
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bin() -> Bin {
        Bin::new("Bin1", 40.0, 30.0, 30.0, 1.0, 100.0)
    }

    #[test]
    fn test_single_item_at_origin() {
        let mut b = bin();
        let item = Item::new("I1", 40.0, 30.0, 15.0);
        assert!(b.try_place(0, &item, Vector3::zeros()));
        assert_eq!(b.placed_count(), 1);
        assert_eq!(b.placements()[0].pose, Pose::WidthHeightFront);
    }

    #[test]
    fn test_first_fitting_pose_is_committed() {
        // (w,h,d) overflows x; (h,w,d) is the first pose that fits.
        let mut b = Bin::new("B", 30.0, 40.0, 15.0, 1.0, 100.0);
        let item = Item::new("I1", 40.0, 30.0, 15.0);
        assert!(b.try_place(0, &item, Vector3::zeros()));
        assert_eq!(b.placements()[0].pose, Pose::HeightWidthFront);
        assert_eq!(b.placements()[0].extent, Vector3::new(30.0, 40.0, 15.0));
    }

    #[test]
    fn test_no_pose_retry_after_collision() {
        let mut b = Bin::new("B", 20.0, 20.0, 10.0, 1.0, 100.0);
        let cube = Item::new("C", 10.0, 10.0, 10.0);
        assert!(b.try_place(0, &cube, Vector3::new(10.0, 0.0, 0.0)));

        // (20,5,10) fits the bin but hits the cube. (5,20,10) would have been
        // free, yet it is never tried.
        let plank = Item::new("P", 20.0, 5.0, 10.0);
        let before = b.placements().to_vec();
        assert!(!b.try_place(1, &plank, Vector3::zeros()));
        assert_eq!(b.placements(), &before[..]);

        let mut empty = Bin::new("B", 20.0, 20.0, 10.0, 1.0, 100.0);
        assert!(empty.try_place(1, &plank, Vector3::zeros()));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut b = bin();
        let item = Item::new("big", 50.0, 50.0, 50.0);
        assert!(!b.try_place(0, &item, Vector3::zeros()));
        assert_eq!(b.placed_count(), 0);
    }

    #[test]
    fn test_weight_limit() {
        let mut b = Bin::new("B", 100.0, 100.0, 100.0, 1.0, 10.0);
        let heavy = Item::new("H", 10.0, 10.0, 10.0).with_weight(6.0);
        assert!(b.try_place(0, &heavy, Vector3::zeros()));
        assert!(!b.try_place(1, &heavy, Vector3::new(10.0, 0.0, 0.0)));
        assert_relative_eq!(b.total_weight(), 6.0);

        let light = Item::new("L", 10.0, 10.0, 10.0).with_weight(4.0);
        assert!(b.try_place(2, &light, Vector3::new(10.0, 0.0, 0.0)));
        assert_relative_eq!(b.total_weight(), 10.0);
    }

    #[test]
    fn test_reset() {
        let mut b = bin();
        let item = Item::new("I1", 10.0, 10.0, 10.0).with_weight(1.0);
        assert!(b.try_place(0, &item, Vector3::zeros()));
        b.reset();
        assert_eq!(b.placed_count(), 0);
        assert_eq!(b.total_weight(), 0.0);
    }

    #[test]
    fn test_extent_permutations() {
        let b = Bin::new("B", 1.0, 2.0, 3.0, 1.0, 0.0);
        let perms = b.extent_permutations();
        assert_eq!(perms[0], Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(perms[1], Vector3::new(1.0, 3.0, 2.0));
        assert_eq!(perms[5], Vector3::new(3.0, 2.0, 1.0));
        for p in perms {
            assert_relative_eq!(p.x * p.y * p.z, 6.0);
        }
        let r = b.reoriented(perms[3]);
        assert_eq!(r.name(), "B");
        assert_eq!(*r.dimensions(), Vector3::new(2.0, 3.0, 1.0));
    }

    #[test]
    fn test_validation() {
        assert!(bin().validate().is_ok());
        assert!(Bin::new("z", 0.0, 1.0, 1.0, 1.0, 1.0).validate().is_err());
        assert!(Bin::new("r", 1.0, 1.0, 1.0, 0.0, 1.0).validate().is_err());
        assert!(Bin::new("r", 1.0, 1.0, 1.0, 1.5, 1.0).validate().is_err());
        assert!(Bin::new("w", 1.0, 1.0, 1.0, 1.0, -1.0).validate().is_err());
        assert!(Bin::new("w", 1.0, 1.0, 1.0, 1.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_usable_volume() {
        let b = Bin::new("B", 10.0, 10.0, 10.0, 0.8, 0.0);
        assert_relative_eq!(b.usable_volume(), 800.0);
    }
}
