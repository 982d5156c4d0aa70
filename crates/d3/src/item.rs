//! Cuboid items to be packed.

use boxfit_core::{Aabb3D, Error, Pose, Result};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular cuboid item.
///
/// Dimensions, weight and name are fixed at construction. The pose and
/// position are the item's initial trial state; the packer never writes
/// them back, it records [`boxfit_core::Placement`] values instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Item name.
    name: String,

    /// Dimensions (width, height, depth).
    dimensions: Vector3<f64>,

    /// Weight, counted against the bin's weight limit.
    weight: f64,

    /// Initial pose.
    pose: Pose,

    /// Initial position (min corner).
    position: Vector3<f64>,

    /// Whether this item was produced by duplicate stacking.
    synthetic: bool,
}

impl Item {
    /// Creates a weightless item at the origin in the initial pose.
    pub fn new(name: impl Into<String>, width: f64, height: f64, depth: f64) -> Self {
        Self {
            name: name.into(),
            dimensions: Vector3::new(width, height, depth),
            weight: 0.0,
            pose: Pose::default(),
            position: Vector3::zeros(),
            synthetic: false,
        }
    }

    /// Creates a zero-weight composite item produced by stacking.
    pub(crate) fn composite(name: impl Into<String>, dimensions: Vector3<f64>) -> Self {
        Self {
            synthetic: true,
            ..Self::new(name, dimensions.x, dimensions.y, dimensions.z)
        }
    }

    /// Sets the weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the initial pose.
    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    /// Sets the initial position.
    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = Vector3::new(x, y, z);
        self
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dimensions (width, height, depth).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the depth.
    pub fn depth(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the initial pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Returns the initial position.
    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    /// Returns true for composites produced by stacking.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    /// Returns the volume. Independent of pose.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Returns the (x, y, z) extents of this item in `pose`.
    pub fn oriented_dimensions(&self, pose: Pose) -> Vector3<f64> {
        pose.orient(self.dimensions.x, self.dimensions.y, self.dimensions.z)
    }

    /// Returns the box occupied at the initial pose and position.
    pub fn bounding_box(&self) -> Aabb3D {
        Aabb3D::new(self.position, self.oriented_dimensions(self.pose))
    }

    /// Returns the grouping key: name plus exact dimensions.
    pub fn key(&self) -> ItemKey {
        ItemKey {
            name: self.name.clone(),
            dimensions: [
                self.dimensions.x.to_bits(),
                self.dimensions.y.to_bits(),
                self.dimensions.z.to_bits(),
            ],
        }
    }

    /// Checks dimensions and weight.
    pub fn validate(&self) -> Result<()> {
        if self
            .dimensions
            .iter()
            .any(|d| !d.is_finite() || *d <= 0.0)
        {
            return Err(Error::InvalidItem(format!(
                "All dimensions for '{}' must be positive",
                self.name
            )));
        }

        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::InvalidItem(format!(
                "Weight for '{}' cannot be negative",
                self.name
            )));
        }

        Ok(())
    }
}

/// Identity used to group duplicate items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    name: String,
    dimensions: [u64; 3],
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_item_volume() {
        let item = Item::new("I1", 40.0, 30.0, 15.0);
        assert_relative_eq!(item.volume(), 18000.0);
        for pose in Pose::ALL {
            let d = item.oriented_dimensions(pose);
            assert_relative_eq!(d.x * d.y * d.z, item.volume());
        }
    }

    #[test]
    fn test_defaults() {
        let item = Item::new("I1", 1.0, 2.0, 3.0);
        assert_eq!(item.weight(), 0.0);
        assert_eq!(item.pose(), Pose::WidthHeightFront);
        assert_eq!(*item.position(), Vector3::zeros());
        assert!(!item.is_synthetic());
    }

    #[test]
    fn test_bounding_box_uses_initial_state() {
        let item = Item::new("I1", 1.0, 2.0, 3.0)
            .with_pose(Pose::DepthHeightFront)
            .with_position(5.0, 0.0, 0.0);
        let bb = item.bounding_box();
        assert_eq!(bb.extent, Vector3::new(3.0, 2.0, 1.0));
        assert_eq!(bb.max(), Vector3::new(8.0, 2.0, 1.0));
    }

    #[test]
    fn test_key_groups_by_name_and_dimensions() {
        let a = Item::new("A", 1.0, 2.0, 3.0).with_weight(4.0);
        let b = Item::new("A", 1.0, 2.0, 3.0);
        let c = Item::new("A", 1.0, 3.0, 2.0);
        let d = Item::new("B", 1.0, 2.0, 3.0);
        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
        assert_ne!(a.key(), d.key());
    }

    #[test]
    fn test_validation() {
        assert!(Item::new("ok", 1.0, 1.0, 1.0).validate().is_ok());
        assert!(Item::new("neg", -1.0, 1.0, 1.0).validate().is_err());
        assert!(Item::new("zero", 1.0, 0.0, 1.0).validate().is_err());
        assert!(Item::new("nan", 1.0, f64::NAN, 1.0).validate().is_err());
        assert!(Item::new("w", 1.0, 1.0, 1.0)
            .with_weight(-2.0)
            .validate()
            .is_err());
    }
}
