//! Placement of an item inside a bin.

use crate::aabb::Aabb3D;
use crate::geometry::{Axis, Pose};
use nalgebra::Vector3;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A committed item placement: which item, in which pose, where.
///
/// Placements are plain values held by a bin. The item they refer to is
/// never mutated, so discarding an attempt needs no rollback.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Index of the item in the candidate list the bin was packed from.
    pub item_index: usize,

    /// Name of the placed item.
    pub name: String,

    /// Pose the item was committed in.
    pub pose: Pose,

    /// Min corner of the placed box.
    pub position: Vector3<f64>,

    /// Oriented extent (dimensions after applying the pose).
    pub extent: Vector3<f64>,

    /// Weight of the item.
    pub weight: f64,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(
        item_index: usize,
        name: impl Into<String>,
        pose: Pose,
        position: Vector3<f64>,
        extent: Vector3<f64>,
        weight: f64,
    ) -> Self {
        Self {
            item_index,
            name: name.into(),
            pose,
            position,
            extent,
            weight,
        }
    }

    /// Returns the placed bounding box.
    pub fn bounding_box(&self) -> Aabb3D {
        Aabb3D::new(self.position, self.extent)
    }

    /// Returns true if this placement overlaps `other`.
    pub fn collides(&self, other: &Placement) -> bool {
        self.bounding_box().collides(&other.bounding_box())
    }

    /// Returns the point on the far face along `axis` that shares this
    /// placement's other two coordinates.
    pub fn anchor(&self, axis: Axis) -> Vector3<f64> {
        self.position + axis.offset(self.extent[axis.index()])
    }

    /// Returns the volume of the placed box.
    pub fn volume(&self) -> f64 {
        self.bounding_box().volume()
    }
}

/// Summary statistics for a set of placements.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Total placed volume.
    pub volume: f64,
    /// Total placed weight.
    pub weight: f64,
    /// Number of placements per pose index.
    pub pose_distribution: HashMap<u8, usize>,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[Placement]) -> Self {
        let mut stats = Self {
            count: placements.len(),
            ..Default::default()
        };

        for p in placements {
            stats.volume += p.volume();
            stats.weight += p.weight;
            *stats.pose_distribution.entry(p.pose.index()).or_insert(0) += 1;
        }

        stats
    }
}
