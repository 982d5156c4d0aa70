//! Axis and pose model for axis-aligned cuboids.

use crate::{Error, Result};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coordinate axis of the bin frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Width axis.
    X,
    /// Height axis.
    Y,
    /// Depth axis.
    Z,
}

impl Axis {
    /// All axes in anchor-search order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the vector component index for this axis.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Returns the unit step along this axis scaled by `length`.
    pub fn offset(self, length: f64) -> Vector3<f64> {
        let mut v = Vector3::zeros();
        v[self.index()] = length;
        v
    }
}

impl TryFrom<usize> for Axis {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            other => Err(Error::InvalidAxis(other)),
        }
    }
}

/// One of the six axis-aligned orientations of a cuboid.
///
/// Each pose names which of the item's (width, height, depth) lands on the
/// bin's x, y and z axes. The variant order is the order in which placement
/// tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Pose {
    /// (w, h, d): the initial orientation.
    #[default]
    WidthHeightFront,
    /// (h, w, d)
    HeightWidthFront,
    /// (h, d, w)
    HeightDepthFront,
    /// (d, h, w)
    DepthHeightFront,
    /// (d, w, h)
    DepthWidthFront,
    /// (w, d, h)
    WidthDepthFront,
}

impl Pose {
    /// All poses in placement-attempt order.
    pub const ALL: [Pose; 6] = [
        Pose::WidthHeightFront,
        Pose::HeightWidthFront,
        Pose::HeightDepthFront,
        Pose::DepthHeightFront,
        Pose::DepthWidthFront,
        Pose::WidthDepthFront,
    ];

    /// Returns the pose index in `0..6`.
    pub fn index(self) -> u8 {
        match self {
            Pose::WidthHeightFront => 0,
            Pose::HeightWidthFront => 1,
            Pose::HeightDepthFront => 2,
            Pose::DepthHeightFront => 3,
            Pose::DepthWidthFront => 4,
            Pose::WidthDepthFront => 5,
        }
    }

    /// Maps (width, height, depth) onto the (x, y, z) extents for this pose.
    pub fn orient(self, width: f64, height: f64, depth: f64) -> Vector3<f64> {
        let (w, h, d) = (width, height, depth);
        match self {
            Pose::WidthHeightFront => Vector3::new(w, h, d),
            Pose::HeightWidthFront => Vector3::new(h, w, d),
            Pose::HeightDepthFront => Vector3::new(h, d, w),
            Pose::DepthHeightFront => Vector3::new(d, h, w),
            Pose::DepthWidthFront => Vector3::new(d, w, h),
            Pose::WidthDepthFront => Vector3::new(w, d, h),
        }
    }
}

impl TryFrom<u8> for Pose {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Pose::ALL
            .get(value as usize)
            .copied()
            .ok_or(Error::InvalidPose(value))
    }
}

/// Returns true if every component of `extent` fits inside `container`
/// when placed at `origin`.
pub fn fits_within(origin: &Vector3<f64>, extent: &Vector3<f64>, container: &Vector3<f64>) -> bool {
    (0..3).all(|i| origin[i] + extent[i] <= container[i])
}
