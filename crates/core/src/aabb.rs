//! Axis-aligned boxes and the pairwise collision test.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned box given by its min corner and oriented extent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb3D {
    /// Min corner.
    pub position: Vector3<f64>,
    /// Size along x, y, z.
    pub extent: Vector3<f64>,
}

impl Aabb3D {
    /// Creates a box from its min corner and extent.
    pub fn new(position: Vector3<f64>, extent: Vector3<f64>) -> Self {
        Self { position, extent }
    }

    /// Returns the min corner.
    pub fn min(&self) -> Vector3<f64> {
        self.position
    }

    /// Returns the max corner.
    pub fn max(&self) -> Vector3<f64> {
        self.position + self.extent
    }

    /// Returns the center point.
    pub fn center(&self) -> Vector3<f64> {
        self.position + self.extent / 2.0
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.extent.x * self.extent.y * self.extent.z
    }

    /// Returns true if the projections onto `axis` overlap.
    ///
    /// Boxes whose faces touch do not overlap.
    pub fn overlaps_on(&self, other: &Self, axis: usize) -> bool {
        let distance = (self.center()[axis] - other.center()[axis]).abs();
        distance < (self.extent[axis] + other.extent[axis]) / 2.0
    }

    /// Returns true if the two boxes overlap on all three axes.
    pub fn collides(&self, other: &Self) -> bool {
        (0..3).all(|axis| self.overlaps_on(other, axis))
    }

    /// Returns true if the box lies inside `[0, container]` on every axis.
    pub fn is_within(&self, container: &Vector3<f64>) -> bool {
        let max = self.max();
        (0..3).all(|i| self.position[i] >= 0.0 && max[i] <= container[i])
    }
}

/// Pairwise collision test between two placed boxes.
pub fn collides(a: &Aabb3D, b: &Aabb3D) -> bool {
    a.collides(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn boxed(p: (f64, f64, f64), e: (f64, f64, f64)) -> Aabb3D {
        Aabb3D::new(Vector3::new(p.0, p.1, p.2), Vector3::new(e.0, e.1, e.2))
    }

    #[test]
    fn test_overlapping_boxes_collide() {
        let a = boxed((0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
        let b = boxed((5.0, 5.0, 5.0), (10.0, 10.0, 10.0));
        assert!(collides(&a, &b));
        assert!(collides(&b, &a));
    }

    #[test]
    fn test_touching_faces_do_not_collide() {
        let a = boxed((0.0, 0.0, 0.0), (40.0, 30.0, 15.0));
        let b = boxed((0.0, 0.0, 15.0), (40.0, 30.0, 15.0));
        assert!(!collides(&a, &b));
        assert!(!collides(&b, &a));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = boxed((0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
        let b = boxed((2.0, 2.0, 20.0), (4.0, 4.0, 4.0));
        assert!(!collides(&a, &b));
    }

    #[test]
    fn test_contained_box_collides() {
        let outer = boxed((0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
        let inner = boxed((2.0, 2.0, 2.0), (1.0, 1.0, 1.0));
        assert!(collides(&outer, &inner));
    }

    #[test]
    fn test_geometry_accessors() {
        let a = boxed((1.0, 2.0, 3.0), (2.0, 4.0, 6.0));
        assert_eq!(a.max(), Vector3::new(3.0, 6.0, 9.0));
        assert_eq!(a.center(), Vector3::new(2.0, 4.0, 6.0));
        assert_relative_eq!(a.volume(), 48.0);
        assert!(a.is_within(&Vector3::new(3.0, 6.0, 9.0)));
        assert!(!a.is_within(&Vector3::new(3.0, 6.0, 8.0)));
    }
}
