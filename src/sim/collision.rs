//! Axis-aligned box overlap
//!
//! Boxes are described by their center and full extent, matching how every
//! entity in the game stores its position.

use glam::Vec2;

/// An axis-aligned box (center + full size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        overlaps(self.center, self.size, other.center, other.size)
    }
}

/// True iff the two boxes strictly overlap on both axes.
///
/// Touching edges do not count, so two zero-size boxes never overlap, even
/// when they share a center.
#[inline]
pub fn overlaps(center_a: Vec2, size_a: Vec2, center_b: Vec2, size_b: Vec2) -> bool {
    (center_a.x - center_b.x).abs() * 2.0 < size_a.x + size_b.x
        && (center_a.y - center_b.y).abs() * 2.0 < size_a.y + size_b.y
}
