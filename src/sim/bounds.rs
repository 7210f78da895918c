//! Axis-aligned interval and box geometry
//!
//! A box is three closed intervals `[center - half, center + half]`, one per axis.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::shape::Axis;

/// Closed interval on one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    #[inline]
    pub fn around(center: f32, half: f32) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Touching endpoints count as overlapping
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.min <= other.max && self.max >= other.min
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Extent of the box along one axis
    #[inline]
    pub fn interval(&self, axis: Axis) -> Interval {
        let i = axis.index();
        Interval::around(self.center[i], self.half_extents[i])
    }

    /// True if the intervals intersect on every axis (boundary-inclusive)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| self.interval(axis).overlaps(&other.interval(axis)))
    }

    /// Per-axis overlap depth: `halfA + halfB - |centerB - centerA|`
    pub fn overlap_depths(&self, other: &Aabb) -> Vec3 {
        self.half_extents + other.half_extents - (other.center - self.center).abs()
    }
}
