//! Shape kinds and the static capability table
//!
//! Whether two kinds can be tested against each other is a property of the
//! kind pair alone, so callers can filter pairs before touching instance data.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// World axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Positive unit vector along this axis
    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Axis carrying the largest absolute component of `v` (X wins ties)
    pub fn dominant(v: Vec3) -> Axis {
        let a = v.abs();
        if a.x >= a.y && a.x >= a.z {
            Axis::X
        } else if a.y >= a.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }
}

/// Type tag of a collider, used for dispatch and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeKind {
    Plane,
    Cuboid,
    Sphere,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Plane, ShapeKind::Cuboid, ShapeKind::Sphere];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Plane => "Plane",
            ShapeKind::Cuboid => "Cuboid",
            ShapeKind::Sphere => "Sphere",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry of a collider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Infinite plane at `position[axis]`
    Plane { axis: Axis },
    /// Axis-aligned box, extents taken from the collider's size
    Cuboid,
    /// Sphere, diameter taken from the collider's size
    Sphere,
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Plane { .. } => ShapeKind::Plane,
            Shape::Cuboid => ShapeKind::Cuboid,
            Shape::Sphere => ShapeKind::Sphere,
        }
    }
}

/// Table entry for one argument order. `None` means the order is not listed.
const fn lookup(first: ShapeKind, second: ShapeKind) -> Option<bool> {
    use ShapeKind::*;
    match (first, second) {
        (Plane, Plane) => Some(false),
        (Plane, Cuboid) => Some(true),
        (Plane, Sphere) => Some(true),
        (Cuboid, Cuboid) => Some(true),
        (Cuboid, Sphere) => Some(false),
        (Sphere, Sphere) => Some(true),
        _ => None,
    }
}

/// Returns true if a narrow-phase test exists for the two kinds, in either order
pub const fn supports_collision(first: ShapeKind, second: ShapeKind) -> bool {
    match lookup(first, second) {
        Some(supported) => supported,
        None => match lookup(second, first) {
            Some(supported) => supported,
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_pairs() {
        use ShapeKind::*;
        assert!(supports_collision(Plane, Cuboid));
        assert!(supports_collision(Plane, Sphere));
        assert!(supports_collision(Cuboid, Cuboid));
        assert!(supports_collision(Sphere, Sphere));
        assert!(!supports_collision(Plane, Plane));
        assert!(!supports_collision(Cuboid, Sphere));
    }

    #[test]
    fn test_capability_is_symmetric() {
        for a in ShapeKind::ALL {
            for b in ShapeKind::ALL {
                assert_eq!(supports_collision(a, b), supports_collision(b, a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn test_dominant_axis() {
        assert_eq!(Axis::dominant(Vec3::new(0.0, -3.0, 1.0)), Axis::Y);
        assert_eq!(Axis::dominant(Vec3::new(2.0, 2.0, 2.0)), Axis::X);
        assert_eq!(Axis::dominant(Vec3::new(0.0, 1.0, -4.0)), Axis::Z);
    }
}
