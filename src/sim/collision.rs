//! Narrow-phase collision tests and pair dispatch
//!
//! Each unordered shape pair has exactly one test. The dispatcher swaps the
//! arguments where needed and negates the normal, so `collides(a, b)` and
//! `collides(b, a)` always agree on overlap and depth.
//!
//! Normal convention: `collides(a, b).normal` points from `b` toward `a`,
//! i.e. the direction `a` has to move to get out of `b`.

use std::cmp::Ordering;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use super::collider::Collider;
use super::shape::{Axis, Shape};
use crate::error::PhysicsError;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionResult {
    /// Whether the colliders overlap
    pub collides: bool,
    /// Contact normal, pointing from the second collider toward the first
    pub normal: Vec3,
    /// Overlap depth along the normal (only meaningful when `collides`)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            collides: false,
            normal: Vec3::ZERO,
            penetration: 0.0,
        }
    }

    pub fn hit(normal: Vec3, penetration: f32) -> Self {
        Self {
            collides: true,
            normal,
            penetration,
        }
    }

    /// Same contact seen from the other collider
    #[inline]
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            ..self
        }
    }
}

impl From<CollisionResult> for bool {
    fn from(result: CollisionResult) -> bool {
        result.collides
    }
}

/// Run the narrow-phase test for any pair of colliders
///
/// Fails with [`PhysicsError::UnsupportedPair`] for pairs without a test
/// (plane/plane, cuboid/sphere); check `supports_collision` first.
pub fn collides(a: &Collider, b: &Collider) -> Result<CollisionResult, PhysicsError> {
    let result = match (a.shape(), b.shape()) {
        (Shape::Plane { axis }, Shape::Cuboid | Shape::Sphere) => plane_vs_solid(a, axis, b),
        (Shape::Cuboid | Shape::Sphere, Shape::Plane { axis }) => {
            plane_vs_solid(b, axis, a).flipped()
        }
        (Shape::Cuboid, Shape::Cuboid) => same_kind(a, b, cuboid_vs_cuboid),
        (Shape::Sphere, Shape::Sphere) => same_kind(a, b, sphere_vs_sphere),
        _ => {
            return Err(PhysicsError::UnsupportedPair {
                first: a.kind(),
                second: b.kind(),
            });
        }
    };
    Ok(result)
}

/// Run a same-kind test in a canonical argument order (by position, size,
/// then id) so that swapping the arguments yields an exactly negated normal.
/// Indistinguishable colliders have no contact direction: the normal is zero.
fn same_kind(
    a: &Collider,
    b: &Collider,
    test: fn(&Collider, &Collider) -> CollisionResult,
) -> CollisionResult {
    let key_a = (a.position.to_array(), a.size().to_array(), a.id());
    let key_b = (b.position.to_array(), b.size().to_array(), b.id());
    match key_a.partial_cmp(&key_b) {
        Some(Ordering::Less) => test(a, b),
        Some(Ordering::Greater) => test(b, a).flipped(),
        _ => {
            let result = test(a, b);
            CollisionResult {
                normal: Vec3::ZERO,
                ..result
            }
        }
    }
}

/// Plane against a cuboid or sphere
///
/// Overlap iff the solid's extent along the plane axis strictly brackets the
/// plane height. The contact side follows the solid's velocity along the
/// axis; with no velocity on that axis the side of its center decides.
fn plane_vs_solid(plane: &Collider, axis: Axis, solid: &Collider) -> CollisionResult {
    let i = axis.index();
    let half = solid.half_extents()[i];
    let offset = solid.position[i] - plane.position[i];

    let overlaps = offset.abs() < half;
    if !overlaps {
        return CollisionResult::miss();
    }

    let approach = solid.velocity[i];
    let from_above = if approach < 0.0 {
        true
    } else if approach > 0.0 {
        false
    } else {
        offset >= 0.0
    };

    if from_above {
        CollisionResult::hit(-axis.unit(), half - offset)
    } else {
        CollisionResult::hit(axis.unit(), half + offset)
    }
}

/// Axis-aligned box overlap; exactly touching boxes collide
fn cuboid_vs_cuboid(a: &Collider, b: &Collider) -> CollisionResult {
    let box_a = Aabb::new(a.position, a.half_extents());
    let box_b = Aabb::new(b.position, b.half_extents());

    if !box_a.overlaps(&box_b) {
        return CollisionResult::miss();
    }

    let depths = box_a.overlap_depths(&box_b);

    // Shallowest axis; X, then Y, then Z on ties
    let mut axis = Axis::X;
    for candidate in [Axis::Y, Axis::Z] {
        if depths[candidate.index()] < depths[axis.index()] {
            axis = candidate;
        }
    }

    let i = axis.index();
    let separation = b.position[i] - a.position[i];
    let normal = if separation > 0.0 {
        -axis.unit()
    } else {
        axis.unit()
    };

    CollisionResult::hit(normal, depths[i].abs())
}

/// Sphere overlap; exactly touching spheres do not collide
fn sphere_vs_sphere(a: &Collider, b: &Collider) -> CollisionResult {
    let v = a.position - b.position;
    let reach = (a.size().x + b.size().x) / 2.0;
    let dist_sq = v.length_squared();

    let overlaps = dist_sq < reach * reach;
    if !overlaps {
        return CollisionResult::miss();
    }

    let distance = dist_sq.sqrt();
    let normal = if distance > 0.0 { v / distance } else { Vec3::Y };

    CollisionResult::hit(normal, reach - distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ColliderId, ShapeKind};
    use proptest::prelude::*;

    fn cube(position: Vec3, size: impl Into<crate::sim::Size>) -> Collider {
        Collider::cuboid(position, size, Vec3::ZERO).unwrap()
    }

    fn sphere(position: Vec3, diameter: f32) -> Collider {
        Collider::sphere(position, diameter, Vec3::ZERO).unwrap()
    }

    fn hits(a: &Collider, b: &Collider) -> bool {
        collides(a, b).unwrap().into()
    }

    #[test]
    fn test_identical_cubes_collide() {
        let a = cube(Vec3::new(0.0, 10.0, 0.0), 1.0);
        assert!(hits(&a, &a));

        let cuboid = cube(Vec3::new(0.0, 10.0, 0.0), Vec3::new(3.0, 2.0, 1.0));
        assert!(hits(&cuboid, &cuboid));
    }

    #[test]
    fn test_touching_cubes_collide() {
        let a = cube(Vec3::new(0.0, 10.0, 0.0), 1.0);
        let b = cube(Vec3::new(0.0, 9.0, 0.0), 1.0);
        let result = collides(&a, &b).unwrap();
        assert!(result.collides);
        assert!(result.penetration.abs() < 1e-6);

        // Touching on each axis with mismatched extents
        let base = cube(Vec3::ZERO, Vec3::new(3.0, 2.0, 1.0));
        assert!(hits(&base, &cube(Vec3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 3.0))));
        assert!(hits(&base, &cube(Vec3::new(0.0, -2.0, 0.0), Vec3::new(1.0, 2.0, 3.0))));
        assert!(hits(&base, &cube(Vec3::new(0.0, 0.0, -2.0), Vec3::new(1.0, 2.0, 3.0))));
    }

    #[test]
    fn test_cuboid_overlap_cases() {
        let big = cube(Vec3::new(0.0, 10.0, 0.0), Vec3::new(3.0, 4.0, 5.0));
        assert!(!hits(&big, &cube(Vec3::new(0.5, 12.5, -2.0), Vec3::new(1.0, 0.99, 1.0))));
        assert!(!hits(&big, &cube(Vec3::new(0.5, 13.0, -2.0), 1.0)));
        assert!(hits(&big, &cube(Vec3::new(0.5, 11.0, -2.0), 1.0)));
        // Fully contained
        assert!(hits(&big, &cube(Vec3::new(0.5, 11.0, -2.0), 0.25)));
        assert!(hits(
            &cube(Vec3::new(0.0, 10.0, 0.0), 2.0),
            &cube(Vec3::new(0.0, 10.5, 0.0), 0.25)
        ));
    }

    #[test]
    fn test_cuboid_normal_and_penetration() {
        let a = cube(Vec3::ZERO, 1.0);
        let b = cube(Vec3::new(0.0, 0.75, 0.1), 1.0);
        let result = collides(&a, &b).unwrap();
        // Y is the shallowest axis, and b sits above a
        assert_eq!(result.normal, Vec3::NEG_Y);
        assert!((result.penetration - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_cuboid_tie_prefers_x() {
        let a = cube(Vec3::ZERO, 1.0);
        let b = cube(Vec3::new(0.5, 0.5, 0.5), 1.0);
        let result = collides(&a, &b).unwrap();
        assert_eq!(result.normal, Vec3::NEG_X);
        assert!((result.penetration - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_spheres_touching_do_not_collide() {
        let a = sphere(Vec3::ZERO, 2.0);
        let b = sphere(Vec3::new(2.0, 0.0, 0.0), 2.0);
        assert!(!hits(&a, &b));

        // Same arrangement as cubes does collide
        let ca = cube(Vec3::ZERO, 2.0);
        let cb = cube(Vec3::new(2.0, 0.0, 0.0), 2.0);
        assert!(hits(&ca, &cb));
    }

    #[test]
    fn test_sphere_normal_points_toward_first() {
        let a = sphere(Vec3::new(0.0, 1.5, 0.0), 2.0);
        let b = sphere(Vec3::ZERO, 2.0);
        let result = collides(&a, &b).unwrap();
        assert!(result.collides);
        assert!((result.normal - Vec3::Y).length() < 1e-6);
        assert!((result.penetration - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_coincident_centers_are_symmetric() {
        let small = cube(Vec3::ZERO, 1.0);
        let large = cube(Vec3::ZERO, 2.0);
        let ab = collides(&small, &large).unwrap();
        let ba = collides(&large, &small).unwrap();
        assert!(ab.collides && ba.collides);
        assert_eq!(ab.normal, -ba.normal);
        assert_ne!(ab.normal, Vec3::ZERO);
        assert_eq!(ab.penetration, ba.penetration);

        let small = sphere(Vec3::ZERO, 1.0);
        let large = sphere(Vec3::ZERO, 2.0);
        let ab = collides(&small, &large).unwrap();
        let ba = collides(&large, &small).unwrap();
        assert_eq!(ab.normal.abs(), Vec3::Y);
        assert_eq!(ab.normal, -ba.normal);
        assert!((ab.penetration - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_identical_colliders_have_no_normal() {
        let a = cube(Vec3::new(1.0, 2.0, 3.0), 1.0);
        let result = collides(&a, &a).unwrap();
        assert!(result.collides);
        assert_eq!(result.normal, Vec3::ZERO);
        assert!((result.penetration - 1.0).abs() < 1e-6);

        let s = sphere(Vec3::ZERO, 2.0);
        let result = collides(&s, &s).unwrap();
        assert!(result.collides);
        assert_eq!(result.normal, Vec3::ZERO);
    }

    #[test]
    fn test_plane_from_above() {
        let plane = Collider::plane(0.0);
        let falling = Collider::cuboid(Vec3::new(0.0, 0.3, 0.0), 1.0, Vec3::new(0.0, -2.0, 0.0)).unwrap();

        let result = collides(&plane, &falling).unwrap();
        assert!(result.collides);
        assert_eq!(result.normal, Vec3::NEG_Y);
        assert!((result.penetration - 0.2).abs() < 1e-6);

        // Seen from the cube, the plane pushes it up
        let result = collides(&falling, &plane).unwrap();
        assert_eq!(result.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_from_below() {
        let plane = Collider::plane(0.0);
        let rising = Collider::sphere(Vec3::new(0.0, -0.3, 0.0), 1.0, Vec3::new(0.0, 2.0, 0.0)).unwrap();
        let result = collides(&plane, &rising).unwrap();
        assert_eq!(result.normal, Vec3::Y);
        assert!((result.penetration - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_plane_resting_uses_center_side() {
        let plane = Collider::plane(0.0);
        let above = cube(Vec3::new(0.0, 0.25, 0.0), 1.0);
        let below = cube(Vec3::new(0.0, -0.25, 0.0), 1.0);
        assert_eq!(collides(&plane, &above).unwrap().normal, Vec3::NEG_Y);
        assert_eq!(collides(&plane, &below).unwrap().normal, Vec3::Y);
    }

    #[test]
    fn test_plane_touching_does_not_collide() {
        let plane = Collider::plane(0.0);
        assert!(!hits(&plane, &sphere(Vec3::new(0.0, 1.0, 0.0), 2.0)));
        assert!(!hits(&plane, &cube(Vec3::new(5.0, 0.5, -3.0), 1.0)));
    }

    #[test]
    fn test_plane_on_other_axis() {
        let wall = Collider::plane_on(Axis::X, 4.0);
        let ball = Collider::sphere(Vec3::new(3.5, 20.0, 0.0), 2.0, Vec3::new(1.0, 0.0, 0.0)).unwrap();
        let result = collides(&ball, &wall).unwrap();
        assert!(result.collides);
        assert_eq!(result.normal, Vec3::NEG_X);
        assert!((result.penetration - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_unsupported_pairs_error() {
        let plane = Collider::plane(0.0);
        let err = collides(&plane, &Collider::plane(1.0)).unwrap_err();
        assert_eq!(
            err,
            PhysicsError::UnsupportedPair {
                first: ShapeKind::Plane,
                second: ShapeKind::Plane
            }
        );

        let c = cube(Vec3::ZERO, 1.0);
        let s = sphere(Vec3::ZERO, 1.0);
        assert!(collides(&c, &s).is_err());
        assert!(collides(&s, &c).is_err());
        assert!(!c.supports_collision_with(&s));
    }

    fn arb_vec(range: f32) -> impl Strategy<Value = Vec3> {
        (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    fn arb_solid() -> impl Strategy<Value = Collider> {
        (0u8..3, arb_vec(3.0), 0.1f32..3.0, arb_vec(0.5).prop_map(|v| v + 1.0), arb_vec(4.0))
            .prop_map(|(kind, position, diameter, extent, velocity)| match kind {
                0 => Collider::sphere(position, diameter, velocity).unwrap(),
                1 => Collider::cuboid(position, extent, velocity).unwrap(),
                _ => {
                    let mut plane = Collider::plane(position.y);
                    plane.position = position;
                    plane
                }
            })
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(a in arb_solid(), b in arb_solid()) {
            let a = a.with_id(ColliderId(1));
            let b = b.with_id(ColliderId(2));
            prop_assume!(a.supports_collision_with(&b));

            let ab = collides(&a, &b).unwrap();
            let ba = collides(&b, &a).unwrap();
            prop_assert_eq!(ab.collides, ba.collides);
            if ab.collides {
                prop_assert_eq!(ab.penetration, ba.penetration);
                prop_assert_eq!(ab.normal, -ba.normal);
            }
        }

        #[test]
        fn prop_support_matches_dispatch(a in arb_solid(), b in arb_solid()) {
            prop_assert_eq!(a.supports_collision_with(&b), collides(&a, &b).is_ok());
        }
    }
}
