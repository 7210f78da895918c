//! collide3d - a small discrete-time rigid-body collision engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (shapes, narrow/broad phase, resolution, world loop)
//! - `settings`: World configuration, loadable from JSON
//! - `stats`: Per-collider motion statistics gathered while ticking
//! - `scenes`: Ready-made reference scenes
//! - `error`: Error types shared by the crate

pub mod error;
pub mod scenes;
pub mod settings;
pub mod sim;
pub mod stats;

pub use error::{PhysicsError, SettingsError};
pub use settings::{ContactResponse, WorldSettings};
pub use sim::{Collider, ColliderId, CollisionResult, PhysicsWorld, Shape, ShapeKind};
pub use stats::MotionStats;

use glam::Vec3;

/// Engine configuration constants
pub mod consts {
    use glam::Vec3;

    /// Default fixed simulation rate (ticks per second)
    pub const DEFAULT_TICK_RATE: f32 = 60.0;

    /// Standard gravity magnitude (m/s²)
    pub const EARTH_GRAVITY: f32 = 9.81;
    /// Gravity pointing down the Y axis
    pub const EARTH_GRAVITY_VECTOR: Vec3 = Vec3::new(0.0, -EARTH_GRAVITY, 0.0);

    /// Default restitution for new colliders (fully inelastic)
    pub const DEFAULT_RESTITUTION: f32 = 0.0;
    /// Default mass for new dynamic colliders
    pub const DEFAULT_MASS: f32 = 1.0;
}

/// Remove the component of `v` along the unit vector `n`
#[inline]
pub fn reject_along(v: Vec3, n: Vec3) -> Vec3 {
    v - n * v.dot(n)
}

/// Inverse mass, treating an infinite mass as immovable
#[inline]
pub fn inverse_mass(mass: f32) -> f32 {
    if mass.is_infinite() { 0.0 } else { 1.0 / mass }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_along_removes_normal_component() {
        let v = Vec3::new(3.0, -7.0, 2.0);
        let r = reject_along(v, Vec3::Y);
        assert_eq!(r, Vec3::new(3.0, 0.0, 2.0));
    }

    #[test]
    fn test_inverse_mass() {
        assert_eq!(inverse_mass(f32::INFINITY), 0.0);
        assert!((inverse_mass(4.0) - 0.25).abs() < 1e-6);
    }
}
