//! Error types
//!
//! Every error here is a usage error surfaced immediately. Nothing is retried.

use glam::Vec3;
use thiserror::Error;

use crate::sim::{ColliderId, ShapeKind};

/// Errors raised by collider construction, narrow-phase dispatch and the world
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Narrow phase invoked on a shape pair with no test
    #[error("Collision between {first} and {second} is not implemented")]
    UnsupportedPair { first: ShapeKind, second: ShapeKind },

    /// Ellipsoids are not supported
    #[error("Sphere size must be uniform on all axes, got {0}")]
    NonUniformSphere(Vec3),

    #[error("Collider size must be positive and finite, got {0}")]
    InvalidSize(Vec3),

    #[error("Mass must be greater than zero, got {0}")]
    InvalidMass(f32),

    #[error("Restitution must be within [0, 1], got {0}")]
    InvalidRestitution(f32),

    #[error("Tick rate must be positive and finite, got {0}")]
    InvalidTickRate(f32),

    #[error("No collider with id {0}")]
    UnknownCollider(ColliderId),

    #[error("No collider ids left in this world")]
    IdsExhausted,
}

/// Errors raised while loading or saving [`crate::WorldSettings`]
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(#[from] PhysicsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_pair_message() {
        let err = PhysicsError::UnsupportedPair {
            first: ShapeKind::Cuboid,
            second: ShapeKind::Sphere,
        };
        assert_eq!(
            err.to_string(),
            "Collision between Cuboid and Sphere is not implemented"
        );
    }
}
