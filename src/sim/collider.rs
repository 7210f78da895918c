//! Collider model
//!
//! A collider is a value type: shape, kinematics and material. The world
//! owns them and mutates them in place every tick.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionResult, collides};
use super::shape::{Axis, Shape, ShapeKind, supports_collision};
use crate::consts::{DEFAULT_MASS, DEFAULT_RESTITUTION};
use crate::error::PhysicsError;

/// Stable collider identifier, assigned by the owning world
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ColliderId(pub u32);

impl fmt::Display for ColliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Size argument accepted by the constructors: a scalar or per-axis extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size(pub Vec3);

impl From<f32> for Size {
    fn from(size: f32) -> Self {
        Size(Vec3::splat(size))
    }
}

impl From<Vec3> for Size {
    fn from(size: Vec3) -> Self {
        Size(size)
    }
}

/// A rigid body with one of the supported shapes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    id: ColliderId,
    shape: Shape,
    pub position: Vec3,
    /// Full extent per axis (diameter for spheres, unused for planes)
    size: Vec3,
    pub velocity: Vec3,
    mass: f32,
    restitution: f32,
    /// Whether gravity accelerates this collider
    pub gravity: bool,
}

impl Collider {
    fn new(shape: Shape, position: Vec3, size: Vec3, velocity: Vec3) -> Self {
        Self {
            id: ColliderId::default(),
            shape,
            position,
            size,
            velocity,
            mass: DEFAULT_MASS,
            restitution: DEFAULT_RESTITUTION,
            gravity: true,
        }
    }

    /// Horizontal plane at the given height
    pub fn plane(height: f32) -> Self {
        Self::plane_on(Axis::Y, height)
    }

    /// Plane perpendicular to `axis`. Planes are immovable by default.
    pub fn plane_on(axis: Axis, height: f32) -> Self {
        let mut plane = Self::new(Shape::Plane { axis }, axis.unit() * height, Vec3::ONE, Vec3::ZERO);
        plane.mass = f32::INFINITY;
        plane.gravity = false;
        plane
    }

    pub fn cuboid(
        position: Vec3,
        size: impl Into<Size>,
        velocity: Vec3,
    ) -> Result<Self, PhysicsError> {
        let Size(size) = size.into();
        validate_size(size)?;
        Ok(Self::new(Shape::Cuboid, position, size, velocity))
    }

    /// Sphere whose size is its diameter. Non-uniform sizes are rejected.
    pub fn sphere(
        position: Vec3,
        size: impl Into<Size>,
        velocity: Vec3,
    ) -> Result<Self, PhysicsError> {
        let Size(size) = size.into();
        validate_size(size)?;
        if size.x != size.y || size.y != size.z {
            return Err(PhysicsError::NonUniformSphere(size));
        }
        Ok(Self::new(Shape::Sphere, position, size, velocity))
    }

    pub fn with_id(mut self, id: ColliderId) -> Self {
        self.id = id;
        self
    }

    /// Set the mass. `f32::INFINITY` makes the collider immovable.
    pub fn with_mass(mut self, mass: f32) -> Result<Self, PhysicsError> {
        if mass.is_nan() || mass <= 0.0 {
            return Err(PhysicsError::InvalidMass(mass));
        }
        self.mass = mass;
        Ok(self)
    }

    pub fn with_restitution(mut self, restitution: f32) -> Result<Self, PhysicsError> {
        if !(0.0..=1.0).contains(&restitution) {
            return Err(PhysicsError::InvalidRestitution(restitution));
        }
        self.restitution = restitution;
        Ok(self)
    }

    pub fn with_gravity(mut self, gravity: bool) -> Self {
        self.gravity = gravity;
        self
    }

    #[inline]
    pub fn id(&self) -> ColliderId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: ColliderId) {
        self.id = id;
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Human-readable type tag
    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.size
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    /// Half of the full extent on each axis. Planes have no extent.
    pub fn half_extents(&self) -> Vec3 {
        match self.shape {
            Shape::Plane { .. } => Vec3::ZERO,
            Shape::Cuboid | Shape::Sphere => self.size / 2.0,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.x / 2.0
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Returns true if a narrow-phase test exists for this collider's kind and `other`'s
    pub fn supports_collision_with(&self, other: &Collider) -> bool {
        supports_collision(self.kind(), other.kind())
    }

    /// Narrow-phase test against `other`. The normal points from `other` toward `self`.
    pub fn collides_with(&self, other: &Collider) -> Result<CollisionResult, PhysicsError> {
        collides(self, other)
    }
}

fn validate_size(size: Vec3) -> Result<(), PhysicsError> {
    if !size.is_finite() || size.min_element() <= 0.0 {
        return Err(PhysicsError::InvalidSize(size));
    }
    Ok(())
}
