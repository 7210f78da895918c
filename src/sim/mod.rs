//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (see `crate::scenes`)
//! - Stable iteration order (by collider ID)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod broad_phase;
pub mod collider;
pub mod collision;
pub mod integrate;
pub mod resolve;
pub mod shape;
pub mod world;

pub use bounds::{Aabb, Interval};
pub use broad_phase::{ContactPair, colliding_pairs};
pub use collider::{Collider, ColliderId, Size};
pub use collision::{CollisionResult, collides};
pub use integrate::{integrate, predict};
pub use resolve::{apply_impulse, resolve_impulse, settle};
pub use shape::{Axis, Shape, ShapeKind, supports_collision};
pub use world::{Advance, PhysicsWorld};
