//! Kinematic integration
//!
//! Displacement uses the velocity from the start of the step; the new
//! velocity is stored afterward. Changing that order changes results.

use glam::Vec3;

use super::collider::Collider;

/// Predict position and velocity after `dt` without mutating the collider
pub fn predict(collider: &Collider, gravity: Vec3, dt: f32) -> (Vec3, Vec3) {
    let acceleration = if collider.gravity { gravity } else { Vec3::ZERO };

    let initial_velocity = collider.velocity;
    let new_velocity = initial_velocity + acceleration * dt;
    let distance = initial_velocity * dt + acceleration * (dt * dt / 2.0);

    (collider.position + distance, new_velocity)
}

/// Advance a collider by one step of `dt` under `gravity`
pub fn integrate(collider: &mut Collider, gravity: Vec3, dt: f32) {
    let (position, velocity) = predict(collider, gravity, dt);
    collider.position = position;
    collider.velocity = velocity;
}
