//! Contact response
//!
//! Two responses are available:
//! - impulse: a single-iteration velocity solver with no positional correction,
//!   so overlapping bodies may stay interpenetrated across ticks
//! - settle: moves one body for a step and parks it exactly on whatever it
//!   would have sunk into, dropping the velocity along the contact normal

use glam::Vec3;

use super::collider::Collider;
use super::collision::CollisionResult;
use super::integrate::integrate;
use super::shape::{Axis, Shape};
use crate::error::PhysicsError;
use crate::{inverse_mass, reject_along};

/// Re-test a pair and apply an impulse if it is colliding and approaching
///
/// Returns true if the velocities were changed.
pub fn resolve_impulse(a: &mut Collider, b: &mut Collider) -> Result<bool, PhysicsError> {
    let contact = a.collides_with(b)?;
    if !contact.collides {
        return Ok(false);
    }
    Ok(apply_impulse(a, b, &contact))
}

/// Apply the impulse for a known contact (normal pointing from `b` toward `a`)
pub fn apply_impulse(a: &mut Collider, b: &mut Collider, contact: &CollisionResult) -> bool {
    let relative_velocity = a.velocity - b.velocity;
    let velocity_along_normal = relative_velocity.dot(contact.normal);

    // Separating or resting
    if velocity_along_normal >= 0.0 {
        return false;
    }

    let inv_mass_a = inverse_mass(a.mass());
    let inv_mass_b = inverse_mass(b.mass());
    let inv_mass_sum = inv_mass_a + inv_mass_b;
    if inv_mass_sum <= 0.0 {
        return false;
    }

    let restitution = a.restitution().min(b.restitution());
    let magnitude = -(1.0 + restitution) * velocity_along_normal / inv_mass_sum;
    let impulse = contact.normal * magnitude;

    a.velocity += impulse * inv_mass_a;
    b.velocity -= impulse * inv_mass_b;

    log::trace!(
        "impulse {} -> {} / {}: |j|={:.4}",
        a.id(),
        b.id(),
        contact.normal,
        magnitude
    );
    true
}

/// Advance `body` one step and keep it from sinking into `obstacles`
///
/// A body that already overlaps an obstacle stays where it is and loses its
/// velocity into that surface. Otherwise it is integrated, and for every
/// obstacle the new state overlaps it is placed exactly in contact.
/// Unsupported pairs are ignored. Returns the number of contacts.
pub fn settle(
    body: &mut Collider,
    obstacles: &[&Collider],
    gravity: Vec3,
    dt: f32,
) -> Result<usize, PhysicsError> {
    let obstacles: Vec<&Collider> = obstacles
        .iter()
        .copied()
        .filter(|obstacle| body.supports_collision_with(obstacle))
        .collect();

    let mut resting = 0;
    for obstacle in &obstacles {
        let contact = body.collides_with(obstacle)?;
        if contact.collides {
            body.velocity = reject_along(body.velocity, contact.normal);
            resting += 1;
        }
    }
    if resting > 0 {
        return Ok(resting);
    }

    let mut next = *body;
    integrate(&mut next, gravity, dt);

    let mut contacts = 0;
    for obstacle in &obstacles {
        let contact = next.collides_with(obstacle)?;
        if contact.collides {
            place_in_contact(&mut next, obstacle, &contact);
            next.velocity = reject_along(next.velocity, contact.normal);
            contacts += 1;
        }
    }

    *body = next;
    Ok(contacts)
}

/// Move `body` along the contact normal until it just touches `obstacle`
fn place_in_contact(body: &mut Collider, obstacle: &Collider, contact: &CollisionResult) {
    match (body.shape(), obstacle.shape()) {
        (_, Shape::Plane { axis }) => {
            let i = axis.index();
            let side = contact.normal[i].signum();
            body.position[i] = obstacle.position[i] + side * body.half_extents()[i];
        }
        (Shape::Plane { axis }, _) => {
            let i = axis.index();
            let side = contact.normal[i].signum();
            body.position[i] = obstacle.position[i] + side * obstacle.half_extents()[i];
        }
        (Shape::Sphere, Shape::Sphere) => {
            let reach = body.radius() + obstacle.radius();
            body.position = obstacle.position + contact.normal * reach;
        }
        _ => {
            let i = Axis::dominant(contact.normal).index();
            let side = contact.normal[i].signum();
            let reach = body.half_extents()[i] + obstacle.half_extents()[i];
            body.position[i] = obstacle.position[i] + side * reach;
        }
    }
}
