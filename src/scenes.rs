//! Ready-made worlds
//!
//! The three drop tests used to check the engine end to end, plus a seeded
//! scatter of bodies for stress and determinism runs.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::PhysicsError;
use crate::settings::{ContactResponse, WorldSettings};
use crate::sim::{Collider, ColliderId, PhysicsWorld};

/// Height the drop tests start from
pub const DROP_HEIGHT: f32 = 40.0;

/// A world plus the collider worth watching
#[derive(Debug, Clone)]
pub struct Scene {
    pub name: &'static str,
    pub world: PhysicsWorld,
    pub subject: ColliderId,
}

fn drop_world(response: ContactResponse) -> Result<PhysicsWorld, PhysicsError> {
    PhysicsWorld::new(WorldSettings::with_response(response))
}

/// Unit cube dropped from y=10 onto a plane at y=0
pub fn cube_on_plane(response: ContactResponse) -> Result<Scene, PhysicsError> {
    let mut world = drop_world(response)?;
    world.add(Collider::plane(0.0))?;
    let subject = world.add(Collider::cuboid(Vec3::new(0.0, 10.0, 0.0), 1.0, Vec3::ZERO)?)?;
    Ok(Scene {
        name: "cube on plane",
        world,
        subject,
    })
}

/// Sphere dropped onto a sphere held in place at y=5
pub fn sphere_on_sphere(response: ContactResponse) -> Result<Scene, PhysicsError> {
    let mut world = drop_world(response)?;
    world.add(Collider::sphere(Vec3::new(0.0, 5.0, 0.0), 2.0, Vec3::ZERO)?.with_gravity(false))?;
    let subject = world.add(Collider::sphere(Vec3::new(0.0, DROP_HEIGHT, 0.0), 2.0, Vec3::ZERO)?)?;
    Ok(Scene {
        name: "sphere on sphere",
        world,
        subject,
    })
}

/// Sphere dropped onto a plane at y=0
pub fn sphere_on_plane(response: ContactResponse) -> Result<Scene, PhysicsError> {
    let mut world = drop_world(response)?;
    world.add(Collider::plane(0.0))?;
    let subject = world.add(Collider::sphere(Vec3::new(0.0, DROP_HEIGHT, 0.0), 2.0, Vec3::ZERO)?)?;
    Ok(Scene {
        name: "sphere on plane",
        world,
        subject,
    })
}

/// All drop tests, in a fixed order
pub fn drop_tests(response: ContactResponse) -> Result<Vec<Scene>, PhysicsError> {
    Ok(vec![
        cube_on_plane(response)?,
        sphere_on_sphere(response)?,
        sphere_on_plane(response)?,
    ])
}

/// `count` spheres and cubes at random spots above a ground plane
///
/// The same seed always yields the same world.
pub fn scatter(
    seed: u64,
    count: usize,
    response: ContactResponse,
) -> Result<PhysicsWorld, PhysicsError> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut world = drop_world(response)?;
    world.add(Collider::plane(0.0))?;

    for _ in 0..count {
        let position = Vec3::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(2.0..30.0),
            rng.random_range(-10.0..10.0),
        );
        let velocity = Vec3::new(
            rng.random_range(-2.0..2.0),
            rng.random_range(-2.0..2.0),
            rng.random_range(-2.0..2.0),
        );
        let size: f32 = rng.random_range(0.5..2.0);
        let restitution: f32 = rng.random_range(0.0..=1.0);
        let mass: f32 = rng.random_range(0.5..5.0);

        let body = if rng.random_bool(0.5) {
            Collider::sphere(position, size, velocity)?
        } else {
            Collider::cuboid(position, size, velocity)?
        };
        world.add(body.with_mass(mass)?.with_restitution(restitution)?)?;
    }

    log::debug!("Scattered {} bodies with seed {}", count, seed);
    Ok(world)
}
