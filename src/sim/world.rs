//! Fixed timestep simulation world
//!
//! Owns the colliders and advances them deterministically: one tick is
//! `1 / tick_rate` seconds, and `advance_to` runs ticks until simulated
//! time catches up with the requested time.

use super::broad_phase::{ContactPair, colliding_pairs};
use super::collider::{Collider, ColliderId};
use super::integrate::integrate;
use super::resolve::{resolve_impulse, settle};
use crate::error::PhysicsError;
use crate::settings::{ContactResponse, WorldSettings};
use crate::stats::MotionStats;

/// Outcome of [`PhysicsWorld::advance_to`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Ticks run by this call
    pub ticks: u32,
    /// False if the tick cap stopped the loop before reaching the target
    pub caught_up: bool,
}

/// A collection of colliders stepped at a fixed rate
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    settings: WorldSettings,
    /// Sorted by id (ids are handed out in increasing order)
    colliders: Vec<Collider>,
    ticks: u64,
    next_id: u32,
    stats: MotionStats,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self {
            settings: WorldSettings::default(),
            colliders: Vec::new(),
            ticks: 0,
            next_id: 1,
            stats: MotionStats::new(),
        }
    }
}

impl PhysicsWorld {
    pub fn new(settings: WorldSettings) -> Result<Self, PhysicsError> {
        settings.validate()?;
        log::info!(
            "Physics world: {} Hz, gravity {}, {} response",
            settings.tick_rate,
            settings.gravity,
            settings.response.as_str()
        );
        Ok(Self {
            settings,
            ..Self::default()
        })
    }

    #[inline]
    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    /// Add a collider and return the id the world assigned to it
    pub fn add(&mut self, mut collider: Collider) -> Result<ColliderId, PhysicsError> {
        let id = ColliderId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(PhysicsError::IdsExhausted)?;
        collider.set_id(id);
        log::debug!("Added {} {} at {}", collider.name(), id, collider.position);
        self.colliders.push(collider);
        Ok(id)
    }

    /// Take a collider out of the world
    pub fn remove(&mut self, id: ColliderId) -> Result<Collider, PhysicsError> {
        let index = self.index_of(id).ok_or(PhysicsError::UnknownCollider(id))?;
        self.stats.forget(id);
        Ok(self.colliders.remove(index))
    }

    fn index_of(&self, id: ColliderId) -> Option<usize> {
        self.colliders.binary_search_by_key(&id, |c| c.id()).ok()
    }

    pub fn get(&self, id: ColliderId) -> Option<&Collider> {
        self.index_of(id).map(|i| &self.colliders[i])
    }

    pub fn get_mut(&mut self, id: ColliderId) -> Option<&mut Collider> {
        self.index_of(id).map(|i| &mut self.colliders[i])
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Simulated seconds so far, derived from the tick count
    #[inline]
    pub fn time(&self) -> f64 {
        self.ticks as f64 / self.settings.tick_rate as f64
    }

    /// Ticks run so far
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn stats(&self) -> &MotionStats {
        &self.stats
    }

    /// Supported pairs overlapping in the current state
    pub fn colliding_pairs(&self) -> Result<Vec<ContactPair>, PhysicsError> {
        colliding_pairs(&self.colliders)
    }

    /// Advance the world by one fixed timestep
    ///
    /// Returns the number of contacts handled during the tick.
    pub fn tick(&mut self) -> Result<usize, PhysicsError> {
        let dt = self.settings.delta_time();

        let touching = match self.settings.response {
            ContactResponse::Impulse => self.tick_impulse(dt)?,
            ContactResponse::Settle => self.tick_settle(dt)?,
        };

        for collider in &self.colliders {
            self.stats.record(collider, touching.contains(&collider.id()));
        }

        self.ticks += 1;
        Ok(touching.len())
    }

    /// Integrate everything, then resolve every colliding pair found in that
    /// post-integration state. Returns the ids involved in a contact.
    fn tick_impulse(&mut self, dt: f32) -> Result<Vec<ColliderId>, PhysicsError> {
        let gravity = self.settings.gravity;
        for collider in &mut self.colliders {
            integrate(collider, gravity, dt);
        }

        let pairs = colliding_pairs(&self.colliders)?;
        let mut touching = Vec::with_capacity(pairs.len() * 2);
        for pair in &pairs {
            let (a, b) = self.pair_mut(pair)?;
            if resolve_impulse(a, b)? {
                log::trace!("Tick {}: resolved {} / {}", self.ticks, pair.first, pair.second);
            }
            touching.push(pair.first);
            touching.push(pair.second);
        }
        self.stats.add_contacts(pairs.len());

        touching.sort_unstable();
        touching.dedup();
        Ok(touching)
    }

    /// Settle each movable collider against all the others, in id order
    fn tick_settle(&mut self, dt: f32) -> Result<Vec<ColliderId>, PhysicsError> {
        let gravity = self.settings.gravity;
        let mut touching = Vec::new();

        for i in 0..self.colliders.len() {
            let mut body = self.colliders[i];
            if body.mass().is_infinite() {
                continue;
            }

            let obstacles: Vec<&Collider> = self
                .colliders
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, c)| c)
                .collect();
            let contacts = settle(&mut body, &obstacles, gravity, dt)?;

            self.colliders[i] = body;
            if contacts > 0 {
                touching.push(body.id());
                self.stats.add_contacts(contacts);
            }
        }

        Ok(touching)
    }

    /// Mutable access to both colliders of a pair (first id is lower, so it
    /// is stored first)
    fn pair_mut(
        &mut self,
        pair: &ContactPair,
    ) -> Result<(&mut Collider, &mut Collider), PhysicsError> {
        let i = self
            .index_of(pair.first)
            .ok_or(PhysicsError::UnknownCollider(pair.first))?;
        let j = self
            .index_of(pair.second)
            .ok_or(PhysicsError::UnknownCollider(pair.second))?;
        let (head, tail) = self.colliders.split_at_mut(j);
        Ok((&mut head[i], &mut tail[0]))
    }

    /// Tick until simulated time reaches `target`
    ///
    /// Without `max_ticks_per_advance` this loop is unbounded: a target far
    /// ahead of the current time runs every tick in between.
    pub fn advance_to(&mut self, target: f64) -> Result<Advance, PhysicsError> {
        let cap = self.settings.max_ticks_per_advance;
        let mut ticks = 0;

        while self.time() < target {
            if cap.is_some_and(|cap| ticks >= cap) {
                log::warn!(
                    "Tick cap of {} reached at t={:.4}s (target {:.4}s)",
                    ticks,
                    self.time(),
                    target
                );
                return Ok(Advance {
                    ticks,
                    caught_up: false,
                });
            }
            self.tick()?;
            ticks += 1;
        }

        Ok(Advance {
            ticks,
            caught_up: true,
        })
    }
}
