//! Per-collider motion statistics
//!
//! Updated by the world after every tick; serializable for reports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sim::{Collider, ColliderId};

/// Statistics for a single collider
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColliderStats {
    /// Highest speed observed at the end of a tick
    pub max_speed: f32,
    /// Ticks that ended with this collider in at least one contact
    pub contact_ticks: u64,
}

/// Statistics for every collider a world has ticked
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionStats {
    pub entries: BTreeMap<ColliderId, ColliderStats>,
    /// Total contacts handled across all ticks
    pub contacts: u64,
}

impl MotionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the end-of-tick state of one collider
    pub fn record(&mut self, collider: &Collider, in_contact: bool) {
        let entry = self.entries.entry(collider.id()).or_default();
        entry.max_speed = entry.max_speed.max(collider.speed());
        if in_contact {
            entry.contact_ticks += 1;
        }
    }

    pub fn add_contacts(&mut self, count: usize) {
        self.contacts += count as u64;
    }

    pub fn get(&self, id: ColliderId) -> Option<&ColliderStats> {
        self.entries.get(&id)
    }

    /// Max observed speed of a collider (0 if never ticked)
    pub fn max_speed(&self, id: ColliderId) -> f32 {
        self.get(id).map(|s| s.max_speed).unwrap_or(0.0)
    }

    /// Drop the entry of a removed collider
    pub fn forget(&mut self, id: ColliderId) {
        self.entries.remove(&id);
    }

    /// Fastest collider so far
    pub fn fastest(&self) -> Option<(ColliderId, f32)> {
        self.entries
            .iter()
            .map(|(id, s)| (*id, s.max_speed))
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }
}
