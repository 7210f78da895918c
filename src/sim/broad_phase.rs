//! Broad phase: brute-force pair enumeration
//!
//! Every ordered pair is checked (O(n²)), which is fine for scenes of a few
//! dozen colliders. Pairs are keyed by collider id, never by storage slot.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::collider::{Collider, ColliderId};
use crate::error::PhysicsError;

/// Unordered pair of colliders, stored with the lower id first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContactPair {
    pub first: ColliderId,
    pub second: ColliderId,
}

impl ContactPair {
    pub fn new(a: ColliderId, b: ColliderId) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }
}

/// All supported pairs that currently overlap, in ascending id order
pub fn colliding_pairs(colliders: &[Collider]) -> Result<Vec<ContactPair>, PhysicsError> {
    let mut pairs = BTreeSet::new();

    for (i, a) in colliders.iter().enumerate() {
        for (j, b) in colliders.iter().enumerate() {
            if i == j || !a.supports_collision_with(b) {
                continue;
            }
            if a.collides_with(b)?.collides {
                pairs.insert(ContactPair::new(a.id(), b.id()));
            }
        }
    }

    Ok(pairs.into_iter().collect())
}
