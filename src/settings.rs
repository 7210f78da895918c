//! World settings
//!
//! Persisted as JSON so a scene can be rerun with the same configuration.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_TICK_RATE, EARTH_GRAVITY_VECTOR};
use crate::error::{PhysicsError, SettingsError};

/// How a world turns detected contacts into motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ContactResponse {
    /// Integrate everything, then resolve colliding pairs with impulses
    #[default]
    Impulse,
    /// Move bodies one at a time and park them on the surfaces they hit
    Settle,
}

impl ContactResponse {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactResponse::Impulse => "Impulse",
            ContactResponse::Settle => "Settle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "impulse" => Some(ContactResponse::Impulse),
            "settle" | "snap" => Some(ContactResponse::Settle),
            _ => None,
        }
    }
}

/// Simulation settings for a [`crate::PhysicsWorld`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSettings {
    /// Fixed ticks per simulated second
    pub tick_rate: f32,
    /// Acceleration applied to gravity-affected colliders
    pub gravity: Vec3,
    /// Contact response used by `tick`
    #[serde(default)]
    pub response: ContactResponse,
    /// Upper bound on ticks run by a single `advance_to` (None = unbounded)
    #[serde(default)]
    pub max_ticks_per_advance: Option<u32>,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            gravity: EARTH_GRAVITY_VECTOR,
            response: ContactResponse::Impulse,
            max_ticks_per_advance: None,
        }
    }
}

impl WorldSettings {
    /// Default settings with the given contact response
    pub fn with_response(response: ContactResponse) -> Self {
        Self {
            response,
            ..Self::default()
        }
    }

    /// Length of one tick in seconds
    #[inline]
    pub fn delta_time(&self) -> f32 {
        1.0 / self.tick_rate
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(PhysicsError::InvalidTickRate(self.tick_rate));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded world settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("World settings saved to {}", path.display());
        Ok(())
    }
}
