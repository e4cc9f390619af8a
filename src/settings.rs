//! Simulation and demo configuration
//!
//! Loaded from JSON; every field has a default so partial files work.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Options fixed when a [`World`](crate::physics::World) is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// Sub-steps per world step (0 is treated as 1)
    pub steps: u32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            steps: crate::consts::DEFAULT_STEPS,
        }
    }
}

impl WorldSettings {
    /// Sub-step count actually used
    pub fn effective_steps(&self) -> u32 {
        if self.steps == 0 {
            log::warn!("WorldSettings: steps = 0, using 1");
            return 1;
        }
        self.steps
    }
}

/// Demo scene presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScenePreset {
    Calm,
    #[default]
    Busy,
    Crowded,
}

impl ScenePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenePreset::Calm => "Calm",
            ScenePreset::Busy => "Busy",
            ScenePreset::Crowded => "Crowded",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "calm" => Some(ScenePreset::Calm),
            "busy" => Some(ScenePreset::Busy),
            "crowded" => Some(ScenePreset::Crowded),
            _ => None,
        }
    }

    /// Number of circles spawned
    pub fn body_count(&self) -> u32 {
        match self {
            ScenePreset::Calm => 8,
            ScenePreset::Busy => 32,
            ScenePreset::Crowded => 96,
        }
    }

    /// Sub-steps per tick
    pub fn steps(&self) -> u32 {
        match self {
            ScenePreset::Calm => 1,
            ScenePreset::Busy => 2,
            ScenePreset::Crowded => 4,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Headless demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    pub preset: ScenePreset,
    /// RNG seed for the scene layout
    pub seed: u64,
    pub body_count: u32,
    /// Bodies spawn inside [-half_extent, half_extent] on both axes
    pub half_extent: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Initial speed cap, units per second
    pub max_speed: f32,
    /// Per-axis linear damping given to every body
    pub damping: f32,
    /// Tick length in milliseconds
    pub tick_ms: f32,
    pub ticks: u32,
    pub world: WorldSettings,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self::from_preset(ScenePreset::default())
    }
}

impl DemoSettings {
    /// Settings with preset-dependent counts
    pub fn from_preset(preset: ScenePreset) -> Self {
        Self {
            preset,
            seed: 12345,
            body_count: preset.body_count(),
            half_extent: 40.0,
            min_radius: 0.5,
            max_radius: 2.0,
            max_speed: 20.0,
            damping: 0.001,
            tick_ms: 1000.0 / 60.0,
            ticks: 600,
            world: WorldSettings {
                steps: preset.steps(),
            },
        }
    }

    /// Draw a spawn radius in `[min_radius, max_radius)`; `min_radius` when
    /// the range is empty
    pub fn radius_between(&self, rng: &mut impl Rng) -> f32 {
        if self.max_radius <= self.min_radius {
            self.min_radius
        } else {
            rng.random_range(self.min_radius..self.max_radius)
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }
}
