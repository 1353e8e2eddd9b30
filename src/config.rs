//! Game configuration, loaded from TOML.
//!
//! Every field has a default, so a file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::projection::ProjectionKind;
use crate::scenario::VisibleDistances;
use crate::vector::Vector3;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub game: LoopConfig,
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub canvas: CanvasConfig,
    pub world: WorldConfig,
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Frame loop pacing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    /// Frames per second.
    pub fps: u32,
    /// Depth travelled per frame.
    pub speed: f64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self { fps: 15, speed: 15.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Per-axis weights applied to the target's position.
    pub position_coeffs: Vector3,
    /// Per-axis weights applied to the target's angle.
    pub angle_coeffs: Vector3,
    /// Brightness gained per frame while fading in.
    pub brightness_speed: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position_coeffs: Vector3::new(0.5, 0.5, 0.0),
            angle_coeffs: Vector3::new(0.0, 0.0, -0.25),
            brightness_speed: 0.03,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub kind: ProjectionKind,
    /// Distance between the camera and the projection plane.
    pub distance: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            kind: ProjectionKind::Perspective,
            distance: 300.0,
        }
    }
}

/// Size of the virtual drawing surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Farthest depth a model may reach before it is dropped.
    pub z_limit: f64,
    pub visible_distance_obstacles: f64,
    pub visible_distance_enemies: f64,
    /// Seed for the explosion face spins.
    pub seed: u64,
}

impl WorldConfig {
    pub fn visible_distances(&self) -> VisibleDistances {
        VisibleDistances {
            obstacles: self.visible_distance_obstacles,
            enemies: self.visible_distance_enemies,
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            z_limit: -2000.0,
            visible_distance_obstacles: 2000.0,
            visible_distance_enemies: 1500.0,
            seed: 0x5747_4258,
        }
    }
}
