//! Projecting camera-space points onto the drawing surface.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vector::{Vector2, Vector3};

pub trait Projection {
    /// Maps a camera-space point to a 2D point.
    ///
    /// Callers only pass points in front of the camera (`z < 0`).
    fn project(&self, vector: Vector3) -> Vector2;
}

/// Perspective projection onto a plane `distance` in front of the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveProjection {
    pub distance: f64,
}

impl PerspectiveProjection {
    pub fn new(distance: f64) -> Self {
        Self { distance }
    }
}

impl Projection for PerspectiveProjection {
    fn project(&self, vector: Vector3) -> Vector2 {
        let r = -self.distance / vector.z;
        Vector2::new(r * vector.x, r * vector.y)
    }
}

/// The projection strategies a configuration can name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionKind {
    pub fn build(self, distance: f64) -> Result<Box<dyn Projection>> {
        match self {
            ProjectionKind::Perspective => Ok(Box::new(PerspectiveProjection::new(distance))),
            ProjectionKind::Orthographic => Err(Error::UnimplementedCapability("orthographic projection")),
        }
    }
}
