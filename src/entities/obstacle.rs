use crate::input::Controls;
use crate::shape::{self, Shape};
use crate::vector::Vector3;

use super::{Model, Rgba};

const VELOCITY: Vector3 = Vector3::new(0.0, 0.0, 15.0);
const COLOR: Rgba = Rgba::new(0, 0, 0, 0.1);

/// Height of the ground plane the buildings stand on.
const GROUND_Y: f64 = -200.0;
const BUILDING_FOOTPRINT: f64 = 100.0;

/// A static box the player must avoid.
#[derive(Clone, Debug, PartialEq)]
pub struct ObstacleModel {
    position: Vector3,
    size: Vector3,
}

impl ObstacleModel {
    pub fn new(position: Vector3, size: Vector3) -> Self {
        Self { position, size }
    }

    /// A building of `height` standing on the ground at (`x`, `z`).
    pub fn building(x: f64, z: f64, height: f64) -> Self {
        let position = Vector3::new(x, height / 2.0 + GROUND_Y, z);
        let size = Vector3::new(BUILDING_FOOTPRINT, height, BUILDING_FOOTPRINT);
        Self::new(position, size)
    }

    pub(crate) fn translated(self, offset: Vector3) -> Self {
        Self {
            position: self.position + offset,
            ..self
        }
    }
}

impl Model for ObstacleModel {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn size(&self) -> Vector3 {
        self.size
    }

    fn angle(&self) -> Vector3 {
        Vector3::zero()
    }

    fn velocity(&self) -> Vector3 {
        VELOCITY
    }

    fn shape(&self) -> Shape {
        shape::cuboid(Vector3::zero(), self.size)
    }

    fn color(&self) -> Rgba {
        COLOR
    }

    fn advance(&self, _controls: &Controls) -> Self {
        Self {
            position: self.position + VELOCITY,
            size: self.size,
        }
    }
}
