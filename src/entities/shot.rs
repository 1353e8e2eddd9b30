use crate::input::Controls;
use crate::shape::{self, Shape};
use crate::transform;
use crate::vector::Vector3;

use super::{Model, Rgba};

/// Velocity of a shot fired with zero angle.
const FORWARD: Vector3 = Vector3::new(0.0, 0.0, -50.0);
const SIZE: Vector3 = Vector3::new(10.0, 10.0, 50.0);

/// A projectile flying in a straight line.
#[derive(Clone, Debug, PartialEq)]
pub struct ShotModel {
    position: Vector3,
    angle: Vector3,
    velocity: Vector3,
    color: Rgba,
}

impl ShotModel {
    pub fn new(position: Vector3, angle: Vector3, color: Rgba) -> Self {
        Self {
            position,
            angle,
            velocity: transform::rotation(angle).apply(FORWARD),
            color,
        }
    }
}

impl Model for ShotModel {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn size(&self) -> Vector3 {
        SIZE
    }

    fn angle(&self) -> Vector3 {
        self.angle
    }

    fn velocity(&self) -> Vector3 {
        self.velocity
    }

    fn shape(&self) -> Shape {
        shape::cuboid(Vector3::zero(), SIZE)
    }

    fn color(&self) -> Rgba {
        self.color
    }

    fn advance(&self, _controls: &Controls) -> Self {
        Self {
            position: self.position + self.velocity,
            ..self.clone()
        }
    }
}
