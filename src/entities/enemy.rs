use std::f64::consts::FRAC_PI_2;
use std::ops::{Range, RangeInclusive};

use crate::input::Controls;
use crate::shape::{self, Shape};
use crate::vector::Vector3;

use super::{Model, Rgba, ShotModel};

const SIZE: f64 = 25.0;
const EDGE: f64 = 30.0;
const COLOR: Rgba = Rgba::new(255, 0, 0, 0.1);

/// Depth speed toward the camera outside the hover window.
const SPEED: f64 = 15.0;
/// Yaw added per frame.
const SPIN: f64 = 0.1;

/// Frames during which the enemy holds still.
const HOVER_FRAMES: Range<u32> = 40..90;
/// Frames during which the enemy fires, one shot every `FIRE_INTERVAL`.
const FIRE_FRAMES: RangeInclusive<u32> = 50..=80;
const FIRE_INTERVAL: u32 = 10;

/// A spinning cube that flies in, hovers, fires a burst and flies past.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemyModel {
    position: Vector3,
    angle: Vector3,
    frame: u32,
}

impl EnemyModel {
    pub fn new(position: Vector3) -> Self {
        Self {
            position,
            angle: Vector3::zero(),
            frame: 0,
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub(crate) fn translated(self, offset: Vector3) -> Self {
        Self {
            position: self.position + offset,
            ..self
        }
    }

    /// Yaw and pitch that point the canonical forward vector (−z) at `target`.
    fn aim_at(&self, target: Vector3) -> Vector3 {
        let d = target - self.position;
        Vector3::new(
            d.y.atan2((d.z * d.z + d.x * d.x).sqrt()),
            -d.z.atan2(d.x) - FRAC_PI_2,
            0.0,
        )
    }
}

impl Model for EnemyModel {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn size(&self) -> Vector3 {
        Vector3::new(SIZE, SIZE, SIZE)
    }

    fn angle(&self) -> Vector3 {
        self.angle
    }

    fn velocity(&self) -> Vector3 {
        if HOVER_FRAMES.contains(&self.frame) {
            Vector3::zero()
        } else {
            Vector3::new(0.0, 0.0, SPEED)
        }
    }

    fn shape(&self) -> Shape {
        shape::cube(Vector3::zero(), EDGE)
    }

    fn color(&self) -> Rgba {
        COLOR
    }

    fn advance(&self, _controls: &Controls) -> Self {
        Self {
            position: self.position + self.velocity(),
            angle: Vector3::new(self.angle.x, self.angle.y + SPIN, self.angle.z),
            frame: self.frame + 1,
        }
    }

    fn shoot(&self, target: Option<Vector3>, _controls: &Controls) -> (Self, Option<ShotModel>) {
        let fires = FIRE_FRAMES.contains(&self.frame) && self.frame % FIRE_INTERVAL == 0;
        let shot = target
            .filter(|_| fires)
            .map(|target| ShotModel::new(self.position, self.aim_at(target), COLOR));
        (self.clone(), shot)
    }
}
