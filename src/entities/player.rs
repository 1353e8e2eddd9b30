use crate::input::Controls;
use crate::shape::{self, Shape};
use crate::vector::Vector3;

use super::{Model, Rgba, ShotModel};

const START: Vector3 = Vector3::new(0.0, 0.0, -180.0);
const SIZE: f64 = 25.0;
const COLOR: Rgba = Rgba::new(0, 100, 255, 0.2);

/// Velocity added per frame while a direction is held.
const ACCELERATION: f64 = 3.0;
/// Velocity kept from one frame to the next.
const DAMPING: f64 = 0.9;

// Flight envelope around the route axis.
const X_LIMIT: f64 = 250.0;
const Y_LIMIT: f64 = 180.0;

/// Frames to wait after a shot before the next one.
const SHOT_COOLDOWN: u32 = 10;

/// The fighter the player steers.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerModel {
    position: Vector3,
    velocity: Vector3,
    angle: Vector3,
    frame: u32,
    frames_until_next_shot: u32,
}

impl PlayerModel {
    pub fn new() -> Self {
        Self::at(START)
    }

    pub fn at(position: Vector3) -> Self {
        Self {
            position,
            velocity: Vector3::zero(),
            angle: Vector3::zero(),
            frame: 0,
            frames_until_next_shot: 0,
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }
}

impl Default for PlayerModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for PlayerModel {
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
        self.velocity
    }

    fn shape(&self) -> Shape {
        Shape::join([
            // the fighter
            shape::cube(Vector3::zero(), 25.0),
            shape::cube(Vector3::new(25.0, 0.0, 12.5), 12.5),
            shape::cube(Vector3::new(-25.0, 0.0, 12.5), 12.5),
            // the reticle
            shape::cuboid(Vector3::new(0.0, 0.0, -400.0), Vector3::new(50.0, 10.0, 10.0)),
            shape::cuboid(Vector3::new(0.0, 0.0, -400.0), Vector3::new(10.0, 50.0, 10.0)),
        ])
    }

    fn color(&self) -> Rgba {
        COLOR
    }

    fn advance(&self, controls: &Controls) -> Self {
        let mut thrust = Vector3::zero();
        if controls.right {
            thrust.x += ACCELERATION;
        }
        if controls.left {
            thrust.x -= ACCELERATION;
        }
        if controls.up {
            thrust.y += ACCELERATION;
        }
        if controls.down {
            thrust.y -= ACCELERATION;
        }
        let velocity = (self.velocity + thrust).scale(DAMPING);

        let moved = self.position + velocity;
        let position = Vector3::new(
            moved.x.clamp(-X_LIMIT, X_LIMIT),
            moved.y.clamp(-Y_LIMIT, Y_LIMIT),
            moved.z,
        );

        // banks with the velocity, plus a slow sway
        let sway = 0.03 * (0.1 * f64::from(self.frame)).sin();
        let angle = Vector3::new(0.016 * velocity.y, -0.010 * velocity.x, -0.010 * velocity.x + sway);

        Self {
            position,
            velocity,
            angle,
            frame: self.frame + 1,
            frames_until_next_shot: self.frames_until_next_shot,
        }
    }

    fn shoot(&self, _target: Option<Vector3>, controls: &Controls) -> (Self, Option<ShotModel>) {
        if self.frames_until_next_shot > 0 {
            let cooling = Self {
                frames_until_next_shot: self.frames_until_next_shot - 1,
                ..self.clone()
            };
            return (cooling, None);
        }

        if !controls.fire {
            return (self.clone(), None);
        }

        let fired = Self {
            frames_until_next_shot: SHOT_COOLDOWN,
            ..self.clone()
        };
        let shot = ShotModel::new(self.position, self.angle, COLOR);
        (fired, Some(shot))
    }
}
