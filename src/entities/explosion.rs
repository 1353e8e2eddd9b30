use std::f64::consts::FRAC_PI_2;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::input::Controls;
use crate::shape::{self, Shape};
use crate::vector::Vector3;

use super::{Model, Rgba};

/// Frames until the explosion has faded out completely.
const EXPIRATION_FRAME: u32 = 60;

const FACE_EDGE: f64 = 30.0;
const FACE_ANGULAR_SPEED: f64 = 0.2;

const P: f64 = 15.0;
const V: f64 = 5.0;
const A: f64 = FRAC_PI_2;

// One entry per face of the shattered cube.
const INITIAL_FACE_POSITIONS: [Vector3; 6] = [
    Vector3::new(P, 0.0, 0.0),
    Vector3::new(-P, 0.0, 0.0),
    Vector3::new(0.0, P, 0.0),
    Vector3::new(0.0, -P, 0.0),
    Vector3::new(0.0, 0.0, P),
    Vector3::new(0.0, 0.0, -P),
];

const FACE_VELOCITIES: [Vector3; 6] = [
    Vector3::new(V, 0.0, 0.0),
    Vector3::new(-V, 0.0, 0.0),
    Vector3::new(0.0, V, 0.0),
    Vector3::new(0.0, -V, 0.0),
    Vector3::new(0.0, 0.0, V),
    Vector3::new(0.0, 0.0, -V),
];

const INITIAL_FACE_ANGLES: [Vector3; 6] = [
    Vector3::new(0.0, 0.0, A),
    Vector3::new(0.0, 0.0, A),
    Vector3::new(A, 0.0, 0.0),
    Vector3::new(A, 0.0, 0.0),
    Vector3::zero(),
    Vector3::zero(),
];

/// The faces of a cube scattering away from where something was destroyed.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplosionModel {
    position: Vector3,
    angle: Vector3,
    velocity: Vector3,
    color: Rgba,
    frame: u32,
    face_angular_velocities: [Vector3; 6],
}

impl ExplosionModel {
    pub fn new(position: Vector3, angle: Vector3, velocity: Vector3, color: Rgba, rng: &mut impl Rng) -> Self {
        Self {
            position,
            angle,
            velocity,
            color,
            frame: 0,
            face_angular_velocities: std::array::from_fn(|_| Vector3::random(rng).scale(FACE_ANGULAR_SPEED)),
        }
    }

    /// An explosion carrying on from `model`'s state at the moment it was destroyed.
    pub fn for_model(model: &dyn Model, rng: &mut impl Rng) -> Self {
        Self::new(model.position(), model.angle(), model.velocity(), model.color(), rng)
    }

    /// A [`ExplosionModel::for_model`] factory drawing face spins from a
    /// generator seeded with `seed`.
    pub fn factory(seed: u64) -> impl FnMut(&dyn Model) -> ExplosionModel {
        let mut rng = StdRng::seed_from_u64(seed);
        move |model: &dyn Model| Self::for_model(model, &mut rng)
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn is_faded_out(&self) -> bool {
        self.frame >= EXPIRATION_FRAME
    }
}

impl Model for ExplosionModel {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn size(&self) -> Vector3 {
        Vector3::new(FACE_EDGE, FACE_EDGE, FACE_EDGE)
    }

    fn angle(&self) -> Vector3 {
        self.angle
    }

    fn velocity(&self) -> Vector3 {
        self.velocity
    }

    fn shape(&self) -> Shape {
        let t = f64::from(self.frame);
        Shape::join((0..6).map(|i| {
            let position = INITIAL_FACE_POSITIONS[i] + FACE_VELOCITIES[i].scale(t);
            let angle = INITIAL_FACE_ANGLES[i] + self.face_angular_velocities[i].scale(t);
            shape::plane(position, angle, FACE_EDGE, FACE_EDGE)
        }))
    }

    /// The captured color, its alpha fading linearly to zero.
    fn color(&self) -> Rgba {
        let remaining = EXPIRATION_FRAME.saturating_sub(self.frame);
        let alpha = self.color.a * f64::from(remaining) / f64::from(EXPIRATION_FRAME);
        self.color.with_alpha(alpha)
    }

    fn advance(&self, _controls: &Controls) -> Self {
        Self {
            position: self.position + self.velocity,
            frame: self.frame + 1,
            ..self.clone()
        }
    }
}
