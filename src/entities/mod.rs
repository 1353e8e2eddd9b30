//! Everything that lives in the game world.
//!
//! Each variant keeps its own frame counter and derives shape, color and
//! angle from it. Updates are pure: [`Model::advance`] and [`Model::shoot`]
//! return the next state instead of mutating the current one.

mod enemy;
mod explosion;
mod ground;
mod obstacle;
mod player;
mod shot;

pub use enemy::EnemyModel;
pub use explosion::ExplosionModel;
pub use ground::GroundModel;
pub use obstacle::ObstacleModel;
pub use player::PlayerModel;
pub use shot::ShotModel;

use crate::input::Controls;
use crate::shape::Shape;
use crate::vector::Vector3;

/// An RGBA color; `a` is the opacity in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

/// The capabilities every model in the world provides.
pub trait Model {
    fn position(&self) -> Vector3;

    /// Bounding box extents, used by collision detection.
    fn size(&self) -> Vector3;

    fn angle(&self) -> Vector3;

    /// Displacement per frame.
    fn velocity(&self) -> Vector3;

    /// Current geometry in model-local coordinates.
    fn shape(&self) -> Shape;

    fn color(&self) -> Rgba;

    /// The state one frame later.
    fn advance(&self, controls: &Controls) -> Self
    where
        Self: Sized;

    /// The state after this frame's shooting step and the shot fired, if any.
    fn shoot(&self, _target: Option<Vector3>, _controls: &Controls) -> (Self, Option<ShotModel>)
    where
        Self: Sized + Clone,
    {
        (self.clone(), None)
    }
}
