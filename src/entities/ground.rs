use std::f64::consts::FRAC_PI_2;

use crate::input::Controls;
use crate::shape::{self, Shape};
use crate::vector::Vector3;

use super::{Model, Rgba};

const POSITION: Vector3 = Vector3::new(0.0, -200.0, -1000.001);
const WIDTH: f64 = 1000.0;
const DEPTH: f64 = 2000.0;
const COLOR: Rgba = Rgba::new(0, 0, 0, 0.1);

const GRID_SPACING: f64 = 250.0;
/// How far the cross lines scroll toward the camera per frame.
const SCROLL_SPEED: f64 = 15.0;
const CROSS_LINES: usize = 8;
const DEPTH_LINES: usize = 4;

/// The ground plane with a grid scrolling underneath the player.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroundModel {
    frame: u32,
}

impl GroundModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }
}

impl Model for GroundModel {
    fn position(&self) -> Vector3 {
        POSITION
    }

    fn size(&self) -> Vector3 {
        Vector3::new(WIDTH, 0.0, DEPTH)
    }

    fn angle(&self) -> Vector3 {
        Vector3::zero()
    }

    fn velocity(&self) -> Vector3 {
        Vector3::zero()
    }

    fn shape(&self) -> Shape {
        let half_width = WIDTH / 2.0;
        let half_depth = DEPTH / 2.0;

        let plane = shape::plane(Vector3::zero(), Vector3::new(FRAC_PI_2, 0.0, 0.0), WIDTH, DEPTH);

        // cross lines cycle through their depth slots
        let offset = f64::from(self.frame) * SCROLL_SPEED + GRID_SPACING / 2.0;
        let cross_lines = (0..CROSS_LINES).map(|i| {
            let z = (i as f64 * GRID_SPACING + offset) % DEPTH - half_depth;
            shape::line_segment(Vector3::new(-half_width, 0.0, z), Vector3::new(half_width, 0.0, z))
        });

        let depth_lines = (0..DEPTH_LINES).map(|i| {
            let x = i as f64 * GRID_SPACING - half_width;
            shape::line_segment(Vector3::new(x, 0.0, -half_depth), Vector3::new(x, 0.0, half_depth))
        });

        Shape::join(std::iter::once(plane).chain(cross_lines).chain(depth_lines))
    }

    fn color(&self) -> Rgba {
        COLOR
    }

    fn advance(&self, _controls: &Controls) -> Self {
        Self { frame: self.frame + 1 }
    }
}
