//! The render boundary.
//!
//! Turns the world into closed 2D paths on a virtual canvas. Actually
//! stroking them is up to whoever draws the [`Frame`].

use crate::camera::Camera;
use crate::entities::Rgba;
use crate::projection::Projection;
use crate::transform;
use crate::vector::Vector2;
use crate::world::World;

/// One face, projected to canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub points: Vec<Vector2>,
    pub color: Rgba,
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    /// Paths in drawing order.
    pub paths: Vec<Path>,
    /// 0 is black, 1 is full brightness.
    pub brightness: f64,
    pub message: Option<&'static str>,
}

pub struct Renderer {
    width: f64,
    height: f64,
    camera: Camera,
    projection: Box<dyn Projection>,
}

impl Renderer {
    pub fn new(width: f64, height: f64, camera: Camera, projection: Box<dyn Projection>) -> Self {
        Self {
            width,
            height,
            camera,
            projection,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn render<K, A>(&mut self, world: &World<K, A>) -> Frame {
        self.camera.adjust_to(world);

        let view = transform::inverse_transformation(self.camera.position, self.camera.angle);

        let mut paths = Vec::new();
        for model in world.all_models() {
            let placement = transform::transformation(model.position(), model.angle());
            let shape = model.shape().transformed(&(&view * &placement));
            let color = model.color();

            // faces reaching the camera plane cannot be projected
            for face in shape.face_vertices().filter(|face| face.iter().all(|v| v.z < 0.0)) {
                let points = face
                    .into_iter()
                    .map(|v| self.projection.project(v))
                    .map(|p| Vector2::new(p.x + self.width / 2.0, -p.y + self.height / 2.0))
                    .collect();
                paths.push(Path { points, color });
            }
        }

        Frame {
            width: self.width,
            height: self.height,
            paths,
            brightness: self.camera.brightness,
            message: world.message(),
        }
    }
}
