//! A camera that follows the world's camera target.

use crate::config::CameraConfig;
use crate::vector::Vector3;
use crate::world::World;

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    position_coeffs: Vector3,
    angle_coeffs: Vector3,
    brightness_speed: f64,

    pub position: Vector3,
    pub angle: Vector3,
    /// Scene brightness in `[0, 1]`, rising at `brightness_speed` per frame.
    pub brightness: f64,
}

impl Camera {
    pub fn new(position_coeffs: Vector3, angle_coeffs: Vector3, brightness_speed: f64) -> Self {
        Self {
            position_coeffs,
            angle_coeffs,
            brightness_speed,
            position: Vector3::zero(),
            angle: Vector3::zero(),
            brightness: 0.0,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.position_coeffs, config.angle_coeffs, config.brightness_speed)
    }

    /// Follows the target model, if any, and fades in a little further.
    ///
    /// Call once per frame. Without a target the camera stays where it was.
    pub fn adjust_to<K, A>(&mut self, world: &World<K, A>) {
        if let Some(target) = world.camera_target_model() {
            self.position = self.position_coeffs.hadamard(target.position());
            self.angle = self.angle_coeffs.hadamard(target.angle());
        }

        self.brightness = (self.brightness + self.brightness_speed).min(1.0);
    }
}
