//! Star Box: a small 3D shooter whose world is simulated frame by frame and
//! drawn on a 2D surface through a perspective projection.
//!
//! The library holds the whole game core. Everything that touches the
//! terminal (drawing, key events, the bell) lives in the binary.

pub mod audio;
pub mod camera;
pub mod collision;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod matrix;
pub mod overlap;
pub mod projection;
pub mod render;
pub mod scenario;
pub mod shape;
pub mod transform;
pub mod vector;
pub mod world;
