//! Shapes: vertices plus faces, and a factory for the primitives.
//!
//! Faces hold indices into the vertex list. Shapes are rebuilt whenever a
//! model needs its current geometry, so nothing is shared or patched in place.

use crate::matrix::Matrix;
use crate::transform;
use crate::vector::Vector3;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    pub vertices: Vec<Vector3>,
    /// Each face lists vertex indices in drawing order. Polygons have three
    /// or more; a line segment has two and is drawn as an open stroke.
    pub faces: Vec<Vec<usize>>,
}

impl Shape {
    pub fn new(vertices: Vec<Vector3>, faces: Vec<Vec<usize>>) -> Self {
        Self { vertices, faces }
    }

    /// Merges shapes into one, keeping their order.
    pub fn join(shapes: impl IntoIterator<Item = Shape>) -> Self {
        let mut joined = Shape::default();
        for shape in shapes {
            let base = joined.vertices.len();
            joined.vertices.extend(shape.vertices);
            joined
                .faces
                .extend(shape.faces.into_iter().map(|face| face.into_iter().map(|i| i + base).collect()));
        }
        joined
    }

    /// The vertices of every face, resolved from their indices.
    pub fn face_vertices(&self) -> impl Iterator<Item = Vec<Vector3>> + '_ {
        self.faces
            .iter()
            .map(|face| face.iter().map(|&i| self.vertices[i]).collect())
    }

    /// This shape with every vertex passed through `matrix`.
    pub fn transformed(&self, matrix: &Matrix) -> Self {
        Self {
            vertices: self.vertices.iter().map(|&v| matrix.apply(v)).collect(),
            faces: self.faces.clone(),
        }
    }
}

// ── Factory ───────────────────────────────────────────────────────────────────

pub fn cube(center: Vector3, edge: f64) -> Shape {
    cuboid(center, Vector3::new(edge, edge, edge))
}

/// An axis-aligned box of `size` around `center`, six quadrilateral faces.
pub fn cuboid(center: Vector3, size: Vector3) -> Shape {
    let d = size.scale(0.5);

    let vertices = [
        Vector3::new(-d.x, -d.y, d.z),
        Vector3::new(-d.x, -d.y, -d.z),
        Vector3::new(d.x, -d.y, -d.z),
        Vector3::new(d.x, -d.y, d.z),
        Vector3::new(d.x, d.y, d.z),
        Vector3::new(d.x, d.y, -d.z),
        Vector3::new(-d.x, d.y, -d.z),
        Vector3::new(-d.x, d.y, d.z),
    ]
    .into_iter()
    .map(|v| v + center)
    .collect();

    let faces = vec![
        vec![0, 1, 2, 3],
        vec![2, 3, 4, 5],
        vec![4, 5, 6, 7],
        vec![7, 6, 1, 0],
        vec![0, 3, 4, 7],
        vec![1, 2, 5, 6],
    ];

    Shape::new(vertices, faces)
}

pub fn line_segment(start: Vector3, end: Vector3) -> Shape {
    Shape::new(vec![start, end], vec![vec![0, 1]])
}

/// A `width` x `height` rectangle in the local XY plane, placed by
/// `transformation(position, angle)`.
pub fn plane(position: Vector3, angle: Vector3, width: f64, height: f64) -> Shape {
    let dx = width / 2.0;
    let dy = height / 2.0;
    let matrix = transform::transformation(position, angle);

    let vertices = [
        Vector3::new(-dx, dy, 0.0),
        Vector3::new(-dx, -dy, 0.0),
        Vector3::new(dx, -dy, 0.0),
        Vector3::new(dx, dy, 0.0),
    ]
    .into_iter()
    .map(|v| matrix.apply(v))
    .collect();

    Shape::new(vertices, vec![vec![0, 1, 2, 3]])
}
