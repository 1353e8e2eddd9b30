//! Commonly used 4 x 4 transforms.
//!
//! Rotations compose as `Ry · Rx · Rz`. The order is fixed; anything that
//! builds or inverts a rotation must use the same one.

use crate::matrix::Matrix;
use crate::vector::Vector3;

pub fn rotation_x(angle: f64) -> Matrix {
    let (s, c) = angle.sin_cos();
    Matrix::from_rows(&[
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_y(angle: f64) -> Matrix {
    let (s, c) = angle.sin_cos();
    Matrix::from_rows(&[
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_z(angle: f64) -> Matrix {
    let (s, c) = angle.sin_cos();
    Matrix::from_rows(&[
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// `R = Ry(angle.y) · Rx(angle.x) · Rz(angle.z)`.
pub fn rotation(angle: Vector3) -> Matrix {
    rotation_y(angle.y) * rotation_x(angle.x) * rotation_z(angle.z)
}

pub fn translation(vector: Vector3) -> Matrix {
    Matrix::from_rows(&[
        [1.0, 0.0, 0.0, vector.x],
        [0.0, 1.0, 0.0, vector.y],
        [0.0, 0.0, 1.0, vector.z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Object-to-world transform: rotate by `angle`, then move to `position`.
pub fn transformation(position: Vector3, angle: Vector3) -> Matrix {
    translation(position) * rotation(angle)
}

/// The inverse of [`rotation`], equal to `Rz(-z) · Rx(-x) · Ry(-y)`.
///
/// Computed as the transpose of [`rotation`], which rotation matrices allow
/// since they are orthogonal. Negating the angles without also reversing the
/// axis order is not an inverse once more than one axis is involved.
pub fn inverse_rotation(angle: Vector3) -> Matrix {
    rotation(angle).transpose()
}

/// World-to-object transform, the inverse of [`transformation`].
///
/// Used as the view matrix of a camera placed at `position`, `angle`.
pub fn inverse_transformation(position: Vector3, angle: Vector3) -> Matrix {
    inverse_rotation(angle) * translation(position.inverse())
}
