//! Dense row-major matrices.
//!
//! Only 4 x 4 matrices take part in 3D transforms (homogeneous
//! coordinates), but multiplication and transposition work for any size.

use std::ops::Mul;

use crate::error::{Error, Result};
use crate::vector::Vector3;

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from its rows.
    pub fn from_rows<const N: usize>(rows: &[[f64; N]]) -> Self {
        Self {
            rows: rows.len(),
            cols: N,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self { rows: n, cols: n, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The element at `row`, `col`.
    ///
    /// # Panics
    /// When the position lies outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        self.data[row * self.cols + col]
    }

    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.get(row, col));
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// `self · that`, or `DimensionMismatch` when `self.cols != that.rows`.
    pub fn try_mul(&self, that: &Matrix) -> Result<Matrix> {
        if self.cols != that.rows {
            return Err(Error::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: that.rows,
                rhs_cols: that.cols,
            });
        }

        let mut data = Vec::with_capacity(self.rows * that.cols);
        for i in 0..self.rows {
            for j in 0..that.cols {
                let entry = (0..self.cols).map(|k| self.get(i, k) * that.get(k, j)).sum();
                data.push(entry);
            }
        }

        Ok(Matrix {
            rows: self.rows,
            cols: that.cols,
            data,
        })
    }

    /// Applies this 4 x 4 transform to `vector` taken as the homogeneous
    /// column (x, y, z, 1).
    ///
    /// The division by w is left to the projection.
    ///
    /// # Panics
    /// When the matrix does not have 4 columns.
    pub fn apply(&self, vector: Vector3) -> Vector3 {
        let column = Matrix::from_rows(&[[vector.x], [vector.y], [vector.z], [1.0]]);
        let result = self * &column;
        Vector3::new(result.get(0, 0), result.get(1, 0), result.get(2, 0))
    }
}

/// # Panics
/// On a dimension mismatch; use [`Matrix::try_mul`] to get the error instead.
impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        match self.try_mul(rhs) {
            Ok(product) => product,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}
