use core::ops::{Mul, MulAssign};
use std::fmt::Display;

use crate::*;

impl<T: Real> Mat2<T> {
    /// Create a new matrix with the given values
    #[inline]
    #[must_use]
    pub fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self {
            vals: [m00, m01, m10, m11],
        }
    }

    /// Create a new matrix with the given rows
    #[inline]
    #[must_use]
    pub fn from_rows(row0: Vec2<T>, row1: Vec2<T>) -> Self {
        Self {
            vals: [row0.x, row0.y, row1.x, row1.y],
        }
    }

    /// Get the row at the given index
    #[inline]
    #[must_use]
    pub fn row(self, index: usize) -> Vec2<T> {
        debug_assert!(index < 2);
        let idx = index * 2;
        Vec2::new(self.vals[idx], self.vals[idx + 1])
    }

    /// Get the column at the given index
    #[inline]
    #[must_use]
    pub fn column(self, index: usize) -> Vec2<T> {
        debug_assert!(index < 2);
        Vec2::new(self.vals[index], self.vals[index + 2])
    }

    /// Get the diagonal
    #[inline]
    #[must_use]
    pub fn diagonal(self) -> Vec2<T> {
        Vec2::new(self.vals[0], self.vals[3])
    }

    /// Get the identity matrix
    #[inline]
    pub fn identity() -> Self {
        let zero = T::zero();
        let one = T::one();
        Self {
            vals: [one, zero, zero, one],
        }
    }

    /// Calculate the determinant
    pub fn determinant(self) -> T {
        self[0] * self[3] - self[1] * self[2]
    }

    /// Calculate the trace
    #[inline]
    pub fn trace(self) -> T {
        self[0] + self[3]
    }

    /// Transpose the matrix
    #[inline]
    pub fn transpose(self) -> Self {
        Self {
            vals: [self[0], self[2], self[1], self[3]],
        }
    }

    /// Calculate the adjugate
    pub fn adjugate(self) -> Self {
        Self {
            vals: [self[3], -self[1], -self[2], self[0]],
        }
    }

    /// Calculate the inverse
    ///
    /// A singular matrix propagates inf/NaN through the reciprocal determinant.
    pub fn inverse(self) -> Self {
        self.adjugate() * self.determinant().recip()
    }

    /// Create a 2d rotation matrix
    pub fn create_rotation(angle: Radians<T>) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            vals: [cos, sin, -sin, cos],
        }
    }

    /// Transform a `Vec2`
    pub fn transform(self, vec: Vec2<T>) -> Vec2<T> {
        self.row(0) * vec.x + self.row(1) * vec.y
    }
}

impl<T: Real> Mul for Mat2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let row0 = self.row(0);
        let row1 = self.row(1);
        let column0 = rhs.column(0);
        let column1 = rhs.column(1);

        Self {
            vals: [
                row0.dot(column0),
                row0.dot(column1),
                row1.dot(column0),
                row1.dot(column1),
            ],
        }
    }
}

impl<T: Real> MulAssign for Mat2<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real + Display> Display for Mat2<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "[[{}, {}], [{}, {}]]",
            self[0], self[1], self[2], self[3]
        ))
    }
}

#[allow(non_camel_case_types)]
pub type f32m2 = Mat2<f32>;
#[allow(non_camel_case_types)]
pub type f64m2 = Mat2<f64>;
