use core::ops::{Mul, MulAssign};
use std::fmt::Display;

use crate::*;

impl<T: Real> Mat3<T> {
    /// Create a new matrix with the given values
    #[inline]
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(m00: T, m01: T, m02: T, m10: T, m11: T, m12: T, m20: T, m21: T, m22: T) -> Self {
        Self {
            vals: [m00, m01, m02, m10, m11, m12, m20, m21, m22],
        }
    }

    /// Create a new matrix with the given rows
    #[inline]
    #[must_use]
    pub fn from_rows(row0: Vec3<T>, row1: Vec3<T>, row2: Vec3<T>) -> Self {
        Self {
            vals: [
                row0.x, row0.y, row0.z, row1.x, row1.y, row1.z, row2.x, row2.y, row2.z,
            ],
        }
    }

    /// Create a new matrix with the given columns
    #[inline]
    #[must_use]
    pub fn from_columns(column0: Vec3<T>, column1: Vec3<T>, column2: Vec3<T>) -> Self {
        Self {
            vals: [
                column0.x, column1.x, column2.x, column0.y, column1.y, column2.y, column0.z,
                column1.z, column2.z,
            ],
        }
    }

    /// Get the row at the given index
    #[inline]
    #[must_use]
    pub fn row(self, index: usize) -> Vec3<T> {
        debug_assert!(index < 3);
        let idx = index * 3;
        Vec3::new(self.vals[idx], self.vals[idx + 1], self.vals[idx + 2])
    }

    /// Set the row at the given index
    #[inline]
    pub fn set_row(&mut self, index: usize, row: Vec3<T>) {
        debug_assert!(index < 3);
        let idx = index * 3;
        self.vals[idx] = row.x;
        self.vals[idx + 1] = row.y;
        self.vals[idx + 2] = row.z;
    }

    /// Get the column at the given index
    #[inline]
    #[must_use]
    pub fn column(self, index: usize) -> Vec3<T> {
        debug_assert!(index < 3);
        Vec3::new(self.vals[index], self.vals[index + 3], self.vals[index + 6])
    }

    /// Set the column at the given index
    #[inline]
    pub fn set_column(&mut self, index: usize, column: Vec3<T>) {
        debug_assert!(index < 3);
        self.vals[index] = column.x;
        self.vals[index + 3] = column.y;
        self.vals[index + 6] = column.z;
    }

    /// Get the diagonal
    #[inline]
    #[must_use]
    pub fn diagonal(self) -> Vec3<T> {
        Vec3::new(self.vals[0], self.vals[4], self.vals[8])
    }

    /// Get the identity matrix
    #[inline]
    pub fn identity() -> Self {
        let zero = T::zero();
        let one = T::one();

        Self {
            vals: [one, zero, zero, zero, one, zero, zero, zero, one],
        }
    }

    /// Calculate the determinant as the triple product of the columns
    pub fn determinant(self) -> T {
        self.column(0).cross(self.column(1)).dot(self.column(2))
    }

    /// Calculate the trace
    #[inline]
    pub fn trace(self) -> T {
        self[0] + self[4] + self[8]
    }

    /// Transpose the matrix
    #[inline]
    pub fn transpose(self) -> Self {
        Self {
            vals: [
                self[0], self[3], self[6], self[1], self[4], self[7], self[2], self[5], self[8],
            ],
        }
    }

    /// Calculate the adjugate from the column cross products
    pub fn adjugate(self) -> Self {
        let a = self.column(0);
        let b = self.column(1);
        let c = self.column(2);

        Self::from_rows(b.cross(c), c.cross(a), a.cross(b))
    }

    /// Calculate the inverse
    ///
    /// Closed form from the column cross products; a singular matrix
    /// propagates inf/NaN through the reciprocal determinant.
    pub fn inverse(self) -> Self {
        let a = self.column(0);
        let b = self.column(1);
        let c = self.column(2);

        let bc = b.cross(c);
        let rcp_det = bc.dot(a).recip();
        Self::from_rows(bc * rcp_det, c.cross(a) * rcp_det, a.cross(b) * rcp_det)
    }

    /// Transform a `Vec3`
    pub fn transform(self, vec: Vec3<T>) -> Vec3<T> {
        self.row(0) * vec.x + self.row(1) * vec.y + self.row(2) * vec.z
    }

    /// Create a scale matrix
    pub fn create_scale(scale: Vec3<T>) -> Self {
        let zero = T::zero();

        Self {
            vals: [
                scale.x, zero, zero, zero, scale.y, zero, zero, zero, scale.z,
            ],
        }
    }

    /// Create a rotation matrix from a quaternion
    pub fn create_rotation(rot: Quat<T>) -> Self {
        debug_assert!(rot.is_close_to_normalized(T::from_f32(1e-4)));

        let xx = rot.x * rot.x;
        let yy = rot.y * rot.y;
        let zz = rot.z * rot.z;

        let xw = rot.x * rot.w;
        let yw = rot.y * rot.w;
        let zw = rot.z * rot.w;

        let xy = rot.x * rot.y;
        let xz = rot.x * rot.z;
        let yz = rot.y * rot.z;

        let one = T::one();
        let two = T::from_i32(2);

        Self {
            vals: [
                one - two * (yy + zz),
                two * (xy + zw),
                two * (xz - yw),
                two * (xy - zw),
                one - two * (xx + zz),
                two * (yz + xw),
                two * (xz + yw),
                two * (yz - xw),
                one - two * (xx + yy),
            ],
        }
    }
}

impl<T: Real> Mul for Mat3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let row0 = self.row(0);
        let row1 = self.row(1);
        let row2 = self.row(2);

        let column0 = rhs.column(0);
        let column1 = rhs.column(1);
        let column2 = rhs.column(2);

        Self {
            vals: [
                row0.dot(column0),
                row0.dot(column1),
                row0.dot(column2),
                row1.dot(column0),
                row1.dot(column1),
                row1.dot(column2),
                row2.dot(column0),
                row2.dot(column1),
                row2.dot(column2),
            ],
        }
    }
}

impl<T: Real> MulAssign for Mat3<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Mul<Mat3<T>> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Mat3<T>) -> Self::Output {
        rhs.transform(self)
    }
}

impl<T: Real + Display> Display for Mat3<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "[[{}, {}, {}], [{}, {}, {}], [{}, {}, {}]]",
            self[0], self[1], self[2], self[3], self[4], self[5], self[6], self[7], self[8]
        ))
    }
}

#[allow(non_camel_case_types)]
pub type f32m3 = Mat3<f32>;
#[allow(non_camel_case_types)]
pub type f64m3 = Mat3<f64>;
