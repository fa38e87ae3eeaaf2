use core::{mem, ops::*};
use std::fmt::Display;

use crate::*;

generic_matrix! {doc = "4x3 matrix (row-major order), an affine 3D transform with an implicit (0, 0, 0, 1) column at the end"; Mat4x3, 4, 3}

impl<T: Real> Mat4x3<T> {
    /// Create a new matrix with the given values
    #[inline]
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: T,
        m01: T,
        m02: T,
        m10: T,
        m11: T,
        m12: T,
        m20: T,
        m21: T,
        m22: T,
        m30: T,
        m31: T,
        m32: T,
    ) -> Self {
        Self {
            vals: [m00, m01, m02, m10, m11, m12, m20, m21, m22, m30, m31, m32],
        }
    }

    /// Create a new matrix with the given rows (the last row is the translation)
    #[inline]
    #[must_use]
    pub fn from_rows(row0: Vec3<T>, row1: Vec3<T>, row2: Vec3<T>, row3: Vec3<T>) -> Self {
        Self {
            vals: [
                row0.x, row0.y, row0.z, row1.x, row1.y, row1.z, row2.x, row2.y, row2.z, row3.x,
                row3.y, row3.z,
            ],
        }
    }

    /// Get the row at the given index
    #[inline]
    #[must_use]
    pub fn row(self, index: usize) -> Vec3<T> {
        debug_assert!(index < 4);
        let idx = index * 3;
        Vec3::new(self.vals[idx], self.vals[idx + 1], self.vals[idx + 2])
    }

    /// Set the row at the given index
    #[inline]
    pub fn set_row(&mut self, index: usize, row: Vec3<T>) {
        debug_assert!(index < 4);
        let idx = index * 3;
        self.vals[idx] = row.x;
        self.vals[idx + 1] = row.y;
        self.vals[idx + 2] = row.z;
    }

    /// Get the column at the given index (including the implicit 4th column)
    #[inline]
    #[must_use]
    pub fn column(self, index: usize) -> Vec4<T> {
        debug_assert!(index < 4);
        if index < 3 {
            Vec4::new(
                self.vals[index],
                self.vals[index + 3],
                self.vals[index + 6],
                self.vals[index + 9],
            )
        } else {
            Vec4::new(T::zero(), T::zero(), T::zero(), T::one())
        }
    }

    /// Get the identity matrix
    #[inline]
    pub fn identity() -> Self {
        let zero = T::zero();
        let one = T::one();

        Self {
            vals: [
                one, zero, zero, zero, one, zero, zero, zero, one, zero, zero, zero,
            ],
        }
    }

    /// Get the linear 3x3 part
    #[inline]
    #[must_use]
    pub fn linear(self) -> Mat3<T> {
        Mat3::from_rows(self.row(0), self.row(1), self.row(2))
    }

    /// Get the translation part
    #[inline]
    #[must_use]
    pub fn translation(self) -> Vec3<T> {
        self.row(3)
    }

    /// Calculate the determinant (the determinant of the linear part)
    pub fn determinant(self) -> T {
        self.linear().determinant()
    }

    /// Calculate the inverse of the affine transform
    ///
    /// A singular linear part propagates inf/NaN through the reciprocal
    /// determinant.
    pub fn inverse(self) -> Self {
        let linear_inv = self.linear().inverse();
        let trans = -(linear_inv.transform(self.translation()));
        Self::from_rows(
            linear_inv.row(0),
            linear_inv.row(1),
            linear_inv.row(2),
            trans,
        )
    }

    /// Transform a `Vec3` as a point (implicit w-coordinate of 1)
    pub fn transform_point(self, vec: Vec3<T>) -> Vec3<T> {
        self.row(0) * vec.x + self.row(1) * vec.y + self.row(2) * vec.z + self.row(3)
    }

    /// Transform a `Vec3` as a direction (no translation)
    pub fn transform_vector(self, vec: Vec3<T>) -> Vec3<T> {
        self.row(0) * vec.x + self.row(1) * vec.y + self.row(2) * vec.z
    }

    /// Embed into a full 4x4 matrix
    #[must_use]
    pub fn to_mat4(self) -> Mat4<T> {
        let zero = T::zero();
        let one = T::one();
        Mat4::from_rows(
            self.row(0).extend(zero),
            self.row(1).extend(zero),
            self.row(2).extend(zero),
            self.row(3).extend(one),
        )
    }

    /// Create a scale matrix
    pub fn create_scale(scale: Vec3<T>) -> Self {
        let zero = T::zero();
        Self::from_rows(
            Vec3::new(scale.x, zero, zero),
            Vec3::new(zero, scale.y, zero),
            Vec3::new(zero, zero, scale.z),
            Vec3::new(zero, zero, zero),
        )
    }

    /// Create a rotation matrix from a quaternion
    pub fn create_rotation(rot: Quat<T>) -> Self {
        let m = Mat3::create_rotation(rot);
        Self::from_rows(m.row(0), m.row(1), m.row(2), Vec3::zero())
    }

    /// Create a translation matrix
    pub fn create_translation(trans: Vec3<T>) -> Self {
        let mut res = Self::identity();
        res.set_row(3, trans);
        res
    }

    /// Create a transformation matrix
    pub fn create_transform(scale: Vec3<T>, rot: Quat<T>, trans: Vec3<T>) -> Self {
        let m = Mat3::create_scale(scale) * Mat3::create_rotation(rot);
        Self::from_rows(m.row(0), m.row(1), m.row(2), trans)
    }
}

impl<T: Real> Mul for Mat4x3<T> {
    type Output = Self;

    /// Concatenate 2 affine transforms (apply `self`, then `rhs`)
    fn mul(self, rhs: Self) -> Self::Output {
        let lin = self.linear() * rhs.linear();
        Self::from_rows(
            lin.row(0),
            lin.row(1),
            lin.row(2),
            rhs.transform_point(self.translation()),
        )
    }
}

impl<T: Real> MulAssign for Mat4x3<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real + Display> Display for Mat4x3<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "[[{}, {}, {}], [{}, {}, {}], [{}, {}, {}], [{}, {}, {}]]",
            self[0],
            self[1],
            self[2],
            self[3],
            self[4],
            self[5],
            self[6],
            self[7],
            self[8],
            self[9],
            self[10],
            self[11]
        ))
    }
}

#[allow(non_camel_case_types)]
pub type f32m4x3 = Mat4x3<f32>;
#[allow(non_camel_case_types)]
pub type f64m4x3 = Mat4x3<f64>;
