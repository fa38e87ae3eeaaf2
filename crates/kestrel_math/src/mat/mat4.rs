use core::ops::{Mul, MulAssign};
use std::fmt::Display;

use crate::*;

impl<T: Real> Mat4<T> {
    /// Create a new matrix with the given values
    #[inline]
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: T,
        m01: T,
        m02: T,
        m03: T,
        m10: T,
        m11: T,
        m12: T,
        m13: T,
        m20: T,
        m21: T,
        m22: T,
        m23: T,
        m30: T,
        m31: T,
        m32: T,
        m33: T,
    ) -> Self {
        Self {
            vals: [
                m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33,
            ],
        }
    }

    /// Create a new matrix with the given rows
    #[inline]
    #[must_use]
    pub fn from_rows(row0: Vec4<T>, row1: Vec4<T>, row2: Vec4<T>, row3: Vec4<T>) -> Self {
        Self {
            vals: [
                row0.x, row0.y, row0.z, row0.w, row1.x, row1.y, row1.z, row1.w, row2.x, row2.y,
                row2.z, row2.w, row3.x, row3.y, row3.z, row3.w,
            ],
        }
    }

    /// Get the row at the given index
    #[inline]
    #[must_use]
    pub fn row(self, index: usize) -> Vec4<T> {
        debug_assert!(index < 4);
        let idx = index * 4;
        Vec4::new(
            self.vals[idx],
            self.vals[idx + 1],
            self.vals[idx + 2],
            self.vals[idx + 3],
        )
    }

    /// Set the row at the given index
    #[inline]
    pub fn set_row(&mut self, index: usize, row: Vec4<T>) {
        debug_assert!(index < 4);
        let idx = index * 4;
        self.vals[idx] = row.x;
        self.vals[idx + 1] = row.y;
        self.vals[idx + 2] = row.z;
        self.vals[idx + 3] = row.w;
    }

    /// Get the column at the given index
    #[inline]
    #[must_use]
    pub fn column(self, index: usize) -> Vec4<T> {
        debug_assert!(index < 4);
        Vec4::new(
            self.vals[index],
            self.vals[index + 4],
            self.vals[index + 8],
            self.vals[index + 12],
        )
    }

    /// Get the diagonal
    #[inline]
    #[must_use]
    pub fn diagonal(self) -> Vec4<T> {
        Vec4::new(self.vals[0], self.vals[5], self.vals[10], self.vals[15])
    }

    /// Get the identity matrix
    #[inline]
    pub fn identity() -> Self {
        let zero = T::zero();
        let one = T::one();

        Self {
            vals: [
                one, zero, zero, zero, zero, one, zero, zero, zero, zero, one, zero, zero, zero,
                zero, one,
            ],
        }
    }

    /// Calculate the trace
    #[inline]
    pub fn trace(self) -> T {
        self[0] + self[5] + self[10] + self[15]
    }

    /// Transpose the matrix
    pub fn transpose(self) -> Self {
        Self {
            vals: [
                self[0], self[4], self[8], self[12], self[1], self[5], self[9], self[13], self[2],
                self[6], self[10], self[14], self[3], self[7], self[11], self[15],
            ],
        }
    }

    // the closed-form inverse works on the 3D parts of the columns plus the
    // bottom row, pairing them into the wedge terms s, t, u, v
    #[inline]
    #[allow(clippy::type_complexity)]
    fn wedge_parts(self) -> ((Vec3<T>, Vec3<T>, Vec3<T>, Vec3<T>), (T, T, T, T)) {
        let a = Vec3::new(self[0], self[4], self[8]);
        let b = Vec3::new(self[1], self[5], self[9]);
        let c = Vec3::new(self[2], self[6], self[10]);
        let d = Vec3::new(self[3], self[7], self[11]);
        ((a, b, c, d), (self[12], self[13], self[14], self[15]))
    }

    /// Calculate the determinant via the bivector expansion of the columns
    pub fn determinant(self) -> T {
        let ((a, b, c, d), (x, y, z, w)) = self.wedge_parts();

        let s = a.cross(b);
        let t = c.cross(d);
        let u = a * y - b * x;
        let v = c * w - d * z;

        s.dot(v) + t.dot(u)
    }

    /// Calculate the adjugate (the inverse scaled by the determinant)
    pub fn adjugate(self) -> Self {
        let ((a, b, c, d), (x, y, z, w)) = self.wedge_parts();

        let s = a.cross(b);
        let t = c.cross(d);
        let u = a * y - b * x;
        let v = c * w - d * z;

        let r0 = b.cross(v) + t * y;
        let r1 = v.cross(a) - t * x;
        let r2 = d.cross(u) + s * w;
        let r3 = u.cross(c) - s * z;

        Self::from_rows(
            r0.extend(-b.dot(t)),
            r1.extend(a.dot(t)),
            r2.extend(-d.dot(s)),
            r3.extend(c.dot(s)),
        )
    }

    /// Calculate the inverse
    ///
    /// Closed form via the bivector expansion of the column pairs, a few
    /// dozen flops instead of row reduction. A singular matrix propagates
    /// inf/NaN through the reciprocal determinant.
    pub fn inverse(self) -> Self {
        let ((a, b, c, d), (x, y, z, w)) = self.wedge_parts();

        let mut s = a.cross(b);
        let mut t = c.cross(d);
        let mut u = a * y - b * x;
        let mut v = c * w - d * z;

        let rcp_det = (s.dot(v) + t.dot(u)).recip();
        s *= rcp_det;
        t *= rcp_det;
        u *= rcp_det;
        v *= rcp_det;

        let r0 = b.cross(v) + t * y;
        let r1 = v.cross(a) - t * x;
        let r2 = d.cross(u) + s * w;
        let r3 = u.cross(c) - s * z;

        Self::from_rows(
            r0.extend(-b.dot(t)),
            r1.extend(a.dot(t)),
            r2.extend(-d.dot(s)),
            r3.extend(c.dot(s)),
        )
    }

    /// Transform a `Vec4`
    pub fn transform(self, vec: Vec4<T>) -> Vec4<T> {
        self.row(0) * vec.x + self.row(1) * vec.y + self.row(2) * vec.z + self.row(3) * vec.w
    }
}

impl<T: Real> Mul for Mat4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut res = Self::zero();
        for i in 0..4 {
            let row = self.row(i);
            for j in 0..4 {
                res[i * 4 + j] = row.dot(rhs.column(j));
            }
        }
        res
    }
}

impl<T: Real> MulAssign for Mat4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Mul<Mat4<T>> for Vec4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Mat4<T>) -> Self::Output {
        rhs.transform(self)
    }
}

impl<T: Real + Display> Display for Mat4<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "[[{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}]]",
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
            self[11],
            self[12],
            self[13],
            self[14],
            self[15]
        ))
    }
}

#[allow(non_camel_case_types)]
pub type f32m4 = Mat4<f32>;
#[allow(non_camel_case_types)]
pub type f64m4 = Mat4<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    fn test_matrix() -> Mat4<f32> {
        Mat4::new(
            2f32, 0f32, 0f32, 1f32, 0f32, 3f32, 1f32, 0f32, 1f32, 0f32, 2f32, 0f32, 0f32, 1f32,
            0f32, 4f32,
        )
    }

    #[test]
    fn test_basics() {
        let m = test_matrix();
        assert_eq!(m.row(1), Vec4::new(0f32, 3f32, 1f32, 0f32));
        assert_eq!(m.column(3), Vec4::new(1f32, 0f32, 0f32, 4f32));
        assert_eq!(m.diagonal(), Vec4::new(2f32, 3f32, 2f32, 4f32));
        assert_eq!(m.trace(), 11f32);
        assert_eq!(m.transpose().row(0), Vec4::new(2f32, 0f32, 1f32, 0f32));
        assert_eq!(Mat4::<f32>::identity().determinant(), 1f32);
    }

    #[test]
    fn test_determinant() {
        let m = test_matrix();
        // cofactor expansion along the last column: -1*1 + 4*12
        assert!((m.determinant() - 47f32).abs() < 1e-4);
    }

    #[test]
    fn test_inverse() {
        let m = test_matrix();
        let inv = m.inverse();
        assert!((m * inv).is_close_to(Mat4::identity(), 1e-5));
        assert!((inv * m).is_close_to(Mat4::identity(), 1e-5));

        let adj = m.adjugate();
        assert!((m * adj).is_close_to(Mat4::identity() * m.determinant(), 1e-3));
    }

    #[test]
    fn test_transform() {
        let m = Mat4::<f32>::identity();
        let v = Vec4::new(1f32, 2f32, 3f32, 1f32);
        assert_eq!(m.transform(v), v);
        assert_eq!(v * m, v);
    }
}
