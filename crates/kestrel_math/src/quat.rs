use core::ops::*;
use std::fmt::Display;

use crate::*;

/// Quaternion
///
/// Stored as the bivector part (x, y, z) followed by the scalar part w, so a
/// unit quaternion rotating by `a` around the unitized plane `b` reads
/// `(b * sin(a/2), cos(a/2))`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Quat<T: Real> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Real> Quat<T> {
    /// Create a new quaternion
    #[inline]
    #[must_use]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Create an identity quaternion
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        let zero = T::zero();
        Self {
            x: zero,
            y: zero,
            z: zero,
            w: T::one(),
        }
    }

    /// Create a new quaternion from a `real` and `bivector` part
    #[inline]
    #[must_use]
    pub fn from_real_and_bivector(real: T, bivector: Bivec3<T>) -> Self {
        Self {
            x: bivector.x,
            y: bivector.y,
            z: bivector.z,
            w: real,
        }
    }

    /// Create a quaternion rotating by `angle` in the plane of the `rotation` bivector
    #[must_use]
    pub fn from_bivector_angle(rotation: Bivec3<T>, angle: Radians<T>) -> Self {
        let (sin, cos) = (angle * T::from_f32(0.5)).sin_cos();
        Self::from_real_and_bivector(cos, rotation.normalize() * sin)
    }

    /// Create a quaternion from an `axis` to rotate around and an `angle` to rotate
    #[inline]
    #[must_use]
    pub fn from_axis_angle(axis: Vec3<T>, angle: Radians<T>) -> Self {
        Self::from_bivector_angle(Bivec3::from_normal(axis), angle)
    }

    /// Create a quaternion from a 3x3 rotation matrix
    ///
    /// Branches on the largest diagonal term so the division stays
    /// well-conditioned for every rotation angle.
    #[must_use]
    pub fn from_matrix(mat: Mat3<T>) -> Self {
        let quarter = T::from_f32(0.25);
        let two = T::from_i32(2);

        let trace = mat.trace();
        if trace > T::zero() {
            let s = (T::one() + trace).sqrt() * two; // 4 * w
            Self {
                x: (mat[5] - mat[7]) / s,
                y: (mat[6] - mat[2]) / s,
                z: (mat[1] - mat[3]) / s,
                w: s * quarter,
            }
        } else if mat[0] > mat[4] && mat[0] > mat[8] {
            let s = (T::one() + mat[0] - mat[4] - mat[8]).sqrt() * two; // 4 * x
            Self {
                x: s * quarter,
                y: (mat[1] + mat[3]) / s,
                z: (mat[2] + mat[6]) / s,
                w: (mat[5] - mat[7]) / s,
            }
        } else if mat[4] > mat[8] {
            let s = (T::one() + mat[4] - mat[0] - mat[8]).sqrt() * two; // 4 * y
            Self {
                x: (mat[1] + mat[3]) / s,
                y: s * quarter,
                z: (mat[5] + mat[7]) / s,
                w: (mat[6] - mat[2]) / s,
            }
        } else {
            let s = (T::one() + mat[8] - mat[0] - mat[4]).sqrt() * two; // 4 * z
            Self {
                x: (mat[2] + mat[6]) / s,
                y: (mat[5] + mat[7]) / s,
                z: s * quarter,
                w: (mat[1] - mat[3]) / s,
            }
        }
    }

    /// Get the real part of the quaternion
    #[inline]
    #[must_use]
    pub fn real(self) -> T {
        self.w
    }

    /// Get the bivector part of the quaternion
    #[inline]
    #[must_use]
    pub fn bivector(self) -> Bivec3<T> {
        Bivec3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// Get the square norm of the quaternion
    #[inline]
    #[must_use]
    pub fn norm_sq(self) -> T {
        self.dot(self)
    }

    /// Get the norm of the quaternion
    #[inline]
    #[must_use]
    pub fn norm(self) -> T {
        self.norm_sq().sqrt()
    }

    /// Normalize the quaternion
    #[must_use]
    pub fn normalize(self) -> Self {
        if self.norm_sq().is_zero() {
            self
        } else {
            self.scale(self.norm_sq().rsqrt())
        }
    }

    /// Check if the quaternion is close to being normalized, using a given epsilon
    #[inline]
    #[must_use]
    pub fn is_close_to_normalized(self, epsilon: T) -> bool {
        self.norm_sq().is_close_to(T::one(), epsilon)
    }

    /// Calculate the dot product of 2 quaternions
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Get the conjugate of the quaternion
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Get the inverse of the quaternion
    #[must_use]
    pub fn inverse(self) -> Self {
        let scale = self.norm_sq().recip();
        Self {
            x: -self.x * scale,
            y: -self.y * scale,
            z: -self.z * scale,
            w: self.w * scale,
        }
    }

    /// Calculate the square root of a unit quaternion via the half-angle formula
    ///
    /// Undefined for a half-turn (w close to -1), where the rotation plane of
    /// the root is ambiguous.
    #[must_use]
    pub fn sqrt(self) -> Self {
        debug_assert!(self.is_close_to_normalized(T::from_f32(1e-4)));
        let b = (T::from_i32(2) * (T::one() + self.w)).rsqrt();
        Self {
            x: self.x * b,
            y: self.y * b,
            z: self.z * b,
            w: (T::one() + self.w) * b,
        }
    }

    /// Rotate a vector by the quaternion without building a matrix
    #[must_use]
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T> {
        debug_assert!(self.is_close_to_normalized(T::from_f32(1e-4)));
        let two = T::from_i32(2);
        let u = Vec3::new(self.x, self.y, self.z);
        let uv = u.cross(v);
        v + (uv * self.w + u.cross(uv)) * two
    }

    /// Get the angle represented by the quaternion
    #[must_use]
    pub fn angle(self) -> Radians<T> {
        Radians::acos(self.w.clamp(-T::one(), T::one())) * T::from_i32(2)
    }

    /// Convert the quaternion to an axis to rotate around and an angle to rotate
    #[must_use]
    pub fn to_axis_angle(self) -> (Vec3<T>, Radians<T>) {
        (Vec3::new(self.x, self.y, self.z).normalize(), self.angle())
    }

    /// Linearly interpolate between 2 quaternions along the shortest path, renormalizing the result
    #[must_use]
    pub fn lerp(self, other: Self, i: T) -> Self {
        let i = i.clamp(T::zero(), T::one());
        let other = if self.dot(other) < T::zero() {
            -other
        } else {
            other
        };
        Self {
            x: self.x.lerp(other.x, i),
            y: self.y.lerp(other.y, i),
            z: self.z.lerp(other.z, i),
            w: self.w.lerp(other.w, i),
        }
        .normalize()
    }

    /// Spherical linear interpolation between 2 quaternions along the shortest path
    #[must_use]
    pub fn slerp(self, other: Self, i: T) -> Self {
        let i = i.clamp(T::zero(), T::one());
        let other = if self.dot(other) < T::zero() {
            -other
        } else {
            other
        };

        let cos = self.dot(other).clamp(-T::one(), T::one());

        // nearly parallel, fall back to a renormalized lerp
        if cos > T::one() - T::from_f32(1e-5) {
            return self.lerp(other, i);
        }

        let angle = Radians::acos(cos);
        let rcp_sin = (T::one() - cos * cos).rsqrt();
        let s0 = (angle * (T::one() - i)).sin() * rcp_sin;
        let s1 = (angle * i).sin() * rcp_sin;

        Self {
            x: self.x * s0 + other.x * s1,
            y: self.y * s0 + other.y * s1,
            z: self.z * s0 + other.z * s1,
            w: self.w * s0 + other.w * s1,
        }
    }

    /// Calculate the log of a unit quaternion, which results in (theta * b, 0) where `|b| == 1`
    #[must_use]
    pub fn log(self) -> Self {
        let theta = Radians::acos(self.w.clamp(-T::one(), T::one()));
        let sin = theta.sin();
        let zero = T::zero();

        if sin.is_zero() {
            Self {
                x: zero,
                y: zero,
                z: zero,
                w: zero,
            }
        } else {
            let scale = theta.0 / sin;
            Self {
                x: self.x * scale,
                y: self.y * scale,
                z: self.z * scale,
                w: zero,
            }
        }
    }

    /// Calculate the exponential of a pure-bivector quaternion: (theta * b, 0) maps to (b * sin(theta), cos(theta))
    #[must_use]
    pub fn exp(self) -> Self {
        let theta = Vec3::new(self.x, self.y, self.z).len();
        if theta.is_zero() {
            return Self::identity();
        }
        let (sin, cos) = theta.sin_cos();
        let scale = sin / theta;
        Self {
            x: self.x * scale,
            y: self.y * scale,
            z: self.z * scale,
            w: cos,
        }
    }

    fn scale(self, scale: T) -> Self {
        Self {
            x: self.x * scale,
            y: self.y * scale,
            z: self.z * scale,
            w: self.w * scale,
        }
    }
}

impl<T: Real> Add for Quat<T> {
    type Output = Self;

    /// Component-wise sum, used when quaternions act as coefficient carriers
    /// rather than rotations (motor screw parts, interpolation)
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl<T: Real> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl<T: Real> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl<T: Real> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            z: self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl<T: Real> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Mul<Bivec3<T>> for Quat<T> {
    type Output = Self;

    /// Geometric product with a bivector, treated as a quaternion with no real part
    fn mul(self, rhs: Bivec3<T>) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y + self.z * rhs.x - self.x * rhs.z,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x,
            w: -self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl<T: Real> Mul<Quat<T>> for Bivec3<T> {
    type Output = Quat<T>;

    /// Geometric product of a bivector and a quaternion
    fn mul(self, rhs: Quat<T>) -> Quat<T> {
        Quat {
            x: self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            z: self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
            w: -self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl<T: Real> ApproxEq<T> for Quat<T> {
    const EPSILON: T = T::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.x.is_close_to(rhs.x, epsilon)
            && self.y.is_close_to(rhs.y, epsilon)
            && self.z.is_close_to(rhs.z, epsilon)
            && self.w.is_close_to(rhs.w, epsilon)
    }
}

impl<T: Real + Display> Display for Quat<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "(( {}, {}, {} ), {} )",
            self.x, self.y, self.z, self.w
        ))
    }
}

#[allow(non_camel_case_types)]
pub type f32quat = Quat<f32>;
#[allow(non_camel_case_types)]
pub type f64quat = Quat<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_normalize_inverse() {
        let q = Quat::new(1f32, 2f32, -1f32, 3f32).normalize();
        assert!(q.is_close_to_normalized(1e-5));
        assert!((q.norm() - 1f32).abs() < 1e-5);

        let prod = q * q.inverse();
        assert!(prod.is_close_to(Quat::identity(), 1e-5));
    }

    #[test]
    fn test_rotate() {
        let q = Quat::from_axis_angle(Vec3::unit_z(), Radians::new(f32::HALF_PI));
        let v = q.rotate(Vec3::unit_x());
        assert!(v.is_close_to(Vec3::unit_y(), 1e-5));

        let q = Quat::from_bivector_angle(Bivec3::new(0f32, 0f32, 1f32), Radians::new(f32::PI));
        let v = q.rotate(Vec3::new(1f32, 0f32, 0f32));
        assert!(v.is_close_to(Vec3::new(-1f32, 0f32, 0f32), 1e-5));
    }

    #[test]
    fn test_rotate_matches_matrix() {
        let q = Quat::from_axis_angle(
            Vec3::new(1f32, 2f32, 3f32).normalize(),
            Radians::new(1.1f32),
        );
        let mat = Mat3::create_rotation(q);
        let v = Vec3::new(0.3f32, -2f32, 1.5f32);
        assert!(q.rotate(v).is_close_to(mat.transform(v), 1e-4));
    }

    #[test]
    fn test_matrix_round_trip() {
        let angles = [0.1f32, 1.5, 2.8, 3.1, -2.9];
        let axes = [
            Vec3::unit_x(),
            Vec3::unit_y(),
            Vec3::unit_z(),
            Vec3::new(1f32, -1f32, 0.5f32).normalize(),
        ];
        for &angle in &angles {
            for &axis in &axes {
                let q = Quat::from_axis_angle(axis, Radians::new(angle));
                let restored = Quat::from_matrix(Mat3::create_rotation(q));
                // q and -q are the same rotation
                let same = restored.is_close_to(q, 1e-3) || restored.is_close_to(-q, 1e-3);
                assert!(same, "axis {}, angle {}: {} vs {}", axis, angle, q, restored);
            }
        }
    }

    #[test]
    fn test_sqrt() {
        let q = Quat::from_axis_angle(Vec3::unit_y(), Radians::new(1.2f32));
        let half = q.sqrt();
        assert!((half * half).is_close_to(q, 1e-5));
    }

    #[test]
    fn test_composition() {
        let a = Quat::from_axis_angle(Vec3::unit_z(), Radians::new(0.7f32));
        let b = Quat::from_axis_angle(Vec3::unit_y(), Radians::new(-0.4f32));
        let v = Vec3::new(1f32, 2f32, 3f32);

        let via_both = b.rotate(a.rotate(v));
        let via_product = (b * a).rotate(v);
        assert!(via_both.is_close_to(via_product, 1e-4));
    }

    #[test]
    fn test_slerp() {
        let a = Quat::from_axis_angle(Vec3::unit_z(), Radians::new(0f32));
        let b = Quat::from_axis_angle(Vec3::unit_z(), Radians::new(1f32));

        assert!(a.slerp(b, 0f32).is_close_to(a, 1e-5));
        assert!(a.slerp(b, 1f32).is_close_to(b, 1e-4));

        let mid = a.slerp(b, 0.5f32);
        let expected = Quat::from_axis_angle(Vec3::unit_z(), Radians::new(0.5f32));
        assert!(mid.is_close_to(expected, 1e-4));
    }

    #[test]
    fn test_exp_log() {
        let q = Quat::from_axis_angle(Vec3::unit_x(), Radians::new(0.9f32));
        assert!(q.log().exp().is_close_to(q, 1e-4));
        assert_eq!(Quat::<f32>::identity().log().w, 0f32);
    }

    #[test]
    fn test_bivector_product() {
        // e12 * e12 == -1
        let b = Bivec3::new(0f32, 0f32, 1f32);
        let q = Quat::from_real_and_bivector(0f32, b);
        let prod = q * b;
        assert!(prod.is_close_to(Quat::new(0f32, 0f32, 0f32, -1f32), 1e-6));
    }
}
