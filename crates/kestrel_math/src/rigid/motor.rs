use core::ops::*;
use std::fmt::Display;

use crate::*;

/// 3D motor, an orientation-preserving rigid motion
///
/// `v` is the rotor quaternion and `m` the screw quaternion. A unitized
/// motor has `|v| == 1` and `v . m == 0`; composing motors with `*` is the
/// geometric antiproduct, so `b * a` performs `a` first and `b` second,
/// mirroring quaternion composition.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Motor3D {
    pub v: Quat<f32>,
    pub m: Quat<f32>,
}

impl Motor3D {
    /// Create a new motor from a rotor and screw quaternion
    #[inline(always)]
    #[must_use]
    pub fn new(v: Quat<f32>, m: Quat<f32>) -> Self {
        Self { v, m }
    }

    /// Create an identity motor
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        Self {
            v: Quat::identity(),
            m: Quat::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Create a motor rotating by `angle` in the given plane through the origin
    #[must_use]
    pub fn rotation(angle: Radians<f32>, plane: Bivec3<f32>) -> Self {
        Self {
            v: Quat::from_bivector_angle(plane, angle),
            m: Quat::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Create a motor rotating by `angle` about a unitized line
    #[must_use]
    pub fn rotation_about_line(angle: Radians<f32>, line: Line3D) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self {
            v: Quat::new(line.v.x * sin, line.v.y * sin, line.v.z * sin, cos),
            m: Quat::new(line.m.x * sin, line.m.y * sin, line.m.z * sin, 0.0),
        }
    }

    /// Create a motor translating by `offset`
    #[must_use]
    pub fn translation(offset: Vec3<f32>) -> Self {
        Self {
            v: Quat::identity(),
            m: Quat::new(offset.x * 0.5, offset.y * 0.5, offset.z * 0.5, 0.0),
        }
    }

    /// Create a motor rotating by `angle` about a unitized line while
    /// translating by `distance` along it (a screw motion)
    #[must_use]
    pub fn screw(angle: Radians<f32>, distance: f32, line: Line3D) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        let half_dist = distance * 0.5;
        let m = line.m * sin + line.v * (half_dist * cos);
        Self {
            v: Quat::new(line.v.x * sin, line.v.y * sin, line.v.z * sin, cos),
            m: Quat::new(m.x, m.y, m.z, -half_dist * sin),
        }
    }

    /// Unitize the motor so the rotor quaternion has unit norm
    ///
    /// A zero rotor produces inf/NaN components.
    #[must_use]
    pub fn unitize(self) -> Self {
        let scale = self.v.norm_sq().rsqrt();
        Self {
            v: Quat::new(
                self.v.x * scale,
                self.v.y * scale,
                self.v.z * scale,
                self.v.w * scale,
            ),
            m: Quat::new(
                self.m.x * scale,
                self.m.y * scale,
                self.m.z * scale,
                self.m.w * scale,
            ),
        }
    }

    /// Get the motor performing the opposite motion
    #[must_use]
    pub fn inverse(self) -> Self {
        debug_assert!(self.v.is_close_to_normalized(1e-4));
        Self {
            v: self.v.conjugate(),
            m: self.m.conjugate(),
        }
    }

    /// Get the translation the motor applies at the origin
    #[inline]
    #[must_use]
    pub fn translation_part(self) -> Vec3<f32> {
        let t = self.m * self.v.conjugate();
        Vec3::new(t.x, t.y, t.z) * 2.0
    }

    /// Transform a point by the motor
    #[must_use]
    pub fn transform_point(self, p: Point3D) -> Point3D {
        Point3D::from_vec3(self.v.rotate(p.to_vec3()) + self.translation_part())
    }

    /// Transform a flat point by the motor
    #[must_use]
    pub fn transform_flat_point(self, p: FlatPoint3D) -> FlatPoint3D {
        let rotated = self.v.rotate(p.xyz()) + self.translation_part() * p.w;
        FlatPoint3D::from_vec3(rotated, p.w)
    }

    /// Transform a direction vector by the motor (rotation only)
    #[inline]
    #[must_use]
    pub fn transform_vector(self, v: Vec3<f32>) -> Vec3<f32> {
        self.v.rotate(v)
    }

    /// Transform a bivector by the motor
    #[inline]
    #[must_use]
    pub fn transform_bivector(self, b: Bivec3<f32>) -> Bivec3<f32> {
        Bivec3::from_normal(self.v.rotate(b.complement()))
    }

    /// Transform a line by the motor
    #[must_use]
    pub fn transform_line(self, line: Line3D) -> Line3D {
        let v = self.v.rotate(line.v);
        let m = self.v.rotate(line.m) + self.translation_part().cross(v);
        Line3D { v, m }
    }

    /// Transform a plane by the motor
    #[must_use]
    pub fn transform_plane(self, plane: Plane3D) -> Plane3D {
        let n = self.v.rotate(plane.normal());
        Plane3D::from_normal(n, plane.w - n.dot(self.translation_part()))
    }

    /// Convert the motor to an affine transformation matrix
    #[must_use]
    pub fn to_transform(self) -> Mat4x3<f32> {
        let lin = Mat3::create_rotation(self.v);
        Mat4x3::from_rows(
            lin.row(0),
            lin.row(1),
            lin.row(2),
            self.translation_part(),
        )
    }

    /// Convert an affine transformation matrix to a motor
    ///
    /// The linear part must be a proper rotation.
    #[must_use]
    pub fn from_transform(mat: Mat4x3<f32>) -> Self {
        let v = Quat::from_matrix(mat.linear());
        let t = mat.translation() * 0.5;
        Self {
            v,
            m: Quat::new(t.x, t.y, t.z, 0.0) * v,
        }
    }
}

impl Mul for Motor3D {
    type Output = Self;

    /// Geometric antiproduct of 2 motors, the composite rigid motion
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            v: self.v * rhs.v,
            m: self.v * rhs.m + self.m * rhs.v,
        }
    }
}

impl MulAssign for Motor3D {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ApproxEq<f32> for Motor3D {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.v.is_close_to(rhs.v, epsilon) && self.m.is_close_to(rhs.m, epsilon)
    }
}

impl Display for Motor3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[v: {}, m: {}]", self.v, self.m))
    }
}
