use core::ops::*;
use std::fmt::Display;

use crate::*;

/// 4D motor, a rigid motion at the homogeneous boundary
///
/// `rotor` and `screw` play the roles of [`Motor3D`]'s `v` and `m`; the
/// difference is the interchange format, a full 4x4 matrix with an explicit
/// homogeneous row.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Motor4D {
    pub rotor: Quat<f32>,
    pub screw: Quat<f32>,
}

impl Motor4D {
    /// Create a new motor from a rotor and screw quaternion
    #[inline(always)]
    #[must_use]
    pub fn new(rotor: Quat<f32>, screw: Quat<f32>) -> Self {
        Self { rotor, screw }
    }

    /// Create an identity motor
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        Self {
            rotor: Quat::identity(),
            screw: Quat::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Create a motor rotating by `angle` in the given plane through the origin
    #[must_use]
    pub fn rotation(angle: Radians<f32>, plane: Bivec3<f32>) -> Self {
        Self {
            rotor: Quat::from_bivector_angle(plane, angle),
            screw: Quat::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Create a motor rotating by `angle` about a unitized bivector line
    #[must_use]
    pub fn rotation_about_line(angle: Radians<f32>, line: Bivec4D) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self {
            rotor: Quat::new(line.v.x * sin, line.v.y * sin, line.v.z * sin, cos),
            screw: Quat::new(line.m.x * sin, line.m.y * sin, line.m.z * sin, 0.0),
        }
    }

    /// Create a motor translating by `offset`
    #[must_use]
    pub fn translation(offset: Vec3<f32>) -> Self {
        Self {
            rotor: Quat::identity(),
            screw: Quat::new(offset.x * 0.5, offset.y * 0.5, offset.z * 0.5, 0.0),
        }
    }

    /// Create a motor rotating by `angle` about a unitized bivector line while
    /// translating by `distance` along it
    #[must_use]
    pub fn screw_motion(angle: Radians<f32>, distance: f32, line: Bivec4D) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        let half_dist = distance * 0.5;
        let m = line.m * sin + line.v * (half_dist * cos);
        Self {
            rotor: Quat::new(line.v.x * sin, line.v.y * sin, line.v.z * sin, cos),
            screw: Quat::new(m.x, m.y, m.z, -half_dist * sin),
        }
    }

    /// Unitize the motor so the rotor quaternion has unit norm
    #[must_use]
    pub fn unitize(self) -> Self {
        let scale = self.rotor.norm_sq().rsqrt();
        Self {
            rotor: Quat::new(
                self.rotor.x * scale,
                self.rotor.y * scale,
                self.rotor.z * scale,
                self.rotor.w * scale,
            ),
            screw: Quat::new(
                self.screw.x * scale,
                self.screw.y * scale,
                self.screw.z * scale,
                self.screw.w * scale,
            ),
        }
    }

    /// Get the motor performing the opposite motion
    #[must_use]
    pub fn inverse(self) -> Self {
        debug_assert!(self.rotor.is_close_to_normalized(1e-4));
        Self {
            rotor: self.rotor.conjugate(),
            screw: self.screw.conjugate(),
        }
    }

    /// Get the translation the motor applies at the origin
    #[inline]
    #[must_use]
    pub fn translation_part(self) -> Vec3<f32> {
        let t = self.screw * self.rotor.conjugate();
        Vec3::new(t.x, t.y, t.z) * 2.0
    }

    /// Transform a homogeneous point by the motor
    #[must_use]
    pub fn transform_point(self, p: Vec4<f32>) -> Vec4<f32> {
        let rotated = self.rotor.rotate(p.xyz()) + self.translation_part() * p.w;
        rotated.extend(p.w)
    }

    /// Transform a bivector by the motor
    #[must_use]
    pub fn transform_bivector(self, b: Bivec4D) -> Bivec4D {
        let v = self.rotor.rotate(b.v);
        let m = self.rotor.rotate(b.m) + self.translation_part().cross(v);
        Bivec4D { v, m }
    }

    /// Transform a trivector by the motor
    #[must_use]
    pub fn transform_trivector(self, g: Trivec4D) -> Trivec4D {
        let n = self.rotor.rotate(g.normal());
        Trivec4D::from_normal(n, g.w - n.dot(self.translation_part()))
    }

    /// Convert the motor to a 4x4 transformation matrix
    #[must_use]
    pub fn to_transform(self) -> Mat4<f32> {
        let lin = Mat3::create_rotation(self.rotor);
        Mat4::from_rows(
            lin.row(0).extend(0.0),
            lin.row(1).extend(0.0),
            lin.row(2).extend(0.0),
            self.translation_part().extend(1.0),
        )
    }

    /// Convert a 4x4 transformation matrix to a motor
    ///
    /// The upper 3x3 part must be a proper rotation and the last column
    /// the homogeneous (0, 0, 0, 1).
    #[must_use]
    pub fn from_transform(mat: Mat4<f32>) -> Self {
        let lin = Mat3::from_rows(
            mat.row(0).xyz(),
            mat.row(1).xyz(),
            mat.row(2).xyz(),
        );
        let rotor = Quat::from_matrix(lin);
        let t = mat.row(3).xyz() * 0.5;
        Self {
            rotor,
            screw: Quat::new(t.x, t.y, t.z, 0.0) * rotor,
        }
    }
}

impl Mul for Motor4D {
    type Output = Self;

    /// Geometric antiproduct of 2 motors, the composite rigid motion
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            rotor: self.rotor * rhs.rotor,
            screw: self.rotor * rhs.screw + self.screw * rhs.rotor,
        }
    }
}

impl MulAssign for Motor4D {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ApproxEq<f32> for Motor4D {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.rotor.is_close_to(rhs.rotor, epsilon) && self.screw.is_close_to(rhs.screw, epsilon)
    }
}

impl Display for Motor4D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "[rotor: {}, screw: {}]",
            self.rotor, self.screw
        ))
    }
}
