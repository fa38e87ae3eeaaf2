use core::ops::*;
use std::fmt::Display;

use crate::*;

/// 4D flector, an orientation-reversing motion at the homogeneous boundary
///
/// `p` is the point part and `g` the trivector part, mirroring
/// [`Flector3D`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Flector4D {
    pub p: Vec4<f32>,
    pub g: Trivec4D,
}

impl Flector4D {
    /// Create a new flector from a point part and a trivector part
    #[inline(always)]
    #[must_use]
    pub fn new(p: Vec4<f32>, g: Trivec4D) -> Self {
        Self { p, g }
    }

    /// Create a flector reflecting through a unitized trivector
    #[must_use]
    pub fn reflection(plane: Trivec4D) -> Self {
        Self {
            p: Vec4::zero(),
            g: plane,
        }
    }

    /// Create a flector inverting through a homogeneous point
    #[must_use]
    pub fn inversion(center: Vec4<f32>) -> Self {
        Self {
            p: center,
            g: Trivec4D::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    #[inline]
    fn rotor_rep(self) -> Quat<f32> {
        Quat::new(self.g.x, self.g.y, self.g.z, self.p.w)
    }

    #[inline]
    fn screw_rep(self) -> Quat<f32> {
        Quat::new(self.p.x, self.p.y, self.p.z, self.g.w)
    }

    #[inline]
    fn from_reps(v: Quat<f32>, m: Quat<f32>) -> Self {
        Self {
            p: Vec4::new(m.x, m.y, m.z, v.w),
            g: Trivec4D::new(v.x, v.y, v.z, m.w),
        }
    }

    /// Unitize the flector so its weight components have unit magnitude
    #[must_use]
    pub fn unitize(self) -> Self {
        let scale = self.rotor_rep().norm_sq().rsqrt();
        Self {
            p: self.p * scale,
            g: Trivec4D::new(
                self.g.x * scale,
                self.g.y * scale,
                self.g.z * scale,
                self.g.w * scale,
            ),
        }
    }

    /// Get the translation the flector applies at the origin
    #[inline]
    #[must_use]
    pub fn translation_part(self) -> Vec3<f32> {
        let t = self.screw_rep() * self.rotor_rep().conjugate();
        Vec3::new(t.x, t.y, t.z) * 2.0
    }

    /// Transform a homogeneous point by the flector
    #[must_use]
    pub fn transform_point(self, p: Vec4<f32>) -> Vec4<f32> {
        let rotated = self.rotor_rep().rotate(p.xyz());
        (self.translation_part() * p.w - rotated).extend(p.w)
    }

    /// Transform a bivector by the flector
    #[must_use]
    pub fn transform_bivector(self, b: Bivec4D) -> Bivec4D {
        let rotated = self.rotor_rep().rotate(b.v);
        let m = self.rotor_rep().rotate(b.m) - self.translation_part().cross(rotated);
        Bivec4D { v: -rotated, m }
    }

    /// Transform a trivector by the flector
    #[must_use]
    pub fn transform_trivector(self, g: Trivec4D) -> Trivec4D {
        let n = self.rotor_rep().rotate(g.normal());
        Trivec4D::from_normal(n, -g.w - n.dot(self.translation_part()))
    }

    /// Convert the flector to a 4x4 transformation matrix
    #[must_use]
    pub fn to_transform(self) -> Mat4<f32> {
        let lin = -Mat3::create_rotation(self.rotor_rep());
        Mat4::from_rows(
            lin.row(0).extend(0.0),
            lin.row(1).extend(0.0),
            lin.row(2).extend(0.0),
            self.translation_part().extend(1.0),
        )
    }

    /// Convert a 4x4 transformation matrix to a flector
    ///
    /// The upper 3x3 part must be an improper rotation (a reflection).
    #[must_use]
    pub fn from_transform(mat: Mat4<f32>) -> Self {
        let lin = Mat3::from_rows(mat.row(0).xyz(), mat.row(1).xyz(), mat.row(2).xyz());
        let v = Quat::from_matrix(-lin);
        let t = mat.row(3).xyz() * 0.5;
        Self::from_reps(v, Quat::new(t.x, t.y, t.z, 0.0) * v)
    }
}

impl Mul for Flector4D {
    type Output = Motor4D;

    /// Geometric antiproduct of 2 flectors
    fn mul(self, rhs: Self) -> Motor4D {
        let v1 = self.rotor_rep();
        let m1 = self.screw_rep();
        let v2 = rhs.rotor_rep();
        let m2 = rhs.screw_rep();

        Motor4D {
            rotor: -(v1 * v2),
            screw: v1 * m2 - m1 * v2,
        }
    }
}

impl Mul<Flector4D> for Motor4D {
    type Output = Flector4D;

    /// Geometric antiproduct, applying the flector first
    fn mul(self, rhs: Flector4D) -> Flector4D {
        let vf = rhs.rotor_rep();
        let mf = rhs.screw_rep();
        Flector4D::from_reps(self.rotor * vf, self.rotor * mf + self.screw * vf)
    }
}

impl Mul<Motor4D> for Flector4D {
    type Output = Flector4D;

    /// Geometric antiproduct, applying the motor first
    fn mul(self, rhs: Motor4D) -> Flector4D {
        let vf = self.rotor_rep();
        let mf = self.screw_rep();
        Flector4D::from_reps(vf * rhs.rotor, mf * rhs.rotor - vf * rhs.screw)
    }
}

impl Neg for Flector4D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            p: -self.p,
            g: -self.g,
        }
    }
}

impl ApproxEq<f32> for Flector4D {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.p.is_close_to(rhs.p, epsilon) && self.g.is_close_to(rhs.g, epsilon)
    }
}

impl Display for Flector4D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[p: {}, g: {}]", self.p, self.g))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_reflection() {
        let refl = Flector4D::reflection(Trivec4D::new(0f32, 0f32, 1f32, 0f32));
        let p = refl.transform_point(Vec4::new(1f32, 2f32, 3f32, 1f32));
        assert!(p.is_close_to(Vec4::new(1f32, 2f32, -3f32, 1f32), 1e-5));
    }

    #[test]
    fn test_flector_composition() {
        let f1 = Flector4D::reflection(Trivec4D::new(0f32, 0f32, 1f32, 0f32));
        let f2 = Flector4D::reflection(Trivec4D::new(0f32, 0f32, 1f32, -1f32));

        let motor = f1 * f2;
        let p = Vec4::new(0.3f32, -1f32, 2f32, 1f32);
        let expected = f1.transform_point(f2.transform_point(p));
        assert!(motor.transform_point(p).is_close_to(expected, 1e-5));
    }

    #[test]
    fn test_mixed_composition() {
        let motor = Motor4D::rotation(Radians::new(0.5), Bivec3::new(0f32, 1f32, 0f32));
        let flector = Flector4D::reflection(Trivec4D::new(1f32, 0f32, 0f32, 0f32));
        let p = Vec4::new(1f32, 0.5f32, -0.5f32, 1f32);

        let composed = motor * flector;
        let expected = motor.transform_point(flector.transform_point(p));
        assert!(composed.transform_point(p).is_close_to(expected, 1e-4));

        let composed = flector * motor;
        let expected = flector.transform_point(motor.transform_point(p));
        assert!(composed.transform_point(p).is_close_to(expected, 1e-4));
    }

    #[test]
    fn test_matrix_round_trip() {
        let flector = Motor4D::translation(Vec3::new(1f32, 0f32, -1f32))
            * Flector4D::reflection(Trivec4D::new(0f32, 1f32, 0f32, 0.25f32));

        let mat = flector.to_transform();
        let p = Vec4::new(0.5f32, 1.5f32, 2.5f32, 1f32);
        assert!(mat.transform(p).is_close_to(flector.transform_point(p), 1e-4));

        let restored = Flector4D::from_transform(mat);
        let same = restored.is_close_to(flector, 1e-4) || (-restored).is_close_to(flector, 1e-4);
        assert!(same);
    }
}
