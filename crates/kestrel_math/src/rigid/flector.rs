use core::ops::*;
use std::fmt::Display;

use crate::*;

/// 3D flector, an orientation-reversing rigid motion
///
/// `p` is the point part and `g` the plane part. A pure plane reflection has
/// only a plane part, a point inversion only a point part; everything in
/// between is a reflection composed with a rigid motion. Composing two
/// flectors with `*` yields a motor, since two reflections preserve
/// orientation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Flector3D {
    pub p: FlatPoint3D,
    pub g: Plane3D,
}

impl Flector3D {
    /// Create a new flector from a point part and a plane part
    #[inline(always)]
    #[must_use]
    pub fn new(p: FlatPoint3D, g: Plane3D) -> Self {
        Self { p, g }
    }

    /// Create a flector reflecting through a unitized plane
    #[must_use]
    pub fn reflection(plane: Plane3D) -> Self {
        Self {
            p: FlatPoint3D::new(0.0, 0.0, 0.0, 0.0),
            g: plane,
        }
    }

    /// Create a flector inverting through a point
    #[must_use]
    pub fn inversion(center: Point3D) -> Self {
        Self {
            p: center.to_flat(),
            g: Plane3D::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    // A flector is a motor followed by the inversion through the origin; the
    // rotor/screw pair of that motor carries the plane normal in its
    // bivector part and the point part in its screw part.
    #[inline]
    fn rotor_rep(self) -> Quat<f32> {
        Quat::new(self.g.x, self.g.y, self.g.z, self.p.w)
    }

    #[inline]
    fn screw_rep(self) -> Quat<f32> {
        Quat::new(self.p.x, self.p.y, self.p.z, self.g.w)
    }

    #[inline]
    pub(crate) fn from_reps(v: Quat<f32>, m: Quat<f32>) -> Self {
        Self {
            p: FlatPoint3D::new(m.x, m.y, m.z, v.w),
            g: Plane3D::new(v.x, v.y, v.z, m.w),
        }
    }

    /// Unitize the flector so its weight components have unit magnitude
    ///
    /// A zero weight produces inf/NaN components.
    #[must_use]
    pub fn unitize(self) -> Self {
        let scale = self.rotor_rep().norm_sq().rsqrt();
        Self {
            p: FlatPoint3D::new(
                self.p.x * scale,
                self.p.y * scale,
                self.p.z * scale,
                self.p.w * scale,
            ),
            g: Plane3D::new(
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

    /// Transform a point by the flector
    #[must_use]
    pub fn transform_point(self, p: Point3D) -> Point3D {
        let rotated = self.rotor_rep().rotate(p.to_vec3());
        Point3D::from_vec3(self.translation_part() - rotated)
    }

    /// Transform a flat point by the flector
    #[must_use]
    pub fn transform_flat_point(self, p: FlatPoint3D) -> FlatPoint3D {
        let rotated = self.rotor_rep().rotate(p.xyz());
        FlatPoint3D::from_vec3(self.translation_part() * p.w - rotated, p.w)
    }

    /// Transform a direction vector by the flector
    ///
    /// Directions pick up the orientation flip of the reflection.
    #[inline]
    #[must_use]
    pub fn transform_vector(self, v: Vec3<f32>) -> Vec3<f32> {
        -self.rotor_rep().rotate(v)
    }

    /// Transform a bivector by the flector
    ///
    /// The bivector is carried through its complement, which restores the
    /// handedness a direct sandwich would flip.
    #[inline]
    #[must_use]
    pub fn transform_bivector(self, b: Bivec3<f32>) -> Bivec3<f32> {
        Bivec3::from_normal(self.rotor_rep().rotate(b.complement()))
    }

    /// Transform a line by the flector
    #[must_use]
    pub fn transform_line(self, line: Line3D) -> Line3D {
        let rotated = self.rotor_rep().rotate(line.v);
        let m = self.rotor_rep().rotate(line.m) - self.translation_part().cross(rotated);
        Line3D { v: -rotated, m }
    }

    /// Transform a plane by the flector
    #[must_use]
    pub fn transform_plane(self, plane: Plane3D) -> Plane3D {
        let n = self.rotor_rep().rotate(plane.normal());
        Plane3D::from_normal(n, -plane.w - n.dot(self.translation_part()))
    }

    /// Convert the flector to an affine transformation matrix
    #[must_use]
    pub fn to_transform(self) -> Mat4x3<f32> {
        let lin = -Mat3::create_rotation(self.rotor_rep());
        Mat4x3::from_rows(
            lin.row(0),
            lin.row(1),
            lin.row(2),
            self.translation_part(),
        )
    }

    /// Convert an affine transformation matrix to a flector
    ///
    /// The linear part must be an improper rotation (a reflection).
    #[must_use]
    pub fn from_transform(mat: Mat4x3<f32>) -> Self {
        let v = Quat::from_matrix(-mat.linear());
        let t = mat.translation() * 0.5;
        Self::from_reps(v, Quat::new(t.x, t.y, t.z, 0.0) * v)
    }
}

impl Mul for Flector3D {
    type Output = Motor3D;

    /// Geometric antiproduct of 2 flectors; two reflections compose into a
    /// proper rigid motion
    fn mul(self, rhs: Self) -> Motor3D {
        let v1 = self.rotor_rep();
        let m1 = self.screw_rep();
        let v2 = rhs.rotor_rep();
        let m2 = rhs.screw_rep();

        Motor3D {
            v: -(v1 * v2),
            m: v1 * m2 - m1 * v2,
        }
    }
}

impl Mul<Flector3D> for Motor3D {
    type Output = Flector3D;

    /// Geometric antiproduct, applying the flector first
    fn mul(self, rhs: Flector3D) -> Flector3D {
        let vf = rhs.rotor_rep();
        let mf = rhs.screw_rep();
        Flector3D::from_reps(self.v * vf, self.v * mf + self.m * vf)
    }
}

impl Mul<Motor3D> for Flector3D {
    type Output = Flector3D;

    /// Geometric antiproduct, applying the motor first
    fn mul(self, rhs: Motor3D) -> Flector3D {
        let vf = self.rotor_rep();
        let mf = self.screw_rep();
        Flector3D::from_reps(vf * rhs.v, mf * rhs.v - vf * rhs.m)
    }
}

impl Neg for Flector3D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            p: -self.p,
            g: -self.g,
        }
    }
}

impl ApproxEq<f32> for Flector3D {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.p.is_close_to(rhs.p, epsilon) && self.g.is_close_to(rhs.g, epsilon)
    }
}

impl Display for Flector3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[p: {}, g: {}]", self.p, self.g))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_reflection() {
        let refl = Flector3D::reflection(Plane3D::new(0.0, 0.0, 1.0, 0.0));
        let p = refl.transform_point(Point3D::new(1.0, 2.0, 3.0));
        assert!(p.is_close_to(Point3D::new(1.0, 2.0, -3.0), 1e-5));

        // reflecting through an offset plane z = 1
        let refl = Flector3D::reflection(Plane3D::new(0.0, 0.0, 1.0, -1.0));
        let p = refl.transform_point(Point3D::new(0.0, 0.0, 3.0));
        assert!(p.is_close_to(Point3D::new(0.0, 0.0, -1.0), 1e-5));
    }

    #[test]
    fn test_inversion() {
        let inv = Flector3D::inversion(Point3D::new(1.0, 0.0, 0.0));
        let p = inv.transform_point(Point3D::new(2.0, 1.0, 0.0));
        assert!(p.is_close_to(Point3D::new(0.0, -1.0, 0.0), 1e-5));
    }

    #[test]
    fn test_vector_handedness() {
        let refl = Flector3D::reflection(Plane3D::new(0.0, 0.0, 1.0, 0.0));

        // a direction in the plane is unchanged up to the orientation flip
        let v = refl.transform_vector(Vec3::unit_z());
        assert!(v.is_close_to(Vec3::new(0.0, 0.0, -1.0), 1e-5));

        // bivectors go through the complement and keep their handedness: the
        // xy-plane bivector is preserved by a reflection through z = 0
        let b = refl.transform_bivector(Bivec3::new(0.0, 0.0, 1.0));
        assert!(Vec3::new(b.x, b.y, b.z).is_close_to(Vec3::new(0.0, 0.0, 1.0), 1e-5));

        // a bivector containing the normal flips
        let b = refl.transform_bivector(Bivec3::new(1.0, 0.0, 0.0));
        assert!(Vec3::new(b.x, b.y, b.z).is_close_to(Vec3::new(-1.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_two_reflections_translate() {
        let f1 = Flector3D::reflection(Plane3D::new(0.0, 0.0, 1.0, 0.0));
        let f2 = Flector3D::reflection(Plane3D::new(0.0, 0.0, 1.0, -1.0));

        // reflect in z = 1 then z = 0: a translation by -2 along z
        let motor = f1 * f2;
        let p = Point3D::new(0.5, 0.5, 3.0);
        let expected = f1.transform_point(f2.transform_point(p));
        assert!(motor.transform_point(p).is_close_to(expected, 1e-5));
        assert!(motor
            .transform_point(Point3D::origin())
            .is_close_to(Point3D::new(0.0, 0.0, -2.0), 1e-5));
    }

    #[test]
    fn test_mixed_composition() {
        let motor = Motor3D::rotation(Radians::new(0.9), Bivec3::new(0.0, 1.0, 0.0));
        let flector = Flector3D::reflection(Plane3D::new(1.0, 0.0, 0.0, -0.5));
        let p = Point3D::new(0.4, -1.2, 2.0);

        // motor * flector applies the flector first
        let composed = motor * flector;
        let expected = motor.transform_point(flector.transform_point(p));
        assert!(composed.transform_point(p).is_close_to(expected, 1e-4));

        // flector * motor applies the motor first
        let composed = flector * motor;
        let expected = flector.transform_point(motor.transform_point(p));
        assert!(composed.transform_point(p).is_close_to(expected, 1e-4));
    }

    #[test]
    fn test_line_plane_transform() {
        let flector = Flector3D::reflection(Plane3D::new(0.0, 0.0, 1.0, -1.0));

        // the plane z = 3 reflects to z = -1
        let plane = flector
            .transform_plane(Plane3D::new(0.0, 0.0, 1.0, -3.0))
            .unitize();
        let expected = Plane3D::new(0.0, 0.0, 1.0, 1.0);
        let matches = plane.is_close_to(expected, 1e-5) || plane.is_close_to(-expected, 1e-5);
        assert!(matches, "{}", plane);

        // a line through (0, 0, 3) along x reflects to one through (0, 0, -1)
        let line = flector.transform_line(Line3D::from_point_and_direction(
            Point3D::new(0.0, 0.0, 3.0),
            Vec3::unit_x(),
        ));
        let p = flector.transform_point(Point3D::new(1.0, 0.0, 3.0));
        // the transformed point lies on the transformed line
        assert!(line.m.is_close_to(p.to_vec3().cross(line.v), 1e-4));
    }

    #[test]
    fn test_unitize() {
        let flector = Flector3D::new(
            FlatPoint3D::new(3.0, 0.0, 0.0, 0.0),
            Plane3D::new(0.0, 0.0, 3.0, -3.0),
        );
        let u = flector.unitize();
        assert!((u.g.normal().len() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_matrix_round_trip() {
        let flector = Motor3D::rotation(Radians::new(0.7), Bivec3::new(1.0, 0.0, 0.0))
            * Flector3D::reflection(Plane3D::new(0.0, 0.0, 1.0, -0.4));

        let mat = flector.to_transform();
        assert!(mat.determinant() < 0.0);

        let p = Point3D::new(-1.0, 0.3, 0.8);
        assert!(mat
            .transform_point(p.to_vec3())
            .is_close_to(flector.transform_point(p).to_vec3(), 1e-4));

        let restored = Flector3D::from_transform(mat);
        let same = restored.is_close_to(flector, 1e-4) || restored.is_close_to(-flector, 1e-4);
        assert!(same, "{} vs {}", flector, restored);
    }
}
