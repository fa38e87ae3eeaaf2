use core::ops::*;
use std::fmt::Display;

use crate::*;

/// 3D plane, the trivector of the homogeneous algebra
///
/// `(x, y, z)` is the normal and `w` the distance term; a point `p` lies on
/// the plane when `normal . p + w == 0`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Plane3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Plane3D {
    /// Create a new plane
    #[inline(always)]
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a plane from a normal and distance term
    #[inline]
    #[must_use]
    pub fn from_normal(n: Vec3<f32>, w: f32) -> Self {
        Self::new(n.x, n.y, n.z, w)
    }

    /// Create the plane through 3 points
    #[inline]
    #[must_use]
    pub fn from_points(p: Point3D, q: Point3D, r: Point3D) -> Self {
        p.wedge(q).wedge_point(r)
    }

    /// Create the plane containing a line and a point
    #[inline]
    #[must_use]
    pub fn from_line_and_point(line: Line3D, p: Point3D) -> Self {
        line.wedge_point(p)
    }

    /// Get the normal of the plane
    #[inline]
    #[must_use]
    pub fn normal(self) -> Vec3<f32> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Unitize the plane so its normal has length 1
    ///
    /// A zero normal produces inf/NaN components.
    #[must_use]
    pub fn unitize(self) -> Self {
        let scale = self.normal().len_sq().rsqrt();
        Self::new(
            self.x * scale,
            self.y * scale,
            self.z * scale,
            self.w * scale,
        )
    }

    /// Get the squared magnitude of the distance (bulk) component
    #[inline]
    pub fn squared_bulk_norm(self) -> f32 {
        self.w * self.w
    }

    /// Get the squared magnitude of the normal (weight) components
    #[inline]
    pub fn squared_weight_norm(self) -> f32 {
        self.normal().len_sq()
    }

    /// Get the signed distance from the plane to a point, for a unitized plane
    #[inline]
    #[must_use]
    pub fn distance_to_point(self, p: Point3D) -> f32 {
        self.normal().dot(p.to_vec3()) + self.w
    }

    /// Meet 2 planes at their intersection line
    ///
    /// Anticommutative: swapping the planes flips the line's orientation.
    /// Parallel planes produce a line at infinity (zero direction).
    #[must_use]
    pub fn antiwedge(self, rhs: Self) -> Line3D {
        Line3D {
            v: self.normal().cross(rhs.normal()),
            m: rhs.normal() * self.w - self.normal() * rhs.w,
        }
    }

    /// Meet the plane and a line at a point
    ///
    /// A line parallel to the plane produces a point at infinity (zero
    /// weight).
    #[inline]
    #[must_use]
    pub fn antiwedge_line(self, line: Line3D) -> FlatPoint3D {
        line.antiwedge_plane(self)
    }

    /// Get the point complementary to the plane
    ///
    /// The right complement negates the component signs, the left complement
    /// keeps them; the two differ because the plane has odd grade.
    #[inline]
    #[must_use]
    pub fn right_complement(self) -> FlatPoint3D {
        FlatPoint3D::new(-self.x, -self.y, -self.z, -self.w)
    }

    /// Get the point complementary to the plane, with the left-handed sign
    #[inline]
    #[must_use]
    pub fn left_complement(self) -> FlatPoint3D {
        FlatPoint3D::new(self.x, self.y, self.z, self.w)
    }
}

impl Neg for Plane3D {
    type Output = Self;

    /// Get the plane with the opposite orientation
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl ApproxEq<f32> for Plane3D {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.x.is_close_to(rhs.x, epsilon)
            && self.y.is_close_to(rhs.y, epsilon)
            && self.z.is_close_to(rhs.z, epsilon)
            && self.w.is_close_to(rhs.w, epsilon)
    }
}

impl Display for Plane3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "[{}, {}, {} | {}]",
            self.x, self.y, self.z, self.w
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_meet_two_planes() {
        // the xy-plane and the xz-plane meet along the x axis
        let line = Plane3D::new(0.0, 0.0, 1.0, 0.0).antiwedge(Plane3D::new(0.0, 1.0, 0.0, 0.0));
        assert!((line.v.x.abs() - 1.0).abs() < 1e-6);
        assert!(line.v.y.abs() < 1e-6);
        assert!(line.v.z.abs() < 1e-6);
        assert!(line.m.is_close_to(Vec3::zero(), 1e-6));
    }

    #[test]
    fn test_meet_offset_planes() {
        // z = 1 meets y = 0 in the line through (0, 0, 1) along x
        let g1 = Plane3D::new(0.0, 0.0, 1.0, -1.0);
        let g2 = Plane3D::new(0.0, 1.0, 0.0, 0.0);
        let line = g1.antiwedge(g2).unitize();

        let expected =
            Line3D::from_point_and_direction(Point3D::new(0.0, 0.0, 1.0), line.v).unitize();
        assert!(line.is_close_to(expected, 1e-5));

        // anticommutativity
        let flipped = g2.antiwedge(g1);
        assert!(flipped.unitize().is_close_to(-line, 1e-5));
    }

    #[test]
    fn test_meet_line_and_plane() {
        let plane = Plane3D::new(0.0, 0.0, 1.0, -1.0);
        let p = plane.antiwedge_line(Line3D::z_axis()).to_point();
        assert!(p.is_close_to(Point3D::new(0.0, 0.0, 1.0), 1e-6));

        // a line in the plane direction meets it at infinity
        let at_inf = plane.antiwedge_line(Line3D::x_axis());
        assert!(at_inf.w.abs() < 1e-6);
    }

    #[test]
    fn test_from_points() {
        let plane = Plane3D::from_points(
            Point3D::new(1.0, 0.0, 2.0),
            Point3D::new(0.0, 1.0, 2.0),
            Point3D::new(-1.0, 0.0, 2.0),
        )
        .unitize();
        // all three points lie on z = 2
        assert!(plane.distance_to_point(Point3D::new(5.0, 5.0, 2.0)).abs() < 1e-5);
        assert!((plane.distance_to_point(Point3D::new(0.0, 0.0, 0.0)).abs() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_complement_round_trip() {
        let plane = Plane3D::new(0.5, -1.0, 2.0, 3.0);
        assert!(plane
            .left_complement()
            .right_complement()
            .is_close_to(plane, 1e-6));
        assert!(plane
            .right_complement()
            .left_complement()
            .is_close_to(plane, 1e-6));
    }
}
