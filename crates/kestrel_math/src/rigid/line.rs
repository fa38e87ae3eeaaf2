use core::ops::*;
use std::fmt::Display;

use crate::*;

/// 3D line, the bivector of the homogeneous algebra
///
/// `v` is the direction and `m` the moment; for any point `p` on the line,
/// `m == p x v`. A valid line satisfies `v . m == 0`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Line3D {
    pub v: Vec3<f32>,
    pub m: Vec3<f32>,
}

impl Line3D {
    /// Create a new line from a direction and a moment
    #[inline(always)]
    #[must_use]
    pub fn new(v: Vec3<f32>, m: Vec3<f32>) -> Self {
        Self { v, m }
    }

    /// Create a line through 2 points
    #[inline]
    #[must_use]
    pub fn from_points(p: Point3D, q: Point3D) -> Self {
        p.wedge(q)
    }

    /// Create a line through a point with the given direction
    #[inline]
    #[must_use]
    pub fn from_point_and_direction(p: Point3D, direction: Vec3<f32>) -> Self {
        Self {
            v: direction,
            m: p.to_vec3().cross(direction),
        }
    }

    /// Get the line through the origin along the x axis
    #[inline]
    #[must_use]
    pub fn x_axis() -> Self {
        Self::new(Vec3::unit_x(), Vec3::zero())
    }

    /// Get the line through the origin along the y axis
    #[inline]
    #[must_use]
    pub fn y_axis() -> Self {
        Self::new(Vec3::unit_y(), Vec3::zero())
    }

    /// Get the line through the origin along the z axis
    #[inline]
    #[must_use]
    pub fn z_axis() -> Self {
        Self::new(Vec3::unit_z(), Vec3::zero())
    }

    /// Unitize the line so its direction has length 1
    ///
    /// A zero direction produces inf/NaN components.
    #[must_use]
    pub fn unitize(self) -> Self {
        let scale = self.v.len_sq().rsqrt();
        Self {
            v: self.v * scale,
            m: self.m * scale,
        }
    }

    /// Get the squared magnitude of the moment (bulk) components
    #[inline]
    pub fn squared_bulk_norm(self) -> f32 {
        self.m.len_sq()
    }

    /// Get the squared magnitude of the direction (weight) components
    #[inline]
    pub fn squared_weight_norm(self) -> f32 {
        self.v.len_sq()
    }

    /// Get the point on the line closest to the origin
    ///
    /// For a unitized line the moment's magnitude is the line's distance to
    /// the origin, and `v x m` is the foot of that perpendicular.
    #[must_use]
    pub fn support(self) -> Point3D {
        let u = self.unitize();
        Point3D::from_vec3(u.v.cross(u.m))
    }

    /// Join the line and a point into the plane containing both
    #[must_use]
    pub fn wedge_point(self, p: Point3D) -> Plane3D {
        let pv = p.to_vec3();
        let n = self.m + self.v.cross(pv);
        Plane3D {
            x: n.x,
            y: n.y,
            z: n.z,
            w: -self.m.dot(pv),
        }
    }

    /// Join the line and a flat point into the plane containing both
    #[must_use]
    pub fn wedge_flat_point(self, p: FlatPoint3D) -> Plane3D {
        let n = self.m * p.w + self.v.cross(p.xyz());
        Plane3D {
            x: n.x,
            y: n.y,
            z: n.z,
            w: -self.m.dot(p.xyz()),
        }
    }

    /// Meet 2 lines into their signed crossing measure
    ///
    /// Positive when `rhs` crosses over `self` with a right-handed sense,
    /// negative for the opposite sense, and zero when the lines intersect
    /// or are parallel.
    #[inline]
    #[must_use]
    pub fn antiwedge(self, rhs: Self) -> f32 {
        -(self.v.dot(rhs.m) + self.m.dot(rhs.v))
    }

    /// Meet the line and a plane at a point
    #[inline]
    #[must_use]
    pub fn antiwedge_plane(self, g: Plane3D) -> FlatPoint3D {
        let p = self.m.cross(g.normal()) + self.v * g.w;
        FlatPoint3D::from_vec3(p, -self.v.dot(g.normal()))
    }

    /// Get the complementary line, swapping direction and moment
    ///
    /// The line has even grade, so the left and right complements agree.
    #[inline]
    #[must_use]
    pub fn right_complement(self) -> Self {
        Self {
            v: -self.m,
            m: -self.v,
        }
    }

    /// Get the complementary line, swapping direction and moment
    #[inline]
    #[must_use]
    pub fn left_complement(self) -> Self {
        self.right_complement()
    }
}

impl Neg for Line3D {
    type Output = Self;

    /// Get the line with the opposite orientation
    #[inline]
    fn neg(self) -> Self {
        Self {
            v: -self.v,
            m: -self.m,
        }
    }
}

impl ApproxEq<f32> for Line3D {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.v.is_close_to(rhs.v, epsilon) && self.m.is_close_to(rhs.m, epsilon)
    }
}

impl Display for Line3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[v: {}, m: {}]", self.v, self.m))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_plane_through_line_and_point() {
        // the x axis joined with a point on the y axis spans the xy-plane
        let plane = Line3D::x_axis().wedge_point(Point3D::new(0.0, 1.0, 0.0));
        assert!(plane.normal().normalize().is_close_to(Vec3::unit_z(), 1e-6));
        assert!(plane.w.abs() < 1e-6);

        // the wedge with a point is symmetric
        let other = Point3D::new(0.0, 1.0, 0.0).wedge_line(Line3D::x_axis());
        assert!(other.is_close_to(plane, 1e-6));
    }

    #[test]
    fn test_crossing_sign() {
        let l1 = Line3D::x_axis();
        // line above l1 at z = 1, heading +y
        let l2 = Line3D::from_point_and_direction(Point3D::new(0.0, 0.0, 1.0), Vec3::unit_y());
        assert!(l1.antiwedge(l2) > 0.0);
        assert!(l2.antiwedge(l1) > 0.0);

        // reversing one line flips the sense
        assert!(l1.antiwedge(-l2) < 0.0);

        // intersecting lines cross at zero
        let l3 = Line3D::y_axis();
        assert!(l1.antiwedge(l3).abs() < 1e-6);

        // parallel lines cross at zero
        let l4 = Line3D::from_point_and_direction(Point3D::new(0.0, 1.0, 0.0), Vec3::unit_x());
        assert!(l1.antiwedge(l4).abs() < 1e-6);
    }

    #[test]
    fn test_unitize_support() {
        let line = Line3D::from_points(Point3D::new(0.0, 3.0, 4.0), Point3D::new(2.0, 3.0, 4.0));
        let u = line.unitize();
        assert!((u.v.len() - 1.0).abs() < 1e-5);
        // perpendicular distance to the origin is the unitized moment's length
        assert!((u.m.len() - 5.0).abs() < 1e-4);
        assert!(line.support().is_close_to(Point3D::new(0.0, 3.0, 4.0), 1e-4));
    }

    #[test]
    fn test_complement_round_trip() {
        let line = Line3D::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.5, 2.0));
        let restored = line.left_complement().right_complement();
        assert!(restored.is_close_to(line, 1e-6));
    }
}
