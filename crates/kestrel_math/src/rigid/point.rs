use core::ops::*;
use std::fmt::Display;

use crate::*;

/// 3D Euclidean point with an implicit homogeneous weight of 1
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    /// Create a new point
    #[inline(always)]
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Get the origin
    #[inline]
    #[must_use]
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create a point from a position vector
    #[inline]
    #[must_use]
    pub fn from_vec3(v: Vec3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Get the position vector of the point
    #[inline]
    #[must_use]
    pub fn to_vec3(self) -> Vec3<f32> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Extend the point with an explicit homogeneous weight of 1
    #[inline]
    #[must_use]
    pub fn to_flat(self) -> FlatPoint3D {
        FlatPoint3D::new(self.x, self.y, self.z, 1.0)
    }

    /// Join 2 points into the line through both
    ///
    /// Anticommutative: swapping the points flips the line's orientation.
    #[must_use]
    pub fn wedge(self, rhs: Self) -> Line3D {
        let p = self.to_vec3();
        let q = rhs.to_vec3();
        Line3D {
            v: q - p,
            m: p.cross(q),
        }
    }

    /// Join the point and a line into the plane containing both
    #[inline]
    #[must_use]
    pub fn wedge_line(self, line: Line3D) -> Plane3D {
        line.wedge_point(self)
    }
}

impl Add<Vec3<f32>> for Point3D {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Vec3<f32>) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3D {
    type Output = Vec3<f32>;

    #[inline]
    fn sub(self, rhs: Self) -> Vec3<f32> {
        self.to_vec3() - rhs.to_vec3()
    }
}

impl ApproxEq<f32> for Point3D {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.to_vec3().is_close_to(rhs.to_vec3(), epsilon)
    }
}

impl Display for Point3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {})", self.x, self.y, self.z))
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// 3D point with an explicit homogeneous weight
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FlatPoint3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl FlatPoint3D {
    /// Create a new flat point
    #[inline(always)]
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a flat point from a position vector and a weight
    #[inline]
    #[must_use]
    pub fn from_vec3(v: Vec3<f32>, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Get the (weighted) position vector
    #[inline]
    #[must_use]
    pub fn xyz(self) -> Vec3<f32> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Unitize the point so its weight becomes 1
    ///
    /// A zero weight produces inf/NaN components.
    #[must_use]
    pub fn unitize(self) -> Self {
        let rcp = self.w.recip();
        Self::new(self.x * rcp, self.y * rcp, self.z * rcp, 1.0)
    }

    /// Project down to a Euclidean point
    #[inline]
    #[must_use]
    pub fn to_point(self) -> Point3D {
        let u = self.unitize();
        Point3D::new(u.x, u.y, u.z)
    }

    /// Get the squared magnitude of the bulk (position) components
    #[inline]
    pub fn squared_bulk_norm(self) -> f32 {
        self.xyz().len_sq()
    }

    /// Get the squared magnitude of the weight component
    #[inline]
    pub fn squared_weight_norm(self) -> f32 {
        self.w * self.w
    }

    /// Join 2 flat points into the line through both
    #[must_use]
    pub fn wedge(self, rhs: Self) -> Line3D {
        Line3D {
            v: rhs.xyz() * self.w - self.xyz() * rhs.w,
            m: self.xyz().cross(rhs.xyz()),
        }
    }

    /// Get the plane complementary to the point
    ///
    /// The right complement keeps the component signs, the left complement
    /// negates them; the two differ because the point has odd grade.
    #[inline]
    #[must_use]
    pub fn right_complement(self) -> Plane3D {
        Plane3D::new(self.x, self.y, self.z, self.w)
    }

    /// Get the plane complementary to the point, with the left-handed sign
    #[inline]
    #[must_use]
    pub fn left_complement(self) -> Plane3D {
        Plane3D::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Neg for FlatPoint3D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl ApproxEq<f32> for FlatPoint3D {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.x.is_close_to(rhs.x, epsilon)
            && self.y.is_close_to(rhs.y, epsilon)
            && self.z.is_close_to(rhs.z, epsilon)
            && self.w.is_close_to(rhs.w, epsilon)
    }
}

impl Display for FlatPoint3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "({}, {}, {} | {})",
            self.x, self.y, self.z, self.w
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_join_two_points() {
        let line = Point3D::new(0.0, 0.0, 0.0).wedge(Point3D::new(1.0, 0.0, 0.0));
        assert!(line.v.is_close_to(Vec3::new(1.0, 0.0, 0.0), 1e-6));
        assert!(line.m.is_close_to(Vec3::zero(), 1e-6));

        // anticommutativity
        let flipped = Point3D::new(1.0, 0.0, 0.0).wedge(Point3D::new(0.0, 0.0, 0.0));
        assert!(flipped.v.is_close_to(-line.v, 1e-6));
    }

    #[test]
    fn test_join_off_origin() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        let q = Point3D::new(1.0, 2.0, 5.0);
        let line = p.wedge(q);
        assert!(line.v.is_close_to(Vec3::new(0.0, 0.0, 2.0), 1e-6));
        // the moment is the support point crossed with the direction
        assert!(line.m.is_close_to(p.to_vec3().cross(line.v), 1e-5));
        assert!(line.m.is_close_to(q.to_vec3().cross(line.v), 1e-5));
    }

    #[test]
    fn test_flat_point() {
        let fp = FlatPoint3D::new(2.0, 4.0, 6.0, 2.0);
        let u = fp.unitize();
        assert!(u.is_close_to(FlatPoint3D::new(1.0, 2.0, 3.0, 1.0), 1e-6));
        assert_eq!(u.to_point(), Point3D::new(1.0, 2.0, 3.0));
        assert_eq!(fp.squared_weight_norm(), 4.0);
        assert_eq!(fp.squared_bulk_norm(), 56.0);

        // the flat join matches the implicit-weight join after unitizing
        let a = Point3D::new(0.0, 1.0, 0.0);
        let b = Point3D::new(0.0, 1.0, 4.0);
        let l0 = a.wedge(b);
        let l1 = a.to_flat().wedge(b.to_flat());
        assert!(l0.v.is_close_to(l1.v, 1e-6));
        assert!(l0.m.is_close_to(l1.m, 1e-6));
    }

    #[test]
    fn test_complement_round_trip() {
        let fp = FlatPoint3D::new(1.0, -2.0, 3.0, 4.0);
        let restored = fp.left_complement().right_complement();
        assert!(restored.is_close_to(fp, 1e-6));

        let restored = fp.right_complement().left_complement();
        assert!(restored.is_close_to(fp, 1e-6));
    }
}
