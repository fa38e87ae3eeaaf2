use core::ops::*;
use std::fmt::Display;

use crate::*;

/// 4D bivector, a line in homogeneous space
///
/// `v` is the direction and `m` the moment, the same decomposition as
/// [`Line3D`]; the difference is purely the boundary: this flavor pairs with
/// `Vec4`/`Mat4` call sites.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bivec4D {
    pub v: Vec3<f32>,
    pub m: Vec3<f32>,
}

impl Bivec4D {
    /// Create a new bivector from a direction and a moment
    #[inline(always)]
    #[must_use]
    pub fn new(v: Vec3<f32>, m: Vec3<f32>) -> Self {
        Self { v, m }
    }

    /// Create a bivector from 2 homogeneous points
    #[inline]
    #[must_use]
    pub fn from_points(p: Vec4<f32>, q: Vec4<f32>) -> Self {
        p.wedge(q)
    }

    /// Unitize the bivector so its direction has length 1
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

    /// Join the bivector and a homogeneous point into a trivector
    #[must_use]
    pub fn wedge(self, p: Vec4<f32>) -> Trivec4D {
        let n = self.m * p.w + self.v.cross(p.xyz());
        Trivec4D {
            x: n.x,
            y: n.y,
            z: n.z,
            w: -self.m.dot(p.xyz()),
        }
    }

    /// Meet 2 bivectors into their signed crossing measure
    #[inline]
    #[must_use]
    pub fn antiwedge(self, rhs: Self) -> f32 {
        -(self.v.dot(rhs.m) + self.m.dot(rhs.v))
    }

    /// Meet the bivector and a trivector at a homogeneous point
    #[inline]
    #[must_use]
    pub fn antiwedge_trivector(self, g: Trivec4D) -> Vec4<f32> {
        let p = self.m.cross(g.normal()) + self.v * g.w;
        p.extend(-self.v.dot(g.normal()))
    }

    /// Get the complementary bivector, swapping direction and moment
    #[inline]
    #[must_use]
    pub fn right_complement(self) -> Self {
        Self {
            v: -self.m,
            m: -self.v,
        }
    }

    /// Get the complementary bivector, swapping direction and moment
    #[inline]
    #[must_use]
    pub fn left_complement(self) -> Self {
        self.right_complement()
    }
}

impl Vec4<f32> {
    /// Join 2 homogeneous points into the line through both
    #[must_use]
    pub fn wedge(self, rhs: Self) -> Bivec4D {
        Bivec4D {
            v: rhs.xyz() * self.w - self.xyz() * rhs.w,
            m: self.xyz().cross(rhs.xyz()),
        }
    }

    /// Join the point and a bivector into a trivector
    #[inline]
    #[must_use]
    pub fn wedge_bivector(self, b: Bivec4D) -> Trivec4D {
        b.wedge(self)
    }

    /// Get the trivector complementary to the point
    #[inline]
    #[must_use]
    pub fn right_complement(self) -> Trivec4D {
        Trivec4D::new(self.x, self.y, self.z, self.w)
    }

    /// Get the trivector complementary to the point, with the left-handed sign
    #[inline]
    #[must_use]
    pub fn left_complement(self) -> Trivec4D {
        Trivec4D::new(-self.x, -self.y, -self.z, -self.w)
    }

    /// Unitize the homogeneous point so its weight becomes 1
    #[must_use]
    pub fn unitize(self) -> Self {
        self * self.w.recip()
    }
}

impl Neg for Bivec4D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            v: -self.v,
            m: -self.m,
        }
    }
}

impl ApproxEq<f32> for Bivec4D {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.v.is_close_to(rhs.v, epsilon) && self.m.is_close_to(rhs.m, epsilon)
    }
}

impl Display for Bivec4D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[v: {}, m: {}]", self.v, self.m))
    }
}
