use core::ops::*;
use std::fmt::Display;

use crate::*;

/// 4D trivector, a plane in homogeneous space
///
/// `(x, y, z)` is the normal and `w` the distance term, the same
/// decomposition as [`Plane3D`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Trivec4D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Trivec4D {
    /// Create a new trivector
    #[inline(always)]
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a trivector from a normal and distance term
    #[inline]
    #[must_use]
    pub fn from_normal(n: Vec3<f32>, w: f32) -> Self {
        Self::new(n.x, n.y, n.z, w)
    }

    /// Create the trivector through 3 homogeneous points
    #[inline]
    #[must_use]
    pub fn from_points(p: Vec4<f32>, q: Vec4<f32>, r: Vec4<f32>) -> Self {
        p.wedge(q).wedge(r)
    }

    /// Get the normal of the trivector
    #[inline]
    #[must_use]
    pub fn normal(self) -> Vec3<f32> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Unitize the trivector so its normal has length 1
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

    /// Meet 2 trivectors at their intersection bivector
    #[must_use]
    pub fn antiwedge(self, rhs: Self) -> Bivec4D {
        Bivec4D {
            v: self.normal().cross(rhs.normal()),
            m: rhs.normal() * self.w - self.normal() * rhs.w,
        }
    }

    /// Meet the trivector and a bivector at a homogeneous point
    #[inline]
    #[must_use]
    pub fn antiwedge_bivector(self, b: Bivec4D) -> Vec4<f32> {
        b.antiwedge_trivector(self)
    }

    /// Get the point complementary to the trivector
    #[inline]
    #[must_use]
    pub fn right_complement(self) -> Vec4<f32> {
        Vec4::new(-self.x, -self.y, -self.z, -self.w)
    }

    /// Get the point complementary to the trivector, with the left-handed sign
    #[inline]
    #[must_use]
    pub fn left_complement(self) -> Vec4<f32> {
        Vec4::new(self.x, self.y, self.z, self.w)
    }
}

impl Neg for Trivec4D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl ApproxEq<f32> for Trivec4D {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.x.is_close_to(rhs.x, epsilon)
            && self.y.is_close_to(rhs.y, epsilon)
            && self.z.is_close_to(rhs.z, epsilon)
            && self.w.is_close_to(rhs.w, epsilon)
    }
}

impl Display for Trivec4D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "[{}, {}, {} | {}]",
            self.x, self.y, self.z, self.w
        ))
    }
}
