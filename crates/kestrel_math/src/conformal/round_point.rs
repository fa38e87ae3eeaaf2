use core::ops::*;
use std::fmt::Display;

use crate::*;

/// Conformal round point
///
/// A Euclidean point `p` embeds as `(p, 1, |p|^2 / 2)`; scaling gives the
/// same point with a different weight. Round points off the null cone carry
/// a squared radius, positive or negative, like an infinitesimal sphere.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RoundPoint3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    pub u: f32,
}

impl RoundPoint3D {
    /// Create a new round point
    #[inline(always)]
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32, w: f32, u: f32) -> Self {
        Self { x, y, z, w, u }
    }

    /// Embed a Euclidean point into the conformal model
    #[inline]
    #[must_use]
    pub fn from_point(p: Point3D) -> Self {
        let v = p.to_vec3();
        Self::new(v.x, v.y, v.z, 1.0, v.len_sq() * 0.5)
    }

    /// Get the spatial components
    #[inline]
    #[must_use]
    pub fn xyz(self) -> Vec3<f32> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Project back to a Euclidean point
    #[inline]
    #[must_use]
    pub fn position(self) -> Point3D {
        Point3D::from_vec3(self.xyz() / self.w)
    }

    /// Unitize the round point so its weight becomes 1
    ///
    /// A zero weight produces inf/NaN components.
    #[must_use]
    pub fn unitize(self) -> Self {
        let rcp = self.w.recip();
        Self::new(self.x * rcp, self.y * rcp, self.z * rcp, 1.0, self.u * rcp)
    }

    /// Get the squared magnitude of the spatial (bulk) components
    #[inline]
    pub fn squared_bulk_norm(self) -> f32 {
        self.xyz().len_sq()
    }

    /// Get the squared magnitude of the weight component
    #[inline]
    pub fn squared_weight_norm(self) -> f32 {
        self.w * self.w
    }

    /// Get the squared magnitude of the flat bulk component
    #[inline]
    pub fn squared_flat_bulk_norm(self) -> f32 {
        self.u * self.u
    }

    /// Get the squared radius carried by the round point, scaled by the squared weight
    #[inline]
    pub fn squared_radius_norm(self) -> f32 {
        self.xyz().len_sq() - 2.0 * self.w * self.u
    }

    /// Get the squared distance from the origin to the center, scaled by the squared weight
    #[inline]
    pub fn squared_center_norm(self) -> f32 {
        self.xyz().len_sq()
    }

    /// Get the null point at the round point's center
    #[must_use]
    pub fn center(self) -> Self {
        let c = self.xyz() * self.w;
        Self::new(c.x, c.y, c.z, self.w * self.w, self.xyz().len_sq() * 0.5)
    }

    /// Get the round point with the same center and negated squared radius
    #[must_use]
    pub fn partner(self) -> Self {
        let w2 = self.w * self.w;
        let c = self.xyz() * w2;
        Self::new(
            c.x,
            c.y,
            c.z,
            w2 * self.w,
            self.w * (self.xyz().len_sq() - self.u * self.w),
        )
    }

    /// Get the smallest sphere containing the round point
    #[must_use]
    pub fn container(self) -> Sphere3D {
        let c = self.xyz() * self.w;
        Sphere3D::new(c.x, c.y, c.z, -self.w * self.u, -self.w * self.w)
    }

    /// Join 2 round points into the point pair containing both
    #[must_use]
    pub fn wedge(self, rhs: Self) -> Dipole3D {
        let a = self.xyz();
        let b = rhs.xyz();
        Dipole3D {
            v: b * self.w - a * rhs.w,
            m: a.cross(b),
            p: (a * rhs.u - b * self.u).extend(self.w * rhs.u - self.u * rhs.w),
        }
    }

    /// Join the round point and a sphere into the incidence antiscalar
    ///
    /// Zero exactly when the point lies on the sphere, making this the
    /// point-on-sphere test primitive.
    #[inline]
    #[must_use]
    pub fn wedge_sphere(self, s: Sphere3D) -> f32 {
        self.x * s.x + self.y * s.y + self.z * s.z + self.w * s.w + self.u * s.u
    }

    /// Get the complementary sphere-grade element (a component copy in this basis)
    #[inline]
    #[must_use]
    pub fn complement(self) -> Sphere3D {
        Sphere3D::new(self.x, self.y, self.z, self.w, self.u)
    }

    /// Get the dual sphere, applying the conformal metric before the complement
    #[inline]
    #[must_use]
    pub fn dual(self) -> Sphere3D {
        Sphere3D::new(self.x, self.y, self.z, -self.u, -self.w)
    }

    /// Get the antidual sphere, applying the complement before the metric
    #[inline]
    #[must_use]
    pub fn antidual(self) -> Sphere3D {
        Sphere3D::new(-self.x, -self.y, -self.z, self.u, self.w)
    }
}

impl Neg for RoundPoint3D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w, -self.u)
    }
}

impl Mul<f32> for RoundPoint3D {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(
            self.x * rhs,
            self.y * rhs,
            self.z * rhs,
            self.w * rhs,
            self.u * rhs,
        )
    }
}

impl ApproxEq<f32> for RoundPoint3D {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.x.is_close_to(rhs.x, epsilon)
            && self.y.is_close_to(rhs.y, epsilon)
            && self.z.is_close_to(rhs.z, epsilon)
            && self.w.is_close_to(rhs.w, epsilon)
            && self.u.is_close_to(rhs.u, epsilon)
    }
}

impl Display for RoundPoint3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "({}, {}, {} | {} | {})",
            self.x, self.y, self.z, self.w, self.u
        ))
    }
}
