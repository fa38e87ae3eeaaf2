use core::ops::*;
use std::fmt::Display;

use crate::*;

/// Conformal circle
///
/// `g` is the carrier plane (normal in xyz, offset term in w); `v` and `m`
/// are the round components placing the circle within it. The join of a
/// dipole and a round point, or the meet of two spheres.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Circle3D {
    pub g: Vec4<f32>,
    pub v: Vec3<f32>,
    pub m: Vec3<f32>,
}

impl Circle3D {
    /// Create a new circle
    #[inline(always)]
    #[must_use]
    pub fn new(g: Vec4<f32>, v: Vec3<f32>, m: Vec3<f32>) -> Self {
        Self { g, v, m }
    }

    /// Create a circle through 3 Euclidean points
    #[inline]
    #[must_use]
    pub fn from_points(a: Point3D, b: Point3D, c: Point3D) -> Self {
        Dipole3D::from_points(a, b).wedge(RoundPoint3D::from_point(c))
    }

    /// Get the carrier plane of the circle
    #[inline]
    #[must_use]
    pub fn carrier(self) -> Plane3D {
        Plane3D::new(self.g.x, self.g.y, self.g.z, self.g.w)
    }

    /// Unitize the circle so its carrier normal has length 1
    ///
    /// A zero normal produces inf/NaN components.
    #[must_use]
    pub fn unitize(self) -> Self {
        let scale = self.g.xyz().len_sq().rsqrt();
        Self {
            g: self.g * scale,
            v: self.v * scale,
            m: self.m * scale,
        }
    }

    /// Get the squared magnitude of the carrier offset (bulk) component
    #[inline]
    pub fn squared_bulk_norm(self) -> f32 {
        self.g.w * self.g.w
    }

    /// Get the squared magnitude of the carrier normal (weight) components
    #[inline]
    pub fn squared_weight_norm(self) -> f32 {
        self.g.xyz().len_sq()
    }

    /// Get the squared magnitude of the flat bulk components
    #[inline]
    pub fn squared_flat_bulk_norm(self) -> f32 {
        self.v.len_sq()
    }

    /// Get the squared magnitude of the flat weight components
    #[inline]
    pub fn squared_flat_weight_norm(self) -> f32 {
        self.m.len_sq()
    }

    /// Get the squared radius of the circle, scaled by the squared weight
    #[inline]
    pub fn squared_radius_norm(self) -> f32 {
        2.0 * self.g.xyz().dot(self.v) - self.g.w * self.g.w + self.m.len_sq()
    }

    /// Get the squared distance from the origin to the center, scaled by the squared weight squared
    #[inline]
    pub fn squared_center_norm(self) -> f32 {
        (self.g.xyz().cross(self.m) + self.g.xyz() * self.g.w).len_sq()
    }

    /// Get the null round point at the circle's center
    #[must_use]
    pub fn center(self) -> RoundPoint3D {
        let n = self.g.xyz();
        let c = -(n.cross(self.m)) - n * self.g.w;
        RoundPoint3D::new(
            c.x,
            c.y,
            c.z,
            n.len_sq(),
            (self.m.len_sq() + self.g.w * self.g.w) * 0.5,
        )
    }

    /// Get the circle with the same carrier and center and negated squared radius
    #[must_use]
    pub fn partner(self) -> Self {
        let w2 = self.g.xyz().len_sq();
        let r2 = self.squared_radius_norm();
        Self {
            g: self.g * w2,
            v: self.v * w2 - self.g.xyz() * r2,
            m: self.m * w2,
        }
    }

    /// Get the smallest sphere containing the circle
    #[must_use]
    pub fn container(self) -> Sphere3D {
        let n = self.g.xyz();
        let c = -(n.cross(self.m)) - n * self.g.w;
        Sphere3D::new(
            c.x,
            c.y,
            c.z,
            n.dot(self.v) - self.g.w * self.g.w,
            -n.len_sq(),
        )
    }

    /// Join the circle and a round point into the sphere through both
    #[must_use]
    pub fn wedge(self, q: RoundPoint3D) -> Sphere3D {
        let n = self.g.xyz();
        let s = n * q.u - self.v * q.w + self.m.cross(q.xyz());
        Sphere3D::new(
            s.x,
            s.y,
            s.z,
            self.v.dot(q.xyz()) + self.g.w * q.u,
            -(n.dot(q.xyz()) + self.g.w * q.w),
        )
    }

    /// Meet 2 circles at a round point
    #[must_use]
    pub fn antiwedge(self, rhs: Self) -> RoundPoint3D {
        self.complement()
            .wedge_dipole(rhs.complement())
            .complement()
    }

    /// Get the complementary dipole-grade element
    #[inline]
    #[must_use]
    pub fn complement(self) -> Dipole3D {
        Dipole3D {
            v: -self.v,
            m: self.m,
            p: (-self.g.xyz()).extend(-self.g.w),
        }
    }

    /// Get the dual dipole, applying the conformal metric before the complement
    #[inline]
    #[must_use]
    pub fn dual(self) -> Dipole3D {
        Dipole3D {
            v: self.g.xyz(),
            m: -self.m,
            p: self.v.extend(-self.g.w),
        }
    }

    /// Get the antidual dipole, applying the complement before the metric
    #[inline]
    #[must_use]
    pub fn antidual(self) -> Dipole3D {
        Dipole3D {
            v: -self.g.xyz(),
            m: self.m,
            p: (-self.v).extend(self.g.w),
        }
    }
}

impl Neg for Circle3D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            g: -self.g,
            v: -self.v,
            m: -self.m,
        }
    }
}

impl ApproxEq<f32> for Circle3D {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.g.is_close_to(rhs.g, epsilon)
            && self.v.is_close_to(rhs.v, epsilon)
            && self.m.is_close_to(rhs.m, epsilon)
    }
}

impl Display for Circle3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[g: {}, v: {}, m: {}]", self.g, self.v, self.m))
    }
}
