use core::ops::*;
use std::fmt::Display;

use crate::*;

/// Conformal sphere
///
/// Stored on the complement basis, so the component copy between a sphere
/// and a round point is the grade complement. A unitized sphere has
/// `u == -1`, center `(x, y, z)`, and `squared_radius_norm` equal to its
/// squared radius.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Sphere3D {
    pub u: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Sphere3D {
    /// Create a new sphere
    #[inline(always)]
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32, w: f32, u: f32) -> Self {
        Self { u, x, y, z, w }
    }

    /// Create a sphere from a center and radius
    #[must_use]
    pub fn from_center_and_radius(center: Point3D, radius: f32) -> Self {
        let c = center.to_vec3();
        Self::new(
            c.x,
            c.y,
            c.z,
            (radius * radius - c.len_sq()) * 0.5,
            -1.0,
        )
    }

    /// Create a sphere through 4 Euclidean points
    #[inline]
    #[must_use]
    pub fn from_points(a: Point3D, b: Point3D, c: Point3D, d: Point3D) -> Self {
        Circle3D::from_points(a, b, c).wedge(RoundPoint3D::from_point(d))
    }

    /// Get the spatial components
    #[inline]
    #[must_use]
    pub fn xyz(self) -> Vec3<f32> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Unitize the sphere so its weight becomes -1
    ///
    /// A zero weight produces inf/NaN components.
    #[must_use]
    pub fn unitize(self) -> Self {
        let rcp = -self.u.recip();
        Self::new(self.x * rcp, self.y * rcp, self.z * rcp, self.w * rcp, -1.0)
    }

    /// Get the squared magnitude of the weight component
    #[inline]
    pub fn squared_weight_norm(self) -> f32 {
        self.u * self.u
    }

    /// Get the squared magnitude of the flat bulk component
    #[inline]
    pub fn squared_flat_bulk_norm(self) -> f32 {
        self.w * self.w
    }

    /// Get the squared magnitude of the flat weight components
    #[inline]
    pub fn squared_flat_weight_norm(self) -> f32 {
        self.xyz().len_sq()
    }

    /// Get the squared radius of the sphere, scaled by the squared weight
    #[inline]
    pub fn squared_radius_norm(self) -> f32 {
        self.xyz().len_sq() - 2.0 * self.u * self.w
    }

    /// Get the squared distance from the origin to the center, scaled by the squared weight
    #[inline]
    pub fn squared_center_norm(self) -> f32 {
        self.xyz().len_sq()
    }

    /// Get the null round point at the sphere's center
    #[must_use]
    pub fn center(self) -> RoundPoint3D {
        let c = self.xyz() * -self.u;
        RoundPoint3D::new(c.x, c.y, c.z, self.u * self.u, self.xyz().len_sq() * 0.5)
    }

    /// Get the sphere with the same center and negated squared radius
    #[must_use]
    pub fn partner(self) -> Self {
        let u2 = self.u * self.u;
        let c = self.xyz() * u2;
        Self::new(
            c.x,
            c.y,
            c.z,
            self.u * (self.xyz().len_sq() - self.w * self.u),
            u2 * self.u,
        )
    }

    /// Meet 2 spheres at their intersection circle
    ///
    /// Disjoint spheres produce a circle with a negative squared radius.
    #[must_use]
    pub fn antiwedge(self, rhs: Self) -> Circle3D {
        self.complement().wedge(rhs.complement()).complement()
    }

    /// Meet the sphere and a circle at a point pair
    #[must_use]
    pub fn antiwedge_circle(self, c: Circle3D) -> Dipole3D {
        c.complement().wedge(self.complement()).complement()
    }

    /// Meet the sphere and a dipole at a round point
    #[must_use]
    pub fn antiwedge_dipole(self, d: Dipole3D) -> RoundPoint3D {
        // the point-grade factor wedges from the left with an odd-grade flip
        -(d.complement().wedge(self.complement()).complement())
    }

    /// Get the complementary round-point-grade element (a component copy in this basis)
    #[inline]
    #[must_use]
    pub fn complement(self) -> RoundPoint3D {
        RoundPoint3D::new(self.x, self.y, self.z, self.w, self.u)
    }

    /// Get the dual round point, applying the conformal metric before the complement
    #[inline]
    #[must_use]
    pub fn dual(self) -> RoundPoint3D {
        RoundPoint3D::new(-self.x, -self.y, -self.z, self.u, self.w)
    }

    /// Get the antidual round point, applying the complement before the metric
    #[inline]
    #[must_use]
    pub fn antidual(self) -> RoundPoint3D {
        RoundPoint3D::new(self.x, self.y, self.z, -self.u, -self.w)
    }
}

impl Neg for Sphere3D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w, -self.u)
    }
}

impl Mul<f32> for Sphere3D {
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

impl ApproxEq<f32> for Sphere3D {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.x.is_close_to(rhs.x, epsilon)
            && self.y.is_close_to(rhs.y, epsilon)
            && self.z.is_close_to(rhs.z, epsilon)
            && self.w.is_close_to(rhs.w, epsilon)
            && self.u.is_close_to(rhs.u, epsilon)
    }
}

impl Display for Sphere3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "({} | {}, {}, {} | {})",
            self.u, self.x, self.y, self.z, self.w
        ))
    }
}
