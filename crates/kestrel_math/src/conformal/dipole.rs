use core::ops::*;
use std::fmt::Display;

use crate::*;

/// Conformal dipole, a pair of round points
///
/// `v` and `m` are the direction and moment of the carrier line; `p` holds
/// the round components locating the pair along it. The join of two round
/// points, or the meet of a sphere and a circle.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Dipole3D {
    pub v: Vec3<f32>,
    pub m: Vec3<f32>,
    pub p: Vec4<f32>,
}

impl Dipole3D {
    /// Create a new dipole
    #[inline(always)]
    #[must_use]
    pub fn new(v: Vec3<f32>, m: Vec3<f32>, p: Vec4<f32>) -> Self {
        Self { v, m, p }
    }

    /// Create a dipole from 2 Euclidean points
    #[inline]
    #[must_use]
    pub fn from_points(a: Point3D, b: Point3D) -> Self {
        RoundPoint3D::from_point(a).wedge(RoundPoint3D::from_point(b))
    }

    /// Get the carrier line of the dipole
    #[inline]
    #[must_use]
    pub fn carrier(self) -> Line3D {
        Line3D::new(self.v, self.m)
    }

    /// Unitize the dipole so its carrier direction has length 1
    ///
    /// A zero direction produces inf/NaN components.
    #[must_use]
    pub fn unitize(self) -> Self {
        let scale = self.v.len_sq().rsqrt();
        Self {
            v: self.v * scale,
            m: self.m * scale,
            p: self.p * scale,
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

    /// Get the squared magnitude of the flat bulk components
    #[inline]
    pub fn squared_flat_bulk_norm(self) -> f32 {
        self.p.xyz().len_sq()
    }

    /// Get the squared magnitude of the flat weight component
    #[inline]
    pub fn squared_flat_weight_norm(self) -> f32 {
        self.p.w * self.p.w
    }

    /// Get the squared half-separation of the point pair, scaled by the squared weight
    #[inline]
    pub fn squared_radius_norm(self) -> f32 {
        self.p.w * self.p.w - self.m.len_sq() - 2.0 * self.v.dot(self.p.xyz())
    }

    /// Get the squared distance from the origin to the center, scaled by the squared weight squared
    #[inline]
    pub fn squared_center_norm(self) -> f32 {
        (self.v.cross(self.m) + self.v * self.p.w).len_sq()
    }

    /// Get the null round point at the dipole's center
    #[must_use]
    pub fn center(self) -> RoundPoint3D {
        let c = self.v.cross(self.m) + self.v * self.p.w;
        RoundPoint3D::new(
            c.x,
            c.y,
            c.z,
            self.v.len_sq(),
            (self.m.len_sq() + self.p.w * self.p.w) * 0.5,
        )
    }

    /// Get the dipole with the same carrier and center and negated squared radius
    #[must_use]
    pub fn partner(self) -> Self {
        let w2 = self.v.len_sq();
        let r2 = self.squared_radius_norm();
        Self {
            v: self.v * w2,
            m: self.m * w2,
            p: (self.p.xyz() * w2 + self.v * r2).extend(self.p.w * w2),
        }
    }

    /// Get the smallest sphere containing the point pair
    #[must_use]
    pub fn container(self) -> Sphere3D {
        let c = self.v.cross(self.m) + self.v * self.p.w;
        Sphere3D::new(
            c.x,
            c.y,
            c.z,
            -(self.m.len_sq() + self.v.dot(self.p.xyz())),
            -self.v.len_sq(),
        )
    }

    /// Join the dipole and a round point into the circle through all three
    #[must_use]
    pub fn wedge(self, c: RoundPoint3D) -> Circle3D {
        let cv = c.xyz();
        let g = self.m * c.w + self.v.cross(cv);
        Circle3D {
            g: g.extend(-self.m.dot(cv)),
            v: self.m * c.u - self.p.xyz().cross(cv),
            m: cv * self.p.w - self.p.xyz() * c.w - self.v * c.u,
        }
    }

    /// Join 2 dipoles into the sphere-grade element containing both
    #[must_use]
    pub fn wedge_dipole(self, rhs: Self) -> Sphere3D {
        let s = self.v.cross(rhs.p.xyz()) + rhs.v.cross(self.p.xyz())
            + self.m * rhs.p.w
            + rhs.m * self.p.w;
        Sphere3D::new(
            s.x,
            s.y,
            s.z,
            -(self.m.dot(rhs.p.xyz()) + self.p.xyz().dot(rhs.m)),
            -(self.v.dot(rhs.m) + self.m.dot(rhs.v)),
        )
    }

    /// Get the complementary circle-grade element
    #[inline]
    #[must_use]
    pub fn complement(self) -> Circle3D {
        Circle3D {
            g: (-self.p.xyz()).extend(-self.p.w),
            v: -self.v,
            m: self.m,
        }
    }

    /// Get the dual circle, applying the conformal metric before the complement
    #[inline]
    #[must_use]
    pub fn dual(self) -> Circle3D {
        Circle3D {
            g: (-self.v).extend(self.p.w),
            v: -self.p.xyz(),
            m: self.m,
        }
    }

    /// Get the antidual circle, applying the complement before the metric
    #[inline]
    #[must_use]
    pub fn antidual(self) -> Circle3D {
        Circle3D {
            g: self.v.extend(-self.p.w),
            v: self.p.xyz(),
            m: -self.m,
        }
    }
}

impl Neg for Dipole3D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            v: -self.v,
            m: -self.m,
            p: -self.p,
        }
    }
}

impl ApproxEq<f32> for Dipole3D {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.v.is_close_to(rhs.v, epsilon)
            && self.m.is_close_to(rhs.m, epsilon)
            && self.p.is_close_to(rhs.p, epsilon)
    }
}

impl Display for Dipole3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[v: {}, m: {}, p: {}]", self.v, self.m, self.p))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_from_points() {
        let d = Dipole3D::from_points(Point3D::new(0.0, 1.0, 0.0), Point3D::new(4.0, 1.0, 0.0));

        // the carrier is the line through both points
        let carrier = d.carrier().unitize();
        assert!(carrier.v.is_close_to(Vec3::unit_x(), 1e-6));

        // center halfway between, radius half the separation
        let center = d.center().unitize();
        assert!(center.position().is_close_to(Point3D::new(2.0, 1.0, 0.0), 1e-5));

        let w2 = d.squared_weight_norm();
        assert!((d.squared_radius_norm() / w2 - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_partner() {
        let d = Dipole3D::from_points(Point3D::new(1.0, 0.0, 2.0), Point3D::new(1.0, 0.0, 4.0));
        let p = d.partner();

        // same carrier direction, same center
        assert!(p.unitize().v.is_close_to(d.unitize().v, 1e-5));
        assert!(p
            .center()
            .unitize()
            .position()
            .is_close_to(d.center().unitize().position(), 1e-4));

        // negated squared radius, relative to the weight
        let r_d = d.squared_radius_norm() / d.squared_weight_norm();
        let r_p = p.squared_radius_norm() / p.squared_weight_norm();
        assert!((r_d + r_p).abs() < 1e-4);
    }

    #[test]
    fn test_container() {
        let d = Dipole3D::from_points(Point3D::new(0.0, 1.0, 0.0), Point3D::new(3.0, 1.0, 0.0));
        let sphere = d.container().unitize();
        let center = sphere.center().unitize().position();
        assert!(center.is_close_to(Point3D::new(1.5, 1.0, 0.0), 1e-4));
        assert!((sphere.squared_radius_norm() - 2.25).abs() < 1e-4);
    }

    #[test]
    fn test_dual_round_trip() {
        let d = Dipole3D::new(
            Vec3::new(1.0, 2.0, -1.0),
            Vec3::new(0.5, -1.0, 0.0),
            Vec4::new(2.0, 0.0, 1.0, -3.0),
        );
        assert!(d.antidual().dual().is_close_to(d, 1e-6));
        assert!(d.dual().antidual().is_close_to(d, 1e-6));

        // dual and antidual circles share the dipole's center
        let d = Dipole3D::from_points(Point3D::new(1.0, 0.0, 0.0), Point3D::new(3.0, 0.0, 0.0));
        let dual_center = d.dual().center().unitize().position();
        assert!(dual_center.is_close_to(Point3D::new(2.0, 0.0, 0.0), 1e-4));
    }
}
