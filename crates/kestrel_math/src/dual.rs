use core::ops::*;
use std::fmt::Display;

use crate::*;

/// Dual number `s + t * eps` with `eps^2 == 0`
///
/// Lifting a scalar function through a dual number carries its first
/// derivative along for free: `f(s + t*eps) = f(s) + t*f'(s)*eps`. Feed in
/// `t = 1` to evaluate a function and its instantaneous rate of change at
/// `s` in one pass, with no symbolic differentiation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DualNum<T: Copy> {
    pub s: T,
    pub t: T,
}

impl<T: Copy> DualNum<T> {
    /// Create a new dual number
    #[inline(always)]
    #[must_use]
    pub fn new(s: T, t: T) -> Self {
        Self { s, t }
    }
}

impl<T: Real> DualNum<T> {
    /// Create a dual number with no dual part
    #[inline]
    #[must_use]
    pub fn from_real(s: T) -> Self {
        Self { s, t: T::zero() }
    }

    /// Create the dual number `s + eps`, the evaluation point for a derivative
    #[inline]
    #[must_use]
    pub fn variable(s: T) -> Self {
        Self { s, t: T::one() }
    }

    /// Calculate the reciprocal
    #[must_use]
    pub fn recip(self) -> Self {
        let rcp = self.s.recip();
        Self {
            s: rcp,
            t: -self.t * rcp * rcp,
        }
    }

    /// Calculate the square root and its derivative
    #[must_use]
    pub fn sqrt(self) -> Self {
        let root = self.s.sqrt();
        Self {
            s: root,
            t: self.t / (T::from_i32(2) * root),
        }
    }

    /// Calculate the reciprocal square root and its derivative
    #[must_use]
    pub fn rsqrt(self) -> Self {
        let rcp_root = self.s.rsqrt();
        let half = T::from_f32(0.5);
        Self {
            s: rcp_root,
            t: -self.t * half * rcp_root * rcp_root * rcp_root,
        }
    }

    /// Calculate the exponential and its derivative
    #[must_use]
    pub fn exp(self) -> Self {
        let e = self.s.exp();
        Self {
            s: e,
            t: self.t * e,
        }
    }

    /// Calculate the natural logarithm and its derivative
    #[must_use]
    pub fn ln(self) -> Self {
        Self {
            s: self.s.ln(),
            t: self.t / self.s,
        }
    }

    /// Calculate the sine and its derivative
    #[must_use]
    pub fn sin(self) -> Self {
        let (sin, cos) = self.s.sin_cos();
        Self {
            s: sin,
            t: self.t * cos,
        }
    }

    /// Calculate the cosine and its derivative
    #[must_use]
    pub fn cos(self) -> Self {
        let (sin, cos) = self.s.sin_cos();
        Self {
            s: cos,
            t: -self.t * sin,
        }
    }

    /// Calculate the tangent and its derivative
    #[must_use]
    pub fn tan(self) -> Self {
        let (sin, cos) = self.s.sin_cos();
        Self {
            s: sin / cos,
            t: self.t / (cos * cos),
        }
    }

    /// Square root with the dual part primary: `a + b*eps` maps to `a/(2*sqrt(b)) + sqrt(b)*eps`
    #[must_use]
    pub fn anti_sqrt(self) -> Self {
        let root = self.t.sqrt();
        Self {
            s: self.s / (T::from_i32(2) * root),
            t: root,
        }
    }

    /// Exponential with the dual part primary
    #[must_use]
    pub fn anti_exp(self) -> Self {
        let e = self.t.exp();
        Self { s: self.s * e, t: e }
    }

    /// Sine with the dual part primary
    #[must_use]
    pub fn anti_sin(self) -> Self {
        let (sin, cos) = self.t.sin_cos();
        Self {
            s: self.s * cos,
            t: sin,
        }
    }

    /// Cosine with the dual part primary
    #[must_use]
    pub fn anti_cos(self) -> Self {
        let (sin, cos) = self.t.sin_cos();
        Self {
            s: -self.s * sin,
            t: cos,
        }
    }

    /// Tangent with the dual part primary
    #[must_use]
    pub fn anti_tan(self) -> Self {
        let (sin, cos) = self.t.sin_cos();
        Self {
            s: self.s / (cos * cos),
            t: sin / cos,
        }
    }
}

impl<T: Copy + Add<Output = T>> Add for DualNum<T> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            s: self.s + rhs.s,
            t: self.t + rhs.t,
        }
    }
}

impl<T: Copy + AddAssign> AddAssign for DualNum<T> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.s += rhs.s;
        self.t += rhs.t;
    }
}

impl<T: Copy + Sub<Output = T>> Sub for DualNum<T> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            s: self.s - rhs.s,
            t: self.t - rhs.t,
        }
    }
}

impl<T: Copy + SubAssign> SubAssign for DualNum<T> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.s -= rhs.s;
        self.t -= rhs.t;
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Mul for DualNum<T> {
    type Output = Self;

    // (s1 + t1 e)(s2 + t2 e) = s1 s2 + (s1 t2 + t1 s2) e
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            s: self.s * rhs.s,
            t: self.s * rhs.t + self.t * rhs.s,
        }
    }
}

impl<T: Real> Div for DualNum<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.recip()
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for DualNum<T> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: T) -> Self {
        Self {
            s: self.s * rhs,
            t: self.t * rhs,
        }
    }
}

impl<T: Copy + Neg<Output = T>> Neg for DualNum<T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            s: -self.s,
            t: -self.t,
        }
    }
}

impl<T: Copy + Zero> Zero for DualNum<T> {
    fn zero() -> Self {
        Self {
            s: T::zero(),
            t: T::zero(),
        }
    }
}

impl<T: ApproxEq> ApproxEq<T> for DualNum<T> {
    const EPSILON: T = T::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.s.is_close_to(rhs.s, epsilon) && self.t.is_close_to(rhs.t, epsilon)
    }
}

impl<T: Copy + Display> Display for DualNum<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({} + {}e)", self.s, self.t))
    }
}

#[allow(non_camel_case_types)]
pub type f32dual = DualNum<f32>;
#[allow(non_camel_case_types)]
pub type f64dual = DualNum<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_arith() {
        let a = DualNum::new(2f32, 1f32);
        let b = DualNum::new(3f32, -2f32);

        assert_eq!(a + b, DualNum::new(5f32, -1f32));
        assert_eq!(a - b, DualNum::new(-1f32, 3f32));
        // product rule
        assert_eq!(a * b, DualNum::new(6f32, -1f32));

        let q = a / b;
        // quotient rule: (1*3 - 2*-2) / 9
        assert!(q.is_close_to(DualNum::new(2f32 / 3f32, 7f32 / 9f32), 1e-6));
    }

    #[test]
    fn test_derivatives() {
        let x = DualNum::variable(1.44f32);
        let r = x.sqrt();
        assert!((r.s - 1.2).abs() < 1e-5);
        assert!((r.t - 1.0 / 2.4).abs() < 1e-5);

        let x = DualNum::variable(0.8f32);
        let r = x.sin();
        assert!((r.s - 0.8f32.sin()).abs() < 1e-5);
        assert!((r.t - 0.8f32.cos()).abs() < 1e-5);

        let r = x.cos();
        assert!((r.s - 0.8f32.cos()).abs() < 1e-5);
        assert!((r.t + 0.8f32.sin()).abs() < 1e-5);

        let r = x.tan();
        assert!((r.s - 0.8f32.tan()).abs() < 2e-5);
        assert!((r.t - 1.0 / (0.8f32.cos() * 0.8f32.cos())).abs() < 1e-4);

        let r = x.exp();
        assert!((r.s - 0.8f32.exp()).abs() < 1e-4);
        assert!((r.t - 0.8f32.exp()).abs() < 1e-4);

        let r = x.ln();
        assert!((r.s - 0.8f32.ln()).abs() < 1e-5);
        assert!((r.t - 1.25).abs() < 1e-5);

        let r = x.rsqrt();
        assert!((r.s - 1.0 / 0.8f32.sqrt()).abs() < 1e-5);
        assert!((r.t + 0.5 / (0.8f32 * 0.8f32.sqrt())).abs() < 1e-4);
    }

    #[test]
    fn test_chain_rule() {
        // d/dx sin(x^2) at x = 0.7 is 2x cos(x^2)
        let x = DualNum::variable(0.7f32);
        let r = (x * x).sin();
        assert!((r.t - 1.4 * 0.49f32.cos()).abs() < 1e-4);
    }

    #[test]
    fn test_anti_ops() {
        let x = DualNum::new(1f32, 2.25f32);
        let r = x.anti_sqrt();
        assert!((r.t - 1.5).abs() < 1e-5);
        assert!((r.s - 1.0 / 3.0).abs() < 1e-5);

        let x = DualNum::new(1f32, 0f32);
        let r = x.anti_cos();
        assert!((r.t - 1.0).abs() < 1e-6);
        assert!(r.s.abs() < 1e-6);
    }
}
