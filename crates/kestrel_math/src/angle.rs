use core::ops::*;
use std::fmt::Display;

use crate::{ApproxEq, ApproxZero, InvTrig, MathConsts, Real, Trig, Zero};

macro_rules! angle_common {
    {$name:ident} => {
        impl<T: Copy + Add<Output = T>> Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl<T: Copy + AddAssign> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl<T: Copy + Sub<Output = T>> Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl<T: Copy + SubAssign> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        //--------------------------------------------------------------

        impl<T: Copy + Mul<Output = T>> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl<T: Copy + MulAssign> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                self.0 *= rhs;
            }
        }

        impl<T: Copy + Div<Output = T>> Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl<T: Copy + DivAssign> DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                self.0 /= rhs;
            }
        }

        //--------------------------------------------------------------

        impl<T: Copy + Neg<Output = T>> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        //--------------------------------------------------------------

        impl<T: Copy + ApproxEq> ApproxEq<T> for $name<T> {
            const EPSILON: T = T::EPSILON;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                self.0.is_close_to(rhs.0, epsilon)
            }
        }

        impl<T: ApproxZero> ApproxZero<T> for $name<T> {
            const ZERO_EPSILON: T = T::ZERO_EPSILON;

            fn is_close_to_zero(self, epsilon: T) -> bool {
                self.0.is_close_to_zero(epsilon)
            }
        }

        impl<T: Copy + Zero> Zero for $name<T> {
            fn zero() -> Self {
                Self(T::zero())
            }
        }

        impl<T: Copy + Display> Display for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

macro_rules! angle_pre_multiplication {
    {$name:ident, $($ty:ty),*} => {
        $(
            impl Mul<$name<$ty>> for $ty {
                type Output = $name<$ty>;

                fn mul(self, rhs: $name<$ty>) -> Self::Output {
                    $name(self * rhs.0)
                }
            }
        )*
    };
}

//------------------------------------------------------------------------------------------------------------------------------

/// An angle represented as degrees
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Degrees<T: Copy>(pub T);
angle_common! {Degrees}
angle_pre_multiplication! {Degrees, f32, f64}

impl<T: Copy> Degrees<T> {
    /// Create a new angle
    #[inline]
    #[must_use]
    pub fn new(val: T) -> Self {
        Self(val)
    }
}

impl<T: Real> Degrees<T> {
    /// Wrap the angle so it's in the range of [-360, 360]
    #[inline]
    #[must_use]
    pub fn wrap(self) -> Self {
        Self(self.0 % T::from_i32(360))
    }

    /// Convert degrees to radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians<T> {
        Radians(self.0 * T::DEG_TO_RAD)
    }
}

impl<T: Real> Trig for Degrees<T> {
    type Output = T;

    fn sin(self) -> T {
        self.to_radians().sin()
    }

    fn cos(self) -> T {
        self.to_radians().cos()
    }

    fn sin_cos(self) -> (T, T) {
        self.to_radians().sin_cos()
    }

    fn tan(self) -> T {
        self.to_radians().tan()
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// An angle represented as radians
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Radians<T: Copy>(pub T);
angle_common! {Radians}
angle_pre_multiplication! {Radians, f32, f64}

impl<T: Copy> Radians<T> {
    /// Create a new angle
    #[inline]
    #[must_use]
    pub fn new(val: T) -> Self {
        Self(val)
    }
}

impl<T: Real> Radians<T> {
    /// Wrap the angle so it's in the range of [-tau, tau]
    #[inline]
    #[must_use]
    pub fn wrap(self) -> Self {
        Self(self.0 % T::TAU)
    }

    /// Convert radians to degrees
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees<T> {
        Degrees(self.0 * T::RAD_TO_DEG)
    }
}

impl<T: Real> Trig for Radians<T> {
    type Output = T;

    fn sin(self) -> T {
        self.0.sin()
    }

    fn cos(self) -> T {
        self.0.cos()
    }

    fn sin_cos(self) -> (T, T) {
        self.0.sin_cos()
    }

    fn tan(self) -> T {
        self.0.tan()
    }
}

impl<T: Real> InvTrig<T> for Radians<T> {
    fn asin(val: T) -> Self {
        Self(T::asin(val))
    }

    fn acos(val: T) -> Self {
        Self(T::acos(val))
    }

    fn atan(val: T) -> Self {
        Self(T::atan(val))
    }

    fn atan2(y: T, x: T) -> Self {
        Self(T::atan2(y, x))
    }
}

#[allow(non_camel_case_types)]
pub type f32rad = Radians<f32>;
#[allow(non_camel_case_types)]
pub type f32deg = Degrees<f32>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MathConsts;

    #[test]
    fn test_conversion() {
        let deg = Degrees::new(180f32);
        assert!(deg.to_radians().is_close_to(Radians(f32::PI), 1e-6));

        let rad = Radians::new(f32::HALF_PI);
        assert!(rad.to_degrees().is_close_to(Degrees(90f32), 1e-4));
    }

    #[test]
    fn test_trig() {
        let rad = Radians::new(f32::HALF_PI);
        let (sin, cos) = rad.sin_cos();
        assert!((sin - 1.0).abs() < 1e-6);
        assert!(cos.abs() < 1e-6);

        let deg = Degrees::new(90f32);
        assert!((deg.sin() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ops() {
        let a = Radians::new(1.0f32);
        let b = Radians::new(0.5f32);
        assert_eq!((a + b).0, 1.5);
        assert_eq!((a - b).0, 0.5);
        assert_eq!((a * 2.0).0, 2.0);
        assert_eq!((2.0 * b).0, 1.0);
        assert_eq!((a / 2.0).0, 0.5);
        assert_eq!((-a).0, -1.0);
    }
}
