/// Trait that defines common math constants
pub trait MathConsts {
    /// Minimum finite value
    const MIN: Self;
    /// Maximum finite value
    const MAX: Self;

    /// pi
    const PI: Self;
    /// tau (2 * pi)
    const TAU: Self;
    /// pi / 2
    const HALF_PI: Self;
    /// pi / 4
    const QUARTER_PI: Self;
    /// 1 / (2 * pi)
    const ONE_OVER_TAU: Self;

    /// sqrt(2)
    const ROOT_TWO: Self;
    /// 1 / sqrt(2)
    const ONE_OVER_ROOT_TWO: Self;

    /// ln(2)
    const LN_TWO: Self;

    /// e
    const E: Self;

    /// Multiplier to go from degrees to radians
    const DEG_TO_RAD: Self;
    /// Multiplier to go from radians to degrees
    const RAD_TO_DEG: Self;
}

/// Trait that defines constants that only make sense for reals
pub trait MathRealConsts {
    /// Smallest positive normal value
    const MIN_NORMAL: Self;
    /// Positive infinity
    const INFINITY: Self;
    /// Quiet NaN
    const NAN: Self;
}

macro_rules! impl_math_consts {
    {$ty:ty} => {
        impl MathConsts for $ty {
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;

            const PI: Self = 3.14159265358979323846264338327950288;
            const TAU: Self = 6.28318530717958647692528676655900577;
            const HALF_PI: Self = 1.57079632679489661923132169163975144;
            const QUARTER_PI: Self = 0.785398163397448309615660845819875721;
            const ONE_OVER_TAU: Self = 0.159154943091895335768883763372514362;

            const ROOT_TWO: Self = 1.41421356237309504880168872420969808;
            const ONE_OVER_ROOT_TWO: Self = 0.707106781186547524400844362104849039;

            const LN_TWO: Self = 0.693147180559945309417232121458176568;

            const E: Self = 2.71828182845904523536028747135266250;

            const DEG_TO_RAD: Self = Self::PI / 180.0;
            const RAD_TO_DEG: Self = 180.0 / Self::PI;
        }
    };
}

impl_math_consts! {f32}
impl_math_consts! {f64}

impl MathRealConsts for f32 {
    const MIN_NORMAL: Self = f32::MIN_POSITIVE;
    const INFINITY: Self = f32::INFINITY;
    const NAN: Self = f32::NAN;
}

impl MathRealConsts for f64 {
    const MIN_NORMAL: Self = f64::MIN_POSITIVE;
    const INFINITY: Self = f64::INFINITY;
    const NAN: Self = f64::NAN;
}
