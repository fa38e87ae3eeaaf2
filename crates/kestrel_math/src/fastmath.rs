//! Deterministic fast scalar math
//!
//! Table-driven trig, polynomial exp/log, and Newton-Raphson square roots for
//! `f32`. Every function is branch-light, never signals, and produces the same
//! bits for the same input bits within a process. Out-of-domain inputs follow
//! IEEE propagation: inf/NaN/signed zero flow through, nothing is reported.
//!
//! The lookup tables are process-wide, read-only, and built exactly once on
//! first use; after that any number of threads may read them without locking.

use std::sync::OnceLock;

use kestrel_simd::Float4;

use crate::MathConsts;

const TAU: f32 = <f32 as MathConsts>::TAU;
const HALF_PI: f32 = <f32 as MathConsts>::HALF_PI;
const PI: f32 = <f32 as MathConsts>::PI;
const LN_TWO: f32 = <f32 as MathConsts>::LN_TWO;
const ROOT_TWO: f32 = <f32 as MathConsts>::ROOT_TWO;

const TRIG_TABLE_SIZE: usize = 256;
const ATAN_TABLE_SIZE: usize = 65;
const EXP_MIN_EXPONENT: i32 = -88;
const EXP_MAX_EXPONENT: i32 = 91;
const EXP_TABLE_SIZE: usize = (EXP_MAX_EXPONENT - EXP_MIN_EXPONENT + 1) as usize;

/// (cos, sin) pairs for the 256 table angles k * tau / 256
fn trig_table() -> &'static [(f32, f32); TRIG_TABLE_SIZE] {
    static TABLE: OnceLock<[(f32, f32); TRIG_TABLE_SIZE]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [(0f32, 0f32); TRIG_TABLE_SIZE];
        for (k, entry) in table.iter_mut().enumerate() {
            let angle = k as f64 * (core::f64::consts::TAU / TRIG_TABLE_SIZE as f64);
            *entry = (angle.cos() as f32, angle.sin() as f32);
        }
        table
    })
}

/// arctan(n / 64) for n in 0..=64
fn atan_table() -> &'static [f32; ATAN_TABLE_SIZE] {
    static TABLE: OnceLock<[f32; ATAN_TABLE_SIZE]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0f32; ATAN_TABLE_SIZE];
        for (n, entry) in table.iter_mut().enumerate() {
            *entry = (n as f64 / 64.0).atan() as f32;
        }
        table
    })
}

/// e^n for n in -88..=91 (the last few entries overflow to infinity)
fn exp_table() -> &'static [f32; EXP_TABLE_SIZE] {
    static TABLE: OnceLock<[f32; EXP_TABLE_SIZE]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0f32; EXP_TABLE_SIZE];
        for (i, entry) in table.iter_mut().enumerate() {
            let n = EXP_MIN_EXPONENT + i as i32;
            *entry = (n as f64).exp() as f32;
        }
        table
    })
}

/// Calculate the reciprocal of the square root of the value
///
/// Two Newton-Raphson iterations over the register-level estimate. Inputs
/// below the smallest normal float return +infinity, negative inputs NaN.
#[must_use]
pub fn inverse_sqrt(x: f32) -> f32 {
    if x < f32::MIN_POSITIVE {
        return if x < 0.0 { f32::NAN } else { f32::INFINITY };
    }
    if x == f32::INFINITY {
        return 0.0;
    }

    let half = 0.5 * x;
    let mut y = Float4::splat(x).rsqrt().first();
    y *= 1.5 - half * y * y;
    y *= 1.5 - half * y * y;
    y
}

/// Calculate the square root of the value
///
/// Inputs below the smallest normal float return 0, negative inputs NaN.
#[must_use]
pub fn sqrt(x: f32) -> f32 {
    if x < f32::MIN_POSITIVE {
        return if x < 0.0 { f32::NAN } else { 0.0 };
    }
    if x == f32::INFINITY {
        return x;
    }
    x * inverse_sqrt(x)
}

/// Calculate the cosine and sine of the value simultaneously
///
/// Range-reduces |x| by 256/tau into a table index and a small remainder,
/// then corrects the table entry with a 2-term polynomial through the
/// angle-sum identities. Absolute error stays below 1e-5 over several
/// full turns.
#[must_use]
pub fn cos_sin(x: f32) -> (f32, f32) {
    let table = trig_table();

    let b = x.abs() * (TRIG_TABLE_SIZE as f32 / TAU);
    let i = b as i64;
    let frac = b - i as f32;
    let (c0, s0) = table[(i & (TRIG_TABLE_SIZE as i64 - 1)) as usize];

    // small-angle correction, |a| < tau/256
    let a = frac * (TAU / TRIG_TABLE_SIZE as f32);
    let a2 = a * a;
    let s1 = a * (1.0 - a2 * (1.0 / 6.0));
    let c1 = 1.0 - a2 * 0.5;

    let cos = c0 * c1 - s0 * s1;
    let sin = s0 * c1 + c0 * s1;
    (cos, if x < 0.0 { -sin } else { sin })
}

/// Calculate the sine of the value
#[must_use]
pub fn sin(x: f32) -> f32 {
    cos_sin(x).1
}

/// Calculate the cosine of the value
#[must_use]
pub fn cos(x: f32) -> f32 {
    cos_sin(x).0
}

/// Calculate the tangent of the value
#[must_use]
pub fn tan(x: f32) -> f32 {
    let (c, s) = cos_sin(x);
    s / c
}

/// arctan on [0, 1] via the 65-entry table and the angle-difference identity
fn atan_reduced(x: f32) -> f32 {
    let table = atan_table();

    let n = (x * 64.0 + 0.5) as usize;
    let b = n as f32 * (1.0 / 64.0);
    let r = (x - b) / (x * b + 1.0);

    // 3-term odd polynomial on the residual
    let r2 = r * r;
    table[n] + r * (1.0 - r2 * (1.0 / 3.0 - r2 * (1.0 / 5.0)))
}

/// Calculate the arctangent of the value
///
/// |x| > 1 goes through the identity arctan(x) = tau/4 - arctan(1/x).
#[must_use]
pub fn atan(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }

    let ax = x.abs();
    let r = if ax <= 1.0 {
        atan_reduced(ax)
    } else {
        HALF_PI - atan_reduced(1.0 / ax)
    };
    if x < 0.0 {
        -r
    } else {
        r
    }
}

/// Calculate the quadrant-resolving arctangent of `y / x`
///
/// Degenerate cases: both zero gives 0, `x` zero alone gives +-tau/4.
#[must_use]
pub fn atan2(y: f32, x: f32) -> f32 {
    if x == 0.0 {
        if y == 0.0 {
            return 0.0;
        }
        return if y < 0.0 { -HALF_PI } else { HALF_PI };
    }

    let r = atan(y / x);
    if x > 0.0 {
        r
    } else if y >= 0.0 {
        r + PI
    } else {
        r - PI
    }
}

/// Calculate the arcsine of the value
///
/// Out-of-domain inputs produce NaN through the square root.
#[must_use]
pub fn asin(x: f32) -> f32 {
    atan(x * inverse_sqrt(1.0 - x * x))
}

/// Calculate the arccosine of the value
#[must_use]
pub fn acos(x: f32) -> f32 {
    HALF_PI - asin(x)
}

/// Calculate the natural exponential of the value
///
/// Table lookup on the integer part (clamped to the finite f32 exponent
/// range) times an 8-term Taylor polynomial on the fractional part.
#[must_use]
pub fn exp(x: f32) -> f32 {
    if x.is_nan() || x == f32::INFINITY {
        return x;
    }
    if x == f32::NEG_INFINITY {
        return 0.0;
    }

    let n = floor(x);
    let f = x - n;
    let idx = (n as i32).clamp(EXP_MIN_EXPONENT, EXP_MAX_EXPONENT);
    let base = exp_table()[(idx - EXP_MIN_EXPONENT) as usize];

    let p = 1.0
        + f * (1.0
            + f * (0.5
                + f * (1.0 / 6.0
                    + f * (1.0 / 24.0
                        + f * (1.0 / 120.0 + f * (1.0 / 720.0 + f * (1.0 / 5040.0)))))));
    base * p
}

/// Calculate the natural logarithm of the value
///
/// Splits the IEEE bit pattern into exponent and mantissa, evaluates an
/// odd-power series in (m - 1)/(m + 1) on the mantissa, and recombines with
/// exponent * ln 2. Zero (and anything below the smallest normal float)
/// returns -infinity, negative inputs NaN.
#[must_use]
pub fn log(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if x < 0.0 {
        return f32::NAN;
    }
    if x < f32::MIN_POSITIVE {
        return f32::NEG_INFINITY;
    }
    if x == f32::INFINITY {
        return x;
    }

    let bits = x.to_bits();
    let mut e = ((bits >> 23) & 0xFF) as i32 - 127;
    let mut m = f32::from_bits((bits & 0x007F_FFFF) | 0x3F80_0000);
    if m > ROOT_TWO {
        m *= 0.5;
        e += 1;
    }

    let t = (m - 1.0) / (m + 1.0);
    let t2 = t * t;
    let ln_m = 2.0 * t * (1.0 + t2 * (1.0 / 3.0 + t2 * (0.2 + t2 * (1.0 / 7.0))));
    e as f32 * LN_TWO + ln_m
}

/// Calculate the floor of the value
#[must_use]
pub fn floor(x: f32) -> f32 {
    // beyond 2^23 every float is integral; this also catches inf and NaN
    if !(x.abs() < 8_388_608.0) {
        return x;
    }
    let t = x as i64 as f32;
    t - (t > x) as i32 as f32
}

/// Calculate the ceil of the value
#[must_use]
pub fn ceil(x: f32) -> f32 {
    if !(x.abs() < 8_388_608.0) {
        return x;
    }
    let t = x as i64 as f32;
    t + (t < x) as i32 as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_edge_cases() {
        assert_eq!(sqrt(0.0), 0.0);
        assert_eq!(sqrt(-0.0), 0.0);
        assert_eq!(sqrt(1e-40), 0.0);
        assert_eq!(sqrt(f32::INFINITY), f32::INFINITY);
        assert!(sqrt(-1.0).is_nan());
        assert!(sqrt(f32::NAN).is_nan());

        assert_eq!(inverse_sqrt(0.0), f32::INFINITY);
        assert_eq!(inverse_sqrt(1e-40), f32::INFINITY);
        assert_eq!(inverse_sqrt(f32::INFINITY), 0.0);
        assert!(inverse_sqrt(-4.0).is_nan());
    }

    #[test]
    fn test_sqrt_identity() {
        let mut x = f32::MIN_POSITIVE;
        while x < 1e30 {
            let prod = inverse_sqrt(x) * sqrt(x);
            assert!(
                (prod - 1.0).abs() < 1e-5,
                "rsqrt * sqrt at {} gave {}",
                x,
                prod
            );
            x *= 3.7;
        }

        assert!((sqrt(4.0) - 2.0).abs() < 1e-5);
        assert!((sqrt(2.0) - ROOT_TWO).abs() < 1e-6);
    }

    #[test]
    fn test_sin_cos_identity() {
        let mut x = -4.0 * TAU;
        while x < 4.0 * TAU {
            let (c, s) = cos_sin(x);
            assert!(
                (s * s + c * c - 1.0).abs() < 1e-5,
                "sin^2+cos^2 at {} gave {}",
                x,
                s * s + c * c
            );
            assert!((s - (x as f64).sin() as f32).abs() < 1e-5, "sin({})", x);
            assert!((c - (x as f64).cos() as f32).abs() < 1e-5, "cos({})", x);
            x += 0.0173;
        }
    }

    #[test]
    fn test_sin_cos_specials() {
        assert_eq!(sin(0.0), 0.0);
        assert_eq!(cos(0.0), 1.0);
        assert!((sin(HALF_PI) - 1.0).abs() < 1e-6);
        assert!(cos(HALF_PI).abs() < 1e-6);
        assert!((sin(-HALF_PI) + 1.0).abs() < 1e-6);
        assert!((cos(PI) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_tan() {
        let mut x = -1.5f32;
        while x < 1.5 {
            assert!(
                (tan(x) - (x as f64).tan() as f32).abs() < 2e-5 * (1.0 + tan(x).abs()),
                "tan({})",
                x
            );
            x += 0.037;
        }
    }

    #[test]
    fn test_atan() {
        let mut x = -40.0f32;
        while x < 40.0 {
            assert!(
                (atan(x) - (x as f64).atan() as f32).abs() < 1e-5,
                "atan({}) = {}, expected {}",
                x,
                atan(x),
                (x as f64).atan() as f32
            );
            x += 0.173;
        }
        assert!((atan(1.0) - PI / 4.0).abs() < 1e-6);
        assert!((atan(f32::INFINITY) - HALF_PI).abs() < 1e-6);
    }

    #[test]
    fn test_atan2() {
        assert_eq!(atan2(0.0, 0.0), 0.0);
        assert_eq!(atan2(2.0, 0.0), HALF_PI);
        assert_eq!(atan2(-2.0, 0.0), -HALF_PI);

        let cases = [
            (1.0, 1.0),
            (1.0, -1.0),
            (-1.0, 1.0),
            (-1.0, -1.0),
            (0.5, 2.0),
            (-3.0, 0.25),
        ];
        for (y, x) in cases {
            let expected = (y as f64).atan2(x as f64) as f32;
            assert!(
                (atan2(y, x) - expected).abs() < 1e-5,
                "atan2({}, {}) = {}, expected {}",
                y,
                x,
                atan2(y, x),
                expected
            );
        }
    }

    #[test]
    fn test_asin_acos() {
        let mut x = -1.0f32;
        while x <= 1.0 {
            assert!(
                (asin(x) - (x as f64).asin() as f32).abs() < 2e-5,
                "asin({})",
                x
            );
            assert!(
                (acos(x) - (x as f64).acos() as f32).abs() < 2e-5,
                "acos({})",
                x
            );
            x += 0.0125;
        }
        assert!(asin(1.5).is_nan());
        assert!(asin(-1.5).is_nan());
    }

    #[test]
    fn test_exp() {
        let mut x = -20.0f32;
        while x < 20.0 {
            let expected = (x as f64).exp() as f32;
            let rel = (exp(x) - expected).abs() / expected;
            assert!(rel < 1e-4, "exp({}) = {}, expected {}", x, exp(x), expected);
            x += 0.173;
        }
        assert_eq!(exp(0.0), 1.0);
        assert_eq!(exp(f32::INFINITY), f32::INFINITY);
        assert!(exp(1000.0) > 1e38);
        assert!(exp(-1000.0) < 1e-37);
    }

    #[test]
    fn test_log() {
        let mut x = 1e-30f32;
        while x < 1e30 {
            let expected = (x as f64).ln() as f32;
            assert!(
                (log(x) - expected).abs() < 1e-5 * (1.0 + expected.abs()),
                "log({}) = {}, expected {}",
                x,
                log(x),
                expected
            );
            x *= 2.9;
        }
        assert_eq!(log(0.0), f32::NEG_INFINITY);
        assert!(log(-1.0).is_nan());
        assert_eq!(log(f32::INFINITY), f32::INFINITY);
        assert!(log(1.0).abs() < 1e-7);

        // exp and log agree as inverses
        let mut x = -15.0f32;
        while x < 15.0 {
            assert!((log(exp(x)) - x).abs() < 2e-4, "log(exp({}))", x);
            x += 0.311;
        }
    }

    #[test]
    fn test_floor_ceil() {
        assert_eq!(floor(1.75), 1.0);
        assert_eq!(floor(-1.25), -2.0);
        assert_eq!(floor(3.0), 3.0);
        assert_eq!(floor(-3.0), -3.0);
        assert_eq!(ceil(1.25), 2.0);
        assert_eq!(ceil(-1.75), -1.0);
        assert_eq!(ceil(3.0), 3.0);
        assert_eq!(floor(1e10), 1e10);
        assert_eq!(ceil(f32::INFINITY), f32::INFINITY);
        assert!(floor(f32::NAN).is_nan());
    }
}
