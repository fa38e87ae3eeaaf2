use core::ops::*;
use std::fmt::Display;

use crate::*;

impl<T: Copy> Vec2<T> {
    /// Extend a `Vec2` to a `Vec3`
    #[inline]
    #[must_use]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3 {
            x: self.x,
            y: self.y,
            z,
        }
    }

    /// Calculate the perpendicular dot product of 2 vectors (z-component of the cross product)
    #[inline]
    pub fn perp_dot(self, rhs: Self) -> T
    where
        T: Sub<Output = T> + Mul<Output = T>,
    {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Get the vector rotated by 90 degrees counterclockwise
    #[inline]
    pub fn perp(self) -> Self
    where
        T: Neg<Output = T>,
    {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

impl<T: Copy + Display> Display for Vec2<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, {})", self.x, self.y))
    }
}

// Swizzles
impl<T: Copy> Vec2<T> {
    create_swizzle! {@2d xx, x, x}
    create_swizzle! {@2d xy, x, y}
    create_swizzle! {@2d yx, y, x}
    create_swizzle! {@2d yy, y, y}
}

#[allow(non_camel_case_types)]
pub type f32v2 = Vec2<f32>;
#[allow(non_camel_case_types)]
pub type f64v2 = Vec2<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_create_convert() {
        let vec = Vec2::new(1f32, 2f32);
        assert_eq!(vec.x, 1f32);
        assert_eq!(vec.y, 2f32);

        let vec = Vec2::set(3f32);
        assert_eq!(vec.x, 3f32);
        assert_eq!(vec.y, 3f32);

        let vec: Vec2<f32> = [4f32, 5f32].into();
        assert_eq!(vec.to_array(), [4f32, 5f32]);

        let vec3 = vec.extend(6f32);
        assert_eq!(vec3, Vec3::new(4f32, 5f32, 6f32));
    }

    #[test]
    fn test_ops() {
        let a = Vec2::new(1f32, 2f32);
        let b = Vec2::new(3f32, 5f32);

        assert_eq!(a + b, Vec2::new(4f32, 7f32));
        assert_eq!(b - a, Vec2::new(2f32, 3f32));
        assert_eq!(a * b, Vec2::new(3f32, 10f32));
        assert_eq!(a * 2f32, Vec2::new(2f32, 4f32));
        assert_eq!(2f32 * a, Vec2::new(2f32, 4f32));
        assert_eq!(b / a, Vec2::new(3f32, 2.5f32));
        assert_eq!(-a, Vec2::new(-1f32, -2f32));

        assert_eq!(a.dot(b), 13f32);
        assert_eq!(a.perp_dot(b), -1f32);
        assert_eq!(a.perp(), Vec2::new(-2f32, 1f32));
    }

    #[test]
    fn test_len() {
        let v = Vec2::new(3f32, 4f32);
        assert_eq!(v.len_sq(), 25f32);
        assert!((v.len() - 5f32).abs() < 1e-5);

        let n = v.normalize();
        assert!(n.is_close_to(Vec2::new(0.6f32, 0.8f32), 1e-5));
        assert!(n.is_close_to_normalized(1e-5));

        assert_eq!(Vec2::set(0f32).normalize(), Vec2::set(0f32));
        assert_eq!(Vec2::set(0f32).normalize_or(v), v);
    }
}
