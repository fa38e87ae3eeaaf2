use std::fmt::Display;

use crate::*;

impl<T: Copy> Vec4<T> {
    /// Shrink a `Vec4` to a `Vec3`
    #[inline]
    #[must_use]
    pub fn shrink(self) -> Vec3<T> {
        Vec3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

impl<T: Copy + Display> Display for Vec4<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "({}, {}, {}, {})",
            self.x, self.y, self.z, self.w
        ))
    }
}

// Swizzles
impl<T: Copy> Vec4<T> {
    create_swizzle! {@2d xy, x, y}
    create_swizzle! {@2d zw, z, w}

    create_swizzle! {@3d xyz, x, y, z}
    create_swizzle! {@3d yzw, y, z, w}
    create_swizzle! {@3d zyx, z, y, x}
}

#[allow(non_camel_case_types)]
pub type f32v4 = Vec4<f32>;
#[allow(non_camel_case_types)]
pub type f64v4 = Vec4<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_create_convert() {
        let vec = Vec4::new(1f32, 2f32, 3f32, 4f32);
        assert_eq!(vec.to_array(), [1f32, 2f32, 3f32, 4f32]);
        assert_eq!(vec.xyz(), Vec3::new(1f32, 2f32, 3f32));
        assert_eq!(vec.shrink(), Vec3::new(1f32, 2f32, 3f32));
        assert_eq!(vec.zw(), Vec2::new(3f32, 4f32));
    }

    #[test]
    fn test_ops() {
        let a = Vec4::new(1f32, 2f32, 3f32, 4f32);
        let b = Vec4::new(4f32, 3f32, 2f32, 1f32);

        assert_eq!(a + b, Vec4::set(5f32));
        assert_eq!(a - b, Vec4::new(-3f32, -1f32, 1f32, 3f32));
        assert_eq!(a * 2f32, Vec4::new(2f32, 4f32, 6f32, 8f32));
        assert_eq!(a.dot(b), 20f32);

        let mut c = a;
        c += b;
        assert_eq!(c, Vec4::set(5f32));
        c *= 2f32;
        assert_eq!(c, Vec4::set(10f32));
    }

    #[test]
    fn test_len() {
        let v = Vec4::new(2f32, 2f32, 2f32, 2f32);
        assert_eq!(v.len_sq(), 16f32);
        assert!((v.len() - 4f32).abs() < 1e-4);
        assert!(v.normalize().is_close_to(Vec4::set(0.5f32), 1e-5));
    }
}
