use core::ops::*;
use std::fmt::Display;

use crate::*;

impl<T: Copy> Vec3<T> {
    /// Extend a `Vec3` to a `Vec4`
    #[inline]
    #[must_use]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w,
        }
    }

    /// Shrink a `Vec3` to a `Vec2`
    #[inline]
    #[must_use]
    pub fn shrink(self) -> Vec2<T> {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    /// Calculate the cross product of 2 vectors
    #[inline]
    pub fn cross(self, rhs: Self) -> Self
    where
        T: Sub<Output = T> + Mul<Output = T>,
    {
        Vec3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Calculate the wedge product of 2 vectors, producing the bivector for the plane they span
    #[inline]
    pub fn wedge(self, rhs: Self) -> Bivec3<T>
    where
        T: Sub<Output = T> + Mul<Output = T>,
    {
        let c = self.cross(rhs);
        Bivec3 {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl<T: Real> Vec3<T> {
    /// Get or flip the vector, so it's pointing in the opposite direction of the incidence vector, relative to the normal
    pub fn face_forward(self, incidence: Self, normal: Self) -> Self {
        if incidence.dot(normal) < T::zero() {
            self
        } else {
            -self
        }
    }

    /// Reflect a vector on a 'surface' with a normal
    pub fn reflect(self, normal: Self) -> Self {
        debug_assert!(normal.is_close_to_normalized(T::from_f32(1e-4)));
        self - normal * self.dot(normal) * T::from_i32(2)
    }
}

impl<T: Copy + Display> Display for Vec3<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {})", self.x, self.y, self.z))
    }
}

// Swizzles
impl<T: Copy> Vec3<T> {
    create_swizzle! {@2d xy, x, y}
    create_swizzle! {@2d xz, x, z}
    create_swizzle! {@2d yx, y, x}
    create_swizzle! {@2d yz, y, z}
    create_swizzle! {@2d zx, z, x}
    create_swizzle! {@2d zy, z, y}

    create_swizzle! {@3d xzy, x, z, y}
    create_swizzle! {@3d yxz, y, x, z}
    create_swizzle! {@3d yzx, y, z, x}
    create_swizzle! {@3d zxy, z, x, y}
    create_swizzle! {@3d zyx, z, y, x}
}

impl<T: Real> Vec3<T> {
    pub fn unit_x() -> Self {
        Self {
            x: T::one(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    pub fn unit_y() -> Self {
        Self {
            x: T::zero(),
            y: T::one(),
            z: T::zero(),
        }
    }

    pub fn unit_z() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::one(),
        }
    }
}

#[allow(non_camel_case_types)]
pub type f32v3 = Vec3<f32>;
#[allow(non_camel_case_types)]
pub type f64v3 = Vec3<f64>;
