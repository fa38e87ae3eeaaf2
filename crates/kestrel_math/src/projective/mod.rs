//! Projective geometric algebra in 4D homogeneous space
//!
//! The same join/meet/transform vocabulary as the rigid 3D module, lifted to
//! entities that keep their homogeneous weight explicit and exchange full 4x4
//! matrices at the boundary. Use this flavor where the caller works in
//! `Vec4`/`Mat4` terms; the algebraic formulas are structurally identical to
//! the 3D ones.

mod bivec4;
pub use bivec4::*;

mod trivec4;
pub use trivec4::*;

mod motor4;
pub use motor4::*;

mod flector4;
pub use flector4::*;
