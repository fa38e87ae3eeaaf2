//! Geometric-algebra math kernel for real-time rendering and physics work
//!
//! The crate is built in layers, leaves first: deterministic fast scalar math,
//! then vectors/matrices/quaternions generic over the scalar, then the
//! geometric-algebra entity layers on `f32`:
//! - `rigid`: points, lines, planes, motors, and flectors in 3D
//! - `projective`: the same algebra at the 4D homogeneous `Mat4` boundary
//! - `conformal`: round points, dipoles, circles, and spheres
//!
//! Everything is a small stack value, no operation allocates or blocks, and
//! numerical degeneracy is never signalled: it propagates as IEEE inf/NaN per
//! ordinary float arithmetic.

mod numeric;
pub use numeric::*;

mod constants;
pub use constants::*;

pub mod fastmath;

mod angle;
pub use angle::*;

mod vec;
pub use vec::*;

mod bivec;
pub use bivec::*;

mod mat;
pub use mat::*;

mod quat;
pub use quat::*;

mod dual;
pub use dual::*;

mod rigid;
pub use rigid::*;

mod projective;
pub use projective::*;

mod conformal;
pub use conformal::*;

pub(crate) mod utils;
