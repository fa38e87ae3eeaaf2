//! Rigid geometric algebra in 3D
//!
//! Flat geometry (points, lines, planes) in the 4D homogeneous algebra,
//! together with the operators that move it: motors for the proper rigid
//! motions and flectors for the reflecting ones. Join two entities with
//! [`wedge`](Point3D::wedge)-style methods, intersect them with
//! `antiwedge`, and compose operators with `*`, which is the geometric
//! antiproduct.
//!
//! Degenerate configurations are never detected: meeting parallel planes or
//! unitizing a zero-weight entity produces IEEE inf/NaN that flows through
//! later arithmetic, matching the rest of the kernel.

mod point;
pub use point::*;

mod line;
pub use line::*;

mod plane;
pub use plane::*;

mod motor;
pub use motor::*;

mod flector;
pub use flector::*;
