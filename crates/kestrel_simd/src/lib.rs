//! 4-wide float register abstraction for the kestrel math kernel
//!
//! The math kernel only ever asks for a small capability set on a 4-float register:
//! load/store, lane arithmetic, approximate reciprocal square root, min/max,
//! floor/ceil, a shuffle-based cross product, select/blend, and horizontal sum/dot.
//! Everything algebraic is expressed against that set, so the kernel works
//! unchanged (if more slowly) on the portable scalar backend.
//!
//! The backend is picked at compile time:
//! - x86_64 builds use an SSE2 backend
//! - everything else uses the portable scalar backend

mod backend;

mod float4;
pub use float4::*;

mod mask4;
pub use mask4::*;
