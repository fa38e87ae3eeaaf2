#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
mod sse;
#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
pub(crate) use sse::*;

#[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
mod scalar;
#[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
pub(crate) use scalar::*;
