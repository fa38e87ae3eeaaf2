use crate::backend;

/// Per-lane boolean mask produced by the register comparisons
///
/// Consumed by `Float4::select`; the representation is backend-specific.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Mask4(pub(crate) backend::MaskReg);

impl Mask4 {
    /// Check if any lane is set
    #[inline(always)]
    #[must_use]
    pub fn any(self) -> bool {
        backend::mask_any(self.0)
    }

    /// Check if all lanes are set
    #[inline(always)]
    #[must_use]
    pub fn all(self) -> bool {
        backend::mask_all(self.0)
    }
}
