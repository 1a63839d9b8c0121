//! Core types for zentex

/// DCT kernel selection.
///
/// The two kernels use different arithmetic and different quantization
/// table scaling; a block encoded with one kernel can only be decoded with
/// the same kernel. The kernel is a stream-wide property and is recorded
/// alongside the quality value, never per block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DctKernel {
    /// Scaled floating-point AA&N transform. The per-coefficient AA&N scale
    /// factors are absorbed into the quantization tables.
    #[default]
    FloatAan,
    /// Integer transform built from butterflies and shift-based rotations.
    /// Uses straight (unscaled) integer quantization tables.
    IntegerBink2,
}

impl DctKernel {
    /// Whether this kernel quantizes with floating-point tables
    #[must_use]
    pub const fn uses_float_tables(self) -> bool {
        matches!(self, DctKernel::FloatAan)
    }
}
