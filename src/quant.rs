//! Quantization table machinery.
//!
//! Base tables are scaled by the user-facing quality factor, then turned
//! into kernel-specific table pairs:
//!
//! - the floating-point kernel absorbs both the AA&N descale and a
//!   contrast-sensitivity weighting derived from the per-quality table
//!   (`CSF[i] = Q[0] / Q[i]`) into a forward/inverse multiplier pair;
//! - the integer kernel quantizes with the per-quality table directly
//!   (forward divides, inverse multiplies).
//!
//! All tables are natural (row-major) order.

use crate::consts::{AAN_SCALE_FACTORS, BASE_CHROMA_QUANT, BASE_LUMA_QUANT, DCTSIZE, DCTSIZE2};
use crate::types::DctKernel;

/// Map a quality factor in [1, 100] to the JPEG table scaling percentage.
/// Out-of-range values clamp silently.
#[inline]
#[must_use]
pub fn quality_scale(quality: u8) -> i32 {
    let q = quality.clamp(1, 100) as i32;
    if q < 50 {
        5000 / q
    } else {
        200 - 2 * q
    }
}

/// Scale a base quantization table by the quality factor. Every entry is
/// clamped to [1, 255] after scaling.
#[must_use]
pub fn quantization_table(base: &[i16; DCTSIZE2], quality: u8) -> [i16; DCTSIZE2] {
    let scale = quality_scale(quality);
    let mut table = [0i16; DCTSIZE2];
    for (t, &b) in table.iter_mut().zip(base.iter()) {
        let v = (b as i32 * scale + 50) / 100;
        *t = v.clamp(1, 255) as i16;
    }
    table
}

/// Per-quality luminance quantization table from the standard base table.
#[must_use]
pub fn luma_table(quality: u8) -> [i16; DCTSIZE2] {
    quantization_table(&BASE_LUMA_QUANT, quality)
}

/// Per-quality chrominance quantization table from the standard base table.
#[must_use]
pub fn chroma_table(quality: u8) -> [i16; DCTSIZE2] {
    quantization_table(&BASE_CHROMA_QUANT, quality)
}

/// Derive Contrast Sensitivity Function coefficients from a quantization
/// table: `CSF[i] = Q[0] / Q[i]`, the ratio of the DC quantizer to each AC
/// quantizer.
#[must_use]
pub fn csf_from_qtable(qtable: &[i16; DCTSIZE2]) -> [f32; DCTSIZE2] {
    let dc = qtable[0] as f32;
    let mut csf = [0.0f32; DCTSIZE2];
    for (c, &q) in csf.iter_mut().zip(qtable.iter()) {
        *c = dc / q as f32;
    }
    csf
}

/// Build the AA&N-scaled quantization table pair for the floating-point
/// kernel. Returns `(qidct, qfdct)`.
///
/// The forward table bakes in the AA&N descale (the forward transform
/// scales by 8 per dimension): `qfdct[i] = 1 / (csf * aan * 8)`. The
/// inverse table re-applies it: `qidct[i] = csf * aan / 8`, so
/// `qidct[i] * qfdct[i] == 1/64` for every entry. Passing `None` uses an
/// identity CSF and yields a unitary transform pair
/// (`consts::AAN_IDCT_FACTORS` / `consts::AAN_FDCT_FACTORS`).
#[must_use]
pub fn aan_scaled_qtable(csf: Option<&[f32; DCTSIZE2]>) -> ([f32; DCTSIZE2], [f32; DCTSIZE2]) {
    let mut qidct = [0.0f32; DCTSIZE2];
    let mut qfdct = [0.0f32; DCTSIZE2];
    let mut i = 0;
    for r in 0..DCTSIZE {
        for c in 0..DCTSIZE {
            let q = csf.map_or(1.0, |t| t[i]) as f64;
            let aans = AAN_SCALE_FACTORS[r] as f64 * AAN_SCALE_FACTORS[c] as f64;
            let qaan = aans * q;
            qidct[i] = (qaan / 8.0) as f32;
            qfdct[i] = (1.0 / (qaan * 8.0)) as f32;
            i += 1;
        }
    }
    (qidct, qfdct)
}

/// Build the `(qidct, qfdct)` pair for one base table at a quality level.
/// Callers needing both transform directions use this once instead of
/// calling the one-sided `qtables_*` helpers twice.
#[must_use]
pub fn scaled_qtable_pair(base: &[i16; DCTSIZE2], quality: u8) -> ([f32; DCTSIZE2], [f32; DCTSIZE2]) {
    let qtable = quantization_table(base, quality);
    let csf = csf_from_qtable(&qtable);
    aan_scaled_qtable(Some(&csf))
}

/// Scaled (luma, chroma) quantization tables for encoding with the
/// floating-point kernel.
#[must_use]
pub fn qtables_encode_f32(quality: u8) -> ([f32; DCTSIZE2], [f32; DCTSIZE2]) {
    let (_, luma) = scaled_qtable_pair(&BASE_LUMA_QUANT, quality);
    let (_, chroma) = scaled_qtable_pair(&BASE_CHROMA_QUANT, quality);
    (luma, chroma)
}

/// Scaled (luma, chroma) quantization tables for decoding with the
/// floating-point kernel.
#[must_use]
pub fn qtables_decode_f32(quality: u8) -> ([f32; DCTSIZE2], [f32; DCTSIZE2]) {
    let (luma, _) = scaled_qtable_pair(&BASE_LUMA_QUANT, quality);
    let (chroma, _) = scaled_qtable_pair(&BASE_CHROMA_QUANT, quality);
    (luma, chroma)
}

/// (luma, chroma) quantization tables for encoding with the integer
/// kernel. The integer transform does not absorb scale factors, so these
/// are the per-quality base tables themselves.
#[must_use]
pub fn qtables_encode_int(quality: u8) -> ([i16; DCTSIZE2], [i16; DCTSIZE2]) {
    (luma_table(quality), chroma_table(quality))
}

/// (luma, chroma) quantization tables for decoding with the integer
/// kernel. Identical to the encode tables; the forward transform divides
/// by them and the inverse multiplies.
#[must_use]
pub fn qtables_decode_int(quality: u8) -> ([i16; DCTSIZE2], [i16; DCTSIZE2]) {
    qtables_encode_int(quality)
}

/// A (luma, chroma) quantization table pair bound to its DCT kernel.
///
/// The kernel is a stream-wide property: building the tables through this
/// type makes it impossible to feed float-scaled tables to the integer
/// transform or vice versa.
#[derive(Clone, Debug)]
pub enum KernelTables {
    /// AA&N-scaled multiplier tables for the floating-point kernel
    Float {
        luma: [f32; DCTSIZE2],
        chroma: [f32; DCTSIZE2],
    },
    /// Straight per-quality tables for the integer kernel
    Int {
        luma: [i16; DCTSIZE2],
        chroma: [i16; DCTSIZE2],
    },
}

impl KernelTables {
    /// Build the encode-side tables for a kernel at a quality level.
    #[must_use]
    pub fn encode(kernel: DctKernel, quality: u8) -> Self {
        match kernel {
            DctKernel::FloatAan => {
                let (luma, chroma) = qtables_encode_f32(quality);
                KernelTables::Float { luma, chroma }
            }
            DctKernel::IntegerBink2 => {
                let (luma, chroma) = qtables_encode_int(quality);
                KernelTables::Int { luma, chroma }
            }
        }
    }

    /// Build the decode-side tables for a kernel at a quality level.
    #[must_use]
    pub fn decode(kernel: DctKernel, quality: u8) -> Self {
        match kernel {
            DctKernel::FloatAan => {
                let (luma, chroma) = qtables_decode_f32(quality);
                KernelTables::Float { luma, chroma }
            }
            DctKernel::IntegerBink2 => {
                let (luma, chroma) = qtables_decode_int(quality);
                KernelTables::Int { luma, chroma }
            }
        }
    }

    /// The kernel these tables were built for.
    #[must_use]
    pub const fn kernel(&self) -> DctKernel {
        match self {
            KernelTables::Float { .. } => DctKernel::FloatAan,
            KernelTables::Int { .. } => DctKernel::IntegerBink2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{AAN_FDCT_FACTORS, AAN_IDCT_FACTORS, CSF_LUMA};

    #[test]
    fn test_quality_clamps() {
        assert_eq!(quantization_table(&BASE_LUMA_QUANT, 0), quantization_table(&BASE_LUMA_QUANT, 1));
        assert_eq!(
            quantization_table(&BASE_LUMA_QUANT, 100),
            quantization_table(&BASE_LUMA_QUANT, 200)
        );
    }

    #[test]
    fn test_quality_50_is_base_table() {
        // scale factor at Q50 is exactly 100, so the base table passes
        // through unchanged
        assert_eq!(luma_table(50), BASE_LUMA_QUANT);
        assert_eq!(chroma_table(50), BASE_CHROMA_QUANT);
    }

    #[test]
    fn test_table_entries_bounded() {
        for quality in [1u8, 7, 25, 50, 75, 93, 100] {
            for &v in luma_table(quality).iter().chain(chroma_table(quality).iter()) {
                assert!((1..=255).contains(&v), "entry {} at quality {}", v, quality);
            }
        }
    }

    #[test]
    fn test_quality_extremes() {
        // Q100 scales everything to the minimum quantizer
        assert_eq!(luma_table(100), [1i16; DCTSIZE2]);
        // Q1 drives every entry of the standard tables into the 255 clamp
        assert_eq!(luma_table(1), [255i16; DCTSIZE2]);
    }

    #[test]
    fn test_csf_at_quality_50_matches_reference() {
        let csf = csf_from_qtable(&luma_table(50));
        for i in 0..DCTSIZE2 {
            assert!((csf[i] - CSF_LUMA[i]).abs() < 1e-4, "CSF[{}]", i);
        }
    }

    #[test]
    fn test_aan_identity_matches_reference_tables() {
        let (qidct, qfdct) = aan_scaled_qtable(None);
        for i in 0..DCTSIZE2 {
            assert!((qidct[i] - AAN_IDCT_FACTORS[i]).abs() < 5e-5, "idct[{}]", i);
            assert!((qfdct[i] - AAN_FDCT_FACTORS[i]).abs() < 5e-5, "fdct[{}]", i);
        }
    }

    #[test]
    fn test_aan_pair_product_symmetry() {
        // The forward and inverse tables must cancel to the 2-D AA&N
        // descale of 1/64, with or without contrast weighting.
        for quality in [1u8, 30, 50, 80, 100] {
            let (qidct, qfdct) = scaled_qtable_pair(&BASE_LUMA_QUANT, quality);
            for i in 0..DCTSIZE2 {
                let product = qidct[i] * qfdct[i] * 64.0;
                assert!(
                    (product - 1.0).abs() < 1e-5,
                    "entry {} at quality {}: {}",
                    i,
                    quality,
                    product
                );
            }
        }
    }

    #[test]
    fn test_csf_recoverable_from_table_product() {
        // Pairing a contrast-weighted inverse table with the
        // identity-weighted forward table reproduces the CSF itself.
        let (_, unit_fdct) = aan_scaled_qtable(None);
        let qtable = luma_table(50);
        let csf = csf_from_qtable(&qtable);
        let (qidct, _) = aan_scaled_qtable(Some(&csf));
        for i in 0..DCTSIZE2 {
            assert!((qidct[i] * unit_fdct[i] * 64.0 - csf[i]).abs() < 1e-5, "entry {}", i);
        }
    }

    #[test]
    fn test_kernel_tables_dispatch() {
        let float_tables = KernelTables::encode(DctKernel::FloatAan, 75);
        assert_eq!(float_tables.kernel(), DctKernel::FloatAan);
        let int_tables = KernelTables::encode(DctKernel::IntegerBink2, 75);
        assert_eq!(int_tables.kernel(), DctKernel::IntegerBink2);

        match int_tables {
            KernelTables::Int { luma, chroma } => {
                assert_eq!(luma, luma_table(75));
                assert_eq!(chroma, chroma_table(75));
            }
            KernelTables::Float { .. } => unreachable!(),
        }
    }
}
