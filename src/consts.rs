//! Constants and tables shared across the codec.
//!
//! This module contains the standard JPEG base quantization tables, the
//! zig-zag scan order, the AA&N scale factors and the precomputed
//! contrast-sensitivity tables derived from the base quantization tables.

/// DCT block dimension
pub const DCTSIZE: usize = 8;

/// DCT block size (8x8 = 64)
pub const DCTSIZE2: usize = 64;

/// Coded-block dimension in pixels. Every encode/decode operation works on
/// one 16x16 block.
pub const MCU_DIM: usize = 16;

/// Pixels per coded block (16x16 = 256)
pub const MCU_PIXELS: usize = MCU_DIM * MCU_DIM;

/// Bytes per coded block of RGBA8 input (4 bytes per pixel)
pub const MCU_RGBA_BYTES: usize = MCU_PIXELS * 4;

/// Entries per coded block of interleaved (Y, Co, Cg) triples
pub const MCU_YCOCG_LEN: usize = MCU_PIXELS * 3;

/// Zig-zag scan order: maps zig-zag position to natural (row-major)
/// position. Emitting coefficients in this order maximizes the length of
/// zero runs after quantization.
/// Example: `natural_pos = ZIGZAG[zigzag_pos]`
pub const ZIGZAG: [usize; 64] = [
    0, 1, 8, 16, 9, 2, 3, 10, 17, 24, 32, 25, 18, 11, 4, 5, 12, 19, 26, 33, 40, 48, 41, 34, 27, 20,
    13, 6, 7, 14, 21, 28, 35, 42, 49, 56, 57, 50, 43, 36, 29, 22, 15, 23, 30, 37, 44, 51, 58, 59,
    52, 45, 38, 31, 39, 46, 53, 60, 61, 54, 47, 55, 62, 63,
];

/// Inverse zig-zag order: maps natural (row-major) position to zig-zag
/// position. `ZIGZAG_INV[ZIGZAG[i]] == i`.
pub const ZIGZAG_INV: [usize; 64] = {
    let mut inv = [0usize; 64];
    let mut i = 0;
    while i < 64 {
        inv[ZIGZAG[i]] = i;
        i += 1;
    }
    inv
};

/// Standard JPEG Annex K luminance quantization table, natural order.
pub const BASE_LUMA_QUANT: [i16; 64] = [
    16, 11, 10, 16, 24, 40, 51, 61, 12, 12, 14, 19, 26, 58, 60, 55, 14, 13, 16, 24, 40, 57, 69, 56,
    14, 17, 22, 29, 51, 87, 80, 62, 18, 22, 37, 56, 68, 109, 103, 77, 24, 35, 55, 64, 81, 104, 113,
    92, 49, 64, 78, 87, 103, 121, 120, 101, 72, 92, 95, 98, 112, 100, 103, 99,
];

/// Standard JPEG Annex K chrominance quantization table, natural order.
pub const BASE_CHROMA_QUANT: [i16; 64] = [
    17, 18, 24, 47, 99, 99, 99, 99, 18, 21, 26, 66, 99, 99, 99, 99, 24, 26, 56, 99, 99, 99, 99, 99,
    47, 66, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
];

/// AA&N per-row scale factors for the scaled 8-point DCT. The 2-D factor
/// for coefficient (r, c) is `AAN_SCALE_FACTORS[r] * AAN_SCALE_FACTORS[c]`.
pub const AAN_SCALE_FACTORS: [f32; 8] = [
    1.0, 1.387039845, 1.306562965, 1.175875602, 1.0, 0.785694958, 0.541196100, 0.275899379,
];

/// Contrast Sensitivity Function coefficients for the base luminance table,
/// natural order. Computed as `CSF[i] = Q[0] / Q[i]`: the ratio of each AC
/// quantizer to the DC quantizer.
#[rustfmt::skip]
pub const CSF_LUMA: [f32; 64] = [
    1.000000, 1.454545, 1.600000, 1.000000, 0.666667, 0.400000, 0.313725, 0.262295,
    1.333333, 1.333333, 1.142857, 0.842105, 0.615385, 0.275862, 0.266667, 0.290909,
    1.142857, 1.230769, 1.000000, 0.666667, 0.400000, 0.280702, 0.231884, 0.285714,
    1.142857, 0.941176, 0.727273, 0.551724, 0.313725, 0.183908, 0.200000, 0.258065,
    0.888889, 0.727273, 0.432432, 0.285714, 0.235294, 0.146789, 0.155340, 0.207792,
    0.666667, 0.457143, 0.290909, 0.250000, 0.197531, 0.153846, 0.141593, 0.173913,
    0.326531, 0.250000, 0.205128, 0.183908, 0.155340, 0.132231, 0.133333, 0.158416,
    0.222222, 0.173913, 0.168421, 0.163265, 0.142857, 0.160000, 0.155340, 0.161616,
];

/// Contrast Sensitivity Function coefficients for the base chrominance
/// table, natural order.
#[rustfmt::skip]
pub const CSF_CHROMA: [f32; 64] = [
    1.000000, 0.944444, 0.708333, 0.361702, 0.171717, 0.171717, 0.171717, 0.171717,
    0.944444, 0.809524, 0.653846, 0.257576, 0.171717, 0.171717, 0.171717, 0.171717,
    0.708333, 0.653846, 0.303571, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717,
    0.361702, 0.257576, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717,
    0.171717, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717,
    0.171717, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717,
    0.171717, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717,
    0.171717, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717, 0.171717,
];

/// AA&N scaling for the inverse DCT with identity contrast weighting.
/// These are the values `aan_scaled_qtable` outputs for a unit CSF table
/// and yield a unitary transform.
#[rustfmt::skip]
pub const AAN_IDCT_FACTORS: [f32; 64] = [
    0.12500, 0.17338, 0.16332, 0.14698, 0.12500, 0.09821, 0.06765, 0.03449,
    0.17338, 0.24048, 0.22653, 0.20387, 0.17338, 0.13622, 0.09383, 0.04784,
    0.16332, 0.22653, 0.21339, 0.19204, 0.16332, 0.12832, 0.08839, 0.04506,
    0.14698, 0.20387, 0.19204, 0.17284, 0.14698, 0.11548, 0.07955, 0.04055,
    0.12500, 0.17338, 0.16332, 0.14698, 0.12500, 0.09821, 0.06765, 0.03449,
    0.09821, 0.13622, 0.12832, 0.11548, 0.09821, 0.07716, 0.05315, 0.02710,
    0.06765, 0.09383, 0.08839, 0.07955, 0.06765, 0.05315, 0.03661, 0.01866,
    0.03449, 0.04784, 0.04506, 0.04055, 0.03449, 0.02710, 0.01866, 0.00952,
];

/// AA&N scaling for the forward DCT with identity contrast weighting.
/// These are the values `aan_scaled_qtable` outputs for a unit CSF table
/// and yield a unitary transform.
#[rustfmt::skip]
pub const AAN_FDCT_FACTORS: [f32; 64] = [
    0.12500, 0.09012, 0.09567, 0.10630, 0.12500, 0.15909, 0.23097, 0.45306,
    0.09012, 0.06497, 0.06897, 0.07664, 0.09012, 0.11470, 0.16652, 0.32664,
    0.09567, 0.06897, 0.07322, 0.08136, 0.09567, 0.12177, 0.17678, 0.34676,
    0.10630, 0.07664, 0.08136, 0.09040, 0.10630, 0.13530, 0.19642, 0.38530,
    0.12500, 0.09012, 0.09567, 0.10630, 0.12500, 0.15909, 0.23097, 0.45306,
    0.15909, 0.11470, 0.12177, 0.13530, 0.15909, 0.20249, 0.29397, 0.57664,
    0.23097, 0.16652, 0.17678, 0.19642, 0.23097, 0.29397, 0.42678, 0.83715,
    0.45306, 0.32664, 0.34676, 0.38530, 0.45306, 0.57664, 0.83715, 1.64213,
];

/// Permute a natural-order coefficient block into zig-zag order:
/// `dst[k] = src[ZIGZAG[k]]`.
#[inline]
pub fn to_zigzag<T: Copy>(dst: &mut [T; DCTSIZE2], src: &[T; DCTSIZE2]) {
    for (z, &n) in ZIGZAG.iter().enumerate() {
        dst[z] = src[n];
    }
}

/// Permute a zig-zag-order coefficient block back into natural order:
/// `dst[ZIGZAG[k]] = src[k]`.
#[inline]
pub fn from_zigzag<T: Copy>(dst: &mut [T; DCTSIZE2], src: &[T; DCTSIZE2]) {
    for (z, &n) in ZIGZAG.iter().enumerate() {
        dst[n] = src[z];
    }
}
