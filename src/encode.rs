//! 16x16 block encode and decode pipelines.
//!
//! The encoder turns one 16x16 RGBA8 block into a form the lossless
//! back-end compacts well: four quantized 8x8 luma coefficient blocks, one
//! quantized 8x8 block per subsampled chroma channel, and the raw alpha
//! plane. The decoder reverses the pipeline. Both come in one flavor per
//! DCT kernel plus a [`KernelTables`]-dispatching wrapper; a stream is
//! always encoded and decoded with the same kernel.
//!
//! Coefficient blocks are emitted in natural order. Serializers that want
//! maximal zero-run length apply `consts::to_zigzag` per 8x8 block.

use crate::color::{rgba_to_ycocga, ycocg_to_rgb};
use crate::consts::{DCTSIZE2, MCU_PIXELS, MCU_RGBA_BYTES, MCU_YCOCG_LEN};
use crate::dct::{
    forward_dct_quantize_f32, forward_dct_quantize_int, inverse_dct_dequantize_f32,
    inverse_dct_dequantize_int,
};
use crate::quant::KernelTables;
use crate::sample::{
    merge_blocks, scale_block, subblock, subblock_centered, subsample, subsample_centered,
};

/// Luma quadrant scan order: left-to-right, top-to-bottom, so quadrant `k`
/// of the packed coefficient buffer is `(qx, qy) = (k % 2, k / 2)` and
/// `sample::merge_blocks` reassembles the plane without reordering.
const LUMA_QUADRANTS: [(usize, usize); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// RGB output bytes per decoded block
pub const MCU_RGB_BYTES: usize = MCU_PIXELS * 3;

#[inline]
fn round_coeffs(dst: &mut [i16], src: &[f32; DCTSIZE2]) {
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = s.round() as i16;
    }
}

#[inline]
fn load_coeffs(dst: &mut [f32; DCTSIZE2], src: &[i16]) {
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = s as f32;
    }
}

// ============================================================================
// Floating-point AA&N pipeline
// ============================================================================

/// Encode a 16x16 RGBA8 block with the floating-point kernel.
///
/// `y` receives the four luma quadrants packed contiguously, `co`/`cg` one
/// subsampled chroma block each, `alpha` the untransformed alpha plane.
/// `qluma`/`qchroma` come from `quant::qtables_encode_f32`.
pub fn encode16_f32(
    y: &mut [i16; MCU_PIXELS],
    co: &mut [i16; DCTSIZE2],
    cg: &mut [i16; DCTSIZE2],
    alpha: &mut [u8; MCU_PIXELS],
    qluma: &[f32; DCTSIZE2],
    qchroma: &[f32; DCTSIZE2],
    rgba: &[u8; MCU_RGBA_BYTES],
) {
    let mut ycocg = [0i16; MCU_YCOCG_LEN];
    rgba_to_ycocga(&mut ycocg, alpha, rgba);

    let mut samples = [0.0f32; DCTSIZE2];
    let mut coeffs = [0.0f32; DCTSIZE2];
    for (k, (qx, qy)) in LUMA_QUADRANTS.into_iter().enumerate() {
        subblock_centered(&mut samples, &ycocg, qx, qy, 0);
        forward_dct_quantize_f32(&mut coeffs, &samples, qluma);
        round_coeffs(&mut y[k * DCTSIZE2..(k + 1) * DCTSIZE2], &coeffs);
    }

    subsample_centered(&mut samples, &ycocg, 1);
    forward_dct_quantize_f32(&mut coeffs, &samples, qchroma);
    round_coeffs(&mut co[..], &coeffs);

    subsample_centered(&mut samples, &ycocg, 2);
    forward_dct_quantize_f32(&mut coeffs, &samples, qchroma);
    round_coeffs(&mut cg[..], &coeffs);
}

/// Reconstruct full-resolution YCoCg planes from float-kernel coefficients:
/// merged luma plus both chroma channels upscaled from 4:2:0.
fn decode_planes_f32(
    y: &[i16; MCU_PIXELS],
    co: &[i16; DCTSIZE2],
    cg: &[i16; DCTSIZE2],
    qluma: &[f32; DCTSIZE2],
    qchroma: &[f32; DCTSIZE2],
) -> ([i16; MCU_PIXELS], [i16; MCU_PIXELS], [i16; MCU_PIXELS]) {
    let mut coeffs = [0.0f32; DCTSIZE2];
    let mut samples = [0.0f32; DCTSIZE2];

    let mut staging = [0i16; MCU_PIXELS];
    for k in 0..4 {
        load_coeffs(&mut coeffs, &y[k * DCTSIZE2..(k + 1) * DCTSIZE2]);
        inverse_dct_dequantize_f32(&mut samples, &coeffs, qluma);
        for (d, &s) in staging[k * DCTSIZE2..(k + 1) * DCTSIZE2]
            .iter_mut()
            .zip(samples.iter())
        {
            *d = (s + 128.0).round() as i16;
        }
    }
    let mut ym = [0i16; MCU_PIXELS];
    merge_blocks(&mut ym, &staging);

    let mut half = [0i16; DCTSIZE2];
    let mut os = [0i16; MCU_PIXELS];
    load_coeffs(&mut coeffs, &co[..]);
    inverse_dct_dequantize_f32(&mut samples, &coeffs, qchroma);
    for (d, &s) in half.iter_mut().zip(samples.iter()) {
        *d = (s + 128.0).round() as i16;
    }
    scale_block(&mut os, &half);

    let mut gs = [0i16; MCU_PIXELS];
    load_coeffs(&mut coeffs, &cg[..]);
    inverse_dct_dequantize_f32(&mut samples, &coeffs, qchroma);
    for (d, &s) in half.iter_mut().zip(samples.iter()) {
        *d = (s + 128.0).round() as i16;
    }
    scale_block(&mut gs, &half);

    (ym, os, gs)
}

/// Decode float-kernel coefficients back into a 16x16 RGBA8 block.
pub fn decode16_rgba_f32(
    rgba: &mut [u8; MCU_RGBA_BYTES],
    y: &[i16; MCU_PIXELS],
    co: &[i16; DCTSIZE2],
    cg: &[i16; DCTSIZE2],
    alpha: &[u8; MCU_PIXELS],
    qluma: &[f32; DCTSIZE2],
    qchroma: &[f32; DCTSIZE2],
) {
    let (ym, os, gs) = decode_planes_f32(y, co, cg, qluma, qchroma);
    for p in 0..MCU_PIXELS {
        let (r, g, b) = ycocg_to_rgb(ym[p], os[p], gs[p]);
        let dst = &mut rgba[p * 4..p * 4 + 4];
        dst[0] = r;
        dst[1] = g;
        dst[2] = b;
        dst[3] = alpha[p];
    }
}

/// Decode float-kernel coefficients into a 16x16 RGB8 block, discarding
/// alpha.
pub fn decode16_rgb_f32(
    rgb: &mut [u8; MCU_RGB_BYTES],
    y: &[i16; MCU_PIXELS],
    co: &[i16; DCTSIZE2],
    cg: &[i16; DCTSIZE2],
    qluma: &[f32; DCTSIZE2],
    qchroma: &[f32; DCTSIZE2],
) {
    let (ym, os, gs) = decode_planes_f32(y, co, cg, qluma, qchroma);
    for p in 0..MCU_PIXELS {
        let (r, g, b) = ycocg_to_rgb(ym[p], os[p], gs[p]);
        let dst = &mut rgb[p * 3..p * 3 + 3];
        dst[0] = r;
        dst[1] = g;
        dst[2] = b;
    }
}

// ============================================================================
// Integer pipeline
// ============================================================================

/// Encode a 16x16 RGBA8 block with the integer kernel. The transform
/// consumes raw YCoCg samples; `qluma`/`qchroma` come from
/// `quant::qtables_encode_int`.
pub fn encode16_int(
    y: &mut [i16; MCU_PIXELS],
    co: &mut [i16; DCTSIZE2],
    cg: &mut [i16; DCTSIZE2],
    alpha: &mut [u8; MCU_PIXELS],
    qluma: &[i16; DCTSIZE2],
    qchroma: &[i16; DCTSIZE2],
    rgba: &[u8; MCU_RGBA_BYTES],
) {
    let mut ycocg = [0i16; MCU_YCOCG_LEN];
    rgba_to_ycocga(&mut ycocg, alpha, rgba);

    let mut samples = [0i16; DCTSIZE2];
    let mut coeffs = [0i16; DCTSIZE2];
    for (k, (qx, qy)) in LUMA_QUADRANTS.into_iter().enumerate() {
        subblock(&mut samples, &ycocg, qx, qy, 0);
        forward_dct_quantize_int(&mut coeffs, &samples, qluma);
        y[k * DCTSIZE2..(k + 1) * DCTSIZE2].copy_from_slice(&coeffs);
    }

    subsample(&mut samples, &ycocg, 1);
    forward_dct_quantize_int(co, &samples, qchroma);

    subsample(&mut samples, &ycocg, 2);
    forward_dct_quantize_int(cg, &samples, qchroma);
}

/// Reconstruct full-resolution YCoCg planes from integer-kernel
/// coefficients.
fn decode_planes_int(
    y: &[i16; MCU_PIXELS],
    co: &[i16; DCTSIZE2],
    cg: &[i16; DCTSIZE2],
    qluma: &[i16; DCTSIZE2],
    qchroma: &[i16; DCTSIZE2],
) -> ([i16; MCU_PIXELS], [i16; MCU_PIXELS], [i16; MCU_PIXELS]) {
    let mut block = [0i16; DCTSIZE2];
    let mut samples = [0i16; DCTSIZE2];

    let mut staging = [0i16; MCU_PIXELS];
    for k in 0..4 {
        block.copy_from_slice(&y[k * DCTSIZE2..(k + 1) * DCTSIZE2]);
        inverse_dct_dequantize_int(&mut samples, &block, qluma);
        staging[k * DCTSIZE2..(k + 1) * DCTSIZE2].copy_from_slice(&samples);
    }
    let mut ym = [0i16; MCU_PIXELS];
    merge_blocks(&mut ym, &staging);

    let mut os = [0i16; MCU_PIXELS];
    inverse_dct_dequantize_int(&mut samples, co, qchroma);
    scale_block(&mut os, &samples);

    let mut gs = [0i16; MCU_PIXELS];
    inverse_dct_dequantize_int(&mut samples, cg, qchroma);
    scale_block(&mut gs, &samples);

    (ym, os, gs)
}

/// Decode integer-kernel coefficients back into a 16x16 RGBA8 block.
pub fn decode16_rgba_int(
    rgba: &mut [u8; MCU_RGBA_BYTES],
    y: &[i16; MCU_PIXELS],
    co: &[i16; DCTSIZE2],
    cg: &[i16; DCTSIZE2],
    alpha: &[u8; MCU_PIXELS],
    qluma: &[i16; DCTSIZE2],
    qchroma: &[i16; DCTSIZE2],
) {
    let (ym, os, gs) = decode_planes_int(y, co, cg, qluma, qchroma);
    for p in 0..MCU_PIXELS {
        let (r, g, b) = ycocg_to_rgb(ym[p], os[p], gs[p]);
        let dst = &mut rgba[p * 4..p * 4 + 4];
        dst[0] = r;
        dst[1] = g;
        dst[2] = b;
        dst[3] = alpha[p];
    }
}

/// Decode integer-kernel coefficients into a 16x16 RGB8 block, discarding
/// alpha.
pub fn decode16_rgb_int(
    rgb: &mut [u8; MCU_RGB_BYTES],
    y: &[i16; MCU_PIXELS],
    co: &[i16; DCTSIZE2],
    cg: &[i16; DCTSIZE2],
    qluma: &[i16; DCTSIZE2],
    qchroma: &[i16; DCTSIZE2],
) {
    let (ym, os, gs) = decode_planes_int(y, co, cg, qluma, qchroma);
    for p in 0..MCU_PIXELS {
        let (r, g, b) = ycocg_to_rgb(ym[p], os[p], gs[p]);
        let dst = &mut rgb[p * 3..p * 3 + 3];
        dst[0] = r;
        dst[1] = g;
        dst[2] = b;
    }
}

// ============================================================================
// Kernel dispatch
// ============================================================================

/// Encode a 16x16 RGBA8 block with whichever kernel `tables` was built for.
pub fn encode16(
    y: &mut [i16; MCU_PIXELS],
    co: &mut [i16; DCTSIZE2],
    cg: &mut [i16; DCTSIZE2],
    alpha: &mut [u8; MCU_PIXELS],
    tables: &KernelTables,
    rgba: &[u8; MCU_RGBA_BYTES],
) {
    match tables {
        KernelTables::Float { luma, chroma } => {
            encode16_f32(y, co, cg, alpha, luma, chroma, rgba)
        }
        KernelTables::Int { luma, chroma } => encode16_int(y, co, cg, alpha, luma, chroma, rgba),
    }
}

/// Decode a 16x16 block to RGBA8 with whichever kernel `tables` was built
/// for.
pub fn decode16_rgba(
    rgba: &mut [u8; MCU_RGBA_BYTES],
    y: &[i16; MCU_PIXELS],
    co: &[i16; DCTSIZE2],
    cg: &[i16; DCTSIZE2],
    alpha: &[u8; MCU_PIXELS],
    tables: &KernelTables,
) {
    match tables {
        KernelTables::Float { luma, chroma } => {
            decode16_rgba_f32(rgba, y, co, cg, alpha, luma, chroma)
        }
        KernelTables::Int { luma, chroma } => {
            decode16_rgba_int(rgba, y, co, cg, alpha, luma, chroma)
        }
    }
}

/// Decode a 16x16 block to RGB8 with whichever kernel `tables` was built
/// for.
pub fn decode16_rgb(
    rgb: &mut [u8; MCU_RGB_BYTES],
    y: &[i16; MCU_PIXELS],
    co: &[i16; DCTSIZE2],
    cg: &[i16; DCTSIZE2],
    tables: &KernelTables,
) {
    match tables {
        KernelTables::Float { luma, chroma } => decode16_rgb_f32(rgb, y, co, cg, luma, chroma),
        KernelTables::Int { luma, chroma } => decode16_rgb_int(rgb, y, co, cg, luma, chroma),
    }
}
