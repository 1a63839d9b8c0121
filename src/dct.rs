//! Forward and inverse 8x8 DCT kernels.
//!
//! Two mathematically distinct kernels are provided and must never be mixed
//! within one coefficient stream:
//!
//! - A floating-point implementation of the scaled AA&N (Arai-Agui-Nakajima)
//!   transform. Its outputs are scaled by per-coefficient constants that the
//!   quantization tables absorb (see `quant::aan_scaled_qtable`), so the
//!   combined quantize/dequantize variants are the intended entry points.
//! - An integer transform in the style of the Bink 2 video DCT: butterflies
//!   plus shift-based rotations, 32-bit intermediates, 16-bit input/output.
//!   It quantizes with straight integer tables; the forward+inverse pair
//!   carries a combined gain of 64 that the inverse descales.
//!
//! Each 2-D transform is two 1-D passes, rows then columns on the forward
//! side and columns then rows on the inverse side.

use crate::consts::{DCTSIZE, DCTSIZE2};

// ============================================================================
// Floating-point AA&N kernel
// ============================================================================

const F13: f32 = 0.707106781; // 1/sqrt(2)
const F05: f32 = 0.382683433;
const F02: f32 = 0.541196100;
const F04: f32 = 1.306563965;

const I13: f32 = 1.414213562; // sqrt(2)
const I11: f32 = 1.414213562;
const I05: f32 = 1.847759065;
const I10: f32 = 1.082392200;
const I12: f32 = -2.613125930;

/// Identity quantization table for the unscaled kernel entry points.
const UNIT_QTABLE: [f32; DCTSIZE2] = [1.0; DCTSIZE2];

/// One forward AA&N butterfly over 8 values at `base`, `base + stride`, ...
#[inline]
fn fdct_f32_pass(data: &mut [f32; DCTSIZE2], base: usize, stride: usize) {
    let at = |k: usize| base + k * stride;

    let t00 = data[at(0)] + data[at(7)];
    let t07 = data[at(0)] - data[at(7)];
    let t01 = data[at(1)] + data[at(6)];
    let t06 = data[at(1)] - data[at(6)];
    let t02 = data[at(2)] + data[at(5)];
    let t05 = data[at(2)] - data[at(5)];
    let t03 = data[at(3)] + data[at(4)];
    let t04 = data[at(3)] - data[at(4)];

    // even part
    let t10 = t00 + t03;
    let t13 = t00 - t03;
    let t11 = t01 + t02;
    let t12 = t01 - t02;
    data[at(0)] = t10 + t11;
    data[at(4)] = t10 - t11;
    let z01 = (t12 + t13) * F13;
    data[at(2)] = t13 + z01;
    data[at(6)] = t13 - z01;

    // odd part
    let t10 = t04 + t05;
    let t11 = t05 + t06;
    let t12 = t06 + t07;
    let z05 = (t10 - t12) * F05;
    let z02 = F02 * t10 + z05;
    let z04 = F04 * t12 + z05;
    let z03 = F13 * t11;
    let z11 = t07 + z03;
    let z13 = t07 - z03;
    data[at(5)] = z13 + z02;
    data[at(3)] = z13 - z02;
    data[at(1)] = z11 + z04;
    data[at(7)] = z11 - z04;
}

/// Forward AA&N DCT of a centered 8x8 sample block.
///
/// Output coefficients carry the AA&N scaling; multiply by a table from
/// `quant::aan_scaled_qtable` (or `consts::AAN_FDCT_FACTORS` for a unitary
/// result) to descale.
pub fn forward_dct_f32(coeffs: &mut [f32; DCTSIZE2], samples: &[f32; DCTSIZE2]) {
    coeffs.copy_from_slice(samples);
    for row in 0..DCTSIZE {
        fdct_f32_pass(coeffs, row * DCTSIZE, 1);
    }
    for col in 0..DCTSIZE {
        fdct_f32_pass(coeffs, col, DCTSIZE);
    }
}

/// Forward AA&N DCT with combined quantization: runs both 1-D passes in
/// place, then multiplies every coefficient by the scaled table entry.
pub fn forward_dct_quantize_f32(
    coeffs: &mut [f32; DCTSIZE2],
    samples: &[f32; DCTSIZE2],
    qfdct: &[f32; DCTSIZE2],
) {
    forward_dct_f32(coeffs, samples);
    for (c, &q) in coeffs.iter_mut().zip(qfdct.iter()) {
        *c *= q;
    }
}

/// Inverse AA&N DCT with combined dequantization. Coefficients are
/// multiplied by the scaled table entry as they are loaded into the
/// column-pass workspace; the row pass then produces centered samples.
pub fn inverse_dct_dequantize_f32(
    samples: &mut [f32; DCTSIZE2],
    coeffs: &[f32; DCTSIZE2],
    qidct: &[f32; DCTSIZE2],
) {
    let mut ws = [0.0f32; DCTSIZE2];

    for col in 0..DCTSIZE {
        let load = |r: usize| coeffs[r * DCTSIZE + col] * qidct[r * DCTSIZE + col];

        // even part
        let t00 = load(0);
        let t01 = load(2);
        let t02 = load(4);
        let t03 = load(6);
        let t10 = t00 + t02;
        let t11 = t00 - t02;
        let t13 = t01 + t03;
        let t12 = (t01 - t03) * I13 - t13;
        let t00 = t10 + t13;
        let t03 = t10 - t13;
        let t01 = t11 + t12;
        let t02 = t11 - t12;

        // odd part
        let t04 = load(1);
        let t05 = load(3);
        let t06 = load(5);
        let t07 = load(7);
        let z13 = t06 + t05;
        let z10 = t06 - t05;
        let z11 = t04 + t07;
        let z12 = t04 - t07;
        let t07 = z11 + z13;
        let t11 = (z11 - z13) * I11;
        let z05 = (z10 + z12) * I05;
        let t10 = I10 * z12 - z05;
        let t12 = I12 * z10 + z05;
        let t06 = t12 - t07;
        let t05 = t11 - t06;
        let t04 = t10 + t05;

        ws[col] = t00 + t07;
        ws[DCTSIZE + col] = t01 + t06;
        ws[DCTSIZE * 2 + col] = t02 + t05;
        ws[DCTSIZE * 3 + col] = t03 - t04;
        ws[DCTSIZE * 4 + col] = t03 + t04;
        ws[DCTSIZE * 5 + col] = t02 - t05;
        ws[DCTSIZE * 6 + col] = t01 - t06;
        ws[DCTSIZE * 7 + col] = t00 - t07;
    }

    for row in 0..DCTSIZE {
        let w = &ws[row * DCTSIZE..(row + 1) * DCTSIZE];

        let t10 = w[0] + w[4];
        let t11 = w[0] - w[4];
        let t13 = w[2] + w[6];
        let t12 = (w[2] - w[6]) * I13 - t13;
        let t00 = t10 + t13;
        let t03 = t10 - t13;
        let t01 = t11 + t12;
        let t02 = t11 - t12;

        let z13 = w[5] + w[3];
        let z10 = w[5] - w[3];
        let z11 = w[1] + w[7];
        let z12 = w[1] - w[7];
        let t07 = z11 + z13;
        let t11 = (z11 - z13) * I11;
        let z05 = (z10 + z12) * I05;
        let t10 = I10 * z12 - z05;
        let t12 = I12 * z10 + z05;
        let t06 = t12 - t07;
        let t05 = t11 - t06;
        let t04 = t10 + t05;

        let out = &mut samples[row * DCTSIZE..(row + 1) * DCTSIZE];
        out[0] = t00 + t07;
        out[7] = t00 - t07;
        out[1] = t01 + t06;
        out[6] = t01 - t06;
        out[2] = t02 + t05;
        out[5] = t02 - t05;
        out[4] = t03 + t04;
        out[3] = t03 - t04;
    }
}

/// Inverse AA&N DCT of already-dequantized (AA&N-scaled) coefficients.
pub fn inverse_dct_f32(samples: &mut [f32; DCTSIZE2], coeffs: &[f32; DCTSIZE2]) {
    inverse_dct_dequantize_f32(samples, coeffs, &UNIT_QTABLE);
}

// ============================================================================
// Integer kernel (Bink 2 style)
// ============================================================================

/// One forward 1-D pass of the integer transform. All shifts are arithmetic.
#[inline]
fn fdct_int_pass(data: &mut [i32; DCTSIZE2], base: usize, stride: usize) {
    let at = |k: usize| base + k * stride;
    let i0 = data[at(0)];
    let i1 = data[at(1)];
    let i2 = data[at(2)];
    let i3 = data[at(3)];
    let i4 = data[at(4)];
    let i5 = data[at(5)];
    let i6 = data[at(6)];
    let i7 = data[at(7)];

    let a0 = i0 + i7;
    let a1 = i1 + i6;
    let a2 = i2 + i5;
    let a3 = i3 + i4;
    let a4 = i0 - i7;
    let a5 = i1 - i6;
    let a6 = i2 - i5;
    let a7 = i3 - i4;

    // even part
    let b0 = a0 + a3;
    let b1 = a1 + a2;
    let b2 = a0 - a3;
    let b3 = a1 - a2;
    let c0 = b0 + b1;
    let c1 = b0 - b1;
    let c2 = b2 + (b2 >> 2) + (b3 >> 1);
    let c3 = (b2 >> 1) - b3 - (b3 >> 2);

    // odd part: two shift-based rotations, then butterflies
    let b4 = (a7 >> 2) + a4 + (a4 >> 2) - (a4 >> 4);
    let b7 = (a4 >> 2) - a7 - (a7 >> 2) + (a7 >> 4);
    let b5 = a5 + a6 - (a6 >> 2) - (a6 >> 4);
    let b6 = a6 - a5 + (a5 >> 2) + (a5 >> 4);
    let c4 = b4 + b5;
    let c5 = b4 - b5;
    let c6 = b6 + b7;
    let c7 = b6 - b7;

    data[at(0)] = c0;
    data[at(1)] = c4;
    data[at(2)] = c2;
    data[at(3)] = c5 - c7;
    data[at(4)] = c1;
    data[at(5)] = c5 + c7;
    data[at(6)] = c3;
    data[at(7)] = c6;
}

/// One inverse 1-D pass: the forward stages undone in reverse order with
/// the same shift vocabulary. Rotation pairs are undone with their scaled
/// inverses so the combined forward+inverse gain stays a uniform 64 per
/// 2-D round trip.
#[inline]
fn idct_int_pass(data: &mut [i32; DCTSIZE2], base: usize, stride: usize) {
    let at = |k: usize| base + k * stride;
    let c0 = data[at(0)];
    let d4 = data[at(1)];
    let c2 = data[at(2)];
    let d6 = data[at(3)];
    let c1 = data[at(4)];
    let d5 = data[at(5)];
    let c3 = data[at(6)];
    let d7 = data[at(7)];

    // undo the final odd butterfly (its pass-through wires stay as-is)
    let c4 = d4;
    let c5 = (d5 + d6) >> 1;
    let c7 = (d5 - d6) >> 1;
    let c6 = d7;

    // undo the odd butterflies
    let b4 = c4 + c5;
    let b5 = c4 - c5;
    let b6 = c6 + c7;
    let b7 = c6 - c7;

    // undo the even part
    let b0 = c0 + c1;
    let b1 = c0 - c1;
    let b2 = c2 + (c2 >> 2) + (c2 >> 3) + (c3 >> 1) + (c3 >> 4) - (c3 >> 7);
    let b3 = (c2 >> 1) + (c2 >> 4) - (c2 >> 7) - c3 - (c3 >> 2) - (c3 >> 3);

    // undo the odd rotations
    let a4 = b4 + (b4 >> 1) + (b4 >> 3) - (b4 >> 6) + (b7 >> 2) + (b7 >> 3) - (b7 >> 5) - (b7 >> 8);
    let a7 = (b4 >> 2) + (b4 >> 3) - (b4 >> 5) - (b4 >> 8) - b7 - (b7 >> 1) - (b7 >> 3) + (b7 >> 6);
    let a5 = b5 + (b5 >> 2) + (b5 >> 3) - (b5 >> 6) - b6 + (b6 >> 4) + (b6 >> 8);
    let a6 = b5 - (b5 >> 4) - (b5 >> 8) + b6 + (b6 >> 2) + (b6 >> 3) - (b6 >> 6);

    // undo the input butterflies
    let a0 = b0 + b2;
    let a3 = b0 - b2;
    let a1 = b1 + b3;
    let a2 = b1 - b3;

    data[at(0)] = a0 + a4;
    data[at(1)] = a1 + a5;
    data[at(2)] = a2 + a6;
    data[at(3)] = a3 + a7;
    data[at(4)] = a3 - a7;
    data[at(5)] = a2 - a6;
    data[at(6)] = a1 - a5;
    data[at(7)] = a0 - a4;
}

/// Forward integer DCT of an 8x8 block of raw samples.
///
/// Coefficients come out scaled by the transform's built-in gain (a uniform
/// block of value `v` produces a DC of `64 * v`); the inverse descales.
pub fn forward_dct_int(coeffs: &mut [i16; DCTSIZE2], samples: &[i16; DCTSIZE2]) {
    let mut data = [0i32; DCTSIZE2];
    for (d, &s) in data.iter_mut().zip(samples.iter()) {
        *d = s as i32;
    }
    for row in 0..DCTSIZE {
        fdct_int_pass(&mut data, row * DCTSIZE, 1);
    }
    for col in 0..DCTSIZE {
        fdct_int_pass(&mut data, col, DCTSIZE);
    }
    for (c, &d) in coeffs.iter_mut().zip(data.iter()) {
        *c = d as i16;
    }
}

/// Forward integer DCT with combined quantization: transform, then divide
/// every coefficient by its table entry with round-half-away division.
pub fn forward_dct_quantize_int(
    coeffs: &mut [i16; DCTSIZE2],
    samples: &[i16; DCTSIZE2],
    qfdct: &[i16; DCTSIZE2],
) {
    let mut data = [0i32; DCTSIZE2];
    for (d, &s) in data.iter_mut().zip(samples.iter()) {
        *d = s as i32;
    }
    for row in 0..DCTSIZE {
        fdct_int_pass(&mut data, row * DCTSIZE, 1);
    }
    for col in 0..DCTSIZE {
        fdct_int_pass(&mut data, col, DCTSIZE);
    }
    for i in 0..DCTSIZE2 {
        let c = data[i];
        let q = qfdct[i] as i32;
        coeffs[i] = if c >= 0 {
            ((c + q / 2) / q) as i16
        } else {
            ((c - q / 2) / q) as i16
        };
    }
}

/// Inverse integer DCT with combined dequantization: every coefficient is
/// multiplied by its table entry on load, and the final row-pass sums are
/// descaled by 64 with rounding.
pub fn inverse_dct_dequantize_int(
    samples: &mut [i16; DCTSIZE2],
    coeffs: &[i16; DCTSIZE2],
    qidct: &[i16; DCTSIZE2],
) {
    let mut data = [0i32; DCTSIZE2];
    for i in 0..DCTSIZE2 {
        data[i] = coeffs[i] as i32 * qidct[i] as i32;
    }
    for col in 0..DCTSIZE {
        idct_int_pass(&mut data, col, DCTSIZE);
    }
    for row in 0..DCTSIZE {
        idct_int_pass(&mut data, row * DCTSIZE, 1);
    }
    for (s, &d) in samples.iter_mut().zip(data.iter()) {
        *s = ((d + 32) >> 6) as i16;
    }
}

/// Inverse integer DCT of already-dequantized coefficients, including the
/// descale of the combined forward/inverse gain.
pub fn inverse_dct_int(samples: &mut [i16; DCTSIZE2], coeffs: &[i16; DCTSIZE2]) {
    let mut data = [0i32; DCTSIZE2];
    for (d, &c) in data.iter_mut().zip(coeffs.iter()) {
        *d = c as i32;
    }
    for col in 0..DCTSIZE {
        idct_int_pass(&mut data, col, DCTSIZE);
    }
    for row in 0..DCTSIZE {
        idct_int_pass(&mut data, row * DCTSIZE, 1);
    }
    for (s, &d) in samples.iter_mut().zip(data.iter()) {
        *s = ((d + 32) >> 6) as i16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{AAN_FDCT_FACTORS, AAN_IDCT_FACTORS};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_float_dct_uniform_block_is_dc_only() {
        let samples = [12.5f32; DCTSIZE2];
        let mut coeffs = [0.0f32; DCTSIZE2];
        forward_dct_quantize_f32(&mut coeffs, &samples, &AAN_FDCT_FACTORS);

        // Unitary DC of a constant 8x8 block is 8 * v.
        assert!((coeffs[0] - 100.0).abs() < 1e-3, "DC = {}", coeffs[0]);
        for (i, &c) in coeffs.iter().enumerate().skip(1) {
            assert!(c.abs() < 1e-3, "AC[{}] = {}", i, c);
        }
    }

    #[test]
    fn test_float_dct_unitary_roundtrip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..100 {
            let mut samples = [0.0f32; DCTSIZE2];
            for s in samples.iter_mut() {
                *s = rng.gen_range(-128.0..127.0);
            }
            let mut coeffs = [0.0f32; DCTSIZE2];
            let mut back = [0.0f32; DCTSIZE2];
            forward_dct_quantize_f32(&mut coeffs, &samples, &AAN_FDCT_FACTORS);
            inverse_dct_dequantize_f32(&mut back, &coeffs, &AAN_IDCT_FACTORS);
            for i in 0..DCTSIZE2 {
                assert!(
                    (back[i] - samples[i]).abs() < 1e-3,
                    "sample {}: {} vs {}",
                    i,
                    back[i],
                    samples[i]
                );
            }
        }
    }

    #[test]
    fn test_float_plain_and_combined_agree() {
        let mut samples = [0.0f32; DCTSIZE2];
        for (i, s) in samples.iter_mut().enumerate() {
            *s = ((i * 37) % 251) as f32 - 125.0;
        }
        let mut plain = [0.0f32; DCTSIZE2];
        let mut combined = [0.0f32; DCTSIZE2];
        forward_dct_f32(&mut plain, &samples);
        forward_dct_quantize_f32(&mut combined, &samples, &AAN_FDCT_FACTORS);
        for i in 0..DCTSIZE2 {
            assert!((plain[i] * AAN_FDCT_FACTORS[i] - combined[i]).abs() < 1e-4);
        }
    }

    #[test]
    fn test_int_dct_uniform_block_exact() {
        let ones = [1i16; DCTSIZE2];
        for v in [0i16, 1, 37, -50, 255, -255] {
            let samples = [v; DCTSIZE2];
            let mut coeffs = [0i16; DCTSIZE2];
            forward_dct_quantize_int(&mut coeffs, &samples, &ones);

            assert_eq!(coeffs[0], v * 64, "DC for uniform {}", v);
            for (i, &c) in coeffs.iter().enumerate().skip(1) {
                assert_eq!(c, 0, "AC[{}] for uniform {}", i, v);
            }

            let mut back = [0i16; DCTSIZE2];
            inverse_dct_dequantize_int(&mut back, &coeffs, &ones);
            assert_eq!(back, samples);
        }
    }

    #[test]
    fn test_int_dct_smooth_roundtrip_within_one() {
        let ones = [1i16; DCTSIZE2];
        let mut rng = StdRng::seed_from_u64(0xb10c);
        for _ in 0..200 {
            // low-frequency content: sums of slow ramps and waves
            let (a, b, c) = (
                rng.gen_range(-48.0..48.0f32),
                rng.gen_range(-48.0..48.0f32),
                rng.gen_range(-48.0..48.0f32),
            );
            let phase = rng.gen_range(0.0..3.0f32);
            let mut samples = [0i16; DCTSIZE2];
            for r in 0..DCTSIZE {
                for col in 0..DCTSIZE {
                    let v = 128.0
                        + a * (r as f32 / 3.0 + phase).sin()
                        + b * (col as f32 / 3.0 + phase).cos()
                        + c * ((r + col) as f32 / 5.0).sin();
                    samples[r * DCTSIZE + col] = v as i16;
                }
            }
            let mut coeffs = [0i16; DCTSIZE2];
            let mut back = [0i16; DCTSIZE2];
            forward_dct_quantize_int(&mut coeffs, &samples, &ones);
            inverse_dct_dequantize_int(&mut back, &coeffs, &ones);
            for i in 0..DCTSIZE2 {
                assert!(
                    (back[i] - samples[i]).abs() <= 1,
                    "sample {}: {} vs {}",
                    i,
                    back[i],
                    samples[i]
                );
            }
        }
    }

    #[test]
    fn test_int_dct_noise_roundtrip_within_two() {
        let ones = [1i16; DCTSIZE2];
        let mut rng = StdRng::seed_from_u64(0xd17e);
        for _ in 0..200 {
            let mut samples = [0i16; DCTSIZE2];
            for s in samples.iter_mut() {
                *s = rng.gen_range(-255..=255);
            }
            let mut coeffs = [0i16; DCTSIZE2];
            let mut back = [0i16; DCTSIZE2];
            forward_dct_quantize_int(&mut coeffs, &samples, &ones);
            inverse_dct_dequantize_int(&mut back, &coeffs, &ones);
            for i in 0..DCTSIZE2 {
                assert!(
                    (back[i] - samples[i]).abs() <= 2,
                    "sample {}: {} vs {}",
                    i,
                    back[i],
                    samples[i]
                );
            }
        }
    }

    #[test]
    fn test_int_quantize_division_rounds_half_away() {
        let samples = [100i16; DCTSIZE2];
        let q = [16i16; DCTSIZE2];
        let mut coeffs = [0i16; DCTSIZE2];
        forward_dct_quantize_int(&mut coeffs, &samples, &q);
        // DC = 6400 before quantization; 6400 / 16 = 400
        assert_eq!(coeffs[0], 400);

        let neg = [-100i16; DCTSIZE2];
        forward_dct_quantize_int(&mut coeffs, &neg, &q);
        assert_eq!(coeffs[0], -400);
    }

    #[test]
    fn test_int_plain_inverse_matches_unit_table() {
        let ones = [1i16; DCTSIZE2];
        let mut samples = [0i16; DCTSIZE2];
        for (i, s) in samples.iter_mut().enumerate() {
            *s = ((i as i16) * 5) - 150;
        }
        let mut coeffs = [0i16; DCTSIZE2];
        forward_dct_int(&mut coeffs, &samples);

        let mut a = [0i16; DCTSIZE2];
        let mut b = [0i16; DCTSIZE2];
        inverse_dct_int(&mut a, &coeffs);
        inverse_dct_dequantize_int(&mut b, &coeffs, &ones);
        assert_eq!(a, b);
    }
}
