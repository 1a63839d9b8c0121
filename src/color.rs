//! Color space conversion between RGBA and YCoCg-A.
//!
//! Uses the reversible YCoCg-R lifting transform: integer adds, subtracts
//! and arithmetic shifts only, so a forward/inverse pair reconstructs the
//! input bit-for-bit. The alpha channel is carried through untouched in a
//! separate plane.

use crate::consts::{MCU_PIXELS, MCU_RGBA_BYTES, MCU_YCOCG_LEN};

/// Convert one RGB pixel to YCoCg via the lifting transform.
///
/// For 8-bit input, Y stays in [0, 255] while Co and Cg span [-255, 255].
#[inline]
pub fn rgb_to_ycocg(r: u8, g: u8, b: u8) -> (i16, i16, i16) {
    let r = r as i16;
    let g = g as i16;
    let b = b as i16;

    let co = r - b;
    let t = b + (co >> 1);
    let cg = g - t;
    let y = t + (cg >> 1);

    (y, co, cg)
}

/// Convert one YCoCg pixel back to RGB, clamping each channel to [0, 255].
///
/// For values produced by [`rgb_to_ycocg`] the clamps never fire; they only
/// matter after lossy reconstruction.
#[inline]
pub fn ycocg_to_rgb(y: i16, co: i16, cg: i16) -> (u8, u8, u8) {
    let t = y - (cg >> 1);
    let g = cg + t;
    let b = t - (co >> 1);
    let r = b + co;

    (
        r.clamp(0, 255) as u8,
        g.clamp(0, 255) as u8,
        b.clamp(0, 255) as u8,
    )
}

/// Convert a 16x16 block of RGBA8 pixels into interleaved YCoCg triples
/// plus a separate alpha plane.
pub fn rgba_to_ycocga(
    ycocg: &mut [i16; MCU_YCOCG_LEN],
    alpha: &mut [u8; MCU_PIXELS],
    rgba: &[u8; MCU_RGBA_BYTES],
) {
    for p in 0..MCU_PIXELS {
        let src = &rgba[p * 4..p * 4 + 4];
        let (y, co, cg) = rgb_to_ycocg(src[0], src[1], src[2]);
        ycocg[p * 3] = y;
        ycocg[p * 3 + 1] = co;
        ycocg[p * 3 + 2] = cg;
        alpha[p] = src[3];
    }
}

/// Convert interleaved YCoCg triples and an alpha plane back into a 16x16
/// block of RGBA8 pixels.
pub fn ycocga_to_rgba(
    rgba: &mut [u8; MCU_RGBA_BYTES],
    ycocg: &[i16; MCU_YCOCG_LEN],
    alpha: &[u8; MCU_PIXELS],
) {
    for p in 0..MCU_PIXELS {
        let (r, g, b) = ycocg_to_rgb(ycocg[p * 3], ycocg[p * 3 + 1], ycocg[p * 3 + 2]);
        let dst = &mut rgba[p * 4..p * 4 + 4];
        dst[0] = r;
        dst[1] = g;
        dst[2] = b;
        dst[3] = alpha[p];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifting_roundtrip_exact() {
        // The lifting transform must be exactly reversible; sample the RGB
        // cube on a lattice that includes both extremes.
        let steps: Vec<u8> = (0u16..256).step_by(3).map(|v| v as u8).collect();
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let (y, co, cg) = rgb_to_ycocg(r, g, b);
                    let (r2, g2, b2) = ycocg_to_rgb(y, co, cg);
                    assert_eq!((r, g, b), (r2, g2, b2));
                }
            }
        }
    }

    #[test]
    fn test_component_ranges() {
        let steps: Vec<u8> = (0u16..256).step_by(5).map(|v| v as u8).collect();
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let (y, co, cg) = rgb_to_ycocg(r, g, b);
                    assert!((0..=255).contains(&y), "Y={} for rgb({},{},{})", y, r, g, b);
                    assert!((-255..=255).contains(&co));
                    assert!((-255..=255).contains(&cg));
                }
            }
        }
    }

    #[test]
    fn test_primary_colors() {
        assert_eq!(rgb_to_ycocg(0, 0, 0), (0, 0, 0));
        assert_eq!(rgb_to_ycocg(255, 255, 255), (255, 0, 0));
        let (y, co, cg) = rgb_to_ycocg(255, 0, 0);
        assert_eq!(co, 255);
        assert_eq!(ycocg_to_rgb(y, co, cg), (255, 0, 0));
    }

    #[test]
    fn test_block_conversion_roundtrip() {
        let mut rgba = [0u8; MCU_RGBA_BYTES];
        for (i, v) in rgba.iter_mut().enumerate() {
            *v = (i * 7 % 256) as u8;
        }
        let mut ycocg = [0i16; MCU_YCOCG_LEN];
        let mut alpha = [0u8; MCU_PIXELS];
        let mut back = [0u8; MCU_RGBA_BYTES];

        rgba_to_ycocga(&mut ycocg, &mut alpha, &rgba);
        ycocga_to_rgba(&mut back, &ycocg, &alpha);
        assert_eq!(back, rgba);
    }

    #[test]
    fn test_alpha_is_separated_verbatim() {
        let mut rgba = [0u8; MCU_RGBA_BYTES];
        for p in 0..MCU_PIXELS {
            rgba[p * 4 + 3] = (p % 256) as u8;
        }
        let mut ycocg = [0i16; MCU_YCOCG_LEN];
        let mut alpha = [0u8; MCU_PIXELS];
        rgba_to_ycocga(&mut ycocg, &mut alpha, &rgba);
        for p in 0..MCU_PIXELS {
            assert_eq!(alpha[p], (p % 256) as u8);
        }
    }
}
