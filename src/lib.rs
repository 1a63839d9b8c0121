//! # zentex - texture-streaming block codec
//!
//! zentex is the lossy core of a JPEG-like codec built for real-time
//! texture streaming. It differs from baseline JPEG where streaming
//! workloads differ from photographs:
//!
//! - **YCoCg-R color space**: a reversible integer lifting transform, so
//!   the color conversion itself is lossless.
//! - **Fixed 16x16 blocks, fixed 4:2:0 chroma**: four 8x8 luma blocks plus
//!   one subsampled 8x8 block per chroma channel, no per-stream sampling
//!   negotiation.
//! - **Alpha passthrough**: the alpha plane is carried uncompressed and
//!   left to the lossless back-end.
//! - **Two DCT kernels**: a scaled floating-point AA&N transform and a
//!   Bink-2-style integer transform. A stream commits to one kernel; the
//!   choice is recorded alongside the quality, never per block.
//!
//! The crate produces quantized coefficient streams for a lossless
//! back-end (FSE/LZ4 class) to compact; entropy coding, file I/O and
//! paging live outside this crate.
//!
//! ## Usage
//!
//! ```rust
//! use zentex::{decode16_rgba, encode16, DctKernel, KernelTables};
//!
//! let rgba = [128u8; 1024]; // one 16x16 RGBA8 block
//!
//! let enc = KernelTables::encode(DctKernel::IntegerBink2, 85);
//! let mut y = [0i16; 256];
//! let mut co = [0i16; 64];
//! let mut cg = [0i16; 64];
//! let mut alpha = [0u8; 256];
//! encode16(&mut y, &mut co, &mut cg, &mut alpha, &enc, &rgba);
//!
//! let dec = KernelTables::decode(DctKernel::IntegerBink2, 85);
//! let mut out = [0u8; 1024];
//! decode16_rgba(&mut out, &y, &co, &cg, &alpha, &dec);
//! ```
//!
//! Arbitrary-sized images are fed through the [`tile`] module, which
//! chunks them into bordered fixed-size tiles ready for [`encode16`].

// Core tables and types
pub mod consts;
mod error;
mod types;

// Encoding pipeline
pub mod color;
pub mod dct;
pub mod encode;
pub mod quant;
pub mod sample;

// Image chunking
pub mod tile;

// Public API
pub use encode::{
    decode16_rgb, decode16_rgb_f32, decode16_rgb_int, decode16_rgba, decode16_rgba_f32,
    decode16_rgba_int, encode16, encode16_f32, encode16_int, MCU_RGB_BYTES,
};
pub use error::{Error, Result};
pub use quant::{
    qtables_decode_f32, qtables_decode_int, qtables_encode_f32, qtables_encode_int, KernelTables,
};
pub use tile::{copy_tile, tile_count, BorderMode, ImageTile, TilerConfig};
pub use types::DctKernel;
