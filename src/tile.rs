//! Image tiler: partitions an arbitrary RGBA8 image into fixed-size tiles
//! suitable as codec input, with configurable border sampling and
//! edge-extend padding on the right and bottom edges.
//!
//! A tile is `tile_width x tile_height` pixels including `border_size`
//! pixels of border on every side; the interior region walks the source
//! image in row-major order. Tiles whose interior extends past the image
//! edge replicate the last source pixel of each row/column.

use imgref::{Img, ImgRef, ImgVec};
use rgb::{ComponentBytes, RGBA8};

use crate::error::{Error, Result};

/// Border sampling mode for pixels in the outer `border_size` ring of a
/// tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Border pixels replicate the nearest source edge pixel.
    #[default]
    ClampToEdge,
    /// Border pixels are a constant color.
    ConstantColor(RGBA8),
}

/// Tiler configuration: tile geometry plus a view of the source image.
///
/// Constructed through [`TilerConfig::new`], which rejects geometry that
/// cannot hold the requested border.
#[derive(Clone, Copy)]
pub struct TilerConfig<'a> {
    tile_width: usize,
    tile_height: usize,
    border_size: usize,
    border_mode: BorderMode,
    image: ImgRef<'a, RGBA8>,
}

impl<'a> TilerConfig<'a> {
    /// Create a tiler configuration. `tile_width` and `tile_height` must
    /// each leave at least one interior pixel after subtracting the border
    /// from both sides, and the image must be non-empty; otherwise nothing
    /// is built and an error describes the rejected geometry.
    pub fn new(
        image: ImgRef<'a, RGBA8>,
        tile_width: usize,
        tile_height: usize,
        border_size: usize,
        border_mode: BorderMode,
    ) -> Result<Self> {
        if tile_width < 2 * border_size + 1 || tile_height < 2 * border_size + 1 {
            return Err(Error::InvalidTileDimensions {
                tile_width,
                tile_height,
                border_size,
            });
        }
        if image.width() == 0 || image.height() == 0 {
            return Err(Error::EmptyImage);
        }
        Ok(TilerConfig {
            tile_width,
            tile_height,
            border_size,
            border_mode,
            image,
        })
    }

    /// Tile width in pixels, border included
    #[must_use]
    pub const fn tile_width(&self) -> usize {
        self.tile_width
    }

    /// Tile height in pixels, border included
    #[must_use]
    pub const fn tile_height(&self) -> usize {
        self.tile_height
    }

    /// Border thickness in pixels
    #[must_use]
    pub const fn border_size(&self) -> usize {
        self.border_size
    }

    /// Border sampling mode
    #[must_use]
    pub const fn border_mode(&self) -> BorderMode {
        self.border_mode
    }

    /// Source image view
    #[must_use]
    pub fn image(&self) -> ImgRef<'a, RGBA8> {
        self.image
    }

    /// Interior tile width: source pixels covered per tile column
    #[must_use]
    pub const fn inner_width(&self) -> usize {
        self.tile_width - 2 * self.border_size
    }

    /// Interior tile height: source pixels covered per tile row
    #[must_use]
    pub const fn inner_height(&self) -> usize {
        self.tile_height - 2 * self.border_size
    }
}

/// Number of tiles the configuration produces: `(across, down, total)`.
/// Partial tiles at the right and bottom edges count; their interiors are
/// edge-extend padded by [`copy_tile`].
#[must_use]
pub fn tile_count(config: &TilerConfig<'_>) -> (usize, usize, usize) {
    let inner_w = config.inner_width();
    let inner_h = config.inner_height();
    let across = (config.image.width() + inner_w - 1) / inner_w;
    let down = (config.image.height() + inner_h - 1) / inner_h;
    (across, down, across * down)
}

/// One output tile: placement metadata plus an owned pixel buffer.
///
/// The buffer is released when the tile is dropped.
#[derive(Clone)]
pub struct ImageTile {
    /// X of the covered source rect, in pixels
    pub source_x: usize,
    /// Y of the covered source rect, in pixels
    pub source_y: usize,
    /// Width of the covered source rect (excludes padding)
    pub source_width: usize,
    /// Height of the covered source rect (excludes padding)
    pub source_height: usize,
    /// Column index in the tile grid
    pub tile_x: usize,
    /// Row index in the tile grid
    pub tile_y: usize,
    /// Flat index in the tile grid
    pub tile_index: usize,
    /// Output pixels, `tile_width x tile_height`
    pub pixels: ImgVec<RGBA8>,
}

impl ImageTile {
    /// Allocate a zeroed tile sized for `config`. Fill it with
    /// [`copy_tile`].
    #[must_use]
    pub fn alloc(config: &TilerConfig<'_>) -> ImageTile {
        let (w, h) = (config.tile_width, config.tile_height);
        ImageTile {
            source_x: 0,
            source_y: 0,
            source_width: 0,
            source_height: 0,
            tile_x: 0,
            tile_y: 0,
            tile_index: 0,
            pixels: Img::new(vec![RGBA8::default(); w * h], w, h),
        }
    }

    /// Bytes per output pixel row
    #[must_use]
    pub fn bytes_per_row(&self) -> usize {
        self.pixels.width() * 4
    }

    /// Total bytes in the output pixel buffer
    #[must_use]
    pub fn bytes_per_tile(&self) -> usize {
        self.pixels.width() * self.pixels.height() * 4
    }

    /// The tile pixels as raw RGBA8 bytes, row-major. For a 16x16 tile this
    /// is exactly the input layout `encode::encode16` expects.
    #[must_use]
    pub fn as_rgba_bytes(&self) -> &[u8] {
        self.pixels.buf().as_bytes()
    }
}

/// Assemble one tile row: left border, `src` pixels, `pad_right` copies of
/// the last source pixel, right border.
fn read_row(
    dst: &mut [RGBA8],
    src: &[RGBA8],
    pad_right: usize,
    border_size: usize,
    border_mode: BorderMode,
) {
    let left_edge = src[0];
    let right_edge = src[src.len() - 1];
    let (left_border, right_border) = match border_mode {
        BorderMode::ClampToEdge => (left_edge, right_edge),
        BorderMode::ConstantColor(c) => (c, c),
    };

    let mut out = 0;
    for _ in 0..border_size {
        dst[out] = left_border;
        out += 1;
    }
    dst[out..out + src.len()].copy_from_slice(src);
    out += src.len();
    for _ in 0..pad_right {
        dst[out] = right_edge;
        out += 1;
    }
    for _ in 0..border_size {
        dst[out] = right_border;
        out += 1;
    }
}

/// Assemble a top or bottom border row. Clamp-to-edge borders look like a
/// normal row built from the nearest source row; constant-color borders
/// are solid.
fn read_row_border(
    dst: &mut [RGBA8],
    src: &[RGBA8],
    pad_right: usize,
    border_size: usize,
    border_mode: BorderMode,
) {
    match border_mode {
        BorderMode::ClampToEdge => read_row(dst, src, pad_right, border_size, border_mode),
        BorderMode::ConstantColor(c) => dst.fill(c),
    }
}

/// Extract tile `index` from the source image into `tile`.
///
/// Fails with [`Error::TileIndexOutOfRange`] for an index past the grid;
/// the tile is left untouched in that case. `tile` must have been
/// allocated for a configuration with the same tile dimensions.
pub fn copy_tile(tile: &mut ImageTile, config: &TilerConfig<'_>, index: usize) -> Result<()> {
    let (across, _, count) = tile_count(config);
    if index >= count {
        return Err(Error::TileIndexOutOfRange { index, count });
    }
    assert_eq!(
        (tile.pixels.width(), tile.pixels.height()),
        (config.tile_width, config.tile_height),
        "tile buffer does not match the tiler configuration"
    );

    let tile_x = index % across;
    let tile_y = index / across;
    let inner_w = config.inner_width();
    let inner_h = config.inner_height();
    let source_x = tile_x * inner_w;
    let source_y = tile_y * inner_h;

    let image_w = config.image.width();
    let image_h = config.image.height();
    let source_w = inner_w.min(image_w - source_x);
    let source_h = inner_h.min(image_h - source_y);
    let pad_right = inner_w - source_w;
    let pad_bottom = inner_h - source_h;

    let stride = config.image.stride();
    let buf = config.image.buf();
    let src_row = |row: usize| &buf[row * stride + source_x..row * stride + source_x + source_w];

    let border = config.border_size;
    let mode = config.border_mode;
    let tile_w = config.tile_width;
    let out = tile.pixels.buf_mut();

    let mut out_row = 0;

    // top border rows sample the first source row
    for _ in 0..border {
        read_row_border(
            &mut out[out_row * tile_w..(out_row + 1) * tile_w],
            src_row(source_y),
            pad_right,
            border,
            mode,
        );
        out_row += 1;
    }

    // interior rows
    for i in 0..source_h {
        read_row(
            &mut out[out_row * tile_w..(out_row + 1) * tile_w],
            src_row(source_y + i),
            pad_right,
            border,
            mode,
        );
        out_row += 1;
    }

    // bottom padding duplicates the last produced interior row
    for _ in 0..pad_bottom {
        let (done, rest) = out.split_at_mut(out_row * tile_w);
        rest[..tile_w].copy_from_slice(&done[(out_row - 1) * tile_w..out_row * tile_w]);
        out_row += 1;
    }

    // bottom border rows sample the last source row
    for _ in 0..border {
        read_row_border(
            &mut out[out_row * tile_w..(out_row + 1) * tile_w],
            src_row(source_y + source_h - 1),
            pad_right,
            border,
            mode,
        );
        out_row += 1;
    }

    tile.source_x = source_x;
    tile.source_y = source_y;
    tile.source_width = source_w;
    tile.source_height = source_h;
    tile.tile_x = tile_x;
    tile.tile_y = tile_y;
    tile.tile_index = index;
    Ok(())
}
