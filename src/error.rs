//! Error types for zentex

use std::fmt;

/// Result type for zentex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for zentex operations
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Tile dimensions too small for the requested border
    InvalidTileDimensions {
        tile_width: usize,
        tile_height: usize,
        border_size: usize,
    },
    /// Source image is empty
    EmptyImage,
    /// Tile index past the end of the tile grid
    TileIndexOutOfRange { index: usize, count: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTileDimensions {
                tile_width,
                tile_height,
                border_size,
            } => {
                write!(
                    f,
                    "Tile dimensions {}x{} cannot hold a {}-pixel border on each side",
                    tile_width, tile_height, border_size
                )
            }
            Error::EmptyImage => write!(f, "Source image has zero width or height"),
            Error::TileIndexOutOfRange { index, count } => {
                write!(f, "Tile index {} out of range (tile count {})", index, count)
            }
        }
    }
}

impl std::error::Error for Error {}
