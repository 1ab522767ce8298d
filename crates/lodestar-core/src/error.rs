use thiserror::Error;

/// Configuration violations reported once at world setup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("chunk dimensions must be non-zero, got {width}x{height}")]
    ZeroChunkDims { width: u32, height: u32 },

    #[error("min_chunk_x {min} exceeds max_chunk_x {max}")]
    InvertedChunkRange { min: i32, max: i32 },

    #[error("star_density {0} outside [0, 1]")]
    StarDensityOutOfRange(f32),

    #[error("star palette is empty")]
    EmptyStarPalette,

    #[error("star palette tile {tile} outside tileset of {len} tiles")]
    StarTileOutOfRange { tile: u16, len: u16 },
}
