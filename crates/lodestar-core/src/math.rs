use crate::constants::{SEED_SPREAD_X, SEED_SPREAD_Y};
use crate::types::{CellCoord, ChunkCoord};
use glam::IVec2;

/// Convert a world-space cell coordinate to its containing chunk coordinate.
pub fn cell_to_chunk(cell: CellCoord, chunk_width: u32, chunk_height: u32) -> ChunkCoord {
    IVec2::new(
        cell.x.div_euclid(chunk_width as i32),
        cell.y.div_euclid(chunk_height as i32),
    )
}

/// Convert a world-space cell coordinate to its local offset within a chunk.
pub fn cell_to_local(cell: CellCoord, chunk_width: u32, chunk_height: u32) -> IVec2 {
    IVec2::new(
        cell.x.rem_euclid(chunk_width as i32),
        cell.y.rem_euclid(chunk_height as i32),
    )
}

/// Cell-space origin (minimum corner) of a chunk.
pub fn chunk_origin(chunk: ChunkCoord, chunk_width: u32, chunk_height: u32) -> CellCoord {
    IVec2::new(
        chunk.x * chunk_width as i32,
        chunk.y * chunk_height as i32,
    )
}

/// Half-open cell-space bounds `[min, max)` of a chunk.
pub fn chunk_bounds(
    chunk: ChunkCoord,
    chunk_width: u32,
    chunk_height: u32,
) -> (CellCoord, CellCoord) {
    let min = chunk_origin(chunk, chunk_width, chunk_height);
    let max = min + IVec2::new(chunk_width as i32, chunk_height as i32);
    (min, max)
}

/// Derive the generation seed for one chunk from the base seed.
///
/// `base + cx * SEED_SPREAD_X + cy * SEED_SPREAD_Y` with wrapping arithmetic;
/// the odd spread constants keep neighbouring chunk streams distinct. The
/// 32-bit result is widened through `u32` so negative sums map to a clean
/// RNG state.
pub fn chunk_seed(base: i32, chunk: ChunkCoord) -> u64 {
    let mixed = base
        .wrapping_add(chunk.x.wrapping_mul(SEED_SPREAD_X))
        .wrapping_add(chunk.y.wrapping_mul(SEED_SPREAD_Y));
    mixed as u32 as u64
}
