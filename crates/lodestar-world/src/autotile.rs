use crate::terrain_grid::TerrainGrid;
use glam::IVec2;
use lodestar_core::types::{CellCoord, Terrain, TileId};
use lodestar_rules::AutotileTable;

/// Resolve the display tile for one cell from the 2x2 placeholder block that
/// surrounds it.
///
/// The display grid is offset one cell diagonally from the placeholder grid:
/// a display cell samples the placeholders at its own coordinate (top-left)
/// and the +x / +y / +x+y neighbours. A block with no authored corner draws
/// nothing; otherwise empty corners read as `Dirt` so island edges close
/// with a boundary tile instead of a hole.
///
/// No side effects beyond cache population in the grid.
pub fn resolve_display_tile(
    grid: &mut TerrainGrid,
    table: &AutotileTable,
    cell: CellCoord,
) -> Option<TileId> {
    let tl = grid.resolve(cell);
    let tr = grid.resolve(cell + IVec2::new(1, 0));
    let bl = grid.resolve(cell + IVec2::new(0, 1));
    let br = grid.resolve(cell + IVec2::new(1, 1));

    if !tl.is_authored() && !tr.is_authored() && !bl.is_authored() && !br.is_authored() {
        return None;
    }

    let ground = |t: Terrain| if t.is_authored() { t } else { Terrain::Dirt };
    table.lookup(ground(tl), ground(tr), ground(bl), ground(br))
}
