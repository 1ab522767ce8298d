use crate::autotile::resolve_display_tile;
use crate::chunk::{Chunk, TileBuffer};
use crate::chunk_store::ChunkStore;
use crate::starfield::StarfieldGenerator;
use crate::terrain_grid::TerrainGrid;
use glam::IVec2;
use lodestar_core::math::{cell_to_chunk, cell_to_local, chunk_bounds};
use lodestar_core::types::{CellCoord, ChunkCoord, Terrain};
use lodestar_rules::AutotileTable;

/// One streamed display layer driven by the scheduler.
///
/// Both operations are total over any coordinate: creating an existing
/// chunk returns it unchanged, `None` from `create_chunk` means the layer
/// chose not to create anything there (not an error), and destroying an
/// absent chunk is a no-op.
pub trait ChunkLayer {
    /// Tag used in scheduler logs.
    fn label(&self) -> &'static str;

    fn create_chunk(&mut self, coord: ChunkCoord) -> Option<&Chunk>;

    fn destroy_chunk(&mut self, coord: ChunkCoord);

    fn is_loaded(&self, coord: ChunkCoord) -> bool;

    fn loaded_count(&self) -> usize;
}

/// Autotiled terrain layer: sparse authored markers rendered through the
/// rule table. Chunks whose bounds hold no authored cell are skipped.
pub struct TerrainLayer {
    grid: TerrainGrid,
    table: AutotileTable,
    store: ChunkStore,
    chunk_width: u32,
    chunk_height: u32,
}

impl TerrainLayer {
    pub fn new(table: AutotileTable, chunk_width: u32, chunk_height: u32) -> Self {
        Self {
            grid: TerrainGrid::new(),
            table,
            store: ChunkStore::new(),
            chunk_width,
            chunk_height,
        }
    }

    /// Author a marker and recompute the display cells that sample it in
    /// any loaded chunk. A placeholder cell is sampled by its own display
    /// cell and the three display cells one step towards -x/-y.
    pub fn set(&mut self, cell: CellCoord, terrain: Terrain) {
        self.grid.set(cell, terrain);
        for offset in [
            IVec2::ZERO,
            IVec2::new(-1, 0),
            IVec2::new(0, -1),
            IVec2::new(-1, -1),
        ] {
            self.refresh_display_cell(cell + offset);
        }
    }

    /// Drop the grid's memo cache after bulk external edits.
    pub fn clear_cache(&mut self) {
        self.grid.clear_cache();
    }

    /// Whether the cell resolves to a display tile.
    pub fn is_cell_occupied(&mut self, cell: CellCoord) -> bool {
        resolve_display_tile(&mut self.grid, &self.table, cell).is_some()
    }

    /// Rebuild a loaded chunk's buffer from the current grid, or create the
    /// chunk if it is not loaded. Used after bulk edits.
    pub fn refresh_chunk(&mut self, coord: ChunkCoord) -> Option<&Chunk> {
        if !self.store.contains(coord) {
            return self.create_chunk(coord);
        }
        let tiles = self.build_tiles(coord);
        if let Some(chunk) = self.store.get_mut(coord) {
            *chunk.tiles_mut() = tiles;
        }
        self.store.get(coord)
    }

    /// Rebuild every loaded chunk's buffer from the current grid.
    pub fn refresh_loaded(&mut self) {
        let coords: Vec<ChunkCoord> = self.store.coords().collect();
        for coord in coords {
            let tiles = self.build_tiles(coord);
            if let Some(chunk) = self.store.get_mut(coord) {
                *chunk.tiles_mut() = tiles;
            }
        }
    }

    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    fn build_tiles(&mut self, coord: ChunkCoord) -> TileBuffer {
        let (min, _) = chunk_bounds(coord, self.chunk_width, self.chunk_height);
        let mut tiles = TileBuffer::new(self.chunk_width, self.chunk_height);
        for y in 0..self.chunk_height {
            for x in 0..self.chunk_width {
                let cell = min + IVec2::new(x as i32, y as i32);
                tiles.set(
                    x,
                    y,
                    resolve_display_tile(&mut self.grid, &self.table, cell),
                );
            }
        }
        tiles
    }

    fn refresh_display_cell(&mut self, cell: CellCoord) {
        let chunk_coord = cell_to_chunk(cell, self.chunk_width, self.chunk_height);
        if !self.store.contains(chunk_coord) {
            return;
        }
        let tile = resolve_display_tile(&mut self.grid, &self.table, cell);
        let local = cell_to_local(cell, self.chunk_width, self.chunk_height);
        if let Some(chunk) = self.store.get_mut(chunk_coord) {
            chunk.tiles_mut().set(local.x as u32, local.y as u32, tile);
        }
    }
}

impl ChunkLayer for TerrainLayer {
    fn label(&self) -> &'static str {
        "terrain"
    }

    fn create_chunk(&mut self, coord: ChunkCoord) -> Option<&Chunk> {
        if self.store.contains(coord) {
            return self.store.get(coord);
        }
        let (min, max) = chunk_bounds(coord, self.chunk_width, self.chunk_height);
        if !self.grid.has_authored_in(min, max) {
            // Nothing authored in these bounds; not an error.
            return None;
        }
        let tiles = self.build_tiles(coord);
        Some(self.store.insert(coord, tiles))
    }

    fn destroy_chunk(&mut self, coord: ChunkCoord) {
        self.store.remove(coord);
    }

    fn is_loaded(&self, coord: ChunkCoord) -> bool {
        self.store.contains(coord)
    }

    fn loaded_count(&self) -> usize {
        self.store.len()
    }
}

/// Procedurally generated starfield layer. Always creates, never skips.
pub struct StarfieldLayer {
    generator: StarfieldGenerator,
    store: ChunkStore,
}

impl StarfieldLayer {
    pub fn new(generator: StarfieldGenerator) -> Self {
        Self {
            generator,
            store: ChunkStore::new(),
        }
    }

    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    /// Destroy every loaded starfield chunk.
    pub fn clear_all(&mut self) {
        self.store.clear();
    }
}

impl ChunkLayer for StarfieldLayer {
    fn label(&self) -> &'static str {
        "starfield"
    }

    fn create_chunk(&mut self, coord: ChunkCoord) -> Option<&Chunk> {
        if self.store.contains(coord) {
            return self.store.get(coord);
        }
        let tiles = self.generator.generate(coord);
        Some(self.store.insert(coord, tiles))
    }

    fn destroy_chunk(&mut self, coord: ChunkCoord) {
        self.store.remove(coord);
    }

    fn is_loaded(&self, coord: ChunkCoord) -> bool {
        self.store.contains(coord)
    }

    fn loaded_count(&self) -> usize {
        self.store.len()
    }
}
