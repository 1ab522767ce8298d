use lodestar_core::types::{CellCoord, ChunkCoord, TileId};

/// Row-major display surface for one chunk. `None` cells draw nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBuffer {
    width: u32,
    height: u32,
    tiles: Vec<Option<TileId>>,
}

impl TileBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![None; (width * height) as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y * self.width + x) as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Option<TileId> {
        self.tiles[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, tile: Option<TileId>) {
        let index = self.index(x, y);
        self.tiles[index] = tile;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells holding a tile.
    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }

    /// Whether no cell holds a tile.
    pub fn is_blank(&self) -> bool {
        self.tiles.iter().all(|t| t.is_none())
    }
}

/// One streamed block of display cells, owned by its store entry.
#[derive(Debug, Clone)]
pub struct Chunk {
    coord: ChunkCoord,
    /// Stable handle allocated by the owning store; reused after destroy.
    slot: u32,
    tiles: TileBuffer,
}

impl Chunk {
    pub fn new(coord: ChunkCoord, slot: u32, tiles: TileBuffer) -> Self {
        Self { coord, slot, tiles }
    }

    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }

    pub fn tiles(&self) -> &TileBuffer {
        &self.tiles
    }

    pub fn tiles_mut(&mut self) -> &mut TileBuffer {
        &mut self.tiles
    }

    /// Cell-space origin of this chunk's buffer.
    pub fn origin(&self) -> CellCoord {
        CellCoord::new(
            self.coord.x * self.tiles.width() as i32,
            self.coord.y * self.tiles.height() as i32,
        )
    }
}
