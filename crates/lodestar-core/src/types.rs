use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Cell coordinate in unbounded world-cell space. +x right, +y down;
/// "top" in a 2x2 corner block is the row with the smaller y.
pub type CellCoord = IVec2;

/// Chunk coordinate in chunk-space (each unit = one chunk of cells).
pub type ChunkCoord = IVec2;

/// Authored terrain state at one placeholder cell.
///
/// Cells absent from the sparse authoring grid are implicitly `Empty`.
/// `Grass` and `Dirt` are the two paintable kinds; the display tiles that
/// blend between them come from the autotile rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Terrain {
    #[default]
    Empty,
    Grass,
    Dirt,
}

impl Terrain {
    /// Whether this cell carries authored content.
    pub fn is_authored(self) -> bool {
        self != Terrain::Empty
    }
}

/// Newtype for display tile identifiers, indexing a fixed tileset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TileId(pub u16);
