//! Single source of truth for shared constants. Default values mirror the
//! configuration the rest of the workspace (and the bench scenes) assume.

/// Number of tiles in the terrain display tileset. The autotile rule table
/// must cover every 2x2 corner combination with exactly one of these.
pub const TERRAIN_TILESET_LEN: u16 = 16;

/// Number of 2x2 corner combinations over {Grass, Dirt}.
pub const AUTOTILE_COMBINATIONS: usize = 16;

/// Number of tiles in the starfield tileset (star sizes/brightness tiers).
pub const STAR_TILESET_LEN: u16 = 4;

/// Seed spread constant for the chunk x coordinate (odd prime).
pub const SEED_SPREAD_X: i32 = 73_856_093;

/// Seed spread constant for the chunk y coordinate (odd prime).
pub const SEED_SPREAD_Y: i32 = 19_349_663;

/// Default chunk width in cells.
pub const DEFAULT_CHUNK_WIDTH: u32 = 16;

/// Default chunk height in cells.
pub const DEFAULT_CHUNK_HEIGHT: u32 = 16;

/// Default static horizontal chunk range.
pub const DEFAULT_MIN_CHUNK_X: i32 = -5;
pub const DEFAULT_MAX_CHUNK_X: i32 = 5;

/// Default margin rows loaded beyond the visible screen.
pub const DEFAULT_CHUNKS_ABOVE_SCREEN: i32 = 3;
pub const DEFAULT_CHUNKS_BELOW_SCREEN: i32 = 2;

/// Default fraction of starfield cells that become stars.
pub const DEFAULT_STAR_DENSITY: f32 = 0.05;

/// Default base seed for starfield generation.
pub const DEFAULT_SEED: i32 = 12345;
