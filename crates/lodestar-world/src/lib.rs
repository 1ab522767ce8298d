pub mod autotile;
pub mod chunk;
pub mod chunk_store;
pub mod config;
pub mod layer;
pub mod rng;
pub mod scheduler;
pub mod starfield;
pub mod terrain_grid;

use config::WorldConfig;
use layer::{ChunkLayer, StarfieldLayer, TerrainLayer};
use lodestar_core::error::ConfigError;
use lodestar_core::rule::RuleSet;
use lodestar_core::types::{CellCoord, ChunkCoord, Terrain};
use lodestar_rules::defaults::DefaultsError;
use lodestar_rules::validator::ValidationError;
use lodestar_rules::{defaults, AutotileTable};
use scheduler::{CameraRect, ChunkScheduler};
use starfield::StarfieldGenerator;
use thiserror::Error;

/// Setup failures, reported once when the world is built. No
/// partially-configured world exists; nothing here is a runtime error path.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid world configuration: {0:?}")]
    Config(Vec<ConfigError>),
    #[error("invalid autotile rules: {0:?}")]
    Rules(Vec<ValidationError>),
    #[error(transparent)]
    Defaults(#[from] DefaultsError),
}

/// Primary public struct for the lodestar-world crate.
///
/// Owns the two streamed layers and the scheduler that drives them, and is
/// the seam gameplay collaborators talk to: terrain authoring goes through
/// `set_terrain`, the camera collaborator calls `tick` once per update, and
/// movement/spawn glue asks `is_cell_occupied`.
pub struct World {
    terrain: TerrainLayer,
    starfield: StarfieldLayer,
    scheduler: ChunkScheduler,
}

impl World {
    /// Build a world with the bundled autotile rules.
    pub fn new(config: WorldConfig) -> Result<Self, SetupError> {
        let table = defaults::default_table()?;
        Self::with_table(config, table)
    }

    /// Build a world with a caller-supplied rule set.
    pub fn with_rules(config: WorldConfig, rules: &RuleSet) -> Result<Self, SetupError> {
        let table = AutotileTable::from_rules(rules).map_err(SetupError::Rules)?;
        Self::with_table(config, table)
    }

    fn with_table(config: WorldConfig, table: AutotileTable) -> Result<Self, SetupError> {
        config.validate().map_err(SetupError::Config)?;

        log::info!(
            "world setup: {}x{} chunks, columns [{}, {}], margins +{}/-{} rows, star density {}",
            config.chunk_width,
            config.chunk_height,
            config.min_chunk_x,
            config.max_chunk_x,
            config.chunks_above_screen,
            config.chunks_below_screen,
            config.star_density,
        );

        let terrain = TerrainLayer::new(table, config.chunk_width, config.chunk_height);
        let starfield = StarfieldLayer::new(StarfieldGenerator::new(
            config.seed,
            config.star_density,
            config.star_palette.clone(),
            config.star_empty_tile,
            config.chunk_width,
            config.chunk_height,
        ));
        let scheduler = ChunkScheduler::new(
            config.chunk_height,
            config.min_chunk_x,
            config.max_chunk_x,
            config.chunks_above_screen,
            config.chunks_below_screen,
        );

        Ok(Self {
            terrain,
            starfield,
            scheduler,
        })
    }

    /// Per-frame entry point: recompute the visible window from the camera
    /// and apply the chunk diff to both layers.
    pub fn tick(&mut self, camera: CameraRect) {
        let Self {
            terrain,
            starfield,
            scheduler,
        } = self;
        let mut layers: [&mut dyn ChunkLayer; 2] = [terrain, starfield];
        scheduler.tick(camera, &mut layers);
    }

    /// Authoring entry point: paint one placeholder cell. Loaded terrain
    /// chunks affected by the cell are updated in place.
    pub fn set_terrain(&mut self, cell: CellCoord, terrain: Terrain) {
        self.terrain.set(cell, terrain);
    }

    /// Invalidation entry point after bulk external terrain edits.
    pub fn clear_terrain_cache(&mut self) {
        self.terrain.clear_cache();
    }

    /// Whether a world cell resolves to a terrain display tile.
    pub fn is_cell_occupied(&mut self, cell: CellCoord) -> bool {
        self.terrain.is_cell_occupied(cell)
    }

    /// Rebuild one terrain chunk from the current grid (creating it if
    /// needed); pairs with `clear_terrain_cache` for eager chunk control.
    pub fn refresh_terrain_chunk(&mut self, coord: ChunkCoord) {
        self.terrain.refresh_chunk(coord);
    }

    /// Rebuild every loaded terrain chunk from the current grid.
    pub fn refresh_loaded_terrain(&mut self) {
        self.terrain.refresh_loaded();
    }

    /// Destroy all starfield chunks; they regenerate identically when the
    /// window next covers them.
    pub fn clear_starfield(&mut self) {
        self.starfield.clear_all();
    }

    pub fn terrain(&self) -> &TerrainLayer {
        &self.terrain
    }

    pub fn terrain_mut(&mut self) -> &mut TerrainLayer {
        &mut self.terrain
    }

    pub fn starfield(&self) -> &StarfieldLayer {
        &self.starfield
    }

    pub fn starfield_mut(&mut self) -> &mut StarfieldLayer {
        &mut self.starfield
    }

    pub fn scheduler(&self) -> &ChunkScheduler {
        &self.scheduler
    }

    /// (terrain, starfield) loaded chunk counts.
    pub fn loaded_counts(&self) -> (usize, usize) {
        (self.terrain.loaded_count(), self.starfield.loaded_count())
    }
}
