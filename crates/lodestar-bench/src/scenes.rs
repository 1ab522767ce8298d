use glam::IVec2;
use lodestar_core::types::Terrain;
use lodestar_world::config::WorldConfig;
use lodestar_world::World;

/// Configuration for a single benchmark scene.
pub struct SceneConfig {
    pub name: &'static str,
    pub config: WorldConfig,
    /// World units the camera advances per tick.
    pub scroll_per_tick: f32,
    /// Vertical spacing between authored terrain islands, in cells.
    pub island_spacing: i32,
    /// Width of each island, in cells.
    pub island_width: i32,
}

/// Return the standard suite of benchmark scenes.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "sparse-drift",
            config: WorldConfig::default(),
            scroll_per_tick: 2.0,
            island_spacing: 48,
            island_width: 10,
        },
        SceneConfig {
            name: "dense-islands",
            config: WorldConfig {
                star_density: 0.15,
                ..Default::default()
            },
            scroll_per_tick: 4.0,
            island_spacing: 20,
            island_width: 14,
        },
        SceneConfig {
            name: "wide-field",
            config: WorldConfig {
                min_chunk_x: -12,
                max_chunk_x: 12,
                star_density: 0.1,
                ..Default::default()
            },
            scroll_per_tick: 8.0,
            island_spacing: 32,
            island_width: 12,
        },
        SceneConfig {
            name: "fast-scroll",
            config: WorldConfig::default(),
            scroll_per_tick: 24.0,
            island_spacing: 40,
            island_width: 10,
        },
    ]
}

/// Paint the scene's terrain: a ladder of dirt islands with grass cores,
/// spanning the scrolled range, authored through the public API.
pub fn paint_scene(world: &mut World, scene: &SceneConfig, ticks: u32) {
    let scrolled_cells = (scene.scroll_per_tick * ticks as f32).ceil() as i32;
    let chunk_width = scene.config.chunk_width as i32;
    let span_x = (scene.config.max_chunk_x + 1) * chunk_width;

    let mut y = 0;
    let mut island = 0;
    while y < scrolled_cells + scrolled_cells / 4 {
        // Slide each island across the horizontal range.
        let center_x = (island * 7) % (span_x.max(1));
        let half = scene.island_width / 2;

        for dy in 0..scene.island_width / 2 {
            for dx in -half..=half {
                let cell = IVec2::new(center_x + dx, y + dy);
                let core = dx.abs() < half - 1 && dy > 0 && dy < scene.island_width / 2 - 1;
                let terrain = if core { Terrain::Grass } else { Terrain::Dirt };
                world.set_terrain(cell, terrain);
            }
        }

        y += scene.island_spacing;
        island += 1;
    }
}
