use lodestar_core::constants::*;
use lodestar_core::error::ConfigError;
use lodestar_core::types::TileId;
use serde::{Deserialize, Serialize};

/// World configuration, fixed at setup. RON-loadable; missing fields fall
/// back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Cell dimensions per chunk, equal across both layers.
    pub chunk_width: u32,
    pub chunk_height: u32,
    /// Static horizontal chunk load range, inclusive.
    pub min_chunk_x: i32,
    pub max_chunk_x: i32,
    /// Margin rows loaded beyond the visible screen.
    pub chunks_above_screen: i32,
    pub chunks_below_screen: i32,
    /// Fraction of starfield cells that become stars, in [0, 1].
    pub star_density: f32,
    /// Base seed for starfield generation.
    pub seed: i32,
    /// Star tiles drawn from uniformly when a cell becomes a star.
    pub star_palette: Vec<TileId>,
    /// Tile written to non-star cells; `None` leaves them unset.
    pub star_empty_tile: Option<TileId>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_width: DEFAULT_CHUNK_WIDTH,
            chunk_height: DEFAULT_CHUNK_HEIGHT,
            min_chunk_x: DEFAULT_MIN_CHUNK_X,
            max_chunk_x: DEFAULT_MAX_CHUNK_X,
            chunks_above_screen: DEFAULT_CHUNKS_ABOVE_SCREEN,
            chunks_below_screen: DEFAULT_CHUNKS_BELOW_SCREEN,
            star_density: DEFAULT_STAR_DENSITY,
            seed: DEFAULT_SEED,
            star_palette: (0..STAR_TILESET_LEN).map(TileId).collect(),
            star_empty_tile: None,
        }
    }
}

impl WorldConfig {
    /// Check the configuration, collecting every violation.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if self.chunk_width == 0 || self.chunk_height == 0 {
            errors.push(ConfigError::ZeroChunkDims {
                width: self.chunk_width,
                height: self.chunk_height,
            });
        }
        if self.min_chunk_x > self.max_chunk_x {
            errors.push(ConfigError::InvertedChunkRange {
                min: self.min_chunk_x,
                max: self.max_chunk_x,
            });
        }
        if !(0.0..=1.0).contains(&self.star_density) {
            errors.push(ConfigError::StarDensityOutOfRange(self.star_density));
        }
        if self.star_palette.is_empty() {
            errors.push(ConfigError::EmptyStarPalette);
        }
        for &tile in &self.star_palette {
            if tile.0 >= STAR_TILESET_LEN {
                errors.push(ConfigError::StarTileOutOfRange {
                    tile: tile.0,
                    len: STAR_TILESET_LEN,
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_chunk_dims_rejected() {
        let config = WorldConfig {
            chunk_width: 0,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::ZeroChunkDims { .. })));
    }

    #[test]
    fn test_density_out_of_range_rejected() {
        let config = WorldConfig {
            star_density: 1.5,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::StarDensityOutOfRange(_))));
    }

    #[test]
    fn test_empty_palette_rejected() {
        let config = WorldConfig {
            star_palette: Vec::new(),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::EmptyStarPalette)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = WorldConfig {
            min_chunk_x: 5,
            max_chunk_x: -5,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvertedChunkRange { .. })));
    }

    #[test]
    fn test_partial_ron_config() {
        let ron = r#"(star_density: 0.2, seed: 42)"#;
        let options = ron::Options::default();
        let config: WorldConfig = options.from_str(ron).expect("partial config parses");
        assert_eq!(config.star_density, 0.2);
        assert_eq!(config.seed, 42);
        assert_eq!(config.chunk_width, DEFAULT_CHUNK_WIDTH);
    }
}
