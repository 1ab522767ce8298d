use crate::validator::{self, ValidationError};
use lodestar_core::rule::RuleSet;
use lodestar_core::types::{Terrain, TileId};

/// Immutable 16-slot lookup compiled from a validated rule set.
///
/// Keys are the corner tuples over {Grass, Dirt}; `Empty` never reaches the
/// table (all-empty blocks bypass it, remaining empties are substituted with
/// Dirt by the resolver). Lookup is total: an unmapped combination yields
/// "no tile" rather than failing, though validation proves full coverage.
#[derive(Debug, Clone)]
pub struct AutotileTable {
    tiles: [Option<TileId>; 16],
}

impl AutotileTable {
    /// Compile a rule set, rejecting it unless every combination is covered
    /// exactly once with in-range tiles.
    pub fn from_rules(rules: &RuleSet) -> Result<Self, Vec<ValidationError>> {
        validator::validate_rules(rules)?;

        let mut tiles = [None; 16];
        for rule in &rules.rules {
            // Validation guarantees each corner tuple is indexable and unique.
            if let Some(index) = validator::combination_index(rule.corners()) {
                tiles[index] = Some(TileId(rule.tile));
            }
        }
        Ok(Self { tiles })
    }

    /// Display tile for a corner tuple, ordered (top-left, top-right,
    /// bottom-left, bottom-right). `None` for an unmapped combination or
    /// any `Empty` corner.
    pub fn lookup(&self, tl: Terrain, tr: Terrain, bl: Terrain, br: Terrain) -> Option<TileId> {
        let index = validator::combination_index([tl, tr, bl, br])?;
        self.tiles[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use lodestar_core::rule::AutotileRule;
    use lodestar_core::types::Terrain::{Dirt, Grass};

    #[test]
    fn test_fill_combinations() {
        let table = defaults::default_table().expect("bundled table compiles");
        assert_eq!(table.lookup(Grass, Grass, Grass, Grass), Some(TileId(6)));
        assert_eq!(table.lookup(Dirt, Dirt, Dirt, Dirt), Some(TileId(12)));
    }

    #[test]
    fn test_all_sixteen_combinations_mapped() {
        let table = defaults::default_table().expect("bundled table compiles");
        let kinds = [Grass, Dirt];
        let mut seen = std::collections::HashSet::new();
        for tl in kinds {
            for tr in kinds {
                for bl in kinds {
                    for br in kinds {
                        let tile = table
                            .lookup(tl, tr, bl, br)
                            .expect("every combination has a tile");
                        seen.insert(tile);
                    }
                }
            }
        }
        // The default tileset assigns a distinct tile per combination.
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_corner_and_edge_tiles() {
        let table = defaults::default_table().expect("bundled table compiles");
        // Grass poking into the top-right corner of a dirt block.
        assert_eq!(table.lookup(Dirt, Grass, Dirt, Dirt), Some(TileId(8)));
        // Vertical grass/dirt edges.
        assert_eq!(table.lookup(Dirt, Grass, Dirt, Grass), Some(TileId(1)));
        assert_eq!(table.lookup(Grass, Dirt, Grass, Dirt), Some(TileId(11)));
        // Diagonal saddles.
        assert_eq!(table.lookup(Dirt, Grass, Grass, Dirt), Some(TileId(14)));
        assert_eq!(table.lookup(Grass, Dirt, Dirt, Grass), Some(TileId(4)));
    }

    #[test]
    fn test_empty_corner_lookup_is_none() {
        let table = defaults::default_table().expect("bundled table compiles");
        assert_eq!(table.lookup(Terrain::Empty, Grass, Grass, Grass), None);
    }

    #[test]
    fn test_invalid_rules_rejected() {
        let set = RuleSet {
            rules: vec![AutotileRule {
                name: "only_one".into(),
                top_left: Grass,
                top_right: Grass,
                bottom_left: Grass,
                bottom_right: Grass,
                tile: 6,
            }],
        };
        assert!(AutotileTable::from_rules(&set).is_err());
    }
}
