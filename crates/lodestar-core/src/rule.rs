use crate::types::Terrain;
use serde::{Deserialize, Serialize};

/// A single autotile rule loaded from RON data.
///
/// Maps one 2x2 corner combination of terrain markers, ordered
/// (top_left, top_right, bottom_left, bottom_right), to the display tile
/// drawn for that combination. `Empty` is not a valid corner here; empty
/// cells are substituted with `Dirt` before lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutotileRule {
    /// Human-readable name for debug display and validation messages.
    pub name: String,
    pub top_left: Terrain,
    pub top_right: Terrain,
    pub bottom_left: Terrain,
    pub bottom_right: Terrain,
    /// Index into the terrain display tileset.
    pub tile: u16,
}

impl AutotileRule {
    /// The corner tuple in lookup order.
    pub fn corners(&self) -> [Terrain; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }
}

/// Collection of autotile rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub rules: Vec<AutotileRule>,
}

impl RuleSet {
    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
