use lodestar_core::constants::TERRAIN_TILESET_LEN;
use lodestar_core::rule::RuleSet;
use lodestar_core::types::Terrain;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Rule '{name}' uses Empty as a corner; empty cells are substituted before lookup")]
    EmptyCorner { name: String },

    #[error("Rules '{a}' and '{b}' map the same corner combination")]
    DuplicateCombination { a: String, b: String },

    #[error("No rule for corner combination {corners:?}")]
    MissingCombination { corners: [Terrain; 4] },

    #[error("Rule '{name}' tile {tile} outside tileset of {len} tiles")]
    TileOutOfRange { name: String, tile: u16, len: u16 },
}

/// Pack a corner tuple into its table index. Corners must be non-Empty.
pub(crate) fn combination_index(corners: [Terrain; 4]) -> Option<usize> {
    let mut index = 0usize;
    for corner in corners {
        let bit = match corner {
            Terrain::Grass => 0,
            Terrain::Dirt => 1,
            Terrain::Empty => return None,
        };
        index = (index << 1) | bit;
    }
    Some(index)
}

/// Corner tuple for a table index, inverse of `combination_index`.
pub(crate) fn index_combination(index: usize) -> [Terrain; 4] {
    let corner = |bit: usize| {
        if index >> bit & 1 == 1 {
            Terrain::Dirt
        } else {
            Terrain::Grass
        }
    };
    [corner(3), corner(2), corner(1), corner(0)]
}

/// Validate an autotile rule set: no Empty corners, no duplicate or missing
/// combinations (all 16 must be covered), tiles within the tileset.
pub fn validate_rules(rules: &RuleSet) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut owners: [Option<&str>; 16] = [None; 16];

    for rule in &rules.rules {
        if rule.tile >= TERRAIN_TILESET_LEN {
            errors.push(ValidationError::TileOutOfRange {
                name: rule.name.clone(),
                tile: rule.tile,
                len: TERRAIN_TILESET_LEN,
            });
        }

        match combination_index(rule.corners()) {
            Some(index) => match owners[index] {
                Some(first) => errors.push(ValidationError::DuplicateCombination {
                    a: first.to_string(),
                    b: rule.name.clone(),
                }),
                None => owners[index] = Some(rule.name.as_str()),
            },
            None => errors.push(ValidationError::EmptyCorner {
                name: rule.name.clone(),
            }),
        }
    }

    for (index, owner) in owners.iter().enumerate() {
        if owner.is_none() {
            errors.push(ValidationError::MissingCombination {
                corners: index_combination(index),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
