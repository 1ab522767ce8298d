//! Bundled default autotile rules, embedded from the workspace data tree.

use crate::loader::{self, LoadError};
use crate::table::AutotileTable;
use crate::validator::ValidationError;
use lodestar_core::rule::RuleSet;
use thiserror::Error;

/// RON source of the default 16-entry rule table.
pub const DEFAULT_RULES_RON: &str = include_str!("../../../data/tiles/autotiles.ron");

#[derive(Debug, Error)]
pub enum DefaultsError {
    #[error("bundled autotile rules failed to parse: {0}")]
    Load(#[from] LoadError),
    #[error("bundled autotile rules failed validation: {0:?}")]
    Validate(Vec<ValidationError>),
}

/// Parse the bundled rule set.
pub fn default_rules() -> Result<RuleSet, DefaultsError> {
    Ok(loader::load_rules_from_str(DEFAULT_RULES_RON)?)
}

/// Compile the bundled rule set into a lookup table.
pub fn default_table() -> Result<AutotileTable, DefaultsError> {
    let rules = default_rules()?;
    AutotileTable::from_rules(&rules).map_err(DefaultsError::Validate)
}
