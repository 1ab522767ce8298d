use lodestar_core::rule::{AutotileRule, RuleSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse autotile rules RON: {0}")]
    RuleParseError(String),
}

/// Parse a single autotile rules RON string into a RuleSet.
pub fn load_rules_from_str(ron_str: &str) -> Result<RuleSet, LoadError> {
    let options = ron::Options::default();
    let rules: Vec<AutotileRule> = options
        .from_str(ron_str)
        .map_err(|e| LoadError::RuleParseError(e.to_string()))?;
    Ok(RuleSet { rules })
}
