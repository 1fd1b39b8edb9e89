//! Catalog configuration
//!
//! The only tunables are the string bounds enforced when entities are
//! created or renamed. Defaults match the editorial rules: magazine names
//! of 2 to 16 characters and article titles of 5 to 50 characters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Input was not valid JSON for a [`CatalogConfig`]
    #[error("Malformed catalog config: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A bound pair cannot be satisfied by any string
    #[error("Invalid bounds for {field}: min {min} > max {max}")]
    InvertedBounds {
        field: &'static str,
        min: usize,
        max: usize,
    },

    /// Lower bound of zero would admit empty strings
    #[error("Invalid bounds for {field}: min must be at least 1")]
    ZeroMinimum { field: &'static str },
}

/// Length bounds, counted in characters, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    pub magazine_name_min: usize,
    pub magazine_name_max: usize,
    pub title_min: usize,
    pub title_max: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            magazine_name_min: 2,
            magazine_name_max: 16,
            title_min: 5,
            title_max: 50,
        }
    }
}

impl ValidationRules {
    /// Reject bound pairs that no string could satisfy
    pub fn check(&self) -> Result<(), ConfigError> {
        check_bounds("magazine_name", self.magazine_name_min, self.magazine_name_max)?;
        check_bounds("title", self.title_min, self.title_max)
    }
}

fn check_bounds(field: &'static str, min: usize, max: usize) -> Result<(), ConfigError> {
    if min == 0 {
        return Err(ConfigError::ZeroMinimum { field });
    }
    if min > max {
        return Err(ConfigError::InvertedBounds { field, min, max });
    }
    Ok(())
}

/// Catalog configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Bounds applied by every constructor and setter
    pub rules: ValidationRules,
}

impl CatalogConfig {
    /// Parse a JSON document. Missing fields fall back to defaults.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = serde_json::from_str(input)?;
        config.rules.check()?;
        Ok(config)
    }
}
