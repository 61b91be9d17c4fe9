//! Engine configuration.
//!
//! `EngineConfig` holds the few rule constants the engine is parameterized
//! over. The defaults reproduce the standard rules exactly, so most callers
//! use [`EngineConfig::default()`] and never touch this module.

use crate::error::VitalsError;
use serde::{Deserialize, Serialize};

/// Rule constants for the HP engine.
///
/// Every field has a default, so a partial JSON document only overrides
/// what it names.
///
/// # Examples
///
/// ```rust
/// use vitals::EngineConfig;
///
/// let config = EngineConfig::from_json_str(r#"{ "floorCurrentAtZero": true }"#).unwrap();
/// assert!(config.floor_current_at_zero);
/// assert_eq!(config.hit_point_ability, "constitution");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Modifier category (`affectedObject`) that addresses ability scores.
    pub ability_category: String,

    /// Ability (`affectedValue`) whose modifier grants HP per level.
    pub hit_point_ability: String,

    /// Stop damage from pushing current HP below zero.
    ///
    /// Off by default: negative current HP is kept as-is.
    pub floor_current_at_zero: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ability_category: String::from("stats"),
            hit_point_ability: String::from("constitution"),
            floor_current_at_zero: false,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self, VitalsError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.ability_category, "stats");
        assert_eq!(config.hit_point_ability, "constitution");
        assert!(!config.floor_current_at_zero);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = EngineConfig::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, VitalsError::Json(_)));
    }
}
