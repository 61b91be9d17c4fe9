//! Character loaders.
//!
//! A loader turns a source identifier into a fresh [`CharacterState`]. It
//! fails closed: unreadable or malformed sources are reported to the caller
//! and never produce a partial or empty character.

use crate::character::CharacterState;
use crate::error::VitalsError;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use tracing::info;

/// Trait for anything that can build a character from a source identifier.
pub trait CharacterLoader {
    /// Load a fresh character: full health, no temporary HP, nothing
    /// equipped.
    fn load(&self, source_id: &str) -> Result<CharacterState, VitalsError>;
}

/// Loads character records from JSON files under a root directory.
///
/// The source identifier is a file name relative to the root, e.g.
/// `"briv.json"`. Identifiers that try to leave the root are rejected.
/// A [`Session`](crate::Session) always asks for the lowercased key, so
/// record files it serves should have lowercase names.
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    root: PathBuf,
}

impl JsonFileLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, source_id: &str) -> Result<PathBuf, VitalsError> {
        let relative = Path::new(source_id);
        let stays_inside = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if source_id.is_empty() || !stays_inside {
            return Err(VitalsError::load(source_id, "source id must be a relative file name"));
        }
        Ok(self.root.join(relative))
    }
}

impl CharacterLoader for JsonFileLoader {
    fn load(&self, source_id: &str) -> Result<CharacterState, VitalsError> {
        let path = self.path_for(source_id)?;
        let content = std::fs::read_to_string(&path)?;
        let state = CharacterState::from_json_str(source_id, &content)?;
        info!(source = source_id, character = %state.name, "loaded character");
        Ok(state)
    }
}

/// Loads characters from JSON records held in memory.
///
/// Source ids are case-insensitive.
///
/// # Examples
///
/// ```rust
/// use vitals::loader::{CharacterLoader, StaticLoader};
///
/// let loader = StaticLoader::new()
///     .with_record("briv.json", r#"{ "name": "Briv", "level": 5, "hitPoints": 25 }"#);
///
/// assert_eq!(loader.load("briv.json").unwrap().name, "Briv");
/// assert_eq!(loader.load("BRIV.json").unwrap().name, "Briv");
/// assert!(loader.load("missing.json").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticLoader {
    records: HashMap<String, String>,
}

impl StaticLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, source_id: impl Into<String>, json: impl Into<String>) -> Self {
        self.records.insert(source_id.into().to_lowercase(), json.into());
        self
    }
}

impl CharacterLoader for StaticLoader {
    fn load(&self, source_id: &str) -> Result<CharacterState, VitalsError> {
        let json = self
            .records
            .get(&source_id.to_lowercase())
            .ok_or_else(|| VitalsError::load(source_id, "no such record"))?;
        CharacterState::from_json_str(source_id, json)
    }
}
