//! Character state module.
//!
//! `CharacterState` is the authoritative snapshot of one character: vitals,
//! classes, ability scores, inventory and defenses. It is what the loader
//! produces, what the engine mutates and what the store persists.

use crate::config::EngineConfig;
use crate::damage_type::DamageType;
use crate::defense::Relation;
use crate::error::VitalsError;
use crate::modifier;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A class the character has levels in.
///
/// Informational only; the engine never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterClass {
    pub name: String,
    pub hit_dice_value: u32,
    pub class_level: u32,
}

/// A declarative stat modifier carried by an item.
///
/// `affected_object` names a category (e.g. `"stats"`), `affected_value` a
/// specific attribute in it (e.g. `"constitution"`) and `value` the
/// magnitude. Only some shapes have an engine effect, see
/// [`modifier::compile_modifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    pub affected_object: String,
    pub affected_value: String,
    pub value: i64,
}

impl Modifier {
    pub fn new(
        affected_object: impl Into<String>,
        affected_value: impl Into<String>,
        value: i64,
    ) -> Self {
        Self {
            affected_object: affected_object.into(),
            affected_value: affected_value.into(),
            value,
        }
    }
}

/// An inventory item, exclusively owned by its character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub modifier: Modifier,
    /// Older snapshots store this as `0`/`1`; both forms are accepted.
    #[serde(default, deserialize_with = "bool_or_flag")]
    pub equipped: bool,
}

impl Item {
    /// Create an unequipped item.
    pub fn new(name: impl Into<String>, modifier: Modifier) -> Self {
        Self {
            name: name.into(),
            modifier,
            equipped: false,
        }
    }
}

fn bool_or_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

/// A defensive relationship to one damage type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defense {
    #[serde(rename = "type")]
    pub damage_type: DamageType,
    #[serde(rename = "defense")]
    pub relation: Relation,
}

impl Defense {
    pub fn new(damage_type: impl Into<DamageType>, relation: Relation) -> Self {
        Self {
            damage_type: damage_type.into(),
            relation,
        }
    }
}

/// The stored source record a character is built from.
///
/// This is the shape of a character file before a session starts: it has
/// a single `hitPoints` value and no session fields. Unknown fields (such
/// as a stale `tempHitPoints`) are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    pub name: String,
    pub level: u32,
    pub hit_points: i64,
    #[serde(default)]
    pub classes: Vec<CharacterClass>,
    #[serde(default)]
    pub stats: BTreeMap<String, i64>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub defenses: Vec<Defense>,
}

/// Snapshot of one character's vitals, equipment and defenses.
///
/// # Examples
///
/// ```rust
/// use vitals::{CharacterState, Item, Modifier, Relation};
///
/// let state = CharacterState::new("Briv", 5, 25)
///     .with_stat("constitution", 20)
///     .with_item(Item::new("Ioun Stone of Fortitude", Modifier::new("stats", "constitution", 2)))
///     .with_defense("fire", Relation::Immunity);
///
/// assert_eq!(state.current_hit_points, 25);
/// assert_eq!(state.modified_hit_points, 25);
/// assert_eq!(state.temp_hit_points, 0);
/// assert!(!state.items[0].equipped);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterState {
    pub name: String,
    pub level: u32,
    /// Maximum HP before equipment.
    #[serde(alias = "hitPoints")]
    pub base_hit_points: i64,
    /// Maximum HP after equipment.
    pub modified_hit_points: i64,
    pub current_hit_points: i64,
    pub temp_hit_points: i64,
    #[serde(default)]
    pub classes: Vec<CharacterClass>,
    #[serde(default)]
    pub stats: BTreeMap<String, i64>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub defenses: Vec<Defense>,
}

impl CharacterState {
    /// Create a fresh character at full health with no inventory.
    pub fn new(name: impl Into<String>, level: u32, base_hit_points: i64) -> Self {
        Self {
            name: name.into(),
            level,
            base_hit_points,
            modified_hit_points: base_hit_points,
            current_hit_points: base_hit_points,
            temp_hit_points: 0,
            classes: Vec::new(),
            stats: BTreeMap::new(),
            items: Vec::new(),
            defenses: Vec::new(),
        }
    }

    /// Add an ability score.
    pub fn with_stat(mut self, name: impl Into<String>, score: i64) -> Self {
        self.stats.insert(name.into(), score);
        self
    }

    /// Add a class entry.
    pub fn with_class(mut self, name: impl Into<String>, hit_dice_value: u32, class_level: u32) -> Self {
        self.classes.push(CharacterClass {
            name: name.into(),
            hit_dice_value,
            class_level,
        });
        self
    }

    /// Add an item to the end of the inventory, unequipped.
    pub fn with_item(mut self, mut item: Item) -> Self {
        item.equipped = false;
        self.items.push(item);
        self
    }

    /// Add a defense entry. Earlier entries for the same type win.
    pub fn with_defense(mut self, damage_type: impl Into<DamageType>, relation: Relation) -> Self {
        self.defenses.push(Defense::new(damage_type, relation));
        self
    }

    /// Build the session state for a stored record.
    ///
    /// Fails closed: a record with `level < 1` or negative `hitPoints`
    /// produces an error and no state. On success the character is at full
    /// health, has no temporary HP and nothing equipped.
    pub fn from_record(source_id: &str, record: CharacterRecord) -> Result<Self, VitalsError> {
        if record.level < 1 {
            return Err(VitalsError::load(source_id, "level must be at least 1"));
        }
        if record.hit_points < 0 {
            return Err(VitalsError::load(source_id, "hitPoints must not be negative"));
        }
        if record.name.trim().is_empty() {
            return Err(VitalsError::load(source_id, "name must not be empty"));
        }

        let mut items = record.items;
        for item in &mut items {
            item.equipped = false;
        }

        Ok(Self {
            name: record.name,
            level: record.level,
            base_hit_points: record.hit_points,
            modified_hit_points: record.hit_points,
            current_hit_points: record.hit_points,
            temp_hit_points: 0,
            classes: record.classes,
            stats: record.stats,
            items,
            defenses: record.defenses,
        })
    }

    /// Parse a stored record from JSON and build the session state from it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vitals::CharacterState;
    ///
    /// let json = r#"{
    ///     "name": "Briv",
    ///     "level": 5,
    ///     "hitPoints": 25,
    ///     "defenses": [{ "type": "fire", "defense": "immunity" }]
    /// }"#;
    /// let state = CharacterState::from_json_str("briv.json", json).unwrap();
    /// assert_eq!(state.current_hit_points, 25);
    /// ```
    pub fn from_json_str(source_id: &str, json: &str) -> Result<Self, VitalsError> {
        let record: CharacterRecord = serde_json::from_str(json)?;
        Self::from_record(source_id, record)
    }

    /// Serialize this snapshot as pretty JSON.
    pub fn to_json_string(&self) -> Result<String, VitalsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the snapshot invariants.
    ///
    /// Current HP may legitimately be negative after damage, so only the
    /// upper bound is checked for it.
    pub fn check_invariants(&self, config: &EngineConfig) -> Result<(), VitalsError> {
        if self.level < 1 {
            return Err(VitalsError::Invariant(format!(
                "level is {}, expected at least 1",
                self.level
            )));
        }
        if self.base_hit_points < 0 {
            return Err(VitalsError::Invariant(format!(
                "baseHitPoints is {}, expected at least 0",
                self.base_hit_points
            )));
        }
        if self.temp_hit_points < 0 {
            return Err(VitalsError::Invariant(format!(
                "tempHitPoints is {}, expected at least 0",
                self.temp_hit_points
            )));
        }

        let equipped_bonus: i64 = self
            .items
            .iter()
            .filter(|item| item.equipped)
            .map(|item| modifier::hp_delta(item, self, config))
            .fold(0i64, |acc, delta| acc.saturating_add(delta));
        let expected = self.base_hit_points.saturating_add(equipped_bonus);
        if self.modified_hit_points != expected {
            return Err(VitalsError::Invariant(format!(
                "modifiedHitPoints is {}, expected {} (base {} + equipment {})",
                self.modified_hit_points, expected, self.base_hit_points, equipped_bonus
            )));
        }

        if self.current_hit_points > self.modified_hit_points {
            return Err(VitalsError::Invariant(format!(
                "currentHitPoints {} exceeds modifiedHitPoints {}",
                self.current_hit_points, self.modified_hit_points
            )));
        }

        Ok(())
    }
}
