//! Damage types.
//!
//! A damage type is whatever name an action or a defense entry carries:
//! `"fire"`, `"slashing"`, or something homebrewed. The set is open, so a
//! defense against `"sonic"` works the same as one against `"thunder"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Damage types commonly offered by front ends as quick-pick buttons.
///
/// The engine does not consult this list; defenses may name any type.
pub const COMMON_DAMAGE_TYPES: [&str; 13] = [
    "bludgeoning",
    "piercing",
    "slashing",
    "fire",
    "cold",
    "acid",
    "thunder",
    "lightning",
    "poison",
    "radiant",
    "necrotic",
    "psychic",
    "force",
];

/// The kind of damage a hit deals.
///
/// Matching against a character's defenses is exact, so `"Fire"` finds no
/// fire immunity. Stored and sent over the wire as a bare string.
///
/// # Examples
///
/// ```rust
/// use vitals::DamageType;
///
/// let fire = DamageType::new("fire");
/// assert_eq!(fire, DamageType::from(String::from("fire")));
/// assert_ne!(fire, DamageType::new("Fire"));
/// assert_eq!(fire.to_string(), "fire");
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DamageType(Arc<str>);

impl DamageType {
    pub fn new(name: &str) -> Self {
        Self(name.into())
    }

    /// The name as written by the action or defense entry.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DamageType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for DamageType {
    fn from(name: String) -> Self {
        Self(name.into())
    }
}

impl From<DamageType> for String {
    fn from(damage_type: DamageType) -> Self {
        damage_type.0.to_string()
    }
}

impl AsRef<str> for DamageType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DamageType {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
