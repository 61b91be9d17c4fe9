//! Defense resolution module.
//!
//! A character's defenses are an ordered list of `(damage type, relation)`
//! pairs. Resolution is a first-match lookup; a type with no entry simply
//! resolves to [`Relation::None`].

use crate::character::CharacterState;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A character's defensive relationship to a damage type.
///
/// Stored as lowercase strings and parsed once at the boundary. An unknown
/// stored string is malformed data and fails deserialization.
///
/// # Examples
///
/// ```rust
/// use vitals::Relation;
///
/// assert_eq!(Relation::Immunity.apply(12), 0);
/// assert_eq!(Relation::Resistance.apply(7), 3);
/// assert_eq!(Relation::Vulnerability.apply(5), 10);
/// assert_eq!(Relation::None.apply(5), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Relation {
    /// Full damage.
    #[default]
    None,
    /// Half damage, rounded down.
    Resistance,
    /// No damage.
    Immunity,
    /// Double damage.
    Vulnerability,
}

impl Relation {
    /// Scale a non-negative damage amount by this relation.
    pub fn apply(self, amount: i64) -> i64 {
        match self {
            Relation::None => amount,
            Relation::Resistance => amount.div_euclid(2),
            Relation::Immunity => 0,
            Relation::Vulnerability => amount.saturating_mul(2),
        }
    }

    /// The stored name of this relation.
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::None => "none",
            Relation::Resistance => "resistance",
            Relation::Immunity => "immunity",
            Relation::Vulnerability => "vulnerability",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "" => Ok(Relation::None),
            "resistance" => Ok(Relation::Resistance),
            "immunity" => Ok(Relation::Immunity),
            "vulnerability" => Ok(Relation::Vulnerability),
            other => Err(format!("unknown defense relation: {other:?}")),
        }
    }
}

impl Serialize for Relation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Relation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Look up the relation `state` has to `damage_type`.
///
/// Matching is case-sensitive and the first matching entry wins.
///
/// # Examples
///
/// ```rust
/// use vitals::{CharacterState, Relation};
/// use vitals::defense::resolve;
///
/// let state = CharacterState::new("Briv", 5, 25)
///     .with_defense("fire", Relation::Resistance)
///     .with_defense("fire", Relation::Immunity);
///
/// assert_eq!(resolve(&state, "fire"), Relation::Resistance);
/// assert_eq!(resolve(&state, "Fire"), Relation::None);
/// assert_eq!(resolve(&state, "cold"), Relation::None);
/// ```
pub fn resolve(state: &CharacterState, damage_type: &str) -> Relation {
    state
        .defenses
        .iter()
        .find(|defense| defense.damage_type == *damage_type)
        .map(|defense| defense.relation)
        .unwrap_or(Relation::None)
}
