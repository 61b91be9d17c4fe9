//! Item modifier module.
//!
//! Item modifiers are declarative data. Before they are evaluated they are
//! compiled into a [`CompiledModifier`]: all string matching happens during
//! compilation, evaluation is plain arithmetic.
//!
//! Only one shape currently has an engine effect: a modifier on the
//! configured ability (constitution by default) grants hit points per
//! character level. Every other shape compiles to
//! [`CompiledModifier::Inert`] and contributes nothing.

use crate::character::{CharacterState, Item, Modifier};
use crate::config::EngineConfig;

/// A modifier with its effect already decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompiledModifier {
    /// Grants `per_level` hit points for every character level.
    HitPointsPerLevel { per_level: i64 },
    /// Valid data with no effect on hit points.
    Inert,
}

impl CompiledModifier {
    /// Hit point change for a character of the given level.
    pub fn hp_delta(self, level: u32) -> i64 {
        match self {
            CompiledModifier::HitPointsPerLevel { per_level } => {
                i64::from(level).saturating_mul(per_level)
            }
            CompiledModifier::Inert => 0,
        }
    }
}

/// Compile a modifier against the configured rules.
///
/// An ability modifier of `value` grants `max(floor(value / 2), 0)` HP per
/// level. Negative values never reduce hit points.
///
/// # Examples
///
/// ```rust
/// use vitals::{EngineConfig, Modifier};
/// use vitals::modifier::{compile_modifier, CompiledModifier};
///
/// let config = EngineConfig::default();
///
/// let con = compile_modifier(&Modifier::new("stats", "constitution", 5), &config);
/// assert_eq!(con, CompiledModifier::HitPointsPerLevel { per_level: 2 });
///
/// let str_mod = compile_modifier(&Modifier::new("stats", "strength", 4), &config);
/// assert_eq!(str_mod, CompiledModifier::Inert);
/// ```
pub fn compile_modifier(modifier: &Modifier, config: &EngineConfig) -> CompiledModifier {
    if modifier.affected_object == config.ability_category
        && modifier.affected_value == config.hit_point_ability
    {
        CompiledModifier::HitPointsPerLevel {
            per_level: modifier.value.div_euclid(2).max(0),
        }
    } else {
        CompiledModifier::Inert
    }
}

/// Hit point change `item` causes for `state` when equipped.
///
/// This does not look at whether the item is currently equipped.
///
/// # Examples
///
/// ```rust
/// use vitals::{CharacterState, EngineConfig, Item, Modifier};
/// use vitals::modifier::hp_delta;
///
/// let state = CharacterState::new("Briv", 3, 20);
/// let belt = Item::new("Belt", Modifier::new("stats", "constitution", 4));
/// assert_eq!(hp_delta(&belt, &state, &EngineConfig::default()), 6);
/// ```
pub fn hp_delta(item: &Item, state: &CharacterState, config: &EngineConfig) -> i64 {
    compile_modifier(&item.modifier, config).hp_delta(state.level)
}
