//! HP engine module.
//!
//! Provides the `Engine` type, the state-transition core. Given a character
//! and an action it produces the next character state in place and returns
//! an [`HpChange`] describing the transition.
//!
//! Every action first normalizes its amount to `max(floor(raw), 0)`. Then:
//!
//! ```text
//! tempHP   temp = max(temp, amount)
//! healing  current = min(current + amount, modified)
//! <type>   amount = relation(type).apply(amount)
//!          temp absorbs first, the rest comes off current
//! ```
//!
//! A zero amount is a no-op for every action. Damage is not clamped at
//! zero current HP unless [`EngineConfig::floor_current_at_zero`] is set.

use crate::action::{normalize_amount, HpAction};
use crate::character::CharacterState;
use crate::config::EngineConfig;
use crate::damage_type::DamageType;
use crate::defense::{self, Relation};
use crate::equipment::{self, EquipOutcome};
use crate::report::HpChange;
use tracing::{debug, trace};

/// The HP state-transition engine.
///
/// Stateless apart from its rule configuration; one engine can serve any
/// number of characters.
///
/// # Examples
///
/// ```rust
/// use vitals::{CharacterState, Engine, HpAction, Relation};
///
/// let engine = Engine::default();
/// let mut state = CharacterState::new("Briv", 5, 20).with_defense("fire", Relation::Vulnerability);
///
/// engine.apply(&mut state, &HpAction::TempHp, 5.0);
/// engine.apply(&mut state, &HpAction::damage("fire"), 4.0);
///
/// // 4 fire doubled to 8: 5 absorbed by temp, 3 taken from current.
/// assert_eq!(state.temp_hit_points, 0);
/// assert_eq!(state.current_hit_points, 17);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply a named action. Unknown names are damage types.
    pub fn apply_hp(&self, state: &mut CharacterState, action: &str, raw_amount: f64) -> HpChange {
        self.apply(state, &HpAction::parse(action), raw_amount)
    }

    /// Apply a parsed action.
    pub fn apply(&self, state: &mut CharacterState, action: &HpAction, raw_amount: f64) -> HpChange {
        let amount = normalize_amount(raw_amount);
        let change = HpChange::new(action, amount, state);

        let change = match action {
            HpAction::TempHp => self.grant_temp(state, change),
            HpAction::Healing => self.heal(state, change),
            HpAction::Damage(damage_type) => self.damage(state, damage_type, change),
        };

        if change.is_noop() {
            trace!(character = %state.name, action = %change.action, amount, "no-op");
        } else {
            debug!(
                character = %state.name,
                action = %change.action,
                amount,
                effective = change.effective,
                current = state.current_hit_points,
                temp = state.temp_hit_points,
                "applied hp action"
            );
        }
        change
    }

    fn grant_temp(&self, state: &mut CharacterState, change: HpChange) -> HpChange {
        // Temp HP never stacks; the larger pool wins.
        if change.amount == 0 || change.amount <= state.temp_hit_points {
            return change;
        }
        state.temp_hit_points = change.amount;
        change.applied(state)
    }

    fn heal(&self, state: &mut CharacterState, change: HpChange) -> HpChange {
        if change.amount == 0 {
            return change;
        }
        let healed = state
            .current_hit_points
            .saturating_add(change.amount)
            .min(state.modified_hit_points);
        if healed <= state.current_hit_points {
            return change;
        }
        state.current_hit_points = healed;
        change.applied(state)
    }

    fn damage(&self, state: &mut CharacterState, damage_type: &DamageType, mut change: HpChange) -> HpChange {
        change.relation = defense::resolve(state, damage_type.as_str());
        change.effective = change.relation.apply(change.amount);

        if change.effective <= 0 {
            if change.relation == Relation::Immunity && change.amount > 0 {
                debug!(character = %state.name, %damage_type, "immune");
            }
            return change;
        }

        if change.effective >= state.temp_hit_points {
            let excess = change.effective - state.temp_hit_points;
            change.absorbed_by_temp = state.temp_hit_points;
            state.temp_hit_points = 0;

            let before = state.current_hit_points;
            let mut current = before.saturating_sub(excess);
            if self.config.floor_current_at_zero {
                current = current.max(before.min(0));
            }
            // Only what current actually lost, after any floor.
            change.dealt_to_current = before.saturating_sub(current);
            state.current_hit_points = current;
        } else {
            change.absorbed_by_temp = change.effective;
            state.temp_hit_points -= change.effective;
        }

        change.applied(state)
    }

    /// Equip or unequip every item.
    pub fn equip(&self, state: &mut CharacterState, equip: bool) -> EquipOutcome {
        equipment::apply_equipment(state, equip, &self.config)
    }

    /// Relation `state` has to `damage_type`. Read-only.
    pub fn defense_of(&self, state: &CharacterState, damage_type: &str) -> Relation {
        defense::resolve(state, damage_type)
    }
}

/// Apply a named action with the default rules.
///
/// # Examples
///
/// ```rust
/// use vitals::{apply_hp, CharacterState};
///
/// let mut state = CharacterState::new("Briv", 5, 20);
/// state.current_hit_points = 10;
///
/// apply_hp(&mut state, "healing", 2.9);
/// assert_eq!(state.current_hit_points, 12);
///
/// apply_hp(&mut state, "healing", 100.0);
/// assert_eq!(state.current_hit_points, 20);
/// ```
pub fn apply_hp(state: &mut CharacterState, action: &str, raw_amount: f64) -> HpChange {
    Engine::default().apply_hp(state, action, raw_amount)
}

/// Equip or unequip every item with the default rules.
pub fn equip(state: &mut CharacterState, equip: bool) -> EquipOutcome {
    Engine::default().equip(state, equip)
}

/// Relation `state` has to `damage_type`.
pub fn defense_of(state: &CharacterState, damage_type: &str) -> Relation {
    defense::resolve(state, damage_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Outcome;

    fn briv() -> CharacterState {
        CharacterState::new("Briv", 5, 20)
            .with_defense("fire", Relation::Immunity)
            .with_defense("slashing", Relation::Resistance)
            .with_defense("cold", Relation::Vulnerability)
    }

    #[test]
    fn test_temp_hp_keeps_larger() {
        let mut state = briv();
        assert_eq!(apply_hp(&mut state, "tempHP", 10.0).outcome, Outcome::Applied);
        assert_eq!(apply_hp(&mut state, "tempHP", 4.0).outcome, Outcome::NoOp);
        assert_eq!(state.temp_hit_points, 10);
        apply_hp(&mut state, "tempHP", 12.0);
        assert_eq!(state.temp_hit_points, 12);
    }

    #[test]
    fn test_temp_hp_zero_is_noop() {
        let mut state = briv();
        assert!(apply_hp(&mut state, "tempHP", 0.0).is_noop());
        assert!(apply_hp(&mut state, "tempHP", -3.0).is_noop());
        assert_eq!(state.temp_hit_points, 0);
    }

    #[test]
    fn test_healing_at_full_is_noop() {
        let mut state = briv();
        assert!(apply_hp(&mut state, "healing", 5.0).is_noop());
        assert_eq!(state.current_hit_points, 20);
    }

    #[test]
    fn test_healing_never_reduces_overfull_current() {
        let mut state = briv();
        state.current_hit_points = 25;
        assert!(apply_hp(&mut state, "healing", 3.0).is_noop());
        assert_eq!(state.current_hit_points, 25);
    }

    #[test]
    fn test_immunity_leaves_state_untouched() {
        let mut state = briv();
        state.temp_hit_points = 3;
        let before = state.clone();
        let change = apply_hp(&mut state, "fire", 50.0);
        assert!(change.is_noop());
        assert_eq!(change.relation, Relation::Immunity);
        assert_eq!(change.effective, 0);
        assert_eq!(state, before);
    }

    #[test]
    fn test_resistance_rounding_to_zero_is_noop() {
        let mut state = briv();
        assert!(apply_hp(&mut state, "slashing", 1.0).is_noop());
        assert_eq!(state.current_hit_points, 20);
    }

    #[test]
    fn test_damage_smaller_than_temp_spares_current() {
        let mut state = briv();
        state.temp_hit_points = 10;
        let change = apply_hp(&mut state, "piercing", 4.0);
        assert_eq!(change.absorbed_by_temp, 4);
        assert_eq!(change.dealt_to_current, 0);
        assert_eq!(state.temp_hit_points, 6);
        assert_eq!(state.current_hit_points, 20);
    }

    #[test]
    fn test_damage_equal_to_temp_clears_pool() {
        let mut state = briv();
        state.temp_hit_points = 6;
        apply_hp(&mut state, "piercing", 6.0);
        assert_eq!(state.temp_hit_points, 0);
        assert_eq!(state.current_hit_points, 20);
    }

    #[test]
    fn test_floor_option_stops_at_zero() {
        let engine = Engine::new(EngineConfig {
            floor_current_at_zero: true,
            ..EngineConfig::default()
        });
        let mut state = briv();
        let change = engine.apply_hp(&mut state, "bludgeoning", 35.0);
        assert_eq!(change.effective, 35);
        assert_eq!(change.dealt_to_current, 20);
        assert_eq!(change.after.current, 0);
        assert_eq!(state.current_hit_points, 0);

        // Already at zero: the hit still lands but takes nothing more.
        let change = engine.apply_hp(&mut state, "bludgeoning", 5.0);
        assert_eq!(change.dealt_to_current, 0);
        assert_eq!(change.before.current - change.after.current, change.dealt_to_current);
    }

    #[test]
    fn test_defense_of() {
        let state = briv();
        assert_eq!(defense_of(&state, "cold"), Relation::Vulnerability);
        assert_eq!(defense_of(&state, "acid"), Relation::None);
    }
}
