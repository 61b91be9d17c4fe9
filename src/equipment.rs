//! Equipment module.
//!
//! Each item is a two-state machine, `unequipped` and `equipped`. Equipping
//! adds the item's HP delta to both maximum and current HP; unequipping
//! removes the same amount. Re-issuing a transition is a no-op.

use crate::character::CharacterState;
use crate::config::EngineConfig;
use crate::error::VitalsError;
use crate::modifier::compile_modifier;
use tracing::{debug, trace};

/// What an equipment pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipOutcome {
    /// Names of the items that changed state, in inventory order.
    pub changed: Vec<String>,
    /// Net change applied to both modified and current HP.
    pub hp_delta: i64,
}

impl EquipOutcome {
    /// True if no item changed state.
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }
}

fn transition(state: &mut CharacterState, index: usize, equip: bool, config: &EngineConfig) -> Option<i64> {
    let level = state.level;
    let item = &mut state.items[index];
    if item.equipped == equip {
        trace!(item = %item.name, equip, "item already in requested state");
        return None;
    }

    item.equipped = equip;
    let delta = compile_modifier(&item.modifier, config).hp_delta(level);
    let signed = if equip { delta } else { -delta };
    state.modified_hit_points = state.modified_hit_points.saturating_add(signed);
    state.current_hit_points = state.current_hit_points.saturating_add(signed);

    debug!(
        item = %state.items[index].name,
        equip,
        delta = signed,
        modified = state.modified_hit_points,
        current = state.current_hit_points,
        "{} item",
        if equip { "equipped" } else { "unequipped" }
    );
    Some(signed)
}

/// Move every item in the inventory to the requested state.
///
/// Items are processed in inventory order; items already in the requested
/// state are skipped.
///
/// # Examples
///
/// ```rust
/// use vitals::{CharacterState, EngineConfig, Item, Modifier};
/// use vitals::equipment::apply_equipment;
///
/// let config = EngineConfig::default();
/// let mut state = CharacterState::new("Briv", 3, 20)
///     .with_item(Item::new("Belt", Modifier::new("stats", "constitution", 4)));
///
/// let outcome = apply_equipment(&mut state, true, &config);
/// assert_eq!(outcome.hp_delta, 6);
/// assert_eq!(state.modified_hit_points, 26);
///
/// // Equipping again changes nothing.
/// assert!(apply_equipment(&mut state, true, &config).is_noop());
/// ```
pub fn apply_equipment(state: &mut CharacterState, equip: bool, config: &EngineConfig) -> EquipOutcome {
    let mut outcome = EquipOutcome::default();
    for index in 0..state.items.len() {
        if let Some(delta) = transition(state, index, equip, config) {
            outcome.changed.push(state.items[index].name.clone());
            outcome.hp_delta = outcome.hp_delta.saturating_add(delta);
        }
    }
    outcome
}

/// Move a single item, by inventory position, to the requested state.
///
/// Returns whether the item changed state.
pub fn set_item_equipped(
    state: &mut CharacterState,
    index: usize,
    equip: bool,
    config: &EngineConfig,
) -> Result<bool, VitalsError> {
    if index >= state.items.len() {
        return Err(VitalsError::UnknownItem(index));
    }
    Ok(transition(state, index, equip, config).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Item, Modifier};

    fn briv() -> CharacterState {
        CharacterState::new("Briv", 3, 20)
            .with_item(Item::new("Belt", Modifier::new("stats", "constitution", 4)))
            .with_item(Item::new("Gloves", Modifier::new("stats", "strength", 2)))
            .with_item(Item::new("Amulet", Modifier::new("stats", "constitution", 3)))
    }

    #[test]
    fn test_equip_all_sums_independent_deltas() {
        let config = EngineConfig::default();
        let mut state = briv();
        let outcome = apply_equipment(&mut state, true, &config);

        // 3 * 2 for the belt, 0 for the gloves, 3 * 1 for the amulet
        assert_eq!(outcome.hp_delta, 9);
        assert_eq!(outcome.changed, vec!["Belt", "Gloves", "Amulet"]);
        assert_eq!(state.modified_hit_points, 29);
        assert_eq!(state.current_hit_points, 29);
        state.check_invariants(&config).unwrap();
    }

    #[test]
    fn test_unequip_restores() {
        let config = EngineConfig::default();
        let mut state = briv();
        let before = state.clone();
        apply_equipment(&mut state, true, &config);
        let outcome = apply_equipment(&mut state, false, &config);
        assert_eq!(outcome.hp_delta, -9);
        assert_eq!(state, before);
    }

    #[test]
    fn test_unequip_when_nothing_equipped_is_noop() {
        let config = EngineConfig::default();
        let mut state = briv();
        let outcome = apply_equipment(&mut state, false, &config);
        assert!(outcome.is_noop());
        assert_eq!(state, briv());
    }

    #[test]
    fn test_unequip_can_take_damaged_character_below_zero() {
        let config = EngineConfig::default();
        let mut state = briv();
        apply_equipment(&mut state, true, &config);
        state.current_hit_points = 2;
        apply_equipment(&mut state, false, &config);
        assert_eq!(state.current_hit_points, -7);
        assert_eq!(state.modified_hit_points, 20);
    }

    #[test]
    fn test_single_item() {
        let config = EngineConfig::default();
        let mut state = briv();
        assert!(set_item_equipped(&mut state, 2, true, &config).unwrap());
        assert!(!set_item_equipped(&mut state, 2, true, &config).unwrap());
        assert_eq!(state.modified_hit_points, 23);
        assert!(state.items[2].equipped);
        assert!(!state.items[0].equipped);
    }

    #[test]
    fn test_single_item_out_of_range() {
        let config = EngineConfig::default();
        let mut state = briv();
        let err = set_item_equipped(&mut state, 3, true, &config).unwrap_err();
        assert!(matches!(err, VitalsError::UnknownItem(3)));
    }
}
