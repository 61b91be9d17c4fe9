use vitals::equipment::{apply_equipment, set_item_equipped};
use vitals::modifier::hp_delta;
use vitals::*;

fn belt() -> Item {
    Item::new("Belt of Fortitude", Modifier::new("stats", "constitution", 4))
}

/// Equipping a +4 constitution item on a level 3 character adds 6 to both
/// maximum and current HP; unequipping removes exactly 6.
#[test]
fn test_equip_unequip_symmetry() {
    let mut state = CharacterState::new("Briv", 3, 20).with_item(belt());
    let before = state.clone();

    let outcome = equip(&mut state, true);
    assert_eq!(outcome.hp_delta, 6);
    assert_eq!(state.modified_hit_points, 26);
    assert_eq!(state.current_hit_points, 26);

    let outcome = equip(&mut state, false);
    assert_eq!(outcome.hp_delta, -6);
    assert_eq!(state, before);
}

/// Equipping twice is the same as equipping once.
#[test]
fn test_equip_idempotence() {
    let mut once = CharacterState::new("Briv", 3, 20).with_item(belt());
    let mut twice = once.clone();

    equip(&mut once, true);
    equip(&mut twice, true);
    let second = equip(&mut twice, true);

    assert!(second.is_noop());
    assert_eq!(second.hp_delta, 0);
    assert_eq!(once, twice);
}

/// Equipment keeps damage already taken.
#[test]
fn test_equip_on_damaged_character() {
    let mut state = CharacterState::new("Briv", 3, 20).with_item(belt());
    apply_hp(&mut state, "slashing", 8.0);
    equip(&mut state, true);
    assert_eq!(state.current_hit_points, 18);
    assert_eq!(state.modified_hit_points, 26);

    // Healing now reaches the raised maximum.
    apply_hp(&mut state, "healing", 100.0);
    assert_eq!(state.current_hit_points, 26);
}

/// Unequipping at full health brings current back down with the maximum.
#[test]
fn test_unequip_lowers_current_with_maximum() {
    let mut state = CharacterState::new("Briv", 3, 20).with_item(belt());
    equip(&mut state, true);
    apply_hp(&mut state, "tempHP", 5.0);
    equip(&mut state, false);
    assert_eq!(state.current_hit_points, 20);
    assert_eq!(state.modified_hit_points, 20);
    assert_eq!(state.temp_hit_points, 5);
}

/// Modifiers on anything other than constitution change nothing, but the
/// item still flips state.
#[test]
fn test_inert_modifiers_still_toggle() {
    let mut state = CharacterState::new("Briv", 3, 20)
        .with_item(Item::new("Gauntlets", Modifier::new("stats", "strength", 6)))
        .with_item(Item::new("Cloak", Modifier::new("saves", "constitution", 2)));

    let outcome = equip(&mut state, true);
    assert_eq!(outcome.changed.len(), 2);
    assert_eq!(outcome.hp_delta, 0);
    assert_eq!(state.modified_hit_points, 20);
    assert!(state.items.iter().all(|item| item.equipped));
}

/// A negative constitution modifier never takes HP away.
#[test]
fn test_negative_constitution_item() {
    let mut state = CharacterState::new("Briv", 6, 40)
        .with_item(Item::new("Cursed Ring", Modifier::new("stats", "constitution", -4)));
    equip(&mut state, true);
    assert_eq!(state.modified_hit_points, 40);
    assert_eq!(hp_delta(&state.items[0], &state, &EngineConfig::default()), 0);
}

/// Mixed single-item and whole-inventory transitions keep the
/// modified HP invariant.
#[test]
fn test_mixed_transitions_keep_invariant() {
    let config = EngineConfig::default();
    let mut state = CharacterState::new("Briv", 4, 30)
        .with_item(belt())
        .with_item(Item::new("Amulet of Health", Modifier::new("stats", "constitution", 7)))
        .with_item(Item::new("Boots", Modifier::new("stats", "dexterity", 2)));

    set_item_equipped(&mut state, 1, true, &config).unwrap();
    state.check_invariants(&config).unwrap();
    assert_eq!(state.modified_hit_points, 42);

    let outcome = apply_equipment(&mut state, true, &config);
    assert_eq!(outcome.changed, vec!["Belt of Fortitude", "Boots"]);
    assert_eq!(state.modified_hit_points, 50);
    state.check_invariants(&config).unwrap();

    set_item_equipped(&mut state, 0, false, &config).unwrap();
    assert_eq!(state.modified_hit_points, 42);
    state.check_invariants(&config).unwrap();
}
