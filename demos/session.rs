//! Session walkthrough
//!
//! Loads a character record, equips its items, then runs a scripted fight:
//! temporary HP, rolled damage of several types against the character's
//! defenses, and healing. Run with `RUST_LOG=vitals=debug` to see every
//! transition the engine logs.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use vitals::damage_type::COMMON_DAMAGE_TYPES;
use vitals::dice::DiceRoll;
use vitals::loader::StaticLoader;
use vitals::*;

const BRIV: &str = r#"{
    "name": "Briv",
    "level": 5,
    "hitPoints": 25,
    "classes": [{ "name": "fighter", "hitDiceValue": 10, "classLevel": 5 }],
    "stats": { "strength": 15, "dexterity": 12, "constitution": 14 },
    "items": [{
        "name": "Ioun Stone of Fortitude",
        "modifier": { "affectedObject": "stats", "affectedValue": "constitution", "value": 2 }
    }],
    "defenses": [
        { "type": "fire", "defense": "immunity" },
        { "type": "slashing", "defense": "resistance" },
        { "type": "cold", "defense": "vulnerability" }
    ]
}"#;

fn print_vitals(label: &str, state: &CharacterState) {
    println!(
        "{label:<28} HP {:>3}/{:<3} temp {:>2}",
        state.current_hit_points, state.modified_hit_points, state.temp_hit_points
    );
}

fn main() -> Result<(), VitalsError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let key = "briv.json";
    let loader = StaticLoader::new().with_record(key, BRIV);
    let mut session = Session::new(loader, MemoryStore::new());

    print_vitals("loaded", &session.get(key, false)?);
    for damage_type in COMMON_DAMAGE_TYPES {
        let relation = session.defense_of(key, damage_type)?;
        if relation != Relation::None {
            println!("  {damage_type}: {relation}");
        }
    }

    let outcome = session.equip(key, true)?;
    println!("equipped {:?} ({:+} HP)", outcome.changed, outcome.hp_delta);
    print_vitals("after equip", &session.get(key, false)?);

    session.apply_hp(key, "tempHP", 8.0)?;
    print_vitals("tempHP 8", &session.get(key, false)?);

    let mut rng = StdRng::seed_from_u64(19937);
    let script = [
        ("slashing", "2d6+3"),
        ("fire", "8d6"),
        ("cold", "1d8"),
        ("piercing", "1d4+1"),
    ];
    for (damage_type, notation) in script {
        let roll = DiceRoll::parse(notation)?.roll_with_rng(&mut rng);
        let change = session.apply_hp(key, damage_type, roll.total() as f64)?;
        let label = format!("{damage_type} {notation} = {}", roll.total());
        println!(
            "  {} vs {}: {} effective, {} absorbed, {} to HP",
            damage_type, change.relation, change.effective, change.absorbed_by_temp, change.dealt_to_current
        );
        print_vitals(&label, &session.get(key, false)?);
    }

    session.apply_hp(key, "healing", 6.5)?;
    print_vitals("healing 6.5", &session.get(key, false)?);

    session.delete(key)?;
    print_vitals("after reset", &session.get(key, false)?);

    Ok(())
}
