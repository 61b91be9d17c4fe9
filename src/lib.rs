//! # vitals - Deterministic Hit-Point Engine
//!
//! A hit-point state engine for a single tabletop RPG character that provides:
//! - **Deterministic** transitions (same state + same action → same state)
//! - **Typed damage** modulated by immunity, resistance and vulnerability
//! - **Temporary HP** that absorbs damage first and never stacks
//! - **Equipment** whose ability modifiers raise maximum HP per level
//!
//! ## Core Concepts
//!
//! ### Action Pipeline
//!
//! ```text
//! (raw amount) → normalize → [defense relation] → [temp HP] → current HP
//! ```
//!
//! 1. **Normalize**: amounts become `max(floor(raw), 0)`
//! 2. **Relation**: damage is zeroed, halved or doubled per the character's defenses
//! 3. **Absorb**: temporary HP soaks damage before current HP does
//!
//! Every action returns an [`HpChange`] with the full breakdown and whether
//! anything changed.
//!
//! ### Action Names
//!
//! `"tempHP"` grants temporary HP and `"healing"` heals. Any other name is a
//! damage type, so `"fire"`, `"psychic"` and even a misspelled action all
//! deal damage.
//!
//! ## Example
//!
//! ```rust
//! use vitals::*;
//!
//! let mut briv = CharacterState::new("Briv", 3, 20)
//!     .with_item(Item::new("Belt of Fortitude", Modifier::new("stats", "constitution", 4)))
//!     .with_defense("fire", Relation::Resistance);
//!
//! // +3 levels * floor(4 / 2)
//! equip(&mut briv, true);
//! assert_eq!(briv.modified_hit_points, 26);
//!
//! apply_hp(&mut briv, "tempHP", 5.0);
//! apply_hp(&mut briv, "fire", 17.0); // halved to 8: 5 from temp, 3 from current
//! assert_eq!(briv.temp_hit_points, 0);
//! assert_eq!(briv.current_hit_points, 23);
//!
//! assert_eq!(defense_of(&briv, "fire"), Relation::Resistance);
//! ```
//!
//! ## Modules
//!
//! - [`character`] - Character state, records and invariants
//! - [`damage_type`] - Damage type identifier
//! - [`defense`] - Defense relations and lookup
//! - [`modifier`] - Item modifier compilation
//! - [`equipment`] - Equip/unequip transitions
//! - [`action`] - Action parsing and amount normalization
//! - [`engine`] - The HP engine
//! - [`report`] - Per-action breakdowns
//! - [`config`] - Rule configuration
//! - [`loader`] - Character loaders
//! - [`store`] - Snapshot stores
//! - [`session`] - Loader + store + engine facade
//! - [`dice`] - Dice rolls for demo amounts
//! - [`error`] - Error types

pub mod action;
pub mod character;
pub mod config;
pub mod damage_type;
pub mod defense;
pub mod dice;
pub mod engine;
pub mod equipment;
pub mod error;
pub mod loader;
pub mod modifier;
pub mod report;
pub mod session;
pub mod store;

// Re-export main types for convenience
pub use action::HpAction;
pub use character::{CharacterClass, CharacterRecord, CharacterState, Defense, Item, Modifier};
pub use config::EngineConfig;
pub use damage_type::DamageType;
pub use defense::Relation;
pub use engine::{apply_hp, defense_of, equip, Engine};
pub use equipment::EquipOutcome;
pub use error::VitalsError;
pub use report::{HpChange, Outcome, Vitals};
pub use session::Session;

// Re-export collaborator traits
pub use loader::{CharacterLoader, JsonFileLoader};
pub use store::{MemoryStore, SnapshotStore};
