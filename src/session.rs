//! Session facade.
//!
//! `Session` is what a front end talks to. It ties a loader, a snapshot
//! store and an engine together: fetch the snapshot for a key (loading it
//! on first use), run one engine operation on it and persist the result.
//! The engine itself never sees the store.

use crate::character::CharacterState;
use crate::defense::Relation;
use crate::engine::Engine;
use crate::equipment::{self, EquipOutcome};
use crate::error::VitalsError;
use crate::loader::CharacterLoader;
use crate::report::HpChange;
use crate::store::{self, SnapshotStore};
use tracing::{info, warn};

/// Loader, store and engine working on keyed character snapshots.
///
/// # Examples
///
/// ```rust
/// use vitals::Session;
/// use vitals::loader::StaticLoader;
/// use vitals::store::MemoryStore;
///
/// let loader = StaticLoader::new()
///     .with_record("briv.json", r#"{ "name": "Briv", "level": 5, "hitPoints": 25 }"#);
/// let mut session = Session::new(loader, MemoryStore::new());
///
/// session.apply_hp("briv.json", "tempHP", 5.0).unwrap();
/// session.apply_hp("Briv.json", "slashing", 8.0).unwrap();
///
/// let briv = session.get("briv.json", false).unwrap();
/// assert_eq!(briv.temp_hit_points, 0);
/// assert_eq!(briv.current_hit_points, 22);
/// ```
pub struct Session<L, S> {
    loader: L,
    store: S,
    engine: Engine,
}

impl<L: CharacterLoader, S: SnapshotStore> Session<L, S> {
    pub fn new(loader: L, store: S) -> Self {
        Self::with_engine(loader, store, Engine::default())
    }

    pub fn with_engine(loader: L, store: S, engine: Engine) -> Self {
        Self { loader, store, engine }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Return the snapshot for `key`, loading a fresh one if none is stored
    /// or `reload` is set.
    ///
    /// A stored snapshot that breaks the state invariants is reported as an
    /// error rather than handed to the engine. Fresh loads ask the loader for
    /// the lowercased key, so every spelling of a key reaches the same source.
    pub fn get(&mut self, key: &str, reload: bool) -> Result<CharacterState, VitalsError> {
        if !reload {
            if let Some(state) = self.store.get(key)? {
                if let Err(err) = state.check_invariants(self.engine.config()) {
                    warn!(key, error = %err, "stored snapshot is inconsistent");
                    return Err(err);
                }
                return Ok(state);
            }
        }

        let state = self.loader.load(&store::normalize_key(key))?;
        self.store.put(key, &state)?;
        info!(key, character = %state.name, reload, "started session");
        Ok(state)
    }

    /// Apply a named HP action to the character under `key`.
    ///
    /// No-ops are not persisted.
    pub fn apply_hp(&mut self, key: &str, action: &str, raw_amount: f64) -> Result<HpChange, VitalsError> {
        let mut state = self.get(key, false)?;
        let change = self.engine.apply_hp(&mut state, action, raw_amount);
        if !change.is_noop() {
            self.store.put(key, &state)?;
        }
        Ok(change)
    }

    /// Equip or unequip every item of the character under `key`.
    pub fn equip(&mut self, key: &str, equip: bool) -> Result<EquipOutcome, VitalsError> {
        let mut state = self.get(key, false)?;
        let outcome = self.engine.equip(&mut state, equip);
        if !outcome.is_noop() {
            self.store.put(key, &state)?;
        }
        Ok(outcome)
    }

    /// Equip or unequip one item, by inventory position.
    pub fn equip_item(&mut self, key: &str, index: usize, equip: bool) -> Result<bool, VitalsError> {
        let mut state = self.get(key, false)?;
        let changed = equipment::set_item_equipped(&mut state, index, equip, self.engine.config())?;
        if changed {
            self.store.put(key, &state)?;
        }
        Ok(changed)
    }

    /// Relation the character under `key` has to `damage_type`.
    pub fn defense_of(&mut self, key: &str, damage_type: &str) -> Result<Relation, VitalsError> {
        let state = self.get(key, false)?;
        Ok(self.engine.defense_of(&state, damage_type))
    }

    /// End the session for `key`. The next access reloads from the source.
    pub fn delete(&mut self, key: &str) -> Result<(), VitalsError> {
        self.store.delete(key)?;
        info!(key, "cleared session");
        Ok(())
    }
}
