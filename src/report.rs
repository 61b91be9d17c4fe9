//! HP change reports.
//!
//! Every engine action returns an `HpChange` describing what was asked for,
//! what the defenses turned it into and where the points went. Reports are
//! plain data: cloneable, comparable and serializable for logs or replays.

use crate::action::HpAction;
use crate::character::CharacterState;
use crate::defense::Relation;
use serde::{Deserialize, Serialize};

/// Whether an action changed the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Applied,
    NoOp,
}

/// The three mutable HP fields at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    pub current: i64,
    pub modified: i64,
    pub temp: i64,
}

impl Vitals {
    pub fn of(state: &CharacterState) -> Self {
        Self {
            current: state.current_hit_points,
            modified: state.modified_hit_points,
            temp: state.temp_hit_points,
        }
    }
}

/// Breakdown of a single HP action.
///
/// # Examples
///
/// ```rust
/// use vitals::{apply_hp, CharacterState, Outcome, Relation};
///
/// let mut state = CharacterState::new("Briv", 5, 20).with_defense("slashing", Relation::Resistance);
/// state.temp_hit_points = 2;
///
/// let change = apply_hp(&mut state, "slashing", 9.0);
/// assert_eq!(change.outcome, Outcome::Applied);
/// assert_eq!(change.amount, 9);
/// assert_eq!(change.relation, Relation::Resistance);
/// assert_eq!(change.effective, 4);
/// assert_eq!(change.absorbed_by_temp, 2);
/// assert_eq!(change.dealt_to_current, 2);
/// assert_eq!(change.after.current, 18);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HpChange {
    /// The action, rendered back to its name.
    pub action: String,
    /// Amount after normalization.
    pub amount: i64,
    /// Relation consulted; always `None` for non-damage actions.
    pub relation: Relation,
    /// Amount after the relation was applied.
    pub effective: i64,
    /// Temporary HP consumed by damage.
    pub absorbed_by_temp: i64,
    /// Damage that reached current HP.
    pub dealt_to_current: i64,
    pub outcome: Outcome,
    pub before: Vitals,
    pub after: Vitals,
}

impl HpChange {
    pub(crate) fn new(action: &HpAction, amount: i64, state: &CharacterState) -> Self {
        let vitals = Vitals::of(state);
        Self {
            action: action.to_string(),
            amount,
            relation: Relation::None,
            effective: amount,
            absorbed_by_temp: 0,
            dealt_to_current: 0,
            outcome: Outcome::NoOp,
            before: vitals,
            after: vitals,
        }
    }

    /// Record the state after the action and mark it applied.
    pub(crate) fn applied(mut self, state: &CharacterState) -> Self {
        self.outcome = Outcome::Applied;
        self.after = Vitals::of(state);
        self
    }

    pub fn is_noop(&self) -> bool {
        self.outcome == Outcome::NoOp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_change_is_noop() {
        let state = CharacterState::new("Briv", 1, 10);
        let change = HpChange::new(&HpAction::Healing, 0, &state);
        assert!(change.is_noop());
        assert_eq!(change.before, change.after);
        assert_eq!(change.action, "healing");
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let state = CharacterState::new("Briv", 1, 10);
        let change = HpChange::new(&HpAction::damage("fire"), 3, &state).applied(&state);
        let value = serde_json::to_value(&change).unwrap();
        assert_eq!(value["outcome"], "applied");
        assert_eq!(value["absorbedByTemp"], 0);
        assert_eq!(value["relation"], "none");
    }
}
