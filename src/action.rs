//! HP actions and amount normalization.
//!
//! Actions arrive as free-form strings. `"tempHP"` and `"healing"` are
//! reserved; every other string names a damage type. This fallback is
//! deliberate: a typo in an action name deals damage of that (unknown)
//! type instead of failing.

use crate::damage_type::DamageType;
use std::fmt;

/// Action name that grants temporary hit points.
pub const TEMP_HP: &str = "tempHP";
/// Action name that heals.
pub const HEALING: &str = "healing";

/// One discrete HP action.
///
/// # Examples
///
/// ```rust
/// use vitals::HpAction;
///
/// assert_eq!(HpAction::parse("tempHP"), HpAction::TempHp);
/// assert_eq!(HpAction::parse("healing"), HpAction::Healing);
/// assert_eq!(HpAction::parse("fire"), HpAction::Damage("fire".into()));
/// // Reserved names are case-sensitive too.
/// assert_eq!(HpAction::parse("Healing"), HpAction::Damage("Healing".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HpAction {
    TempHp,
    Healing,
    Damage(DamageType),
}

impl HpAction {
    /// Parse an action name. Never fails.
    pub fn parse(action: &str) -> Self {
        match action {
            TEMP_HP => HpAction::TempHp,
            HEALING => HpAction::Healing,
            damage_type => HpAction::Damage(DamageType::new(damage_type)),
        }
    }

    /// Shorthand for a damage action.
    pub fn damage(damage_type: impl Into<DamageType>) -> Self {
        HpAction::Damage(damage_type.into())
    }
}

impl From<&str> for HpAction {
    fn from(action: &str) -> Self {
        Self::parse(action)
    }
}

impl fmt::Display for HpAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HpAction::TempHp => f.write_str(TEMP_HP),
            HpAction::Healing => f.write_str(HEALING),
            HpAction::Damage(damage_type) => write!(f, "{damage_type}"),
        }
    }
}

/// Normalize a raw amount to `max(floor(raw), 0)`.
///
/// NaN becomes 0 and values beyond `i64::MAX` saturate.
///
/// # Examples
///
/// ```rust
/// use vitals::action::normalize_amount;
///
/// assert_eq!(normalize_amount(2.9), 2);
/// assert_eq!(normalize_amount(-5.0), 0);
/// assert_eq!(normalize_amount(-0.5), 0);
/// assert_eq!(normalize_amount(f64::NAN), 0);
/// ```
pub fn normalize_amount(raw: f64) -> i64 {
    // `as` saturates and maps NaN to 0.
    (raw.floor() as i64).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_action_is_damage() {
        assert_eq!(HpAction::parse("banana"), HpAction::damage("banana"));
        assert_eq!(HpAction::parse(""), HpAction::damage(""));
    }

    #[test]
    fn test_display_round_trips_names() {
        for name in ["tempHP", "healing", "necrotic"] {
            assert_eq!(HpAction::parse(name).to_string(), name);
        }
    }

    #[test]
    fn test_normalize_infinities() {
        assert_eq!(normalize_amount(f64::INFINITY), i64::MAX);
        assert_eq!(normalize_amount(f64::NEG_INFINITY), 0);
        assert_eq!(normalize_amount(7.0), 7);
    }
}
