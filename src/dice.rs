//! Dice rolling for demo amounts.
//!
//! Front ends use this to produce damage or healing amounts for quick-pick
//! buttons ("2d6+3 fire"). It is not part of the rules: the engine only
//! ever sees the resulting number.

use crate::error::VitalsError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Most dice a single expression may roll.
pub const MAX_DICE: u32 = 1000;

/// A single-die-type expression: `count` dice with `sides` sides plus a
/// flat modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub count: u32,
    pub sides: u32,
    pub modifier: i64,
}

/// The outcome of rolling a [`DiceRoll`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    pub rolls: Vec<u32>,
    pub modifier: i64,
}

impl RollResult {
    /// Individual rolls with the modifier appended as the last entry.
    pub fn values(&self) -> Vec<i64> {
        self.rolls
            .iter()
            .map(|&roll| i64::from(roll))
            .chain(std::iter::once(self.modifier))
            .collect()
    }

    /// Sum of all rolls and the modifier, saturating at the `i64` bounds.
    pub fn total(&self) -> i64 {
        self.rolls
            .iter()
            .fold(self.modifier, |acc, &roll| acc.saturating_add(i64::from(roll)))
    }
}

impl DiceRoll {
    pub fn new(count: u32, sides: u32, modifier: i64) -> Result<Self, VitalsError> {
        if sides == 0 {
            return Err(VitalsError::InvalidDice(format!("{count}d{sides}: a die needs at least one side")));
        }
        if count > MAX_DICE {
            return Err(VitalsError::InvalidDice(format!("{count}d{sides}: at most {MAX_DICE} dice")));
        }
        Ok(Self { count, sides, modifier })
    }

    /// Parse `XdY`, `XdY+Z`, `XdY-Z` or `dY`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vitals::dice::DiceRoll;
    ///
    /// let roll = DiceRoll::parse("2d6+3").unwrap();
    /// assert_eq!((roll.count, roll.sides, roll.modifier), (2, 6, 3));
    ///
    /// assert_eq!(DiceRoll::parse("d20").unwrap().count, 1);
    /// assert!(DiceRoll::parse("2x6").is_err());
    /// ```
    pub fn parse(notation: &str) -> Result<Self, VitalsError> {
        let invalid = || VitalsError::InvalidDice(notation.to_string());
        let compact: String = notation
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        let (count_str, rest) = compact.split_once('d').ok_or_else(invalid)?;
        let count = if count_str.is_empty() {
            1
        } else {
            count_str.parse().map_err(|_| invalid())?
        };

        let (sides_str, modifier) = match rest.find(['+', '-']) {
            Some(pos) => {
                let modifier: i64 = rest[pos..].parse().map_err(|_| invalid())?;
                (&rest[..pos], modifier)
            }
            None => (rest, 0),
        };
        let sides = sides_str.parse().map_err(|_| invalid())?;

        Self::new(count, sides, modifier)
    }

    /// Roll with the thread-local RNG.
    pub fn roll(&self) -> RollResult {
        self.roll_with_rng(&mut rand::thread_rng())
    }

    /// Roll with a specific RNG (useful for testing).
    pub fn roll_with_rng<R: Rng>(&self, rng: &mut R) -> RollResult {
        RollResult {
            rolls: (0..self.count).map(|_| rng.gen_range(1..=self.sides)).collect(),
            modifier: self.modifier,
        }
    }
}

impl FromStr for DiceRoll {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

/// Roll `count` dice of `sides` sides and add `modifier` to the total.
pub fn roll_total(count: u32, sides: u32, modifier: i64) -> Result<i64, VitalsError> {
    Ok(DiceRoll::new(count, sides, modifier)?.roll().total())
}
