//! Error types for loading, storing and validating characters.
//!
//! The HP engine itself never fails: out-of-range amounts are normalized,
//! unknown action names fall through to damage and missing defenses resolve
//! to [`Relation::None`](crate::defense::Relation::None). Everything in
//! [`VitalsError`] belongs to the boundaries around the engine.

use thiserror::Error;

/// Errors raised at the loader, store and session boundaries.
///
/// # Examples
///
/// ```rust
/// use vitals::VitalsError;
///
/// let err = VitalsError::Load {
///     source_id: "briv.json".into(),
///     reason: "level must be at least 1".into(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Failed to load character from briv.json: level must be at least 1"
/// );
/// ```
#[derive(Debug, Error)]
pub enum VitalsError {
    /// The source record was readable but is not a valid character.
    ///
    /// No partial state is produced when this is returned.
    #[error("Failed to load character from {source_id}: {reason}")]
    Load { source_id: String, reason: String },

    /// The source or snapshot could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source or snapshot is not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A snapshot breaks one of the character state invariants.
    #[error("Invariant violated: {0}")]
    Invariant(String),

    /// No item exists at the given inventory position.
    #[error("No item at inventory index {0}")]
    UnknownItem(usize),

    /// A dice expression could not be parsed.
    #[error("Invalid dice notation: {0}")]
    InvalidDice(String),
}

impl VitalsError {
    /// Build a [`VitalsError::Load`] for the given source.
    pub(crate) fn load(source_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Load {
            source_id: source_id.into(),
            reason: reason.into(),
        }
    }
}
