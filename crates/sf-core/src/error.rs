//! Error types for the character model.

use std::path::PathBuf;

/// Errors that can occur while building or persisting character records.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required field was empty at construction time.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A numeric field was outside its allowed range.
    #[error("{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Lower bound (inclusive).
        min: i64,
        /// Upper bound (inclusive).
        max: i64,
        /// The rejected value.
        value: i64,
    },

    /// A weapon was created without an attack dice expression.
    #[error("a weapon requires an attack dice expression")]
    WeaponWithoutDice,

    /// No spell with the given id exists on the sheet.
    #[error("spell not found: {0}")]
    SpellNotFound(uuid::Uuid),

    /// No ability with the given id exists on the sheet.
    #[error("ability not found: {0}")]
    AbilityNotFound(uuid::Uuid),

    /// No sheet file exists at the given path.
    #[error("no sheet found at {0}")]
    SheetNotFound(PathBuf),

    /// The sheet file could not be read or written.
    #[error("sheet io error: {0}")]
    Io(#[from] std::io::Error),

    /// The sheet file could not be parsed or serialized.
    #[error("sheet format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Convenience result type for character-model operations.
pub type CoreResult<T> = Result<T, CoreError>;
