//! Error types for the roll pipeline.
//!
//! Every variant is recoverable per-operation and surfaces as inline form
//! feedback or a notification; nothing here is fatal and nothing is retried.
//! The `Display` strings are user-facing and are matched verbatim by form
//! tests, so change them deliberately.

/// Errors that can occur while validating or building a roll.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    /// A roll was requested in a context that requires dice, with no
    /// expression present.
    #[error("a valid dice roll is required")]
    EmptyExpression,

    /// The dice expression fails the grammar even with placeholders ignored.
    #[error("Invalid dice format. Use format like '1d6+[statName]' or '2d8+3'")]
    MalformedExpression,

    /// Placeholders reference stat keys absent from the character record.
    #[error("Unknown stats: {}", .0.join(", "))]
    UnknownStats(Vec<String>),

    /// A spell cast was attempted with no charges left.
    #[error("no charges remaining")]
    NoChargesRemaining,

    /// A weapon multi-attack index beyond the declared attack sequence.
    #[error("attack {index} does not exist; this weapon has {available} attacks")]
    UnknownAttackIndex {
        /// The requested 0-based attack index.
        index: usize,
        /// Total attacks the weapon declares (base plus follow-ups).
        available: usize,
    },
}

/// Convenience result type for roll operations.
pub type RollResult<T> = Result<T, RollError>;
