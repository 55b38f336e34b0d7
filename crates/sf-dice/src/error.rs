//! Error types for the dice-expression language.

/// Errors from evaluating a dice expression.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// Division by zero during evaluation.
    #[error("division by zero")]
    DivisionByZero,
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
