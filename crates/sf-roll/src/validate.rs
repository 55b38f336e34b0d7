//! Dice-expression validation.
//!
//! Structural validity only: the expression must parse, and every embedded
//! placeholder must name a stat present on the character record. The real
//! numeric roll happens at the virtual tabletop; nothing here evaluates the
//! substituted expression.

use sf_core::CharacterStats;

use crate::error::{RollError, RollResult};

/// Validation verdict for live form feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Whether the expression may be substituted and rolled.
    pub is_valid: bool,
    /// User-facing message when invalid.
    pub error: Option<String>,
}

impl Validation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }
}

/// Check an expression, returning a typed error for workflow use.
///
/// Placeholder names are matched case-sensitively against stat keys.
pub fn check(expression: &str, stats: &CharacterStats) -> RollResult<()> {
    if expression.trim().is_empty() {
        return Err(RollError::EmptyExpression);
    }

    let expr = sf_dice::parse(expression).map_err(|_| RollError::MalformedExpression)?;

    let unknown: Vec<String> = expr
        .placeholders()
        .into_iter()
        .filter(|name| !stats.contains(name))
        .map(str::to_string)
        .collect();
    if !unknown.is_empty() {
        return Err(RollError::UnknownStats(unknown));
    }
    Ok(())
}

/// Validate an expression for form feedback: the `{is_valid, error}` shape
/// the editing UI binds to.
pub fn validate(expression: &str, stats: &CharacterStats) -> Validation {
    match check(expression, stats) {
        Ok(()) => Validation::valid(),
        Err(error) => Validation {
            is_valid: false,
            error: Some(error.to_string()),
        },
    }
}
