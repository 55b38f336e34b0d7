//! Stat resolution.
//!
//! A stat's effective value is its base plus the link bonus of the first
//! spell linked to it. Condition modifiers are deliberately not folded in
//! here; raw dice substitution must not carry them, so callers that want
//! them (the stat-check workflow, AC/speed display) compose them separately
//! via [`sf_core::ConditionEffectResult`].

use sf_core::{CharacterStats, Spell};

/// Resolve a stat key to its effective value: base (0 if the key is absent)
/// plus the first linked spell's `floor(quantity * rank / 5)` bonus.
///
/// Unknown keys resolve to 0 rather than erroring; expressions are validated
/// against the stat record before substitution, so leniency here is safe.
/// The bonus is recomputed on every call; casting a linked spell changes
/// its stock and therefore its bonus, with no cache to invalidate.
pub fn resolve_stat(stat_key: &str, stats: &CharacterStats, spells: &[Spell]) -> i32 {
    let base = stats.get(stat_key).unwrap_or(0);
    let bonus = spells
        .iter()
        .find(|spell| spell.grants_bonus_to(stat_key))
        .map_or(0, Spell::link_bonus);
    base + bonus
}
