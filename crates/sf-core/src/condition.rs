//! Condition effects.
//!
//! A fixed lookup table maps each condition to its per-stack effect on AC,
//! speed, and saving throws. Some conditions override speed outright instead
//! of modifying it (e.g. restrained). The summed result is transient and
//! recomputed whenever it is needed; it is never persisted.

use crate::stats::CharacterStats;

/// Per-stack effect of one condition.
#[derive(Debug, Clone, Copy)]
pub struct ConditionEffect {
    /// Condition name as stored on the sheet.
    pub name: &'static str,
    /// AC modifier per stack.
    pub ac: i32,
    /// Speed modifier per stack.
    pub speed: i32,
    /// Absolute speed override, if the condition pins speed.
    pub speed_override: Option<i32>,
    /// Saving-throw modifier per stack.
    pub saving_throw: i32,
}

const EFFECTS: &[ConditionEffect] = &[
    ConditionEffect {
        name: "prone",
        ac: -2,
        speed: -10,
        speed_override: None,
        saving_throw: 0,
    },
    ConditionEffect {
        name: "restrained",
        ac: -2,
        speed: 0,
        speed_override: Some(0),
        saving_throw: -2,
    },
    ConditionEffect {
        name: "grappled",
        ac: 0,
        speed: 0,
        speed_override: Some(0),
        saving_throw: 0,
    },
    ConditionEffect {
        name: "poisoned",
        ac: 0,
        speed: 0,
        speed_override: None,
        saving_throw: -1,
    },
    ConditionEffect {
        name: "stunned",
        ac: -2,
        speed: 0,
        speed_override: Some(0),
        saving_throw: -2,
    },
    ConditionEffect {
        name: "exhausted",
        ac: 0,
        speed: -5,
        speed_override: None,
        saving_throw: -1,
    },
    ConditionEffect {
        name: "blessed",
        ac: 0,
        speed: 0,
        speed_override: None,
        saving_throw: 1,
    },
    ConditionEffect {
        name: "shielded",
        ac: 2,
        speed: 0,
        speed_override: None,
        saving_throw: 0,
    },
];

/// Look up the effect table entry for a condition name.
pub fn effect(name: &str) -> Option<&'static ConditionEffect> {
    EFFECTS.iter().find(|e| e.name == name)
}

/// All condition names the effect table knows about.
pub fn known_conditions() -> impl Iterator<Item = &'static str> {
    EFFECTS.iter().map(|e| e.name)
}

/// Summed effect of all active conditions on a sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionEffectResult {
    /// Total AC modifier.
    pub ac_modifier: i32,
    /// Total speed modifier (ignored when an override applies).
    pub speed_modifier: i32,
    /// Lowest speed override among active overriding conditions.
    pub speed_override: Option<i32>,
    /// Total saving-throw modifier.
    pub saving_throw_modifier: i32,
}

impl ConditionEffectResult {
    /// Compute the summed effect for all active conditions.
    ///
    /// Modifiers scale with stack count; overrides do not (being grappled
    /// twice does not make speed doubly zero). Conditions absent from the
    /// effect table contribute nothing.
    pub fn from_stats(stats: &CharacterStats) -> Self {
        let mut result = Self::default();
        for (name, stacks) in stats.active_conditions() {
            let Some(effect) = effect(name) else {
                continue;
            };
            let stacks = stacks as i32;
            result.ac_modifier += effect.ac * stacks;
            result.speed_modifier += effect.speed * stacks;
            result.saving_throw_modifier += effect.saving_throw * stacks;
            if let Some(over) = effect.speed_override {
                result.speed_override = Some(match result.speed_override {
                    Some(existing) => existing.min(over),
                    None => over,
                });
            }
        }
        result
    }

    /// Effective speed given a base value: override wins, floor at 0.
    pub fn effective_speed(&self, base: i32) -> i32 {
        match self.speed_override {
            Some(over) => over.max(0),
            None => (base + self.speed_modifier).max(0),
        }
    }

    /// Effective AC given a base value.
    pub fn effective_ac(&self, base: i32) -> i32 {
        base + self.ac_modifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_conditions() {
        let stats = CharacterStats::new();
        assert_eq!(
            ConditionEffectResult::from_stats(&stats),
            ConditionEffectResult::default()
        );
    }

    #[test]
    fn modifiers_scale_with_stacks() {
        let mut stats = CharacterStats::new();
        stats.add_condition("poisoned", 3);
        let result = ConditionEffectResult::from_stats(&stats);
        assert_eq!(result.saving_throw_modifier, -3);
        assert_eq!(result.ac_modifier, 0);
    }

    #[test]
    fn override_does_not_scale() {
        let mut stats = CharacterStats::new();
        stats.add_condition("grappled", 2);
        let result = ConditionEffectResult::from_stats(&stats);
        assert_eq!(result.speed_override, Some(0));
        assert_eq!(result.effective_speed(30), 0);
    }

    #[test]
    fn override_wins_over_modifier() {
        let mut stats = CharacterStats::new();
        stats.add_condition("prone", 1);
        stats.add_condition("restrained", 1);
        let result = ConditionEffectResult::from_stats(&stats);
        // prone's -10 speed is moot once restrained pins speed to 0
        assert_eq!(result.effective_speed(30), 0);
        assert_eq!(result.ac_modifier, -4);
    }

    #[test]
    fn speed_floors_at_zero() {
        let mut stats = CharacterStats::new();
        stats.add_condition("exhausted", 10);
        let result = ConditionEffectResult::from_stats(&stats);
        assert_eq!(result.effective_speed(30), 0);
    }

    #[test]
    fn unknown_condition_contributes_nothing() {
        let mut stats = CharacterStats::new();
        stats.add_condition("confused", 5);
        assert_eq!(
            ConditionEffectResult::from_stats(&stats),
            ConditionEffectResult::default()
        );
    }

    #[test]
    fn mixed_modifiers() {
        let mut stats = CharacterStats::new();
        stats.add_condition("blessed", 1);
        stats.add_condition("poisoned", 1);
        let result = ConditionEffectResult::from_stats(&stats);
        assert_eq!(result.saving_throw_modifier, 0);
    }

    #[test]
    fn effective_ac() {
        let mut stats = CharacterStats::new();
        stats.add_condition("shielded", 1);
        let result = ConditionEffectResult::from_stats(&stats);
        assert_eq!(result.effective_ac(14), 16);
    }
}
