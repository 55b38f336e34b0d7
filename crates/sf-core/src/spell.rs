//! Spells: charged, ranked, and optionally linked to a stat.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

/// Maximum charge count a spell can hold.
pub const MAX_SPELL_STACKS: u32 = 20;

/// Maximum action cost for a spell or ability.
pub const MAX_ACTION_COST: u32 = 4;

/// A spell on the character sheet.
///
/// Spells carry a charge count (`quantity`), a level (`power`), and a damage
/// dice expression. A spell may declare itself linked to a stat, granting
/// that stat a bonus that scales with both the spell's rank and its
/// remaining charges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    /// Opaque identity.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Remaining charges, in `[0, MAX_SPELL_STACKS]`.
    pub quantity: u32,
    /// Spell level, at least 1.
    pub power: u32,
    /// Damage dice expression (may contain `[stat]` placeholders).
    pub dice: String,
    /// Flavor text shown in the command's description segment.
    pub description: String,
    /// Element tag (e.g. "fire").
    pub element: String,
    /// Action cost, in `[0, MAX_ACTION_COST]`. 0 means a free action.
    pub action_cost: u32,
    /// Whether the spell grants its link bonus.
    pub is_linked: bool,
    /// The stat receiving the link bonus, when linked.
    pub linked_stat: Option<String>,
    /// When the spell was added to the sheet.
    pub created_at: DateTime<Utc>,
}

impl Spell {
    /// Create a spell, validating field ranges at the construction boundary.
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        power: u32,
        dice: impl Into<String>,
        element: impl Into<String>,
        action_cost: u32,
    ) -> CoreResult<Self> {
        let spell = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity,
            power,
            dice: dice.into(),
            description: String::new(),
            element: element.into(),
            action_cost,
            is_linked: false,
            linked_stat: None,
            created_at: Utc::now(),
        };
        spell.validate()?;
        Ok(spell)
    }

    /// Check field bounds. Run at construction and again after
    /// deserialization, since serde bypasses [`Spell::new`].
    pub(crate) fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::MissingField("spell name"));
        }
        if self.quantity > MAX_SPELL_STACKS {
            return Err(CoreError::OutOfRange {
                field: "quantity",
                min: 0,
                max: i64::from(MAX_SPELL_STACKS),
                value: i64::from(self.quantity),
            });
        }
        if self.power < 1 {
            return Err(CoreError::OutOfRange {
                field: "power",
                min: 1,
                max: i64::MAX,
                value: i64::from(self.power),
            });
        }
        if self.action_cost > MAX_ACTION_COST {
            return Err(CoreError::OutOfRange {
                field: "action cost",
                min: 0,
                max: i64::from(MAX_ACTION_COST),
                value: i64::from(self.action_cost),
            });
        }
        Ok(())
    }

    /// Attach flavor text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Rank tier (1-5) derived from power via fixed breakpoints.
    pub fn rank(&self) -> u32 {
        match self.power {
            0..=1 => 1,
            2..=3 => 2,
            4..=5 => 3,
            6..=7 => 4,
            _ => 5,
        }
    }

    /// Returns true if this spell grants a link bonus to the given stat.
    pub fn grants_bonus_to(&self, stat_key: &str) -> bool {
        self.is_linked && self.linked_stat.as_deref() == Some(stat_key)
    }

    /// The link bonus this spell currently grants: `floor(quantity * rank / 5)`.
    ///
    /// Scales with both level and remaining stock, so it is recomputed on
    /// every resolution rather than cached.
    pub fn link_bonus(&self) -> i32 {
        ((self.quantity * self.rank()) / 5) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_breakpoints() {
        let rank_of = |power| {
            Spell::new("Bolt", 1, power, "1d6", "fire", 1)
                .unwrap()
                .rank()
        };
        assert_eq!(rank_of(1), 1);
        assert_eq!(rank_of(2), 2);
        assert_eq!(rank_of(3), 2);
        assert_eq!(rank_of(4), 3);
        assert_eq!(rank_of(5), 3);
        assert_eq!(rank_of(6), 4);
        assert_eq!(rank_of(7), 4);
        assert_eq!(rank_of(8), 5);
        assert_eq!(rank_of(10), 5);
    }

    #[test]
    fn link_bonus_scales_with_stock() {
        let mut spell = Spell::new("Ember Ward", 10, 3, "2d6", "fire", 1).unwrap();
        spell.is_linked = true;
        spell.linked_stat = Some("strength".to_string());
        assert_eq!(spell.rank(), 2);
        assert_eq!(spell.link_bonus(), 4); // floor(10 * 2 / 5)

        spell.quantity = 4;
        assert_eq!(spell.link_bonus(), 1); // floor(4 * 2 / 5)
        spell.quantity = 0;
        assert_eq!(spell.link_bonus(), 0);
    }

    #[test]
    fn grants_bonus_requires_link_flag() {
        let mut spell = Spell::new("Ember Ward", 5, 3, "2d6", "fire", 1).unwrap();
        spell.linked_stat = Some("strength".to_string());
        assert!(!spell.grants_bonus_to("strength"));
        spell.is_linked = true;
        assert!(spell.grants_bonus_to("strength"));
        assert!(!spell.grants_bonus_to("dexterity"));
    }

    #[test]
    fn rejects_empty_name() {
        assert!(Spell::new("  ", 1, 1, "1d6", "fire", 1).is_err());
    }

    #[test]
    fn rejects_zero_power() {
        assert!(Spell::new("Bolt", 1, 0, "1d6", "fire", 1).is_err());
    }

    #[test]
    fn rejects_excess_quantity() {
        assert!(Spell::new("Bolt", MAX_SPELL_STACKS + 1, 1, "1d6", "fire", 1).is_err());
    }

    #[test]
    fn rejects_excess_action_cost() {
        assert!(Spell::new("Bolt", 1, 1, "1d6", "fire", 5).is_err());
    }

    #[test]
    fn description_builder() {
        let spell = Spell::new("Bolt", 1, 1, "1d6", "fire", 1)
            .unwrap()
            .with_description("A crackling dart.");
        assert_eq!(spell.description, "A crackling dart.");
    }
}
