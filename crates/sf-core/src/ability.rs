//! Abilities and weapons.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::spell::MAX_ACTION_COST;

/// Discriminates generic abilities from weapons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    /// A generic ability; its dice expression is optional.
    Ability,
    /// A weapon; an attack dice expression is required.
    Weapon,
}

impl std::fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbilityKind::Ability => write!(f, "ability"),
            AbilityKind::Weapon => write!(f, "weapon"),
        }
    }
}

/// A follow-up attack in a weapon's multi-attack sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalAttack {
    /// Modifier applied to this attack's roll, typically negative.
    pub penalty: i32,
}

/// An ability or weapon on the character sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    /// Opaque identity.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Whether this is a generic ability or a weapon.
    pub kind: AbilityKind,
    /// Dice expression; required for weapons, optional otherwise.
    pub dice: Option<String>,
    /// Flavor text shown in the command's description segment.
    pub description: String,
    /// Element tag, empty for untyped abilities.
    pub element: String,
    /// Action cost, in `[0, MAX_ACTION_COST]`.
    pub action_cost: u32,
    /// Follow-up attacks, in sequence order. Weapons only.
    pub additional_attacks: Vec<AdditionalAttack>,
    /// When the record was added to the sheet.
    pub created_at: DateTime<Utc>,
}

impl Ability {
    /// Create a record, validating at the construction boundary.
    pub fn new(
        name: impl Into<String>,
        kind: AbilityKind,
        dice: Option<String>,
        element: impl Into<String>,
        action_cost: u32,
    ) -> CoreResult<Self> {
        let ability = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            dice,
            description: String::new(),
            element: element.into(),
            action_cost,
            additional_attacks: Vec::new(),
            created_at: Utc::now(),
        };
        ability.validate()?;
        Ok(ability)
    }

    /// Check field bounds. Run at construction and again after
    /// deserialization, since serde bypasses [`Ability::new`].
    pub(crate) fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::MissingField("ability name"));
        }
        if self.kind == AbilityKind::Weapon
            && self.dice.as_deref().is_none_or(|d| d.trim().is_empty())
        {
            return Err(CoreError::WeaponWithoutDice);
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

    /// Append a follow-up attack with the given penalty.
    pub fn with_additional_attack(mut self, penalty: i32) -> Self {
        self.additional_attacks.push(AdditionalAttack { penalty });
        self
    }

    /// Total number of attacks (base plus follow-ups).
    pub fn attack_count(&self) -> usize {
        1 + self.additional_attacks.len()
    }
}
