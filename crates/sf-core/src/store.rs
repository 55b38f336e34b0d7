//! The character sheet and its JSON persistence.
//!
//! The sheet owns all character state. The roll pipeline reads it as an
//! immutable snapshot and hands requested mutations back as [`StateChange`]
//! values; callers apply them here and save.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ability::Ability;
use crate::error::{CoreError, CoreResult};
use crate::pool::Pool;
use crate::spell::Spell;
use crate::stats::CharacterStats;

/// A mutation requested by the roll pipeline, applied by the state owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// Set a spell's remaining charge count.
    SpellQuantity {
        /// The spell to update.
        id: Uuid,
        /// Its new charge count.
        quantity: u32,
    },
}

/// A complete character sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// Character name.
    pub name: String,
    /// Stat block and active conditions.
    pub stats: CharacterStats,
    /// Hit points.
    pub hp: Pool,
    /// Mana.
    pub mana: Pool,
    /// Known spells, in creation order.
    pub spells: Vec<Spell>,
    /// Abilities and weapons, in creation order.
    pub abilities: Vec<Ability>,
}

impl Sheet {
    /// Create a fresh sheet with the standard stat block.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: CharacterStats::standard(),
            hp: Pool::new(20),
            mana: Pool::new(10),
            spells: Vec::new(),
            abilities: Vec::new(),
        }
    }

    /// Load a sheet from a JSON file.
    ///
    /// Record bounds are re-checked after deserialization; a hand-edited
    /// file cannot smuggle out-of-range values past the constructors.
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::SheetNotFound(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        let sheet: Self = serde_json::from_str(&data)?;
        for spell in &sheet.spells {
            spell.validate()?;
        }
        for ability in &sheet.abilities {
            ability.validate()?;
        }
        Ok(sheet)
    }

    /// Save the sheet to a JSON file.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Find a spell by name (case-insensitive).
    pub fn spell_by_name(&self, name: &str) -> Option<&Spell> {
        let lower = name.to_lowercase();
        self.spells.iter().find(|s| s.name.to_lowercase() == lower)
    }

    /// Find an ability by name (case-insensitive).
    pub fn ability_by_name(&self, name: &str) -> Option<&Ability> {
        let lower = name.to_lowercase();
        self.abilities
            .iter()
            .find(|a| a.name.to_lowercase() == lower)
    }

    /// Remove a spell by id.
    pub fn remove_spell(&mut self, id: Uuid) -> CoreResult<Spell> {
        let index = self
            .spells
            .iter()
            .position(|s| s.id == id)
            .ok_or(CoreError::SpellNotFound(id))?;
        Ok(self.spells.remove(index))
    }

    /// Remove an ability by id.
    pub fn remove_ability(&mut self, id: Uuid) -> CoreResult<Ability> {
        let index = self
            .abilities
            .iter()
            .position(|a| a.id == id)
            .ok_or(CoreError::AbilityNotFound(id))?;
        Ok(self.abilities.remove(index))
    }

    /// Link a spell to a stat, unlinking any other spell on the same stat.
    ///
    /// Keeps the at-most-one-link-per-stat invariant the resolver assumes.
    pub fn link_spell(&mut self, id: Uuid, stat_key: &str) -> CoreResult<()> {
        if !self.spells.iter().any(|s| s.id == id) {
            return Err(CoreError::SpellNotFound(id));
        }
        for spell in &mut self.spells {
            if spell.id == id {
                spell.is_linked = true;
                spell.linked_stat = Some(stat_key.to_string());
            } else if spell.linked_stat.as_deref() == Some(stat_key) {
                spell.is_linked = false;
                spell.linked_stat = None;
            }
        }
        Ok(())
    }

    /// Clear a spell's link.
    pub fn unlink_spell(&mut self, id: Uuid) -> CoreResult<()> {
        let spell = self
            .spells
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(CoreError::SpellNotFound(id))?;
        spell.is_linked = false;
        spell.linked_stat = None;
        Ok(())
    }

    /// Apply a mutation requested by the roll pipeline.
    pub fn apply(&mut self, change: StateChange) -> CoreResult<()> {
        match change {
            StateChange::SpellQuantity { id, quantity } => {
                let spell = self
                    .spells
                    .iter_mut()
                    .find(|s| s.id == id)
                    .ok_or(CoreError::SpellNotFound(id))?;
                spell.quantity = quantity;
                Ok(())
            }
        }
    }
}
