//! Character stats and active conditions.
//!
//! Stats are an open string-keyed map so homebrew sheets can carry keys the
//! default block does not know about. Conditions live in a nested map of
//! stack counts; a missing entry and a zero count both mean "inactive".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A character's stat block plus active conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    /// Stat key to value (e.g. `"strength"` to 4).
    pub values: BTreeMap<String, i32>,
    /// Condition name to stack count. Zero or absent means inactive.
    #[serde(default)]
    pub conditions: BTreeMap<String, u32>,
}

impl CharacterStats {
    /// Create an empty stat block with no conditions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the default stat block: six point-buy stats at 0 plus the
    /// derived core stats AC and speed.
    pub fn standard() -> Self {
        let mut stats = Self::new();
        for key in crate::descriptor::STAT_KEYS {
            stats.values.insert((*key).to_string(), 0);
        }
        stats.values.insert("AC".to_string(), 10);
        stats.values.insert("speed".to_string(), 30);
        stats
    }

    /// Get a stat value, if the key exists.
    pub fn get(&self, key: &str) -> Option<i32> {
        self.values.get(key).copied()
    }

    /// Returns true if the stat key exists on this sheet.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Set a stat value, creating the key if needed.
    pub fn set(&mut self, key: impl Into<String>, value: i32) {
        self.values.insert(key.into(), value);
    }

    /// Current stack count for a condition (0 if inactive).
    pub fn condition_stacks(&self, name: &str) -> u32 {
        self.conditions.get(name).copied().unwrap_or(0)
    }

    /// Add stacks of a condition.
    pub fn add_condition(&mut self, name: impl Into<String>, stacks: u32) {
        if stacks == 0 {
            return;
        }
        *self.conditions.entry(name.into()).or_insert(0) += stacks;
    }

    /// Remove stacks of a condition, dropping the entry at zero.
    pub fn remove_condition(&mut self, name: &str, stacks: u32) {
        let Some(current) = self.conditions.get_mut(name) else {
            return;
        };
        *current = current.saturating_sub(stacks);
        if *current == 0 {
            self.conditions.remove(name);
        }
    }

    /// Remove all conditions.
    pub fn clear_conditions(&mut self) {
        self.conditions.clear();
    }

    /// Condition names with at least one active stack.
    pub fn active_conditions(&self) -> impl Iterator<Item = (&str, u32)> {
        self.conditions
            .iter()
            .filter(|(_, stacks)| **stacks > 0)
            .map(|(name, stacks)| (name.as_str(), *stacks))
    }
}
