//! Static stat descriptors.
//!
//! Descriptors are a read-only lookup table: display name, short name used in
//! roll-command segments, category, and whether the stat is a derived core
//! stat excluded from point totals.

use crate::stats::CharacterStats;

/// The six point-buy stat keys in display order.
pub const STAT_KEYS: &[&str] = &[
    "strength",
    "dexterity",
    "constitution",
    "intelligence",
    "wisdom",
    "charisma",
];

/// Broad grouping of a stat for sheet display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatCategory {
    /// Point-buy stats raised by the player.
    Attribute,
    /// Stats derived from equipment and conditions.
    Derived,
}

/// Display metadata for a single stat key.
#[derive(Debug, Clone, Copy)]
pub struct StatDescriptor {
    /// The canonical sheet key.
    pub key: &'static str,
    /// Full display name.
    pub display: &'static str,
    /// Short name used in command segments (e.g. `STR`).
    pub short: &'static str,
    /// Category for grouping in sheet display.
    pub category: StatCategory,
    /// Derived core stats are excluded from point totals.
    pub core: bool,
}

const DESCRIPTORS: &[StatDescriptor] = &[
    StatDescriptor {
        key: "strength",
        display: "Strength",
        short: "STR",
        category: StatCategory::Attribute,
        core: false,
    },
    StatDescriptor {
        key: "dexterity",
        display: "Dexterity",
        short: "DEX",
        category: StatCategory::Attribute,
        core: false,
    },
    StatDescriptor {
        key: "constitution",
        display: "Constitution",
        short: "CON",
        category: StatCategory::Attribute,
        core: false,
    },
    StatDescriptor {
        key: "intelligence",
        display: "Intelligence",
        short: "INT",
        category: StatCategory::Attribute,
        core: false,
    },
    StatDescriptor {
        key: "wisdom",
        display: "Wisdom",
        short: "WIS",
        category: StatCategory::Attribute,
        core: false,
    },
    StatDescriptor {
        key: "charisma",
        display: "Charisma",
        short: "CHA",
        category: StatCategory::Attribute,
        core: false,
    },
    StatDescriptor {
        key: "AC",
        display: "Armor Class",
        short: "AC",
        category: StatCategory::Derived,
        core: true,
    },
    StatDescriptor {
        key: "speed",
        display: "Speed",
        short: "SPD",
        category: StatCategory::Derived,
        core: true,
    },
];

/// Look up the descriptor for a stat key. Unknown keys return `None`;
/// homebrew stats fall back to the raw key for display.
pub fn descriptor(key: &str) -> Option<&'static StatDescriptor> {
    DESCRIPTORS.iter().find(|d| d.key == key)
}

/// Short name for a stat key, falling back to the key itself.
pub fn short_name(key: &str) -> &str {
    descriptor(key).map_or(key, |d| d.short)
}

/// Display name for a stat key, falling back to the key itself.
pub fn display_name(key: &str) -> &str {
    descriptor(key).map_or(key, |d| d.display)
}

/// Sum of all non-core stat values, for point-buy accounting.
pub fn point_total(stats: &CharacterStats) -> i32 {
    stats
        .values
        .iter()
        .filter(|(key, _)| descriptor(key).is_none_or(|d| !d.core))
        .map(|(_, value)| value)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_descriptor() {
        let d = descriptor("strength").unwrap();
        assert_eq!(d.display, "Strength");
        assert_eq!(d.short, "STR");
        assert!(!d.core);
    }

    #[test]
    fn core_stats_flagged() {
        assert!(descriptor("AC").unwrap().core);
        assert!(descriptor("speed").unwrap().core);
    }

    #[test]
    fn unknown_key_falls_back() {
        assert!(descriptor("luck").is_none());
        assert_eq!(short_name("luck"), "luck");
        assert_eq!(display_name("luck"), "luck");
    }

    #[test]
    fn point_total_excludes_core() {
        let mut stats = CharacterStats::standard();
        stats.set("strength", 4);
        stats.set("dexterity", 3);
        // AC 10 and speed 30 are core and must not count.
        assert_eq!(point_total(&stats), 7);
    }

    #[test]
    fn point_total_counts_homebrew() {
        let mut stats = CharacterStats::new();
        stats.set("luck", 2);
        assert_eq!(point_total(&stats), 2);
    }
}
