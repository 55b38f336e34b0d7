//! Roll workflows: validate, build, emit.
//!
//! Each workflow runs the same machine: validate the inputs, assemble the
//! command, then emit it through a [`CommandSink`]. Validation failure stops
//! everything: no partial command, no state change. Emission is best-effort
//! notification: a sink failure downgrades the notification to danger but
//! never withdraws an already-committed state change (casting a spell spends
//! the charge even if the copy fails).

use sf_core::{Ability, CharacterStats, Spell, StateChange};

use crate::command::{
    ability_roll_command, spell_damage_command, stat_check_command, weapon_attack_command,
};
use crate::error::{RollError, RollResult};

/// A destination for finished command strings (clipboard, stdout, a test
/// recorder).
pub trait CommandSink {
    /// Deliver a finished command. May fail (e.g. clipboard denied).
    fn emit(&mut self, command: &str) -> Result<(), SinkError>;
}

/// Failure to deliver a command to its sink.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct SinkError(pub String);

/// How prominently a notification should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The operation completed.
    Success,
    /// The operation failed.
    Danger,
    /// The operation was refused but nothing broke.
    Warning,
}

/// A display request for the notification area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Icon glyph.
    pub icon: &'static str,
    /// Display severity.
    pub severity: Severity,
}

impl Notification {
    fn success(title: impl Into<String>, message: impl Into<String>, icon: &'static str) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            icon,
            severity: Severity::Success,
        }
    }

    fn copy_failed() -> Self {
        Self {
            title: "Copy failed".to_string(),
            message: "The command could not be copied".to_string(),
            icon: "⚠",
            severity: Severity::Danger,
        }
    }
}

/// The result of a completed workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    /// The rendered command string that was emitted.
    pub command: String,
    /// A state mutation for the caller to apply. Committed regardless of
    /// whether emission succeeded.
    pub change: Option<StateChange>,
    /// What to show the user.
    pub notification: Notification,
}

/// Emit a command and build the outcome, downgrading the notification on
/// sink failure. The change is already decided by this point.
fn emit(
    command: String,
    change: Option<StateChange>,
    notification: Notification,
    sink: &mut dyn CommandSink,
) -> RollOutcome {
    let notification = match sink.emit(&command) {
        Ok(()) => notification,
        Err(_) => Notification::copy_failed(),
    };
    RollOutcome {
        command,
        change,
        notification,
    }
}

/// Roll a weapon attack. `attack_index` 0 is the base attack; higher values
/// select follow-up attacks with their penalties.
pub fn weapon_attack(
    weapon: &Ability,
    attack_index: usize,
    stats: &CharacterStats,
    spells: &[Spell],
    sink: &mut dyn CommandSink,
) -> RollResult<RollOutcome> {
    let command = weapon_attack_command(weapon, attack_index, stats, spells)?.render();
    let notification = Notification::success(
        weapon.name.clone(),
        "Attack command copied",
        "⚔",
    );
    Ok(emit(command, None, notification, sink))
}

/// Roll a generic ability.
pub fn ability_roll(
    ability: &Ability,
    stats: &CharacterStats,
    spells: &[Spell],
    sink: &mut dyn CommandSink,
) -> RollResult<RollOutcome> {
    let command = ability_roll_command(ability, stats, spells)?.render();
    let notification = Notification::success(ability.name.clone(), "Roll command copied", "🎲");
    Ok(emit(command, None, notification, sink))
}

/// Cast a spell: refuse at zero charges, otherwise build the damage command
/// and commit a one-charge decrement.
///
/// The decrement ships in the outcome before the sink runs, so a failed copy
/// still spends the charge.
pub fn cast_spell(
    spell: &Spell,
    stats: &CharacterStats,
    spells: &[Spell],
    sink: &mut dyn CommandSink,
) -> RollResult<RollOutcome> {
    if spell.quantity == 0 {
        return Err(RollError::NoChargesRemaining);
    }

    let command = spell_damage_command(spell, stats, spells)?.render();
    let remaining = spell.quantity - 1;
    let change = StateChange::SpellQuantity {
        id: spell.id,
        quantity: remaining,
    };
    let notification = Notification::success(
        spell.name.clone(),
        format!("Cast — {remaining} charges remaining"),
        "✨",
    );
    Ok(emit(command, Some(change), notification, sink))
}

/// Roll a stat check, optionally against a DC.
pub fn stat_check(
    stat_key: &str,
    dc: Option<u32>,
    stats: &CharacterStats,
    spells: &[Spell],
    sink: &mut dyn CommandSink,
) -> RollResult<RollOutcome> {
    let command = stat_check_command(stat_key, dc, stats, spells)?.render();
    let notification =
        Notification::success("Stat check", "Check command copied", "🎲");
    Ok(emit(command, None, notification, sink))
}
