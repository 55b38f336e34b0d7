//! Roll pipeline for Sheetforge.
//!
//! Turns dice expressions with `[stat]` placeholders into finished
//! virtual-tabletop commands: resolve stats (base + spell-link bonus),
//! validate the expression, substitute placeholders, assemble typed command
//! segments, and run the validate→build→emit workflows. State is read as
//! immutable snapshots; the single game-state side effect (spell charge
//! decrement) is returned as a [`sf_core::StateChange`] for the caller to
//! apply.

pub mod command;
pub mod error;
pub mod resolver;
pub mod substitute;
pub mod validate;
pub mod workflow;

pub use command::{RollCommand, Segment, element_icon};
pub use error::{RollError, RollResult};
pub use resolver::resolve_stat;
pub use substitute::substitute;
pub use validate::{Validation, check, validate};
pub use workflow::{
    CommandSink, Notification, RollOutcome, Severity, SinkError, ability_roll, cast_spell,
    stat_check, weapon_attack,
};
