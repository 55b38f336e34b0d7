//! Character model for Sheetforge.
//!
//! Stats, conditions, hit-point/mana pools, spells, abilities, and the JSON
//! sheet store. The roll pipeline in `sf-roll` reads these records as
//! immutable snapshots; all mutation happens here, either directly through
//! sheet methods or by applying a [`StateChange`] the pipeline hands back.

pub mod ability;
pub mod condition;
pub mod descriptor;
pub mod error;
pub mod pool;
pub mod spell;
pub mod stats;
pub mod store;

pub use ability::{Ability, AbilityKind, AdditionalAttack};
pub use condition::{ConditionEffect, ConditionEffectResult};
pub use descriptor::{StatCategory, StatDescriptor};
pub use error::{CoreError, CoreResult};
pub use pool::Pool;
pub use spell::{MAX_SPELL_STACKS, Spell};
pub use stats::CharacterStats;
pub use store::{Sheet, StateChange};
