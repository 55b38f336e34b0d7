use std::path::PathBuf;

use clap::Subcommand;

use sf_core::condition;

#[derive(Subcommand)]
pub enum ConditionAction {
    /// Add stacks of a condition
    Add {
        /// Condition name (e.g. poisoned, prone)
        name: String,

        /// Number of stacks to add
        #[arg(long, default_value = "1")]
        stacks: u32,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Remove stacks of a condition
    Remove {
        /// Condition name
        name: String,

        /// Number of stacks to remove
        #[arg(long, default_value = "1")]
        stacks: u32,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Clear all conditions
    Clear {
        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// List conditions the effect table knows about
    Known,
}

pub fn run(action: ConditionAction) -> Result<(), String> {
    match action {
        ConditionAction::Add {
            name,
            stacks,
            sheet: path,
        } => {
            let mut sheet = super::load_sheet(&path)?;
            if condition::effect(&name).is_none() {
                eprintln!("note: '{name}' is not in the effect table; it will be tracked but has no modifiers");
            }
            sheet.stats.add_condition(&name, stacks);
            super::save_sheet(&sheet, &path)?;
            println!(
                "{name}: {} stacks active",
                sheet.stats.condition_stacks(&name)
            );
            Ok(())
        }
        ConditionAction::Remove {
            name,
            stacks,
            sheet: path,
        } => {
            let mut sheet = super::load_sheet(&path)?;
            sheet.stats.remove_condition(&name, stacks);
            super::save_sheet(&sheet, &path)?;
            let left = sheet.stats.condition_stacks(&name);
            if left == 0 {
                println!("{name}: cleared");
            } else {
                println!("{name}: {left} stacks active");
            }
            Ok(())
        }
        ConditionAction::Clear { sheet: path } => {
            let mut sheet = super::load_sheet(&path)?;
            sheet.stats.clear_conditions();
            super::save_sheet(&sheet, &path)?;
            println!("All conditions cleared.");
            Ok(())
        }
        ConditionAction::Known => {
            for name in condition::known_conditions() {
                println!("{name}");
            }
            Ok(())
        }
    }
}
