use std::path::PathBuf;

use clap::Subcommand;
use comfy_table::{ContentArrangement, Table};

use sf_core::{Ability, AbilityKind};
use sf_roll::validate;

#[derive(Subcommand)]
pub enum AbilityAction {
    /// Add an ability or weapon to the sheet
    Add {
        /// Ability name
        name: String,

        /// Mark as a weapon (requires --dice)
        #[arg(short, long)]
        weapon: bool,

        /// Dice expression; required for weapons
        #[arg(short, long)]
        dice: Option<String>,

        /// Element tag (e.g. fire)
        #[arg(short, long, default_value = "")]
        element: String,

        /// Action cost (0 = free action)
        #[arg(short, long, default_value = "1")]
        actions: u32,

        /// Flavor text
        #[arg(long, default_value = "")]
        description: String,

        /// Follow-up attack penalty; repeat for each extra attack
        #[arg(short, long = "penalty", allow_hyphen_values = true)]
        penalty: Vec<i32>,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Remove an ability by name
    Remove {
        /// Ability name
        name: String,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// List abilities and weapons
    List {
        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },
}

pub fn run(action: AbilityAction) -> Result<(), String> {
    match action {
        AbilityAction::Add {
            name,
            weapon,
            dice,
            element,
            actions,
            description,
            penalty,
            sheet: path,
        } => {
            let mut sheet = super::load_sheet(&path)?;

            if let Some(expr) = &dice {
                let verdict = validate(expr, &sheet.stats);
                if let Some(error) = verdict.error {
                    return Err(error);
                }
            }

            let kind = if weapon {
                AbilityKind::Weapon
            } else {
                AbilityKind::Ability
            };
            let mut ability = Ability::new(&name, kind, dice, element, actions)
                .map_err(|e| e.to_string())?
                .with_description(description);
            for p in penalty {
                ability = ability.with_additional_attack(p);
            }
            sheet.abilities.push(ability);
            super::save_sheet(&sheet, &path)?;
            println!("Added {kind} '{name}'");
            Ok(())
        }
        AbilityAction::Remove { name, sheet: path } => {
            let mut sheet = super::load_sheet(&path)?;
            let id = sheet
                .ability_by_name(&name)
                .map(|a| a.id)
                .ok_or_else(|| format!("ability not found: \"{name}\""))?;
            sheet.remove_ability(id).map_err(|e| e.to_string())?;
            super::save_sheet(&sheet, &path)?;
            println!("Removed '{name}'");
            Ok(())
        }
        AbilityAction::List { sheet: path } => {
            let sheet = super::load_sheet(&path)?;
            if sheet.abilities.is_empty() {
                println!("No abilities.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Name", "Kind", "Dice", "Actions", "Attacks", "Element"]);
            for ability in &sheet.abilities {
                table.add_row(vec![
                    ability.name.clone(),
                    ability.kind.to_string(),
                    ability.dice.clone().unwrap_or_default(),
                    ability.action_cost.to_string(),
                    ability.attack_count().to_string(),
                    ability.element.clone(),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}
