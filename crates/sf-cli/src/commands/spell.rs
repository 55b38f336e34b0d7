use std::path::PathBuf;

use clap::Subcommand;
use comfy_table::{ContentArrangement, Table};

use sf_core::Spell;
use sf_roll::validate;

#[derive(Subcommand)]
pub enum SpellAction {
    /// Add a spell to the sheet
    Add {
        /// Spell name
        name: String,

        /// Damage dice expression (may use [stat] placeholders)
        #[arg(short, long)]
        dice: String,

        /// Starting charges
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// Spell power (level), at least 1
        #[arg(short, long, default_value = "1")]
        power: u32,

        /// Element tag (e.g. fire)
        #[arg(short, long, default_value = "")]
        element: String,

        /// Action cost (0 = free action)
        #[arg(short, long, default_value = "1")]
        actions: u32,

        /// Flavor text
        #[arg(long, default_value = "")]
        description: String,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Remove a spell by name
    Remove {
        /// Spell name
        name: String,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Link a spell to a stat (grants the stat a charge-scaled bonus)
    Link {
        /// Spell name
        name: String,

        /// Stat key to link to
        stat: String,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Clear a spell's stat link
    Unlink {
        /// Spell name
        name: String,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// List spells
    List {
        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },
}

pub fn run(action: SpellAction) -> Result<(), String> {
    match action {
        SpellAction::Add {
            name,
            dice,
            quantity,
            power,
            element,
            actions,
            description,
            sheet: path,
        } => {
            let mut sheet = super::load_sheet(&path)?;

            // Validate at save time so the sheet never holds a dice string
            // its own stats cannot substitute.
            let verdict = validate(&dice, &sheet.stats);
            if let Some(error) = verdict.error {
                return Err(error);
            }

            let spell = Spell::new(&name, quantity, power, dice, element, actions)
                .map_err(|e| e.to_string())?
                .with_description(description);
            sheet.spells.push(spell);
            super::save_sheet(&sheet, &path)?;
            println!("Added spell '{name}'");
            Ok(())
        }
        SpellAction::Remove { name, sheet: path } => {
            let mut sheet = super::load_sheet(&path)?;
            let id = spell_id(&sheet, &name)?;
            sheet.remove_spell(id).map_err(|e| e.to_string())?;
            super::save_sheet(&sheet, &path)?;
            println!("Removed spell '{name}'");
            Ok(())
        }
        SpellAction::Link {
            name,
            stat,
            sheet: path,
        } => {
            let mut sheet = super::load_sheet(&path)?;
            if !sheet.stats.contains(&stat) {
                return Err(format!("Unknown stats: {stat}"));
            }
            let id = spell_id(&sheet, &name)?;
            sheet.link_spell(id, &stat).map_err(|e| e.to_string())?;
            super::save_sheet(&sheet, &path)?;
            println!("Linked '{name}' to {stat}");
            Ok(())
        }
        SpellAction::Unlink { name, sheet: path } => {
            let mut sheet = super::load_sheet(&path)?;
            let id = spell_id(&sheet, &name)?;
            sheet.unlink_spell(id).map_err(|e| e.to_string())?;
            super::save_sheet(&sheet, &path)?;
            println!("Unlinked '{name}'");
            Ok(())
        }
        SpellAction::List { sheet: path } => {
            let sheet = super::load_sheet(&path)?;
            if sheet.spells.is_empty() {
                println!("No spells.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec![
                "Name", "Dice", "Charges", "Power", "Rank", "Element", "Linked",
            ]);
            for spell in &sheet.spells {
                table.add_row(vec![
                    spell.name.clone(),
                    spell.dice.clone(),
                    spell.quantity.to_string(),
                    spell.power.to_string(),
                    spell.rank().to_string(),
                    spell.element.clone(),
                    spell.linked_stat.clone().unwrap_or_else(|| "—".to_string()),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}

fn spell_id(sheet: &sf_core::Sheet, name: &str) -> Result<uuid::Uuid, String> {
    sheet
        .spell_by_name(name)
        .map(|s| s.id)
        .ok_or_else(|| format!("spell not found: \"{name}\""))
}
