//! CLI frontend for the Sheetforge character-sheet manager.

mod commands;
mod sink;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sheetforge",
    about = "Sheetforge — character sheets and tabletop roll commands",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new character sheet
    New {
        /// Character name
        name: String,

        /// Sheet file to create
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Display the character sheet
    Show {
        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Set a stat value
    Stat {
        /// Stat key (e.g. strength, AC)
        key: String,

        /// New value
        value: i32,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Manage conditions
    Condition {
        #[command(subcommand)]
        action: commands::condition::ConditionAction,
    },

    /// Damage, heal, spend, or restore hit points
    Hp {
        #[command(subcommand)]
        action: commands::pool::PoolAction,
    },

    /// Damage, heal, spend, or restore mana
    Mana {
        #[command(subcommand)]
        action: commands::pool::PoolAction,
    },

    /// Manage spells
    Spell {
        #[command(subcommand)]
        action: commands::spell::SpellAction,
    },

    /// Manage abilities and weapons
    Ability {
        #[command(subcommand)]
        action: commands::ability::AbilityAction,
    },

    /// Roll a stat check
    Check {
        /// Stat key to check
        stat: String,

        /// Difficulty class; adds success/failure ranges to the roll
        #[arg(short, long)]
        dc: Option<u32>,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Roll a generic ability
    Roll {
        /// Ability name
        name: String,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Roll a weapon attack
    Attack {
        /// Weapon name
        name: String,

        /// Attack index in a multi-attack sequence (0 = base attack)
        #[arg(short, long, default_value = "0")]
        attack: usize,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Cast a spell (spends one charge)
    Cast {
        /// Spell name
        name: String,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Validate and locally evaluate a dice expression
    Preview {
        /// Dice expression (e.g. "1d20+[strength]")
        expression: String,

        /// RNG seed for a reproducible preview roll
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New { name, sheet } => commands::new::run(&name, &sheet),
        Commands::Show { sheet } => commands::show::run(&sheet),
        Commands::Stat { key, value, sheet } => commands::stat::run(&key, value, &sheet),
        Commands::Condition { action } => commands::condition::run(action),
        Commands::Hp { action } => commands::pool::run(commands::pool::PoolKind::Hp, action),
        Commands::Mana { action } => commands::pool::run(commands::pool::PoolKind::Mana, action),
        Commands::Spell { action } => commands::spell::run(action),
        Commands::Ability { action } => commands::ability::run(action),
        Commands::Check { stat, dc, sheet } => commands::check::run(&stat, dc, &sheet),
        Commands::Roll { name, sheet } => commands::roll::run(&name, &sheet),
        Commands::Attack {
            name,
            attack,
            sheet,
        } => commands::attack::run(&name, attack, &sheet),
        Commands::Cast { name, sheet } => commands::cast::run(&name, &sheet),
        Commands::Preview {
            expression,
            seed,
            sheet,
        } => commands::preview::run(&expression, seed, &sheet),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
