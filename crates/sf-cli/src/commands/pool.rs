use std::path::PathBuf;

use clap::Subcommand;

use sf_core::{Pool, Sheet};

/// Which resource pool a subcommand targets.
#[derive(Clone, Copy)]
pub enum PoolKind {
    Hp,
    Mana,
}

impl PoolKind {
    fn label(self) -> &'static str {
        match self {
            PoolKind::Hp => "HP",
            PoolKind::Mana => "Mana",
        }
    }

    fn of(self, sheet: &mut Sheet) -> &mut Pool {
        match self {
            PoolKind::Hp => &mut sheet.hp,
            PoolKind::Mana => &mut sheet.mana,
        }
    }
}

#[derive(Subcommand)]
pub enum PoolAction {
    /// Subtract from the pool (floors at 0)
    Damage {
        /// Amount to subtract
        amount: u32,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Add to the pool (caps at max)
    Heal {
        /// Amount to add
        amount: u32,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Spend from the pool, refusing if not enough remains
    Spend {
        /// Amount to spend
        amount: u32,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Refill the pool to its maximum
    Restore {
        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },

    /// Change the maximum, clamping the current value into range
    SetMax {
        /// New maximum
        max: u32,

        /// Sheet file
        #[arg(short, long, default_value = "sheet.json")]
        sheet: PathBuf,
    },
}

pub fn run(kind: PoolKind, action: PoolAction) -> Result<(), String> {
    match action {
        PoolAction::Damage {
            amount,
            sheet: path,
        } => {
            let mut sheet = super::load_sheet(&path)?;
            let pool = kind.of(&mut sheet);
            pool.damage(amount);
            let display = pool.to_string();
            let emptied = pool.is_empty();
            super::save_sheet(&sheet, &path)?;
            println!("{} {display}", kind.label());
            if emptied {
                eprintln!("{} is at zero!", kind.label());
            }
            Ok(())
        }
        PoolAction::Heal {
            amount,
            sheet: path,
        } => {
            let mut sheet = super::load_sheet(&path)?;
            let pool = kind.of(&mut sheet);
            pool.heal(amount);
            let display = pool.to_string();
            let full = pool.is_full();
            super::save_sheet(&sheet, &path)?;
            if full {
                println!("{} {display} (full)", kind.label());
            } else {
                println!("{} {display}", kind.label());
            }
            Ok(())
        }
        PoolAction::Spend {
            amount,
            sheet: path,
        } => {
            let mut sheet = super::load_sheet(&path)?;
            let pool = kind.of(&mut sheet);
            if !pool.spend(amount) {
                return Err(format!(
                    "not enough {}: {pool} available",
                    kind.label()
                ));
            }
            let display = pool.to_string();
            super::save_sheet(&sheet, &path)?;
            println!("{} {display}", kind.label());
            Ok(())
        }
        PoolAction::Restore { sheet: path } => {
            let mut sheet = super::load_sheet(&path)?;
            let pool = kind.of(&mut sheet);
            pool.restore();
            let display = pool.to_string();
            super::save_sheet(&sheet, &path)?;
            println!("{} {display}", kind.label());
            Ok(())
        }
        PoolAction::SetMax { max, sheet: path } => {
            let mut sheet = super::load_sheet(&path)?;
            let pool = kind.of(&mut sheet);
            pool.resize(max);
            let display = pool.to_string();
            super::save_sheet(&sheet, &path)?;
            println!("{} {display}", kind.label());
            Ok(())
        }
    }
}
