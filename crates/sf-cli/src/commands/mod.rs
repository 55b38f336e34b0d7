//! CLI subcommands. Each module exposes a `run` function returning
//! `Result<(), String>`; errors surface through `main` as `error: ...`.

pub mod ability;
pub mod attack;
pub mod cast;
pub mod check;
pub mod condition;
pub mod new;
pub mod pool;
pub mod preview;
pub mod roll;
pub mod show;
pub mod spell;
pub mod stat;

use std::path::Path;

use sf_core::Sheet;
use sf_roll::RollOutcome;

use crate::sink;

/// Load the sheet, mapping the missing-file case to a hint.
pub fn load_sheet(path: &Path) -> Result<Sheet, String> {
    Sheet::load(path).map_err(|e| match e {
        sf_core::CoreError::SheetNotFound(_) => {
            format!("{e}. Create one with: sheetforge new <name>")
        }
        other => other.to_string(),
    })
}

/// Save the sheet back to disk.
pub fn save_sheet(sheet: &Sheet, path: &Path) -> Result<(), String> {
    sheet.save(path).map_err(|e| e.to_string())
}

/// Apply a workflow outcome: persist any requested state change, then show
/// the notification. The change is committed even when emission failed.
pub fn finish_roll(
    sheet: &mut Sheet,
    path: &Path,
    outcome: &RollOutcome,
) -> Result<(), String> {
    if let Some(change) = outcome.change {
        sheet.apply(change).map_err(|e| e.to_string())?;
        save_sheet(sheet, path)?;
    }
    sink::notify(&outcome.notification);
    Ok(())
}
