use std::path::Path;

use sf_roll::{Notification, RollError, Severity};

use crate::sink;
use crate::sink::StdoutSink;

pub fn run(name: &str, path: &Path) -> Result<(), String> {
    let mut sheet = super::load_sheet(path)?;
    let spell = sheet
        .spell_by_name(name)
        .cloned()
        .ok_or_else(|| format!("spell not found: \"{name}\""))?;

    let mut sink = StdoutSink;
    match sf_roll::cast_spell(&spell, &sheet.stats, &sheet.spells, &mut sink) {
        Ok(outcome) => super::finish_roll(&mut sheet, path, &outcome),
        // A refusal, not a failure: nothing was spent and nothing broke.
        Err(RollError::NoChargesRemaining) => {
            sink::notify(&Notification {
                title: spell.name.clone(),
                message: "No charges remaining".to_string(),
                icon: "⚠",
                severity: Severity::Warning,
            });
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}
