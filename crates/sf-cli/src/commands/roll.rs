use std::path::Path;

use crate::sink::StdoutSink;

pub fn run(name: &str, path: &Path) -> Result<(), String> {
    let mut sheet = super::load_sheet(path)?;
    let ability = sheet
        .ability_by_name(name)
        .cloned()
        .ok_or_else(|| format!("ability not found: \"{name}\""))?;

    let mut sink = StdoutSink;
    let outcome = sf_roll::ability_roll(&ability, &sheet.stats, &sheet.spells, &mut sink)
        .map_err(|e| e.to_string())?;
    super::finish_roll(&mut sheet, path, &outcome)
}
