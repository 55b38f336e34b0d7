use std::path::Path;

use sf_core::AbilityKind;

use crate::sink::StdoutSink;

pub fn run(name: &str, attack_index: usize, path: &Path) -> Result<(), String> {
    let mut sheet = super::load_sheet(path)?;
    let weapon = sheet
        .ability_by_name(name)
        .cloned()
        .ok_or_else(|| format!("weapon not found: \"{name}\""))?;
    if weapon.kind != AbilityKind::Weapon {
        return Err(format!("'{name}' is not a weapon; use `sheetforge roll`"));
    }

    let mut sink = StdoutSink;
    let outcome = sf_roll::weapon_attack(&weapon, attack_index, &sheet.stats, &sheet.spells, &mut sink)
        .map_err(|e| e.to_string())?;
    super::finish_roll(&mut sheet, path, &outcome)
}
