use std::path::Path;

use crate::sink::StdoutSink;

pub fn run(stat: &str, dc: Option<u32>, path: &Path) -> Result<(), String> {
    let mut sheet = super::load_sheet(path)?;
    let mut sink = StdoutSink;
    let outcome = sf_roll::stat_check(stat, dc, &sheet.stats, &sheet.spells, &mut sink)
        .map_err(|e| e.to_string())?;
    super::finish_roll(&mut sheet, path, &outcome)
}
