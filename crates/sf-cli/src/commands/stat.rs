use std::path::Path;

use sf_core::descriptor;

pub fn run(key: &str, value: i32, path: &Path) -> Result<(), String> {
    let mut sheet = super::load_sheet(path)?;

    let known = sheet.stats.contains(key);
    sheet.stats.set(key, value);
    super::save_sheet(&sheet, path)?;

    if known {
        println!("{} set to {value}", descriptor::display_name(key));
    } else {
        println!("Added new stat '{key}' at {value}");
    }
    Ok(())
}
