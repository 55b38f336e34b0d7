use std::path::Path;

use sf_core::Sheet;

pub fn run(name: &str, path: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!(
            "{} already exists; delete it first or pick another --sheet path",
            path.display()
        ));
    }

    let sheet = Sheet::new(name);
    super::save_sheet(&sheet, path)?;

    println!("Created sheet for '{name}' at {}", path.display());
    Ok(())
}
