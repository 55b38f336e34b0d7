use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use sf_dice::diagnostics::render_parse_error;
use sf_roll::{resolve_stat, substitute};

/// Validate an expression against the sheet, show both substitution modes,
/// and roll it locally with a seeded RNG.
pub fn run(expression: &str, seed: u64, path: &Path) -> Result<(), String> {
    let sheet = super::load_sheet(path)?;

    let expr = match sf_dice::parse(expression) {
        Ok(expr) => expr,
        Err(error) => {
            eprintln!("{}", render_parse_error(expression, &error));
            return Err("Invalid dice format. Use format like '1d6+[statName]' or '2d8+3'".to_string());
        }
    };

    let verdict = sf_roll::validate(expression, &sheet.stats);
    if let Some(error) = verdict.error {
        return Err(error);
    }

    if !expr.has_dice() {
        eprintln!("note: no dice terms; the total is the same on every roll");
    }

    let annotated = substitute(expression, &sheet.stats, &sheet.spells, false);
    let friendly = substitute(expression, &sheet.stats, &sheet.spells, true);
    println!("expression: {expression}");
    println!("annotated:  {annotated}");
    println!("friendly:   {friendly}");

    let mut rng = StdRng::seed_from_u64(seed);
    let resolve = |name: &str| i64::from(resolve_stat(name, &sheet.stats, &sheet.spells));
    let total = sf_dice::eval(&expr, &mut rng, &resolve).map_err(|e| e.to_string())?;
    println!("total:      {total} (seed {seed})");
    Ok(())
}
