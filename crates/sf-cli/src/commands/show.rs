use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sf_core::{ConditionEffectResult, Pool, descriptor};
use sf_roll::resolve_stat;

pub fn run(path: &Path) -> Result<(), String> {
    let sheet = super::load_sheet(path)?;
    let effects = ConditionEffectResult::from_stats(&sheet.stats);

    println!("  {}", sheet.name.bold());
    println!(
        "  HP {} {}   Mana {} {}",
        sheet.hp,
        meter(&sheet.hp),
        sheet.mana,
        meter(&sheet.mana)
    );

    let base_ac = sheet.stats.get("AC").unwrap_or(0);
    let base_speed = sheet.stats.get("speed").unwrap_or(0);
    println!(
        "  AC {}   Speed {}",
        effective_display(base_ac, effects.effective_ac(base_ac)),
        effective_display(base_speed, effects.effective_speed(base_speed)),
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Base", "Effective"]);
    for (key, value) in &sheet.stats.values {
        if descriptor::descriptor(key).is_some_and(|d| d.core) {
            continue;
        }
        let effective = resolve_stat(key, &sheet.stats, &sheet.spells);
        table.add_row(vec![
            descriptor::display_name(key).to_string(),
            value.to_string(),
            effective.to_string(),
        ]);
    }
    println!("{table}");
    println!(
        "  Point total: {}",
        descriptor::point_total(&sheet.stats)
    );

    if sheet.stats.conditions.is_empty() {
        println!("  No active conditions.");
    } else {
        let listed: Vec<String> = sheet
            .stats
            .active_conditions()
            .map(|(name, stacks)| {
                if stacks > 1 {
                    format!("{name} x{stacks}")
                } else {
                    name.to_string()
                }
            })
            .collect();
        println!("  Conditions: {}", listed.join(", ").yellow());
    }

    if !sheet.spells.is_empty() {
        println!();
        println!("  {}", "Spells".bold());
        for spell in &sheet.spells {
            let link = match (&spell.is_linked, &spell.linked_stat) {
                (true, Some(stat)) => format!("  → {stat}"),
                _ => String::new(),
            };
            println!(
                "    {} {} (power {}, rank {}, {} charges){}",
                sf_roll::element_icon(&spell.element),
                spell.name,
                spell.power,
                spell.rank(),
                spell.quantity,
                link.dimmed(),
            );
        }
    }

    if !sheet.abilities.is_empty() {
        println!();
        println!("  {}", "Abilities".bold());
        for ability in &sheet.abilities {
            let dice = ability.dice.as_deref().unwrap_or("—");
            println!(
                "    {} [{}] {}",
                ability.name,
                ability.kind,
                dice.dimmed()
            );
        }
    }

    Ok(())
}

/// Ten-cell fill meter for a pool.
fn meter(pool: &Pool) -> String {
    let filled = (pool.fraction() * 10.0).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

/// "base" or "base → effective" when conditions change the value.
fn effective_display(base: i32, effective: i32) -> String {
    if base == effective {
        base.to_string()
    } else {
        format!("{base} → {effective}")
    }
}
