//! Roll-command assembly.
//!
//! A command is an ordered list of typed segments rendered in one pass into
//! the tabletop's template grammar:
//!
//! ```text
//! &{template:default} {{name=...}} {{Attack=[[1d20+5[strength]]]}} ...
//! ```
//!
//! Double-bracketed sub-expressions are left for the receiving tool's dice
//! engine; this module never evaluates a roll. Segment order in the output
//! is fixed by the segment type, not by build order.

use sf_core::{Ability, CharacterStats, ConditionEffectResult, Spell, descriptor};

use crate::error::{RollError, RollResult};
use crate::resolver::resolve_stat;
use crate::substitute::substitute;
use crate::validate::check;

/// The template selector every command opens with.
const TEMPLATE: &str = "&{template:default}";

/// The fixed stat backing a spell's attack roll.
const SPELL_ATTACK_DICE: &str = "1d20+[strength]";

/// One typed segment of a roll command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// The roll's display name. Required, always first.
    Name(String),
    /// Action cost ("Free Action", "2 Actions").
    Actions(String),
    /// Spell power and derived rank.
    Level {
        /// Spell power (level).
        power: u32,
        /// Derived rank tier (1-5).
        rank: u32,
    },
    /// An attack roll; `number` is the 1-based attack ordinal for
    /// multi-attack sequences (absent for the base attack).
    Attack {
        /// 1-based attack number, when past the base attack.
        number: Option<usize>,
        /// Substituted dice expression, penalty suffix included.
        expr: String,
    },
    /// A generic roll.
    Roll(String),
    /// Spell damage with an optional element tag.
    Damage {
        /// Substituted dice expression.
        expr: String,
        /// Element tag; empty means untyped.
        element: String,
    },
    /// A standalone element tag (weapon commands).
    Element(String),
    /// The spell-link bonus component of a stat check.
    StatBonus(String),
    /// Condition modifier applied to a stat check.
    ConditionModifier(i32),
    /// Flavor text.
    Description(String),
}

impl Segment {
    /// Fixed output position; render sorts by this, stably.
    fn order(&self) -> u8 {
        match self {
            Segment::Name(_) => 0,
            Segment::Actions(_) => 1,
            Segment::Level { .. } => 2,
            Segment::Attack { .. } => 3,
            Segment::Roll(_) => 4,
            Segment::Damage { .. } => 4,
            Segment::Element(_) => 4,
            Segment::StatBonus(_) => 5,
            Segment::ConditionModifier(_) => 6,
            Segment::Description(_) => 7,
        }
    }

    fn render(&self) -> String {
        match self {
            Segment::Name(name) => format!("{{{{name={name}}}}}"),
            Segment::Actions(text) => format!("{{{{Actions={text}}}}}"),
            Segment::Level { power, rank } => {
                format!("{{{{Level=Power {power} (Rank {rank})}}}}")
            }
            Segment::Attack { number, expr } => match number {
                Some(n) => format!("{{{{Attack {n}=[[{expr}]]}}}}"),
                None => format!("{{{{Attack=[[{expr}]]}}}}"),
            },
            Segment::Roll(expr) => format!("{{{{Roll=[[{expr}]]}}}}"),
            Segment::Damage { expr, element } => {
                if element.is_empty() {
                    format!("{{{{Damage=[[{expr}]]}}}}")
                } else {
                    format!("{{{{Damage=[[{expr}]] {}}}}}", element_tag(element))
                }
            }
            Segment::Element(element) => {
                format!("{{{{Element={}}}}}", element_tag(element))
            }
            Segment::StatBonus(text) => format!("{{{{Stat Bonus={text}}}}}"),
            Segment::ConditionModifier(n) => {
                format!("{{{{Condition Modifier={n:+}}}}}")
            }
            Segment::Description(text) => format!("{{{{Description={text}}}}}"),
        }
    }
}

/// Icon glyph for an element tag.
pub fn element_icon(element: &str) -> &'static str {
    match element.to_lowercase().as_str() {
        "fire" => "🔥",
        "ice" | "frost" => "❄️",
        "water" => "🌊",
        "lightning" | "storm" => "⚡",
        "earth" | "stone" => "🪨",
        "wind" | "air" => "🌪️",
        "light" | "holy" => "✨",
        "dark" | "shadow" => "🌑",
        "poison" => "☠️",
        _ => "✦",
    }
}

/// `icon name` pair shown in element and damage segments.
fn element_tag(element: &str) -> String {
    format!("{} {element}", element_icon(element))
}

/// An assembled roll command: the template selector plus ordered segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollCommand {
    segments: Vec<Segment>,
}

impl RollCommand {
    /// Start a command with its required name segment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Name(name.into())],
        }
    }

    /// Append a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Append a segment, builder style.
    pub fn with(mut self, segment: Segment) -> Self {
        self.push(segment);
        self
    }

    /// Render the finished command string in fixed segment order.
    pub fn render(&self) -> String {
        let mut ordered: Vec<&Segment> = self.segments.iter().collect();
        ordered.sort_by_key(|s| s.order());

        let mut out = String::from(TEMPLATE);
        for segment in ordered {
            out.push(' ');
            out.push_str(&segment.render());
        }
        out
    }
}

/// Action-cost display: 0 is a free action, otherwise "N Action(s)".
fn actions_text(cost: u32) -> String {
    match cost {
        0 => "Free Action".to_string(),
        1 => "1 Action".to_string(),
        n => format!("{n} Actions"),
    }
}

/// Build a weapon attack command.
///
/// `attack_index` 0 is the base attack; index `i > 0` uses
/// `additional_attacks[i-1]`, labeling the segment with the 1-based attack
/// number and appending the penalty as a signed suffix inside the roll.
pub fn weapon_attack_command(
    weapon: &Ability,
    attack_index: usize,
    stats: &CharacterStats,
    spells: &[Spell],
) -> RollResult<RollCommand> {
    let dice = weapon.dice.as_deref().unwrap_or("");
    check(dice, stats)?;

    if attack_index > weapon.additional_attacks.len() {
        return Err(RollError::UnknownAttackIndex {
            index: attack_index,
            available: weapon.attack_count(),
        });
    }

    let mut expr = substitute(dice, stats, spells, false);
    let number = if attack_index > 0 {
        let penalty = weapon.additional_attacks[attack_index - 1].penalty;
        expr.push_str(&format!("{penalty:+}"));
        Some(attack_index + 1)
    } else {
        None
    };

    let mut command = RollCommand::new(weapon.name.clone()).with(Segment::Attack { number, expr });
    if !weapon.element.is_empty() {
        command.push(Segment::Element(weapon.element.clone()));
    }
    command.push(Segment::Description(weapon.description.clone()));
    Ok(command)
}

/// Build a generic ability command. The roll segment is omitted entirely
/// when the ability declares no dice.
pub fn ability_roll_command(
    ability: &Ability,
    stats: &CharacterStats,
    spells: &[Spell],
) -> RollResult<RollCommand> {
    let mut command = RollCommand::new(ability.name.clone());
    if let Some(dice) = ability.dice.as_deref()
        && !dice.trim().is_empty()
    {
        check(dice, stats)?;
        command.push(Segment::Roll(substitute(dice, stats, spells, false)));
    }
    command.push(Segment::Description(ability.description.clone()));
    Ok(command)
}

/// Build a spell damage command. Charge accounting lives in the workflow;
/// this only assembles segments.
pub fn spell_damage_command(
    spell: &Spell,
    stats: &CharacterStats,
    spells: &[Spell],
) -> RollResult<RollCommand> {
    check(&spell.dice, stats)?;

    let mut command = RollCommand::new(spell.name.clone())
        .with(Segment::Actions(actions_text(spell.action_cost)))
        .with(Segment::Level {
            power: spell.power,
            rank: spell.rank(),
        })
        .with(Segment::Attack {
            number: None,
            expr: substitute(SPELL_ATTACK_DICE, stats, spells, false),
        })
        .with(Segment::Damage {
            expr: substitute(&spell.dice, stats, spells, false),
            element: spell.element.clone(),
        });
    if !spell.description.is_empty() {
        command.push(Segment::Description(spell.description.clone()));
    }
    Ok(command)
}

/// Build a stat-check command: `1d20` plus the resolved stat (base + link
/// bonus) plus the saving-throw condition modifier, with crit-range syntax
/// when a DC above 1 is supplied.
pub fn stat_check_command(
    stat_key: &str,
    dc: Option<u32>,
    stats: &CharacterStats,
    spells: &[Spell],
) -> RollResult<RollCommand> {
    if !stats.contains(stat_key) {
        return Err(RollError::UnknownStats(vec![stat_key.to_string()]));
    }

    let resolved = resolve_stat(stat_key, stats, spells);
    let link_bonus = resolved - stats.get(stat_key).unwrap_or(0);
    let condition = ConditionEffectResult::from_stats(stats).saving_throw_modifier;
    let total = resolved + condition;

    let name = match dc {
        Some(dc) if dc > 1 => format!("{} check vs DC {dc}", capitalize(stat_key)),
        _ => format!("{} check", capitalize(stat_key)),
    };

    let mut roll = format!("1d20{total:+}");
    if let Some(dc) = dc
        && dc > 1
    {
        roll.push_str(&format!(" cs>={dc} cf<{dc}"));
    }

    let mut command = RollCommand::new(name).with(Segment::Roll(roll));
    command.push(Segment::StatBonus(format!(
        "{link_bonus:+} ({})",
        descriptor::short_name(stat_key)
    )));
    if condition != 0 {
        command.push(Segment::ConditionModifier(condition));
    }
    Ok(command)
}

/// Uppercase the first character of a stat key for display.
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::AbilityKind;

    fn stats() -> CharacterStats {
        let mut stats = CharacterStats::new();
        stats.set("strength", 5);
        stats.set("dexterity", 3);
        stats
    }

    fn longsword() -> Ability {
        Ability::new(
            "Longsword",
            AbilityKind::Weapon,
            Some("1d20+[strength]".to_string()),
            "fire",
            1,
        )
        .unwrap()
        .with_description("A trusted blade.")
        .with_additional_attack(-5)
    }

    #[test]
    fn weapon_base_attack() {
        let command = weapon_attack_command(&longsword(), 0, &stats(), &[]).unwrap();
        insta::assert_snapshot!(
            command.render(),
            @"&{template:default} {{name=Longsword}} {{Attack=[[1d20+5[strength]]]}} {{Element=🔥 fire}} {{Description=A trusted blade.}}"
        );
    }

    #[test]
    fn weapon_additional_attack_applies_single_penalty() {
        let command = weapon_attack_command(&longsword(), 1, &stats(), &[]).unwrap();
        let rendered = command.render();
        assert!(rendered.contains("{{Attack 2=[[1d20+5[strength]-5]]}}"));
    }

    #[test]
    fn weapon_positive_penalty_keeps_sign() {
        let weapon = longsword().with_additional_attack(3);
        let command = weapon_attack_command(&weapon, 2, &stats(), &[]).unwrap();
        assert!(command.render().contains("{{Attack 3=[[1d20+5[strength]+3]]}}"));
    }

    #[test]
    fn weapon_attack_index_out_of_range() {
        let err = weapon_attack_command(&longsword(), 2, &stats(), &[]).unwrap_err();
        assert_eq!(
            err,
            RollError::UnknownAttackIndex {
                index: 2,
                available: 2
            }
        );
    }

    #[test]
    fn weapon_without_element_omits_segment() {
        let weapon = Ability::new(
            "Staff",
            AbilityKind::Weapon,
            Some("1d6".to_string()),
            "",
            1,
        )
        .unwrap();
        let rendered = weapon_attack_command(&weapon, 0, &stats(), &[])
            .unwrap()
            .render();
        assert!(!rendered.contains("Element"));
        assert!(rendered.contains("{{Description=}}"));
    }

    #[test]
    fn weapon_unknown_stat_rejected() {
        let weapon = Ability::new(
            "Cursed Blade",
            AbilityKind::Weapon,
            Some("1d20+[luck]".to_string()),
            "",
            1,
        )
        .unwrap();
        let err = weapon_attack_command(&weapon, 0, &stats(), &[]).unwrap_err();
        assert_eq!(err, RollError::UnknownStats(vec!["luck".to_string()]));
    }

    #[test]
    fn ability_with_dice() {
        let ability = Ability::new(
            "Shield Bash",
            AbilityKind::Ability,
            Some("1d4+[strength]".to_string()),
            "",
            1,
        )
        .unwrap()
        .with_description("Knock them back.");
        let command = ability_roll_command(&ability, &stats(), &[]).unwrap();
        insta::assert_snapshot!(
            command.render(),
            @"&{template:default} {{name=Shield Bash}} {{Roll=[[1d4+5[strength]]]}} {{Description=Knock them back.}}"
        );
    }

    #[test]
    fn ability_without_dice_omits_roll() {
        let ability = Ability::new("Taunt", AbilityKind::Ability, None, "", 0)
            .unwrap()
            .with_description("Draw their ire.");
        let rendered = ability_roll_command(&ability, &stats(), &[]).unwrap().render();
        assert_eq!(
            rendered,
            "&{template:default} {{name=Taunt}} {{Description=Draw their ire.}}"
        );
    }

    #[test]
    fn spell_damage_full_shape() {
        let spell = Spell::new("Fireball", 3, 5, "8d6+[intelligence]", "fire", 2)
            .unwrap()
            .with_description("A burst of flame.");
        let mut stats = stats();
        stats.set("intelligence", 4);
        let command = spell_damage_command(&spell, &stats, &[]).unwrap();
        insta::assert_snapshot!(
            command.render(),
            @"&{template:default} {{name=Fireball}} {{Actions=2 Actions}} {{Level=Power 5 (Rank 3)}} {{Attack=[[1d20+5[strength]]]}} {{Damage=[[8d6+4[intelligence]]] 🔥 fire}} {{Description=A burst of flame.}}"
        );
    }

    #[test]
    fn spell_free_action_and_no_description() {
        let spell = Spell::new("Spark", 1, 1, "1d4", "lightning", 0).unwrap();
        let rendered = spell_damage_command(&spell, &stats(), &[]).unwrap().render();
        assert!(rendered.contains("{{Actions=Free Action}}"));
        assert!(rendered.contains("{{Level=Power 1 (Rank 1)}}"));
        assert!(!rendered.contains("Description"));
    }

    #[test]
    fn single_action_is_singular() {
        assert_eq!(actions_text(1), "1 Action");
        assert_eq!(actions_text(0), "Free Action");
        assert_eq!(actions_text(3), "3 Actions");
    }

    #[test]
    fn stat_check_without_dc() {
        let command = stat_check_command("strength", None, &stats(), &[]).unwrap();
        insta::assert_snapshot!(
            command.render(),
            @"&{template:default} {{name=Strength check}} {{Roll=[[1d20+5]]}} {{Stat Bonus=+0 (STR)}}"
        );
    }

    #[test]
    fn stat_check_with_dc() {
        let command = stat_check_command("strength", Some(15), &stats(), &[]).unwrap();
        let rendered = command.render();
        assert!(rendered.contains("{{name=Strength check vs DC 15}}"));
        assert!(rendered.contains("{{Roll=[[1d20+5 cs>=15 cf<15]]}}"));
    }

    #[test]
    fn stat_check_dc_one_is_plain() {
        let rendered = stat_check_command("strength", Some(1), &stats(), &[])
            .unwrap()
            .render();
        assert!(rendered.contains("{{name=Strength check}}"));
        assert!(!rendered.contains("cs>="));
    }

    #[test]
    fn stat_check_includes_link_bonus() {
        let mut spell = Spell::new("Ember Ward", 10, 3, "2d6", "fire", 1).unwrap();
        spell.is_linked = true;
        spell.linked_stat = Some("strength".to_string());
        let rendered = stat_check_command("strength", None, &stats(), &[spell])
            .unwrap()
            .render();
        // base 5 + floor(10*2/5)=4
        assert!(rendered.contains("{{Roll=[[1d20+9]]}}"));
        assert!(rendered.contains("{{Stat Bonus=+4 (STR)}}"));
    }

    #[test]
    fn stat_check_applies_condition_modifier() {
        let mut stats = stats();
        stats.add_condition("poisoned", 2);
        let rendered = stat_check_command("strength", None, &stats, &[])
            .unwrap()
            .render();
        assert!(rendered.contains("{{Roll=[[1d20+3]]}}"));
        assert!(rendered.contains("{{Condition Modifier=-2}}"));
    }

    #[test]
    fn stat_check_omits_zero_condition_modifier() {
        let rendered = stat_check_command("strength", None, &stats(), &[])
            .unwrap()
            .render();
        assert!(!rendered.contains("Condition Modifier"));
    }

    #[test]
    fn stat_check_unknown_stat() {
        let err = stat_check_command("luck", None, &stats(), &[]).unwrap_err();
        assert_eq!(err, RollError::UnknownStats(vec!["luck".to_string()]));
    }

    #[test]
    fn negative_total_keeps_sign() {
        let mut stats = CharacterStats::new();
        stats.set("strength", -2);
        let rendered = stat_check_command("strength", None, &stats, &[])
            .unwrap()
            .render();
        assert!(rendered.contains("{{Roll=[[1d20-2]]}}"));
    }

    #[test]
    fn segment_order_is_fixed() {
        let a = RollCommand::new("X")
            .with(Segment::Description("d".to_string()))
            .with(Segment::Actions("1 Action".to_string()));
        let b = RollCommand::new("X")
            .with(Segment::Actions("1 Action".to_string()))
            .with(Segment::Description("d".to_string()));
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn element_icons() {
        assert_eq!(element_icon("fire"), "🔥");
        assert_eq!(element_icon("FIRE"), "🔥");
        assert_eq!(element_icon("shadow"), "🌑");
        assert_eq!(element_icon("unknownium"), "✦");
    }
}
