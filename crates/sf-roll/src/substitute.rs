//! Placeholder substitution.
//!
//! Rewrites `[statName]` placeholders textually, leaving every other byte of
//! the expression untouched. Two output modes:
//!
//! - annotated (default): `5[strength]`, which keeps the stat name inline so
//!   the tabletop's tooltip can show where the number came from;
//! - friendly: just `5`, for compact roll previews in button labels.

use sf_core::{CharacterStats, Spell};

use crate::resolver::resolve_stat;

/// Replace every `[statKey]` in `expression` with its resolved value.
///
/// Each placeholder is resolved independently. Text that merely looks like a
/// placeholder but is not one (unclosed bracket, non-word characters) passes
/// through unchanged.
pub fn substitute(
    expression: &str,
    stats: &CharacterStats,
    spells: &[Spell],
    friendly: bool,
) -> String {
    let mut out = String::with_capacity(expression.len());
    let mut rest = expression;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match placeholder_end(after_open) {
            Some(end) => {
                let name = &after_open[..end];
                let total = resolve_stat(name, stats, spells);
                if friendly {
                    out.push_str(&total.to_string());
                } else {
                    out.push_str(&format!("{total}[{name}]"));
                }
                rest = &after_open[end + 1..];
            }
            None => {
                out.push('[');
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Byte offset of the closing `]` if `text` starts with one-or-more word
/// characters followed by `]`.
fn placeholder_end(text: &str) -> Option<usize> {
    let mut len = 0;
    for (index, c) in text.char_indices() {
        if c == ']' {
            return (len > 0).then_some(index);
        }
        if c.is_ascii_alphanumeric() || c == '_' {
            len += 1;
        } else {
            return None;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(pairs: &[(&str, i32)]) -> CharacterStats {
        let mut stats = CharacterStats::new();
        for (key, value) in pairs {
            stats.set(*key, *value);
        }
        stats
    }

    #[test]
    fn annotated_mode() {
        let s = substitute("1d20+[strength]", &stats(&[("strength", 5)]), &[], false);
        assert_eq!(s, "1d20+5[strength]");
    }

    #[test]
    fn friendly_mode() {
        let s = substitute("1d20+[strength]", &stats(&[("strength", 5)]), &[], true);
        assert_eq!(s, "1d20+5");
    }

    #[test]
    fn no_placeholders_pass_through() {
        let s = substitute("2d8+3", &CharacterStats::new(), &[], false);
        assert_eq!(s, "2d8+3");
    }

    #[test]
    fn multiple_distinct_placeholders() {
        let s = substitute(
            "1d6+[strength]+[speed]",
            &stats(&[("strength", 2), ("speed", 30)]),
            &[],
            false,
        );
        assert_eq!(s, "1d6+2[strength]+30[speed]");
    }

    #[test]
    fn repeated_placeholder_resolved_each_time() {
        let s = substitute("[x]+[x]", &stats(&[("x", 4)]), &[], true);
        assert_eq!(s, "4+4");
    }

    #[test]
    fn negative_values_keep_sign() {
        let s = substitute("1d20+[strength]", &stats(&[("strength", -3)]), &[], false);
        assert_eq!(s, "1d20+-3[strength]");
    }

    #[test]
    fn link_bonus_included() {
        let mut spell = Spell::new("Ember Ward", 10, 3, "2d6", "fire", 1).unwrap();
        spell.is_linked = true;
        spell.linked_stat = Some("strength".to_string());
        let s = substitute(
            "1d20+[strength]",
            &stats(&[("strength", 3)]),
            &[spell],
            true,
        );
        assert_eq!(s, "1d20+7");
    }

    #[test]
    fn unclosed_bracket_passes_through() {
        let s = substitute("1d6+[strength", &stats(&[("strength", 5)]), &[], false);
        assert_eq!(s, "1d6+[strength");
    }

    #[test]
    fn empty_brackets_pass_through() {
        let s = substitute("1d6+[]", &CharacterStats::new(), &[], false);
        assert_eq!(s, "1d6+[]");
    }

    #[test]
    fn non_word_brackets_pass_through() {
        let s = substitute("1d6+[a b]", &CharacterStats::new(), &[], false);
        assert_eq!(s, "1d6+[a b]");
    }

    #[test]
    fn non_ascii_brackets_pass_through() {
        // Validation already rejects these as malformed, so they can never
        // reach a workflow; the lenient scanner just leaves them alone.
        let s = substitute("1d6+[héros]", &stats(&[("héros", 3)]), &[], false);
        assert_eq!(s, "1d6+[héros]");
    }

    #[test]
    fn no_double_substitution() {
        // A stat value that happens to look like a placeholder prefix must
        // not be re-scanned.
        let s = substitute("[a]+[b]", &stats(&[("a", 1), ("b", 2)]), &[], false);
        assert_eq!(s, "1[a]+2[b]");
    }
}
