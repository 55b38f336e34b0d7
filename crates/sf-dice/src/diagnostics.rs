//! Pretty rendering of expression errors.
//!
//! Parse errors carry byte spans into the expression text; ariadne turns
//! them into the caret-annotated reports shown under form fields and in the
//! CLI's `preview` command.

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::parser::ParseError;

/// Render a parse error against its source expression.
pub fn render_parse_error(source: &str, error: &ParseError) -> String {
    let mut output = Vec::new();
    // Point at the last byte when the error is at end of input.
    let span = if error.span.is_empty() && !source.is_empty() {
        source.len().saturating_sub(1)..source.len()
    } else {
        error.span.clone()
    };

    let id = "expression";
    Report::build(ReportKind::Error, (id, span.clone()))
        .with_message(&error.message)
        .with_label(
            Label::new((id, span))
                .with_message(&error.message)
                .with_color(Color::Red),
        )
        .finish()
        .write((id, Source::from(source)), &mut output)
        .ok();

    String::from_utf8(output).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn render_produces_output() {
        let source = "1d6+";
        let error = parse(source).unwrap_err();
        let rendered = render_parse_error(source, &error);
        assert!(rendered.contains("expected"));
    }

    #[test]
    fn render_mid_expression_error() {
        let source = "1d6 & 2";
        let error = parse(source).unwrap_err();
        let rendered = render_parse_error(source, &error);
        assert!(rendered.contains("unexpected character"));
    }
}
