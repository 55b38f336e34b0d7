//! Lexer for dice expressions.
//!
//! The token set is tiny: dice terms (`2d6`, `d20`), integers, bracketed
//! stat placeholders, the four arithmetic operators, and parentheses.
//! Placeholders keep the exact wire syntax `[statName]`: one or more ASCII
//! word characters, case-sensitive, no whitespace inside the brackets. The
//! substitutor scans for the same ASCII set, so anything the lexer rejects
//! can never reach a command half-substituted.

use logos::Logos;
use std::fmt;

/// Token type for dice expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A dice term: count (default 1) and sides.
    Dice(u32, u32),
    /// An integer literal.
    Int(i64),
    /// A `[statName]` placeholder, stored without the brackets.
    Placeholder(String),
    /// Addition operator `+`.
    Plus,
    /// Subtraction operator `-`.
    Minus,
    /// Multiplication operator `*`.
    Star,
    /// Division operator `/`.
    Slash,
    /// Left parenthesis `(`.
    LParen,
    /// Right parenthesis `)`.
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Dice(count, sides) => write!(f, "{count}d{sides}"),
            Token::Int(n) => write!(f, "{n}"),
            Token::Placeholder(name) => write!(f, "[{name}]"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Internal logos token, converted to owned `Token` after lexing.
#[derive(Logos, Debug)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[regex(r"[0-9]*d[0-9]+")]
    Dice,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"\[[0-9A-Za-z_]+\]")]
    Placeholder,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

/// A lexer error with source location.
#[derive(Debug, Clone)]
pub struct LexError {
    /// Byte range of the erroneous input.
    pub span: std::ops::Range<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Lex an expression into `(Token, Span)` pairs.
///
/// Lexing continues past errors to collect as many tokens as possible, so
/// form feedback can report every bad character at once.
pub fn lex(source: &str) -> (Vec<(Token, std::ops::Range<usize>)>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(raw) => {
                let token = match raw {
                    RawToken::Dice => {
                        let slice = lexer.slice();
                        match parse_dice(slice) {
                            Ok((count, sides)) => Token::Dice(count, sides),
                            Err(message) => {
                                errors.push(LexError {
                                    span: span.clone(),
                                    message,
                                });
                                continue;
                            }
                        }
                    }
                    RawToken::Int => match lexer.slice().parse::<i64>() {
                        Ok(n) => Token::Int(n),
                        Err(_) => {
                            errors.push(LexError {
                                span: span.clone(),
                                message: format!("integer too large: {}", lexer.slice()),
                            });
                            continue;
                        }
                    },
                    RawToken::Placeholder => {
                        let slice = lexer.slice();
                        Token::Placeholder(slice[1..slice.len() - 1].to_string())
                    }
                    RawToken::Plus => Token::Plus,
                    RawToken::Minus => Token::Minus,
                    RawToken::Star => Token::Star,
                    RawToken::Slash => Token::Slash,
                    RawToken::LParen => Token::LParen,
                    RawToken::RParen => Token::RParen,
                };
                tokens.push((token, span));
            }
            Err(()) => {
                errors.push(LexError {
                    span: span.clone(),
                    message: format!("unexpected character: {:?}", &source[span.clone()]),
                });
            }
        }
    }

    (tokens, errors)
}

/// Split a dice term like `2d6` or `d20` into count and sides.
fn parse_dice(slice: &str) -> Result<(u32, u32), String> {
    let d_index = slice.find('d').unwrap_or(0);
    let count_text = &slice[..d_index];
    let sides_text = &slice[d_index + 1..];

    let count = if count_text.is_empty() {
        1
    } else {
        count_text
            .parse::<u32>()
            .map_err(|_| format!("dice count too large: {count_text}"))?
    };
    let sides = sides_text
        .parse::<u32>()
        .map_err(|_| format!("dice sides too large: {sides_text}"))?;

    if count == 0 {
        return Err(format!("dice count must be at least 1: {slice}"));
    }
    if sides == 0 {
        return Err(format!("dice must have at least 1 side: {slice}"));
    }
    Ok((count, sides))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        let (tokens, errors) = lex(source);
        assert!(errors.is_empty(), "errors: {errors:?}");
        tokens.into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn lex_simple_roll() {
        assert_eq!(
            tokens("2d8+3"),
            vec![Token::Dice(2, 8), Token::Plus, Token::Int(3)]
        );
    }

    #[test]
    fn lex_bare_die_defaults_count() {
        assert_eq!(tokens("d20"), vec![Token::Dice(1, 20)]);
    }

    #[test]
    fn lex_placeholder() {
        assert_eq!(
            tokens("1d6+[strength]"),
            vec![
                Token::Dice(1, 6),
                Token::Plus,
                Token::Placeholder("strength".to_string())
            ]
        );
    }

    #[test]
    fn lex_placeholder_keeps_case_and_underscores() {
        assert_eq!(
            tokens("[spell_Power]"),
            vec![Token::Placeholder("spell_Power".to_string())]
        );
    }

    #[test]
    fn lex_parens_and_product() {
        assert_eq!(
            tokens("(1d4+1)*2"),
            vec![
                Token::LParen,
                Token::Dice(1, 4),
                Token::Plus,
                Token::Int(1),
                Token::RParen,
                Token::Star,
                Token::Int(2)
            ]
        );
    }

    #[test]
    fn lex_whitespace_skipped() {
        assert_eq!(
            tokens(" 1d6 + 2 "),
            vec![Token::Dice(1, 6), Token::Plus, Token::Int(2)]
        );
    }

    #[test]
    fn lex_zero_count_dice_errors() {
        let (_, errors) = lex("0d6");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("count"));
    }

    #[test]
    fn lex_zero_sided_dice_errors() {
        let (_, errors) = lex("1d0");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("side"));
    }

    #[test]
    fn lex_bad_character_errors() {
        let (_, errors) = lex("1d6 & 2");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span, 4..5);
    }

    #[test]
    fn lex_unclosed_bracket_errors() {
        let (_, errors) = lex("[strength");
        assert!(!errors.is_empty());
    }

    #[test]
    fn lex_non_ascii_placeholder_errors() {
        // The substitutor only rewrites ASCII names, so the lexer must
        // reject anything else outright.
        let (_, errors) = lex("1d6+[héros]");
        assert!(!errors.is_empty());
    }

    #[test]
    fn lex_preserves_spans() {
        let (tokens, _) = lex("1d6+[strength]");
        assert_eq!(tokens[0].1, 0..3);
        assert_eq!(tokens[2].1, 4..14);
    }
}
