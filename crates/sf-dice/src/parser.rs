//! Recursive-descent parser for dice expressions.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expr   := term (('+'|'-') term)*
//! term   := factor (('*'|'/') factor)*
//! factor := dice | integer | placeholder | '(' expr ')' | '-' factor
//! ```

use crate::ast::{BinOp, Expr};
use crate::lexer::{self, Token};

/// A parse error with source location.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Byte range of the offending input (empty at end of input).
    pub span: std::ops::Range<usize>,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Parse a dice expression into an [`Expr`].
///
/// Empty input, lexer errors, and trailing tokens are all parse errors.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let (tokens, lex_errors) = lexer::lex(source);
    if let Some(first) = lex_errors.first() {
        return Err(ParseError {
            span: first.span.clone(),
            message: first.message.clone(),
        });
    }
    if tokens.is_empty() {
        return Err(ParseError {
            span: 0..0,
            message: "empty expression".to_string(),
        });
    }

    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        end: source.len(),
    };
    let expr = parser.expr()?;
    if let Some((token, span)) = parser.peek() {
        return Err(ParseError {
            span: span.clone(),
            message: format!("unexpected token: {token}"),
        });
    }
    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [(Token, std::ops::Range<usize>)],
    pos: usize,
    end: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&(Token, std::ops::Range<usize>)> {
        self.tokens.get(self.pos)
    }

    fn error_here(&self, message: impl Into<String>) -> ParseError {
        let span = self
            .peek()
            .map_or(self.end..self.end, |(_, span)| span.clone());
        ParseError {
            span,
            message: message.into(),
        }
    }

    fn expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.term()?;
        while let Some((token, _)) = self.peek() {
            let op = match token {
                Token::Plus => BinOp::Add,
                Token::Minus => BinOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.factor()?;
        while let Some((token, _)) = self.peek() {
            let op = match token {
                Token::Star => BinOp::Mul,
                Token::Slash => BinOp::Div,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.factor()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let Some((token, _)) = self.peek().cloned() else {
            return Err(self.error_here("expected a dice term, number, or stat placeholder"));
        };
        match token {
            Token::Dice(count, sides) => {
                self.pos += 1;
                Ok(Expr::Dice { count, sides })
            }
            Token::Int(n) => {
                self.pos += 1;
                Ok(Expr::Int(n))
            }
            Token::Placeholder(name) => {
                self.pos += 1;
                Ok(Expr::Placeholder(name))
            }
            Token::Minus => {
                self.pos += 1;
                let inner = self.factor()?;
                Ok(Expr::Neg(Box::new(inner)))
            }
            Token::LParen => {
                self.pos += 1;
                let inner = self.expr()?;
                match self.peek() {
                    Some((Token::RParen, _)) => {
                        self.pos += 1;
                        Ok(inner)
                    }
                    _ => Err(self.error_here("expected ')'")),
                }
            }
            other => Err(self.error_here(format!("unexpected token: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        let expr = parse("2d8+3").unwrap();
        assert_eq!(
            expr,
            Expr::Binary {
                op: BinOp::Add,
                lhs: Box::new(Expr::Dice { count: 2, sides: 8 }),
                rhs: Box::new(Expr::Int(3)),
            }
        );
    }

    #[test]
    fn parse_placeholder() {
        let expr = parse("1d6+[strength]").unwrap();
        assert_eq!(expr.placeholders(), vec!["strength"]);
    }

    #[test]
    fn precedence() {
        // 1+2*3 parses as 1+(2*3)
        let expr = parse("1+2*3").unwrap();
        let Expr::Binary { op: BinOp::Add, rhs, .. } = expr else {
            panic!("expected addition at the root");
        };
        assert!(matches!(*rhs, Expr::Binary { op: BinOp::Mul, .. }));
    }

    #[test]
    fn parens_override_precedence() {
        let expr = parse("(1+2)*3").unwrap();
        let Expr::Binary { op: BinOp::Mul, lhs, .. } = expr else {
            panic!("expected multiplication at the root");
        };
        assert!(matches!(*lhs, Expr::Binary { op: BinOp::Add, .. }));
    }

    #[test]
    fn unary_negation() {
        let expr = parse("-2+1d4").unwrap();
        let Expr::Binary { lhs, .. } = expr else {
            panic!("expected binary root");
        };
        assert_eq!(*lhs, Expr::Neg(Box::new(Expr::Int(2))));
    }

    #[test]
    fn trailing_operator_is_an_error() {
        let err = parse("1d6+").unwrap_err();
        assert!(err.message.contains("expected"));
        assert_eq!(err.span, 4..4);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(parse("").is_err());
        assert!(parse("   ").is_err());
    }

    #[test]
    fn trailing_tokens_are_an_error() {
        let err = parse("1d6 3").unwrap_err();
        assert!(err.message.contains("unexpected token"));
    }

    #[test]
    fn unclosed_paren_is_an_error() {
        let err = parse("(1d6+2").unwrap_err();
        assert!(err.message.contains("')'"));
    }

    #[test]
    fn lexer_errors_propagate() {
        assert!(parse("1d6 & 2").is_err());
        assert!(parse("0d6").is_err());
    }

    #[test]
    fn multiple_placeholders() {
        let expr = parse("1d20+[strength]+[speed]").unwrap();
        assert_eq!(expr.placeholders(), vec!["strength", "speed"]);
    }

    #[test]
    fn division() {
        let expr = parse("[power]/2").unwrap();
        assert!(matches!(expr, Expr::Binary { op: BinOp::Div, .. }));
    }
}
