//! Dice-expression language for Sheetforge.
//!
//! Lexes, parses, and (for previews) evaluates dice expressions such as
//! `2d8+3` and `1d6+[strength]`. Placeholders keep the wire syntax
//! `[statName]` (bracketed word characters, case-sensitive) and are
//! resolved by the roll pipeline, not here.

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;

pub use ast::{BinOp, Expr};
pub use error::{DiceError, DiceResult};
pub use eval::eval;
pub use parser::{ParseError, parse};
