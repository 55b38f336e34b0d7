//! Local evaluation of dice expressions.
//!
//! Evaluation is for previews only; emitted roll commands keep their
//! `[[...]]` sub-expressions for the virtual tabletop's own dice engine.
//! Placeholders resolve through a caller-supplied lookup so the evaluator
//! stays independent of the character model.

use rand::Rng;

use crate::ast::{BinOp, Expr};
use crate::error::{DiceError, DiceResult};

/// Evaluate an expression, rolling dice with `rng` and resolving
/// placeholders through `resolve`.
pub fn eval<R: Rng>(expr: &Expr, rng: &mut R, resolve: &dyn Fn(&str) -> i64) -> DiceResult<i64> {
    match expr {
        Expr::Dice { count, sides } => {
            let mut total: i64 = 0;
            for _ in 0..*count {
                total += i64::from(rng.random_range(1..=*sides));
            }
            Ok(total)
        }
        Expr::Int(n) => Ok(*n),
        Expr::Placeholder(name) => Ok(resolve(name)),
        Expr::Binary { op, lhs, rhs } => {
            let left = eval(lhs, rng, resolve)?;
            let right = eval(rhs, rng, resolve)?;
            match op {
                BinOp::Add => Ok(left.wrapping_add(right)),
                BinOp::Sub => Ok(left.wrapping_sub(right)),
                BinOp::Mul => Ok(left.wrapping_mul(right)),
                BinOp::Div => {
                    if right == 0 {
                        Err(DiceError::DivisionByZero)
                    } else {
                        Ok(left / right)
                    }
                }
            }
        }
        Expr::Neg(inner) => Ok(-eval(inner, rng, resolve)?),
    }
}
