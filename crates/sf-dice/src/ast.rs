//! Expression tree for dice expressions.

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Integer division.
    Div,
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
            BinOp::Mul => write!(f, "*"),
            BinOp::Div => write!(f, "/"),
        }
    }
}

/// A parsed dice expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A dice term: roll `count` dice with `sides` sides and sum them.
    Dice {
        /// Number of dice, at least 1.
        count: u32,
        /// Sides per die, at least 1.
        sides: u32,
    },
    /// An integer literal.
    Int(i64),
    /// A `[statName]` placeholder, resolved at substitution time.
    Placeholder(String),
    /// A binary operation.
    Binary {
        /// Operator.
        op: BinOp,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// Unary negation.
    Neg(Box<Expr>),
}

impl Expr {
    /// Placeholder names in source order, de-duplicated.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_placeholders(&mut names);
        names
    }

    fn collect_placeholders<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Expr::Dice { .. } | Expr::Int(_) => {}
            Expr::Placeholder(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            Expr::Binary { lhs, rhs, .. } => {
                lhs.collect_placeholders(names);
                rhs.collect_placeholders(names);
            }
            Expr::Neg(inner) => inner.collect_placeholders(names),
        }
    }

    /// Returns true if the expression contains any dice term.
    pub fn has_dice(&self) -> bool {
        match self {
            Expr::Dice { .. } => true,
            Expr::Int(_) | Expr::Placeholder(_) => false,
            Expr::Binary { lhs, rhs, .. } => lhs.has_dice() || rhs.has_dice(),
            Expr::Neg(inner) => inner.has_dice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_in_source_order() {
        let expr = Expr::Binary {
            op: BinOp::Add,
            lhs: Box::new(Expr::Placeholder("strength".to_string())),
            rhs: Box::new(Expr::Binary {
                op: BinOp::Add,
                lhs: Box::new(Expr::Placeholder("speed".to_string())),
                rhs: Box::new(Expr::Placeholder("strength".to_string())),
            }),
        };
        assert_eq!(expr.placeholders(), vec!["strength", "speed"]);
    }

    #[test]
    fn no_placeholders() {
        let expr = Expr::Dice { count: 2, sides: 6 };
        assert!(expr.placeholders().is_empty());
    }

    #[test]
    fn has_dice() {
        let with = Expr::Neg(Box::new(Expr::Dice { count: 1, sides: 4 }));
        let without = Expr::Binary {
            op: BinOp::Mul,
            lhs: Box::new(Expr::Int(2)),
            rhs: Box::new(Expr::Placeholder("strength".to_string())),
        };
        assert!(with.has_dice());
        assert!(!without.has_dice());
    }
}
