use crate::display::{format_number, DEFAULT_PRECISION};
use std::fmt;

pub use BinOpKind::*;
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOpKind {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    TrueDiv,
    /// Exponentiation (`^`)
    Pow,
}

impl BinOpKind {
    /// IEEE-754 semantics throughout: `1 / 0` is `inf`, `0 / 0` is `NaN`.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Add => a + b,
            Sub => a - b,
            Mul => a * b,
            TrueDiv => a / b,
            Pow => a.powf(b),
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            TrueDiv => "/",
            Pow => "^",
        };
        write!(f, "{}", s)
    }
}

/// One reduction performed while evaluating, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// A literal was read.
    Number(f64),
    /// Prefix `-` was applied; holds the value after negation.
    Negate(f64),
    Binary {
        op: BinOpKind,
        lhs: f64,
        rhs: f64,
        result: f64,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        let g = |x: f64| format_number(x, precision);
        match *self {
            Step::Number(x) => write!(f, "number = {}", g(x)),
            Step::Negate(x) => write!(f, "unary minus applied, value = {}", g(x)),
            Step::Binary {
                op,
                lhs,
                rhs,
                result,
            } => write!(f, "{} {} {} = {}", g(lhs), op, g(rhs), g(result)),
        }
    }
}

/// The outcome of a successful evaluation, together with how it got there.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub steps: Vec<Step>,
}

#[cfg(test)]
mod trace_tests {
    use super::*;
    use expect_test::{expect, Expect};

    fn check_step(step: Step, expect: Expect) {
        expect.assert_eq(&format!("{step}"))
    }

    #[test]
    fn display_steps() {
        check_step(Step::Number(2.0), expect!["number = 2"]);
        check_step(Step::Negate(-0.5), expect!["unary minus applied, value = -0.5"]);
        check_step(
            Step::Binary {
                op: TrueDiv,
                lhs: 1.0,
                rhs: 3.0,
                result: 1.0 / 3.0,
            },
            expect!["1 / 3 = 0.3333333333"],
        );
        check_step(
            Step::Binary {
                op: Pow,
                lhs: 2.0,
                rhs: 0.5,
                result: 2f64.powf(0.5),
            },
            expect!["2 ^ 0.5 = 1.414213562"],
        );
    }

    #[test]
    fn display_precision_flag() {
        let step = Step::Binary {
            op: Mul,
            lhs: std::f64::consts::PI,
            rhs: 2.0,
            result: std::f64::consts::TAU,
        };
        assert_eq!(format!("{step:.3}"), "3.14 * 2 = 6.28");
    }

    #[test]
    fn apply_follows_ieee() {
        assert_eq!(TrueDiv.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(TrueDiv.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(TrueDiv.apply(0.0, 0.0).is_nan());
        assert_eq!(Pow.apply(2.0, -1.0), 0.5);
        assert_eq!(Sub.apply(3.0, 5.0), -2.0);
    }
}
