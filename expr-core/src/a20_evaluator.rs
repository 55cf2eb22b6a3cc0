use crate::errors::{Diag, Diagnostic};
use crate::evaluator_err as EE;
use crate::lexer::Lexer;
use crate::token::*;
use crate::trace::{BinOpKind, Evaluation, Step};
use tracing::{debug, trace};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
enum BindingPower {
    // Inside parens, or the whole line
    Top,
    // +, -
    Add,
    // *, /
    Mul,
    // ^
    Pow,
}

/// Deepest run of open parentheses accepted before giving up.
pub(crate) const MAX_NESTING: usize = 256;

/// Computes values as the grammar is recognized; nothing is built in between.
struct Evaluator<'a> {
    lexer: Lexer<'a>,
    /// The one token of lookahead. Always set, starting from construction.
    current: Token,
    /// Parentheses currently open.
    depth: usize,
    steps: Vec<Step>,
}

type EvalResult = Result<f64, Diag>;

/// Evaluate one line of arithmetic.
///
/// ```
/// assert_eq!(expr_eval::evaluate("2 ^ 3 ^ 2").unwrap(), 64.0);
/// assert!(expr_eval::evaluate("2 2").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<f64, Diag> {
    evaluate_traced(input).map(|evaluation| evaluation.value)
}

/// Like [`evaluate`], but also hands back every reduction performed.
pub fn evaluate_traced(input: &str) -> Result<Evaluation, Diag> {
    let result = Evaluator::new(input).evaluate();
    match &result {
        Ok(evaluation) => debug!(
            input,
            value = evaluation.value,
            steps = evaluation.steps.len(),
            "evaluated expression"
        ),
        Err(diag) => debug!(input, error = %diag, "syntax error"),
    }
    result
}

fn err<T>(x: impl Diagnostic) -> Result<T, Diag> {
    Err(x.into_diag())
}

impl<'a> Evaluator<'a> {
    fn new(input: &'a str) -> Evaluator<'a> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Evaluator {
            lexer,
            current,
            depth: 0,
            steps: vec![],
        }
    }

    fn evaluate(mut self) -> Result<Evaluation, Diag> {
        let value = self.parse_expr()?;
        self.assert_stream_done()?;
        Ok(Evaluation {
            value,
            steps: self.steps,
        })
    }

    fn assert_stream_done(&mut self) -> Result<(), Diag> {
        let tok = self.peek()?;
        let Eof = tok.kind else {
            return err(EE::ExpectedConsequent.span(tok.span));
        };
        Ok(())
    }

    /// Only fails for Invalid tokens
    fn next(&mut self) -> Result<Token, Diag> {
        let tok = preprocess(self.current)?;
        self.current = self.lexer.next_token();
        Ok(tok)
    }

    /// Only fails for Invalid tokens
    fn peek(&self) -> Result<Token, Diag> {
        preprocess(self.current)
    }

    fn record(&mut self, step: Step) {
        trace!(%step, "step");
        self.steps.push(step);
    }
}

fn preprocess(tok: Token) -> Result<Token, Diag> {
    match tok.kind {
        Invalid(x) => err(EE::InvalidToken { token: x }.span(tok.span)),
        _ => Ok(tok),
    }
}

macro_rules! consume_token {
    ($self:ident, $tok:pat, $err:expr) => {{
        let next = $self.next()?;
        let $tok = next.kind else {
            return err($err.span(next.span));
        };
        next
    }};
}

impl<'a> Evaluator<'a> {
    fn parse_expr(&mut self) -> EvalResult {
        self.parse_main(BindingPower::Top)
    }

    /// Evaluate operands and operators until reaching one that binds no
    /// tighter than `last_bp`.
    fn parse_main(&mut self, last_bp: BindingPower) -> EvalResult {
        let mut left = self.parse_initial()?;
        while let Some(tok) = self.consequent_good(last_bp)? {
            left = self.parse_binop(left, tok)?;
        }
        Ok(left)
    }

    /// Prefix signs bind tighter than any binary operator, so a run of them
    /// applies to the primary right after it. The run is counted in a loop
    /// instead of recursing once per sign.
    fn parse_initial(&mut self) -> EvalResult {
        let mut negations = 0usize;
        let mut start = self.next()?;
        while let BinOp(sign @ (Plus | Minus)) = start.kind {
            if let Minus = sign {
                negations += 1;
            }
            start = self.next()?;
        }
        let mut value = self.parse_primary(start)?;
        // Innermost sign first, one step per minus.
        for _ in 0..negations {
            value = -value;
            self.record(Step::Negate(value));
        }
        Ok(value)
    }

    fn parse_primary(&mut self, start: Token) -> EvalResult {
        match start.kind {
            Number(x) => {
                self.record(Step::Number(x));
                Ok(x)
            }
            OpenParen => {
                if self.depth >= MAX_NESTING {
                    return err(EE::NestedTooDeep.span(start.span));
                }
                self.depth += 1;
                let inner = self.parse_expr()?;
                self.depth -= 1;
                consume_token!(self, CloseParen, EE::OpenParenMissingCloseParen);
                Ok(inner)
            }
            BinOp(Star | Slash | Caret) => err(EE::UnexpectedBinaryInitial.span(start.span)),
            CloseParen => err(EE::UnmatchedCloseParen.span(start.span)),
            Eof => err(EE::UnexpectedEOF.span(start.span)),
            BinOp(Plus | Minus) | Whitespace | Invalid(_) => {
                unreachable!("Signs, whitespace and Invalid never reach here")
            }
        }
    }

    /// None = not an operator, or is no tighter than last_bp.
    fn consequent_good(&mut self, last_bp: BindingPower) -> Result<Option<BinOpToken>, Diag> {
        Ok(match self.peek()?.kind {
            BinOp(t) if binop_power(t) > last_bp => {
                self.next()?;
                Some(t)
            }
            _ => None,
        })
    }

    fn parse_binop(&mut self, left: f64, tok: BinOpToken) -> EvalResult {
        // All operations are left-associative, `^` included: 2^3^2 is (2^3)^2.
        // Parse the right side one binding power lower to get right-associative.
        let right = self.parse_main(binop_power(tok))?;
        let op = translate_binop(tok);
        let result = op.apply(left, right);
        self.record(Step::Binary {
            op,
            lhs: left,
            rhs: right,
            result,
        });
        Ok(result)
    }
}

fn binop_power(tok: BinOpToken) -> BindingPower {
    match tok {
        Plus | Minus => BindingPower::Add,
        Star | Slash => BindingPower::Mul,
        Caret => BindingPower::Pow,
    }
}

fn translate_binop(tok: BinOpToken) -> BinOpKind {
    match tok {
        Plus => BinOpKind::Add,
        Minus => BinOpKind::Sub,
        Star => BinOpKind::Mul,
        Slash => BinOpKind::TrueDiv,
        Caret => BinOpKind::Pow,
    }
}
