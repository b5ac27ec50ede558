use serde::Serialize;

use crate::ast::{ArithOp, CompareOp, Field, LogicalOp, Operand};
use crate::error::{CoolSqlError, CoolSqlResult};

/// A compilable SQL expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// NOT (expr)
    Not(Negation),
    /// (left) AND (right), (left) OR (right)
    Combine(Combine),
    /// subject OP args
    Compare(Comparison),
    /// left OP right
    Arithmetic(Arithmetic),
    /// CASE ... END
    Case(CaseEnd),
}

impl Expr {
    /// Negate this expression. Negating a negation unwraps it.
    pub fn not(self) -> Expr {
        match self {
            Expr::Not(negation) => *negation.inner,
            other => Expr::Not(Negation {
                inner: Box::new(other),
            }),
        }
    }

    /// (self) AND (rhs)
    pub fn and(self, rhs: impl Into<Expr>) -> Expr {
        Combine::new(LogicalOp::And, self, rhs.into()).into()
    }

    /// (self) OR (rhs)
    pub fn or(self, rhs: impl Into<Expr>) -> Expr {
        Combine::new(LogicalOp::Or, self, rhs.into()).into()
    }
}

/// NOT (expr). Only built through [`Expr::not`], so it never wraps another negation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Negation {
    pub(crate) inner: Box<Expr>,
}

impl Negation {
    pub fn inner(&self) -> &Expr {
        &self.inner
    }
}

/// Two expressions joined by AND or OR.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Combine {
    pub(crate) op: LogicalOp,
    pub(crate) left: Box<Expr>,
    pub(crate) right: Box<Expr>,
}

impl Combine {
    pub fn new(op: LogicalOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Self {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    /// Combine arbitrary operands, failing unless both sides are expressions.
    pub fn try_new(
        op: LogicalOp,
        left: impl Into<Operand>,
        right: impl Into<Operand>,
    ) -> CoolSqlResult<Self> {
        match (left.into(), right.into()) {
            (Operand::Expr(left), Operand::Expr(right)) => Ok(Self { op, left, right }),
            (left, right) => {
                tracing::debug!(
                    %op,
                    left = left.kind(),
                    right = right.kind(),
                    "rejected combination of non-expression operands"
                );
                Err(CoolSqlError::InvalidCombination {
                    left: left.kind(),
                    right: right.kind(),
                })
            }
        }
    }

    pub fn op(&self) -> LogicalOp {
        self.op
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }
}

/// A comparison of a subject operand against zero or more arguments.
///
/// The argument count always fits the operator: 0 for `IS NULL`, 2 for
/// `BETWEEN`, any for `IN`, 1 otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub(crate) operand: Operand,
    pub(crate) op: CompareOp,
    pub(crate) args: Vec<Operand>,
}

impl Comparison {
    /// Build a comparison, checking the argument count against the operator.
    pub fn new(
        operand: impl Into<Operand>,
        op: CompareOp,
        args: impl IntoIterator<Item = Operand>,
    ) -> CoolSqlResult<Self> {
        let args: Vec<Operand> = args.into_iter().collect();
        let arity = op.arity();
        if !arity.accepts(args.len()) {
            tracing::debug!(%op, args = args.len(), "argument count does not fit operator");
            return Err(CoolSqlError::operator(format!(
                "{} takes {} argument(s), got {}",
                op,
                arity,
                args.len()
            )));
        }
        Ok(Self::from_parts(operand.into(), op, args))
    }

    /// Callers guarantee the arity.
    pub(crate) fn from_parts(operand: Operand, op: CompareOp, args: Vec<Operand>) -> Self {
        debug_assert!(op.arity().accepts(args.len()));
        Self { operand, op, args }
    }

    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }

    pub fn args(&self) -> &[Operand] {
        &self.args
    }
}

/// `left OP right`. Can itself be compared, combined or used in further arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arithmetic {
    pub(crate) left: Operand,
    pub(crate) op: ArithOp,
    pub(crate) right: Operand,
}

impl Arithmetic {
    pub fn new(left: impl Into<Operand>, op: ArithOp, right: impl Into<Operand>) -> Self {
        Self {
            left: left.into(),
            op,
            right: right.into(),
        }
    }

    pub fn left(&self) -> &Operand {
        &self.left
    }

    pub fn op(&self) -> ArithOp {
        self.op
    }

    pub fn right(&self) -> &Operand {
        &self.right
    }
}

/// A finalized CASE expression, produced by the [`Case`](crate::Case) builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseEnd {
    pub(crate) subject: Option<Field>,
    pub(crate) clauses: Vec<(Operand, Operand)>,
    pub(crate) default: Option<Operand>,
}

impl CaseEnd {
    pub fn subject(&self) -> Option<&Field> {
        self.subject.as_ref()
    }

    /// WHEN condition THEN result pairs, in declaration order
    pub fn clauses(&self) -> &[(Operand, Operand)] {
        &self.clauses
    }

    pub fn else_value(&self) -> Option<&Operand> {
        self.default.as_ref()
    }
}

impl From<Negation> for Expr {
    fn from(negation: Negation) -> Self {
        Expr::Not(negation)
    }
}

impl From<Combine> for Expr {
    fn from(combine: Combine) -> Self {
        Expr::Combine(combine)
    }
}

impl From<Comparison> for Expr {
    fn from(cmp: Comparison) -> Self {
        Expr::Compare(cmp)
    }
}

impl From<Arithmetic> for Expr {
    fn from(arith: Arithmetic) -> Self {
        Expr::Arithmetic(arith)
    }
}

impl From<CaseEnd> for Expr {
    fn from(case: CaseEnd) -> Self {
        Expr::Case(case)
    }
}
