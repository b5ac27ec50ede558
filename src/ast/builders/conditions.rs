//! Named constructors for comparison, arithmetic and boolean expressions.

use crate::ast::{ArithOp, Arithmetic, Combine, CompareOp, Comparison, Expr, LogicalOp, Operand};
use crate::error::CoolSqlResult;

/// Helper to create a single-argument comparison
fn make_comparison(subject: impl Into<Operand>, op: CompareOp, arg: impl Into<Operand>) -> Expr {
    Comparison::from_parts(subject.into(), op, vec![arg.into()]).into()
}

/// subject = value
pub fn eq(subject: impl Into<Operand>, value: impl Into<Operand>) -> Expr {
    make_comparison(subject, CompareOp::Eq, value)
}

/// subject <> value
pub fn ne(subject: impl Into<Operand>, value: impl Into<Operand>) -> Expr {
    make_comparison(subject, CompareOp::Ne, value)
}

/// subject > value
pub fn gt(subject: impl Into<Operand>, value: impl Into<Operand>) -> Expr {
    make_comparison(subject, CompareOp::Gt, value)
}

/// subject >= value
pub fn gte(subject: impl Into<Operand>, value: impl Into<Operand>) -> Expr {
    make_comparison(subject, CompareOp::Gte, value)
}

/// subject < value
pub fn lt(subject: impl Into<Operand>, value: impl Into<Operand>) -> Expr {
    make_comparison(subject, CompareOp::Lt, value)
}

/// subject <= value
pub fn lte(subject: impl Into<Operand>, value: impl Into<Operand>) -> Expr {
    make_comparison(subject, CompareOp::Lte, value)
}

/// subject LIKE pattern
pub fn like(subject: impl Into<Operand>, pattern: impl Into<Operand>) -> Expr {
    make_comparison(subject, CompareOp::Like, pattern)
}

/// subject BETWEEN low AND high
pub fn between(
    subject: impl Into<Operand>,
    low: impl Into<Operand>,
    high: impl Into<Operand>,
) -> Expr {
    Comparison::from_parts(subject.into(), CompareOp::Between, vec![low.into(), high.into()]).into()
}

/// subject IN (?)
///
/// The value fills a single slot: a list is bound as one parameter, not
/// expanded into one placeholder per element. Use [`in_list`] for that.
pub fn is_in(subject: impl Into<Operand>, value: impl Into<Operand>) -> Expr {
    make_comparison(subject, CompareOp::In, value)
}

/// subject IN (item0, item1, ...), each item classified on its own
pub fn in_list<I>(subject: impl Into<Operand>, items: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    let args = items.into_iter().map(Into::<Operand>::into).collect();
    Comparison::from_parts(subject.into(), CompareOp::In, args).into()
}

/// subject IS NULL
pub fn is_null(subject: impl Into<Operand>) -> Expr {
    Comparison::from_parts(subject.into(), CompareOp::IsNull, Vec::new()).into()
}

/// Generic comparison; fails when the argument count does not fit the operator.
pub fn compare<I>(subject: impl Into<Operand>, op: CompareOp, args: I) -> CoolSqlResult<Expr>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Comparison::new(subject, op, args.into_iter().map(Into::<Operand>::into)).map(Expr::from)
}

/// left OP right
pub fn arith(left: impl Into<Operand>, op: ArithOp, right: impl Into<Operand>) -> Arithmetic {
    Arithmetic::new(left, op, right)
}

/// NOT (expr)
pub fn not(expr: impl Into<Expr>) -> Expr {
    expr.into().not()
}

/// (left) AND (right)
pub fn and(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    left.into().and(right)
}

/// (left) OR (right)
pub fn or(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    left.into().or(right)
}

/// AND/OR over arbitrary operands; fails unless both sides are expressions.
pub fn combine(
    op: LogicalOp,
    left: impl Into<Operand>,
    right: impl Into<Operand>,
) -> CoolSqlResult<Expr> {
    Combine::try_new(op, left, right).map(Expr::from)
}
