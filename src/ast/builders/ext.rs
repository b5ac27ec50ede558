//! Extension trait giving fields and arithmetic results fluent comparison methods.

use super::conditions;
use crate::ast::{ArithOp, Arithmetic, Expr, Field, Operand};

/// Fluent comparison and arithmetic builders.
///
/// Implemented for [`Field`] and [`Arithmetic`], so an arithmetic result can
/// be compared or extended exactly like a column.
///
/// # Example
/// ```
/// use coolsql::prelude::*;
///
/// let age = Field::new("age").unwrap();
/// let (sql, params) = age.clone().plus(10).eq(20).compile();
/// assert_eq!(sql, r#""age" + 10 = 20"#);
/// assert!(params.is_empty());
/// ```
pub trait ExprOps: Into<Operand> + Sized {
    /// self < rhs
    fn lt(self, rhs: impl Into<Operand>) -> Expr {
        conditions::lt(self, rhs)
    }

    /// self <= rhs
    fn lte(self, rhs: impl Into<Operand>) -> Expr {
        conditions::lte(self, rhs)
    }

    /// self > rhs
    fn gt(self, rhs: impl Into<Operand>) -> Expr {
        conditions::gt(self, rhs)
    }

    /// self >= rhs
    fn gte(self, rhs: impl Into<Operand>) -> Expr {
        conditions::gte(self, rhs)
    }

    /// self = rhs
    fn eq(self, rhs: impl Into<Operand>) -> Expr {
        conditions::eq(self, rhs)
    }

    /// self <> rhs
    fn ne(self, rhs: impl Into<Operand>) -> Expr {
        conditions::ne(self, rhs)
    }

    /// self LIKE pattern
    fn like(self, pattern: impl Into<Operand>) -> Expr {
        conditions::like(self, pattern)
    }

    /// self BETWEEN low AND high
    fn between(self, low: impl Into<Operand>, high: impl Into<Operand>) -> Expr {
        conditions::between(self, low, high)
    }

    /// self IN (?), binding a list as a single parameter
    fn is_in(self, value: impl Into<Operand>) -> Expr {
        conditions::is_in(self, value)
    }

    /// self IN (item0, item1, ...)
    fn in_list<I>(self, items: I) -> Expr
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        conditions::in_list(self, items)
    }

    /// self IS NULL
    fn is_null(self) -> Expr {
        conditions::is_null(self)
    }

    /// self + rhs
    fn plus(self, rhs: impl Into<Operand>) -> Arithmetic {
        Arithmetic::new(self, ArithOp::Add, rhs)
    }

    /// self - rhs
    fn minus(self, rhs: impl Into<Operand>) -> Arithmetic {
        Arithmetic::new(self, ArithOp::Sub, rhs)
    }

    /// self * rhs
    fn times(self, rhs: impl Into<Operand>) -> Arithmetic {
        Arithmetic::new(self, ArithOp::Mul, rhs)
    }

    /// self / rhs
    fn divide(self, rhs: impl Into<Operand>) -> Arithmetic {
        Arithmetic::new(self, ArithOp::Div, rhs)
    }

    /// self % rhs
    fn modulo(self, rhs: impl Into<Operand>) -> Arithmetic {
        Arithmetic::new(self, ArithOp::Rem, rhs)
    }
}

impl ExprOps for Field {}

impl ExprOps for Arithmetic {}
