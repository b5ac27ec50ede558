//! Operator overloads.
//!
//! `+ - * / %` build [`Arithmetic`] from fields and arithmetic results (and
//! from numbers on the left, as in `10 - age`). `! & |` negate and combine
//! expressions. Comparisons have no operator form because `PartialEq` and
//! `PartialOrd` must return `bool`; use [`ExprOps`](super::ExprOps).

use std::ops::{Add, BitAnd, BitOr, Div, Mul, Not, Rem, Sub};

use crate::ast::{ArithOp, Arithmetic, CaseEnd, Comparison, Expr, Field, Operand};

macro_rules! arith_ops {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<R: Into<Operand>> Add<R> for $ty {
                type Output = Arithmetic;

                fn add(self, rhs: R) -> Arithmetic {
                    Arithmetic::new(self, ArithOp::Add, rhs)
                }
            }

            impl<R: Into<Operand>> Sub<R> for $ty {
                type Output = Arithmetic;

                fn sub(self, rhs: R) -> Arithmetic {
                    Arithmetic::new(self, ArithOp::Sub, rhs)
                }
            }

            impl<R: Into<Operand>> Mul<R> for $ty {
                type Output = Arithmetic;

                fn mul(self, rhs: R) -> Arithmetic {
                    Arithmetic::new(self, ArithOp::Mul, rhs)
                }
            }

            impl<R: Into<Operand>> Div<R> for $ty {
                type Output = Arithmetic;

                fn div(self, rhs: R) -> Arithmetic {
                    Arithmetic::new(self, ArithOp::Div, rhs)
                }
            }

            impl<R: Into<Operand>> Rem<R> for $ty {
                type Output = Arithmetic;

                fn rem(self, rhs: R) -> Arithmetic {
                    Arithmetic::new(self, ArithOp::Rem, rhs)
                }
            }
        )*
    };
}

arith_ops!(Field, Arithmetic);

// number OP field, number OP arithmetic
macro_rules! reflected_arith_ops {
    ($($num:ty => $rhs:ty),* $(,)?) => {
        $(
            impl Add<$rhs> for $num {
                type Output = Arithmetic;

                fn add(self, rhs: $rhs) -> Arithmetic {
                    Arithmetic::new(self, ArithOp::Add, rhs)
                }
            }

            impl Sub<$rhs> for $num {
                type Output = Arithmetic;

                fn sub(self, rhs: $rhs) -> Arithmetic {
                    Arithmetic::new(self, ArithOp::Sub, rhs)
                }
            }

            impl Mul<$rhs> for $num {
                type Output = Arithmetic;

                fn mul(self, rhs: $rhs) -> Arithmetic {
                    Arithmetic::new(self, ArithOp::Mul, rhs)
                }
            }

            impl Div<$rhs> for $num {
                type Output = Arithmetic;

                fn div(self, rhs: $rhs) -> Arithmetic {
                    Arithmetic::new(self, ArithOp::Div, rhs)
                }
            }

            impl Rem<$rhs> for $num {
                type Output = Arithmetic;

                fn rem(self, rhs: $rhs) -> Arithmetic {
                    Arithmetic::new(self, ArithOp::Rem, rhs)
                }
            }
        )*
    };
}

// One integer and one float type, so a bare literal resolves to a single impl.
reflected_arith_ops! {
    i64 => Field,
    f64 => Field,
    i64 => Arithmetic,
    f64 => Arithmetic,
}

macro_rules! bool_ops {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<R: Into<Expr>> BitAnd<R> for $ty {
                type Output = Expr;

                fn bitand(self, rhs: R) -> Expr {
                    Expr::from(self).and(rhs)
                }
            }

            impl<R: Into<Expr>> BitOr<R> for $ty {
                type Output = Expr;

                fn bitor(self, rhs: R) -> Expr {
                    Expr::from(self).or(rhs)
                }
            }

            impl Not for $ty {
                type Output = Expr;

                fn not(self) -> Expr {
                    Expr::from(self).not()
                }
            }
        )*
    };
}

bool_ops!(Expr, Comparison, Arithmetic, CaseEnd);
