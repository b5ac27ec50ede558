use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::ast::{Arithmetic, CaseEnd, Comparison, Expr, Field, Number, Value};

/// Anything that can sit in an argument position of an expression.
///
/// The variant decides how the operand compiles: numbers, fields and
/// expressions are rendered inline, raw values become a bound parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Operand {
    Number(Number),
    Field(Field),
    Expr(Box<Expr>),
    Raw(Value),
}

impl Operand {
    /// Short name of the operand kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Number(_) => "number",
            Operand::Field(_) => "field",
            Operand::Expr(_) => "expression",
            Operand::Raw(_) => "value",
        }
    }
}

impl From<Number> for Operand {
    fn from(n: Number) -> Self {
        Operand::Number(n)
    }
}

impl From<Field> for Operand {
    fn from(field: Field) -> Self {
        Operand::Field(field)
    }
}

impl From<&Field> for Operand {
    fn from(field: &Field) -> Self {
        Operand::Field(field.clone())
    }
}

impl From<Expr> for Operand {
    fn from(expr: Expr) -> Self {
        Operand::Expr(Box::new(expr))
    }
}

impl From<Comparison> for Operand {
    fn from(cmp: Comparison) -> Self {
        Expr::from(cmp).into()
    }
}

impl From<Arithmetic> for Operand {
    fn from(arith: Arithmetic) -> Self {
        Expr::from(arith).into()
    }
}

impl From<CaseEnd> for Operand {
    fn from(case: CaseEnd) -> Self {
        Expr::from(case).into()
    }
}

/// Numeric values are always inline; everything else is bound.
impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        match value {
            Value::Int(n) => Operand::Number(Number::Int(n)),
            Value::UInt(n) => Operand::Number(Number::UInt(n)),
            Value::Float(n) => Operand::Number(Number::Float(n)),
            other => Operand::Raw(other),
        }
    }
}

macro_rules! number_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(n: $ty) -> Self {
                    Operand::from(Value::from(n))
                }
            }
        )*
    };
}

number_operand!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

macro_rules! raw_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(v: $ty) -> Self {
                    Operand::Raw(Value::from(v))
                }
            }
        )*
    };
}

raw_operand!(bool, &str, String, NaiveDate, DateTime<Utc>, serde_json::Value);

impl<T: Into<Value>> From<Vec<T>> for Operand {
    fn from(values: Vec<T>) -> Self {
        Operand::Raw(Value::from(values))
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Operand {
    fn from(values: [T; N]) -> Self {
        Operand::Raw(Value::from(values))
    }
}

impl<T: Into<Value>> From<Option<T>> for Operand {
    fn from(opt: Option<T>) -> Self {
        Operand::from(Value::from(opt))
    }
}
