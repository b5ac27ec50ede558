use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoolSqlError;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
    /// Equal (=)
    Eq,
    /// Not equal (<>)
    Ne,
    /// LIKE pattern match
    Like,
    /// BETWEEN low AND high
    Between,
    /// IN (...)
    In,
    /// IS NULL
    IsNull,
}

/// How many arguments an operator takes besides its subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == *n,
            Arity::AtLeast(n) => count >= *n,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

impl CompareOp {
    /// Returns the SQL symbol/keyword for this operator.
    pub fn sql_symbol(&self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Like => "LIKE",
            CompareOp::Between => "BETWEEN",
            CompareOp::In => "IN",
            CompareOp::IsNull => "IS NULL",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            CompareOp::IsNull => Arity::Exact(0),
            CompareOp::Between => Arity::Exact(2),
            CompareOp::In => Arity::AtLeast(0),
            _ => Arity::Exact(1),
        }
    }

    /// Returns true if this operator renders as `subject OP arg`.
    pub fn is_simple_binary(&self) -> bool {
        matches!(
            self,
            CompareOp::Lt
                | CompareOp::Lte
                | CompareOp::Gt
                | CompareOp::Gte
                | CompareOp::Eq
                | CompareOp::Ne
                | CompareOp::Like
        )
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sql_symbol())
    }
}

impl FromStr for CompareOp {
    type Err = CoolSqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim() {
            "<" => CompareOp::Lt,
            "<=" => CompareOp::Lte,
            ">" => CompareOp::Gt,
            ">=" => CompareOp::Gte,
            "=" | "==" => CompareOp::Eq,
            "!=" | "<>" => CompareOp::Ne,
            other => match other.to_ascii_uppercase().as_str() {
                "LIKE" => CompareOp::Like,
                "BETWEEN" => CompareOp::Between,
                "IN" => CompareOp::In,
                "ISNULL" | "IS NULL" => CompareOp::IsNull,
                _ => {
                    tracing::debug!(operator = s, "unknown comparison operator");
                    return Err(CoolSqlError::operator(format!("'{}'", s)));
                }
            },
        };
        Ok(op)
    }
}

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Modulo (%)
    Rem,
}

impl std::fmt::Display for ArithOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithOp::Add => write!(f, "+"),
            ArithOp::Sub => write!(f, "-"),
            ArithOp::Mul => write!(f, "*"),
            ArithOp::Div => write!(f, "/"),
            ArithOp::Rem => write!(f, "%"),
        }
    }
}

impl FromStr for ArithOp {
    type Err = CoolSqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(ArithOp::Add),
            "-" => Ok(ArithOp::Sub),
            "*" => Ok(ArithOp::Mul),
            "/" => Ok(ArithOp::Div),
            "%" => Ok(ArithOp::Rem),
            _ => {
                tracing::debug!(operator = s, "unknown arithmetic operator");
                Err(CoolSqlError::operator(format!("'{}'", s)))
            }
        }
    }
}

/// Logical operator between expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOp {
    And,
    Or,
}

impl std::fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogicalOp::And => write!(f, "AND"),
            LogicalOp::Or => write!(f, "OR"),
        }
    }
}

impl FromStr for LogicalOp {
    type Err = CoolSqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" | "&" => Ok(LogicalOp::And),
            "OR" | "|" => Ok(LogicalOp::Or),
            _ => {
                tracing::debug!(operator = s, "unknown logical operator");
                Err(CoolSqlError::operator(format!("'{}'", s)))
            }
        }
    }
}
