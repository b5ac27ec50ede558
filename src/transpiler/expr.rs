use super::{ParamContext, ToSql};
use crate::ast::*;

impl ToSql for Field {
    /// Field names are never parameterized.
    fn to_sql_parameterized(&self, _params: &mut ParamContext<'_>) -> String {
        self.to_string()
    }
}

/// The single place that decides inline vs. bound.
impl ToSql for Operand {
    fn to_sql_parameterized(&self, params: &mut ParamContext<'_>) -> String {
        match self {
            Operand::Number(n) if n.is_finite() => n.to_string(),
            // NaN and infinities have no literal form
            Operand::Number(n) => params.add_param(Value::from(*n)),
            Operand::Field(field) => field.to_sql_parameterized(params),
            Operand::Expr(expr) => expr.to_sql_parameterized(params),
            Operand::Raw(value) => params.add_param(value.clone()),
        }
    }
}

/// Arithmetic operands that are themselves expressions get parenthesized.
fn grouped_operand(operand: &Operand, params: &mut ParamContext<'_>) -> String {
    match operand {
        Operand::Expr(expr) => format!("({})", expr.to_sql_parameterized(params)),
        other => other.to_sql_parameterized(params),
    }
}

/// Boolean operands of a comparison get parenthesized; values stay bare.
fn comparison_operand(operand: &Operand, params: &mut ParamContext<'_>) -> String {
    match operand {
        Operand::Expr(expr) if matches!(**expr, Expr::Not(_) | Expr::Combine(_) | Expr::Compare(_)) => {
            format!("({})", expr.to_sql_parameterized(params))
        }
        other => other.to_sql_parameterized(params),
    }
}

impl ToSql for Expr {
    fn to_sql_parameterized(&self, params: &mut ParamContext<'_>) -> String {
        match self {
            Expr::Not(negation) => negation.to_sql_parameterized(params),
            Expr::Combine(combine) => combine.to_sql_parameterized(params),
            Expr::Compare(cmp) => cmp.to_sql_parameterized(params),
            Expr::Arithmetic(arith) => arith.to_sql_parameterized(params),
            Expr::Case(case) => case.to_sql_parameterized(params),
        }
    }
}

impl ToSql for Negation {
    fn to_sql_parameterized(&self, params: &mut ParamContext<'_>) -> String {
        format!("NOT ({})", self.inner.to_sql_parameterized(params))
    }
}

impl ToSql for Combine {
    fn to_sql_parameterized(&self, params: &mut ParamContext<'_>) -> String {
        let left = self.left.to_sql_parameterized(params);
        let right = self.right.to_sql_parameterized(params);
        format!("({}) {} ({})", left, self.op, right)
    }
}

impl ToSql for Comparison {
    fn to_sql_parameterized(&self, params: &mut ParamContext<'_>) -> String {
        let subject = comparison_operand(&self.operand, params);
        let args: Vec<String> = self
            .args
            .iter()
            .map(|arg| comparison_operand(arg, params))
            .collect();

        match (self.op, args.as_slice()) {
            (CompareOp::IsNull, []) => format!("{} IS NULL", subject),
            (CompareOp::Between, [low, high]) => format!("{} BETWEEN {} AND {}", subject, low, high),
            (CompareOp::In, items) => format!("{} IN ({})", subject, items.join(", ")),
            (op, [arg]) if op.is_simple_binary() => format!("{} {} {}", subject, op, arg),
            (op, args) => unreachable!(
                "unsupported operator: {} with {} argument(s) passed construction",
                op,
                args.len()
            ),
        }
    }
}

impl ToSql for Arithmetic {
    fn to_sql_parameterized(&self, params: &mut ParamContext<'_>) -> String {
        let left = grouped_operand(&self.left, params);
        let right = grouped_operand(&self.right, params);
        format!("{} {} {}", left, self.op, right)
    }
}

impl ToSql for CaseEnd {
    fn to_sql_parameterized(&self, params: &mut ParamContext<'_>) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.clauses.len() + 2);

        if let Some(subject) = &self.subject {
            parts.push(subject.to_sql_parameterized(params));
        }

        for (condition, result) in &self.clauses {
            let condition = condition.to_sql_parameterized(params);
            let result = result.to_sql_parameterized(params);
            parts.push(format!("WHEN {} THEN {}", condition, result));
        }

        if let Some(default) = &self.default {
            parts.push(format!("ELSE {}", default.to_sql_parameterized(params)));
        }

        format!("CASE {} END", parts.join(" "))
    }
}

macro_rules! display_via_sql {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.to_sql())
                }
            }
        )*
    };
}

display_via_sql!(Expr, Negation, Combine, Comparison, Arithmetic, CaseEnd, Operand);
