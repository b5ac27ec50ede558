//! CASE WHEN expression builder.

use crate::ast::{CaseEnd, Expr, Field, Operand};

/// Builder for CASE expressions.
///
/// Clauses are appended with [`when`](Case::when); the builder is sealed
/// into a [`CaseEnd`] by [`else_`](Case::else_) or [`end`](Case::end).
#[derive(Debug, Clone, Default)]
pub struct Case {
    subject: Option<Field>,
    when_clauses: Vec<(Operand, Operand)>,
}

impl Case {
    /// CASE WHEN ... (searched form)
    pub fn new() -> Self {
        Self::default()
    }

    /// CASE "field" WHEN ... (simple form)
    pub fn with_subject(field: Field) -> Self {
        Self {
            subject: Some(field),
            when_clauses: Vec::new(),
        }
    }

    /// Add a WHEN clause
    pub fn when(mut self, condition: impl Into<Operand>, result: impl Into<Operand>) -> Self {
        self.when_clauses.push((condition.into(), result.into()));
        self
    }

    /// Add the ELSE clause and finalize
    pub fn else_(self, default: impl Into<Operand>) -> CaseEnd {
        CaseEnd {
            subject: self.subject,
            clauses: self.when_clauses,
            default: Some(default.into()),
        }
    }

    /// Finalize without an ELSE clause
    pub fn end(self) -> CaseEnd {
        CaseEnd {
            subject: self.subject,
            clauses: self.when_clauses,
            default: None,
        }
    }
}

impl From<Case> for CaseEnd {
    fn from(builder: Case) -> Self {
        builder.end()
    }
}

impl From<Case> for Expr {
    fn from(builder: Case) -> Self {
        Expr::Case(builder.end())
    }
}

impl From<Case> for Operand {
    fn from(builder: Case) -> Self {
        Expr::from(builder).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_accumulates_in_order() {
        let case = Case::new().when(1, "one").when(2, "two").else_(0);
        assert!(case.subject().is_none());
        assert_eq!(case.clauses().len(), 2);
        assert_eq!(case.clauses()[0].0, Operand::from(1));
        assert_eq!(case.clauses()[1].1, Operand::from("two"));
        assert_eq!(case.else_value(), Some(&Operand::from(0)));
    }

    #[test]
    fn test_case_end_without_default() {
        let age = Field::new("age").unwrap();
        let case = Case::with_subject(age.clone()).when(18, 1).end();
        assert_eq!(case.subject(), Some(&age));
        assert!(case.else_value().is_none());
    }
}
