//! CASE expression tests.

use pretty_assertions::assert_eq;

use super::{age, name, strings};
use crate::prelude::*;

#[test]
fn test_searched_case() {
    let case = Case::new().when(1, 0).else_(1);
    assert_eq!(case.compile(), ("CASE WHEN 1 THEN 0 ELSE 1 END".to_string(), vec![]));
}

#[test]
fn test_simple_case_with_subject() {
    let case = Case::with_subject(age()).when(18, 1).else_(0);
    assert_eq!(
        case.compile(),
        (r#"CASE "age" WHEN 18 THEN 1 ELSE 0 END"#.to_string(), vec![])
    );
}

#[test]
fn test_condition_is_compiled_expression() {
    let case = Case::with_subject(age()).when(age().gte(18), 1).else_(0);
    assert_eq!(
        case.compile(),
        (r#"CASE "age" WHEN "age" >= 18 THEN 1 ELSE 0 END"#.to_string(), vec![])
    );
}

#[test]
fn test_case_parameters_in_clause_order() {
    let case = Case::new()
        .when(age().lt(18), "minor")
        .when(name().like("%admin%"), "staff")
        .else_("adult");
    assert_eq!(
        case.compile(),
        (
            r#"CASE WHEN "age" < 18 THEN ? WHEN "name" LIKE ? THEN ? ELSE ? END"#.to_string(),
            strings(&["minor", "%admin%", "staff", "adult"]),
        )
    );
}

#[test]
fn test_case_without_default() {
    let case = Case::new().when(name().is_null(), "anonymous").end();
    assert_eq!(
        case.compile(),
        (
            r#"CASE WHEN "name" IS NULL THEN ? END"#.to_string(),
            strings(&["anonymous"]),
        )
    );

    let expr: Expr = Case::new().when(1, 2).into();
    assert_eq!(expr.to_sql(), "CASE WHEN 1 THEN 2 END");
}

#[test]
fn test_default_uses_same_placeholder() {
    let case = Case::new().when(age().gt(1), "a").else_("b");
    assert_eq!(case.compile_with("%s").0, r#"CASE WHEN "age" > 1 THEN %s ELSE %s END"#);
}

#[test]
fn test_case_as_operand() {
    let bracket = Case::new().when(age().lt(18), 0).else_(1);
    let score = Field::new("score").unwrap();

    assert_eq!(
        score.clone().eq(bracket.clone()).to_sql(),
        r#""score" = CASE WHEN "age" < 18 THEN 0 ELSE 1 END"#
    );
    assert_eq!(
        (score + bracket.clone()).to_sql(),
        r#""score" + (CASE WHEN "age" < 18 THEN 0 ELSE 1 END)"#
    );
    assert_eq!(
        (bracket & name().is_null()).to_sql(),
        r#"(CASE WHEN "age" < 18 THEN 0 ELSE 1 END) AND ("name" IS NULL)"#
    );
}
