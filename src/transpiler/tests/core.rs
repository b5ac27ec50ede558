//! Core transpiler tests (comparisons, arithmetic, boolean combination).

use pretty_assertions::assert_eq;

use super::{age, name, strings};
use crate::builders::{self, combine, compare};
use crate::prelude::*;

fn check(expr: impl ToSql, sql: &str, params: Vec<Value>) {
    assert_eq!(expr.compile(), (sql.to_string(), params));
}

#[test]
fn test_comparisons() {
    check(age().gt(10), r#""age" > 10"#, vec![]);
    check(age().gte(10), r#""age" >= 10"#, vec![]);
    check(age().lt(10), r#""age" < 10"#, vec![]);
    check(age().lte(10), r#""age" <= 10"#, vec![]);
    check(age().eq(10), r#""age" = 10"#, vec![]);
    check(age().ne(10), r#""age" <> 10"#, vec![]);
}

#[test]
fn test_arithmetic_then_compare() {
    check((age() + 10).eq(20), r#""age" + 10 = 20"#, vec![]);
    check((age() - 10).eq(20), r#""age" - 10 = 20"#, vec![]);
    check((age() * 10).eq(20), r#""age" * 10 = 20"#, vec![]);
    check((age() / 10).eq(20), r#""age" / 10 = 20"#, vec![]);
    check((age() % 10).eq(20), r#""age" % 10 = 20"#, vec![]);
}

#[test]
fn test_number_on_the_left() {
    check((10 + age()).eq(20), r#"10 + "age" = 20"#, vec![]);
    check((10 - age()).eq(20), r#"10 - "age" = 20"#, vec![]);
    check((10 * age()).eq(20), r#"10 * "age" = 20"#, vec![]);
    check((10 / age()).eq(20), r#"10 / "age" = 20"#, vec![]);
    check((10 % age()).eq(20), r#"10 % "age" = 20"#, vec![]);
    check((2.5 * age()).gt(1), r#"2.5 * "age" > 1"#, vec![]);
}

#[test]
fn test_nested_arithmetic_is_parenthesized() {
    check(((age() + 10) / 10).eq(20), r#"("age" + 10) / 10 = 20"#, vec![]);
    check(
        ((age() - 10) / (age() + 10)).eq(20),
        r#"("age" - 10) / ("age" + 10) = 20"#,
        vec![],
    );
    check(age().plus(1).times(2), r#"("age" + 1) * 2"#, vec![]);
}

#[test]
fn test_boolean_operands_of_a_comparison_are_parenthesized() {
    check(
        builders::eq(age().gt(1) | age().lt(0), true),
        r#"(("age" > 1) OR ("age" < 0)) = ?"#,
        vec![Value::Bool(true)],
    );
    check(builders::ne(!age().gt(1), false), r#"(NOT ("age" > 1)) <> ?"#, vec![Value::Bool(false)]);
    check(name().eq(age().gt(1)), r#""name" = ("age" > 1)"#, vec![]);
    check(
        builders::is_in(age().lt(5), [true]),
        r#"("age" < 5) IN (?)"#,
        vec![Value::Array(vec![Value::Bool(true)])],
    );
    check(builders::is_null(age().eq("x")), r#"("age" = ?) IS NULL"#, strings(&["x"]));
}

#[test]
fn test_numeric_widths_render_inline() {
    check(age().gt(5usize), r#""age" > 5"#, vec![]);
    check(age().lte(7u8), r#""age" <= 7"#, vec![]);
    check(age().eq(u64::MAX), r#""age" = 18446744073709551615"#, vec![]);
    check(age().gt(0.1f32), r#""age" > 0.1"#, vec![]);
}

#[test]
fn test_negation() {
    check(!age().gt(10), r#"NOT ("age" > 10)"#, vec![]);
    check(!!age().gt(10), r#""age" > 10"#, vec![]);
    check(
        !(age().gt(1) & age().lt(5)),
        r#"NOT (("age" > 1) AND ("age" < 5))"#,
        vec![],
    );
}

#[test]
fn test_range_pattern_null() {
    check(age().between(18, 24), r#""age" BETWEEN 18 AND 24"#, vec![]);
    check(name().like("%a%"), r#""name" LIKE ?"#, strings(&["%a%"]));
    check(name().is_null(), r#""name" IS NULL"#, vec![]);
}

#[test]
fn test_and_or() {
    check(
        !name().is_null() & name().like("%a%"),
        r#"(NOT ("name" IS NULL)) AND ("name" LIKE ?)"#,
        strings(&["%a%"]),
    );
    check(
        name().is_null() | age().between(0, 18),
        r#"("name" IS NULL) OR ("age" BETWEEN 0 AND 18)"#,
        vec![],
    );
    check(
        (age().gt(1) & age().lt(5)) | name().is_null(),
        r#"(("age" > 1) AND ("age" < 5)) OR ("name" IS NULL)"#,
        vec![],
    );
}

#[test]
fn test_in_binds_list_as_one_parameter() {
    check(
        age().is_in(vec![10, 20, 30]),
        r#""age" IN (?)"#,
        vec![Value::from(vec![10, 20, 30])],
    );
    check(
        age().in_list([Operand::from(1), Operand::from("x"), Operand::from(3)]),
        r#""age" IN (1, ?, 3)"#,
        strings(&["x"]),
    );
    check(age().in_list(Vec::<i64>::new()), r#""age" IN ()"#, vec![]);
}

#[test]
fn test_raw_values_are_bound() {
    let active = Field::new("active").unwrap();
    check(active.eq(true), r#""active" = ?"#, vec![Value::Bool(true)]);

    let born = Field::new("born").unwrap();
    let date = chrono::NaiveDate::from_ymd_opt(2000, 1, 31).unwrap();
    check(born.gte(date), r#""born" >= ?"#, vec![Value::Date(date)]);

    check(name().eq(None::<&str>), r#""name" = ?"#, vec![Value::Null]);
}

#[test]
fn test_float_literals() {
    check(age().gt(2.5), r#""age" > 2.5"#, vec![]);
    check(age().eq(10.0), r#""age" = 10.0"#, vec![]);

    let (sql, params) = age().gt(f64::NAN).compile();
    assert_eq!(sql, r#""age" > ?"#);
    assert!(matches!(params.as_slice(), [Value::Float(n)] if n.is_nan()));
}

#[test]
fn test_field_to_field() {
    check(age().lt(Field::new("limit").unwrap()), r#""age" < "limit""#, vec![]);
}

#[test]
fn test_custom_placeholder() {
    let expr = name().like("%a%") & age().between("lo", "hi");
    assert_eq!(
        expr.compile_with("%s"),
        (
            r#"("name" LIKE %s) AND ("age" BETWEEN %s AND %s)"#.to_string(),
            strings(&["%a%", "lo", "hi"]),
        )
    );

    let config = CompileConfig::new("$?").unwrap();
    assert_eq!(expr.compile_config(&config).0, r#"("name" LIKE $?) AND ("age" BETWEEN $? AND $?)"#);
}

#[test]
fn test_text_view_and_parameters_agree_with_compile() {
    let expr = (age() - 18) / 100;
    assert_eq!(expr.compile(), (expr.to_string(), expr.parameters()));

    let expr = name().like("%a%") | age().eq("x");
    assert_eq!(expr.compile(), (format!("{}", expr), expr.parameters()));
    assert_eq!(expr.to_sql(), expr.to_string());
    assert_eq!(expr.parameters_with("%s"), strings(&["%a%", "x"]));
}

#[test]
fn test_combine_rejects_non_expressions() {
    let err = combine(LogicalOp::And, 0, age().lt(80)).unwrap_err();
    assert!(matches!(err, CoolSqlError::InvalidCombination { .. }));

    let err = combine(LogicalOp::Or, 0, age().lt(80)).unwrap_err();
    assert!(matches!(err, CoolSqlError::InvalidCombination { .. }));

    let err = combine(LogicalOp::And, age().lt(80), name()).unwrap_err();
    assert!(matches!(err, CoolSqlError::InvalidCombination { left: "expression", right: "field" }));

    let expr = combine(LogicalOp::Or, age().lt(1), age() + 1).unwrap();
    check(expr, r#"("age" < 1) OR ("age" + 1)"#, vec![]);
}

#[test]
fn test_named_constructors() {
    check(builders::gt(age(), 10), r#""age" > 10"#, vec![]);
    check(
        builders::and(builders::lt(age(), 5), builders::not(builders::is_null(name()))),
        r#"("age" < 5) AND (NOT ("name" IS NULL))"#,
        vec![],
    );
    check(builders::arith(age(), ArithOp::Rem, 2), r#""age" % 2"#, vec![]);

    let operator: CompareOp = "BETWEEN".parse().unwrap();
    check(compare(age(), operator, [18, 24]).unwrap(), r#""age" BETWEEN 18 AND 24"#, vec![]);

    let err = compare(age(), CompareOp::Between, [18]).unwrap_err();
    assert!(matches!(err, CoolSqlError::UnsupportedOperator(_)));
}
