//! Transpiler test modules.
//!
//! Tests are organized by category:
//! - `core`: comparisons, arithmetic, negation and AND/OR
//! - `case`: CASE expressions
//! - `properties`: laws that hold for every tree (ordering, double negation)

mod case;
mod core;

use crate::prelude::*;

pub(super) fn age() -> Field {
    Field::new("age").unwrap()
}

pub(super) fn name() -> Field {
    Field::new("name").unwrap()
}

pub(super) fn strings(values: &[&str]) -> Vec<Value> {
    values.iter().map(|s| Value::from(*s)).collect()
}
