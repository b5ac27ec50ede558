//! # coolsql
//!
//! Build SQL predicate and arithmetic expressions as values instead of
//! concatenating strings, then render them to a SQL fragment plus the
//! ordered list of values to bind.
//!
//! ## Quick Example
//!
//! ```
//! use coolsql::prelude::*;
//!
//! let name = Field::new("name").unwrap();
//!
//! let condition = !name.clone().is_null() & name.like("%a%");
//! let (sql, params) = condition.compile();
//!
//! assert_eq!(sql, r#"(NOT ("name" IS NULL)) AND ("name" LIKE ?)"#);
//! assert_eq!(params, vec![Value::from("%a%")]);
//!
//! let query = format!("SELECT * FROM users WHERE {}", condition);
//! assert!(query.ends_with(r#"("name" LIKE ?)"#));
//! ```
//!
//! ## Inline vs. bound operands
//!
//! | Operand            | Rendered as           | Parameters |
//! |--------------------|-----------------------|------------|
//! | number             | `10`, `2.5`           | none       |
//! | [`Field`]          | `"age"`               | none       |
//! | expression         | its own SQL           | its own    |
//! | anything else      | placeholder (`?`)     | the value  |

pub mod ast;
pub mod config;
pub mod error;
pub mod transpiler;

pub use ast::builders::{self, Case, ExprOps};
pub use ast::{Expr, Field, Operand, Value};
pub use config::CompileConfig;
pub use error::{CoolSqlError, CoolSqlResult};
pub use transpiler::ToSql;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::config::CompileConfig;
    pub use crate::error::*;
    pub use crate::transpiler::{ParamContext, ToSql};
}
