//! SQL transpiler for expression trees.
//!
//! Every node renders itself through [`ToSql::to_sql_parameterized`],
//! appending bound values to a [`ParamContext`] in the order their
//! placeholders appear in the generated text.

mod expr;

#[cfg(test)]
mod tests;

use crate::ast::Value;
use crate::config::{CompileConfig, DEFAULT_PLACEHOLDER};

/// Context for parameterized rendering.
#[derive(Debug)]
pub struct ParamContext<'a> {
    /// Token written in place of each bound value
    placeholder: &'a str,
    /// Collected parameter values in order
    pub params: Vec<Value>,
}

impl<'a> ParamContext<'a> {
    pub fn new(placeholder: &'a str) -> Self {
        Self {
            placeholder,
            params: Vec::new(),
        }
    }

    /// Add a value and return the placeholder for it.
    pub fn add_param(&mut self, value: Value) -> String {
        self.params.push(value);
        self.placeholder.to_string()
    }

    pub fn into_params(self) -> Vec<Value> {
        self.params
    }
}

/// Trait for rendering nodes to parameterized SQL.
pub trait ToSql {
    /// Render this node, pushing its bound values onto `params`.
    fn to_sql_parameterized(&self, params: &mut ParamContext<'_>) -> String;

    /// Compile with the given placeholder token.
    fn compile_with(&self, placeholder: &str) -> (String, Vec<Value>) {
        let mut params = ParamContext::new(placeholder);
        let sql = self.to_sql_parameterized(&mut params);
        tracing::trace!(placeholder, params = params.params.len(), sql = %sql, "compiled expression");
        (sql, params.into_params())
    }

    /// Compile with `?` as the placeholder.
    fn compile(&self) -> (String, Vec<Value>) {
        self.compile_with(DEFAULT_PLACEHOLDER)
    }

    fn compile_config(&self, config: &CompileConfig) -> (String, Vec<Value>) {
        self.compile_with(&config.placeholder)
    }

    /// The bound values only.
    fn parameters(&self) -> Vec<Value> {
        self.compile().1
    }

    fn parameters_with(&self, placeholder: &str) -> Vec<Value> {
        self.compile_with(placeholder).1
    }

    /// The SQL text only, with `?` placeholders.
    fn to_sql(&self) -> String {
        self.compile().0
    }
}
