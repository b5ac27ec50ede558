//! Ergonomic builders for expressions.
//!
//! Named constructor functions, a fluent extension trait, the `Case`
//! builder and operator overloads.

pub mod case_when;
pub mod conditions;
pub mod ext;
mod ops;

pub use case_when::Case;
pub use conditions::*;
pub use ext::ExprOps;
