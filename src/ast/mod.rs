pub mod builders;
pub mod expr;
pub mod field;
pub mod operand;
pub mod operators;
pub mod values;

pub use builders::{Case, ExprOps};
pub use expr::*;
pub use field::Field;
pub use operand::Operand;
pub use operators::*;
pub use values::*;
