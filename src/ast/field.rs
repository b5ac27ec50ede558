use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoolSqlError, CoolSqlResult};

/// A column reference. Always rendered as a double-quoted identifier.
///
/// # Example
///
/// ```
/// use coolsql::Field;
///
/// let age = Field::new("age").unwrap();
/// assert_eq!(age.to_string(), r#""age""#);
/// assert!(Field::new("name' OR 1=1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Field {
    name: String,
}

impl Field {
    /// Create a field, rejecting names that contain `'` or `"`.
    pub fn new(name: impl Into<String>) -> CoolSqlResult<Self> {
        let name = name.into();
        if name.contains(['\'', '"']) {
            tracing::debug!(name = %name, "rejected field name containing a quote");
            return Err(CoolSqlError::InvalidIdentifier(name));
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.name)
    }
}

impl FromStr for Field {
    type Err = CoolSqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::new(s)
    }
}

impl TryFrom<String> for Field {
    type Error = CoolSqlError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Field::new(name)
    }
}

impl From<Field> for String {
    fn from(field: Field) -> Self {
        field.name
    }
}
