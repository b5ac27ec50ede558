//! Compile configuration.
//!
//! The only option is the placeholder token written in place of each
//! bound parameter. It can be loaded from a TOML file such as:
//!
//! ```toml
//! placeholder = "%s"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CoolSqlError, CoolSqlResult};

/// Placeholder used when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileConfig {
    pub placeholder: String,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl CompileConfig {
    pub fn new(placeholder: impl Into<String>) -> CoolSqlResult<Self> {
        let config = Self {
            placeholder: placeholder.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> CoolSqlResult<Self> {
        let config: CompileConfig =
            toml::from_str(content).map_err(|e| CoolSqlError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> CoolSqlResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded compile config");
        Self::from_toml(&content)
    }

    fn validate(&self) -> CoolSqlResult<()> {
        if self.placeholder.is_empty() {
            return Err(CoolSqlError::Config("placeholder cannot be empty".to_string()));
        }
        Ok(())
    }
}
