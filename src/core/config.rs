//! Logger configuration loaded from JSON
//!
//! ```
//! use timber::{Level, Logger, LoggerConfig};
//!
//! let config = LoggerConfig::from_json(
//!     r#"{ "level": "debug", "prefix": "db", "colors": false, "keys": { "pool": 4 } }"#,
//! )
//! .unwrap();
//! let logger = Logger::from_config(&config);
//! assert_eq!(logger.get_level(), Level::Debug);
//! ```

use super::error::{LoggerError, Result};
use super::keys::{KeyStyle, Keys};
use super::level::Level;
use super::logger::{Logger, LoggerBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Minimum level; absent means "follow the global level".
    pub level: Option<Level>,
    pub prefix: String,
    /// Extra frames skipped when resolving the caller.
    pub depth: usize,
    /// Absent means the feature default.
    pub colors: Option<bool>,
    pub keys: Keys,
    pub key_style: KeyStyle,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would break the one-line-per-call guarantee.
    pub fn validate(&self) -> Result<()> {
        let breaks_line = |text: &str| text.contains(['\n', '\r']);
        if breaks_line(&self.prefix) {
            return Err(LoggerError::config(
                "LoggerConfig",
                "prefix must not contain line breaks",
            ));
        }
        let style = &self.key_style;
        if breaks_line(&style.open) || breaks_line(&style.close) || breaks_line(&style.separator) {
            return Err(LoggerError::config(
                "LoggerConfig",
                "key_style must not contain line breaks",
            ));
        }
        Ok(())
    }

    pub fn builder(&self) -> LoggerBuilder {
        let mut builder = Logger::builder()
            .prefix(self.prefix.clone())
            .depth(self.depth)
            .keys(self.keys.clone())
            .key_style(self.key_style.clone());
        if let Some(level) = self.level {
            builder = builder.min_level(level);
        }
        if let Some(colors) = self.colors {
            builder = builder.colors(colors);
        }
        builder
    }
}

impl Logger {
    pub fn from_config(config: &LoggerConfig) -> Logger {
        config.builder().build()
    }
}
