//! Core logger types and traits

#[macro_use]
mod level_table;

pub mod appender;
pub mod caller;
pub mod config;
pub mod error;
pub mod formatter;
pub mod global;
pub mod keys;
pub mod level;
pub mod logger;

pub use appender::Appender;
pub use caller::{caller_info, site_location, CallerResolver, StackResolver, UNKNOWN_CALLER};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use formatter::LineFormatter;
pub use keys::{FieldValue, KeyStyle, Keys};
pub use level::{Color, Level};
pub use logger::{Logger, LoggerBuilder, BASE_DEPTH};
