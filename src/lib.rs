//! # Timber
//!
//! A leveled, structured console logger.
//!
//! ## Features
//!
//! - **Levels**: Trace, Verbose, Debug, Info, Warning, Error, Critical, Fatal
//! - **Keys**: key-value context inherited by derived loggers
//! - **Caller locations**: every line names the `file:line` that logged it
//! - **Thread Safe**: loggers and the global level can be shared freely
//!
//! ```
//! use timber::keys;
//!
//! timber::with(&keys! { "thing" => "stuff" }).debug("test");
//! timber::info!("listening on port {}", 8080);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::ConsoleAppender;
    pub use crate::core::{
        Appender, CallerResolver, Color, FieldValue, KeyStyle, Keys, Level, LineFormatter,
        Logger, LoggerBuilder, LoggerConfig, LoggerError, Result, StackResolver, BASE_DEPTH,
    };
}

pub use appenders::ConsoleAppender;
pub use crate::core::global::*;
pub use crate::core::{
    caller_info, site_location, Appender, CallerResolver, Color, FieldValue, KeyStyle, Keys, Level,
    LineFormatter, Logger, LoggerBuilder, LoggerConfig, LoggerError, Result, StackResolver,
    BASE_DEPTH, UNKNOWN_CALLER,
};
