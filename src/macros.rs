//! Logging macros for ergonomic log message formatting.
//!
//! Every level macro accepts either a format string, which logs through the
//! default logger, or a logger followed by a format string. Keys for a single
//! line go after the logger as `keys: <expr>`.
//!
//! # Examples
//!
//! ```
//! use timber::prelude::*;
//! use timber::{info, keys, warning};
//!
//! let logger = Logger::new();
//!
//! // Through the default logger
//! info!("Server started");
//!
//! // Through a specific logger, with format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With keys for this line only
//! warning!(logger, keys: keys! { "attempt" => 3 }, "Retrying {}", "upload");
//! ```

/// Build a [`Keys`](crate::Keys) set from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use timber::{keys, FieldValue};
///
/// let keys = keys! { "thing" => "stuff", "count" => 2, "gone" => FieldValue::Null };
/// assert_eq!(keys.len(), 3);
/// assert_eq!(keys.to_string(), "{ count: 2, thing: stuff }");
/// ```
#[macro_export]
macro_rules! keys {
    () => {
        $crate::Keys::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut keys = $crate::Keys::new();
        $( keys.insert($key, $value); )+
        keys
    }};
}

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use timber::prelude::*;
/// # let logger = Logger::new();
/// use timber::{keys, log};
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// log!(logger, Level::Debug, keys: keys! { "id" => 7 }, "Loaded");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, keys: $keys:expr, $($arg:tt)+) => {
        $logger.log_ex($level, Some(&$keys), format_args!($($arg)+))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use timber::prelude::*;
/// # let logger = Logger::builder().min_level(Level::Trace).build();
/// use timber::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf($crate::Level::Trace, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a verbose-level message.
#[macro_export]
macro_rules! verbose {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf($crate::Level::Verbose, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Verbose, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use timber::prelude::*;
/// # let logger = Logger::new();
/// use timber::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf($crate::Level::Debug, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use timber::prelude::*;
/// # let logger = Logger::new();
/// use timber::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf($crate::Level::Info, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use timber::prelude::*;
/// # let logger = Logger::new();
/// use timber::warning;
/// warning!(logger, "Low disk space");
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf($crate::Level::Warning, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use timber::prelude::*;
/// # let logger = Logger::new();
/// use timber::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf($crate::Level::Error, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf($crate::Level::Critical, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Critical, $($arg)+)
    };
}

/// Log a fatal-level message. This does not terminate the process.
///
/// # Examples
///
/// ```
/// # use timber::prelude::*;
/// # let logger = Logger::new();
/// use timber::fatal;
/// fatal!(logger, "Critical system failure");
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf($crate::Level::Fatal, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+)
    };
}
