//! Process-wide default logger and global minimum level
//!
//! The free functions here mirror the [`Logger`] methods and forward to one
//! lazily created default logger. They call the emission function directly,
//! so caller locations resolve exactly as they do for instance methods.
//!
//! The global level is held in its own lock. Loggers that never had a level
//! pinned (the default logger and anything built without `min_level`) read it
//! on every call; loggers derived with `with` keep the level they saw at
//! derivation time.

use super::error::{LoggerError, Result};
use super::keys::Keys;
use super::level::Level;
use super::logger::{Concat, Logger};
use parking_lot::{const_rwlock, RwLock};
use std::fmt;
use std::panic::Location;
use std::sync::OnceLock;

static LEVEL: RwLock<Level> = const_rwlock(Level::Trace);
static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The shared default logger, created on first use.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::new)
}

/// Install `logger` as the default logger.
///
/// Fails once the default logger exists, whether it was installed here or
/// created on first use by an earlier global call.
pub fn set_default_logger(logger: Logger) -> Result<()> {
    DEFAULT_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::config("default logger", "already initialized"))
}

/// Set the minimum level for every logger that follows the global level.
///
/// Loggers already derived with `with` keep the level they snapshotted.
pub fn set_level(level: Level) {
    *LEVEL.write() = level;
}

/// Current global minimum level.
pub fn get_level() -> Level {
    *LEVEL.read()
}

pub fn enabled(level: Level) -> bool {
    default_logger().enabled(level)
}

/// Derive a logger from the default logger with extra keys.
pub fn with(keys: &Keys) -> Logger {
    default_logger().with(keys)
}

/// Set the prefix of the default logger.
pub fn prefix(text: impl Into<String>) -> &'static Logger {
    default_logger().prefix(text)
}

/// Change the extra frame count of the default logger.
pub fn set_depth(extra: usize) -> &'static Logger {
    default_logger().set_depth(extra)
}

/// Write a raw entry through the default logger. Values are written back to
/// back with no separator.
#[track_caller]
pub fn log(level: Level, values: &[&dyn fmt::Display]) {
    default_logger().emit(level, None, Concat(values), Location::caller());
}

#[track_caller]
pub fn logf(level: Level, args: fmt::Arguments<'_>) {
    default_logger().emit(level, None, args, Location::caller());
}

#[track_caller]
pub fn log_ex(level: Level, keys: Option<&Keys>, args: fmt::Arguments<'_>) {
    default_logger().emit(level, keys, args, Location::caller());
}

macro_rules! define_global_functions {
    ($( ($variant:ident, $ordinal:literal, $tag:literal, $fg:expr, $bg:expr, $plain:ident, $formatted:ident, $keyed:ident) ),* $(,)?) => {
        $(
            #[doc = concat!("Write `message` at [`Level::", stringify!($variant), "`] through the default logger.")]
            #[track_caller]
            pub fn $plain(message: impl fmt::Display) {
                default_logger().emit(Level::$variant, None, message, Location::caller());
            }

            #[doc = concat!("Write a formatted message at [`Level::", stringify!($variant), "`] through the default logger.")]
            #[track_caller]
            pub fn $formatted(args: fmt::Arguments<'_>) {
                default_logger().emit(Level::$variant, None, args, Location::caller());
            }

            #[doc = concat!("Write a formatted message at [`Level::", stringify!($variant), "`] through the default logger, adding `keys` to this line only.")]
            #[track_caller]
            pub fn $keyed(keys: &Keys, args: fmt::Arguments<'_>) {
                default_logger().emit(Level::$variant, Some(keys), args, Location::caller());
            }
        )*
    };
}

for_each_level!(define_global_functions);
