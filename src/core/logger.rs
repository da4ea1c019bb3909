//! Main logger implementation

use super::{
    appender::Appender,
    caller::{site_location, CallerResolver, StackResolver, UNKNOWN_CALLER},
    formatter::LineFormatter,
    global,
    keys::{KeyStyle, Keys},
    level::Level,
};
use crate::appenders::ConsoleAppender;
use parking_lot::RwLock;
use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Frames between the resolver and the user's call site: the resolver
/// itself, the emission function and the public logging method.
pub const BASE_DEPTH: usize = 3;

/// A leveled logger carrying keys and an optional prefix
///
/// Loggers are cheap to derive with [`Logger::with`]. A derived logger owns
/// a copy of its parent's keys, so neither side ever observes the other's
/// changes.
///
/// Caller locations are read from the call stack. When the binary has no
/// debug info they come from the `#[track_caller]` location of the logging
/// call instead. That location ignores extra depth, so wrapper helpers that
/// should be located by their own callers in release builds need
/// `#[track_caller]` as well.
///
/// # Example
///
/// ```
/// use timber::{keys, Level, Logger};
///
/// let logger = Logger::builder().min_level(Level::Debug).build();
/// let request = logger.with(&keys! { "thing" => "stuff" });
/// request.debug("test");
/// ```
pub struct Logger {
    stack_depth: AtomicUsize,
    keys: Keys,
    prefix: RwLock<String>,
    /// `None` follows the global level.
    level: RwLock<Option<Level>>,
    formatter: Arc<LineFormatter>,
    appender: Arc<dyn Appender>,
    resolver: Arc<dyn CallerResolver>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Change the number of extra frames skipped when looking up the
    /// caller, for code that wraps the logger in helpers of its own.
    pub fn set_depth(&self, extra: usize) -> &Self {
        self.stack_depth
            .store(BASE_DEPTH.saturating_add(extra), Ordering::Relaxed);
        self
    }

    pub fn depth(&self) -> usize {
        self.stack_depth.load(Ordering::Relaxed)
    }

    /// Derive a logger whose keys are this logger's keys with `keys` written
    /// on top.
    ///
    /// Depth and prefix are copied. The level is snapshotted: the child keeps
    /// the effective level this logger had at the time of the call, even if
    /// that level came from the global setting.
    #[must_use]
    pub fn with(&self, keys: &Keys) -> Logger {
        Logger {
            stack_depth: AtomicUsize::new(self.depth()),
            keys: self.keys.derive(keys),
            prefix: RwLock::new(self.prefix.read().clone()),
            level: RwLock::new(Some(self.get_level())),
            formatter: Arc::clone(&self.formatter),
            appender: Arc::clone(&self.appender),
            resolver: Arc::clone(&self.resolver),
        }
    }

    /// Set the short string printed before the caller location.
    pub fn prefix(&self, text: impl Into<String>) -> &Self {
        *self.prefix.write() = text.into();
        self
    }

    pub fn get_prefix(&self) -> String {
        self.prefix.read().clone()
    }

    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Pin this logger's minimum level, detaching it from the global level.
    pub fn set_level(&self, level: Level) {
        *self.level.write() = Some(level);
    }

    /// Effective minimum level: this logger's own, else the global one.
    pub fn get_level(&self) -> Level {
        let own = *self.level.read();
        own.unwrap_or_else(global::get_level)
    }

    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level.is_at_least(self.get_level())
    }

    /// Write a raw entry, concatenating the `Display` output of `values`.
    ///
    /// Values are written back to back. No separator is inserted, even
    /// between two numbers, so pass `&' '` where one is wanted.
    #[track_caller]
    pub fn log(&self, level: Level, values: &[&dyn fmt::Display]) {
        self.emit(level, None, Concat(values), Location::caller());
    }

    /// Write a formatted entry, usually built with `format_args!`.
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(level, None, args, Location::caller());
    }

    /// Write a formatted entry with keys that apply to this line only.
    #[track_caller]
    pub fn log_ex(&self, level: Level, keys: Option<&Keys>, args: fmt::Arguments<'_>) {
        self.emit(level, keys, args, Location::caller());
    }

    pub fn flush(&self) -> super::error::Result<()> {
        self.appender.flush()
    }

    /// Every public logging entry point calls this directly, so that the
    /// resolver always sits exactly `BASE_DEPTH` frames below the caller.
    ///
    /// `site` is the entry point's `#[track_caller]` location. It is printed
    /// when the resolver cannot name the frame, which is the case for every
    /// frame of a binary built without debug info.
    #[inline(never)]
    pub(crate) fn emit<M: fmt::Display>(
        &self,
        level: Level,
        keys: Option<&Keys>,
        message: M,
        site: &'static Location<'static>,
    ) {
        if !self.enabled(level) {
            return;
        }

        let keys = Keys::render(keys, &self.keys, self.formatter.key_style());
        let mut location = self.resolver.resolve(self.depth());
        if location == UNKNOWN_CALLER {
            location = site_location(site);
        }
        let message = message.to_string();
        let line = {
            let prefix = self.prefix.read();
            self.formatter
                .format(level, &prefix, &location, &keys, &message)
        };

        if let Err(e) = self.appender.append(&line) {
            eprintln!(
                "[LOGGER ERROR] Appender '{}' failed: {}",
                self.appender.name(),
                e
            );
        }
    }
}

macro_rules! impl_level_methods {
    ($( ($variant:ident, $ordinal:literal, $tag:literal, $fg:expr, $bg:expr, $plain:ident, $formatted:ident, $keyed:ident) ),* $(,)?) => {
        impl Logger {
            $(
                #[doc = concat!("Write `message` at [`Level::", stringify!($variant), "`].")]
                #[track_caller]
                pub fn $plain(&self, message: impl fmt::Display) {
                    self.emit(Level::$variant, None, message, Location::caller());
                }

                #[doc = concat!("Write a formatted message at [`Level::", stringify!($variant), "`].")]
                #[track_caller]
                pub fn $formatted(&self, args: fmt::Arguments<'_>) {
                    self.emit(Level::$variant, None, args, Location::caller());
                }

                #[doc = concat!("Write a formatted message at [`Level::", stringify!($variant), "`], adding `keys` to this line only.")]
                #[track_caller]
                pub fn $keyed(&self, keys: &Keys, args: fmt::Arguments<'_>) {
                    self.emit(Level::$variant, Some(keys), args, Location::caller());
                }
            )*
        }
    };
}

for_each_level!(impl_level_methods);

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("stack_depth", &self.depth())
            .field("keys", &self.keys)
            .field("prefix", &*self.prefix.read())
            .field("level", &*self.level.read())
            .field("appender", &self.appender.name())
            .finish()
    }
}

/// Displays a list of values back to back.
pub(crate) struct Concat<'a>(pub(crate) &'a [&'a dyn fmt::Display]);

impl fmt::Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.0 {
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use timber::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(Level::Debug)
///     .prefix("worker-1")
///     .key("service", "api")
///     .colors(false)
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: Option<Level>,
    prefix: String,
    depth: usize,
    keys: Keys,
    use_colors: Option<bool>,
    key_style: KeyStyle,
    appender: Option<Arc<dyn Appender>>,
    resolver: Option<Arc<dyn CallerResolver>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: None,
            prefix: String::new(),
            depth: 0,
            keys: Keys::new(),
            use_colors: None,
            key_style: KeyStyle::default(),
            appender: None,
            resolver: None,
        }
    }

    /// Pin the minimum level. Without this the logger follows the global
    /// level.
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Extra frames to skip on top of [`BASE_DEPTH`]
    #[must_use = "builder methods return a new value"]
    pub fn depth(mut self, extra: usize) -> Self {
        self.depth = extra;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn keys(mut self, keys: Keys) -> Self {
        self.keys = self.keys.derive(&keys);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn key<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<super::keys::FieldValue>,
    {
        self.keys.insert(key, value);
        self
    }

    /// Enable or disable ANSI colors. Defaults to on when the `console`
    /// feature is enabled.
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.use_colors = Some(use_colors);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn key_style(mut self, style: KeyStyle) -> Self {
        self.key_style = style;
        self
    }

    /// Replace the default stdout appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Arc::new(appender));
        self
    }

    /// Replace the default stack-walking caller resolver
    #[must_use = "builder methods return a new value"]
    pub fn resolver<R: CallerResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let formatter = match self.use_colors {
            Some(use_colors) => LineFormatter::with_colors(use_colors),
            None => LineFormatter::new(),
        }
        .with_key_style(self.key_style);

        Logger {
            stack_depth: AtomicUsize::new(BASE_DEPTH.saturating_add(self.depth)),
            keys: self.keys,
            prefix: RwLock::new(self.prefix),
            level: RwLock::new(self.min_level),
            formatter: Arc::new(formatter),
            appender: self
                .appender
                .unwrap_or_else(|| Arc::new(ConsoleAppender::new())),
            resolver: self.resolver.unwrap_or_else(|| Arc::new(StackResolver)),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use timber::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(Level::Warning)
    ///     .build();
    /// assert_eq!(logger.get_level(), Level::Warning);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
