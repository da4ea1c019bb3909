//! Appender trait for log output destinations

use super::error::Result;

/// Destination for finished log lines.
///
/// `append` receives one complete line without its trailing newline and must
/// write it as a single unit, so concurrent callers never interleave.
pub trait Appender: Send + Sync {
    fn append(&self, line: &str) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
