//! Console appender implementation

use crate::core::{Appender, LoggerError, Result};
use std::io::Write;

/// Writes each line to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, line: &str) -> Result<()> {
        // Holding the lock for the whole line keeps concurrent lines apart.
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", line)
            .map_err(|e| LoggerError::io_operation("writing to stdout", "line was not written", e))
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
